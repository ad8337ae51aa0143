use crate::layout::tabs::tab_label_for_key;
use leptos::prelude::Effect;
use leptos::prelude::*;
use std::collections::HashMap;
use web_sys::window;

/// Query parameter that mirrors the active page.
pub const PAGE_PARAM: &str = "page";

/// Page opened when the URL names none.
pub const HOME_PAGE: &str = "d400_finance_overview";

#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub opened: RwSignal<Vec<Tab>>,
    pub active: RwSignal<Option<String>>,
    pub left_open: RwSignal<bool>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            opened: RwSignal::new(vec![]),
            active: RwSignal::new(None),
            left_open: RwSignal::new(true),
        }
    }

    /// Opens the page named in `?page=` (or the dashboard) and keeps the URL
    /// in sync with the active tab from then on.
    pub fn init_router_integration(&self) {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        let initial = page_from_query(&search).unwrap_or_else(|| HOME_PAGE.to_string());
        self.open_page(&initial);

        let this = *self;
        Effect::new(move |_| {
            if let Some(active_key) = this.active.get() {
                let new_url = page_query(&active_key);

                let current_search = window()
                    .and_then(|w| w.location().search().ok())
                    .unwrap_or_default();

                if current_search != new_url {
                    if let Some(w) = window() {
                        if let Ok(history) = w.history() {
                            let _ = history.replace_state_with_url(
                                &wasm_bindgen::JsValue::NULL,
                                "",
                                Some(&new_url),
                            );
                        }
                    }
                }
            }
        });
    }

    /// Opens a known page using its registered label. Unknown keys are ignored.
    pub fn open_page(&self, key: &str) {
        match tab_label_for_key(key) {
            Some(title) => self.open_tab(key, title),
            None => log::warn!("Ignoring unknown page '{}'", key),
        }
    }

    pub fn open_tab(&self, key: &str, title: &str) {
        log::debug!("open_tab: key='{}'", key);
        let exists = self
            .opened
            .with_untracked(|tabs| tabs.iter().any(|tab| tab.key == key));
        if !exists {
            let tab = Tab {
                key: key.to_string(),
                title: title.to_string(),
            };
            self.opened.update(|tabs| tabs.push(tab));
        }
        self.activate_tab(key);
    }

    pub fn activate_tab(&self, key: &str) {
        self.active.set(Some(key.to_string()));
    }

    pub fn close_tab(&self, key: &str) {
        log::debug!("close_tab: key='{}'", key);
        let active = self.active.get_untracked();
        self.opened.update(|tabs| tabs.retain(|tab| tab.key != key));
        if active.as_deref() == Some(key) {
            let next_active = self
                .opened
                .with_untracked(|tabs| tabs.last().map(|t| t.key.clone()));
            self.active.set(next_active);
        }
    }

    pub fn toggle_left(&self) {
        self.left_open.update(|val| *val = !*val);
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tab {
    pub key: String,
    pub title: String,
}

/// Page key from a `location.search` string, if it names a known page.
pub fn page_from_query(search: &str) -> Option<String> {
    let params: HashMap<String, String> =
        serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
    params
        .get(PAGE_PARAM)
        .filter(|key| tab_label_for_key(key).is_some())
        .cloned()
}

/// `?page=<key>` for `history.replaceState`.
pub fn page_query(key: &str) -> String {
    let query = serde_qs::to_string(&HashMap::from([(PAGE_PARAM, key)])).unwrap_or_default();
    format!("?{}", query)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_known_page() {
        assert_eq!(
            page_from_query("?page=a003_transaction").as_deref(),
            Some("a003_transaction")
        );
    }

    #[test]
    fn ignores_unknown_or_missing_page() {
        assert_eq!(page_from_query("?page=p900_sales_register"), None);
        assert_eq!(page_from_query(""), None);
        assert_eq!(page_from_query("?other=1"), None);
    }

    #[test]
    fn query_round_trips() {
        let query = page_query("a005_investment");
        assert_eq!(query, "?page=a005_investment");
        assert_eq!(page_from_query(&query).as_deref(), Some("a005_investment"));
    }
}
