//! PageFrame, the root wrapper for every page rendered inside a tab.
//!
//! Sets `id` and `data-page-category` on the root element and renders the
//! standard `page__header` with title, optional subtitle and action slot.

use super::page_standard::*;
use leptos::prelude::*;

#[component]
pub fn PageFrame(
    /// HTML id in format `{entity}--{category}`.
    page_id: &'static str,
    /// One of the PAGE_CAT_* constants from `page_standard`.
    category: &'static str,
    title: &'static str,
    #[prop(optional)] subtitle: Option<&'static str>,
    /// Buttons on the right side of the header.
    #[prop(optional, into)]
    actions: ViewFn,
    children: Children,
) -> impl IntoView {
    debug_assert!(is_valid_page_id(page_id), "bad page id {page_id}");

    let class = match category {
        PAGE_CAT_DASHBOARD => "page page--dashboard",
        PAGE_CAT_SYSTEM => "page page--system",
        _ => "page",
    };

    view! {
        <div id=page_id class=class data-page-category=category>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">{title}</h1>
                    {subtitle.map(|s| view! { <p class="page__subtitle">{s}</p> })}
                </div>
                <div class="page__header-right">{actions.run()}</div>
            </div>
            {children()}
        </div>
    }
}
