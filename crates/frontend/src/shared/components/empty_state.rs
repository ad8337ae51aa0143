use leptos::prelude::*;
use thaw::Spinner;

#[component]
pub fn EmptyState(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div class="empty-state">
            <p class="empty-state__message">{message}</p>
        </div>
    }
}

#[component]
pub fn LoadingState() -> impl IntoView {
    view! {
        <div class="loading-state">
            <Spinner />
        </div>
    }
}

/// Inline error above a form; renders nothing without a message.
#[component]
pub fn FormError(#[prop(into)] message: Signal<Option<String>>) -> impl IntoView {
    view! {
        <Show when=move || message.get().is_some()>
            <div class="alert alert--error">
                {move || message.get().unwrap_or_default()}
            </div>
        </Show>
    }
}
