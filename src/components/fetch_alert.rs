//! Inline alerts shared by the data views.

use leptos::prelude::*;

/// Blocking failure: the view has nothing to show.
#[component]
pub fn FetchError(message: String) -> impl IntoView {
    view! { <div class="alert alert--error" role="alert">{message}</div> }
}

/// Partial response: rendered above content that did arrive.
#[component]
pub fn FetchWarning(message: Option<String>) -> impl IntoView {
    message.map(|message| view! { <div class="alert alert--warning" role="status">{message}</div> })
}
