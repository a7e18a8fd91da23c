use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="not-found">
            <h1>"Page not found"</h1>
            <p class="muted">"The page you requested does not exist."</p>
            <A href="/">"Back to dashboard"</A>
        </div>
    }
}
