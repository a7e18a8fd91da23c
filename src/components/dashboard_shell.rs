//! Signed-in page frame: greeting, section navigation, logout.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::logout_button::LogoutButton;
use crate::state::session::{Session, use_session};

const SECTIONS: [(&str, &str); 5] = [
    ("/", "Overview"),
    ("/news", "News"),
    ("/rallies", "Rallies"),
    ("/stories", "Stories"),
    ("/tenants", "Tenants"),
];

/// Shows a spinner while the identity check runs, then `children` inside the
/// dashboard frame. Unauthenticated visitors never stay here: the bootstrap
/// redirects them.
#[component]
pub fn DashboardShell(title: &'static str, children: ChildrenFn) -> impl IntoView {
    let session = use_session().session();
    let greeting = move || {
        session.with(|s| {
            s.user
                .as_ref()
                .map(|user| format!("Welcome back, {}", user.full_name()))
                .unwrap_or_default()
        })
    };

    view! {
        <Show
            when=move || session.with(Session::is_authenticated)
            fallback=|| view! { <p class="muted" role="status">"Checking session..."</p> }
        >
            <header class="page-header">
                <p class="muted">{greeting}</p>
                <nav class="page-nav">
                    {SECTIONS
                        .into_iter()
                        .map(|(href, label)| view! { <A href=href>{label}</A> })
                        .collect::<Vec<_>>()}
                </nav>
                <LogoutButton/>
            </header>
            <section class="page-section">
                <h1>{title}</h1>
                {children()}
            </section>
        </Show>
    }
}
