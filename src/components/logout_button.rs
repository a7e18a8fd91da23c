//! Logout button that ends the session and reloads at sign-in.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::net::gateway::Gateway;
use crate::state::session::use_session;
use crate::util::navigator::RouterNavigator;

#[component]
pub fn LogoutButton() -> impl IntoView {
    let store = use_session();
    let gateway = expect_context::<Gateway>();
    let navigator = RouterNavigator::new(use_navigate());
    let pending = RwSignal::new(false);

    let on_click = move |_| {
        if pending.get_untracked() {
            return;
        }
        pending.set(true);
        let gateway = gateway.clone();
        let navigator = navigator.clone();
        // Fire-and-forget; the hard navigation at the end discards this page.
        leptos::task::spawn_local(async move {
            store.logout(&gateway, &navigator).await;
        });
    };

    view! {
        <button class="logout-button" type="button" on:click=on_click disabled=move || pending.get()>
            {move || if pending.get() { "Signing out..." } else { "Log out" }}
        </button>
    }
}
