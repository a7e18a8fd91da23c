//! Runs the auth bootstrap once when the app mounts.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::net::gateway::Gateway;
use crate::state::bootstrap::run_bootstrap;
use crate::state::session::use_session;
use crate::util::navigator::RouterNavigator;

/// Wraps the routed content and settles the session on every application
/// load, whatever route the app was opened on. Must sit inside `<Router>`.
#[component]
pub fn SessionBootstrap(children: Children) -> impl IntoView {
    let store = use_session();
    let gateway = expect_context::<Gateway>();
    let navigator = RouterNavigator::new(use_navigate());

    leptos::task::spawn_local(async move {
        run_bootstrap(&gateway, store, &navigator).await;
    });

    children()
}
