//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::session_bootstrap::SessionBootstrap;
use crate::config::AppConfig;
use crate::net::gateway::Gateway;
use crate::pages::content::{NewsArticlePage, NewsPage, RalliesPage, StoriesPage, TenantsPage};
use crate::pages::{home::HomePage, not_found::NotFoundPage, sign_in::SignInPage};
use crate::state::session::SessionStore;

/// Root application component.
///
/// Constructs the single `SessionStore` and `Gateway` and provides them,
/// with the loaded `AppConfig`, to every child component.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = AppConfig::load();
    provide_context(Gateway::browser(&config));
    provide_context(config);
    provide_context(SessionStore::new());

    view! {
        <Title text="Tenant Dashboard"/>

        <Router>
            <SessionBootstrap>
                <Routes fallback=|| view! { <NotFoundPage/> }>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("sign-in") view=SignInPage/>
                    <Route path=StaticSegment("news") view=NewsPage/>
                    <Route path=(StaticSegment("news"), ParamSegment("id")) view=NewsArticlePage/>
                    <Route path=StaticSegment("rallies") view=RalliesPage/>
                    <Route path=StaticSegment("stories") view=StoriesPage/>
                    <Route path=StaticSegment("tenants") view=TenantsPage/>
                </Routes>
            </SessionBootstrap>
        </Router>
    }
}
