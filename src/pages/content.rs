//! Content section pages: news, rallies, stories, tenants.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::content_lists::{NewsArticleDetail, NewsList, RallyList, StoryList, TenantTable};
use crate::components::dashboard_shell::DashboardShell;

#[component]
pub fn NewsPage() -> impl IntoView {
    view! {
        <DashboardShell title="News">
            <NewsList/>
        </DashboardShell>
    }
}

#[component]
pub fn NewsArticlePage() -> impl IntoView {
    let params = use_params_map();
    let id = Signal::derive(move || params.read().get("id").unwrap_or_default());

    view! {
        <DashboardShell title="Article">
            <NewsArticleDetail id=id/>
        </DashboardShell>
    }
}

#[component]
pub fn RalliesPage() -> impl IntoView {
    view! {
        <DashboardShell title="Rallies">
            <RallyList/>
        </DashboardShell>
    }
}

#[component]
pub fn StoriesPage() -> impl IntoView {
    view! {
        <DashboardShell title="Stories">
            <StoryList/>
        </DashboardShell>
    }
}

#[component]
pub fn TenantsPage() -> impl IntoView {
    view! {
        <DashboardShell title="Tenants">
            <TenantTable/>
        </DashboardShell>
    }
}
