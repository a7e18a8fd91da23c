//! List views for news, rallies, stories and tenants, plus the single
//! article view.
//!
//! Each view fetches on mount through the shared [`Gateway`] and renders the
//! four [`ViewState`]s. Formatting and selection stay in plain functions.

#[cfg(test)]
#[path = "content_lists_test.rs"]
mod content_lists_test;

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::fetch_alert::{FetchError, FetchWarning};
use crate::net::gateway::Gateway;
use crate::net::operations::{
    NewsArticle, NewsArticleData, NewsArticles, NewsArticlesData, Rallies, RalliesData, Stories,
    StoriesData, Tenants, TenantsData,
};
use crate::net::types::{IdVariables, ListVariables, NewsArticleRecord, Rally, Story, Tenant};
use crate::state::resource::{ViewState, classify, non_empty};

const CONTENT_PAGE_SIZE: u32 = 25;

/// Calendar date of an ISO-8601 timestamp, or "Draft" when unpublished.
fn publication_label(published_at: Option<&str>) -> String {
    match published_at.map(str::trim).filter(|value| !value.is_empty()) {
        Some(timestamp) => timestamp.split('T').next().unwrap_or(timestamp).to_owned(),
        None => "Draft".to_owned(),
    }
}

/// "date · place" summary for a rally, skipping whatever is unknown.
fn rally_summary(rally: &Rally) -> String {
    let when = rally.starts_at.as_deref().map(|ts| publication_label(Some(ts)));
    let parts: Vec<String> = [when, rally.location.clone()]
        .into_iter()
        .flatten()
        .filter(|part| !part.trim().is_empty())
        .collect();
    if parts.is_empty() {
        "Date and place to be announced".to_owned()
    } else {
        parts.join(" · ")
    }
}

fn yes_no(value: bool) -> &'static str {
    if value { "Yes" } else { "No" }
}

fn article_href(article: &NewsArticleRecord) -> String {
    format!("/news/{}", article.id)
}

fn select_news(data: &NewsArticlesData) -> Option<Vec<NewsArticleRecord>> {
    non_empty(&data.news_articles)
}

fn select_article(data: &NewsArticleData) -> Option<NewsArticleRecord> {
    data.news_article.clone()
}

fn select_rallies(data: &RalliesData) -> Option<Vec<Rally>> {
    non_empty(&data.rallies)
}

fn select_stories(data: &StoriesData) -> Option<Vec<Story>> {
    non_empty(&data.stories)
}

fn select_tenants(data: &TenantsData) -> Option<Vec<Tenant>> {
    non_empty(&data.tenants)
}

#[component]
pub fn NewsList() -> impl IntoView {
    let gateway = expect_context::<Gateway>();
    let news = LocalResource::new(move || {
        let gateway = gateway.clone();
        async move {
            gateway
                .execute::<NewsArticles>(&ListVariables::first(CONTENT_PAGE_SIZE))
                .await
        }
    });

    move || match classify(news.get().as_ref(), select_news) {
        ViewState::Loading => view! { <p class="muted">"Loading news..."</p> }.into_any(),
        ViewState::NotFound => view! { <p class="muted">"No articles yet."</p> }.into_any(),
        ViewState::Failed(message) => view! { <FetchError message=message/> }.into_any(),
        ViewState::Ready(articles, warning) => view! {
            <FetchWarning message=warning/>
            <ul class="content-list">
                {articles
                    .into_iter()
                    .map(|article| {
                        let href = article_href(&article);
                        let published = publication_label(article.published_at.as_deref());
                        view! {
                            <li>
                                <A href=href>{article.title}</A>
                                <span class="muted">{published}</span>
                            </li>
                        }
                    })
                    .collect::<Vec<_>>()}
            </ul>
        }
        .into_any(),
    }
}

/// Single article by route id. A `null` article is "not found", not an error.
#[component]
pub fn NewsArticleDetail(#[prop(into)] id: Signal<String>) -> impl IntoView {
    let gateway = expect_context::<Gateway>();
    let article = LocalResource::new(move || {
        let gateway = gateway.clone();
        let variables = IdVariables { id: id.get() };
        async move { gateway.execute::<NewsArticle>(&variables).await }
    });

    move || match classify(article.get().as_ref(), select_article) {
        ViewState::Loading => view! { <p class="muted">"Loading article..."</p> }.into_any(),
        ViewState::NotFound => view! {
            <div class="not-found">
                <p>"This article does not exist or was removed."</p>
                <A href="/news">"Back to news"</A>
            </div>
        }
        .into_any(),
        ViewState::Failed(message) => view! { <FetchError message=message/> }.into_any(),
        ViewState::Ready(article, warning) => {
            let published = publication_label(article.published_at.as_deref());
            let category = article.category.map(|category| category.name).unwrap_or_default();
            view! {
                <FetchWarning message=warning/>
                <article class="content-detail">
                    <h2>{article.title}</h2>
                    <p class="muted">{published}" "{category}</p>
                    <p class="muted">"/"{article.slug}</p>
                </article>
            }
            .into_any()
        }
    }
}

#[component]
pub fn RallyList() -> impl IntoView {
    let gateway = expect_context::<Gateway>();
    let rallies = LocalResource::new(move || {
        let gateway = gateway.clone();
        async move { gateway.execute::<Rallies>(&ListVariables::first(CONTENT_PAGE_SIZE)).await }
    });

    move || match classify(rallies.get().as_ref(), select_rallies) {
        ViewState::Loading => view! { <p class="muted">"Loading rallies..."</p> }.into_any(),
        ViewState::NotFound => view! { <p class="muted">"No rallies scheduled."</p> }.into_any(),
        ViewState::Failed(message) => view! { <FetchError message=message/> }.into_any(),
        ViewState::Ready(rallies, warning) => view! {
            <FetchWarning message=warning/>
            <ul class="content-list">
                {rallies
                    .into_iter()
                    .map(|rally| {
                        let summary = rally_summary(&rally);
                        view! {
                            <li>
                                <strong>{rally.title}</strong>
                                <span class="muted">{summary}</span>
                            </li>
                        }
                    })
                    .collect::<Vec<_>>()}
            </ul>
        }
        .into_any(),
    }
}

#[component]
pub fn StoryList() -> impl IntoView {
    let gateway = expect_context::<Gateway>();
    let stories = LocalResource::new(move || {
        let gateway = gateway.clone();
        async move { gateway.execute::<Stories>(&ListVariables::first(CONTENT_PAGE_SIZE)).await }
    });

    move || match classify(stories.get().as_ref(), select_stories) {
        ViewState::Loading => view! { <p class="muted">"Loading stories..."</p> }.into_any(),
        ViewState::NotFound => view! { <p class="muted">"No stories yet."</p> }.into_any(),
        ViewState::Failed(message) => view! { <FetchError message=message/> }.into_any(),
        ViewState::Ready(stories, warning) => view! {
            <FetchWarning message=warning/>
            <table class="data-table">
                <thead>
                    <tr>
                        <th>"Title"</th>
                        <th>"Published"</th>
                    </tr>
                </thead>
                <tbody>
                    {stories
                        .into_iter()
                        .map(|story| view! {
                            <tr>
                                <td>{story.title}</td>
                                <td>{yes_no(story.is_published)}</td>
                            </tr>
                        })
                        .collect::<Vec<_>>()}
                </tbody>
            </table>
        }
        .into_any(),
    }
}

#[component]
pub fn TenantTable() -> impl IntoView {
    let gateway = expect_context::<Gateway>();
    let tenants = LocalResource::new(move || {
        let gateway = gateway.clone();
        async move { gateway.execute::<Tenants>(&ListVariables::first(CONTENT_PAGE_SIZE)).await }
    });

    move || match classify(tenants.get().as_ref(), select_tenants) {
        ViewState::Loading => view! { <p class="muted">"Loading tenants..."</p> }.into_any(),
        ViewState::NotFound => view! { <p class="muted">"No tenants configured."</p> }.into_any(),
        ViewState::Failed(message) => view! { <FetchError message=message/> }.into_any(),
        ViewState::Ready(tenants, warning) => view! {
            <FetchWarning message=warning/>
            <table class="data-table">
                <thead>
                    <tr>
                        <th>"Name"</th>
                        <th>"Slug"</th>
                        <th>"Active"</th>
                    </tr>
                </thead>
                <tbody>
                    {tenants
                        .into_iter()
                        .map(|tenant| view! {
                            <tr>
                                <td>{tenant.name}</td>
                                <td>{tenant.slug}</td>
                                <td>{yes_no(tenant.is_active)}</td>
                            </tr>
                        })
                        .collect::<Vec<_>>()}
                </tbody>
            </table>
        }
        .into_any(),
    }
}
