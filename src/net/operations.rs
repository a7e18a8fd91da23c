//! Typed GraphQL operations used by the dashboard.
//!
//! Each operation is a unit struct implementing [`Operation`]; the gateway
//! reads its name, document, and data type from the trait.

#[cfg(test)]
#[path = "operations_test.rs"]
mod operations_test;

use serde::{Deserialize, Serialize};

use super::graphql::{NoVariables, Operation};
use super::types::{
    IdVariables, ListVariables, LogoutPayload, MerchandiseProduct, NewsArticleRecord, Rally,
    SignInInput, SignInPayload, Story, Tenant, User,
};

// =============================================================================
// SESSION
// =============================================================================

/// Identity check: who does the session cookie belong to?
pub struct Me;

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct MeData {
    pub me: Option<User>,
}

impl Operation for Me {
    const NAME: &'static str = "Me";
    const DOCUMENT: &'static str = "query Me {
  me {
    id
    firstName
    lastName
    email
    isActive
    createdAt
    updatedAt
  }
}";
    type Variables = NoVariables;
    type Data = MeData;
}

/// Ends the server session; the server clears the cookie.
pub struct Logout;

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct LogoutData {
    pub logout: LogoutPayload,
}

impl Operation for Logout {
    const NAME: &'static str = "Logout";
    const DOCUMENT: &'static str = "mutation Logout {
  logout {
    success
    message
  }
}";
    type Variables = NoVariables;
    type Data = LogoutData;
}

pub struct SignIn;

#[derive(Clone, Serialize)]
pub struct SignInVariables {
    pub input: SignInInput,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignInData {
    pub sign_in: Option<SignInPayload>,
}

impl Operation for SignIn {
    const NAME: &'static str = "SignIn";
    const DOCUMENT: &'static str = "mutation SignIn($input: SignInInput!) {
  signIn(input: $input) {
    user {
      id
      firstName
      lastName
      email
      isActive
      createdAt
      updatedAt
    }
  }
}";
    type Variables = SignInVariables;
    type Data = SignInData;
}

// =============================================================================
// CONTENT
// =============================================================================

pub struct MerchandiseProducts;

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MerchandiseProductsData {
    pub merchandise_products: Vec<MerchandiseProduct>,
}

impl Operation for MerchandiseProducts {
    const NAME: &'static str = "MerchandiseProducts";
    const DOCUMENT: &'static str = "query MerchandiseProducts($limit: Int, $offset: Int) {
  merchandiseProducts(limit: $limit, offset: $offset) {
    id
    name
    price
    stock
    isPublished
    category {
      id
      name
    }
  }
}";
    type Variables = ListVariables;
    type Data = MerchandiseProductsData;
}

pub struct NewsArticles;

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsArticlesData {
    pub news_articles: Vec<NewsArticleRecord>,
}

impl Operation for NewsArticles {
    const NAME: &'static str = "NewsArticles";
    const DOCUMENT: &'static str = "query NewsArticles($limit: Int, $offset: Int) {
  newsArticles(limit: $limit, offset: $offset) {
    id
    title
    slug
    publishedAt
    category {
      id
      name
    }
  }
}";
    type Variables = ListVariables;
    type Data = NewsArticlesData;
}

/// Single article lookup; `newsArticle: null` means not found.
pub struct NewsArticle;

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsArticleData {
    pub news_article: Option<NewsArticleRecord>,
}

impl Operation for NewsArticle {
    const NAME: &'static str = "NewsArticle";
    const DOCUMENT: &'static str = "query NewsArticle($id: ID!) {
  newsArticle(id: $id) {
    id
    title
    slug
    publishedAt
    category {
      id
      name
    }
  }
}";
    type Variables = IdVariables;
    type Data = NewsArticleData;
}

pub struct Rallies;

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct RalliesData {
    pub rallies: Vec<Rally>,
}

impl Operation for Rallies {
    const NAME: &'static str = "Rallies";
    const DOCUMENT: &'static str = "query Rallies($limit: Int, $offset: Int) {
  rallies(limit: $limit, offset: $offset) {
    id
    title
    location
    startsAt
  }
}";
    type Variables = ListVariables;
    type Data = RalliesData;
}

pub struct Stories;

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct StoriesData {
    pub stories: Vec<Story>,
}

impl Operation for Stories {
    const NAME: &'static str = "Stories";
    const DOCUMENT: &'static str = "query Stories($limit: Int, $offset: Int) {
  stories(limit: $limit, offset: $offset) {
    id
    title
    isPublished
  }
}";
    type Variables = ListVariables;
    type Data = StoriesData;
}

pub struct Tenants;

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct TenantsData {
    pub tenants: Vec<Tenant>,
}

impl Operation for Tenants {
    const NAME: &'static str = "Tenants";
    const DOCUMENT: &'static str = "query Tenants($limit: Int, $offset: Int) {
  tenants(limit: $limit, offset: $offset) {
    id
    name
    slug
    isActive
  }
}";
    type Variables = ListVariables;
    type Data = TenantsData;
}
