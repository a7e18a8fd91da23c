//! Records and variable payloads projected from the platform's GraphQL schema.
//!
//! DESIGN
//! ======
//! The schema is owned by the server. These types only mirror the fields the
//! dashboard selects, so adding a field here means adding it to the matching
//! document in `operations` as well.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// The signed-in dashboard user as returned by `me`.
///
/// Read-only cache of the server record; replaced wholesale, never edited.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub is_active: bool,
    /// ISO-8601 timestamp.
    pub created_at: String,
    /// ISO-8601 timestamp.
    pub updated_at: String,
}

impl User {
    pub fn full_name(&self) -> String {
        let name = format!("{} {}", self.first_name.trim(), self.last_name.trim());
        let name = name.trim();
        if name.is_empty() {
            self.email.clone()
        } else {
            name.to_owned()
        }
    }
}

/// Shared `{ id name }` projection for news and merchandise categories.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryRef {
    pub id: String,
    pub name: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MerchandiseProduct {
    pub id: String,
    pub name: String,
    pub price: f64,
    pub stock: i64,
    pub is_published: bool,
    pub category: Option<CategoryRef>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsArticleRecord {
    pub id: String,
    pub title: String,
    pub slug: String,
    pub published_at: Option<String>,
    pub category: Option<CategoryRef>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rally {
    pub id: String,
    pub title: String,
    pub location: Option<String>,
    pub starts_at: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Story {
    pub id: String,
    pub title: String,
    pub is_published: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tenant {
    pub id: String,
    pub name: String,
    pub slug: String,
    pub is_active: bool,
}

/// Result of the logout mutation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogoutPayload {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

/// Credentials for the sign-in mutation. Never log this value.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct SignInInput {
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignInPayload {
    pub user: Option<User>,
}

/// Pagination window for list queries. Unset fields are omitted so the
/// server applies its own defaults.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ListVariables {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u32>,
}

impl ListVariables {
    pub fn first(limit: u32) -> Self {
        Self {
            limit: Some(limit),
            offset: None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct IdVariables {
    pub id: String,
}
