//! GraphQL wire format: request envelope, response envelope, and the
//! `Operation` trait each typed query or mutation implements.
//!
//! DESIGN
//! ======
//! A GraphQL server may answer with data, errors, or both. The envelope keeps
//! all three outcomes representable so views can render partial data next to
//! an inline alert instead of discarding it.

#[cfg(test)]
#[path = "graphql_test.rs"]
mod graphql_test;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::ApiError;

/// A named GraphQL document with typed variables and response data.
pub trait Operation {
    /// Operation name sent as `operationName` and attached to every error.
    const NAME: &'static str;
    /// Full GraphQL document text.
    const DOCUMENT: &'static str;

    type Variables: Serialize;
    type Data: DeserializeOwned;
}

/// Variables for operations that take no arguments; serializes as `{}`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct NoVariables {}

/// JSON body POSTed to the GraphQL endpoint.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphqlRequest<'a, V> {
    pub operation_name: &'a str,
    pub query: &'a str,
    pub variables: &'a V,
}

impl<'a, V: Serialize> GraphqlRequest<'a, V> {
    pub fn for_operation<O: Operation<Variables = V>>(variables: &'a V) -> Self {
        Self {
            operation_name: O::NAME,
            query: O::DOCUMENT,
            variables,
        }
    }
}

/// Source position of a GraphQL error within the document.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorLocation {
    pub line: u32,
    pub column: u32,
}

/// One step of a GraphQL error path: a field name or a list index.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PathSegment {
    Field(String),
    Index(u64),
}

/// Error entry as it appears in a response body.
#[derive(Debug, Deserialize)]
pub(crate) struct RawGraphqlError {
    pub message: String,
    #[serde(default)]
    pub locations: Option<Vec<ErrorLocation>>,
    #[serde(default)]
    pub path: Option<Vec<PathSegment>>,
}

impl RawGraphqlError {
    pub(crate) fn into_api_error(self, operation: &str) -> ApiError {
        ApiError::Graphql {
            operation: operation.to_owned(),
            message: self.message,
            locations: self.locations.unwrap_or_default(),
            path: self.path.unwrap_or_default(),
        }
    }
}

/// Response body before `data` is decoded into the operation's type.
#[derive(Debug, Deserialize)]
pub(crate) struct RawResponse {
    #[serde(default)]
    pub data: Option<serde_json::Value>,
    #[serde(default)]
    pub errors: Option<Vec<RawGraphqlError>>,
}

/// Outcome of an operation that reached the server.
///
/// `data` and `errors` are independent: both present is a partial success,
/// only `errors` is a full application-level failure.
#[derive(Clone, Debug, PartialEq)]
pub struct GraphqlResponse<D> {
    pub data: Option<D>,
    pub errors: Vec<ApiError>,
}

impl<D> GraphqlResponse<D> {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn is_partial(&self) -> bool {
        self.data.is_some() && self.has_errors()
    }

    pub fn first_error(&self) -> Option<&ApiError> {
        self.errors.first()
    }
}
