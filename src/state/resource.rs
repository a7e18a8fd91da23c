//! View-level classification of a data fetch.
//!
//! Views render one of four states: spinner, content, a dedicated not-found
//! message, or an inline alert. An entity missing from an otherwise
//! successful response is `NotFound`, not an error.

#[cfg(test)]
#[path = "resource_test.rs"]
mod resource_test;

use crate::error::ApiError;
use crate::net::graphql::GraphqlResponse;

#[derive(Clone, Debug, PartialEq)]
pub enum ViewState<T> {
    Loading,
    /// Content, plus the first GraphQL error when the data is partial.
    Ready(T, Option<String>),
    NotFound,
    Failed(String),
}

/// Classify a fetch result. `None` means the request is still in flight.
///
/// `select` picks the entity out of the response data; returning `None` from
/// it marks the entity as absent. Partial data counts as `Ready` and carries
/// a warning for the view to render next to the content.
pub fn classify<D, T>(
    result: Option<&Result<GraphqlResponse<D>, ApiError>>,
    select: impl FnOnce(&D) -> Option<T>,
) -> ViewState<T> {
    match result {
        None => ViewState::Loading,
        Some(Err(err)) => ViewState::Failed(err.message().to_owned()),
        Some(Ok(response)) => match response.data.as_ref().and_then(select) {
            Some(value) => ViewState::Ready(value, response.first_error().map(|err| err.message().to_owned())),
            None => match response.first_error() {
                Some(err) => ViewState::Failed(err.message().to_owned()),
                None => ViewState::NotFound,
            },
        },
    }
}

/// Copy of `items`, or `None` when the list is empty so views can show their
/// empty-state message through [`ViewState::NotFound`].
pub fn non_empty<T: Clone>(items: &[T]) -> Option<Vec<T>> {
    (!items.is_empty()).then(|| items.to_vec())
}
