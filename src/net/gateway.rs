//! Remote API gateway: executes typed GraphQL operations against the single
//! configured endpoint and normalizes every failure into [`ApiError`].
//!
//! ERROR HANDLING
//! ==============
//! Application-level errors never surface as `Err`: they come back inside
//! [`GraphqlResponse::errors`], next to whatever data the server managed to
//! produce. `Err` is reserved for network failures where no GraphQL response
//! exists. Each call is a single attempt; retry policy belongs to callers.

#[cfg(test)]
#[path = "gateway_test.rs"]
mod gateway_test;

use std::sync::Arc;

use serde::de::DeserializeOwned;

use super::graphql::{GraphqlRequest, GraphqlResponse, Operation, RawResponse};
use super::transport::{BrowserTransport, Transport, TransportResponse};
use crate::config::AppConfig;
use crate::error::{ApiError, NetworkErrorKind};

/// Shared handle to the GraphQL endpoint, provided through Leptos context.
#[derive(Clone)]
pub struct Gateway {
    transport: Arc<dyn Transport>,
}

impl Gateway {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    /// Gateway backed by the browser `fetch` transport.
    pub fn browser(config: &AppConfig) -> Self {
        Self::new(Arc::new(BrowserTransport::new(config)))
    }

    /// Execute `O` with `variables`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Network`] when the request could not be sent, timed
    /// out, or produced a body that is not a GraphQL response. GraphQL errors
    /// are returned in `Ok(response.errors)`.
    pub async fn execute<O: Operation>(
        &self,
        variables: &O::Variables,
    ) -> Result<GraphqlResponse<O::Data>, ApiError> {
        let body = encode_request::<O>(variables).inspect_err(ApiError::log)?;
        log::debug!("graphql request: operation={}", O::NAME);

        let response = self.transport.post_json(body).await.map_err(|err| {
            let err = ApiError::network(O::NAME, err.kind, err.message);
            err.log();
            err
        })?;

        let decoded = decode_response::<O::Data>(O::NAME, &response).inspect_err(ApiError::log)?;
        for error in &decoded.errors {
            error.log();
        }
        Ok(decoded)
    }
}

fn encode_request<O: Operation>(variables: &O::Variables) -> Result<String, ApiError> {
    let request = GraphqlRequest::for_operation::<O>(variables);
    serde_json::to_string(&request).map_err(|err| {
        ApiError::network(
            O::NAME,
            NetworkErrorKind::Encode,
            format!("failed to encode request: {err}"),
        )
    })
}

/// Decode an HTTP response into data and normalized GraphQL errors.
///
/// A non-2xx status still counts as a GraphQL response when its body carries
/// `errors` (servers commonly answer validation failures with 400). Data that
/// does not fit `D` is a decode failure only when no GraphQL errors came with
/// it; otherwise the data is dropped and the errors are returned.
fn decode_response<D: DeserializeOwned>(
    operation: &str,
    response: &TransportResponse,
) -> Result<GraphqlResponse<D>, ApiError> {
    let raw: RawResponse = match serde_json::from_str(&response.body) {
        Ok(raw) => raw,
        Err(err) if response.is_success() => {
            return Err(ApiError::network(
                operation,
                NetworkErrorKind::Decode,
                format!("invalid GraphQL response: {err}"),
            ));
        }
        Err(_) => return Err(http_failure(operation, response)),
    };

    let errors: Vec<ApiError> = raw
        .errors
        .unwrap_or_default()
        .into_iter()
        .map(|error| error.into_api_error(operation))
        .collect();

    let data = match raw.data {
        None | Some(serde_json::Value::Null) => None,
        Some(value) => match serde_json::from_value::<D>(value) {
            Ok(data) => Some(data),
            // The server already explained the failure; keep its errors.
            Err(err) if !errors.is_empty() => {
                log::warn!("dropping undecodable partial data: operation={operation} error={err}");
                None
            }
            Err(err) => {
                return Err(ApiError::network(
                    operation,
                    NetworkErrorKind::Decode,
                    format!("unexpected data shape: {err}"),
                ));
            }
        },
    };

    if data.is_none() && errors.is_empty() && !response.is_success() {
        return Err(http_failure(operation, response));
    }

    Ok(GraphqlResponse { data, errors })
}

fn http_failure(operation: &str, response: &TransportResponse) -> ApiError {
    ApiError::network(
        operation,
        NetworkErrorKind::Http(response.status),
        sanitize_body(&response.body),
    )
}

/// Maximum number of error body characters surfaced to the UI.
const MAX_ERROR_CHARS: usize = 200;

fn sanitize_body(body: &str) -> String {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        "request failed".to_owned()
    } else {
        trimmed.chars().take(MAX_ERROR_CHARS).collect()
    }
}
