//! Transport seam between the gateway and the network.
//!
//! Client-side (`csr`): real HTTP POSTs via `gloo-net` with cookies included
//! and an abort timeout. Native builds get a transport that always reports
//! `Unavailable`, so tests inject their own [`Transport`] instead.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "transport_test.rs"]
mod transport_test;

use crate::config::AppConfig;
use crate::error::NetworkErrorKind;

/// Raw HTTP outcome handed back to the gateway for GraphQL decoding.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransportResponse {
    pub status: u16,
    pub body: String,
}

impl TransportResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// A request that never produced an HTTP response.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransportError {
    pub kind: NetworkErrorKind,
    pub message: String,
}

impl TransportError {
    pub fn new(kind: NetworkErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Sends a JSON body to the GraphQL endpoint. Enables mocking in tests.
///
/// Implementations must attach the session cookie themselves and must never
/// add an `Authorization` header.
#[async_trait::async_trait(?Send)]
pub trait Transport: Send + Sync {
    /// POST `body` as `application/json`.
    ///
    /// # Errors
    ///
    /// Returns a [`TransportError`] when no HTTP response arrived (unreachable
    /// host, timeout, or no browser environment).
    async fn post_json(&self, body: String) -> Result<TransportResponse, TransportError>;
}

/// Browser `fetch` transport with `credentials: include`.
#[derive(Clone, Debug)]
pub struct BrowserTransport {
    endpoint: String,
    timeout_ms: u32,
}

impl BrowserTransport {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            endpoint: config.graphql_endpoint.clone(),
            timeout_ms: config.request_timeout_ms,
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait::async_trait(?Send)]
impl Transport for BrowserTransport {
    async fn post_json(&self, body: String) -> Result<TransportResponse, TransportError> {
        #[cfg(feature = "csr")]
        {
            send_with_timeout(&self.endpoint, self.timeout_ms, body).await
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (body, self.timeout_ms);
            Err(TransportError::new(
                NetworkErrorKind::Unavailable,
                "not available outside the browser",
            ))
        }
    }
}

/// Sends the request with an abort timeout so a hung server cannot leave
/// loading state stuck.
#[cfg(feature = "csr")]
async fn send_with_timeout(
    endpoint: &str,
    timeout_ms: u32,
    body: String,
) -> Result<TransportResponse, TransportError> {
    use gloo_net::http::Request;
    use gloo_timers::callback::Timeout;
    use web_sys::{AbortController, RequestCredentials};

    let controller = AbortController::new().map_err(|_| {
        TransportError::new(NetworkErrorKind::Unavailable, "failed to initialize request timeout")
    })?;
    let signal = controller.signal();
    let timeout_controller = controller.clone();
    let _timeout = Timeout::new(timeout_ms, move || timeout_controller.abort());

    let request = Request::post(endpoint)
        .header("Content-Type", "application/json")
        .header("Accept", "application/json")
        .credentials(RequestCredentials::Include)
        .abort_signal(Some(&signal))
        .body(body)
        .map_err(|err| {
            TransportError::new(NetworkErrorKind::Encode, format!("failed to build request: {err}"))
        })?;

    let response = request
        .send()
        .await
        .map_err(|err| classify_request_failure(&err.to_string()))?;
    let status = response.status();
    let body = response.text().await.map_err(|err| {
        TransportError::new(NetworkErrorKind::Decode, format!("failed to read response body: {err}"))
    })?;

    Ok(TransportResponse { status, body })
}

/// Maps a fetch failure message to a timeout or an unreachable host.
#[cfg(any(test, feature = "csr"))]
fn classify_request_failure(message: &str) -> TransportError {
    let lowered = message.to_lowercase();
    if lowered.contains("timeout") || lowered.contains("abort") {
        TransportError::new(
            NetworkErrorKind::Timeout,
            "request timed out, please try again",
        )
    } else {
        TransportError::new(
            NetworkErrorKind::Unreachable,
            format!("unable to reach the server: {message}"),
        )
    }
}
