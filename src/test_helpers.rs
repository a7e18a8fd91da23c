//! Shared fakes for unit tests: a scripted transport and a recording navigator.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::error::NetworkErrorKind;
use crate::net::gateway::Gateway;
use crate::net::transport::{Transport, TransportError, TransportResponse};
use crate::net::types::User;
use crate::util::navigator::Navigator;

pub fn dummy_user() -> User {
    User {
        id: "u-1".to_owned(),
        first_name: "Ada".to_owned(),
        last_name: "Lovelace".to_owned(),
        email: "ada@example.com".to_owned(),
        is_active: true,
        created_at: "2024-01-01T00:00:00Z".to_owned(),
        updated_at: "2024-01-02T00:00:00Z".to_owned(),
    }
}

pub fn user_json() -> serde_json::Value {
    serde_json::to_value(dummy_user()).unwrap()
}

pub fn ok(body: serde_json::Value) -> Result<TransportResponse, TransportError> {
    Ok(TransportResponse { status: 200, body: body.to_string() })
}

pub fn status(status: u16, body: &str) -> Result<TransportResponse, TransportError> {
    Ok(TransportResponse { status, body: body.to_owned() })
}

pub fn offline() -> Result<TransportResponse, TransportError> {
    Err(TransportError::new(NetworkErrorKind::Unreachable, "Failed to fetch"))
}

pub fn timed_out() -> Result<TransportResponse, TransportError> {
    Err(TransportError::new(NetworkErrorKind::Timeout, "request timed out"))
}

// =========================================================================
// MockTransport
// =========================================================================

/// Answers by `operationName`, recording every request body it receives.
pub struct MockTransport {
    routes: Mutex<HashMap<String, Result<TransportResponse, TransportError>>>,
    pub requests: Mutex<Vec<serde_json::Value>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self { routes: Mutex::new(HashMap::new()), requests: Mutex::new(Vec::new()) }
    }

    pub fn route(self, operation: &str, response: Result<TransportResponse, TransportError>) -> Self {
        self.routes.lock().unwrap().insert(operation.to_owned(), response);
        self
    }

    pub fn operations(&self) -> Vec<String> {
        self.requests
            .lock()
            .unwrap()
            .iter()
            .map(|body| body["operationName"].as_str().unwrap_or_default().to_owned())
            .collect()
    }

    pub fn into_gateway(self) -> (Gateway, Arc<MockTransport>) {
        let transport = Arc::new(self);
        (Gateway::new(transport.clone()), transport)
    }
}

#[async_trait::async_trait(?Send)]
impl Transport for MockTransport {
    async fn post_json(&self, body: String) -> Result<TransportResponse, TransportError> {
        let parsed: serde_json::Value = serde_json::from_str(&body).unwrap();
        let operation = parsed["operationName"].as_str().unwrap_or_default().to_owned();
        self.requests.lock().unwrap().push(parsed);
        self.routes
            .lock()
            .unwrap()
            .get(&operation)
            .cloned()
            .unwrap_or_else(|| panic!("no scripted response for {operation}"))
    }
}

// =========================================================================
// RecordingNavigator
// =========================================================================

pub struct RecordingNavigator {
    path: String,
    pub soft: Mutex<Vec<String>>,
    pub hard: Mutex<Vec<String>>,
}

impl RecordingNavigator {
    pub fn at(path: &str) -> Self {
        Self { path: path.to_owned(), soft: Mutex::new(Vec::new()), hard: Mutex::new(Vec::new()) }
    }

    pub fn soft_navigations(&self) -> Vec<String> {
        self.soft.lock().unwrap().clone()
    }

    pub fn hard_navigations(&self) -> Vec<String> {
        self.hard.lock().unwrap().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn current_path(&self) -> String {
        self.path.clone()
    }

    fn navigate(&self, to: &str) {
        self.soft.lock().unwrap().push(to.to_owned());
    }

    fn hard_navigate(&self, href: &str) {
        self.hard.lock().unwrap().push(href.to_owned());
    }
}
