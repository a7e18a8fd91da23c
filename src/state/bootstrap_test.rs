use super::*;
use std::sync::{Arc, Mutex};

use crate::error::NetworkErrorKind;
use crate::net::operations::MerchandiseProducts;
use crate::net::transport::{Transport, TransportError, TransportResponse};
use crate::net::types::ListVariables;
use crate::test_helpers::{self, MockTransport, RecordingNavigator, dummy_user};
use futures::executor::block_on;
use serde_json::json;

/// Answers every request with `response` after observing the store the way a
/// concurrently rendering page would; optionally signs a user in meanwhile.
struct StoreObservingTransport {
    store: SessionStore,
    sign_in_during_request: Option<User>,
    response: Result<TransportResponse, TransportError>,
    loading_seen: Mutex<Vec<bool>>,
}

impl StoreObservingTransport {
    fn new(store: SessionStore, response: Result<TransportResponse, TransportError>) -> Self {
        Self { store, sign_in_during_request: None, response, loading_seen: Mutex::new(Vec::new()) }
    }
}

#[async_trait::async_trait(?Send)]
impl Transport for StoreObservingTransport {
    async fn post_json(&self, _body: String) -> Result<TransportResponse, TransportError> {
        self.loading_seen.lock().unwrap().push(self.store.snapshot().is_loading);
        if let Some(user) = &self.sign_in_during_request {
            self.store.set_user(user.clone());
        }
        self.response.clone()
    }
}

fn settled_with(data: Option<MeData>, errors: Vec<ApiError>) -> IdentityCheck {
    IdentityCheck::Settled(Ok(GraphqlResponse { data, errors }))
}

fn unauthenticated_error() -> ApiError {
    ApiError::Graphql {
        operation: "Me".to_owned(),
        message: "Unauthenticated".to_owned(),
        locations: Vec::new(),
        path: Vec::new(),
    }
}

// =========================================================================
// resolve_identity_check
// =========================================================================

#[test]
fn in_flight_check_is_checking_and_loading() {
    let transition = resolve_identity_check(&IdentityCheck::InFlight, "/news");
    assert_eq!(transition.phase, AuthPhase::Checking);
    assert_eq!(transition.update, SessionUpdate::Loading);
    assert!(transition.redirect.is_none());
}

#[test]
fn user_in_response_authenticates() {
    let check = settled_with(Some(MeData { me: Some(dummy_user()) }), Vec::new());
    let transition = resolve_identity_check(&check, "/news");
    assert_eq!(transition.phase, AuthPhase::Authenticated);
    assert_eq!(transition.update, SessionUpdate::SetUser(dummy_user()));
    assert!(transition.redirect.is_none());
}

#[test]
fn user_wins_over_accompanying_errors() {
    let check = settled_with(Some(MeData { me: Some(dummy_user()) }), vec![unauthenticated_error()]);
    let transition = resolve_identity_check(&check, "/news");
    assert_eq!(transition.phase, AuthPhase::Authenticated);
}

#[test]
fn graphql_error_on_protected_path_redirects_with_encoded_path() {
    let check = settled_with(None, vec![unauthenticated_error()]);
    let transition = resolve_identity_check(&check, "/news/create");
    assert_eq!(transition.phase, AuthPhase::Unauthenticated);
    assert_eq!(transition.update, SessionUpdate::ClearUser);
    assert_eq!(transition.redirect.as_deref(), Some("/sign-in?redirect=%2Fnews%2Fcreate"));
}

#[test]
fn network_error_on_protected_path_redirects() {
    let check = IdentityCheck::Settled(Err(ApiError::network("Me", NetworkErrorKind::Timeout, "timed out")));
    let transition = resolve_identity_check(&check, "/tenants");
    assert_eq!(transition.phase, AuthPhase::Unauthenticated);
    assert_eq!(transition.redirect.as_deref(), Some("/sign-in?redirect=%2Ftenants"));
}

#[test]
fn error_on_sign_in_path_does_not_redirect() {
    let check = settled_with(None, vec![unauthenticated_error()]);
    let transition = resolve_identity_check(&check, "/sign-in");
    assert_eq!(transition.phase, AuthPhase::Unauthenticated);
    assert_eq!(transition.update, SessionUpdate::ClearUser);
    assert!(transition.redirect.is_none());
}

#[test]
fn error_on_any_public_path_does_not_redirect() {
    for path in ["/sign-up", "/forgot-password", "/otp"] {
        let check = settled_with(None, vec![unauthenticated_error()]);
        assert!(resolve_identity_check(&check, path).redirect.is_none(), "{path}");
    }
}

#[test]
fn null_user_without_error_is_unauthenticated() {
    let check = settled_with(Some(MeData { me: None }), Vec::new());
    let transition = resolve_identity_check(&check, "/stories");
    assert_eq!(transition.phase, AuthPhase::Unauthenticated);
    assert_eq!(transition.update, SessionUpdate::ClearUser);
    assert_eq!(transition.redirect.as_deref(), Some("/sign-in?redirect=%2Fstories"));
}

#[test]
fn missing_data_without_error_is_unauthenticated() {
    let check = settled_with(None, Vec::new());
    assert_eq!(resolve_identity_check(&check, "/").phase, AuthPhase::Unauthenticated);
}

// =========================================================================
// run_bootstrap
// =========================================================================

#[test]
fn bootstrap_stores_user_from_identity_check() {
    let (gateway, _) = MockTransport::new()
        .route("Me", test_helpers::ok(json!({ "data": { "me": test_helpers::user_json() } })))
        .into_gateway();
    let navigator = RecordingNavigator::at("/news");
    let store = SessionStore::new();

    let phase = block_on(run_bootstrap(&gateway, store, &navigator));

    assert_eq!(phase, AuthPhase::Authenticated);
    assert_eq!(store.snapshot().user, Some(dummy_user()));
    assert!(!store.snapshot().is_loading);
    assert!(navigator.soft_navigations().is_empty());
}

#[test]
fn bootstrap_clears_and_redirects_on_error() {
    let (gateway, _) = MockTransport::new()
        .route("Me", test_helpers::ok(json!({ "data": null, "errors": [{ "message": "Unauthenticated" }] })))
        .into_gateway();
    let navigator = RecordingNavigator::at("/news/create");
    let store = SessionStore::new();
    store.set_user(dummy_user());

    let phase = block_on(run_bootstrap(&gateway, store, &navigator));

    assert_eq!(phase, AuthPhase::Unauthenticated);
    assert!(!store.snapshot().is_authenticated());
    assert!(!store.snapshot().is_loading);
    assert_eq!(navigator.soft_navigations(), vec!["/sign-in?redirect=%2Fnews%2Fcreate".to_owned()]);
}

#[test]
fn bootstrap_on_sign_in_page_does_not_redirect() {
    let (gateway, _) = MockTransport::new()
        .route("Me", test_helpers::ok(json!({ "errors": [{ "message": "Unauthenticated" }] })))
        .into_gateway();
    let navigator = RecordingNavigator::at("/sign-in");
    let store = SessionStore::new();

    let phase = block_on(run_bootstrap(&gateway, store, &navigator));

    assert_eq!(phase, AuthPhase::Unauthenticated);
    assert!(navigator.soft_navigations().is_empty());
    assert!(navigator.hard_navigations().is_empty());
}

#[test]
fn bootstrap_settles_null_user_as_unauthenticated() {
    let (gateway, _) = MockTransport::new()
        .route("Me", test_helpers::ok(json!({ "data": { "me": null } })))
        .into_gateway();
    let navigator = RecordingNavigator::at("/");
    let store = SessionStore::new();

    let phase = block_on(run_bootstrap(&gateway, store, &navigator));

    assert_eq!(phase, AuthPhase::Unauthenticated);
    assert!(!store.snapshot().is_loading);
    assert_eq!(navigator.soft_navigations(), vec!["/sign-in?redirect=%2F".to_owned()]);
}

#[test]
fn bootstrap_timeout_does_not_leave_session_loading() {
    let (gateway, _) = MockTransport::new().route("Me", test_helpers::timed_out()).into_gateway();
    let navigator = RecordingNavigator::at("/rallies");
    let store = SessionStore::new();

    let phase = block_on(run_bootstrap(&gateway, store, &navigator));

    assert_eq!(phase, AuthPhase::Unauthenticated);
    assert!(!store.snapshot().is_loading);
    assert_eq!(navigator.soft_navigations(), vec!["/sign-in?redirect=%2Frallies".to_owned()]);
}

#[test]
fn bootstrap_and_domain_query_do_not_interfere() {
    let (gateway, transport) = MockTransport::new()
        .route("Me", test_helpers::ok(json!({ "data": { "me": test_helpers::user_json() } })))
        .route(
            "MerchandiseProducts",
            test_helpers::ok(json!({ "data": { "merchandiseProducts": [
                { "id": "p-9", "name": "Mug", "price": 8.0, "stock": 10, "isPublished": true, "category": null }
            ] } })),
        )
        .into_gateway();
    let navigator = RecordingNavigator::at("/merchandise");
    let store = SessionStore::new();
    let variables = ListVariables::first(5);

    let (phase, products) = block_on(async {
        futures::join!(
            run_bootstrap(&gateway, store, &navigator),
            gateway.execute::<MerchandiseProducts>(&variables),
        )
    });

    assert_eq!(phase, AuthPhase::Authenticated);
    assert_eq!(store.snapshot().user, Some(dummy_user()));
    assert_eq!(products.unwrap().data.unwrap().merchandise_products[0].name, "Mug");

    let mut operations = transport.operations();
    operations.sort();
    assert_eq!(operations, vec!["Me".to_owned(), "MerchandiseProducts".to_owned()]);
}

#[test]
fn session_is_loading_while_identity_check_is_in_flight() {
    let store = SessionStore::new();
    let transport = Arc::new(StoreObservingTransport::new(
        store,
        test_helpers::ok(json!({ "data": { "me": test_helpers::user_json() } })),
    ));
    let gateway = Gateway::new(transport.clone());
    let navigator = RecordingNavigator::at("/news");

    let phase = block_on(run_bootstrap(&gateway, store, &navigator));

    assert_eq!(*transport.loading_seen.lock().unwrap(), vec![true]);
    assert_eq!(phase, AuthPhase::Authenticated);
    assert!(!store.snapshot().is_loading);
}

#[test]
fn sign_in_during_failed_check_keeps_new_session() {
    let store = SessionStore::new();
    let mut transport = StoreObservingTransport::new(store, test_helpers::timed_out());
    transport.sign_in_during_request = Some(dummy_user());
    let gateway = Gateway::new(Arc::new(transport));
    let navigator = RecordingNavigator::at("/sign-in");

    let phase = block_on(run_bootstrap(&gateway, store, &navigator));

    assert_eq!(phase, AuthPhase::Authenticated);
    assert_eq!(store.snapshot().user, Some(dummy_user()));
    assert!(!store.snapshot().is_loading);
    assert!(navigator.soft_navigations().is_empty());
}

#[test]
fn signed_in_during_check_requires_a_new_user() {
    let user = dummy_user();
    assert!(signed_in_during_check(None, Some(&user)));
    assert!(!signed_in_during_check(Some(&user), Some(&user)));
    assert!(!signed_in_during_check(Some(&user), None));
    assert!(!signed_in_during_check(None, None));
}
