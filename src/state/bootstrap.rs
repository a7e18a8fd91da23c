//! Auth bootstrap: resolves the session from the server-held cookie on every
//! application load.
//!
//! DESIGN
//! ======
//! The decision is a pure function of the identity-check outcome and the
//! current path ([`resolve_identity_check`]). Applying it (store writes,
//! navigation) is a separate step so the policy can be tested without a
//! browser or router.
//!
//! The policy is fail-closed: any error, and a settled response with no user,
//! clears the session and bounces non-public routes to sign-in. Ordinary data
//! fetches elsewhere are fail-open and render inline alerts instead.

#[cfg(test)]
#[path = "bootstrap_test.rs"]
mod bootstrap_test;

use crate::error::ApiError;
use crate::net::gateway::Gateway;
use crate::net::graphql::{GraphqlResponse, NoVariables};
use crate::net::operations::{Me, MeData};
use crate::net::types::User;
use crate::state::session::SessionStore;
use crate::util::navigator::Navigator;
use crate::util::routes::{is_public_route, sign_in_redirect};

/// Where the bootstrap currently stands.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AuthPhase {
    /// Nothing has been asked yet.
    #[default]
    Unknown,
    /// Identity check in flight.
    Checking,
    Authenticated,
    Unauthenticated,
}

/// What is known about the identity-check request.
#[derive(Clone, Debug, PartialEq)]
pub enum IdentityCheck {
    InFlight,
    Settled(Result<GraphqlResponse<MeData>, ApiError>),
}

/// Store write requested by a transition.
#[derive(Clone, Debug, PartialEq)]
pub enum SessionUpdate {
    SetUser(User),
    ClearUser,
    Loading,
}

/// Outcome of resolving an identity check.
#[derive(Clone, Debug, PartialEq)]
pub struct Transition {
    pub phase: AuthPhase,
    pub update: SessionUpdate,
    /// In-app route to move to after the update, if any.
    pub redirect: Option<String>,
}

/// Decide the next phase, store write, and redirect for `check` observed
/// while `current_path` is displayed.
///
/// A user in the response wins even when errors accompany it (partial
/// success). Without a user, a settled check is unauthenticated whether or
/// not the server reported an error.
pub fn resolve_identity_check(check: &IdentityCheck, current_path: &str) -> Transition {
    let result = match check {
        IdentityCheck::InFlight => {
            return Transition {
                phase: AuthPhase::Checking,
                update: SessionUpdate::Loading,
                redirect: None,
            };
        }
        IdentityCheck::Settled(result) => result,
    };

    let user = result
        .as_ref()
        .ok()
        .and_then(|response| response.data.as_ref())
        .and_then(|data| data.me.clone());

    if let Some(user) = user {
        return Transition {
            phase: AuthPhase::Authenticated,
            update: SessionUpdate::SetUser(user),
            redirect: None,
        };
    }

    let redirect = (!is_public_route(current_path)).then(|| sign_in_redirect(current_path));
    Transition {
        phase: AuthPhase::Unauthenticated,
        update: SessionUpdate::ClearUser,
        redirect,
    }
}

/// Write `transition` to the store, then navigate if it asks to.
pub fn apply_transition(transition: Transition, store: SessionStore, navigator: &dyn Navigator) -> AuthPhase {
    match transition.update {
        SessionUpdate::Loading => store.set_loading(true),
        SessionUpdate::SetUser(user) => store.set_user(user),
        SessionUpdate::ClearUser => store.clear_user(),
    }
    if let Some(target) = transition.redirect {
        log::info!("no session, redirecting to {target}");
        navigator.navigate(&target);
    }
    transition.phase
}

/// Whether a user was stored while the identity check was in flight. That
/// check predates the sign-in, so its negative answer is stale.
fn signed_in_during_check(started_with: Option<&User>, now: Option<&User>) -> bool {
    now.is_some() && now != started_with
}

/// Run the identity check once and settle the session.
///
/// The path is read again after the response arrives so the redirect points
/// at wherever the user is by then. A sign-in that completes while the check
/// is in flight is kept. A hung request cannot keep the session
/// loading forever: the transport's timeout surfaces as a network error,
/// which settles to `Unauthenticated`.
pub async fn run_bootstrap(gateway: &Gateway, store: SessionStore, navigator: &dyn Navigator) -> AuthPhase {
    let checking = resolve_identity_check(&IdentityCheck::InFlight, &navigator.current_path());
    apply_transition(checking, store, navigator);
    let started_with = store.snapshot().user;
    log::debug!("identity check started");

    let result = gateway.execute::<Me>(&NoVariables::default()).await;
    if let Err(err) = &result {
        log::warn!("identity check failed: {err}");
    }

    let settled = resolve_identity_check(&IdentityCheck::Settled(result), &navigator.current_path());
    if settled.phase == AuthPhase::Unauthenticated
        && signed_in_during_check(started_with.as_ref(), store.snapshot().user.as_ref())
    {
        log::info!("identity check settled after sign-in, keeping the new session");
        return AuthPhase::Authenticated;
    }
    let phase = apply_transition(settled, store, navigator);
    log::debug!("identity check settled: {phase:?}");
    phase
}
