//! Session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! The bootstrap controller writes it, route views read it, and the logout
//! button clears it. One [`SessionStore`] is constructed by `App` and shared
//! through Leptos context; nothing else creates one.
//!
//! The store never holds credentials. The session cookie is `HttpOnly` and
//! managed entirely by the browser and server.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::prelude::*;

use crate::net::gateway::Gateway;
use crate::net::graphql::NoVariables;
use crate::net::operations::Logout;
use crate::net::types::User;
use crate::util::navigator::Navigator;
use crate::util::routes::SIGN_IN_PATH;

/// Snapshot of who is signed in and whether the identity check is in flight.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Session {
    pub user: Option<User>,
    pub is_loading: bool,
}

impl Session {
    /// Derived from `user`, so the two can never disagree.
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    pub fn set_user(&mut self, user: User) {
        self.user = Some(user);
        self.is_loading = false;
    }

    pub fn clear_user(&mut self) {
        self.user = None;
        self.is_loading = false;
    }

    pub fn set_loading(&mut self, loading: bool) {
        self.is_loading = loading;
    }
}

/// Shared handle to the session signal.
#[derive(Clone, Copy)]
pub struct SessionStore {
    session: RwSignal<Session>,
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionStore {
    pub fn new() -> Self {
        Self {
            session: RwSignal::new(Session::default()),
        }
    }

    /// Reactive read access for views.
    pub fn session(&self) -> ReadSignal<Session> {
        self.session.read_only()
    }

    /// Current value without subscribing.
    pub fn snapshot(&self) -> Session {
        self.session.get_untracked()
    }

    pub fn set_user(&self, user: User) {
        log::info!("session established: user={}", user.id);
        self.session.update(|session| session.set_user(user));
    }

    pub fn clear_user(&self) {
        self.session.update(Session::clear_user);
    }

    pub fn set_loading(&self, loading: bool) {
        self.session.update(|session| session.set_loading(loading));
    }

    /// End the session on the server, then locally, then reload at sign-in.
    ///
    /// The local session is cleared whatever the server answers (or fails to
    /// answer), and the hard navigation only happens after the clear.
    pub async fn logout(&self, gateway: &Gateway, navigator: &dyn Navigator) {
        match gateway.execute::<Logout>(&NoVariables::default()).await {
            Ok(response) => match response.data {
                Some(data) if data.logout.success => log::info!("server session ended"),
                Some(data) => log::warn!(
                    "server declined logout: {}",
                    data.logout.message.as_deref().unwrap_or("no message")
                ),
                None => log::warn!("logout returned no payload"),
            },
            Err(err) => log::warn!("logout request failed, clearing local session anyway: {err}"),
        }

        self.clear_user();
        navigator.hard_navigate(SIGN_IN_PATH);
    }
}

/// Returns the session store provided by `App`.
///
/// # Panics
///
/// Panics if called outside the `App` component tree.
pub fn use_session() -> SessionStore {
    expect_context::<SessionStore>()
}
