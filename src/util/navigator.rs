//! Navigation capability injected into the auth flows.
//!
//! SYSTEM CONTEXT
//! ==============
//! The bootstrap and logout flows decide *where* to go; a [`Navigator`]
//! performs the move. Tests swap in a recording implementation so intended
//! navigation can be asserted without a browser.

use leptos::prelude::*;
use leptos_router::NavigateOptions;

pub trait Navigator {
    /// Path of the route currently displayed, without query string.
    fn current_path(&self) -> String;

    /// Client-side route change; replaces the history entry.
    fn navigate(&self, to: &str);

    /// Full page load that drops all in-page state and pending requests.
    fn hard_navigate(&self, href: &str);
}

/// [`Navigator`] backed by the Leptos router plus `window.location`.
#[derive(Clone)]
pub struct RouterNavigator<F> {
    navigate: F,
    pathname: Memo<String>,
}

impl<F> RouterNavigator<F>
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    /// Must be called inside a `<Router>`.
    pub fn new(navigate: F) -> Self {
        let pathname = leptos_router::hooks::use_location().pathname;
        Self { navigate, pathname }
    }
}

impl<F> Navigator for RouterNavigator<F>
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    fn current_path(&self) -> String {
        self.pathname.get_untracked()
    }

    fn navigate(&self, to: &str) {
        log::debug!("navigate: {to}");
        (self.navigate)(
            to,
            NavigateOptions {
                replace: true,
                ..NavigateOptions::default()
            },
        );
    }

    fn hard_navigate(&self, href: &str) {
        log::debug!("hard navigate: {href}");
        #[cfg(feature = "csr")]
        {
            if let Some(window) = web_sys::window() {
                if window.location().set_href(href).is_ok() {
                    return;
                }
            }
            log::warn!("hard navigation unavailable, falling back to router: {href}");
        }
        self.navigate(href);
    }
}
