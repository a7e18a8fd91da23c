//! Sign-in page: email + password against the `signIn` mutation.
//!
//! On success the session is stored and the visitor is sent back to the
//! `?redirect=` path they were bounced from.

#[cfg(test)]
#[path = "sign_in_test.rs"]
mod sign_in_test;

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::hooks::{use_location, use_navigate};

use crate::error::ApiError;
use crate::net::gateway::Gateway;
use crate::net::graphql::GraphqlResponse;
use crate::net::operations::{SignIn, SignInData, SignInVariables};
use crate::net::types::{SignInInput, User};
use crate::state::session::use_session;
use crate::util::navigator::{Navigator, RouterNavigator};
use crate::util::routes::redirect_target;

const MISSING_CREDENTIALS: &str = "Email and password are required.";
const REJECTED_CREDENTIALS: &str = "Invalid email or password.";

fn validate_sign_in_input(email: &str, password: &str) -> Result<SignInInput, &'static str> {
    let email = email.trim();
    if email.is_empty() || password.trim().is_empty() {
        return Err(MISSING_CREDENTIALS);
    }
    Ok(SignInInput {
        email: email.to_owned(),
        password: password.to_owned(),
    })
}

/// Reduce the mutation result to the signed-in user or an alert message.
fn sign_in_outcome(result: Result<GraphqlResponse<SignInData>, ApiError>) -> Result<User, String> {
    let response = result.map_err(|err| err.message().to_owned())?;
    let user = response
        .data
        .as_ref()
        .and_then(|data| data.sign_in.as_ref())
        .and_then(|payload| payload.user.clone());
    match (user, response.first_error()) {
        (Some(user), _) => Ok(user),
        (None, Some(err)) => Err(err.message().to_owned()),
        (None, None) => Err(REJECTED_CREDENTIALS.to_owned()),
    }
}

#[component]
pub fn SignInPage() -> impl IntoView {
    let store = use_session();
    let gateway = expect_context::<Gateway>();
    let navigator = RouterNavigator::new(use_navigate());
    let search = use_location().search;

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);

    let sign_in = Action::new_local(move |input: &SignInInput| {
        let gateway = gateway.clone();
        let variables = SignInVariables {
            input: input.clone(),
        };
        async move { sign_in_outcome(gateway.execute::<SignIn>(&variables).await) }
    });
    let busy = sign_in.pending();

    Effect::new(move |_| {
        if let Some(outcome) = sign_in.value().get() {
            match outcome {
                Ok(user) => {
                    store.set_user(user);
                    navigator.navigate(&redirect_target(&search.get_untracked()));
                }
                Err(message) => error.set(Some(message)),
            }
        }
    });

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        error.set(None);
        match validate_sign_in_input(&email.get_untracked(), &password.get_untracked()) {
            Ok(input) => {
                sign_in.dispatch(input);
            }
            Err(message) => error.set(Some(message.to_owned())),
        }
    };

    view! {
        <div class="auth-page">
            <form class="auth-card" on:submit=on_submit>
                <h1>"Sign in"</h1>
                <label for="email">"Email"</label>
                <input
                    id="email"
                    type="email"
                    autocomplete="username"
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                />
                <label for="password">"Password"</label>
                <input
                    id="password"
                    type="password"
                    autocomplete="current-password"
                    prop:value=move || password.get()
                    on:input=move |ev| password.set(event_target_value(&ev))
                />
                <Show when=move || error.get().is_some()>
                    <div class="alert alert--error" role="alert">
                        {move || error.get().unwrap_or_default()}
                    </div>
                </Show>
                <button class="auth-button" type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Signing in..." } else { "Sign in" }}
                </button>
            </form>
        </div>
    }
}
