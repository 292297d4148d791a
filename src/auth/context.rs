//! Shares the authentication client and its state with the component tree.

use leptos::prelude::*;

use super::client::{OnAuthRequired, SharedAuthClient};
use crate::state::auth::AuthState;

/// Everything a guard reads from its enclosing [`Security`] provider.
#[derive(Clone)]
pub struct AuthContext {
    pub client: SharedAuthClient,
    /// Latest snapshot, `None` until the client publishes one.
    pub auth_state: Signal<Option<AuthState>>,
    /// App-wide login trigger used when a guard has no handler of its own.
    pub on_auth_required: Option<OnAuthRequired>,
}

/// Root provider for guarded routes.
///
/// Wrap the router with this so every [`SecureRoute`](crate::components::secure_route::SecureRoute)
/// below it observes the same client and auth state.
#[component]
pub fn Security(
    client: SharedAuthClient,
    #[prop(into)] auth_state: Signal<Option<AuthState>>,
    #[prop(optional)] on_auth_required: Option<OnAuthRequired>,
    children: Children,
) -> impl IntoView {
    provide_context(AuthContext { client, auth_state, on_auth_required });
    children()
}

/// Fetch the [`AuthContext`] provided by an enclosing [`Security`].
///
/// # Panics
///
/// Panics when called outside a `Security` provider.
pub fn use_auth() -> AuthContext {
    expect_context::<AuthContext>()
}
