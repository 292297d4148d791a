//! # secure-route
//!
//! Authentication route guard for Leptos single-page applications.
//!
//! Wrap the router in [`Security`] with an [`AuthClient`] and its auth-state
//! signal, then wrap protected views in [`SecureRoute`]. A guard whose path
//! matches the current location starts one login trigger per unauthenticated
//! episode, renders its children once authenticated, and renders an error view
//! if the trigger fails.
//!
//! The decision logic lives in `guard`, free of reactive types; `components`
//! only wires it to signals and effects.

pub mod auth;
pub mod components;
pub mod error;
pub mod guard;
pub mod state;
pub mod util;

pub use auth::client::{AuthClient, AuthFuture, OnAuthRequired, SharedAuthClient};
pub use auth::context::{AuthContext, Security, use_auth};
pub use components::auth_error::AuthErrorView;
pub use components::secure_route::SecureRoute;
pub use error::{ErrorView, LoginError};
pub use guard::status::GuardStatus;
pub use state::auth::{AuthState, AuthStatus};
