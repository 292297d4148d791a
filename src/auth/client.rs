//! Authentication client trait and the `on_auth_required` handler type.
//!
//! SYSTEM CONTEXT
//! ==============
//! Browser SDK bindings produce `!Send` futures, so login operations return
//! [`LocalBoxFuture`] and run on the local task executor. The handles
//! themselves are `Arc`-shared so they can live in Leptos context.

use std::fmt;
use std::sync::Arc;

use futures::future::LocalBoxFuture;

use crate::error::LoginError;

/// Future returned by login-trigger operations.
pub type AuthFuture = LocalBoxFuture<'static, Result<(), LoginError>>;

/// Shared handle to the application's authentication client.
pub type SharedAuthClient = Arc<dyn AuthClient>;

/// Operations the guard consumes from the authentication SDK.
pub trait AuthClient: Send + Sync + 'static {
    /// Persist the URI to return to once sign-in completes.
    fn set_original_uri(&self, uri: &str);

    /// Start the SDK's default sign-in redirect.
    ///
    /// On success the page usually navigates away before the future resolves.
    fn sign_in_with_redirect(&self) -> AuthFuture;
}

/// Custom login trigger that replaces the default redirect.
#[derive(Clone)]
pub struct OnAuthRequired(Arc<dyn Fn(SharedAuthClient) -> AuthFuture + Send + Sync>);

impl OnAuthRequired {
    pub fn new<F>(handler: F) -> Self
    where
        F: Fn(SharedAuthClient) -> AuthFuture + Send + Sync + 'static,
    {
        Self(Arc::new(handler))
    }

    pub fn call(&self, client: SharedAuthClient) -> AuthFuture {
        (self.0)(client)
    }
}

/// Handlers compare by identity, like function references.
impl PartialEq for OnAuthRequired {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for OnAuthRequired {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("OnAuthRequired")
    }
}
