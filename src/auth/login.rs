//! A single login-trigger attempt.
//!
//! The guard decides *whether* to trigger; this module decides *how*:
//! persist the original URI, then run exactly one of the route handler, the
//! app-wide handler, or the client's default redirect.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use super::client::{OnAuthRequired, SharedAuthClient};
use crate::error::LoginError;

/// Route-level handler wins over the app-wide one.
#[must_use]
pub fn resolve_handler(
    route: Option<&OnAuthRequired>,
    ambient: Option<&OnAuthRequired>,
) -> Option<OnAuthRequired> {
    route.or(ambient).cloned()
}

/// Persist `original_uri` and start sign-in.
///
/// # Errors
///
/// Returns whatever the handler or default redirect reported.
pub async fn trigger_login(
    client: SharedAuthClient,
    original_uri: &str,
    handler: Option<OnAuthRequired>,
) -> Result<(), LoginError> {
    client.set_original_uri(original_uri);
    match handler {
        Some(handler) => {
            tracing::debug!(original_uri, "invoking on_auth_required handler");
            handler.call(client).await
        }
        None => {
            tracing::debug!(original_uri, "invoking default sign-in redirect");
            client.sign_in_with_redirect().await
        }
    }
}
