//! Auth-state snapshot published by the authentication client.
//!
//! SYSTEM CONTEXT
//! ==============
//! The client owns the session; guards only observe the latest snapshot. A
//! missing snapshot and a snapshot without `isAuthenticated` both mean the
//! client has not resolved the session yet.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use serde::{Deserialize, Serialize};

/// Read-only authentication snapshot.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthState {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_authenticated: Option<bool>,
    /// Error reported by the client while resolving the session.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Tri-state classification of an optional snapshot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthStatus {
    /// No snapshot yet, or the snapshot leaves authentication unresolved.
    Unknown,
    Authenticated,
    Unauthenticated,
}

impl AuthState {
    #[must_use]
    pub fn authenticated() -> Self {
        Self { is_authenticated: Some(true), error: None }
    }

    #[must_use]
    pub fn unauthenticated() -> Self {
        Self { is_authenticated: Some(false), error: None }
    }

    /// Decode a snapshot pushed across a JS bridge, e.g. `{"isAuthenticated":false}`.
    ///
    /// # Errors
    ///
    /// Returns the `serde_json` error when `raw` is not a JSON object of this shape.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    #[must_use]
    pub fn status(&self) -> AuthStatus {
        match self.is_authenticated {
            None => AuthStatus::Unknown,
            Some(true) => AuthStatus::Authenticated,
            Some(false) => AuthStatus::Unauthenticated,
        }
    }
}

impl AuthStatus {
    /// Classify a snapshot that may not have been published yet.
    #[must_use]
    pub fn of(state: Option<&AuthState>) -> Self {
        state.map_or(Self::Unknown, AuthState::status)
    }
}
