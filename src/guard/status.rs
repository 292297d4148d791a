//! Render decision for a guard.

#[cfg(test)]
#[path = "status_test.rs"]
mod status_test;

use crate::state::auth::{AuthState, AuthStatus};

/// Why a guard renders what it renders.
///
/// Only `Failed` and `Authorized` produce output; the rest render nothing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardStatus {
    /// A login trigger failed; the error view is shown until remount.
    Failed,
    /// The location is not this guard's route.
    Unmatched,
    /// Auth state has not resolved yet.
    Loading,
    /// Not authenticated; a login flow is (or was) started.
    Redirecting,
    /// Authenticated; the wrapped view is shown.
    Authorized,
}

impl GuardStatus {
    #[must_use]
    pub fn resolve(has_error: bool, matched: bool, auth: Option<&AuthState>) -> Self {
        if has_error {
            return Self::Failed;
        }
        if !matched {
            return Self::Unmatched;
        }
        match AuthStatus::of(auth) {
            AuthStatus::Unknown => Self::Loading,
            AuthStatus::Unauthenticated => Self::Redirecting,
            AuthStatus::Authenticated => Self::Authorized,
        }
    }

    #[must_use]
    pub fn renders_nothing(self) -> bool {
        !matches!(self, Self::Failed | Self::Authorized)
    }
}
