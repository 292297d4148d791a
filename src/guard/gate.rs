//! Re-entrancy gate for login triggers.
//!
//! At most one trigger runs per "not authenticated" episode. The gate opens
//! again only after the client reports an authenticated session.

#[cfg(test)]
#[path = "gate_test.rs"]
mod gate_test;

use crate::state::auth::{AuthState, AuthStatus};

/// What the guard effect should do after observing the current state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoginAction {
    /// The location is not this guard's route.
    Unmatched,
    /// Auth state has not resolved yet.
    AwaitAuth,
    /// Session confirmed; the pending flag was cleared.
    Authenticated,
    /// A trigger is already in flight for this episode.
    AlreadyPending,
    /// Start a login trigger now.
    Trigger,
}

/// Per-guard pending-login flag.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LoginGate {
    pending: bool,
}

impl LoginGate {
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Check-and-set the flag for the latest route match and auth snapshot.
    pub fn observe(&mut self, matched: bool, auth: Option<&AuthState>) -> LoginAction {
        if !matched {
            return LoginAction::Unmatched;
        }
        match AuthStatus::of(auth) {
            AuthStatus::Unknown => LoginAction::AwaitAuth,
            AuthStatus::Authenticated => {
                self.pending = false;
                LoginAction::Authenticated
            }
            AuthStatus::Unauthenticated if self.pending => LoginAction::AlreadyPending,
            AuthStatus::Unauthenticated => {
                self.pending = true;
                LoginAction::Trigger
            }
        }
    }
}
