//! Login-trigger failures and the override hook for rendering them.
//!
//! ERROR HANDLING
//! ==============
//! A failed login trigger is caught where it is awaited, stored on the guard,
//! and only ever surfaced through an error view. Causes are kept for display
//! but never change behavior: there is no retry.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use std::fmt;
use std::sync::Arc;

use leptos::prelude::*;

/// Failure raised while starting the sign-in flow.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum LoginError {
    /// Error reported by the authentication SDK itself.
    #[error("AuthSdkError: {summary}")]
    Sdk { code: Option<String>, summary: String },
    /// The default redirect could not be prepared.
    #[error("redirect failed: {0}")]
    Redirect(String),
    /// A caller-supplied `on_auth_required` handler failed.
    #[error("auth required handler failed: {0}")]
    Handler(String),
}

impl LoginError {
    #[must_use]
    pub fn sdk(code: Option<&str>, summary: impl Into<String>) -> Self {
        Self::Sdk { code: code.map(str::to_owned), summary: summary.into() }
    }

    /// Short label for the failure class, used as the error view heading.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Sdk { .. } => "AuthSdkError",
            Self::Redirect(_) => "RedirectError",
            Self::Handler(_) => "HandlerError",
        }
    }

    /// Message without the kind prefix.
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::Sdk { summary, .. } => summary,
            Self::Redirect(message) | Self::Handler(message) => message,
        }
    }

    #[must_use]
    pub fn code(&self) -> Option<&str> {
        match self {
            Self::Sdk { code, .. } => code.as_deref(),
            _ => None,
        }
    }
}

/// Renders a captured [`LoginError`] in place of the guarded view.
#[derive(Clone)]
pub struct ErrorView(Arc<dyn Fn(LoginError) -> AnyView + Send + Sync>);

impl ErrorView {
    pub fn new<F, V>(render: F) -> Self
    where
        F: Fn(LoginError) -> V + Send + Sync + 'static,
        V: IntoView + 'static,
    {
        Self(Arc::new(move |error| render(error).into_any()))
    }

    pub fn run(&self, error: LoginError) -> AnyView {
        (self.0)(error)
    }
}

impl<F, V> From<F> for ErrorView
where
    F: Fn(LoginError) -> V + Send + Sync + 'static,
    V: IntoView + 'static,
{
    fn from(render: F) -> Self {
        Self::new(render)
    }
}

impl fmt::Debug for ErrorView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ErrorView")
    }
}
