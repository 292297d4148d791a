//! Default view for a failed login trigger.

#[cfg(test)]
#[path = "auth_error_test.rs"]
mod auth_error_test;

use leptos::prelude::*;

use crate::error::LoginError;

/// Shown by `SecureRoute` when no custom `error_view` is configured.
#[component]
pub fn AuthErrorView(error: LoginError) -> impl IntoView {
    let code = error.code().map(str::to_owned);
    view! {
        <div class="auth-error" role="alert">
            <p class="auth-error__headline">{headline(&error)}</p>
            {code.map(|code| view! { <p class="auth-error__code">"Error Code: " {code}</p> })}
        </div>
    }
}

fn headline(error: &LoginError) -> String {
    format!("{}: {}", error.kind(), error.message())
}
