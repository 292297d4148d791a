//! Route guard component.
//!
//! SYSTEM CONTEXT
//! ==============
//! Wraps a routed view. When the current location matches `path` and the
//! enclosing `Security` provider reports an unauthenticated session, starts
//! one login trigger per episode. Renders the wrapped view only once
//! authenticated, and the error view if the trigger failed.
//!
//! CONCURRENCY
//! ===========
//! The trigger future runs on the local executor and is never cancelled. If the
//! guard unmounts first, its error slot is disposed and a late failure is
//! dropped by `try_set`.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::auth::client::OnAuthRequired;
use crate::auth::context::{AuthContext, use_auth};
use crate::auth::login::{resolve_handler, trigger_login};
use crate::components::auth_error::AuthErrorView;
use crate::error::{ErrorView, LoginError};
use crate::guard::gate::{LoginAction, LoginGate};
use crate::guard::status::GuardStatus;
use crate::util::path_match::{PathPattern, route_matches};
use crate::util::url::original_uri;

/// Render `children` only for an authenticated session, starting the login
/// flow when this route is visited without one.
///
/// Without a `path` the guard applies to every location.
#[component]
pub fn SecureRoute(
    #[prop(optional, into)] path: Option<String>,
    #[prop(optional)] case_sensitive: bool,
    /// Replaces the app-wide handler and the default redirect.
    #[prop(optional)]
    on_auth_required: Option<OnAuthRequired>,
    #[prop(optional, into)] error_view: Option<ErrorView>,
    /// Notified with the reason behind each render decision.
    #[prop(optional)]
    on_status: Option<Callback<GuardStatus>>,
    children: ChildrenFn,
) -> impl IntoView {
    let AuthContext { client, auth_state, on_auth_required: ambient } = use_auth();
    let location = use_location();
    let (pathname, search, hash) = (location.pathname, location.search, location.hash);

    let pattern = path.as_deref().map(|path| PathPattern::new(path, case_sensitive));
    let pattern_case_sensitive = pattern.as_ref().is_some_and(PathPattern::case_sensitive);
    let matched = Memo::new(move |_| pathname.with(|pathname| route_matches(pattern.as_ref(), pathname)));

    let gate = StoredValue::new(LoginGate::default());
    let login_error = RwSignal::new(None::<LoginError>);
    let handler = resolve_handler(on_auth_required.as_ref(), ambient.as_ref());

    Effect::new(move || {
        let matched = matched.get();
        let mut next = gate.get_value();
        let action = auth_state.with(|auth| next.observe(matched, auth.as_ref()));
        gate.set_value(next);
        tracing::debug!(
            ?action,
            pending = next.is_pending(),
            case_sensitive = pattern_case_sensitive,
            pathname = %pathname.get_untracked(),
            "secure route observed state"
        );
        if action != LoginAction::Trigger {
            return;
        }

        let uri = original_uri(&pathname.get_untracked(), &search.get_untracked(), &hash.get_untracked());
        tracing::info!(original_uri = %uri, "authentication required, starting login");
        let client = client.clone();
        let handler = handler.clone();
        leptos::task::spawn_local(async move {
            if let Err(error) = trigger_login(client, &uri, handler).await {
                tracing::warn!(%error, "login trigger failed");
                if login_error.try_set(Some(error)).is_some() {
                    tracing::debug!("guard unmounted before the login trigger settled");
                }
            }
        });
    });

    let status = Memo::new(move |_| {
        let has_error = login_error.with(Option::is_some);
        auth_state.with(|auth| GuardStatus::resolve(has_error, matched.get(), auth.as_ref()))
    });
    if let Some(on_status) = on_status {
        Effect::new(move || on_status.run(status.get()));
    }

    let error_view = error_view.unwrap_or_else(|| ErrorView::new(|error| view! { <AuthErrorView error/> }));

    move || {
        if let Some(error) = login_error.get() {
            return error_view.run(error);
        }
        if status.get().renders_nothing() {
            return ().into_any();
        }
        children().into_any()
    }
}
