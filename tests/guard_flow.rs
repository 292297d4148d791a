//! End-to-end guard decisions without a reactive runtime.
//!
//! `Guard` replays what `SecureRoute` does on each effect run: observe the
//! gate, queue a login trigger, and resolve the render status. Queued triggers
//! are driven explicitly so re-runs can happen while one is in flight.

use std::sync::{Arc, Mutex};

use futures::FutureExt as _;
use futures::executor::block_on;
use futures::future::LocalBoxFuture;

use secure_route::auth::login::{resolve_handler, trigger_login};
use secure_route::guard::gate::{LoginAction, LoginGate};
use secure_route::util::path_match::{PathPattern, route_matches};
use secure_route::util::url::original_uri;
use secure_route::{AuthClient, AuthFuture, AuthState, GuardStatus, LoginError, OnAuthRequired, SharedAuthClient};

#[derive(Default)]
struct FakeClient {
    calls: Mutex<Vec<String>>,
    fail_with: Option<LoginError>,
}

impl FakeClient {
    fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

impl AuthClient for FakeClient {
    fn set_original_uri(&self, uri: &str) {
        self.calls.lock().unwrap().push(format!("set_original_uri {uri}"));
    }

    fn sign_in_with_redirect(&self) -> AuthFuture {
        self.calls.lock().unwrap().push("sign_in_with_redirect".to_owned());
        let result = self.fail_with.clone().map_or(Ok(()), Err);
        async move { result }.boxed_local()
    }
}

struct Guard {
    client: SharedAuthClient,
    pattern: Option<PathPattern>,
    handler: Option<OnAuthRequired>,
    gate: LoginGate,
    error: Arc<Mutex<Option<LoginError>>>,
    in_flight: Vec<LocalBoxFuture<'static, ()>>,
}

impl Guard {
    fn new(client: SharedAuthClient, path: Option<&str>) -> Self {
        Self {
            client,
            pattern: path.map(|p| PathPattern::new(p, false)),
            handler: None,
            gate: LoginGate::default(),
            error: Arc::new(Mutex::new(None)),
            in_flight: Vec::new(),
        }
    }

    fn with_handlers(mut self, route: Option<&OnAuthRequired>, ambient: Option<&OnAuthRequired>) -> Self {
        self.handler = resolve_handler(route, ambient);
        self
    }

    /// One effect run followed by one render.
    fn run(&mut self, location: (&str, &str, &str), auth: Option<&AuthState>) -> GuardStatus {
        let (pathname, search, hash) = location;
        let matched = route_matches(self.pattern.as_ref(), pathname);
        if self.gate.observe(matched, auth) == LoginAction::Trigger {
            let client = self.client.clone();
            let handler = self.handler.clone();
            let uri = original_uri(pathname, search, hash);
            let slot = self.error.clone();
            self.in_flight.push(
                async move {
                    if let Err(error) = trigger_login(client, &uri, handler).await {
                        *slot.lock().unwrap() = Some(error);
                    }
                }
                .boxed_local(),
            );
        }
        GuardStatus::resolve(self.error.lock().unwrap().is_some(), matched, auth)
    }

    fn settle(&mut self) {
        for task in self.in_flight.drain(..) {
            block_on(task);
        }
    }

    fn error(&self) -> Option<LoginError> {
        self.error.lock().unwrap().clone()
    }
}

const PROFILE: (&str, &str, &str) = ("/profile", "", "");
const OTHER: (&str, &str, &str) = ("/other", "", "");

#[test]
fn unauthenticated_visit_persists_uri_then_redirects_once() {
    let client = Arc::new(FakeClient::default());
    let mut guard = Guard::new(client.clone(), Some("/profile"));
    let status = guard.run(("/profile", "?tab=2", ""), Some(&AuthState::unauthenticated()));
    guard.settle();
    assert_eq!(status, GuardStatus::Redirecting);
    assert_eq!(client.calls(), vec!["set_original_uri /profile?tab=2".to_owned(), "sign_in_with_redirect".to_owned()]);
}

#[test]
fn unmatched_location_never_triggers() {
    let client = Arc::new(FakeClient::default());
    let mut guard = Guard::new(client.clone(), Some("/profile"));
    for auth in [None, Some(AuthState::default()), Some(AuthState::unauthenticated()), Some(AuthState::authenticated())] {
        assert_eq!(guard.run(OTHER, auth.as_ref()), GuardStatus::Unmatched);
    }
    guard.settle();
    assert!(client.calls().is_empty());
}

#[test]
fn unresolved_auth_renders_nothing_and_waits() {
    let client = Arc::new(FakeClient::default());
    let mut guard = Guard::new(client.clone(), Some("/profile"));
    assert_eq!(guard.run(PROFILE, None), GuardStatus::Loading);
    assert_eq!(guard.run(PROFILE, Some(&AuthState::default())), GuardStatus::Loading);
    guard.settle();
    assert!(client.calls().is_empty());
}

#[test]
fn authenticated_visit_renders_route_without_trigger() {
    let client = Arc::new(FakeClient::default());
    let mut guard = Guard::new(client.clone(), Some("/profile"));
    assert_eq!(guard.run(PROFILE, Some(&AuthState::authenticated())), GuardStatus::Authorized);
    assert!(client.calls().is_empty());
}

#[test]
fn guard_without_path_applies_everywhere() {
    let client = Arc::new(FakeClient::default());
    let mut guard = Guard::new(client.clone(), None);
    assert_eq!(guard.run(OTHER, Some(&AuthState::unauthenticated())), GuardStatus::Redirecting);
    guard.settle();
    assert_eq!(client.calls(), vec!["set_original_uri /other".to_owned(), "sign_in_with_redirect".to_owned()]);
}

#[test]
fn effect_reruns_while_pending_do_not_retrigger() {
    let client = Arc::new(FakeClient::default());
    let mut guard = Guard::new(client.clone(), Some("/profile"));
    let auth = AuthState::unauthenticated();
    for _ in 0..4 {
        guard.run(PROFILE, Some(&auth.clone()));
    }
    assert_eq!(guard.in_flight.len(), 1);
    guard.settle();
    guard.run(PROFILE, Some(&auth));
    assert!(guard.in_flight.is_empty());
    assert_eq!(client.calls().iter().filter(|c| *c == "sign_in_with_redirect").count(), 1);
}

#[test]
fn new_episode_after_authentication_triggers_again() {
    let client = Arc::new(FakeClient::default());
    let mut guard = Guard::new(client.clone(), Some("/profile"));
    guard.run(PROFILE, Some(&AuthState::unauthenticated()));
    guard.settle();
    guard.run(PROFILE, Some(&AuthState::authenticated()));
    guard.run(PROFILE, Some(&AuthState::unauthenticated()));
    guard.settle();
    assert_eq!(client.calls().iter().filter(|c| *c == "sign_in_with_redirect").count(), 2);
}

#[test]
fn handler_precedence_route_then_ambient_then_default() {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let named = |name: &'static str| {
        let seen = seen.clone();
        OnAuthRequired::new(move |_| {
            seen.lock().unwrap().push(name);
            async { Ok(()) }.boxed_local()
        })
    };
    let route = named("route");
    let ambient = named("ambient");

    let client = Arc::new(FakeClient::default());
    let mut guard = Guard::new(client.clone(), Some("/profile")).with_handlers(Some(&route), Some(&ambient));
    guard.run(PROFILE, Some(&AuthState::unauthenticated()));
    guard.settle();

    let mut guard = Guard::new(client.clone(), Some("/profile")).with_handlers(None, Some(&ambient));
    guard.run(PROFILE, Some(&AuthState::unauthenticated()));
    guard.settle();

    assert_eq!(*seen.lock().unwrap(), vec!["route", "ambient"]);
    assert!(!client.calls().contains(&"sign_in_with_redirect".to_owned()));
}

#[test]
fn trigger_failure_latches_the_exact_error() {
    let failure = LoginError::sdk(Some("E0000001"), "issuer unreachable");
    let client = Arc::new(FakeClient { fail_with: Some(failure.clone()), ..Default::default() });
    let mut guard = Guard::new(client, Some("/profile"));
    guard.run(PROFILE, Some(&AuthState::unauthenticated()));
    guard.settle();
    assert_eq!(guard.error(), Some(failure.clone()));

    assert_eq!(guard.run(PROFILE, Some(&AuthState::authenticated())), GuardStatus::Failed);
    assert_eq!(guard.run(OTHER, Some(&AuthState::authenticated())), GuardStatus::Failed);
    assert_eq!(guard.error(), Some(failure));
}
