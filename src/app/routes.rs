use std::rc::Rc;

use dioxus::prelude::*;
use dioxus::router::Navigator;

use crate::app::pages::{AiPlayground, Dashboard, Home, Login, Register};
use crate::config::CONFIG;
use crate::shared::hooks::use_api_client;
use crate::shared::services::{ApiClient, AuthRedirect};

#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
    #[route("/")]
    Home {},
    #[route("/login")]
    Login {},
    #[route("/register")]
    Register {},
    #[route("/dashboard")]
    Dashboard {},
    #[route("/ai-playground")]
    AiPlayground {},
}

#[component]
pub fn App() -> Element {
    rsx! {
        Router::<Route> {}
    }
}

/// Sends rejected sessions to `/login` through the router
struct RouterRedirect {
    navigator: Navigator,
}

impl AuthRedirect for RouterRedirect {
    fn to_login(&self) {
        self.navigator.replace(Route::Login {});
    }
}

/// Shared shell: stylesheet and the one API client every page uses
#[component]
fn Layout() -> Element {
    const BUNDLE_CSS: Asset = asset!("/assets/dist/bundle.css");

    let navigator = use_navigator();
    let api = use_context_provider(move || {
        ApiClient::for_platform(CONFIG.clone(), Rc::new(RouterRedirect { navigator }))
    });
    use_hook(|| {
        tracing::info!(api_url = %api.base_url(), "ARC Privus web client initialized");
    });

    rsx! {
        document::Link { rel: "stylesheet", href: BUNDLE_CSS }
        div { class: "c-app",
            Outlet::<Route> {}
        }
    }
}

/// Outcome of the session check on a guarded route
#[derive(Debug, Clone, PartialEq)]
pub enum GuardDecision {
    Render,
    Redirect(Route),
}

/// Decide whether a guarded page may render with the current session
pub fn guard_decision(api: &ApiClient) -> GuardDecision {
    if api.is_authenticated() {
        GuardDecision::Render
    } else {
        GuardDecision::Redirect(Route::Login {})
    }
}

/// Renders its children only with a persisted session, otherwise replaces the route with login
#[component]
pub fn RequireAuth(children: Element) -> Element {
    let api = use_api_client();
    let navigator = use_navigator();
    let decision = guard_decision(&api);

    let redirect = match &decision {
        GuardDecision::Render => None,
        GuardDecision::Redirect(target) => Some(target.clone()),
    };
    use_effect(move || {
        if let Some(target) = redirect.clone() {
            tracing::debug!("No session, redirecting to login");
            navigator.replace(target);
        }
    });

    match decision {
        GuardDecision::Render => rsx! { {children} },
        GuardDecision::Redirect(_) => rsx! {},
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::services::testing::{TestHarness, json_response};

    #[test]
    fn test_guard_redirects_without_session() {
        let harness = TestHarness::new();
        assert_eq!(
            guard_decision(&harness.client),
            GuardDecision::Redirect(Route::Login {})
        );
        assert!(harness.transport.requests().is_empty());
    }

    #[test]
    fn test_guard_renders_with_session() {
        let harness = TestHarness::with_token("tok1");
        assert_eq!(guard_decision(&harness.client), GuardDecision::Render);
    }

    #[test]
    fn test_guard_redirects_after_logout() {
        let harness = TestHarness::with_token("tok1");
        harness.client.logout();
        assert_eq!(
            guard_decision(&harness.client),
            GuardDecision::Redirect(Route::Login {})
        );
    }

    #[tokio::test]
    async fn test_guard_redirects_after_rejected_session() {
        let harness = TestHarness::with_token("tok1");
        harness.transport.push(json_response(401, r#"{"detail": "expired"}"#));

        assert!(harness.client.get_ai_models().await.is_err());
        assert_eq!(
            guard_decision(&harness.client),
            GuardDecision::Redirect(Route::Login {})
        );
    }

    #[test]
    fn test_login_route_path() {
        assert_eq!(Route::Login {}.to_string(), "/login");
    }
}
