use std::rc::Rc;

use serde::Serialize;
use serde::de::DeserializeOwned;
use uuid::Uuid;

use crate::config::ClientConfig;
use crate::domain::models::{
    AiRequest, AiResponse, AuthTokens, CapabilitiesResponse, HealthStatus, LoginCredentials,
    ModelsResponse, RegisterData, RegisterResponse, TokenVerification,
};
use crate::shared::constants::{
    AI_CAPABILITIES_PATH, AI_INFER_PATH, AI_MODELS_PATH, HEALTH_PATH, HEALTH_STATUS_PATH,
    LOGIN_PATH, REGISTER_PATH, VERIFY_PATH,
};
use crate::shared::errors::{ApiError, Result};
use crate::shared::logging;
use crate::shared::services::redirect::AuthRedirect;
use crate::shared::services::session::SessionStore;
use crate::shared::services::transport::{HttpMethod, HttpRequest, HttpResponse, HttpTransport};

const UNAUTHORIZED: u16 = 401;

/// Single point of HTTP communication with the backend
///
/// Every request re-reads the session store before it is sent, so login and
/// logout take effect on the next call without rebuilding the client. Any 401
/// clears the token and sends the user to login, whatever the call was.
#[derive(Clone)]
pub struct ApiClient {
    config: ClientConfig,
    transport: Rc<dyn HttpTransport>,
    session: Rc<dyn SessionStore>,
    redirect: Rc<dyn AuthRedirect>,
}

impl ApiClient {
    pub fn new(
        config: ClientConfig,
        transport: Rc<dyn HttpTransport>,
        session: Rc<dyn SessionStore>,
        redirect: Rc<dyn AuthRedirect>,
    ) -> Self {
        Self {
            config,
            transport,
            session,
            redirect,
        }
    }

    /// Client wired to the platform's transport and durable storage
    pub fn for_platform(config: ClientConfig, redirect: Rc<dyn AuthRedirect>) -> Self {
        #[cfg(target_arch = "wasm32")]
        let (transport, session): (Rc<dyn HttpTransport>, Rc<dyn SessionStore>) = (
            Rc::new(crate::shared::services::transport::GlooTransport),
            crate::infrastructure::storage::browser_session(),
        );

        #[cfg(not(target_arch = "wasm32"))]
        let (transport, session): (Rc<dyn HttpTransport>, Rc<dyn SessionStore>) = (
            Rc::new(crate::shared::services::transport::ReqwestTransport::new()),
            crate::infrastructure::storage::file_session(config.session_dir.as_deref()),
        );

        Self::new(config, transport, session, redirect)
    }

    pub fn base_url(&self) -> &str {
        &self.config.api_url
    }

    // ============================================================
    // Interceptors
    // ============================================================

    /// Outgoing: attach the bearer token read right now, if any
    fn authorize(&self, request: HttpRequest) -> (HttpRequest, bool) {
        match self.session.token() {
            Some(token) => (
                request.with_header("Authorization", format!("Bearer {token}")),
                true,
            ),
            None => (request, false),
        }
    }

    /// Incoming: a 401 ends the session globally
    fn inspect(&self, path: &str, request_id: &str, response: &HttpResponse) {
        if response.status != UNAUTHORIZED {
            return;
        }
        logging::log_session_rejected(path, request_id);
        if let Err(e) = self.session.clear() {
            tracing::error!("Failed to clear rejected session: {}", e);
        }
        self.redirect.to_login();
    }

    // ============================================================
    // Generic requests
    // ============================================================

    async fn execute<T: DeserializeOwned>(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<String>,
    ) -> Result<T> {
        let request_id = Uuid::new_v4().to_string();
        let mut request = HttpRequest::new(method, self.config.endpoint(path))
            .with_header("Content-Type", "application/json")
            .with_header("Accept", "application/json")
            .with_header("X-Request-ID", request_id.as_str());
        if let Some(body) = body {
            request = request.with_body(body);
        }

        let (request, authenticated) = self.authorize(request);
        logging::log_request(method.as_str(), path, &request_id, authenticated);

        let response = match self.transport.send(request).await {
            Ok(response) => response,
            Err(e) => {
                logging::log_network_error(method.as_str(), path, &request_id, &e);
                return Err(ApiError::Network(e));
            }
        };
        logging::log_response(method.as_str(), path, &request_id, response.status);

        self.inspect(path, &request_id, &response);

        if !response.is_success() {
            let detail = error_detail(&response.body);
            return Err(if response.status == UNAUTHORIZED {
                ApiError::Unauthorized { detail }
            } else {
                ApiError::Status {
                    status: response.status,
                    detail,
                }
            });
        }

        serde_json::from_str(&response.body).map_err(ApiError::Decode)
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.execute(HttpMethod::Get, path, None).await
    }

    async fn post<T: DeserializeOwned, B: Serialize>(&self, path: &str, body: &B) -> Result<T> {
        let body = serde_json::to_string(body).map_err(ApiError::Encode)?;
        self.execute(HttpMethod::Post, path, Some(body)).await
    }

    // ============================================================
    // Health
    // ============================================================

    pub async fn get_health(&self) -> Result<HealthStatus> {
        self.get(HEALTH_PATH).await
    }

    pub async fn get_health_status(&self) -> Result<HealthStatus> {
        self.get(HEALTH_STATUS_PATH).await
    }

    // ============================================================
    // Authentication
    // ============================================================

    pub async fn register(&self, data: &RegisterData) -> Result<RegisterResponse> {
        logging::log_registration(&data.email);
        self.post(REGISTER_PATH, data).await
    }

    /// Log in and persist the access token before returning
    pub async fn login(&self, credentials: &LoginCredentials) -> Result<AuthTokens> {
        logging::log_login_start(&credentials.email);

        let tokens: AuthTokens = match self.post(LOGIN_PATH, credentials).await {
            Ok(tokens) => tokens,
            Err(e) => {
                logging::log_login_failure(&credentials.email, &e.to_string());
                return Err(e);
            }
        };

        self.session.store(&tokens.access_token)?;
        logging::log_login_success(&credentials.email, &tokens.token_type);
        Ok(tokens)
    }

    pub async fn verify_token(&self) -> Result<TokenVerification> {
        self.get(VERIFY_PATH).await
    }

    /// Drop the persisted token; no network call
    pub fn logout(&self) {
        if let Err(e) = self.session.clear() {
            tracing::error!("Failed to clear session on logout: {}", e);
        }
        logging::log_logout();
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.token().is_some()
    }

    // ============================================================
    // AI
    // ============================================================

    pub async fn ai_inference(&self, request: &AiRequest) -> Result<AiResponse> {
        let response: AiResponse = self.post(AI_INFER_PATH, request).await?;
        logging::log_inference_result(
            response.tokens_used,
            response.processing_time,
            &response.model_version,
        );
        Ok(response)
    }

    pub async fn get_ai_models(&self) -> Result<ModelsResponse> {
        self.get(AI_MODELS_PATH).await
    }

    pub async fn get_ai_capabilities(&self) -> Result<CapabilitiesResponse> {
        self.get(AI_CAPABILITIES_PATH).await
    }
}

/// Structured error detail from a failed response body
/// FastAPI errors carry `detail`; the backend's own handlers use `message`.
fn error_detail(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    ["detail", "message"]
        .iter()
        .find_map(|key| value.get(*key).and_then(|v| v.as_str()))
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::services::testing::{TestHarness, json_response};

    #[test]
    fn test_error_detail_extraction() {
        assert_eq!(error_detail(r#"{"detail": "Invalid token"}"#), Some("Invalid token".into()));
        assert_eq!(
            error_detail(r#"{"status": "error", "message": "Validation error"}"#),
            Some("Validation error".into())
        );
        assert_eq!(error_detail(r#"{"detail": [{"loc": ["body"]}]}"#), None);
        assert_eq!(error_detail("<html>Bad gateway</html>"), None);
    }

    #[tokio::test]
    async fn test_login_persists_token_and_next_request_carries_it() {
        let harness = TestHarness::new();
        harness.transport.push(json_response(
            200,
            r#"{"access_token": "tok1", "token_type": "bearer"}"#,
        ));
        harness.transport.push(json_response(
            200,
            r#"{"result": "hello", "tokens_used": 2, "processing_time": 0.01, "model_version": "arc-1"}"#,
        ));

        let tokens = harness
            .client
            .login(&LoginCredentials::new("a@b.com", "secret123"))
            .await
            .unwrap();
        assert_eq!(tokens.access_token, "tok1");
        assert_eq!(harness.session.token(), Some("tok1".to_string()));
        assert!(harness.client.is_authenticated());

        harness.client.ai_inference(&AiRequest::new("hi")).await.unwrap();

        let requests = harness.transport.requests();
        assert_eq!(requests[0].header("Authorization"), None);
        assert_eq!(requests[1].url, "http://localhost:8000/api/v1/ai/infer");
        assert_eq!(requests[1].header("Authorization"), Some("Bearer tok1"));
        assert_eq!(requests[1].body.as_deref(), Some(r#"{"prompt":"hi"}"#));
    }

    #[tokio::test]
    async fn test_failed_login_never_persists_token() {
        let harness = TestHarness::new();
        harness
            .transport
            .push(json_response(400, r#"{"detail": "Incorrect email or password"}"#));

        let error = harness
            .client
            .login(&LoginCredentials::new("a@b.com", "wrong"))
            .await
            .unwrap_err();

        assert_eq!(error.detail(), Some("Incorrect email or password"));
        assert!(!harness.client.is_authenticated());
        assert_eq!(harness.transport.requests().len(), 1);
    }

    #[tokio::test]
    async fn test_unauthorized_clears_token_and_redirects_once() {
        let harness = TestHarness::with_token("tok1");
        harness
            .transport
            .push(json_response(401, r#"{"detail": "Could not validate credentials"}"#));

        let error = harness
            .client
            .ai_inference(&AiRequest::new("hi"))
            .await
            .unwrap_err();

        assert!(error.is_unauthorized());
        assert_eq!(harness.session.token(), None);
        assert_eq!(harness.session.clear_count(), 1);
        assert_eq!(harness.redirect.count(), 1);
    }

    #[tokio::test]
    async fn test_unauthorized_on_public_endpoint_still_ends_session() {
        let harness = TestHarness::with_token("tok1");
        harness.transport.push(json_response(401, "{}"));

        let _ = harness.client.get_health().await;

        assert!(!harness.client.is_authenticated());
        assert_eq!(harness.redirect.count(), 1);
    }

    #[tokio::test]
    async fn test_other_errors_keep_the_session() {
        let harness = TestHarness::with_token("tok1");
        harness
            .transport
            .push(json_response(500, r#"{"detail": "AI processing failed"}"#));
        harness.transport.push_network_error("connection refused");

        let error = harness.client.ai_inference(&AiRequest::new("hi")).await.unwrap_err();
        assert!(matches!(error, ApiError::Status { status: 500, .. }));
        assert_eq!(error.user_message("fallback"), "AI processing failed");

        let error = harness.client.get_ai_models().await.unwrap_err();
        assert!(matches!(error, ApiError::Network(_)));

        assert!(harness.client.is_authenticated());
        assert_eq!(harness.redirect.count(), 0);
    }

    #[tokio::test]
    async fn test_logout_is_synchronous_and_offline() {
        let harness = TestHarness::with_token("tok1");
        assert!(harness.client.is_authenticated());

        harness.client.logout();

        assert!(!harness.client.is_authenticated());
        assert!(harness.transport.requests().is_empty());
    }

    #[tokio::test]
    async fn test_header_omitted_after_logout() {
        let harness = TestHarness::with_token("tok1");
        harness.transport.push(json_response(200, r#"{"models": []}"#));
        harness.transport.push(json_response(200, r#"{"models": []}"#));

        harness.client.get_ai_models().await.unwrap();
        harness.client.logout();
        harness.client.get_ai_models().await.unwrap();

        let requests = harness.transport.requests();
        assert_eq!(requests[0].header("Authorization"), Some("Bearer tok1"));
        assert_eq!(requests[1].header("Authorization"), None);
    }

    #[tokio::test]
    async fn test_every_request_gets_its_own_request_id() {
        let harness = TestHarness::new();
        harness.transport.push(json_response(200, r#"{"status": "healthy"}"#));
        harness.transport.push(json_response(200, r#"{"status": "healthy"}"#));

        harness.client.get_health_status().await.unwrap();
        harness.client.get_health_status().await.unwrap();

        let requests = harness.transport.requests();
        let first = requests[0].header("X-Request-ID").unwrap();
        let second = requests[1].header("X-Request-ID").unwrap();
        assert_ne!(first, second);
        assert_eq!(requests[0].header("Content-Type"), Some("application/json"));
        assert_eq!(requests[0].method, HttpMethod::Get);
    }

    #[test]
    fn test_base_url_matches_configured_backend() {
        let harness = TestHarness::new();
        assert_eq!(harness.client.base_url(), "http://localhost:8000");
    }

    #[tokio::test]
    async fn test_verify_token_is_authenticated_get() {
        let harness = TestHarness::with_token("tok1");
        harness.transport.push(json_response(
            200,
            r#"{"status": "valid", "user": "a@b.com", "token_type": "access"}"#,
        ));

        let verification = harness.client.verify_token().await.unwrap();

        assert!(verification.is_valid());
        assert_eq!(verification.user.as_deref(), Some("a@b.com"));
        let request = &harness.transport.requests()[0];
        assert_eq!(request.url, "http://localhost:8000/api/v1/auth/verify");
        assert_eq!(request.header("Authorization"), Some("Bearer tok1"));
        assert_eq!(request.body, None);
    }

    #[tokio::test]
    async fn test_mismatched_body_is_a_decode_error() {
        let harness = TestHarness::new();
        harness.transport.push(json_response(200, r#"{"unexpected": true}"#));

        let error = harness.client.get_ai_capabilities().await.unwrap_err();
        assert!(matches!(error, ApiError::Decode(_)));
    }

    #[tokio::test]
    async fn test_register_has_no_session_side_effect() {
        let harness = TestHarness::new();
        harness.transport.push(json_response(
            201,
            r#"{"message": "User registered successfully", "email": "a@b.com"}"#,
        ));

        let response = harness
            .client
            .register(&RegisterData {
                email: "a@b.com".into(),
                password: "secret123".into(),
                full_name: "Ada Byron".into(),
            })
            .await
            .unwrap();

        assert_eq!(response.email, "a@b.com");
        assert!(!harness.client.is_authenticated());
        assert_eq!(
            harness.transport.requests()[0].url,
            "http://localhost:8000/api/v1/auth/register"
        );
    }

    #[tokio::test]
    async fn test_session_state_follows_login_logout_sequence() {
        let harness = TestHarness::new();
        for token in ["tok1", "tok2"] {
            harness.transport.push(json_response(
                200,
                &format!(r#"{{"access_token": "{token}", "token_type": "bearer"}}"#),
            ));
        }

        assert!(!harness.client.is_authenticated());
        harness
            .client
            .login(&LoginCredentials::new("a@b.com", "secret123"))
            .await
            .unwrap();
        assert!(harness.client.is_authenticated());
        harness.client.logout();
        assert!(!harness.client.is_authenticated());
        harness
            .client
            .login(&LoginCredentials::new("a@b.com", "secret123"))
            .await
            .unwrap();
        assert_eq!(harness.session.token(), Some("tok2".to_string()));
    }
}
