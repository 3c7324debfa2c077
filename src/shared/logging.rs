//! Structured logging for the ARC Privus web client
//!
//! Every API call and session transition goes through these helpers so log
//! lines carry the same fields. Passwords and tokens are never logged.

/// Log operations for the client
#[derive(Debug, Clone, Copy)]
pub enum LogOperation {
    Authentication,
    Session,
    Request,
    Inference,
    Health,
}

impl LogOperation {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogOperation::Authentication => "authentication",
            LogOperation::Session => "session",
            LogOperation::Request => "request",
            LogOperation::Inference => "inference",
            LogOperation::Health => "health",
        }
    }
}

/// Log an outgoing request (after the auth header was decided)
pub fn log_request(method: &str, path: &str, request_id: &str, authenticated: bool) {
    tracing::debug!(
        operation = LogOperation::Request.as_str(),
        method = method,
        path = path,
        request_id = request_id,
        authenticated = authenticated,
        "Sending API request"
    );
}

/// Log the status of a response
pub fn log_response(method: &str, path: &str, request_id: &str, status: u16) {
    tracing::debug!(
        operation = LogOperation::Request.as_str(),
        method = method,
        path = path,
        request_id = request_id,
        status = status,
        "API response received"
    );
}

/// Log a transport failure (no response at all)
pub fn log_network_error(method: &str, path: &str, request_id: &str, error: &str) {
    tracing::warn!(
        operation = LogOperation::Request.as_str(),
        method = method,
        path = path,
        request_id = request_id,
        error = error,
        "API request failed before a response"
    );
}

/// Log a 401 that ended the session
pub fn log_session_rejected(path: &str, request_id: &str) {
    tracing::warn!(
        operation = LogOperation::Session.as_str(),
        path = path,
        request_id = request_id,
        "Session rejected by backend, clearing token and redirecting to login"
    );
}

pub fn log_login_start(email: &str) {
    tracing::info!(
        operation = LogOperation::Authentication.as_str(),
        email = email,
        "Login attempt"
    );
}

pub fn log_login_success(email: &str, token_type: &str) {
    tracing::info!(
        operation = LogOperation::Authentication.as_str(),
        email = email,
        token_type = token_type,
        "Login succeeded, token persisted"
    );
}

pub fn log_login_failure(email: &str, error: &str) {
    tracing::warn!(
        operation = LogOperation::Authentication.as_str(),
        email = email,
        error = error,
        "Login failed"
    );
}

pub fn log_registration(email: &str) {
    tracing::info!(
        operation = LogOperation::Authentication.as_str(),
        email = email,
        "Registration submitted"
    );
}

pub fn log_logout() {
    tracing::info!(
        operation = LogOperation::Session.as_str(),
        "Logged out, token cleared"
    );
}

/// Log a completed inference
pub fn log_inference_result(tokens_used: u32, processing_time: f64, model_version: &str) {
    tracing::info!(
        operation = LogOperation::Inference.as_str(),
        tokens_used = tokens_used,
        processing_time = processing_time,
        model_version = model_version,
        "Inference completed"
    );
}

/// Log a dashboard/playground load that fell back silently
pub fn log_background_load_error(operation: LogOperation, what: &str, error: &str) {
    tracing::error!(
        operation = operation.as_str(),
        resource = what,
        error = error,
        "Error loading {}",
        what
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_operation_as_str() {
        assert_eq!(LogOperation::Authentication.as_str(), "authentication");
        assert_eq!(LogOperation::Session.as_str(), "session");
        assert_eq!(LogOperation::Request.as_str(), "request");
        assert_eq!(LogOperation::Inference.as_str(), "inference");
        assert_eq!(LogOperation::Health.as_str(), "health");
    }

    #[derive(Clone, Default)]
    struct CapturedLogs(std::sync::Arc<std::sync::Mutex<Vec<u8>>>);

    impl std::io::Write for CapturedLogs {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    fn capture(f: impl FnOnce()) -> String {
        let logs = CapturedLogs::default();
        let writer = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .finish();
        tracing::subscriber::with_default(subscriber, f);
        let bytes = logs.0.lock().unwrap().clone();
        String::from_utf8(bytes).unwrap()
    }

    #[test]
    fn test_background_load_error_carries_callers_operation() {
        let output = capture(|| {
            log_background_load_error(LogOperation::Inference, "AI models", "timeout");
        });
        assert!(output.contains("operation=\"inference\""), "{output}");
        assert!(!output.contains("operation=\"health\""), "{output}");

        let output = capture(|| {
            log_background_load_error(LogOperation::Health, "health status", "timeout");
        });
        assert!(output.contains("operation=\"health\""), "{output}");
    }
}
