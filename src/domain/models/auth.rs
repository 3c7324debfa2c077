use serde::{Deserialize, Serialize};

/// Login form payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginCredentials {
    pub email: String,
    pub password: String,
}

impl LoginCredentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

/// Registration form payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegisterData {
    pub email: String,
    pub password: String,
    pub full_name: String,
}

/// Tokens returned by a successful login
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthTokens {
    pub access_token: String,
    pub token_type: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegisterResponse {
    pub message: String,
    pub email: String,
}

/// Result of `GET /api/v1/auth/verify`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenVerification {
    pub status: String,
    #[serde(default)]
    pub user: Option<String>,
    #[serde(default)]
    pub token_type: Option<String>,
}

impl TokenVerification {
    pub fn is_valid(&self) -> bool {
        self.status == "valid"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credentials_serialize_without_extra_fields() {
        let credentials = LoginCredentials::new("a@b.com", "secret123");
        let json = serde_json::to_value(&credentials).unwrap();
        assert_eq!(json, serde_json::json!({"email": "a@b.com", "password": "secret123"}));
    }

    #[test]
    fn test_verification_tolerates_missing_user() {
        let verification: TokenVerification =
            serde_json::from_str(r#"{"status": "valid"}"#).unwrap();
        assert!(verification.is_valid());
        assert_eq!(verification.user, None);
    }
}
