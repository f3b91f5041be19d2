use serde::{Deserialize, Serialize};

use crate::login_flow::AuthError;

// ============================================================================
// Auth Types
// ============================================================================

/// What the identity provider answered for one sign-in attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginResult {
    pub success: bool,
    #[serde(default)]
    pub error: Option<String>,
}

impl LoginResult {
    pub fn ok() -> Self {
        Self {
            success: true,
            error: None,
        }
    }

    pub fn rejected(error: Option<String>) -> Self {
        Self {
            success: false,
            error: error.filter(|e| !e.is_empty()),
        }
    }

    /// Reads the auth endpoint's answer. A successful status must carry a
    /// `LoginResult`; any other status is a rejection, with the `ApiError`
    /// message when the body has one.
    pub fn from_response(ok: bool, body: &str) -> Result<Self, AuthError> {
        if ok {
            return serde_json::from_str(body).map_err(|e| AuthError::Decode(e.to_string()));
        }
        Ok(match serde_json::from_str::<ApiError>(body) {
            Ok(err) => err.into(),
            Err(_) => Self::rejected(None),
        })
    }
}

impl From<ApiError> for LoginResult {
    fn from(err: ApiError) -> Self {
        Self::rejected(Some(err.error.message))
    }
}

// ============================================================================
// API Response Types
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiError {
    pub error: ApiErrorBody,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiErrorBody {
    pub code: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentUserResponse {
    pub user_id: i32,
    pub email: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogoutResponse {
    pub status: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_result_error_may_be_omitted() {
        let result: LoginResult = serde_json::from_str(r#"{"success":false}"#).unwrap();
        assert_eq!(result, LoginResult::rejected(None));

        let result: LoginResult = serde_json::from_str(r#"{"success":true,"error":null}"#).unwrap();
        assert_eq!(result, LoginResult::ok());
    }

    #[test]
    fn login_result_serializes_error_field() {
        let json = serde_json::to_value(LoginResult::rejected(Some("Cuenta bloqueada".into()))).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "success": false, "error": "Cuenta bloqueada" })
        );
    }

    #[test]
    fn rejected_treats_empty_message_as_missing() {
        assert_eq!(LoginResult::rejected(Some(String::new())).error, None);
    }

    #[test]
    fn api_error_converts_to_rejection() {
        let body = r#"{"error":{"code":"FORBIDDEN","message":"Email domain not allowed"}}"#;
        let err: ApiError = serde_json::from_str(body).unwrap();
        assert_eq!(err.error.code, "FORBIDDEN");

        let result = LoginResult::from(err);
        assert!(!result.success);
        assert_eq!(result.error.as_deref(), Some("Email domain not allowed"));
    }

    #[test]
    fn api_error_with_blank_message_has_no_detail() {
        let body = r#"{"error":{"code":"UNAUTHORIZED","message":""}}"#;
        let err: ApiError = serde_json::from_str(body).unwrap();
        assert_eq!(LoginResult::from(err), LoginResult::rejected(None));
    }

    #[test]
    fn success_status_decodes_login_result() {
        let result = LoginResult::from_response(true, r#"{"success":true}"#).unwrap();
        assert_eq!(result, LoginResult::ok());

        let result =
            LoginResult::from_response(true, r#"{"success":false,"error":"Popup cerrado"}"#).unwrap();
        assert_eq!(result, LoginResult::rejected(Some("Popup cerrado".into())));
    }

    #[test]
    fn success_status_with_garbage_body_is_decode_error() {
        let err = LoginResult::from_response(true, "<html>502</html>").unwrap_err();
        assert!(matches!(err, AuthError::Decode(_)));

        let err = LoginResult::from_response(true, "").unwrap_err();
        assert!(matches!(err, AuthError::Decode(_)));
    }

    #[test]
    fn error_status_uses_api_error_message() {
        let body = r#"{"error":{"code":"FORBIDDEN","message":"Cuenta suspendida"}}"#;
        let result = LoginResult::from_response(false, body).unwrap();
        assert_eq!(result, LoginResult::rejected(Some("Cuenta suspendida".into())));
    }

    #[test]
    fn error_status_with_unreadable_body_has_no_detail() {
        for body in ["", "Bad Gateway", r#"{"success":false}"#] {
            let result = LoginResult::from_response(false, body).unwrap();
            assert_eq!(result, LoginResult::rejected(None));
        }
    }
}
