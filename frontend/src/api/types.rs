use chrono::{DateTime, Utc};
use leptos::*;
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
    pub role: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub user: UserProfile,
    pub token: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    // Mongo-backed endpoints report the identifier as `_id`.
    #[serde(alias = "_id", default)]
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl UserProfile {
    pub fn is_admin(&self) -> bool {
        self.role == "admin"
    }
}

/// Authenticated user as held by the session store: the profile returned
/// by the login endpoint merged with its bearer token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    #[serde(flatten)]
    pub profile: UserProfile,
    pub token: String,
}

impl SessionUser {
    pub fn from_login(response: LoginResponse) -> Self {
        Self {
            profile: response.user,
            token: response.token,
        }
    }
}

fn default_api_error_code() -> String {
    "API_ERROR".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ApiError {
    pub error: String,
    #[serde(default = "default_api_error_code")]
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.error)
    }
}

impl From<ApiError> for String {
    fn from(error: ApiError) -> Self {
        error.error
    }
}

impl IntoView for ApiError {
    fn into_view(self) -> View {
        self.error.into_view()
    }
}

impl ApiError {
    pub fn request_failed(msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: "REQUEST_FAILED".to_string(),
            details: None,
        }
    }

    pub fn invalid_response(msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: "INVALID_RESPONSE".to_string(),
            details: None,
        }
    }

    /// True when the error text came out of a backend response body rather
    /// than being synthesized on this side of the wire.
    pub fn is_server_reported(&self) -> bool {
        !matches!(self.code.as_str(), "REQUEST_FAILED" | "INVALID_RESPONSE")
    }
}
