use super::{
    client::ApiClient,
    types::{ApiError, LoginRequest, LoginResponse, RegisterRequest},
};

impl ApiClient {
    /// Creates the admin account. A 2xx response means the account exists;
    /// the response body is not consulted.
    pub async fn register_admin(&self, request: &RegisterRequest) -> Result<(), ApiError> {
        let response = self.post_json("/api/auth/register", request).await?;
        if response.status().is_success() {
            Ok(())
        } else {
            Err(Self::error_from_response(response).await)
        }
    }

    pub async fn login_admin(&self, request: &LoginRequest) -> Result<LoginResponse, ApiError> {
        let response = self.post_json("/api/auth/login", request).await?;
        if response.status().is_success() {
            response
                .json()
                .await
                .map_err(|e| ApiError::invalid_response(format!("Failed to parse response: {}", e)))
        } else {
            Err(Self::error_from_response(response).await)
        }
    }
}
