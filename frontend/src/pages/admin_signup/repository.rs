use super::utils::SignupSubmission;
use crate::api::{ApiClient, ApiError, SessionUser};
use std::rc::Rc;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SignupError {
    #[error("Passwords do not match")]
    PasswordsDoNotMatch,
    #[error("{}", backend_message(.0))]
    Register(ApiError),
    #[error("{}", backend_message(.0))]
    Login(ApiError),
    #[error("Unauthorized. Not an admin.")]
    NotAdmin,
}

fn backend_message(error: &ApiError) -> String {
    if error.is_server_reported() && !error.error.is_empty() {
        error.error.clone()
    } else {
        "Admin registration failed".to_string()
    }
}

#[derive(Clone)]
pub struct SignupRepository {
    client: Rc<ApiClient>,
}

impl SignupRepository {
    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    /// Registers the admin account and immediately signs it in. Nothing is
    /// sent when the password fields disagree, and the login request is only
    /// issued once registration has succeeded.
    pub async fn register_then_login(
        &self,
        submission: SignupSubmission,
    ) -> Result<SessionUser, SignupError> {
        if !submission.passwords_match() {
            return Err(SignupError::PasswordsDoNotMatch);
        }

        self.client
            .register_admin(&submission.register_request())
            .await
            .map_err(SignupError::Register)?;

        let response = self
            .client
            .login_admin(&submission.login_request())
            .await
            .map_err(SignupError::Login)?;

        if !response.user.is_admin() {
            return Err(SignupError::NotAdmin);
        }

        Ok(SessionUser::from_login(response))
    }
}
