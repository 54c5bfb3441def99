use crate::api::{LoginRequest, RegisterRequest};
use leptos::*;

#[derive(Clone, Copy)]
pub struct SignupFormState {
    pub name: RwSignal<String>,
    pub email: RwSignal<String>,
    pub password: RwSignal<String>,
    pub confirm_password: RwSignal<String>,
}

impl SignupFormState {
    pub fn new() -> Self {
        Self {
            name: create_rw_signal(String::new()),
            email: create_rw_signal(String::new()),
            password: create_rw_signal(String::new()),
            confirm_password: create_rw_signal(String::new()),
        }
    }

    pub fn snapshot(&self) -> SignupSubmission {
        SignupSubmission {
            name: self.name.get_untracked(),
            email: self.email.get_untracked(),
            password: self.password.get_untracked(),
            confirm_password: self.confirm_password.get_untracked(),
        }
    }
}

/// Field values captured at submit time, so later edits cannot change an
/// in-flight registration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignupSubmission {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl SignupSubmission {
    pub fn passwords_match(&self) -> bool {
        self.password == self.confirm_password
    }

    pub fn register_request(&self) -> RegisterRequest {
        RegisterRequest {
            name: self.name.clone(),
            email: self.email.clone(),
            password: self.password.clone(),
            role: "admin".to_string(),
        }
    }

    pub fn login_request(&self) -> LoginRequest {
        LoginRequest {
            email: self.email.clone(),
            password: self.password.clone(),
            role: "admin".to_string(),
        }
    }
}
