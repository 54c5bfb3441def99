use super::repository::{SignupError, SignupRepository};
use super::utils::{SignupFormState, SignupSubmission};
use crate::api::{ApiClient, SessionUser};
use crate::state::auth::{self, AuthState};
use leptos::*;
use log::error;
use std::rc::Rc;

#[derive(Clone)]
pub struct SignupViewModel {
    pub form: SignupFormState,
    pub error: RwSignal<Option<String>>,
    pub submit_action: Action<SignupSubmission, Result<SessionUser, SignupError>>,
}

pub fn use_signup_view_model() -> SignupViewModel {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let repository = SignupRepository::new_with_client(Rc::new(api));

    let form = SignupFormState::new();
    let error = create_rw_signal(None::<String>);
    let (_auth, set_auth) = auth::use_auth();

    let repo_for_submit = repository.clone();
    let submit_action = create_action(move |submission: &SignupSubmission| {
        let repo = repo_for_submit.clone();
        let submission = submission.clone();
        async move { repo.register_then_login(submission).await }
    });

    create_effect(move |_| {
        if let Some(result) = submit_action.value().get() {
            if let Some(target) = apply_submit_result(result, error, set_auth) {
                if let Ok(win) = crate::utils::storage::window() {
                    let _ = win.location().set_href(target);
                }
            }
        }
    });

    SignupViewModel {
        form,
        error,
        submit_action,
    }
}

// Success writes the session before the redirect target is returned; any
// failure leaves the session store untouched.
fn apply_submit_result(
    result: Result<SessionUser, SignupError>,
    error: RwSignal<Option<String>>,
    set_auth: WriteSignal<AuthState>,
) -> Option<&'static str> {
    match result {
        Ok(user) => {
            error.set(None);
            auth::login(user, set_auth);
            Some("/admin/dashboard")
        }
        Err(err) => {
            error!("Admin signup failed: {}", err);
            error.set(Some(err.to_string()));
            None
        }
    }
}
