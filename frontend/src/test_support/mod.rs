#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod ssr;

#[cfg(test)]
pub mod helpers {
    use crate::api::{SessionUser, UserProfile};
    use crate::state::auth::AuthState;
    use leptos::*;

    pub fn admin_user() -> SessionUser {
        SessionUser {
            profile: UserProfile {
                id: "u-admin".into(),
                name: "Asha Sharma".into(),
                email: "asha@example.com".into(),
                role: "admin".into(),
                created_at: None,
            },
            token: "jwt-token".into(),
        }
    }

    pub fn customer_user() -> SessionUser {
        SessionUser {
            profile: UserProfile {
                id: "u-customer".into(),
                name: "Casey Jones".into(),
                email: "casey@example.com".into(),
                role: "customer".into(),
                created_at: None,
            },
            token: "jwt-token".into(),
        }
    }

    pub fn provide_auth(
        user: Option<SessionUser>,
    ) -> (ReadSignal<AuthState>, WriteSignal<AuthState>) {
        let is_authenticated = user.is_some();
        let (auth, set_auth) = create_signal(AuthState {
            user,
            is_authenticated,
        });
        provide_context((auth, set_auth));
        (auth, set_auth)
    }
}
