use crate::{api::SessionUser, utils::storage as storage_utils};
use leptos::*;

const SESSION_STORAGE_KEY: &str = "current_user";

type AuthContext = (ReadSignal<AuthState>, WriteSignal<AuthState>);

#[derive(Debug, Clone, Default)]
pub struct AuthState {
    pub user: Option<SessionUser>,
    pub is_authenticated: bool,
}

fn create_auth_context() -> AuthContext {
    let (auth_state, set_auth_state) = create_signal(AuthState::default());
    if let Some(user) = restore_session() {
        set_auth_state.update(|state| {
            state.user = Some(user);
            state.is_authenticated = true;
        });
    }
    (auth_state, set_auth_state)
}

#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let ctx = create_auth_context();
    provide_context::<AuthContext>(ctx);
    view! { <>{children()}</> }
}

pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().unwrap_or_else(|| create_signal(AuthState::default()))
}

fn restore_session() -> Option<SessionUser> {
    let storage = storage_utils::local_storage().ok()?;
    let raw = storage.get_item(SESSION_STORAGE_KEY).ok()??;
    serde_json::from_str(&raw).ok()
}

fn persist_session(user: &SessionUser) {
    if let Ok(storage) = storage_utils::local_storage() {
        if let Ok(raw) = serde_json::to_string(user) {
            let _ = storage.set_item(SESSION_STORAGE_KEY, &raw);
        }
    }
}

fn clear_session() {
    if let Ok(storage) = storage_utils::local_storage() {
        let _ = storage.remove_item(SESSION_STORAGE_KEY);
    }
}

pub fn login(user: SessionUser, set_auth_state: WriteSignal<AuthState>) {
    persist_session(&user);
    set_auth_state.update(|state| {
        state.user = Some(user);
        state.is_authenticated = true;
    });
}

pub fn logout(set_auth_state: WriteSignal<AuthState>) {
    clear_session();
    set_auth_state.update(|state| {
        state.user = None;
        state.is_authenticated = false;
    });
}



#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::helpers::admin_user;

    #[test]
    fn login_and_logout_update_auth_state() {
        let runtime = create_runtime();
        let (state, set_state) = create_signal(AuthState::default());

        login(admin_user(), set_state);
        let snapshot = state.get();
        assert!(snapshot.is_authenticated);
        assert_eq!(
            snapshot.user.as_ref().map(|u| u.profile.email.as_str()),
            Some("asha@example.com")
        );

        logout(set_state);
        let snapshot = state.get();
        assert!(!snapshot.is_authenticated);
        assert!(snapshot.user.is_none());
        runtime.dispose();
    }

    #[test]
    fn restore_session_is_none_without_a_window() {
        assert!(restore_session().is_none());
    }
}
