use crate::{api::SessionUser, state::auth::use_auth};
use leptos::*;

#[component]
pub fn RequireAdmin(children: ChildrenFn) -> impl IntoView {
    let (auth, _) = use_auth();
    let is_authenticated = create_memo(move |_| auth.get().is_authenticated);
    let is_admin = create_memo(move |_| is_admin_user(auth.get().user.as_ref()));
    create_effect(move |_| {
        let state = auth.get();
        let target = if !state.is_authenticated {
            "/admin/signup"
        } else if !is_admin_user(state.user.as_ref()) {
            "/"
        } else {
            return;
        };
        if let Ok(win) = crate::utils::storage::window() {
            let _ = win.location().set_href(target);
        }
    });
    view! {
        <Show
            when=move || should_render_admin_children(is_authenticated.get(), is_admin.get())
            fallback=|| ()
        >
            {children()}
        </Show>
    }
}

fn is_admin_user(user: Option<&SessionUser>) -> bool {
    user.map(|u| u.profile.is_admin()).unwrap_or(false)
}

fn should_render_admin_children(is_authenticated: bool, is_admin: bool) -> bool {
    is_authenticated && is_admin
}
