use crate::state::auth::{self, use_auth};
use leptos::*;

#[component]
pub fn Header() -> impl IntoView {
    let (auth, set_auth) = use_auth();
    let is_authenticated = move || auth.get().is_authenticated;
    let can_access_admin = move || {
        auth.get()
            .user
            .as_ref()
            .map(|user| user.profile.is_admin())
            .unwrap_or(false)
    };
    let on_logout = move |_| {
        auth::logout(set_auth);
        if let Ok(win) = crate::utils::storage::window() {
            let _ = win.location().set_href("/");
        }
    };
    view! {
        <header class="bg-surface-elevated shadow-sm border-b border-border">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between items-center h-16">
                    <div class="flex items-center">
                        <h1 class="text-xl font-semibold text-fg">
                            "Storefront"
                        </h1>
                    </div>
                    <nav class="flex space-x-4 items-center">
                        <a href="/" class="text-fg-muted hover:text-fg px-3 py-2 rounded-md text-sm font-medium hover:bg-action-ghost-bg-hover">
                            "Home"
                        </a>
                        <Show when=can_access_admin>
                            <a href="/admin/dashboard" class="text-fg-muted hover:text-fg px-3 py-2 rounded-md text-sm font-medium hover:bg-action-ghost-bg-hover">
                                "Dashboard"
                            </a>
                        </Show>
                        <Show when=move || !is_authenticated()>
                            <a href="/admin/signup" class="text-fg-muted hover:text-fg px-3 py-2 rounded-md text-sm font-medium hover:bg-action-ghost-bg-hover">
                                "Admin Sign Up"
                            </a>
                        </Show>
                        <Show when=is_authenticated>
                            <button
                                on:click=on_logout
                                class="text-fg-muted hover:text-fg px-3 py-2 rounded-md text-sm font-medium hover:bg-action-ghost-bg-hover"
                            >
                                "Log Out"
                            </button>
                        </Show>
                    </nav>
                </div>
            </div>
        </header>
    }
}

#[component]
pub fn Layout(children: Children) -> impl IntoView {
    view! {
        <div class="min-h-screen bg-surface">
            <Header/>
            <main class="max-w-7xl mx-auto py-6 sm:px-6 lg:px-8">
                {children()}
            </main>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::helpers::{admin_user, customer_user};
    use crate::test_support::ssr::render_with_session;

    #[test]
    fn header_renders_dashboard_link_for_admins() {
        let html = render_with_session(Some(admin_user()), move || view! { <Header /> });
        assert!(html.contains("Dashboard"));
        assert!(html.contains("Log Out"));
        assert!(!html.contains("Admin Sign Up"));
    }

    #[test]
    fn header_hides_dashboard_link_for_customers() {
        let html = render_with_session(Some(customer_user()), move || view! { <Header /> });
        assert!(!html.contains("Dashboard"));
    }

    #[test]
    fn header_offers_signup_when_logged_out() {
        let html = render_with_session(None, move || view! { <Header /> });
        assert!(html.contains("Admin Sign Up"));
        assert!(!html.contains("Log Out"));
    }

    #[test]
    fn layout_renders_children() {
        let html = render_with_session(Some(admin_user()), move || {
            view! { <Layout><div>"child"</div></Layout> }
        });
        assert!(html.contains("child"));
    }
}
