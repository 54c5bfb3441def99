use leptos::*;
use leptos_router::*;

use crate::{
    components::guard::RequireAdmin,
    pages::{admin_dashboard::AdminDashboardPage, admin_signup::AdminSignupPage, home::HomePage},
    state::auth::AuthProvider,
};

pub const ROUTE_PATHS: &[&str] = &["/", "/admin/signup", "/admin/dashboard"];

pub const PROTECTED_ROUTE_PATHS: &[&str] = &["/admin/dashboard"];

pub const PUBLIC_ROUTE_PATHS: &[&str] = &["/", "/admin/signup"];

pub fn mount_app() {
    mount_to_body(app_root);
}

pub fn app_root() -> impl IntoView {
    provide_context(crate::api::ApiClient::new());
    view! {
        <AuthProvider>
            <Router>
                <Routes>
                    <Route path="/" view=HomePage/>
                    <Route path="/admin/signup" view=AdminSignupPage/>
                    <Route path="/admin/dashboard" view=ProtectedAdminDashboard/>
                </Routes>
            </Router>
        </AuthProvider>
    }
}

#[component]
fn ProtectedAdminDashboard() -> impl IntoView {
    view! { <RequireAdmin><AdminDashboardPage/></RequireAdmin> }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn route_paths_include_signup_and_dashboard() {
        assert!(ROUTE_PATHS.contains(&"/admin/signup"));
        assert!(ROUTE_PATHS.contains(&"/admin/dashboard"));
    }

    #[test]
    fn protected_routes_are_subset_of_all() {
        let all: HashSet<&str> = ROUTE_PATHS.iter().copied().collect();
        for path in PROTECTED_ROUTE_PATHS {
            assert!(
                all.contains(path),
                "protected path missing from ROUTE_PATHS: {}",
                path
            );
        }
    }

    #[test]
    fn public_and_protected_cover_all_routes() {
        let mut covered: HashSet<&str> = PUBLIC_ROUTE_PATHS.iter().copied().collect();
        covered.extend(PROTECTED_ROUTE_PATHS.iter().copied());
        let all: HashSet<&str> = ROUTE_PATHS.iter().copied().collect();
        assert_eq!(covered, all);
    }

    #[test]
    fn no_duplicate_routes() {
        let unique: HashSet<&str> = ROUTE_PATHS.iter().copied().collect();
        assert_eq!(unique.len(), ROUTE_PATHS.len());
    }
}
