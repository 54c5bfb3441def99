use crate::{components::layout::Layout, state::auth::use_auth};
use leptos::*;

#[component]
pub fn AdminDashboardPanel() -> impl IntoView {
    let (auth, _) = use_auth();
    let display_name = move || {
        auth.get()
            .user
            .as_ref()
            .map(|user| user.profile.name.clone())
            .unwrap_or_default()
    };

    view! {
        <Layout>
            <div class="px-4 sm:px-0">
                <h2 class="text-2xl font-semibold text-fg">"Admin Dashboard"</h2>
                <Show when=move || auth.get().user.is_some() fallback=|| ()>
                    <p class="mt-2 text-sm text-fg-muted">
                        {move || format!("Signed in as {}", display_name())}
                    </p>
                </Show>
                <p class="mt-6 text-sm text-fg-muted">
                    "Manage your store from here. Orders, products, and customers will show up in this space."
                </p>
            </div>
        </Layout>
    }
}
