use leptos::*;

mod components;
mod panel;
mod repository;
mod utils;
mod view_model;

pub use panel::AdminSignupPanel;

#[component]
pub fn AdminSignupPage() -> impl IntoView {
    view! { <AdminSignupPanel /> }
}
