use super::components::form::SignupForm;
use super::view_model::use_signup_view_model;
use leptos::{ev::SubmitEvent, Callback, *};

#[component]
pub fn AdminSignupPanel() -> impl IntoView {
    let vm = use_signup_view_model();
    let form = vm.form;
    let error = vm.error;
    let submit_action = vm.submit_action;
    let pending = submit_action.pending();

    let handle_submit = Callback::new(move |ev: SubmitEvent| {
        ev.prevent_default();
        if pending.get_untracked() {
            return;
        }
        error.set(None);
        submit_action.dispatch(form.snapshot());
    });

    let name_input = Callback::new(move |value: String| form.name.set(value));
    let email_input = Callback::new(move |value: String| form.email.set(value));
    let password_input = Callback::new(move |value: String| form.password.set(value));
    let confirm_password_input =
        Callback::new(move |value: String| form.confirm_password.set(value));

    view! {
        <SignupForm
            name=form.name.read_only()
            email=form.email.read_only()
            password=form.password.read_only()
            confirm_password=form.confirm_password.read_only()
            error=error.read_only()
            pending=pending.into()
            on_name_input=name_input
            on_email_input=email_input
            on_password_input=password_input
            on_confirm_password_input=confirm_password_input
            on_submit=handle_submit
        />
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn panel_renders_registration_form() {
        let html = render_to_string(move || view! { <AdminSignupPanel /> });
        assert!(html.contains("Admin Registration"));
        assert!(html.contains("Register Admin Account"));
    }
}
