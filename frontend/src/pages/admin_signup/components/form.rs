use crate::components::error::InlineErrorMessage;
use leptos::{ev::SubmitEvent, *};

#[component]
pub fn SignupForm(
    name: ReadSignal<String>,
    email: ReadSignal<String>,
    password: ReadSignal<String>,
    confirm_password: ReadSignal<String>,
    error: ReadSignal<Option<String>>,
    pending: Signal<bool>,
    on_name_input: Callback<String>,
    on_email_input: Callback<String>,
    on_password_input: Callback<String>,
    on_confirm_password_input: Callback<String>,
    on_submit: Callback<SubmitEvent>,
) -> impl IntoView {
    view! {
        <div class="min-h-screen flex items-center justify-center bg-surface py-12 px-4 sm:px-6 lg:px-8">
            <div class="max-w-md w-full space-y-8">
                <div>
                    <h2 class="mt-6 text-center text-3xl font-extrabold text-fg">
                        "Admin Registration"
                    </h2>
                    <p class="mt-2 text-center text-sm text-fg-muted">
                        "Create your admin account to access the dashboard."
                    </p>
                </div>

                <form class="mt-8 space-y-6" on:submit=move |ev| on_submit.call(ev)>
                    <div class="rounded-md shadow-sm -space-y-px">
                        <div>
                            <label for="name" class="sr-only">
                                "Full Name"
                            </label>
                            <input
                                id="name"
                                name="name"
                                type="text"
                                autocomplete="name"
                                required
                                class="appearance-none rounded-none relative block w-full px-3 py-2 border border-form-control-border bg-form-control-bg placeholder-form-control-placeholder text-form-control-text rounded-t-md focus:outline-none focus:ring-2 focus:ring-action-primary-focus focus:border-action-primary-border focus:z-10 sm:text-sm"
                                placeholder="Full Name"
                                prop:value=name
                                on:input=move |ev| {
                                    on_name_input.call(event_target_value(&ev));
                                }
                            />
                        </div>
                        <div>
                            <label for="email-address" class="sr-only">
                                "Email address"
                            </label>
                            <input
                                id="email-address"
                                name="email"
                                type="email"
                                autocomplete="email"
                                required
                                class="appearance-none rounded-none relative block w-full px-3 py-2 border border-form-control-border bg-form-control-bg placeholder-form-control-placeholder text-form-control-text focus:outline-none focus:ring-2 focus:ring-action-primary-focus focus:border-action-primary-border focus:z-10 sm:text-sm"
                                placeholder="Email address"
                                prop:value=email
                                on:input=move |ev| {
                                    on_email_input.call(event_target_value(&ev));
                                }
                            />
                        </div>
                        <div>
                            <label for="password" class="sr-only">
                                "Password"
                            </label>
                            <input
                                id="password"
                                name="password"
                                type="password"
                                autocomplete="new-password"
                                required
                                class="appearance-none rounded-none relative block w-full px-3 py-2 border border-form-control-border bg-form-control-bg placeholder-form-control-placeholder text-form-control-text focus:outline-none focus:ring-2 focus:ring-action-primary-focus focus:border-action-primary-border focus:z-10 sm:text-sm"
                                placeholder="Password"
                                prop:value=password
                                on:input=move |ev| {
                                    on_password_input.call(event_target_value(&ev));
                                }
                            />
                        </div>
                        <div>
                            <label for="confirm-password" class="sr-only">
                                "Confirm Password"
                            </label>
                            <input
                                id="confirm-password"
                                name="confirm_password"
                                type="password"
                                autocomplete="new-password"
                                required
                                class="appearance-none rounded-none relative block w-full px-3 py-2 border border-form-control-border bg-form-control-bg placeholder-form-control-placeholder text-form-control-text rounded-b-md focus:outline-none focus:ring-2 focus:ring-action-primary-focus focus:border-action-primary-border focus:z-10 sm:text-sm"
                                placeholder="Confirm Password"
                                prop:value=confirm_password
                                on:input=move |ev| {
                                    on_confirm_password_input.call(event_target_value(&ev));
                                }
                            />
                        </div>
                    </div>

                    <InlineErrorMessage error={error.into()} />

                    <div>
                        <button
                            type="submit"
                            disabled=move || pending.get()
                            class="group relative w-full flex justify-center py-2 px-4 border border-transparent text-sm font-medium rounded-md text-action-primary-text bg-action-primary-bg hover:bg-action-primary-bg_hover focus:outline-none focus:ring-2 focus:ring-offset-2 focus:ring-action-primary-focus disabled:opacity-50"
                        >
                            <span class="absolute left-0 inset-y-0 flex items-center pl-3">
                                <svg
                                    class="h-5 w-5 text-action-primary-text/70 group-hover:text-action-primary-text"
                                    xmlns="http://www.w3.org/2000/svg"
                                    viewBox="0 0 20 20"
                                    fill="currentColor"
                                    aria-hidden="true"
                                >
                                    <path
                                        fill-rule="evenodd"
                                        d="M5 9V7a5 5 0 0110 0v2a2 2 0 012 2v5a2 2 0 01-2 2H5a2 2 0 01-2-2v-5a2 2 0 012-2zm8-2v2H7V7a3 3 0 016 0z"
                                        clip-rule="evenodd"
                                    ></path>
                                </svg>
                            </span>
                            {move || {
                                if pending.get() { "Registering..." } else { "Register Admin Account" }
                            }}

                        </button>
                    </div>

                    <div class="text-sm text-center">
                        <a href="/" class="font-medium text-link hover:text-link-hover">
                            "Back to store"
                        </a>
                    </div>
                </form>
            </div>
        </div>
    }
}
