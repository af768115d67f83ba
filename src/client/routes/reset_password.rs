use dioxus::prelude::*;

use crate::client::{
    http::ApiClient,
    router::Route,
    store::{auth, auth::AuthState, notification::NotificationState},
};

#[component]
pub fn ResetPassword() -> Element {
    let api = use_context::<ApiClient>();
    let auth_state = use_context::<Signal<AuthState>>();
    let notifications = use_context::<Signal<NotificationState>>();

    let mut otp = use_signal(String::new);
    let mut new_password = use_signal(String::new);
    let mut confirm_password = use_signal(String::new);

    let otp_email = auth_state.read().otp_email.clone();
    let loading = auth_state.read().reset_loading();
    let error = auth_state.read().error.clone();

    // Without an OTP request there is nothing to reset against
    use_effect(move || {
        if auth_state.peek().otp_email.is_none() {
            navigator().replace(Route::ForgotPassword {});
        }
    });

    let submit = move |evt: FormEvent| {
        evt.prevent_default();

        let api = api.clone();
        let mut auth_state = auth_state;
        let mut notifications = notifications;

        spawn(async move {
            if auth::reset_password(
                &api,
                &mut auth_state,
                &mut notifications,
                &otp(),
                &new_password(),
                &confirm_password(),
            )
            .await
            .is_ok()
            {
                navigator().replace(Route::Login {});
            }
        });
    };

    rsx! {
        document::Title { "ShipGPT | Reset password" }

        h2 { class: "card-title", "Reset password" }
        if let Some(email) = otp_email {
            p { class: "text-sm opacity-70", "Enter the OTP sent to {email}." }
        }
        form { class: "flex flex-col gap-3", onsubmit: submit,
            input {
                class: "input input-bordered w-full",
                inputmode: "numeric",
                placeholder: "OTP",
                value: "{otp}",
                oninput: move |evt| otp.set(evt.value()),
            }
            input {
                class: "input input-bordered w-full",
                r#type: "password",
                placeholder: "New password",
                value: "{new_password}",
                oninput: move |evt| new_password.set(evt.value()),
            }
            input {
                class: "input input-bordered w-full",
                r#type: "password",
                placeholder: "Confirm password",
                value: "{confirm_password}",
                oninput: move |evt| confirm_password.set(evt.value()),
            }
            if let Some(error) = error {
                p { class: "text-error text-sm", "{error}" }
            }
            button { class: "btn btn-primary w-full", r#type: "submit", disabled: loading,
                if loading {
                    span { class: "loading loading-spinner loading-sm" }
                }
                "Reset password"
            }
        }
        Link { class: "link link-hover text-sm self-end", to: Route::Login {}, "Back to login" }
    }
}
