use dioxus::prelude::*;

use crate::client::{
    http::ApiClient,
    router::Route,
    store::{auth, auth::AuthState, notification::NotificationState},
};

/// Request an OTP by email, then continue on the reset screen
#[component]
pub fn ForgotPassword() -> Element {
    let api = use_context::<ApiClient>();
    let auth_state = use_context::<Signal<AuthState>>();
    let notifications = use_context::<Signal<NotificationState>>();

    let mut email = use_signal(String::new);

    let loading = auth_state.read().forgot_loading();
    let error = auth_state.read().error.clone();

    let submit = move |evt: FormEvent| {
        evt.prevent_default();

        let api = api.clone();
        let mut auth_state = auth_state;
        let mut notifications = notifications;

        spawn(async move {
            if auth::forgot_password(&api, &mut auth_state, &mut notifications, &email())
                .await
                .is_ok()
            {
                navigator().push(Route::ResetPassword {});
            }
        });
    };

    rsx! {
        document::Title { "ShipGPT | Forgot password" }

        h2 { class: "card-title", "Forgot password" }
        p { class: "text-sm opacity-70", "Enter your email and we will send you a one-time password." }
        form { class: "flex flex-col gap-3", onsubmit: submit,
            input {
                class: "input input-bordered w-full",
                r#type: "email",
                placeholder: "Email",
                value: "{email}",
                oninput: move |evt| email.set(evt.value()),
            }
            if let Some(error) = error {
                p { class: "text-error text-sm", "{error}" }
            }
            button { class: "btn btn-primary w-full", r#type: "submit", disabled: loading,
                if loading {
                    span { class: "loading loading-spinner loading-sm" }
                }
                "Send OTP"
            }
        }
        Link { class: "link link-hover text-sm self-end", to: Route::Login {}, "Back to login" }
    }
}
