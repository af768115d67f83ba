use dioxus::prelude::*;

use crate::client::{
    http::ApiClient,
    router::Route,
    store::{auth, auth::AuthState, notification::NotificationState},
};

#[component]
pub fn Login() -> Element {
    let api = use_context::<ApiClient>();
    let auth_state = use_context::<Signal<AuthState>>();
    let notifications = use_context::<Signal<NotificationState>>();

    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);

    let loading = auth_state.read().login_loading();
    let error = auth_state.read().error.clone();

    let submit = move |evt: FormEvent| {
        evt.prevent_default();

        let api = api.clone();
        let mut auth_state = auth_state;
        let mut notifications = notifications;

        spawn(async move {
            if let Ok(session) = auth::login(
                &api,
                &mut auth_state,
                &mut notifications,
                &email(),
                &password(),
            )
            .await
            {
                navigator().push(Route::landing(session.role));
            }
        });
    };

    rsx! {
        document::Title { "ShipGPT | Login" }

        h2 { class: "card-title", "Sign in" }
        form { class: "flex flex-col gap-3", onsubmit: submit,
            input {
                class: "input input-bordered w-full",
                r#type: "email",
                placeholder: "Email",
                value: "{email}",
                oninput: move |evt| email.set(evt.value()),
            }
            input {
                class: "input input-bordered w-full",
                r#type: "password",
                placeholder: "Password",
                value: "{password}",
                oninput: move |evt| password.set(evt.value()),
            }
            if let Some(error) = error {
                p { class: "text-error text-sm", "{error}" }
            }
            button { class: "btn btn-primary w-full", r#type: "submit", disabled: loading,
                if loading {
                    span { class: "loading loading-spinner loading-sm" }
                }
                "Login"
            }
        }
        Link { class: "link link-hover text-sm self-end", to: Route::ForgotPassword {},
            "Forgot password?"
        }
    }
}
