use dioxus::prelude::*;

use crate::{
    client::{
        components::Modal,
        http::ApiClient,
        store::{account, account::AccountStores, notification::NotificationState},
    },
    model::account::{CreateAccountDto, Role},
};

/// Form for creating an account of a fixed `role`.
///
/// `on_created` fires after the backend accepted the account so the caller can reload its
/// list. The modal stays open with the inputs intact when creation fails.
#[component]
pub fn CreateAccountModal(
    role: Role,
    open: bool,
    on_close: EventHandler<()>,
    on_created: EventHandler<()>,
) -> Element {
    let api = use_context::<ApiClient>();
    let stores = use_context::<AccountStores>();
    let notifications = use_context::<Signal<NotificationState>>();

    let mut first_name = use_signal(String::new);
    let mut last_name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);

    let slice = stores.for_role(role);
    let creating = slice.read().create_loading();

    let mut reset = move || {
        first_name.set(String::new());
        last_name.set(String::new());
        email.set(String::new());
        password.set(String::new());
    };

    let submit = move |evt: FormEvent| {
        evt.prevent_default();

        let api = api.clone();
        let mut slice = slice;
        let mut notifications = notifications;
        let payload = CreateAccountDto {
            first_name: first_name(),
            last_name: last_name(),
            email: email(),
            password: password(),
            role,
        };

        spawn(async move {
            if account::create_account(&api, &mut slice, &mut notifications, payload)
                .await
                .is_ok()
            {
                reset();
                on_created.call(());
            }
        });
    };

    rsx! {
        Modal {
            open,
            title: format!("Create {}", role.label()),
            on_close,
            form { class: "flex flex-col gap-3", onsubmit: submit,
                div { class: "flex gap-3",
                    input {
                        class: "input input-bordered w-full",
                        placeholder: "First name",
                        value: "{first_name}",
                        oninput: move |evt| first_name.set(evt.value()),
                    }
                    input {
                        class: "input input-bordered w-full",
                        placeholder: "Last name",
                        value: "{last_name}",
                        oninput: move |evt| last_name.set(evt.value()),
                    }
                }
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
                div { class: "modal-action",
                    button {
                        class: "btn btn-ghost",
                        r#type: "button",
                        disabled: creating,
                        onclick: move |_| on_close.call(()),
                        "Cancel"
                    }
                    button { class: "btn btn-primary", r#type: "submit", disabled: creating,
                        if creating {
                            span { class: "loading loading-spinner loading-sm" }
                        }
                        "Create"
                    }
                }
            }
        }
    }
}
