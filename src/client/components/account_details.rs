use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::{
    client::{
        components::Modal,
        http::ApiClient,
        store::{
            account::{self, AccountStores},
            notification::NotificationState,
        },
        util::format::{format_date, format_relative_time},
    },
    model::account::Role,
};

/// Freshly loaded record of one account, opened from its row
#[component]
pub fn AccountDetailsModal(
    role: Role,
    account_id: Option<String>,
    on_close: EventHandler<()>,
) -> Element {
    let api = use_context::<ApiClient>();
    let stores = use_context::<AccountStores>();
    let notifications = use_context::<Signal<NotificationState>>();

    let slice = stores.for_role(role);

    use_effect(use_reactive((&account_id, &role), move |(account_id, role)| {
        let Some(id) = account_id else {
            return;
        };

        let api = api.clone();
        let mut slice = slice;
        let mut notifications = notifications;
        spawn(async move {
            if let Err(err) =
                account::fetch_account_details(&api, &mut slice, &mut notifications, &id, role)
                    .await
            {
                tracing::debug!(account_id = %id, "Account details not loaded: {}", err);
            }
        });
    }));

    let close = move || {
        let mut slice = slice;
        slice.write().clear_selected();
        on_close.call(());
    };

    let state = slice.read();
    let account = state
        .selected
        .clone()
        .filter(|selected| Some(&selected.id) == account_id.as_ref());
    let loading = state.details_loading();
    drop(state);

    rsx! {
        Modal {
            open: account_id.is_some(),
            title: format!("{} details", role.label()),
            on_close: move |_| close(),
            match account {
                Some(account) => rsx! {
                    dl { class: "grid grid-cols-3 gap-2 text-sm",
                        dt { class: "opacity-70", "Name" }
                        dd { class: "col-span-2", "{account.full_name()}" }
                        dt { class: "opacity-70", "Email" }
                        dd { class: "col-span-2", "{account.email}" }
                        dt { class: "opacity-70", "Status" }
                        dd { class: "col-span-2",
                            if account.is_active {
                                span { class: "badge badge-success", "Active" }
                            } else {
                                span { class: "badge badge-ghost", "Inactive" }
                            }
                        }
                        dt { class: "opacity-70", "Created" }
                        dd { class: "col-span-2", "{format_date(&account.created_at)}" }
                        dt { class: "opacity-70", "Updated" }
                        dd { class: "col-span-2",
                            "{format_relative_time(&account.updated_at, chrono::Utc::now())}"
                        }
                    }
                },
                None if loading => rsx! {
                    div { class: "skeleton h-32 w-full" }
                },
                None => rsx! {
                    p { class: "opacity-70", "Account details are unavailable." }
                },
            }
            div { class: "modal-action",
                button { class: "btn", onclick: move |_| close(), "Close" }
            }
        }
    }
}
