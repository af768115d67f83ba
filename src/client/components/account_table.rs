use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaTrash;
use dioxus_free_icons::Icon;

use crate::{
    client::{components::StatusToggle, util::format::format_date},
    model::account::AccountDto,
};

#[component]
pub fn AccountTable(
    rows: Vec<AccountDto>,
    loading: bool,
    busy: bool,
    on_view: EventHandler<AccountDto>,
    on_toggle: EventHandler<AccountDto>,
    on_delete: EventHandler<AccountDto>,
) -> Element {
    if loading && rows.is_empty() {
        return rsx! {
            div { class: "flex flex-col gap-2",
                for _ in 0..3 {
                    div { class: "skeleton h-10 w-full" }
                }
            }
        };
    }

    rsx! {
        div { class: "overflow-x-auto",
            table { class: "table table-md",
                thead {
                    tr {
                        th { "Name" }
                        th { "Email" }
                        th { "Created" }
                        th { "Active" }
                        th {}
                    }
                }
                tbody {
                    if rows.is_empty() {
                        tr {
                            td { colspan: 5, class: "text-center opacity-70", "No records found" }
                        }
                    }
                    for account in rows {
                        AccountRow {
                            key: "{account.id}",
                            account: account.clone(),
                            busy,
                            on_view,
                            on_toggle,
                            on_delete,
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn AccountRow(
    account: AccountDto,
    busy: bool,
    on_view: EventHandler<AccountDto>,
    on_toggle: EventHandler<AccountDto>,
    on_delete: EventHandler<AccountDto>,
) -> Element {
    let viewed = account.clone();
    let toggled = account.clone();
    let deleted = account.clone();

    rsx! {
        tr { class: if !account.is_active { "table-row-muted" },
            td {
                button {
                    class: "link link-hover",
                    onclick: move |_| on_view.call(viewed.clone()),
                    "{account.full_name()}"
                }
            }
            td { "{account.email}" }
            td { "{format_date(&account.created_at)}" }
            td {
                StatusToggle {
                    active: account.is_active,
                    disabled: busy,
                    on_toggle: move |_| on_toggle.call(toggled.clone()),
                }
            }
            td {
                button {
                    class: "btn btn-ghost btn-sm text-error",
                    disabled: busy,
                    onclick: move |_| on_delete.call(deleted.clone()),
                    Icon { width: 14, height: 14, icon: FaTrash }
                }
            }
        }
    }
}
