use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaPlus;
use dioxus_free_icons::Icon;
use dioxus_logger::tracing;

use crate::{
    client::{
        components::{
            AccountDetailsModal, AccountTable, ConfirmDialog, CreateAccountModal, Page, PageHeader,
            Pager, SearchInput,
        },
        http::ApiClient,
        store::{
            account::{self, AccountStores},
            auth::AuthState,
            notification::NotificationState,
        },
        util::{
            confirm::{Confirmation, StatusChange},
            table::{filter, paginate},
        },
    },
    config::TABLE_PAGE_SIZE,
    model::account::{AccountDto, Role},
};

#[component]
pub fn Admins() -> Element {
    rsx!(AccountsPage { role: Role::Admin })
}

#[component]
pub fn Users() -> Element {
    rsx!(AccountsPage { role: Role::User })
}

#[component]
pub fn Crew() -> Element {
    rsx!(AccountsPage { role: Role::Crew })
}

#[component]
pub fn Superintendents() -> Element {
    rsx!(AccountsPage { role: Role::Superintendent })
}

/// Row action waiting in the confirmation dialog
#[derive(Clone, Debug, PartialEq)]
enum AccountAction {
    Status(StatusChange),
    Delete { id: String, name: String },
}

impl AccountAction {
    fn title(&self) -> &'static str {
        match self {
            AccountAction::Status(change) if change.is_active => "Activate account",
            AccountAction::Status(_) => "Deactivate account",
            AccountAction::Delete { .. } => "Delete account",
        }
    }

    fn prompt(&self) -> String {
        match self {
            AccountAction::Status(change) => change.prompt(),
            AccountAction::Delete { name, .. } => {
                format!("Are you sure you want to delete {}? This cannot be undone.", name)
            }
        }
    }
}

/// List, search, create, toggle and delete accounts of one role
#[component]
fn AccountsPage(role: Role) -> Element {
    let api = use_context::<ApiClient>();
    let auth_state = use_context::<Signal<AuthState>>();
    let stores = use_context::<AccountStores>();
    let notifications = use_context::<Signal<NotificationState>>();

    let mut search = use_signal(String::new);
    let mut page = use_signal(|| 1_usize);
    let mut create_open = use_signal(|| false);
    let mut viewing = use_signal(|| None::<String>);
    let mut confirmation = use_signal(Confirmation::<AccountAction>::default);

    let slice = stores.for_role(role);

    let fetch = {
        let api = api.clone();
        move || {
            let api = api.clone();
            let mut slice = slice;
            let mut notifications = notifications;
            spawn(async move {
                if let Err(err) =
                    account::fetch_accounts(&api, &mut slice, &mut notifications, role).await
                {
                    tracing::debug!(role = %role, "Account list not loaded: {}", err);
                }
            });
        }
    };

    let refetch = fetch.clone();
    {
        let fetch = fetch.clone();
        use_effect(use_reactive((&role,), move |(_role,)| {
            search.set(String::new());
            page.set(1);
            viewing.set(None);
            fetch();
        }));
    }

    let permitted = auth_state
        .read()
        .session
        .as_ref()
        .is_some_and(|session| session.role.can_manage(role));

    if !permitted {
        return rsx! {
            Page {
                div { class: "alert alert-warning", "You do not have access to {role.plural_label()}." }
            }
        };
    }

    let state = slice.read();
    let loading = state.loading();
    let busy = state.update_loading() || state.remove_loading();
    let error = state.error.clone();
    let filtered: Vec<AccountDto> = filter(&state.items, &search()).into_iter().cloned().collect();
    drop(state);

    let shown = paginate(&filtered, page(), TABLE_PAGE_SIZE);
    let rows = shown.rows.to_vec();
    let (current_page, total_pages, total_rows) = (shown.page, shown.total_pages, shown.total_rows);

    let pending = confirmation.read().pending().cloned();

    let on_confirm = move |_| {
        let Some(action) = confirmation.write().confirm() else {
            return;
        };

        let api = api.clone();
        let mut slice = slice;
        let mut notifications = notifications;
        spawn(async move {
            let result = match action {
                AccountAction::Status(change) => {
                    account::set_account_status(&api, &mut slice, &mut notifications, change)
                        .await
                        .map(|_| ())
                }
                AccountAction::Delete { id, .. } => {
                    account::delete_account(&api, &mut slice, &mut notifications, &id).await
                }
            };

            if let Err(err) = result {
                tracing::debug!("Account action failed: {}", err);
            }
        });
    };

    rsx! {
        document::Title { "ShipGPT | {role.plural_label()}" }

        Page {
            PageHeader { title: role.plural_label().to_string(),
                SearchInput {
                    value: search(),
                    placeholder: "Search by name or email",
                    on_input: move |value: String| {
                        search.set(value);
                        page.set(1);
                    },
                }
                button {
                    class: "btn btn-primary flex gap-2",
                    onclick: move |_| create_open.set(true),
                    Icon { width: 14, height: 14, icon: FaPlus }
                    "Add {role.label()}"
                }
            }

            if let Some(error) = error {
                div { class: "alert alert-error mb-4",
                    span { "{error}" }
                    button {
                        class: "btn btn-sm",
                        onclick: move |_| refetch(),
                        "Retry"
                    }
                }
            }

            AccountTable {
                rows,
                loading,
                busy,
                on_view: move |account: AccountDto| viewing.set(Some(account.id)),
                on_toggle: move |account: AccountDto| {
                    confirmation
                        .write()
                        .request(
                            AccountAction::Status(
                                StatusChange::toggle(&account.id, &account.full_name(), account.is_active),
                            ),
                        );
                },
                on_delete: move |account: AccountDto| {
                    confirmation
                        .write()
                        .request(AccountAction::Delete {
                            id: account.id.clone(),
                            name: account.full_name(),
                        });
                },
            }
            Pager {
                page: current_page,
                total_pages,
                total_rows,
                on_change: move |next: usize| page.set(next),
            }
        }

        CreateAccountModal {
            role,
            open: create_open(),
            on_close: move |_| create_open.set(false),
            on_created: move |_| {
                create_open.set(false);
                fetch();
            },
        }

        AccountDetailsModal {
            role,
            account_id: viewing(),
            on_close: move |_| viewing.set(None),
        }

        ConfirmDialog {
            open: pending.is_some(),
            title: pending.as_ref().map(AccountAction::title).unwrap_or_default().to_string(),
            message: pending.as_ref().map(AccountAction::prompt).unwrap_or_default(),
            busy,
            on_confirm,
            on_cancel: move |_| confirmation.write().cancel(),
        }
    }
}
