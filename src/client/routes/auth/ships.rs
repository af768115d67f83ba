use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaAnchor, FaPlus, FaTrash};
use dioxus_free_icons::Icon;
use dioxus_logger::tracing;

use crate::{
    client::{
        components::{
            ConfirmDialog, CreateShipModal, Page, PageHeader, Pager, SearchInput, StatusToggle,
        },
        http::ApiClient,
        router::Route,
        store::{
            notification::NotificationState,
            ship::{self, ShipState},
        },
        util::{
            confirm::{Confirmation, StatusChange},
            format::format_date,
            table::{filter, paginate},
        },
    },
    config::TABLE_PAGE_SIZE,
    model::ship::ShipDto,
};

#[derive(Clone, Debug, PartialEq)]
enum ShipAction {
    Status(StatusChange),
    Delete { id: String, name: String },
}

impl ShipAction {
    fn title(&self) -> &'static str {
        match self {
            ShipAction::Status(change) if change.is_active => "Activate ship",
            ShipAction::Status(_) => "Deactivate ship",
            ShipAction::Delete { .. } => "Delete ship",
        }
    }

    fn prompt(&self) -> String {
        match self {
            ShipAction::Status(change) => change.prompt(),
            ShipAction::Delete { name, .. } => format!(
                "Are you sure you want to delete {}? Its documents will no longer be reachable.",
                name
            ),
        }
    }
}

#[component]
pub fn Ships() -> Element {
    let api = use_context::<ApiClient>();
    let ships = use_context::<Signal<ShipState>>();
    let notifications = use_context::<Signal<NotificationState>>();

    let mut search = use_signal(String::new);
    let mut page = use_signal(|| 1_usize);
    let mut create_open = use_signal(|| false);
    let mut confirmation = use_signal(Confirmation::<ShipAction>::default);

    let fetch = {
        let api = api.clone();
        move || {
            let api = api.clone();
            let mut ships = ships;
            let mut notifications = notifications;
            spawn(async move {
                if let Err(err) = ship::fetch_ships(&api, &mut ships, &mut notifications).await {
                    tracing::debug!("Ship list not loaded: {}", err);
                }
            });
        }
    };

    {
        let fetch = fetch.clone();
        use_effect(move || fetch());
    }

    let state = ships.read();
    let loading = state.loading();
    let busy = state.update_loading() || state.remove_loading();
    let error = state.error.clone();
    let filtered: Vec<ShipDto> = filter(&state.items, &search()).into_iter().cloned().collect();
    drop(state);

    let shown = paginate(&filtered, page(), TABLE_PAGE_SIZE);
    let rows = shown.rows.to_vec();
    let (current_page, total_pages, total_rows) = (shown.page, shown.total_pages, shown.total_rows);

    let pending = confirmation.read().pending().cloned();
    let refetch = fetch.clone();

    let on_confirm = move |_| {
        let Some(action) = confirmation.write().confirm() else {
            return;
        };

        let api = api.clone();
        let mut ships = ships;
        let mut notifications = notifications;
        spawn(async move {
            let result = match action {
                ShipAction::Status(change) => {
                    ship::set_ship_status(&api, &mut ships, &mut notifications, change)
                        .await
                        .map(|_| ())
                }
                ShipAction::Delete { id, .. } => {
                    ship::delete_ship(&api, &mut ships, &mut notifications, &id).await
                }
            };

            if let Err(err) = result {
                tracing::debug!("Ship action failed: {}", err);
            }
        });
    };

    rsx! {
        document::Title { "ShipGPT | Ships" }

        Page {
            PageHeader { title: "Ships",
                SearchInput {
                    value: search(),
                    placeholder: "Search by name or IMO",
                    on_input: move |value: String| {
                        search.set(value);
                        page.set(1);
                    },
                }
                button {
                    class: "btn btn-primary flex gap-2",
                    onclick: move |_| create_open.set(true),
                    Icon { width: 14, height: 14, icon: FaPlus }
                    "Add Ship"
                }
            }

            if let Some(error) = error {
                div { class: "alert alert-error mb-4",
                    span { "{error}" }
                    button { class: "btn btn-sm", onclick: move |_| refetch(), "Retry" }
                }
            }

            if loading && rows.is_empty() {
                div { class: "flex flex-col gap-2",
                    for _ in 0..3 {
                        div { class: "skeleton h-10 w-full" }
                    }
                }
            } else {
                div { class: "overflow-x-auto",
                    table { class: "table table-md",
                        thead {
                            tr {
                                th { "Name" }
                                th { "IMO" }
                                th { "Created" }
                                th { "Active" }
                                th {}
                            }
                        }
                        tbody {
                            if rows.is_empty() {
                                tr {
                                    td { colspan: 5, class: "text-center opacity-70", "No ships found" }
                                }
                            }
                            for row in rows {
                                ShipRow {
                                    key: "{row.id}",
                                    ship: row.clone(),
                                    busy,
                                    on_toggle: move |ship: ShipDto| {
                                        confirmation
                                            .write()
                                            .request(ShipAction::Status(StatusChange::toggle(&ship.id, &ship.name, ship.is_active)));
                                    },
                                    on_delete: move |ship: ShipDto| {
                                        confirmation
                                            .write()
                                            .request(ShipAction::Delete {
                                                id: ship.id.clone(),
                                                name: ship.name.clone(),
                                            });
                                    },
                                }
                            }
                        }
                    }
                }
            }
            Pager {
                page: current_page,
                total_pages,
                total_rows,
                on_change: move |next: usize| page.set(next),
            }
        }

        CreateShipModal {
            open: create_open(),
            on_close: move |_| create_open.set(false),
            on_created: move |_| {
                create_open.set(false);
                fetch();
            },
        }

        ConfirmDialog {
            open: pending.is_some(),
            title: pending.as_ref().map(ShipAction::title).unwrap_or_default(),
            message: pending.as_ref().map(ShipAction::prompt).unwrap_or_default(),
            busy,
            on_confirm,
            on_cancel: move |_| confirmation.write().cancel(),
        }
    }
}

#[component]
fn ShipRow(
    ship: ShipDto,
    busy: bool,
    on_toggle: EventHandler<ShipDto>,
    on_delete: EventHandler<ShipDto>,
) -> Element {
    let toggled = ship.clone();
    let deleted = ship.clone();

    rsx! {
        tr { class: if !ship.is_active { "table-row-muted" },
            td {
                Link {
                    class: "link link-hover flex items-center gap-2",
                    to: Route::ShipDetails { id: ship.id.clone() },
                    Icon { width: 14, height: 14, icon: FaAnchor }
                    "{ship.name}"
                }
            }
            td { "{ship.imo}" }
            td { "{format_date(&ship.created_at)}" }
            td {
                StatusToggle {
                    active: ship.is_active,
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
