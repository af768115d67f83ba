use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::{
    client::{
        components::{
            ConfirmDialog, DocumentGroups, Modal, Page, PageHeader, PdfInput, PickedPdf,
            StatusToggle,
        },
        http::ApiClient,
        router::Route,
        store::{
            account::{self, AccountStores},
            notification::NotificationState,
            ship::{self, Assignment, ShipState},
        },
        util::{
            confirm::{Confirmation, StatusChange},
            format::{format_date, format_relative_time},
            selection::Selection,
        },
    },
    config::SHIP_DETAILS_UPLOAD_LIMIT,
    model::{
        account::{AccountRef, Role},
        document::{DocumentCategory, DocumentDto},
    },
};

#[derive(Clone, Debug, PartialEq)]
enum DetailsAction {
    Status(StatusChange),
    DeleteDocument(DocumentDto),
}

impl DetailsAction {
    fn title(&self) -> &'static str {
        match self {
            DetailsAction::Status(change) if change.is_active => "Activate ship",
            DetailsAction::Status(_) => "Deactivate ship",
            DetailsAction::DeleteDocument(_) => "Delete document",
        }
    }

    fn prompt(&self) -> String {
        match self {
            DetailsAction::Status(change) => change.prompt(),
            DetailsAction::DeleteDocument(document) => {
                format!("Are you sure you want to delete {}?", document.original_file_name)
            }
        }
    }
}

#[component]
pub fn ShipDetails(id: String) -> Element {
    let api = use_context::<ApiClient>();
    let ships = use_context::<Signal<ShipState>>();
    let stores = use_context::<AccountStores>();
    let notifications = use_context::<Signal<NotificationState>>();

    let mut category = use_signal(|| DocumentCategory::Compliance);
    let mut assigning = use_signal(|| None::<Assignment>);
    let mut confirmation = use_signal(Confirmation::<DetailsAction>::default);

    {
        let api = api.clone();
        use_effect(use_reactive((&id,), move |(id,)| {
            let api = api.clone();
            let mut ships = ships;
            let mut crew = stores.crew;
            let mut superintendents = stores.superintendents;
            let mut notifications = notifications;

            spawn(async move {
                if let Err(err) =
                    ship::fetch_ship_details(&api, &mut ships, &mut notifications, &id).await
                {
                    tracing::debug!(ship_id = %id, "Ship details not loaded: {}", err);
                }
                // Candidates for the assignment pickers
                if let Err(err) =
                    account::fetch_accounts(&api, &mut crew, &mut notifications, Role::Crew).await
                {
                    tracing::debug!("Crew candidates not loaded: {}", err);
                }
                if let Err(err) = account::fetch_accounts(
                    &api,
                    &mut superintendents,
                    &mut notifications,
                    Role::Superintendent,
                )
                .await
                {
                    tracing::debug!("Superintendent candidates not loaded: {}", err);
                }
            });
        }));
    }

    use_drop(move || {
        let mut ships = ships;
        ships.write().clear_selected();
    });

    let state = ships.read();
    // A previously opened ship stays in the slice until the new one arrives
    let details = state.selected.clone().filter(|details| details.ship.id == id);
    let details_loading = state.details_loading();
    let busy = state.update_loading();
    let uploading = state.uploading();
    let deleting = state.deleting_document();
    let error = state.error.clone();
    drop(state);

    let pending = confirmation.read().pending().cloned();

    let Some(details) = details else {
        return rsx! {
            Page {
                match error.filter(|_| !details_loading) {
                    Some(error) => rsx! {
                        div { class: "alert alert-error",
                            span { "{error}" }
                            Link { class: "btn btn-sm", to: Route::Ships {}, "Back to ships" }
                        }
                    },
                    None => rsx! {
                        div { class: "flex flex-col gap-3",
                            div { class: "skeleton h-10 w-64" }
                            div { class: "skeleton h-40 w-full" }
                        }
                    },
                }
            }
        };
    };

    let ship_id = details.ship.id.clone();

    let on_confirm = {
        let api = api.clone();
        let ship_id = ship_id.clone();
        move |_| {
            let Some(action) = confirmation.write().confirm() else {
                return;
            };

            let api = api.clone();
            let ship_id = ship_id.clone();
            let mut ships = ships;
            let mut notifications = notifications;
            spawn(async move {
                let result = match action {
                    DetailsAction::Status(change) => {
                        ship::set_ship_status(&api, &mut ships, &mut notifications, change)
                            .await
                            .map(|_| ())
                    }
                    DetailsAction::DeleteDocument(document) => {
                        ship::delete_document(&api, &mut ships, &mut notifications, &ship_id, &document.id)
                            .await
                    }
                };

                if let Err(err) = result {
                    tracing::debug!(ship_id = %ship_id, "Ship action failed: {}", err);
                }
            });
        }
    };

    let on_pick = {
        let api = api.clone();
        let ship_id = ship_id.clone();
        move |pdf: PickedPdf| {
            let api = api.clone();
            let ship_id = ship_id.clone();
            let mut ships = ships;
            let mut notifications = notifications;
            let category = category();
            spawn(async move {
                if let Err(err) = ship::upload_document(
                    &api,
                    &mut ships,
                    &mut notifications,
                    Some(ship_id.as_str()),
                    category,
                    &pdf.file_name,
                    pdf.bytes,
                    SHIP_DETAILS_UPLOAD_LIMIT,
                )
                .await
                {
                    tracing::debug!(file_name = %pdf.file_name, "Document not uploaded: {}", err);
                }
            });
        }
    };

    let status = StatusChange::toggle(&ship_id, &details.ship.name, details.ship.is_active);
    let updated = format_relative_time(&details.ship.updated_at, chrono::Utc::now());

    rsx! {
        document::Title { "ShipGPT | {details.ship.name}" }

        Page { class: "gap-4",
            PageHeader { title: details.ship.name.clone(),
                span { class: "text-sm opacity-70", "Active" }
                StatusToggle {
                    active: details.ship.is_active,
                    disabled: busy,
                    on_toggle: move |_| confirmation.write().request(DetailsAction::Status(status.clone())),
                }
            }

            div { class: "stats shadow-sm bg-base-100",
                div { class: "stat",
                    div { class: "stat-title", "IMO" }
                    div { class: "stat-value text-lg", "{details.ship.imo}" }
                }
                div { class: "stat",
                    div { class: "stat-title", "Registered" }
                    div { class: "stat-value text-lg", "{format_date(&details.ship.created_at)}" }
                    div { class: "stat-desc", "Updated {updated}" }
                }
                div { class: "stat",
                    div { class: "stat-title", "Documents" }
                    div { class: "stat-value text-lg", "{details.pdfs.len()}" }
                }
            }

            div { class: "grid gap-4 md:grid-cols-2",
                MemberCard {
                    assignment: Assignment::Crew,
                    members: details.crew_members.clone(),
                    busy,
                    on_assign: move |assignment: Assignment| assigning.set(Some(assignment)),
                }
                MemberCard {
                    assignment: Assignment::Superintendents,
                    members: details.superintendents.clone(),
                    busy,
                    on_assign: move |assignment: Assignment| assigning.set(Some(assignment)),
                }
            }

            div { class: "card bg-base-100 shadow-sm",
                div { class: "card-body gap-3",
                    h2 { class: "card-title", "Upload document" }
                    div { class: "flex flex-wrap gap-2 items-center",
                        select {
                            class: "select select-bordered",
                            onchange: move |evt| {
                                if let Some(picked) = DocumentCategory::parse(&evt.value()) {
                                    category.set(picked);
                                }
                            },
                            for choice in DocumentCategory::ALL {
                                option {
                                    value: "{choice.as_str()}",
                                    selected: choice == category(),
                                    "{choice.label()}"
                                }
                            }
                        }
                        div { class: "flex-1 min-w-64",
                            PdfInput { limit: SHIP_DETAILS_UPLOAD_LIMIT, disabled: uploading, on_pick }
                        }
                        if uploading {
                            span { class: "loading loading-spinner loading-sm" }
                        }
                    }
                    p { class: "text-xs opacity-60", "PDF only, up to 10 MB." }
                }
            }

            DocumentGroups {
                documents: details.pdfs.clone(),
                busy: deleting,
                on_delete: move |document: DocumentDto| {
                    confirmation.write().request(DetailsAction::DeleteDocument(document));
                },
            }
        }

        if let Some(assignment) = assigning() {
            AssignMembersModal {
                ship_id: ship_id.clone(),
                assignment,
                current: match assignment {
                    Assignment::Crew => details.crew_members.iter().map(|member| member.id.clone()).collect::<Vec<_>>(),
                    Assignment::Superintendents => details.superintendents.iter().map(|member| member.id.clone()).collect::<Vec<_>>(),
                },
                on_close: move |_| assigning.set(None),
            }
        }

        ConfirmDialog {
            open: pending.is_some(),
            title: pending.as_ref().map(DetailsAction::title).unwrap_or_default(),
            message: pending.as_ref().map(DetailsAction::prompt).unwrap_or_default(),
            busy: busy || deleting,
            on_confirm,
            on_cancel: move |_| confirmation.write().cancel(),
        }
    }
}

#[component]
fn MemberCard(
    assignment: Assignment,
    members: Vec<AccountRef>,
    busy: bool,
    on_assign: EventHandler<Assignment>,
) -> Element {
    rsx! {
        div { class: "card bg-base-100 shadow-sm",
            div { class: "card-body",
                div { class: "flex items-center justify-between",
                    h2 { class: "card-title", "{assignment.label()}" }
                    button {
                        class: "btn btn-sm btn-outline",
                        disabled: busy,
                        onclick: move |_| on_assign.call(assignment),
                        "Assign"
                    }
                }
                if members.is_empty() {
                    p { class: "text-sm opacity-60", "Nobody assigned" }
                }
                ul { class: "flex flex-col gap-1",
                    for member in members {
                        li { key: "{member.id}", class: "flex justify-between text-sm",
                            span { "{member.full_name()}" }
                            span { class: "opacity-60", "{member.email}" }
                        }
                    }
                }
            }
        }
    }
}

/// Multi-select staging the crew or superintendents of a ship.
///
/// Nothing is sent until Save, and Save with an unchanged selection just closes.
#[component]
fn AssignMembersModal(
    ship_id: String,
    assignment: Assignment,
    current: Vec<String>,
    on_close: EventHandler<()>,
) -> Element {
    let api = use_context::<ApiClient>();
    let ships = use_context::<Signal<ShipState>>();
    let stores = use_context::<AccountStores>();
    let notifications = use_context::<Signal<NotificationState>>();

    let mut staged = {
        let current = current.clone();
        use_signal(move || Selection::from_ids(current))
    };

    let candidates = stores.for_role(assignment.role());
    let candidates_loading = candidates.read().loading();
    let rows = candidates.read().items.clone();
    let saving = ships.read().update_loading() || ships.read().details_loading();

    let save = move |_| {
        let selection = staged();
        if !selection.differs_from(current.iter().map(String::as_str)) {
            on_close.call(());
            return;
        }

        let api = api.clone();
        let ship_id = ship_id.clone();
        let mut ships = ships;
        let mut notifications = notifications;
        spawn(async move {
            if ship::assign_members(&api, &mut ships, &mut notifications, &ship_id, assignment, selection)
                .await
                .is_ok()
            {
                on_close.call(());
            }
        });
    };

    rsx! {
        Modal {
            open: true,
            title: format!("Assign {}", assignment.label()),
            on_close,
            if candidates_loading && rows.is_empty() {
                div { class: "skeleton h-24 w-full" }
            }
            if !candidates_loading && rows.is_empty() {
                p { class: "text-sm opacity-60", "No {assignment.role().plural_label()} available" }
            }
            ul { class: "flex flex-col gap-2 max-h-80 overflow-y-auto",
                for candidate in rows {
                    li { key: "{candidate.id}",
                        label { class: "label cursor-pointer justify-start gap-3",
                            input {
                                class: "checkbox checkbox-sm",
                                r#type: "checkbox",
                                checked: staged.read().contains(&candidate.id),
                                onchange: {
                                    let id = candidate.id.clone();
                                    move |_| staged.write().toggle(&id)
                                },
                            }
                            span { "{candidate.full_name()}" }
                            span { class: "opacity-60 text-sm", "{candidate.email}" }
                        }
                    }
                }
            }
            div { class: "modal-action",
                span { class: "mr-auto text-sm opacity-70", "{staged.read().len()} selected" }
                button {
                    class: "btn btn-ghost",
                    disabled: saving,
                    onclick: move |_| on_close.call(()),
                    "Cancel"
                }
                button { class: "btn btn-primary", disabled: saving, onclick: save,
                    if saving {
                        span { class: "loading loading-spinner loading-sm" }
                    }
                    "Save"
                }
            }
        }
    }
}
