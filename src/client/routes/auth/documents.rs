use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::{
    client::{
        components::{ConfirmDialog, DocumentGroups, Page, PageHeader, PdfInput, PickedPdf},
        http::ApiClient,
        store::{
            notification::NotificationState,
            ship::{self, ShipState},
        },
        util::confirm::Confirmation,
    },
    config::DOCUMENTS_UPLOAD_LIMIT,
    model::document::{DocumentCategory, DocumentDto},
};

/// Upload and browse documents of any ship
#[component]
pub fn Documents() -> Element {
    let api = use_context::<ApiClient>();
    let ships = use_context::<Signal<ShipState>>();
    let notifications = use_context::<Signal<NotificationState>>();

    let mut ship_id = use_signal(|| None::<String>);
    let mut category = use_signal(|| DocumentCategory::Compliance);
    let mut confirmation = use_signal(Confirmation::<DocumentDto>::default);

    {
        let api = api.clone();
        use_effect(move || {
            let api = api.clone();
            let mut ships = ships;
            let mut notifications = notifications;
            spawn(async move {
                if let Err(err) = ship::fetch_ships(&api, &mut ships, &mut notifications).await {
                    tracing::debug!("Ship list not loaded: {}", err);
                }
            });
        });
    }

    use_drop(move || {
        let mut ships = ships;
        ships.write().clear_selected();
    });

    let select_ship = {
        let api = api.clone();
        move |evt: FormEvent| {
            let value = evt.value();
            let selected = (!value.is_empty()).then_some(value);
            ship_id.set(selected.clone());

            let mut ships = ships;
            let Some(id) = selected else {
                ships.write().clear_selected();
                return;
            };

            let api = api.clone();
            let mut notifications = notifications;
            spawn(async move {
                if let Err(err) =
                    ship::fetch_ship_details(&api, &mut ships, &mut notifications, &id).await
                {
                    tracing::debug!(ship_id = %id, "Ship documents not loaded: {}", err);
                }
            });
        }
    };

    let on_pick = {
        let api = api.clone();
        move |pdf: PickedPdf| {
            let api = api.clone();
            let mut ships = ships;
            let mut notifications = notifications;
            let ship_id = ship_id();
            let category = category();
            spawn(async move {
                if let Err(err) = ship::upload_document(
                    &api,
                    &mut ships,
                    &mut notifications,
                    ship_id.as_deref(),
                    category,
                    &pdf.file_name,
                    pdf.bytes,
                    DOCUMENTS_UPLOAD_LIMIT,
                )
                .await
                {
                    tracing::debug!(file_name = %pdf.file_name, "Document not uploaded: {}", err);
                }
            });
        }
    };

    let on_confirm = move |_| {
        let Some(document) = confirmation.write().confirm() else {
            return;
        };
        let Some(ship_id) = ship_id() else {
            return;
        };

        let api = api.clone();
        let mut ships = ships;
        let mut notifications = notifications;
        spawn(async move {
            if let Err(err) =
                ship::delete_document(&api, &mut ships, &mut notifications, &ship_id, &document.id)
                    .await
            {
                tracing::debug!(document_id = %document.id, "Document not deleted: {}", err);
            }
        });
    };

    let state = ships.read();
    let options: Vec<(String, String)> = state
        .items
        .iter()
        .map(|ship| (ship.id.clone(), format!("{} ({})", ship.name, ship.imo)))
        .collect();
    let documents = state
        .selected
        .as_ref()
        .filter(|details| Some(&details.ship.id) == ship_id.read().as_ref())
        .map(|details| details.pdfs.clone());
    let details_loading = state.details_loading();
    let uploading = state.uploading();
    let deleting = state.deleting_document();
    drop(state);

    let pending = confirmation.read().pending().cloned();

    rsx! {
        document::Title { "ShipGPT | Documents" }

        Page { class: "gap-4",
            PageHeader { title: "Documents" }

            div { class: "card bg-base-100 shadow-sm",
                div { class: "card-body gap-3",
                    div { class: "flex flex-wrap gap-2 items-center",
                        select {
                            class: "select select-bordered",
                            onchange: select_ship,
                            option { value: "", selected: ship_id.read().is_none(), "Select a ship" }
                            for (id, label) in options {
                                option {
                                    key: "{id}",
                                    value: "{id}",
                                    selected: ship_id.read().as_deref() == Some(id.as_str()),
                                    "{label}"
                                }
                            }
                        }
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
                            PdfInput { limit: DOCUMENTS_UPLOAD_LIMIT, disabled: uploading, on_pick }
                        }
                        if uploading {
                            span { class: "loading loading-spinner loading-sm" }
                        }
                    }
                    p { class: "text-xs opacity-60", "PDF only, up to 5 MB." }
                }
            }

            match documents {
                Some(documents) => rsx! {
                    DocumentGroups {
                        documents,
                        busy: deleting,
                        on_delete: move |document: DocumentDto| confirmation.write().request(document),
                    }
                },
                None if details_loading => rsx! {
                    div { class: "skeleton h-40 w-full" }
                },
                None => rsx! {
                    p { class: "opacity-60", "Select a ship to see its documents." }
                },
            }
        }

        ConfirmDialog {
            open: pending.is_some(),
            title: "Delete document",
            message: pending
                .as_ref()
                .map(|document| format!("Are you sure you want to delete {}?", document.original_file_name))
                .unwrap_or_default(),
            busy: deleting,
            on_confirm,
            on_cancel: move |_| confirmation.write().cancel(),
        }
    }
}
