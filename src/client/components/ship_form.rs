use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::{
    client::{
        components::{Modal, PdfInput, PickedPdf},
        http::ApiClient,
        store::{
            notification::NotificationState,
            ship::{self, PickedFile, ShipState},
        },
    },
    config::SHIP_DETAILS_UPLOAD_LIMIT,
    model::{document::DocumentCategory, ship::CreateShipDto},
};

/// Form for registering a ship, optionally with its first documents.
///
/// The ship is created first and each document uploaded against it afterwards. A failed
/// upload leaves the ship in place; the modal still closes and the list reloads.
#[component]
pub fn CreateShipModal(open: bool, on_close: EventHandler<()>, on_created: EventHandler<()>) -> Element {
    let api = use_context::<ApiClient>();
    let ships = use_context::<Signal<ShipState>>();
    let notifications = use_context::<Signal<NotificationState>>();

    let mut name = use_signal(String::new);
    let mut imo = use_signal(String::new);
    let mut category = use_signal(|| DocumentCategory::Compliance);
    let mut files = use_signal(Vec::<PickedFile>::new);

    let busy = {
        let state = ships.read();
        state.create_loading() || state.uploading()
    };

    let submit = move |evt: FormEvent| {
        evt.prevent_default();

        let api = api.clone();
        let mut ships = ships;
        let mut notifications = notifications;
        let payload = CreateShipDto {
            name: name(),
            imo: imo(),
        };
        let picked = files();

        spawn(async move {
            match ship::create_ship_with_documents(
                &api,
                &mut ships,
                &mut notifications,
                payload,
                picked,
                SHIP_DETAILS_UPLOAD_LIMIT,
            )
            .await
            {
                Ok(creation) => {
                    if !creation.failed.is_empty() {
                        tracing::warn!(
                            ship_id = %creation.ship.id,
                            failed = creation.failed.len(),
                            "Ship created with failed document uploads"
                        );
                    }
                    name.set(String::new());
                    imo.set(String::new());
                    files.set(Vec::new());
                    on_created.call(());
                }
                Err(err) => tracing::debug!("Ship creation failed: {}", err),
            }
        });
    };

    rsx! {
        Modal { open, title: "Create Ship", on_close,
            form { class: "flex flex-col gap-3", onsubmit: submit,
                input {
                    class: "input input-bordered w-full",
                    placeholder: "Ship name",
                    value: "{name}",
                    oninput: move |evt| name.set(evt.value()),
                }
                input {
                    class: "input input-bordered w-full",
                    placeholder: "IMO number",
                    value: "{imo}",
                    oninput: move |evt| imo.set(evt.value()),
                }
                div { class: "divider text-sm", "Documents (optional)" }
                div { class: "flex gap-2",
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
                    PdfInput {
                        limit: SHIP_DETAILS_UPLOAD_LIMIT,
                        multiple: true,
                        disabled: busy,
                        on_pick: move |pdf: PickedPdf| {
                            files.write().push(PickedFile {
                                category: category(),
                                file_name: pdf.file_name,
                                bytes: pdf.bytes,
                            });
                        },
                    }
                }
                ul { class: "flex flex-col gap-1",
                    for (index, file) in files.read().iter().enumerate() {
                        li { key: "{index}", class: "flex items-center justify-between text-sm",
                            span { "{file.file_name}" }
                            div { class: "flex items-center gap-2",
                                span { class: "badge badge-outline", "{file.category.label()}" }
                                button {
                                    class: "btn btn-ghost btn-xs",
                                    r#type: "button",
                                    onclick: move |_| {
                                        files.write().remove(index);
                                    },
                                    "✕"
                                }
                            }
                        }
                    }
                }
                div { class: "modal-action",
                    button {
                        class: "btn btn-ghost",
                        r#type: "button",
                        disabled: busy,
                        onclick: move |_| on_close.call(()),
                        "Cancel"
                    }
                    button { class: "btn btn-primary", r#type: "submit", disabled: busy,
                        if busy {
                            span { class: "loading loading-spinner loading-sm" }
                        }
                        "Create"
                    }
                }
            }
        }
    }
}
