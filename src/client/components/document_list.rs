use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaEye, FaFilePdf, FaTrash};
use dioxus_free_icons::Icon;

use crate::{
    client::util::format::format_date,
    model::document::{group_by_category, DocumentDto},
};

/// Documents of a ship, one card per category
#[component]
pub fn DocumentGroups(
    documents: Vec<DocumentDto>,
    #[props(default)] busy: bool,
    on_delete: EventHandler<DocumentDto>,
) -> Element {
    let groups = group_by_category(&documents);

    rsx! {
        div { class: "grid gap-4 md:grid-cols-3",
            for group in groups {
                div { key: "{group.category.as_str()}", class: "card bg-base-100 shadow-sm",
                    div { class: "card-body p-4",
                        h3 { class: "card-title text-base",
                            "{group.category.label()}"
                            span { class: "badge badge-ghost", "{group.documents.len()}" }
                        }
                        if group.documents.is_empty() {
                            p { class: "text-sm opacity-60", "No documents" }
                        }
                        ul { class: "flex flex-col gap-2",
                            for document in group.documents {
                                DocumentItem {
                                    key: "{document.id}",
                                    document: document.clone(),
                                    busy,
                                    on_delete,
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn DocumentItem(document: DocumentDto, busy: bool, on_delete: EventHandler<DocumentDto>) -> Element {
    let deleted = document.clone();

    rsx! {
        li { class: "flex items-center gap-2",
            Icon { width: 16, height: 16, icon: FaFilePdf }
            div { class: "flex-1 min-w-0",
                p { class: "truncate text-sm", title: "{document.original_file_name}",
                    "{document.original_file_name}"
                }
                p { class: "text-xs opacity-60", "{format_date(&document.created_at)}" }
            }
            a {
                class: "btn btn-ghost btn-xs",
                href: "{document.download_url}",
                target: "_blank",
                rel: "noopener noreferrer",
                Icon { width: 14, height: 14, icon: FaEye }
            }
            button {
                class: "btn btn-ghost btn-xs text-error",
                disabled: busy,
                onclick: move |_| on_delete.call(deleted.clone()),
                Icon { width: 14, height: 14, icon: FaTrash }
            }
        }
    }
}
