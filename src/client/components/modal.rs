use dioxus::prelude::*;

#[component]
pub fn Modal(
    open: bool,
    #[props(into)] title: String,
    on_close: EventHandler<()>,
    #[props(default = "max-w-lg".to_string())] class: String,
    children: Element,
) -> Element {
    rsx! {
        dialog {
            class: if open { "modal modal-open" } else { "modal" },
            div { class: "modal-box {class}",
                h3 { class: "font-bold text-lg mb-4", "{title}" }
                {children}
            }
            div {
                class: "modal-backdrop",
                onclick: move |_| on_close.call(()),
            }
        }
    }
}

/// Yes/no dialog guarding a destructive or state-changing action
#[component]
pub fn ConfirmDialog(
    open: bool,
    #[props(into)] title: String,
    #[props(into)] message: String,
    #[props(default = "Confirm".to_string())] confirm_label: String,
    #[props(default)] busy: bool,
    on_confirm: EventHandler<()>,
    on_cancel: EventHandler<()>,
) -> Element {
    rsx! {
        Modal { open, title, on_close: on_cancel,
            p { "{message}" }
            div { class: "modal-action",
                button {
                    class: "btn btn-ghost",
                    disabled: busy,
                    onclick: move |_| on_cancel.call(()),
                    "Cancel"
                }
                button {
                    class: "btn btn-primary",
                    disabled: busy,
                    onclick: move |_| on_confirm.call(()),
                    if busy {
                        span { class: "loading loading-spinner loading-sm" }
                    }
                    "{confirm_label}"
                }
            }
        }
    }
}
