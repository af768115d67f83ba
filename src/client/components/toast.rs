use dioxus::prelude::*;

use crate::client::store::notification::{NotificationKind, NotificationState};

#[component]
pub fn Toasts() -> Element {
    let mut notifications = use_context::<Signal<NotificationState>>();

    let items = notifications.read().items.clone();

    rsx! {
        div { class: "toast toast-end toast-stack z-50",
            for notification in items {
                div {
                    key: "{notification.id}",
                    class: match notification.kind {
                        NotificationKind::Success => "alert alert-success",
                        NotificationKind::Error => "alert alert-error",
                    },
                    span { "{notification.message}" }
                    button {
                        class: "btn btn-ghost btn-xs",
                        onclick: move |_| notifications.write().dismiss(notification.id),
                        "✕"
                    }
                }
            }
        }
    }
}
