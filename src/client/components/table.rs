use dioxus::prelude::*;

#[component]
pub fn SearchInput(
    #[props(into)] value: String,
    #[props(into)] placeholder: String,
    on_input: EventHandler<String>,
) -> Element {
    rsx! {
        input {
            class: "input input-bordered w-full max-w-xs",
            r#type: "search",
            placeholder: "{placeholder}",
            value: "{value}",
            oninput: move |evt| on_input.call(evt.value()),
        }
    }
}

/// Previous/next controls under a paginated table
#[component]
pub fn Pager(page: usize, total_pages: usize, total_rows: usize, on_change: EventHandler<usize>) -> Element {
    if total_pages <= 1 {
        return rsx! {
            p { class: "text-sm opacity-70 mt-3", "{total_rows} total" }
        };
    }

    rsx! {
        div { class: "flex items-center justify-between mt-3",
            p { class: "text-sm opacity-70", "{total_rows} total" }
            div { class: "join",
                button {
                    class: "join-item btn btn-sm",
                    disabled: page <= 1,
                    onclick: move |_| on_change.call(page - 1),
                    "«"
                }
                button { class: "join-item btn btn-sm btn-disabled", "Page {page} of {total_pages}" }
                button {
                    class: "join-item btn btn-sm",
                    disabled: page >= total_pages,
                    onclick: move |_| on_change.call(page + 1),
                    "»"
                }
            }
        }
    }
}

/// Active/inactive switch.
///
/// The checkbox never flips on its own; it only reflects `active`, which changes once the
/// backend has accepted the update.
#[component]
pub fn StatusToggle(active: bool, #[props(default)] disabled: bool, on_toggle: EventHandler<()>) -> Element {
    rsx! {
        input {
            class: "toggle toggle-success toggle-sm",
            r#type: "checkbox",
            checked: active,
            disabled,
            onclick: move |evt| {
                evt.prevent_default();
                on_toggle.call(());
            },
        }
    }
}
