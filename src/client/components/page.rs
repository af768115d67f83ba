use dioxus::prelude::*;

#[component]
pub fn Page(class: Option<&'static str>, children: Element) -> Element {
    let class: &str = if let Some(class) = class { class } else { "" };

    rsx!(
        div {
            class: "flex flex-col {class}",
            {children}
        }
    )
}

/// Heading row of a dashboard screen with optional actions on the right
#[component]
pub fn PageHeader(#[props(into)] title: String, children: Element) -> Element {
    rsx!(
        div { class: "flex flex-wrap items-center justify-between gap-2 mb-4",
            h1 { class: "text-2xl font-semibold", "{title}" }
            div { class: "flex items-center gap-2",
                {children}
            }
        }
    )
}
