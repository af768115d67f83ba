use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaShip;
use dioxus_free_icons::Icon;

#[component]
pub fn ShipGptTitle() -> Element {
    rsx!(
        div { class: "flex items-center gap-2",
            Icon {
                width: 22,
                height: 22,
                icon: FaShip
            }
            p { class: "text-xl",
                "ShipGPT"
            }
            p { class: "text-xs",
                "Admin"
            }
        }
    )
}
