use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaRightFromBracket;
use dioxus_free_icons::Icon;
use dioxus_logger::tracing;

use crate::client::{
    components::ShipGptTitle,
    http::ApiClient,
    router::Route,
    store::{
        account::AccountStores, auth, auth::AuthState, notification::NotificationState,
        ship::ShipState,
    },
};

#[component]
pub fn Navbar() -> Element {
    let api = use_context::<ApiClient>();
    let mut auth_state = use_context::<Signal<AuthState>>();
    let mut notifications = use_context::<Signal<NotificationState>>();
    let mut accounts = use_context::<AccountStores>();
    let mut ships = use_context::<Signal<ShipState>>();

    let session = auth_state.read().session.clone();

    let logout = move |_| {
        if let Err(err) = auth::logout(&api, &mut auth_state, &mut notifications) {
            tracing::debug!("Signed out with a stale persisted session: {}", err);
        }
        accounts.reset();
        ships.set(ShipState::default());
        navigator().replace(Route::Login {});
    };

    rsx! {
        div {
            class: "navbar bg-base-200 fixed z-40",
            div {
                class: "navbar-start",
                ShipGptTitle {}
            }
            div {
                class: "navbar-end gap-3",
                if let Some(session) = session {
                    div { class: "flex flex-col items-end text-sm",
                        span { "{session.email}" }
                        span { class: "badge badge-ghost badge-sm", "{session.role.label()}" }
                    }
                }
                button {
                    class: "btn btn-outline flex gap-2",
                    onclick: logout,
                    Icon {
                        width: 16,
                        height: 16,
                        icon: FaRightFromBracket
                    }
                    "Logout"
                }
            }
        }
    }
}
