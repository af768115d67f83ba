use dioxus::prelude::*;

use crate::client::{
    components::{ShipGptTitle, Toasts},
    router::Route,
    store::auth::AuthState,
};

/// Layout for the login and password recovery screens.
///
/// A visitor who already holds a session goes straight to their landing screen.
#[component]
pub fn GuestLayout() -> Element {
    let auth_state = use_context::<Signal<AuthState>>();

    use_effect(move || {
        if let Some(session) = auth_state.read().session.as_ref() {
            navigator().replace(Route::landing(session.role));
        }
    });

    rsx! {
        div { class: "min-h-screen flex flex-col items-center justify-center gap-6 bg-base-200 p-4",
            ShipGptTitle {}
            div { class: "card bg-base-100 shadow-sm w-full max-w-md",
                div { class: "card-body",
                    Outlet::<Route> {}
                }
            }
        }
        Toasts {}
    }
}
