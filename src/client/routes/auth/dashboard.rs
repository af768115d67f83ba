use dioxus::prelude::*;

use crate::client::{router::Route, store::auth::AuthState};

/// `/dashboard` has no screen of its own, it forwards to the role's landing screen
#[component]
pub fn Dashboard() -> Element {
    let auth_state = use_context::<Signal<AuthState>>();

    use_effect(move || {
        if let Some(session) = auth_state.read().session.as_ref() {
            navigator().replace(Route::landing(session.role));
        }
    });

    rsx! {
        div { class: "flex justify-center py-24",
            span { class: "loading loading-spinner loading-lg" }
        }
    }
}
