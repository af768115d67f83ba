use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::client::{
    components::{auth::Sidebar, Navbar, Toasts},
    router::Route,
    store::auth::AuthState,
};

/// Layout for every screen behind login.
///
/// Without a dashboard session the user is sent back to the login screen.
#[component]
pub fn AuthLayout() -> Element {
    let auth_state = use_context::<Signal<AuthState>>();

    let role = auth_state
        .read()
        .session
        .as_ref()
        .map(|session| session.role)
        .filter(|role| role.is_dashboard_role());

    use_effect(move || {
        if auth_state.read().session.is_none() {
            tracing::debug!("No session, redirecting to login");
            navigator().replace(Route::Login {});
        }
    });

    let Some(role) = role else {
        return rsx! {};
    };

    rsx! {
        Navbar {}
        div { class: "flex pt-[64px] min-h-screen",
            Sidebar { role }
            main { class: "flex-1 p-6 overflow-x-auto",
                Outlet::<Route> {}
            }
        }
        Toasts {}
    }
}
