use std::rc::Rc;

use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::{
    client::{
        http::{ApiClient, SessionStorage},
        router::Route,
        store::{
            account::{AccountState, AccountStores},
            auth::AuthState,
            notification::NotificationState,
            ship::ShipState,
        },
    },
    config::Config,
    error::config::ConfigError,
};

const MAIN_CSS: Asset = asset!("/assets/main.css");

#[cfg(feature = "web")]
fn session_storage() -> Rc<dyn SessionStorage> {
    Rc::new(crate::client::http::LocalSessionStorage)
}

#[cfg(not(feature = "web"))]
fn session_storage() -> Rc<dyn SessionStorage> {
    Rc::new(crate::client::http::MemorySessionStorage::default())
}

fn build_api_client() -> Result<ApiClient, ConfigError> {
    let config = Config::from_env()?;
    tracing::info!(
        auth_api = %config.auth_api_url,
        ship_api = %config.ship_api_url,
        "Starting ShipGPT admin"
    );

    Ok(ApiClient::new(config, session_storage()))
}

#[component]
pub fn App() -> Element {
    let api = use_hook(build_api_client);

    rsx! {
        document::Link { rel: "stylesheet", href: "https://cdn.jsdelivr.net/npm/daisyui@5" }
        document::Script { src: "https://cdn.jsdelivr.net/npm/@tailwindcss/browser@4" }
        document::Stylesheet { href: MAIN_CSS }

        match api {
            Ok(api) => rsx! { AppShell { api } },
            Err(err) => rsx! {
                div { class: "min-h-screen flex items-center justify-center p-4",
                    div { class: "alert alert-error max-w-xl",
                        "{err}"
                    }
                }
            },
        }
    }
}

/// Provides the API client and every store slice to the routed screens
#[component]
fn AppShell(api: ApiClient) -> Element {
    use_context_provider(|| Signal::new(AuthState::restore(&api)));
    use_context_provider(|| api.clone());
    use_context_provider(|| AccountStores {
        admins: Signal::new(AccountState::default()),
        users: Signal::new(AccountState::default()),
        crew: Signal::new(AccountState::default()),
        superintendents: Signal::new(AccountState::default()),
    });
    use_context_provider(|| Signal::new(ShipState::default()));
    use_context_provider(|| Signal::new(NotificationState::default()));

    rsx! {
        Router::<Route> {}
    }
}
