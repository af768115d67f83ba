//! HTTP gateway to the two backend services.
//!
//! [`ApiClient`] wraps a single `reqwest::Client` and builds requests against either the auth
//! service or the ship service. Anonymous requests carry no credentials; authenticated requests
//! read the stored [`Session`] when they are built and attach its bearer token, omitting the
//! header entirely when nobody is signed in so the backend can reject the call.

pub mod session;

use std::{fmt, rc::Rc};

use dioxus_logger::tracing;
use reqwest::{Method, RequestBuilder, Url};
use serde::de::DeserializeOwned;

use crate::{config::Config, error::Error, model::api::ApiResponse};

pub use session::{MemorySessionStorage, Session, SessionStorage};

#[cfg(feature = "web")]
pub use session::LocalSessionStorage;

/// Backend service a request is addressed to
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Service {
    /// Authentication and account management
    Auth,
    /// Ships and ship documents
    Ship,
}

impl fmt::Display for Service {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Service::Auth => f.write_str("auth"),
            Service::Ship => f.write_str("ship"),
        }
    }
}

#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    config: Config,
    storage: Rc<dyn SessionStorage>,
}

impl PartialEq for ApiClient {
    fn eq(&self, other: &Self) -> bool {
        self.config == other.config && Rc::ptr_eq(&self.storage, &other.storage)
    }
}

impl ApiClient {
    pub fn new(config: Config, storage: Rc<dyn SessionStorage>) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
            storage,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Currently stored session, if any
    pub fn session(&self) -> Option<Session> {
        Session::load(self.storage.as_ref())
    }

    pub fn store_session(&self, session: &Session) -> Result<(), Error> {
        session.save(self.storage.as_ref())
    }

    pub fn clear_session(&self) -> Result<(), Error> {
        Session::clear(self.storage.as_ref())
    }

    fn url(&self, service: Service, path: &str) -> Result<Url, Error> {
        let base = match service {
            Service::Auth => &self.config.auth_api_url,
            Service::Ship => &self.config.ship_api_url,
        };

        let url = format!(
            "{}/{}",
            base.as_str().trim_end_matches('/'),
            path.trim_start_matches('/')
        );

        Url::parse(&url).map_err(|e| {
            Error::Config(crate::error::config::ConfigError::InvalidEnvValue {
                var: format!("{} service url", service),
                reason: e.to_string(),
            })
        })
    }

    /// Build a request that carries no credentials
    pub fn anonymous(
        &self,
        method: Method,
        service: Service,
        path: &str,
    ) -> Result<RequestBuilder, Error> {
        Ok(self.http.request(method, self.url(service, path)?))
    }

    /// Build a request carrying the stored bearer token, if one exists
    pub fn authenticated(
        &self,
        method: Method,
        service: Service,
        path: &str,
    ) -> Result<RequestBuilder, Error> {
        let request = self.anonymous(method, service, path)?;

        match self.session() {
            Some(session) => Ok(request.bearer_auth(session.access_token)),
            None => {
                tracing::debug!(path = %path, "No session stored, sending request without credentials");
                Ok(request)
            }
        }
    }

    /// Send a request and decode the full response body as `T`
    pub async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, Error> {
        let body = self.execute(request).await?;

        Ok(serde_json::from_str(&body)?)
    }

    /// Send a request and unwrap the `data` field of the success envelope
    pub async fn send_data<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
    ) -> Result<T, Error> {
        let response: ApiResponse<T> = self.send(request).await?;

        Ok(response.data)
    }

    /// Send a request whose success body carries nothing the dashboard needs
    pub async fn send_empty(&self, request: RequestBuilder) -> Result<(), Error> {
        self.execute(request).await.map(|_| ())
    }

    async fn execute(&self, request: RequestBuilder) -> Result<String, Error> {
        let request = request.build()?;
        let method = request.method().clone();
        let path = request.url().path().to_string();

        tracing::debug!(%method, path = %path, "Sending request");

        let response = self.http.execute(request).await.map_err(|e| {
            tracing::warn!(%method, path = %path, "Request failed to send: {}", e);
            e
        })?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let err = Error::from_response(status, &body);
            tracing::warn!(%method, path = %path, status = status.as_u16(), "{}", err);

            return Err(err);
        }

        Ok(body)
    }
}
