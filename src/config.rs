use reqwest::Url;

use crate::error::config::ConfigError;

pub const AUTH_API_URL_VAR: &str = "SHIPGPT_AUTH_API_URL";
pub const SHIP_API_URL_VAR: &str = "SHIPGPT_SHIP_API_URL";

const DEFAULT_AUTH_API_URL: &str = "http://localhost:3000";
const DEFAULT_SHIP_API_URL: &str = "http://localhost:3001";

/// Upload ceiling for documents attached from the ship details screen
pub const SHIP_DETAILS_UPLOAD_LIMIT: u64 = 10 * 1024 * 1024;
/// Upload ceiling for documents uploaded from the documents screen
pub const DOCUMENTS_UPLOAD_LIMIT: u64 = 5 * 1024 * 1024;

/// Rows shown per page in dashboard tables
pub const TABLE_PAGE_SIZE: usize = 10;

/// Minimum length accepted for new passwords
pub const MIN_PASSWORD_LENGTH: usize = 8;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// Base URL of the auth & user service
    pub auth_api_url: Url,
    /// Base URL of the ship & document service
    pub ship_api_url: Url,
}

impl Config {
    /// Resolve backend URLs baked in at build time.
    ///
    /// The browser has no process environment, so `SHIPGPT_AUTH_API_URL` and
    /// `SHIPGPT_SHIP_API_URL` are read when the bundle is compiled, falling back to the local
    /// development ports when unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_values(
            option_env!("SHIPGPT_AUTH_API_URL").unwrap_or(DEFAULT_AUTH_API_URL),
            option_env!("SHIPGPT_SHIP_API_URL").unwrap_or(DEFAULT_SHIP_API_URL),
        )
    }

    pub fn from_values(auth_api_url: &str, ship_api_url: &str) -> Result<Self, ConfigError> {
        Ok(Self {
            auth_api_url: parse_base_url(AUTH_API_URL_VAR, auth_api_url)?,
            ship_api_url: parse_base_url(SHIP_API_URL_VAR, ship_api_url)?,
        })
    }
}

fn parse_base_url(var: &str, value: &str) -> Result<Url, ConfigError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(ConfigError::MissingEnvVar(var.to_string()));
    }

    let url = Url::parse(value).map_err(|e| ConfigError::InvalidEnvValue {
        var: var.to_string(),
        reason: e.to_string(),
    })?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(ConfigError::InvalidEnvValue {
            var: var.to_string(),
            reason: format!("unsupported scheme `{}`", url.scheme()),
        });
    }

    Ok(url)
}
