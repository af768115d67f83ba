//! Error types for the ShipGPT admin dashboard.
//!
//! Failures fall into four groups: transport failures, errors reported by one of the backend
//! services (generic messages or lists of validation messages), client-side precondition
//! failures detected before any request is issued, and configuration problems. Every variant
//! can be turned into a human readable message via [`Error::user_message`], which is what the
//! stores record and what the view layer shows in a toast.

pub mod client;
pub mod config;

use reqwest::StatusCode;
use thiserror::Error;

use crate::{
    error::{client::ClientError, config::ConfigError},
    model::api::{ErrorDto, ErrorMessage},
};

/// Message shown when nothing more specific can be extracted from a failure
pub const GENERIC_ERROR_MESSAGE: &str = "Something went wrong, please try again.";

/// Main error type for the dashboard.
///
/// Aggregates transport, backend, decoding, client-side and configuration failures so that
/// request functions and store actions can propagate everything with `?`.
#[derive(Error, Debug)]
pub enum Error {
    /// Client-side precondition failure, no request was issued.
    #[error(transparent)]
    Client(#[from] ClientError),
    /// Configuration error (missing or malformed backend URL).
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// The backend rejected the request with a single message.
    #[error("Request failed with status {status}: {message}")]
    Api { status: StatusCode, message: String },
    /// The backend rejected the request with a list of validation messages.
    #[error("Request failed with status {status}: {}", .messages.join(", "))]
    Validation {
        status: StatusCode,
        messages: Vec<String>,
    },
    /// The backend answered with an error status and a body that carried no message.
    #[error("Request failed with status {0}")]
    Status(StatusCode),
    /// Network or transport failure (DNS, connection refused, CORS, aborted request).
    #[error(transparent)]
    Transport(#[from] reqwest::Error),
    /// The response body did not match the expected shape.
    #[error("Failed to parse response: {0}")]
    Decode(#[from] serde_json::Error),
    /// Browser storage could not be read or written.
    #[error("Failed to access session storage: {0}")]
    Storage(String),
}

impl Error {
    /// Builds the error for a non-2xx response from its status and raw body.
    ///
    /// The body is parsed as the backend error envelope; a list of messages becomes a
    /// validation error, a single message an API error. Bodies without any message fall back
    /// to [`Error::Status`].
    pub fn from_response(status: StatusCode, body: &str) -> Self {
        let dto = match serde_json::from_str::<ErrorDto>(body) {
            Ok(dto) => dto,
            Err(_) => return Self::Status(status),
        };

        if let Some(errors) = dto.errors.filter(|errors| !errors.is_empty()) {
            return Self::Validation {
                status,
                messages: errors,
            };
        }

        match dto.message {
            Some(ErrorMessage::Many(messages)) if !messages.is_empty() => {
                Self::Validation { status, messages }
            }
            Some(ErrorMessage::One(message)) if !message.trim().is_empty() => {
                Self::Api { status, message }
            }
            _ => match dto.error {
                Some(message) if !message.trim().is_empty() => Self::Api { status, message },
                _ => Self::Status(status),
            },
        }
    }

    /// Human readable message recorded by the stores and shown to the user
    pub fn user_message(&self) -> String {
        match self {
            Self::Client(err) => err.to_string(),
            Self::Api { message, .. } => message.clone(),
            Self::Validation { messages, .. } => messages.join(", "),
            Self::Status(status) if *status == StatusCode::UNAUTHORIZED => {
                "Your session has expired, please log in again.".to_string()
            }
            Self::Transport(_) => {
                "Unable to reach the server, please check your connection.".to_string()
            }
            _ => GENERIC_ERROR_MESSAGE.to_string(),
        }
    }

    /// Whether the backend refused the request because of missing or invalid credentials
    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(StatusCode::UNAUTHORIZED)
    }

    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Api { status, .. } | Self::Validation { status, .. } | Self::Status(status) => {
                Some(*status)
            }
            Self::Transport(err) => err.status(),
            _ => None,
        }
    }
}
