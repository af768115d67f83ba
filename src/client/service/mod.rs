//! Request functions, one per backend operation.
//!
//! Each function validates its client-side preconditions, issues exactly one request through
//! the [`ApiClient`](crate::client::http::ApiClient) and returns the unwrapped payload or the
//! error unchanged. Nothing here retries or caches.

pub mod account;
pub mod auth;
pub mod document;
pub mod ship;
