//! Error types for dispatched calls.

use thiserror::Error;

use crate::request::RequestError;

/// Errors that can occur while dispatching a call.
///
/// Non-success HTTP statuses are not errors at this level: they come back as
/// an [`ApiResponse`](crate::ApiResponse) with `is_success() == false` so
/// callers can branch on the status code and inspect the error payload. An
/// `ApiError` means no well-formed response was obtained at all.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request could not be described (bad verb, missing routing
    /// parameter, unreadable attachment).
    #[error(transparent)]
    Request(#[from] RequestError),

    /// The transport failed (connection, TLS, protocol error). The client
    /// does not retry.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}
