//! Error types for request construction.
//!
//! These errors are produced before any network I/O happens: a request that
//! cannot be described (unknown verb shorthand, missing routing parameter,
//! unreadable attachment) never reaches the transport.

use thiserror::Error;

/// Errors that can occur while building a request descriptor.
#[derive(Debug, Error)]
pub enum RequestError {
    /// The verb shorthand is not one of the supported values.
    ///
    /// Unknown methods are rejected at parse time rather than silently
    /// treated as a plain GET.
    #[error("Unknown request method '{method}'. Expected GET, POST, PUT, DELETE or VIEW.")]
    InvalidMethod {
        /// The unrecognized method string.
        method: String,
    },

    /// A parameter required to route the call is absent.
    #[error("Resource '{resource}' requires the '{name}' parameter.")]
    MissingParameter {
        /// Wire name of the resource being called.
        resource: String,
        /// Name of the missing parameter.
        name: &'static str,
    },

    /// A list value was supplied for a key that only accepts scalar text.
    ///
    /// Reserved keys (`method`, `ID`, `unique`) and query-hint filters are
    /// scalar by definition.
    #[error("Parameter '{key}' does not accept a list value.")]
    UnsupportedListValue {
        /// The offending parameter key.
        key: String,
    },

    /// An attachment path marked with `@` could not be read.
    #[error("Failed to read attachment file '{path}': {source}")]
    AttachmentRead {
        /// The file path taken from the `@` marker.
        path: String,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}
