//! Response envelopes and call traces.
//!
//! Every dispatched call produces exactly one [`ApiResponse`]: the HTTP
//! status, the raw body bytes, the body parsed as JSON when possible, and
//! the success verdict for the verb that was used. The [`CallTrace`] rides
//! along so diagnostics never depend on client state; one client can serve
//! concurrent calls and each response still knows what was asked.
//!
//! # Example
//!
//! ```rust,ignore
//! let response = client.call("contact", Params::new()).await?;
//! if response.is_success() {
//!     if let Some(data) = response.data() {
//!         println!("{} contacts", data.len());
//!     }
//! } else {
//!     eprintln!("{} failed with {}", response.trace(), response.status_code());
//! }
//! ```

use std::fmt;

use serde::de::DeserializeOwned;

use crate::request::Verb;

/// What was asked of the API: resource, verb, and the resolved URL.
///
/// Returned with every [`ApiResponse`] in place of mutable last-call state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallTrace {
    resource: String,
    verb: Verb,
    url: String,
}

impl CallTrace {
    /// Creates a trace for one dispatched request.
    #[must_use]
    pub const fn new(resource: String, verb: Verb, url: String) -> Self {
        Self {
            resource,
            verb,
            url,
        }
    }

    /// Wire name of the resource that was called.
    #[must_use]
    pub fn resource(&self) -> &str {
        &self.resource
    }

    /// Verb shorthand the call used.
    #[must_use]
    pub const fn verb(&self) -> Verb {
        self.verb
    }

    /// The fully resolved URL the call hit, query string included.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }
}

impl fmt::Display for CallTrace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} ({})", self.verb, self.url, self.resource)
    }
}

/// The outcome of one API call.
///
/// The body is parsed as JSON unconditionally when non-empty, including on
/// failed statuses, so error payloads stay inspectable; a body that is not
/// valid JSON leaves [`ApiResponse::json`] as `None` without failing the
/// call.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    status_code: u16,
    success: bool,
    body: Option<serde_json::Value>,
    raw: Vec<u8>,
    trace: CallTrace,
}

impl ApiResponse {
    /// Interprets a raw transport result.
    ///
    /// Success is decided by [`Verb::is_success_status`]: POST accepts
    /// 200/201, DELETE exactly 204, everything else exactly 200.
    #[must_use]
    pub fn from_parts(verb: Verb, status_code: u16, raw: Vec<u8>, trace: CallTrace) -> Self {
        let body = if raw.is_empty() {
            None
        } else {
            serde_json::from_slice(&raw).ok()
        };

        Self {
            status_code,
            success: verb.is_success_status(status_code),
            body,
            raw,
            trace,
        }
    }

    /// The HTTP status code of the response.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        self.status_code
    }

    /// Whether the status code counts as success for the verb used.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.success
    }

    /// The body parsed as JSON, when it parsed.
    #[must_use]
    pub const fn json(&self) -> Option<&serde_json::Value> {
        self.body.as_ref()
    }

    /// Deserializes the parsed body into a typed value.
    ///
    /// Returns `None` when the body did not parse as JSON or does not match
    /// the target shape.
    #[must_use]
    pub fn json_as<T: DeserializeOwned>(&self) -> Option<T> {
        self.body
            .as_ref()
            .and_then(|body| serde_json::from_value(body.clone()).ok())
    }

    /// The `Data` array of the standard response envelope, when present.
    #[must_use]
    pub fn data(&self) -> Option<&Vec<serde_json::Value>> {
        self.body.as_ref()?.get("Data")?.as_array()
    }

    /// The raw response bytes, untouched.
    #[must_use]
    pub fn raw_body(&self) -> &[u8] {
        &self.raw
    }

    /// What was asked to produce this response.
    #[must_use]
    pub const fn trace(&self) -> &CallTrace {
        &self.trace
    }
}
