//! HTTP dispatch for Mailjet API calls.
//!
//! This module provides the [`MailjetClient`] type: one generic dispatcher
//! that turns a resource name and a parameter set into an authenticated HTTP
//! request, executes it, and interprets the response.
//!
//! # Overview
//!
//! The client handles:
//! - URL and body translation via [`RequestDescriptor`]
//! - Basic-auth credentials and the User-Agent header on every request
//! - Body encoding: JSON, raw CSV text, or multipart with a fresh boundary
//! - Response interpretation into an [`ApiResponse`] with its [`CallTrace`]
//!
//! # Example
//!
//! ```rust,ignore
//! use mailjet_api::{MailjetClient, Params, Verb};
//!
//! let client = MailjetClient::new(config);
//!
//! let params = Params::new().method(Verb::Post).id(45).field(
//!     "csv_content",
//!     "email\nalice@example.com\n",
//! );
//! let response = client.call("uploadCSVContactslistData", params).await?;
//!
//! assert!(response.is_success());
//! ```

mod errors;

pub use errors::ApiError;

use crate::config::MailjetConfig;
use crate::params::Params;
use crate::request::{multipart, RequestBody, RequestDescriptor, Verb};
use crate::resource::Resource;
use crate::response::{ApiResponse, CallTrace};

/// Library version from Cargo.toml, reported in the User-Agent header.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Client for making authenticated requests to the Mailjet v3 API.
///
/// Every call goes through [`MailjetClient::call`]: the resource name and
/// parameters select the URL, verb, and body per the translation rules in
/// [`crate::request`], the credential pair is sent as basic auth, and the
/// outcome comes back as an [`ApiResponse`] carrying its own [`CallTrace`].
///
/// # Thread Safety
///
/// `MailjetClient` is `Send + Sync` and keeps no per-call state, so one
/// instance can serve concurrent calls from multiple tasks.
///
/// # Example
///
/// ```rust
/// use mailjet_api::{ApiKey, ApiSecretKey, MailjetClient, MailjetConfig};
///
/// let config = MailjetConfig::builder()
///     .api_key(ApiKey::new("your-api-key").unwrap())
///     .api_secret_key(ApiSecretKey::new("your-secret").unwrap())
///     .build()
///     .unwrap();
///
/// let client = MailjetClient::new(config);
/// assert_eq!(client.api_url(), "https://api.mailjet.com/v3");
/// ```
#[derive(Debug, Clone)]
pub struct MailjetClient {
    /// The internal reqwest HTTP client.
    http: reqwest::Client,
    /// Credentials and environment selection.
    config: MailjetConfig,
    /// Base URL resolved once at construction.
    api_url: String,
    /// User-Agent header value sent with every request.
    user_agent: String,
}

// Verify MailjetClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<MailjetClient>();
};

impl MailjetClient {
    /// Creates a new client from the given configuration.
    ///
    /// # Panics
    ///
    /// Panics if the underlying reqwest client cannot be created. This should
    /// only happen in extremely unusual circumstances (e.g., TLS
    /// initialization failure).
    ///
    /// # Example
    ///
    /// ```rust
    /// use mailjet_api::{ApiKey, ApiSecretKey, MailjetClient, MailjetConfig};
    ///
    /// let config = MailjetConfig::builder()
    ///     .api_key(ApiKey::new("key").unwrap())
    ///     .api_secret_key(ApiSecretKey::new("secret").unwrap())
    ///     .preprod(true)
    ///     .build()
    ///     .unwrap();
    ///
    /// let client = MailjetClient::new(config);
    /// assert_eq!(client.api_url(), "https://api.preprod.mailjet.com/v30");
    /// ```
    #[must_use]
    pub fn new(config: MailjetConfig) -> Self {
        let http = reqwest::Client::builder()
            .use_rustls_tls()
            .build()
            .expect("Failed to create HTTP client");

        Self::with_http_client(http, config)
    }

    /// Creates a client that dispatches through a caller-supplied
    /// `reqwest::Client`.
    ///
    /// The core configures no timeouts, proxies, or connection limits of its
    /// own; callers who need them build the transport themselves and hand it
    /// over here.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let http = reqwest::Client::builder()
    ///     .timeout(std::time::Duration::from_secs(30))
    ///     .use_rustls_tls()
    ///     .build()?;
    ///
    /// let client = MailjetClient::with_http_client(http, config);
    /// ```
    #[must_use]
    pub fn with_http_client(http: reqwest::Client, config: MailjetConfig) -> Self {
        // Build User-Agent header
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent = format!("mailjet-api-rust/{SDK_VERSION}; Rust {rust_version}");

        let api_url = config.api_url();

        Self {
            http,
            config,
            api_url,
            user_agent,
        }
    }

    /// Returns the configuration this client was built with.
    #[must_use]
    pub const fn config(&self) -> &MailjetConfig {
        &self.config
    }

    /// Returns the base URL every call resolves against.
    #[must_use]
    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// Returns the User-Agent header value sent with every request.
    #[must_use]
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    /// Calls an API resource.
    ///
    /// The verb defaults to GET and is taken from the parameters
    /// (`Params::method`); the record identifier, query hints, and body
    /// fields are placed per the verb's rules. A non-success HTTP status is
    /// not an error: the returned [`ApiResponse`] reports it through
    /// [`ApiResponse::is_success`] and [`ApiResponse::status_code`].
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Request`] when the parameters cannot be translated
    /// into a request (missing `ID`, `JobID`, CSV content, or an unreadable
    /// attachment), and [`ApiError::Network`] when the HTTP exchange itself
    /// fails.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use mailjet_api::{Params, Verb};
    ///
    /// let params = Params::new().method(Verb::View).id(45).field("JobID", 999);
    /// let response = client.call("contactslistManageManyContacts", params).await?;
    ///
    /// println!("{} -> {}", response.trace(), response.status_code());
    /// ```
    pub async fn call(
        &self,
        resource: impl Into<Resource>,
        params: Params,
    ) -> Result<ApiResponse, ApiError> {
        let resource = resource.into();
        let descriptor = RequestDescriptor::build(&self.api_url, &resource, params)?;
        self.dispatch(descriptor).await
    }

    /// Executes one translated request and interprets the result.
    async fn dispatch(&self, descriptor: RequestDescriptor) -> Result<ApiResponse, ApiError> {
        let verb = descriptor.verb();

        tracing::debug!(
            "Dispatching {} {} ({})",
            verb,
            descriptor.url(),
            descriptor.resource()
        );

        // Map the verb shorthand onto the HTTP method (VIEW reads like GET)
        let req_builder = match verb {
            Verb::Get | Verb::View => self.http.get(descriptor.url()),
            Verb::Post => self.http.post(descriptor.url()),
            Verb::Put => self.http.put(descriptor.url()),
            Verb::Delete => self.http.delete(descriptor.url()),
        };

        let req_builder = req_builder
            .basic_auth(
                self.config.api_key().as_ref(),
                Some(self.config.api_secret_key().as_ref()),
            )
            .header("User-Agent", &self.user_agent);

        // Encode the body; the multipart boundary is generated per send
        let req_builder = match descriptor.body() {
            RequestBody::None => req_builder,
            RequestBody::Json(value) => req_builder
                .header("Content-Type", "application/json")
                .body(value.to_string()),
            RequestBody::Text(text) => req_builder
                .header("Content-Type", "text/plain")
                .body(text.clone()),
            RequestBody::Multipart(parts) => {
                let boundary = multipart::random_boundary();
                let payload = multipart::encode(parts, &boundary);
                req_builder
                    .header(
                        "Content-Type",
                        format!("multipart/form-data; boundary={boundary}"),
                    )
                    .body(payload)
            }
        };

        // Send request
        let res = req_builder.send().await?;

        // Parse response
        let status = res.status().as_u16();
        let raw = res.bytes().await?.to_vec();

        tracing::debug!("{} {} returned {}", verb, descriptor.url(), status);

        let trace = CallTrace::new(
            descriptor.resource().to_string(),
            verb,
            descriptor.url().to_string(),
        );
        let response = ApiResponse::from_parts(verb, status, raw, trace);

        if !response.is_success() {
            tracing::warn!(
                "Mailjet API call {} failed with status {}",
                response.trace(),
                status
            );
        }

        Ok(response)
    }
}
