//! # Mailjet API Rust Client
//!
//! A Rust client for the Mailjet v3 API, providing type-safe configuration
//! and a single generic dispatcher covering contact, list, newsletter,
//! bulk-import, and transactional-send resources.
//!
//! ## Overview
//!
//! This crate provides:
//! - Type-safe configuration via [`MailjetConfig`] and [`MailjetConfigBuilder`]
//! - Validated newtypes for the API credential pair
//! - One [`MailjetClient::call`] surface for every v3 resource
//! - Per-resource URL translation: REST paths, newsletter/list actions,
//!   per-list CSV upload, and the send-message endpoint
//! - JSON, raw-text, and multipart body encoding (attachments included)
//! - Verb-aware response interpretation via [`ApiResponse`] and [`CallTrace`]
//!
//! ## Quick Start
//!
//! ```rust
//! use mailjet_api::{ApiKey, ApiSecretKey, MailjetClient, MailjetConfig};
//!
//! // Create configuration using the builder pattern
//! let config = MailjetConfig::builder()
//!     .api_key(ApiKey::new("your-api-key").unwrap())
//!     .api_secret_key(ApiSecretKey::new("your-api-secret").unwrap())
//!     .build()
//!     .unwrap();
//!
//! let client = MailjetClient::new(config);
//! assert_eq!(client.api_url(), "https://api.mailjet.com/v3");
//! ```
//!
//! ## Making API Calls
//!
//! The resource name and a [`Params`] set select the URL, verb, and body:
//!
//! ```rust,ignore
//! use mailjet_api::{Params, Verb};
//!
//! // List contacts (GET is the default verb; fields become the query string)
//! let response = client.call("contact", Params::new().field("limit", 10)).await?;
//! if let Some(data) = response.data() {
//!     println!("{} contacts", data.len());
//! }
//!
//! // Create a contact list
//! let params = Params::new().method(Verb::Post).field("name", "My list");
//! let created = client.call("contactslist", params).await?;
//! assert!(created.is_success());
//!
//! // Read a single record (VIEW appends the id as a path segment)
//! let one = client
//!     .call("contactslist", Params::new().method(Verb::View).id(45))
//!     .await?;
//! println!("{} -> {}", one.trace(), one.status_code());
//! ```
//!
//! ## Sending Email
//!
//! List values under `to`/`cc`/`bcc` are comma-joined recipients; entries
//! with a leading `@` under any other key are file attachments:
//!
//! ```rust,ignore
//! use mailjet_api::{Params, Verb};
//!
//! let params = Params::new()
//!     .method(Verb::Post)
//!     .field("from", "sender@example.com")
//!     .field("to", vec!["alice@example.com", "bob@example.com"])
//!     .field("subject", "Monthly report")
//!     .field("text", "Please find the report attached.")
//!     .field("attachment", vec!["@/tmp/report.pdf"]);
//!
//! let response = client.call("sendEmail", params).await?;
//! ```
//!
//! ## Bulk CSV Import
//!
//! Uploading CSV data, creating the import job, and polling it chain three
//! calls; see the `csv_import` example for the full flow:
//!
//! ```rust,ignore
//! use mailjet_api::{Params, Verb};
//!
//! let upload = client
//!     .call(
//!         "uploadCSVContactslistData",
//!         Params::new().method(Verb::Post).id(45).field("csv_content", csv),
//!     )
//!     .await?;
//! let data_id = upload.json().and_then(|body| body["ID"].as_u64());
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration is instance-based and passed explicitly
//! - **Fail-fast validation**: Credentials and verbs are rejected before any I/O
//! - **Thread-safe**: All types are `Send + Sync`; each response carries its
//!   own call trace instead of the client retaining last-call state
//! - **Async-first**: Designed for use with Tokio async runtime
//! - **Statuses are data**: Non-success HTTP statuses are reported through
//!   the response, not raised as errors

pub mod client;
pub mod config;
pub mod error;
pub mod params;
pub mod request;
pub mod resource;
pub mod response;

// Re-export public types at crate root for convenience
pub use client::{ApiError, MailjetClient, SDK_VERSION};
pub use config::{ApiKey, ApiSecretKey, MailjetConfig, MailjetConfigBuilder};
pub use error::ConfigError;
pub use params::{ParamValue, Params};
pub use request::{Part, RequestBody, RequestDescriptor, RequestError, Verb, DEFAULT_TO_ADDRESS};
pub use resource::Resource;
pub use response::{ApiResponse, CallTrace};
