//! Request descriptors and the resource-to-request translation rules.
//!
//! This module turns a ([`Resource`], [`Params`]) pair into an immutable
//! [`RequestDescriptor`]: the fully resolved URL (query string included), the
//! verb, and the encoded body shape. Translation is pure apart from reading
//! attachment files; nothing here touches the network.
//!
//! # URL resolution
//!
//! - `sendEmail` resolves to `<base>/send/message`
//! - `uploadCSVContactslistData` resolves to
//!   `<base>/DATA/Contactslist/<list>/CSVData/text:plain`
//! - newsletter/contact/contactslist action resources resolve to
//!   `<base>/REST/<family>/<ID>/<action>`
//! - `contactManageManyContacts` resolves to `<base>/REST/contact/managemanycontacts`
//! - everything else resolves to `<base>/REST/<name>`
//!
//! GET requests append the body fields as the query string; POST requests
//! append the query hints. VIEW, DELETE and PUT append the record identifier
//! as a trailing path segment instead (`contactslistManageManyContacts` uses
//! its `JobID` parameter there). POST and PUT carry a body: raw CSV text for
//! the upload resource, multipart for `sendEmail` with list values, JSON
//! otherwise.

mod errors;
pub(crate) mod multipart;

pub use errors::RequestError;
pub use multipart::Part;

use std::fmt;
use std::str::FromStr;

use crate::params::{ParamValue, Params};
use crate::resource::Resource;

/// Placeholder recipient inserted when `sendEmail` is called with only
/// `cc`/`bcc` set. The upstream API rejects sends without a `to` address.
pub const DEFAULT_TO_ADDRESS: &str = "mailjet@example.org";

/// Verb shorthand accepted by the dispatcher.
///
/// `View` is GET-with-path-id addressing, historically used to read a single
/// record; the other four map directly onto their HTTP methods.
///
/// # Example
///
/// ```rust
/// use mailjet_api::Verb;
///
/// let verb: Verb = "view".parse().unwrap();
/// assert_eq!(verb, Verb::View);
/// assert!("TRACE".parse::<Verb>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verb {
    /// Plain read; body fields become the query string.
    Get,
    /// Create; query hints become the query string, body fields the payload.
    Post,
    /// Update a record addressed by the trailing path segment.
    Put,
    /// Delete a record addressed by the trailing path segment.
    Delete,
    /// Read a single record addressed by the trailing path segment.
    View,
}

impl Verb {
    /// Returns the shorthand spelling (`"GET"`, `"VIEW"`, and so on).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
            Self::View => "VIEW",
        }
    }

    /// Success predicate for a response status under this verb.
    ///
    /// POST accepts 200 and 201, DELETE exactly 204, everything else
    /// exactly 200.
    #[must_use]
    pub const fn is_success_status(self, status: u16) -> bool {
        match self {
            Self::Post => matches!(status, 200 | 201),
            Self::Delete => status == 204,
            Self::Get | Self::Put | Self::View => status == 200,
        }
    }

    /// Whether requests under this verb carry an encoded body.
    #[must_use]
    pub const fn sends_body(self) -> bool {
        matches!(self, Self::Post | Self::Put)
    }

    /// Whether requests under this verb carry a query string.
    #[must_use]
    pub const fn takes_query(self) -> bool {
        matches!(self, Self::Get | Self::Post)
    }

    /// Whether the record identifier is appended as a trailing path segment.
    #[must_use]
    pub const fn takes_path_id(self) -> bool {
        matches!(self, Self::View | Self::Delete | Self::Put)
    }
}

impl FromStr for Verb {
    type Err = RequestError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "GET" => Ok(Self::Get),
            "POST" => Ok(Self::Post),
            "PUT" => Ok(Self::Put),
            "DELETE" => Ok(Self::Delete),
            "VIEW" => Ok(Self::View),
            _ => Err(RequestError::InvalidMethod {
                method: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for Verb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The encoded body shape of a request.
///
/// Multipart parts are kept structural; the boundary is chosen when the
/// request is sent, so two descriptors built from the same inputs compare
/// equal.
#[derive(Debug, Clone, PartialEq)]
pub enum RequestBody {
    /// No body (GET, VIEW, DELETE).
    None,
    /// JSON object of the body fields.
    Json(serde_json::Value),
    /// Raw text payload (CSV upload).
    Text(String),
    /// Multipart form (send-message with attachments or recipient lists).
    Multipart(Vec<Part>),
}

impl RequestBody {
    /// Returns the `Content-Type` for this body, if it has one.
    ///
    /// The multipart value is the bare media type; the boundary parameter is
    /// appended at send time.
    #[must_use]
    pub const fn content_type(&self) -> Option<&'static str> {
        match self {
            Self::None => None,
            Self::Json(_) => Some("application/json"),
            Self::Text(_) => Some("text/plain"),
            Self::Multipart(_) => Some("multipart/form-data"),
        }
    }
}

/// A fully resolved request, derived once per call and immutable after.
///
/// # Example
///
/// ```rust
/// use mailjet_api::{Params, RequestDescriptor, Resource, Verb};
///
/// let params = Params::new().method(Verb::View).id(45);
/// let descriptor =
///     RequestDescriptor::build("https://api.mailjet.com/v3", &Resource::from("newsletter"), params)
///         .unwrap();
///
/// assert_eq!(descriptor.url(), "https://api.mailjet.com/v3/REST/newsletter/45");
/// assert_eq!(descriptor.verb(), Verb::View);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct RequestDescriptor {
    resource: String,
    verb: Verb,
    url: String,
    body: RequestBody,
}

impl RequestDescriptor {
    /// Builds the descriptor for one call against the given API base URL.
    ///
    /// # Errors
    ///
    /// Returns [`RequestError::MissingParameter`] when a routing parameter
    /// (`ID`, `JobID`, `csv_content`, the CSV list id) is absent, and
    /// [`RequestError::AttachmentRead`] when an `@`-marked attachment file
    /// cannot be read.
    pub fn build(api_url: &str, resource: &Resource, params: Params) -> Result<Self, RequestError> {
        let verb = params.verb();
        let params = apply_send_email_defaults(resource, params);

        let mut url = base_url_for(api_url, resource, &params)?;

        if verb.takes_query() {
            let query = build_query(verb, &params);
            if !query.is_empty() {
                url.push('?');
                url.push_str(&query);
            }
        }

        if verb.takes_path_id() && !matches!(resource, Resource::UploadCsvContactslistData) {
            if let Some(identifier) = params.identifier() {
                if !identifier.is_empty() {
                    let segment = if matches!(resource, Resource::ContactslistManageManyContacts) {
                        params.field_text("JobID").ok_or_else(|| {
                            RequestError::MissingParameter {
                                resource: resource.name().to_string(),
                                name: "JobID",
                            }
                        })?
                    } else {
                        identifier
                    };
                    url.push('/');
                    url.push_str(segment);
                }
            }
        }

        let body = build_body(resource, verb, &params)?;

        Ok(Self {
            resource: resource.name().to_string(),
            verb,
            url,
            body,
        })
    }

    /// Wire name of the resource this request targets.
    #[must_use]
    pub fn resource(&self) -> &str {
        &self.resource
    }

    /// Verb shorthand for the call.
    #[must_use]
    pub const fn verb(&self) -> Verb {
        self.verb
    }

    /// The fully resolved URL, query string included.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    /// The encoded body shape.
    #[must_use]
    pub const fn body(&self) -> &RequestBody {
        &self.body
    }
}

/// Synthesizes the placeholder `to` recipient for `sendEmail` when only
/// `cc`/`bcc` are present.
fn apply_send_email_defaults(resource: &Resource, params: Params) -> Params {
    if !matches!(resource, Resource::SendEmail) {
        return params;
    }

    let to_empty = params.field_value("to").map_or(true, ParamValue::is_empty);
    let has_copy = ["cc", "bcc"]
        .iter()
        .any(|key| params.field_value(key).map_or(false, |v| !v.is_empty()));

    if to_empty && has_copy {
        params.field("to", DEFAULT_TO_ADDRESS)
    } else {
        params
    }
}

/// Resolves the base URL for the resource, before query string and trailing
/// id segment.
fn base_url_for(api_url: &str, resource: &Resource, params: &Params) -> Result<String, RequestError> {
    match resource {
        Resource::SendEmail => Ok(format!("{api_url}/send/message")),
        Resource::UploadCsvContactslistData => {
            let list_id = params
                .filter_value("contactslist_id")
                .or_else(|| params.raw_id())
                .ok_or_else(|| RequestError::MissingParameter {
                    resource: resource.name().to_string(),
                    name: "contactslist_id",
                })?;
            Ok(format!(
                "{api_url}/DATA/Contactslist/{list_id}/CSVData/text:plain"
            ))
        }
        Resource::ContactManageManyContacts => {
            Ok(format!("{api_url}/REST/contact/managemanycontacts"))
        }
        _ => resource.family_action().map_or_else(
            || Ok(format!("{api_url}/REST/{}", resource.name())),
            |(family, action)| {
                let id = params.raw_id().ok_or_else(|| RequestError::MissingParameter {
                    resource: resource.name().to_string(),
                    name: "ID",
                })?;
                Ok(format!("{api_url}/REST/{family}/{id}/{action}"))
            },
        ),
    }
}

/// Builds the query string for GET (body fields) and POST (query hints).
///
/// Pairs keep insertion order; values are percent-encoded, keys passed
/// through as-is.
fn build_query(verb: Verb, params: &Params) -> String {
    let mut pairs: Vec<String> = Vec::new();

    match verb {
        Verb::Get => {
            for (key, value) in params.fields() {
                let text = match value {
                    ParamValue::Text(text) => urlencoding::encode(text).into_owned(),
                    ParamValue::Many(items) => urlencoding::encode(&items.join(",")).into_owned(),
                };
                pairs.push(format!("{key}={text}"));
            }
        }
        Verb::Post => {
            for (key, value) in params.filters() {
                pairs.push(format!("{key}={}", urlencoding::encode(value)));
            }
        }
        _ => {}
    }

    pairs.join("&")
}

/// Routes the body encoding for POST/PUT requests.
fn build_body(resource: &Resource, verb: Verb, params: &Params) -> Result<RequestBody, RequestError> {
    if !verb.sends_body() {
        return Ok(RequestBody::None);
    }

    match resource {
        Resource::UploadCsvContactslistData => {
            let csv = params
                .field_text("csv_content")
                .ok_or_else(|| RequestError::MissingParameter {
                    resource: resource.name().to_string(),
                    name: "csv_content",
                })?;
            Ok(RequestBody::Text(csv.to_string()))
        }
        Resource::SendEmail if params.has_list_values() => {
            Ok(RequestBody::Multipart(multipart::parts_from(params)?))
        }
        _ => Ok(RequestBody::Json(json_body(resource, params))),
    }
}

/// Builds the JSON body object: the `ID` value (unless the resource strips
/// it) followed by the body fields.
fn json_body(resource: &Resource, params: &Params) -> serde_json::Value {
    let mut map = serde_json::Map::new();

    if !resource.strips_id_from_body() {
        if let Some(id) = params.raw_id() {
            map.insert("ID".to_string(), serde_json::Value::String(id.to_string()));
        }
    }

    for (key, value) in params.fields() {
        map.insert(key.clone(), value.into());
    }

    serde_json::Value::Object(map)
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "https://api.mailjet.com/v3";

    // === Verb ===

    #[test]
    fn test_verb_parses_case_insensitively() {
        assert_eq!("get".parse::<Verb>().unwrap(), Verb::Get);
        assert_eq!("Post".parse::<Verb>().unwrap(), Verb::Post);
        assert_eq!("VIEW".parse::<Verb>().unwrap(), Verb::View);
        assert_eq!("delete".parse::<Verb>().unwrap(), Verb::Delete);
        assert_eq!("PUT".parse::<Verb>().unwrap(), Verb::Put);
    }

    #[test]
    fn test_verb_rejects_unknown_shorthand() {
        let error = "PATCH".parse::<Verb>().unwrap_err();
        assert!(matches!(
            error,
            RequestError::InvalidMethod { method } if method == "PATCH"
        ));
    }

    #[test]
    fn test_success_predicate_table() {
        assert!(Verb::Post.is_success_status(200));
        assert!(Verb::Post.is_success_status(201));
        assert!(!Verb::Post.is_success_status(204));

        assert!(Verb::Delete.is_success_status(204));
        assert!(!Verb::Delete.is_success_status(200));

        for verb in [Verb::Get, Verb::View, Verb::Put] {
            assert!(verb.is_success_status(200), "{verb} should accept 200");
            assert!(!verb.is_success_status(201), "{verb} should reject 201");
            assert!(!verb.is_success_status(204), "{verb} should reject 204");
        }
    }

    #[test]
    fn test_view_is_read_shaped() {
        assert!(!Verb::View.sends_body());
        assert!(!Verb::View.takes_query());
        assert!(Verb::View.takes_path_id());
    }

    // === Descriptor construction ===

    #[test]
    fn test_generic_resource_resolves_to_rest_url() {
        let descriptor = RequestDescriptor::build(
            BASE,
            &Resource::from("contact"),
            Params::new(),
        )
        .unwrap();

        assert_eq!(descriptor.url(), format!("{BASE}/REST/contact"));
        assert_eq!(descriptor.verb(), Verb::Get);
        assert_eq!(descriptor.body(), &RequestBody::None);
    }

    #[test]
    fn test_newsletter_action_requires_id() {
        let error =
            RequestDescriptor::build(BASE, &Resource::NewsletterSend, Params::new()).unwrap_err();

        assert!(matches!(
            error,
            RequestError::MissingParameter { resource, name: "ID" } if resource == "newsletterSend"
        ));
    }

    #[test]
    fn test_csv_upload_requires_list_id() {
        let params = Params::new()
            .method(Verb::Post)
            .field("csv_content", "a@example.com\n");
        let error =
            RequestDescriptor::build(BASE, &Resource::UploadCsvContactslistData, params)
                .unwrap_err();

        assert!(matches!(
            error,
            RequestError::MissingParameter {
                name: "contactslist_id",
                ..
            }
        ));
    }

    #[test]
    fn test_csv_upload_requires_content_on_post() {
        let params = Params::new().method(Verb::Post).id(45);
        let error =
            RequestDescriptor::build(BASE, &Resource::UploadCsvContactslistData, params)
                .unwrap_err();

        assert!(matches!(
            error,
            RequestError::MissingParameter {
                name: "csv_content",
                ..
            }
        ));
    }

    #[test]
    fn test_manage_many_contacts_view_requires_job_id() {
        let params = Params::new().method(Verb::View).id(45);
        let error =
            RequestDescriptor::build(BASE, &Resource::ContactslistManageManyContacts, params)
                .unwrap_err();

        assert!(matches!(
            error,
            RequestError::MissingParameter { name: "JobID", .. }
        ));
    }

    #[test]
    fn test_placeholder_to_is_synthesized_for_copy_only_sends() {
        let params = Params::new()
            .method(Verb::Post)
            .field("from", "sender@example.com")
            .field("cc", "copy@example.com")
            .field("text", "hello");

        let descriptor = RequestDescriptor::build(BASE, &Resource::SendEmail, params).unwrap();

        let RequestBody::Json(body) = descriptor.body() else {
            panic!("expected JSON body");
        };
        assert_eq!(body["to"], DEFAULT_TO_ADDRESS);
    }

    #[test]
    fn test_placeholder_to_respects_existing_recipient() {
        let params = Params::new()
            .method(Verb::Post)
            .field("to", "real@example.com")
            .field("cc", "copy@example.com");

        let descriptor = RequestDescriptor::build(BASE, &Resource::SendEmail, params).unwrap();

        let RequestBody::Json(body) = descriptor.body() else {
            panic!("expected JSON body");
        };
        assert_eq!(body["to"], "real@example.com");
    }

    #[test]
    fn test_no_placeholder_without_copy_recipients() {
        let params = Params::new()
            .method(Verb::Post)
            .field("from", "sender@example.com")
            .field("text", "hello");

        let descriptor = RequestDescriptor::build(BASE, &Resource::SendEmail, params).unwrap();

        let RequestBody::Json(body) = descriptor.body() else {
            panic!("expected JSON body");
        };
        assert!(body.get("to").is_none());
    }

    #[test]
    fn test_build_is_deterministic() {
        let params = || {
            Params::new()
                .method(Verb::Post)
                .id(7)
                .field("name", "List")
                .filter("limit", 5)
        };

        let first = RequestDescriptor::build(BASE, &Resource::from("contactslist"), params());
        let second = RequestDescriptor::build(BASE, &Resource::from("contactslist"), params());
        assert_eq!(first.unwrap(), second.unwrap());
    }

    #[test]
    fn test_content_types_follow_body() {
        assert_eq!(RequestBody::None.content_type(), None);
        assert_eq!(
            RequestBody::Json(serde_json::json!({})).content_type(),
            Some("application/json")
        );
        assert_eq!(
            RequestBody::Text(String::new()).content_type(),
            Some("text/plain")
        );
        assert_eq!(
            RequestBody::Multipart(Vec::new()).content_type(),
            Some("multipart/form-data")
        );
    }
}
