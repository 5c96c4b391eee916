//! Call parameters with explicit placement categories.
//!
//! Mailjet's scripting clients take one flat map per call and encode
//! placement in the key spelling: a `method` entry picks the verb, `ID` and
//! `unique` address a record, a leading underscore marks a key as a
//! query-string hint rather than a body field. [`Params`] keeps those
//! semantics but makes the categories explicit:
//!
//! - **body fields** ([`Params::field`]): sent in the encoded body on
//!   POST/PUT, in the query string on GET;
//! - **query hints** ([`Params::filter`]): sent in the query string on POST,
//!   never in a body, omitted on GET;
//! - **reserved values** ([`Params::method`], [`Params::id`],
//!   [`Params::unique`]): typed, never leak into queries or bodies except
//!   where a routing rule says so.
//!
//! The string-keyed convention is still accepted through [`Params::insert`]
//! for callers used to the flat-map style.
//!
//! Insertion order is preserved and drives query-string order, so building
//! the same `Params` twice yields identical requests.
//!
//! # Example
//!
//! ```rust
//! use mailjet_api::{Params, Verb};
//!
//! let params = Params::new()
//!     .method(Verb::Post)
//!     .id(45)
//!     .field("name", "My list")
//!     .filter("limit", 10);
//!
//! // The same set, via the string-keyed convention:
//! let mut flat = Params::new();
//! flat.insert("method", "POST").unwrap();
//! flat.insert("ID", "45").unwrap();
//! flat.insert("name", "My list").unwrap();
//! flat.insert("_limit", "10").unwrap();
//!
//! assert_eq!(params, flat);
//! ```

use crate::request::{RequestError, Verb};

/// A single parameter value: scalar text, or a list of strings for
/// recipient and attachment fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamValue {
    /// Scalar text value.
    Text(String),
    /// List value (recipients, attachment markers).
    Many(Vec<String>),
}

impl ParamValue {
    /// Returns the scalar text, if this value is scalar.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::Many(_) => None,
        }
    }

    /// Returns whether the value is empty text or an empty list.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Text(text) => text.is_empty(),
            Self::Many(items) => items.is_empty(),
        }
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<Vec<String>> for ParamValue {
    fn from(values: Vec<String>) -> Self {
        Self::Many(values)
    }
}

impl From<Vec<&str>> for ParamValue {
    fn from(values: Vec<&str>) -> Self {
        Self::Many(values.into_iter().map(str::to_string).collect())
    }
}

impl From<u64> for ParamValue {
    fn from(value: u64) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<i64> for ParamValue {
    fn from(value: i64) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<u32> for ParamValue {
    fn from(value: u32) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<i32> for ParamValue {
    fn from(value: i32) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<&ParamValue> for serde_json::Value {
    fn from(value: &ParamValue) -> Self {
        match value {
            ParamValue::Text(text) => Self::String(text.clone()),
            ParamValue::Many(items) => {
                Self::Array(items.iter().cloned().map(Self::String).collect())
            }
        }
    }
}

/// An ordered parameter set for one API call.
///
/// Constructed fluently; see the [module docs](self) for the placement
/// rules. Setting a key twice replaces the earlier value in place.
///
/// # Example
///
/// ```rust
/// use mailjet_api::{Params, Verb};
///
/// let params = Params::new()
///     .method(Verb::Post)
///     .field("Email", "passenger@example.com")
///     .field("Name", "Passenger");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params {
    method: Option<Verb>,
    id: Option<String>,
    unique: Option<String>,
    fields: Vec<(String, ParamValue)>,
    filters: Vec<(String, String)>,
}

impl Params {
    /// Creates an empty parameter set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the verb shorthand for the call. Defaults to GET when unset.
    #[must_use]
    pub const fn method(mut self, verb: Verb) -> Self {
        self.method = Some(verb);
        self
    }

    /// Sets the record identifier used for path-based addressing.
    #[must_use]
    pub fn id(mut self, id: impl std::fmt::Display) -> Self {
        self.id = Some(id.to_string());
        self
    }

    /// Sets the alternate record identifier, used when no `id` is set.
    #[must_use]
    pub fn unique(mut self, unique: impl std::fmt::Display) -> Self {
        self.unique = Some(unique.to_string());
        self
    }

    /// Adds a body field.
    ///
    /// Reserved names are not interpreted here; use [`Params::insert`] for
    /// the string-keyed convention, or the dedicated setters.
    #[must_use]
    pub fn field(mut self, key: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        let key = key.into();
        let value = value.into();
        if let Some(slot) = self.fields.iter_mut().find(|(existing, _)| *existing == key) {
            slot.1 = value;
        } else {
            self.fields.push((key, value));
        }
        self
    }

    /// Adds a query-string hint.
    #[must_use]
    pub fn filter(mut self, key: impl Into<String>, value: impl std::fmt::Display) -> Self {
        let key = key.into();
        let value = value.to_string();
        if let Some(slot) = self.filters.iter_mut().find(|(existing, _)| *existing == key) {
            slot.1 = value;
        } else {
            self.filters.push((key, value));
        }
        self
    }

    /// Inserts a parameter using the upstream string-keyed convention.
    ///
    /// - `"method"` parses the verb shorthand (case-insensitive);
    /// - `"ID"` and `"unique"` set the record identifiers;
    /// - a leading underscore routes the value to the query hints, with the
    ///   underscore stripped (`"_contactslist_id"` stores hint `contactslist_id`);
    /// - anything else becomes a body field.
    ///
    /// # Errors
    ///
    /// Returns [`RequestError::InvalidMethod`] for an unknown verb string and
    /// [`RequestError::UnsupportedListValue`] when a list is supplied for a
    /// scalar-only key.
    pub fn insert(&mut self, key: &str, value: impl Into<ParamValue>) -> Result<(), RequestError> {
        let value = value.into();

        let scalar = |value: ParamValue| match value {
            ParamValue::Text(text) => Ok(text),
            ParamValue::Many(_) => Err(RequestError::UnsupportedListValue {
                key: key.to_string(),
            }),
        };

        match key {
            "method" => self.method = Some(scalar(value)?.parse()?),
            "ID" => self.id = Some(scalar(value)?),
            "unique" => self.unique = Some(scalar(value)?),
            _ => {
                if let Some(hint) = key.strip_prefix('_') {
                    let hint = hint.to_string();
                    let value = scalar(value)?;
                    if let Some(slot) = self
                        .filters
                        .iter_mut()
                        .find(|(existing, _)| *existing == hint)
                    {
                        slot.1 = value;
                    } else {
                        self.filters.push((hint, value));
                    }
                } else if let Some(slot) =
                    self.fields.iter_mut().find(|(existing, _)| *existing == key)
                {
                    slot.1 = value;
                } else {
                    self.fields.push((key.to_string(), value));
                }
            }
        }

        Ok(())
    }

    /// Returns the body fields in insertion order.
    #[must_use]
    pub fn fields(&self) -> &[(String, ParamValue)] {
        &self.fields
    }

    /// Returns the query hints in insertion order.
    #[must_use]
    pub fn filters(&self) -> &[(String, String)] {
        &self.filters
    }

    /// Verb for the call, defaulting to GET.
    pub(crate) fn verb(&self) -> Verb {
        self.method.unwrap_or(Verb::Get)
    }

    /// The `ID` value, when set.
    pub(crate) fn raw_id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// The record identifier: `ID` when set, else `unique`.
    pub(crate) fn identifier(&self) -> Option<&str> {
        self.id.as_deref().or(self.unique.as_deref())
    }

    pub(crate) fn field_value(&self, key: &str) -> Option<&ParamValue> {
        self.fields
            .iter()
            .find(|(existing, _)| existing == key)
            .map(|(_, value)| value)
    }

    pub(crate) fn field_text(&self, key: &str) -> Option<&str> {
        self.field_value(key).and_then(ParamValue::as_text)
    }

    pub(crate) fn filter_value(&self, key: &str) -> Option<&str> {
        self.filters
            .iter()
            .find(|(existing, _)| existing == key)
            .map(|(_, value)| value.as_str())
    }

    /// Whether any body field holds a list value.
    pub(crate) fn has_list_values(&self) -> bool {
        self.fields
            .iter()
            .any(|(_, value)| matches!(value, ParamValue::Many(_)))
    }
}
