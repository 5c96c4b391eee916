//! Resource identifiers and their routing rules.
//!
//! Every Mailjet call names a resource. Most resources resolve to the generic
//! REST endpoint (`/REST/<name>`), but a fixed set of names carries special
//! routing: the send-message endpoint, the per-list CSV data endpoint, and
//! the newsletter/contact/contactslist action endpoints whose URLs embed an
//! ID and an action suffix.
//!
//! [`Resource`] enumerates the special names so their rules are checked at
//! compile time, while [`Resource::Generic`] keeps the API open-ended: any
//! other string falls through to the generic REST rule.
//!
//! # Example
//!
//! ```rust
//! use mailjet_api::Resource;
//!
//! let resource = Resource::from("newsletterSchedule");
//! assert_eq!(resource, Resource::NewsletterSchedule);
//! assert_eq!(resource.name(), "newsletterSchedule");
//!
//! let resource = Resource::from("listrecipient");
//! assert_eq!(resource, Resource::Generic("listrecipient".to_string()));
//! ```

use std::fmt;

/// A logical API resource, resolved to a concrete URL shape by the request
/// builder.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Resource {
    /// `sendEmail`: transactional send through the send-message endpoint.
    SendEmail,
    /// `uploadCSVContactslistData`: raw CSV upload to a contact list.
    UploadCsvContactslistData,
    /// `newsletterDetailContent`: read or write a newsletter's content.
    NewsletterDetailContent,
    /// `newsletterSend`: send a newsletter immediately.
    NewsletterSend,
    /// `newsletterSchedule`: schedule a newsletter send.
    NewsletterSchedule,
    /// `newsletterTest`: send a newsletter test mail.
    NewsletterTest,
    /// `newsletterStatus`: read a newsletter's send status.
    NewsletterStatus,
    /// `contactManageContactsLists`: subscribe a contact to lists.
    ContactManageContactsLists,
    /// `contactGetContactsLists`: read the lists a contact belongs to.
    ContactGetContactsLists,
    /// `contactManageManyContacts`: bulk contact upload job.
    ContactManageManyContacts,
    /// `contactslistManageContact`: manage one contact on a list.
    ContactslistManageContact,
    /// `contactslistManageManyContacts`: bulk job scoped to a list.
    ContactslistManageManyContacts,
    /// Any other resource name, routed to the generic `/REST/<name>` endpoint.
    Generic(String),
}

impl Resource {
    /// Returns the wire name of the resource, as it appears in URLs and
    /// call traces.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::SendEmail => "sendEmail",
            Self::UploadCsvContactslistData => "uploadCSVContactslistData",
            Self::NewsletterDetailContent => "newsletterDetailContent",
            Self::NewsletterSend => "newsletterSend",
            Self::NewsletterSchedule => "newsletterSchedule",
            Self::NewsletterTest => "newsletterTest",
            Self::NewsletterStatus => "newsletterStatus",
            Self::ContactManageContactsLists => "contactManageContactsLists",
            Self::ContactGetContactsLists => "contactGetContactsLists",
            Self::ContactManageManyContacts => "contactManageManyContacts",
            Self::ContactslistManageContact => "contactslistManageContact",
            Self::ContactslistManageManyContacts => "contactslistManageManyContacts",
            Self::Generic(name) => name,
        }
    }

    /// Returns the `(family, action)` pair for resources routed through the
    /// `/REST/<family>/<ID>/<action>` pattern.
    ///
    /// The action is the wire name with the family prefix removed and the
    /// remainder lower-cased (`newsletterSchedule` becomes `schedule`).
    #[must_use]
    pub const fn family_action(&self) -> Option<(&'static str, &'static str)> {
        match self {
            Self::NewsletterDetailContent => Some(("newsletter", "detailcontent")),
            Self::NewsletterSend => Some(("newsletter", "send")),
            Self::NewsletterSchedule => Some(("newsletter", "schedule")),
            Self::NewsletterTest => Some(("newsletter", "test")),
            Self::NewsletterStatus => Some(("newsletter", "status")),
            Self::ContactManageContactsLists => Some(("contact", "managecontactslists")),
            Self::ContactGetContactsLists => Some(("contact", "getcontactslists")),
            Self::ContactslistManageContact => Some(("contactslist", "managecontact")),
            Self::ContactslistManageManyContacts => Some(("contactslist", "managemanycontacts")),
            _ => None,
        }
    }

    /// Returns whether the `ID` parameter is dropped from POST/PUT bodies.
    ///
    /// True for the action-routed management resources plus
    /// `contactManageManyContacts`: their URLs already address the record, so
    /// repeating the ID in the payload would be rejected upstream.
    /// `contactGetContactsLists` is read-only and not part of the set.
    #[must_use]
    pub const fn strips_id_from_body(&self) -> bool {
        matches!(
            self,
            Self::NewsletterDetailContent
                | Self::NewsletterSend
                | Self::NewsletterSchedule
                | Self::NewsletterTest
                | Self::NewsletterStatus
                | Self::ContactManageContactsLists
                | Self::ContactManageManyContacts
                | Self::ContactslistManageContact
                | Self::ContactslistManageManyContacts
        )
    }
}

impl From<&str> for Resource {
    fn from(name: &str) -> Self {
        match name {
            "sendEmail" => Self::SendEmail,
            "uploadCSVContactslistData" => Self::UploadCsvContactslistData,
            "newsletterDetailContent" => Self::NewsletterDetailContent,
            "newsletterSend" => Self::NewsletterSend,
            "newsletterSchedule" => Self::NewsletterSchedule,
            "newsletterTest" => Self::NewsletterTest,
            "newsletterStatus" => Self::NewsletterStatus,
            "contactManageContactsLists" => Self::ContactManageContactsLists,
            "contactGetContactsLists" => Self::ContactGetContactsLists,
            "contactManageManyContacts" => Self::ContactManageManyContacts,
            "contactslistManageContact" => Self::ContactslistManageContact,
            "contactslistManageManyContacts" => Self::ContactslistManageManyContacts,
            other => Self::Generic(other.to_string()),
        }
    }
}

impl From<String> for Resource {
    fn from(name: String) -> Self {
        match Self::from(name.as_str()) {
            Self::Generic(_) => Self::Generic(name),
            known => known,
        }
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
