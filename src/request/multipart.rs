//! Hand-built multipart/form-data encoding for the send-message endpoint.
//!
//! The upstream API accepts attachments and recipient lists only as
//! multipart form fields, so list-valued parameters route the whole body
//! through this encoder. Parts are kept structural in the descriptor; the
//! boundary is generated per send and passed to [`encode`].

use std::path::Path;

use rand::distributions::Alphanumeric;
use rand::Rng;

use crate::params::{ParamValue, Params};
use crate::request::RequestError;

/// Number of random characters appended to the boundary's dash prefix.
const BOUNDARY_SUFFIX_LEN: usize = 12;

/// Dash prefix shared by every generated boundary.
const BOUNDARY_PREFIX: &str = "----------------------------";

/// Recipient fields whose list entries are joined into one comma-separated
/// form field.
const RECIPIENT_FIELDS: [&str; 3] = ["to", "cc", "bcc"];

/// One multipart form part.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Part {
    /// A plain form field.
    Text {
        /// Form field name.
        name: String,
        /// Field value.
        value: String,
    },
    /// An embedded file, sent as `application/octet-stream`.
    File {
        /// Form field name the file was attached under.
        name: String,
        /// File name reported in the part header.
        filename: String,
        /// File contents.
        content: Vec<u8>,
    },
}

/// Builds the part list for a send-message call.
///
/// Scalar fields become plain parts in insertion order. List values under
/// `to`/`cc`/`bcc` are trimmed and comma-joined into a single part. Any
/// other list entry with a leading `@` is read from disk as an attachment;
/// entries without the marker carry no usable content and are skipped with
/// a warning.
pub(crate) fn parts_from(params: &Params) -> Result<Vec<Part>, RequestError> {
    let mut parts = Vec::new();

    if let Some(id) = params.raw_id() {
        parts.push(Part::Text {
            name: "ID".to_string(),
            value: id.to_string(),
        });
    }

    for (key, value) in params.fields() {
        match value {
            ParamValue::Text(text) => parts.push(Part::Text {
                name: key.clone(),
                value: text.clone(),
            }),
            ParamValue::Many(items) if RECIPIENT_FIELDS.contains(&key.as_str()) => {
                let joined = items
                    .iter()
                    .map(|item| item.trim())
                    .collect::<Vec<_>>()
                    .join(",");
                parts.push(Part::Text {
                    name: key.clone(),
                    value: joined,
                });
            }
            ParamValue::Many(items) => {
                for item in items {
                    if let Some(path) = item.strip_prefix('@') {
                        parts.push(read_attachment(key, path)?);
                    } else {
                        tracing::warn!(
                            "Ignoring list entry without '@' marker for parameter '{key}'"
                        );
                    }
                }
            }
        }
    }

    Ok(parts)
}

/// Reads one `@`-marked attachment from disk.
///
/// The reported filename is the path's final component, falling back to the
/// whole path when there is none.
fn read_attachment(name: &str, path: &str) -> Result<Part, RequestError> {
    let content = std::fs::read(path).map_err(|source| RequestError::AttachmentRead {
        path: path.to_string(),
        source,
    })?;

    let filename = Path::new(path)
        .file_name()
        .map_or_else(|| path.to_string(), |name| name.to_string_lossy().into_owned());

    Ok(Part::File {
        name: name.to_string(),
        filename,
        content,
    })
}

/// Generates a fresh multipart boundary: the dash prefix plus 12 random
/// alphanumeric characters.
pub(crate) fn random_boundary() -> String {
    let suffix: String = rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(BOUNDARY_SUFFIX_LEN)
        .map(char::from)
        .collect();

    format!("{BOUNDARY_PREFIX}{suffix}")
}

/// Encodes the parts into a multipart/form-data body under the given
/// boundary. Byte-identical for identical inputs.
pub(crate) fn encode(parts: &[Part], boundary: &str) -> Vec<u8> {
    let mut body = Vec::new();

    for part in parts {
        body.extend_from_slice(format!("--{boundary}\r\n").as_bytes());
        match part {
            Part::Text { name, value } => {
                body.extend_from_slice(
                    format!("Content-Disposition: form-data; name=\"{name}\"\r\n\r\n").as_bytes(),
                );
                body.extend_from_slice(value.as_bytes());
            }
            Part::File {
                name,
                filename,
                content,
            } => {
                body.extend_from_slice(
                    format!(
                        "Content-Disposition: form-data; name=\"{name}\"; filename=\"{filename}\"\r\n"
                    )
                    .as_bytes(),
                );
                body.extend_from_slice(b"Content-Type: application/octet-stream\r\n\r\n");
                body.extend_from_slice(content);
            }
        }
        body.extend_from_slice(b"\r\n");
    }

    body.extend_from_slice(format!("--{boundary}--\r\n").as_bytes());
    body
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_attachment(name: &str, contents: &[u8]) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(format!("mailjet_api_{}_{name}", std::process::id()));
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_boundary_shape() {
        let boundary = random_boundary();
        assert!(boundary.starts_with(BOUNDARY_PREFIX));
        assert_eq!(boundary.len(), BOUNDARY_PREFIX.len() + BOUNDARY_SUFFIX_LEN);
        assert!(boundary[BOUNDARY_PREFIX.len()..]
            .chars()
            .all(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn test_boundaries_differ_between_calls() {
        assert_ne!(random_boundary(), random_boundary());
    }

    #[test]
    fn test_scalar_fields_become_text_parts_in_order() {
        let params = Params::new()
            .field("from", "sender@example.com")
            .field("subject", "Greetings")
            .field("to", vec!["a@example.com", " b@example.com "]);

        let parts = parts_from(&params).unwrap();
        assert_eq!(
            parts,
            vec![
                Part::Text {
                    name: "from".to_string(),
                    value: "sender@example.com".to_string()
                },
                Part::Text {
                    name: "subject".to_string(),
                    value: "Greetings".to_string()
                },
                Part::Text {
                    name: "to".to_string(),
                    value: "a@example.com,b@example.com".to_string()
                },
            ]
        );
    }

    #[test]
    fn test_attachment_entries_are_read_from_disk() {
        let path = temp_attachment("attach.txt", b"file payload");
        let params = Params::new().field(
            "attachment",
            vec![format!("@{}", path.display())],
        );

        let parts = parts_from(&params).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(parts.len(), 1);
        let Part::File {
            name,
            filename,
            content,
        } = &parts[0]
        else {
            panic!("expected a file part");
        };
        assert_eq!(name, "attachment");
        assert!(filename.starts_with("mailjet_api_"));
        assert!(filename.ends_with("attach.txt"));
        assert_eq!(content, b"file payload");
    }

    #[test]
    fn test_missing_attachment_file_is_an_error() {
        let params = Params::new().field("attachment", vec!["@/nonexistent/mailjet/file.txt"]);
        let error = parts_from(&params).unwrap_err();
        assert!(matches!(
            error,
            RequestError::AttachmentRead { path, .. } if path == "/nonexistent/mailjet/file.txt"
        ));
    }

    #[test]
    fn test_unmarked_list_entries_are_skipped() {
        let params = Params::new().field("tags", vec!["not-a-file", "also-not"]);
        let parts = parts_from(&params).unwrap();
        assert!(parts.is_empty());
    }

    #[test]
    fn test_encoding_layout_with_fixed_boundary() {
        let parts = vec![
            Part::Text {
                name: "from".to_string(),
                value: "sender@example.com".to_string(),
            },
            Part::File {
                name: "attachment".to_string(),
                filename: "notes.txt".to_string(),
                content: b"hello".to_vec(),
            },
        ];

        let body = encode(&parts, "XBOUNDARYX");
        let text = String::from_utf8(body).unwrap();

        let expected = "--XBOUNDARYX\r\n\
             Content-Disposition: form-data; name=\"from\"\r\n\
             \r\n\
             sender@example.com\r\n\
             --XBOUNDARYX\r\n\
             Content-Disposition: form-data; name=\"attachment\"; filename=\"notes.txt\"\r\n\
             Content-Type: application/octet-stream\r\n\
             \r\n\
             hello\r\n\
             --XBOUNDARYX--\r\n";
        assert_eq!(text, expected);
    }

    #[test]
    fn test_encoding_is_deterministic_under_one_boundary() {
        let parts = vec![Part::Text {
            name: "subject".to_string(),
            value: "Greetings".to_string(),
        }];

        assert_eq!(encode(&parts, "B"), encode(&parts, "B"));
    }
}
