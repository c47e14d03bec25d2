//! Wire types for the gist API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

fn is_false(value: &bool) -> bool {
    !*value
}

// The server sends `"description": null` rather than omitting the field.
fn null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// A gist: a small server-hosted text snippet with metadata.
///
/// All fields are omittable on the wire. Locally constructed gists carry an
/// empty `id` and `html_url` until the server's response replaces them.
///
/// Files are kept in a `BTreeMap` so iteration order is the lexicographic
/// filename order; the edit workflow relies on this to pick a deterministic
/// file when a gist has several.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Gist {
    /// Server-assigned identifier; empty until created.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,
    /// Description; may be empty.
    #[serde(
        default,
        deserialize_with = "null_default",
        skip_serializing_if = "String::is_empty"
    )]
    pub description: String,
    /// Whether the gist is public.
    #[serde(default, skip_serializing_if = "is_false")]
    pub public: bool,
    /// Files keyed by filename.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub files: BTreeMap<String, GistFile>,
    /// Server-assigned browser URL; empty until created.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub html_url: String,
    /// Server-assigned last-updated timestamp.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// A single file inside a gist.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GistFile {
    /// UTF-8 text content.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub content: String,
}

impl GistFile {
    /// Creates a gist file from content.
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }
}

impl Gist {
    /// Creates a local gist with a single file, ready to be sent to the
    /// server. `id` and `html_url` stay empty until creation.
    pub fn new(
        description: impl Into<String>,
        public: bool,
        filename: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        let mut files = BTreeMap::new();
        files.insert(filename.into(), GistFile::new(content));
        Self {
            description: description.into(),
            public,
            files,
            ..Default::default()
        }
    }

    /// Returns true once the server has assigned an identifier.
    pub fn is_persisted(&self) -> bool {
        !self.id.is_empty()
    }

    /// Returns the lexicographically first file, if any.
    pub fn first_file(&self) -> Option<(&str, &GistFile)> {
        self.files.iter().next().map(|(name, file)| (name.as_str(), file))
    }

    /// Returns the filenames in lexicographic order.
    pub fn filenames(&self) -> impl Iterator<Item = &str> {
        self.files.keys().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_new_gist_is_not_persisted() {
        let gist = Gist::new("desc", true, "file1.txt", "hello");
        assert!(!gist.is_persisted());
        assert!(gist.html_url.is_empty());
        assert!(gist.updated_at.is_none());
        assert_eq!(gist.files["file1.txt"].content, "hello");
    }

    #[test]
    fn test_first_file_is_lexicographic() {
        let mut gist = Gist::new("", false, "zebra.txt", "z");
        gist.files.insert("alpha.txt".into(), GistFile::new("a"));

        let (name, file) = gist.first_file().unwrap();
        assert_eq!(name, "alpha.txt");
        assert_eq!(file.content, "a");
    }

    #[test]
    fn test_wire_round_trip() {
        let gist = Gist::new("my notes", true, "file1.txt", "hello");

        let json = serde_json::to_string(&gist).unwrap();
        let decoded: Gist = serde_json::from_str(&json).unwrap();

        assert_eq!(gist, decoded);
    }

    #[test]
    fn test_empty_fields_omitted_on_the_wire() {
        let gist = Gist::new("", false, "file1.txt", "hello");

        let json = serde_json::to_value(&gist).unwrap();
        let object = json.as_object().unwrap();
        assert!(!object.contains_key("id"));
        assert!(!object.contains_key("description"));
        assert!(!object.contains_key("public"));
        assert!(!object.contains_key("html_url"));
        assert!(!object.contains_key("updated_at"));
        assert_eq!(json["files"]["file1.txt"]["content"], "hello");
    }

    #[test]
    fn test_decode_server_response() {
        let body = r#"{
            "id": "abc123",
            "description": "my notes",
            "public": true,
            "files": {"file1.txt": {"content": "hello"}},
            "html_url": "https://gist.github.com/abc123",
            "updated_at": "2024-05-01T12:00:00Z"
        }"#;

        let gist: Gist = serde_json::from_str(body).unwrap();
        assert_eq!(gist.id, "abc123");
        assert!(gist.is_persisted());
        assert_eq!(gist.files["file1.txt"].content, "hello");
        assert!(gist.updated_at.is_some());
    }

    #[test]
    fn test_decode_null_description() {
        let body = r#"{"id": "abc123", "description": null}"#;
        let gist: Gist = serde_json::from_str(body).unwrap();
        assert_eq!(gist.description, "");
    }

    #[test]
    fn test_decode_empty_object() {
        // What some servers answer for an unknown id.
        let gist: Gist = serde_json::from_str("{}").unwrap();
        assert!(!gist.is_persisted());
        assert!(gist.files.is_empty());
    }
}
