//! Common types for the client SDK

use serde::{Deserialize, Serialize};

/// An object's fields, as the server sends and receives them.
///
/// Parse classes are schema-free from the client's point of view: both
/// request and response bodies are open JSON objects whose field semantics
/// are defined by the caller and the server. Server-assigned fields
/// (`objectId`, `createdAt`, `updatedAt`) appear here alongside user data.
pub type Object = serde_json::Map<String, serde_json::Value>;

/// A reference to an uploaded file, for embedding in an object's fields.
///
/// Serializes to `{"name": ..., "url": ..., "__type": "File"}`, the shape
/// Parse Server expects for file pointers.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileRef {
    /// Server-assigned file name
    pub name: String,
    /// Access URL
    pub url: String,
    /// Always the literal `"File"`
    #[serde(rename = "__type")]
    pub type_tag: String,
}

impl FileRef {
    /// Create a reference to a previously uploaded file
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
            type_tag: "File".to_string(),
        }
    }
}

/// Options for uploading a file
#[derive(Clone, Debug, Default)]
pub struct UploadOptions {
    /// MIME type; sniffed from the content when absent
    pub content_type: Option<String>,
    /// File name; generated from a UUID and the MIME subtype when absent
    pub file_name: Option<String>,
}

impl UploadOptions {
    /// Create new empty options
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the MIME type
    pub fn with_content_type(mut self, ct: impl Into<String>) -> Self {
        self.content_type = Some(ct.into());
        self
    }

    /// Set the file name
    pub fn with_file_name(mut self, name: impl Into<String>) -> Self {
        self.file_name = Some(name.into());
        self
    }
}
