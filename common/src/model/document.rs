use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque, server-assigned identifier of an uploaded document.
///
/// The store hands these out on upload and never changes them, so they are
/// safe to use as keys for list rendering and reorder commits.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DocumentId(String);

impl DocumentId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for DocumentId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// Processing status the store assigned to a document after upload.
///
/// Any status other than `success` (including a transient `pending`) is
/// treated as an error: such documents are listed but cannot be previewed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentStatus {
    Success,
    #[serde(other)]
    Error,
}

impl DocumentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentStatus::Success => "success",
            DocumentStatus::Error => "error",
        }
    }
}

/// One entry of the document list as returned by `GET /documents`.
///
/// Records are replaced wholesale on every list refresh; the client never
/// patches individual fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentRecord {
    pub id: DocumentId,
    pub original_filename: String,
    pub status: DocumentStatus,
    #[serde(default)]
    pub page_count: u32,
}

impl DocumentRecord {
    pub fn is_previewable(&self) -> bool {
        self.status == DocumentStatus::Success
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_store_record_and_ignores_extra_fields() {
        let raw = r#"{
            "id": "a1",
            "filename": "a.pdf",
            "original_filename": "A.pdf",
            "file_type": "pdf",
            "page_count": 4,
            "status": "success",
            "errors": []
        }"#;
        let record: DocumentRecord = serde_json::from_str(raw).unwrap();
        assert_eq!(record.id, DocumentId::new("a1"));
        assert_eq!(record.page_count, 4);
        assert!(record.is_previewable());
    }

    #[test]
    fn unknown_status_is_not_previewable() {
        let raw = r#"{"id":"b","original_filename":"b.pdf","status":"pending"}"#;
        let record: DocumentRecord = serde_json::from_str(raw).unwrap();
        assert_eq!(record.status, DocumentStatus::Error);
        assert_eq!(record.page_count, 0);
        assert!(!record.is_previewable());
    }
}
