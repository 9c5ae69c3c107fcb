use serde::{Deserialize, Serialize};

use crate::model::document::DocumentId;

/// Header attached to every programmatic call so the store can tell them
/// apart from full-page navigations.
pub const REQUESTED_WITH_HEADER: &str = "X-Requested-With";
pub const REQUESTED_WITH_VALUE: &str = "XMLHttpRequest";

/// Multipart field carrying individually picked or dropped files.
pub const FILE_FIELD: &str = "file";
/// Multipart field carrying the files of a picked folder.
pub const FOLDER_FIELD: &str = "folder";

/// Body of `POST /documents/reorder`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReorderRequest {
    pub order: Vec<DocumentId>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reorder_body_is_a_flat_id_array() {
        let body = ReorderRequest {
            order: vec![DocumentId::new("id2"), DocumentId::new("id1")],
        };
        assert_eq!(
            serde_json::to_string(&body).unwrap(),
            r#"{"order":["id2","id1"]}"#
        );
    }
}
