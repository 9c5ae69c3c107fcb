use serde::Deserialize;

/// Generic `{status: ...}` acknowledgement returned by delete and clear.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StatusReply {
    pub status: String,
}

impl StatusReply {
    pub fn is_success(&self) -> bool {
        self.status == "success"
    }
}

/// Reply to an upload: `{status:"success"}` or `{status, error}`.
///
/// The store leaves `status` out entirely on some rejections, hence the default.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct UploadReply {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl UploadReply {
    pub fn is_success(&self) -> bool {
        self.status.as_deref() == Some("success")
    }
}

/// Structured error body of a failed `POST /generate`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GenerationErrorPayload {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub details: Option<ErrorDetails>,
}

/// Detail lines arrive either as an array or as one newline-separated string.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum ErrorDetails {
    Lines(Vec<String>),
    Text(String),
}

impl ErrorDetails {
    pub fn into_lines(self) -> Vec<String> {
        let lines = match self {
            ErrorDetails::Lines(lines) => lines,
            ErrorDetails::Text(text) => text.lines().map(str::to_owned).collect(),
        };
        lines
            .into_iter()
            .filter(|line| !line.trim().is_empty())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upload_rejection_without_status() {
        let reply: UploadReply =
            serde_json::from_str(r#"{"error":"No file or folder selected"}"#).unwrap();
        assert!(!reply.is_success());
        assert_eq!(reply.error.as_deref(), Some("No file or folder selected"));
    }

    #[test]
    fn replies_decode_with_fields_the_client_ignores() {
        let deleted: StatusReply =
            serde_json::from_str(r#"{"status":"success","message":"Document deleted"}"#).unwrap();
        assert!(deleted.is_success());

        let uploaded: UploadReply = serde_json::from_str(
            r#"{"status":"success","documents":[{"id":"a","original_filename":"a.pdf","status":"success"}]}"#,
        )
        .unwrap();
        assert!(uploaded.is_success());
        assert_eq!(uploaded.error, None);
    }

    #[test]
    fn error_details_accept_both_shapes() {
        let lines: GenerationErrorPayload =
            serde_json::from_str(r#"{"message":"m","details":["a","","b"]}"#).unwrap();
        assert_eq!(lines.details.unwrap().into_lines(), vec!["a", "b"]);

        let text: GenerationErrorPayload =
            serde_json::from_str(r#"{"message":"m","details":"a\nb"}"#).unwrap();
        assert_eq!(text.details.unwrap().into_lines(), vec!["a", "b"]);
    }
}
