//! Upload transfer reporting and interpretation of its final answer.

use common::replies::UploadReply;
use log::{debug, warn};
use serde::Deserialize;

/// Byte counts reported while an upload is in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransferProgress {
    pub bytes_sent: u64,
    /// `None` while the platform cannot compute the request length.
    pub bytes_total: Option<u64>,
}

impl TransferProgress {
    pub fn new(bytes_sent: u64, bytes_total: Option<u64>) -> Self {
        Self {
            bytes_sent,
            bytes_total,
        }
    }

    /// `round(100 * sent / total)`, or `None` when the total is unknown.
    pub fn percent(&self) -> Option<u8> {
        let total = self.bytes_total.filter(|total| *total > 0)?;
        let sent = self.bytes_sent.min(total);
        let percent = (sent as f64 * 100.0 / total as f64).round();
        Some(percent as u8)
    }
}

/// Final state of one transfer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransferOutcome {
    Ok { payload: String },
    Failed { status_code: u16, raw_body: String },
}

/// What the page does once an upload has finished.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadVerdict {
    /// The store accepted the files; fetch the list again.
    Refresh,
    /// The store explained the rejection.
    Alert(String),
    /// Nothing usable came back.
    GenericAlert,
}

#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

pub fn interpret_upload(outcome: &TransferOutcome) -> UploadVerdict {
    match outcome {
        TransferOutcome::Ok { payload } => match serde_json::from_str::<UploadReply>(payload) {
            Ok(reply) if reply.is_success() => {
                debug!("upload accepted");
                UploadVerdict::Refresh
            }
            Ok(UploadReply {
                error: Some(error), ..
            }) => UploadVerdict::Alert(error),
            Ok(reply) => {
                warn!("upload reply without success or error: {reply:?}");
                UploadVerdict::GenericAlert
            }
            Err(err) => {
                warn!("unreadable upload reply: {err}");
                UploadVerdict::GenericAlert
            }
        },
        TransferOutcome::Failed {
            status_code,
            raw_body,
        } => match serde_json::from_str::<ErrorBody>(raw_body) {
            Ok(body) => UploadVerdict::Alert(body.error),
            Err(_) => {
                warn!("upload failed with status {status_code} and no readable error");
                UploadVerdict::GenericAlert
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percent_is_rounded() {
        assert_eq!(TransferProgress::new(1, Some(3)).percent(), Some(33));
        assert_eq!(TransferProgress::new(2, Some(3)).percent(), Some(67));
        assert_eq!(TransferProgress::new(10, Some(10)).percent(), Some(100));
    }

    #[test]
    fn unknown_total_reports_nothing() {
        assert_eq!(TransferProgress::new(500, None).percent(), None);
        assert_eq!(TransferProgress::new(0, Some(0)).percent(), None);
    }

    #[test]
    fn success_payload_refreshes() {
        let outcome = TransferOutcome::Ok {
            payload: r#"{"status":"success"}"#.into(),
        };
        assert_eq!(interpret_upload(&outcome), UploadVerdict::Refresh);
    }

    #[test]
    fn rejected_payload_alerts_with_reason() {
        let outcome = TransferOutcome::Ok {
            payload: r#"{"status":"error","error":"Invalid file type"}"#.into(),
        };
        assert_eq!(
            interpret_upload(&outcome),
            UploadVerdict::Alert("Invalid file type".into())
        );
    }

    #[test]
    fn non_json_error_body_is_tolerated() {
        let outcome = TransferOutcome::Failed {
            status_code: 502,
            raw_body: "<html>Bad Gateway</html>".into(),
        };
        assert_eq!(interpret_upload(&outcome), UploadVerdict::GenericAlert);

        let outcome = TransferOutcome::Failed {
            status_code: 400,
            raw_body: r#"{"error":"No file or folder selected"}"#.into(),
        };
        assert_eq!(
            interpret_upload(&outcome),
            UploadVerdict::Alert("No file or folder selected".into())
        );
    }
}
