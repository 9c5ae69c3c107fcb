use common::model::document::DocumentId;
use common::requests::ReorderRequest;

use crate::progress::OperationKind;

/// Side effects requested by [`crate::update`], executed by the browser shell
/// in the order they are returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// `GET` the document list; answer with `DocumentsLoaded` / `DocumentsLoadFailed`.
    FetchDocuments { url: String },
    /// Send the files the shell is holding for the pending upload.
    SendUpload { url: String },
    /// Reset the file and folder pickers after an upload finished.
    ResetUploadInputs,
    DeleteDocument { id: DocumentId, url: String },
    /// Ask the user to confirm clearing; answer with `ClearConfirmed`.
    ConfirmClear { prompt: String },
    ClearDocuments { url: String },
    /// Fire-and-forget reorder commit.
    CommitOrder { url: String, body: ReorderRequest },
    StartTicker { operation: OperationKind, interval_ms: u32 },
    StopTicker { operation: OperationKind },
    ScheduleAutoDismiss {
        operation: OperationKind,
        run: u64,
        delay_ms: u32,
    },
    SendGenerate { url: String },
    SaveBlob { filename: String, bytes: Vec<u8> },
    OpenPreview { url: String },
    ShowAlert(String),
    PersistLanguage { key: String, code: &'static str },
    FetchLogs { url: String },
}
