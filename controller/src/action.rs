use common::model::document::{DocumentId, DocumentRecord};
use common::replies::StatusReply;

use crate::generation::GenerateReply;
use crate::i18n::Language;
use crate::progress::OperationKind;
use crate::transfer::{TransferOutcome, TransferProgress};

/// Everything that can happen to the workspace: user gestures, network
/// completions and timer firings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    PageLoaded,
    DocumentsLoaded(Vec<DocumentRecord>),
    DocumentsLoadFailed(String),

    // Upload
    UploadRequested { file_count: usize },
    UploadProgressed(TransferProgress),
    UploadFinished(TransferOutcome),
    DropZoneHighlighted(bool),

    // List mutations
    DeleteRequested(DocumentId),
    DeleteCompleted {
        id: DocumentId,
        result: Result<StatusReply, String>,
    },
    ClearRequested,
    ClearConfirmed(bool),
    ClearCompleted(Result<StatusReply, String>),
    PreviewRequested(DocumentId),

    // Drag reorder
    DragStarted(DocumentId),
    DragEntered(DocumentId),
    DragOver(DocumentId),
    DragLeft(DocumentId),
    Dropped(DocumentId),
    DragEnded,
    OrderCommitted(Result<(), String>),

    // Generation
    GenerateRequested,
    GenerationResponded(GenerateReply),
    GenerationBodyReceived(Vec<u8>),
    GenerationTransportFailed(String),

    // Progress overlays
    ProgressTicked(OperationKind),
    ProgressDismissed(OperationKind),
    AutoDismissElapsed { operation: OperationKind, run: u64 },
    DetailsToggled(OperationKind),

    LanguageChanged(Language),
    LogsToggled,
    LogsRefreshRequested,
    LogsLoaded(Result<String, String>),
}
