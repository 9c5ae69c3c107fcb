//! Client-side synchronization engine for the document workspace.
//!
//! This crate holds every decision the browser client makes, free of any
//! browser API so it builds and tests natively:
//!
//! - [`ListModel`] mirrors the store's ordered document list.
//! - [`DragReorderController`] turns drag gestures into optimistic moves and
//!   reorder commits.
//! - [`ProgressPresenter`] drives the upload and generation progress overlays.
//! - [`GenerationOrchestrator`] sequences the generate-and-save flow.
//! - [`transfer`] interprets the outcome of an upload.
//!
//! The browser shell feeds [`Action`]s into [`update`] and executes the
//! [`Effect`]s it returns; completions come back as further actions.

mod action;
pub mod config;
mod drag;
mod effect;
mod generation;
pub mod i18n;
mod list_model;
pub mod progress;
mod state;
pub mod transfer;
mod update;
mod view_model;

pub use action::Action;
pub use config::{ConfigError, Endpoints, IncrementBand, LabelBand, UiConfig};
pub use drag::{DragReorderController, DragSession, DropOutcome, ItemMarkers};
pub use effect::Effect;
pub use generation::{
    filename_from_disposition, parse_generation_error, GenerateReply, GenerationFailure,
    GenerationOrchestrator,
};
pub use i18n::{Language, TextKey};
pub use list_model::ListModel;
pub use progress::{OperationKind, Phase, ProgressLabel, ProgressPresenter, ProgressState};
pub use state::{LogsPanel, WorkspaceState};
pub use transfer::{TransferOutcome, TransferProgress, UploadVerdict};
pub use update::update;
pub use view_model::{
    BarTone, DetailsView, DocumentRow, ListView, LogsView, ProgressView, WorkspaceView,
};
