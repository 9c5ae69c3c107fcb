//! Display strings for the two supported languages.
//!
//! Lookups are by [`TextKey`]; both tables are exhaustive matches so a key
//! can never be missing from one language.

mod translations;

use serde::{Deserialize, Serialize};

/// A display language the client can be switched to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Fr,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::En, Language::Fr];

    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Fr => "fr",
        }
    }

    /// Name of the language in itself, for the selector.
    pub fn native_name(&self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Fr => "Français",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_ascii_lowercase().as_str() {
            "en" => Some(Language::En),
            "fr" => Some(Language::Fr),
            _ => None,
        }
    }

    pub fn text(&self, key: TextKey) -> &'static str {
        match self {
            Language::En => translations::english(key),
            Language::Fr => translations::french(key),
        }
    }
}

/// Symbolic key of every string the client displays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextKey {
    AppTitle,
    UploadTitle,
    UploadInstructions,
    ChooseFiles,
    UploadFolderOption,
    DocumentList,
    ClearAll,
    GenerateBook,
    DragHint,
    NoDocuments,
    ViewLogs,
    RefreshLogs,
    Uploading,
    Generating,
    DownloadComplete,
    BookDownloaded,
    Error,
    Close,
    PreviewNotAvailable,
    DocumentStatusSuccess,
    DocumentStatusError,
    DocumentPages,
    Language,
    InitializingGeneration,
    ProcessingContent,
    CreatingIndex,
    MergingDocuments,
    Finalizing,
    DownloadProgress,
    ShowDetails,
    HideDetails,
    UnknownError,
    ConfirmClear,
    UploadFailed,
    ServerUnreachable,
    Delete,
}
