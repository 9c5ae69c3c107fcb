//! Render-ready projection of [`WorkspaceState`], with every string localized.

use common::model::document::{DocumentId, DocumentStatus};

use crate::drag::ItemMarkers;
use crate::i18n::{Language, TextKey};
use crate::progress::{OperationKind, ProgressLabel, ProgressPresenter};
use crate::state::WorkspaceState;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentRow {
    pub id: DocumentId,
    pub filename: String,
    pub status: DocumentStatus,
    pub status_label: &'static str,
    pub pages_label: String,
    pub previewable: bool,
    pub markers: ItemMarkers,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListView {
    /// The list is empty; a single placeholder stands in for the items.
    Placeholder(&'static str),
    Items(Vec<DocumentRow>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BarTone {
    Normal,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailsView {
    pub expanded: bool,
    pub toggle_label: &'static str,
    pub lines: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProgressView {
    pub visible: bool,
    pub title: &'static str,
    /// Bar width in percent.
    pub percent: f64,
    pub tone: BarTone,
    pub headline: Option<&'static str>,
    pub body: String,
    pub details: Option<DetailsView>,
    /// Label of the single dismiss control, when one is shown.
    pub dismiss_label: Option<&'static str>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogsView {
    pub open: bool,
    pub loading: bool,
    pub text: Option<String>,
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WorkspaceView {
    pub language: Language,
    pub list: ListView,
    pub upload: ProgressView,
    pub generation: ProgressView,
    pub logs: LogsView,
    pub drop_zone_active: bool,
    pub generate_enabled: bool,
}

impl WorkspaceState {
    pub fn view(&self) -> WorkspaceView {
        WorkspaceView {
            language: self.language,
            list: self.list_view(),
            upload: progress_view(self.presenter(OperationKind::Upload), self.language),
            generation: progress_view(self.presenter(OperationKind::Generation), self.language),
            logs: LogsView {
                open: self.logs.open,
                loading: self.logs.loading,
                text: self.logs.content.clone().and_then(Result::ok),
                error: self
                    .logs
                    .content
                    .as_ref()
                    .is_some_and(Result::is_err)
                    .then(|| self.language.text(TextKey::ServerUnreachable).to_owned()),
            },
            drop_zone_active: self.drop_zone_active,
            generate_enabled: !self.generation.is_busy(),
        }
    }

    fn list_view(&self) -> ListView {
        let language = self.language;
        if self.list.is_empty() {
            return ListView::Placeholder(language.text(TextKey::NoDocuments));
        }
        let pages = language.text(TextKey::DocumentPages);
        ListView::Items(
            self.list
                .records()
                .iter()
                .map(|record| DocumentRow {
                    id: record.id.clone(),
                    filename: record.original_filename.clone(),
                    status: record.status,
                    status_label: language.text(match record.status {
                        DocumentStatus::Success => TextKey::DocumentStatusSuccess,
                        DocumentStatus::Error => TextKey::DocumentStatusError,
                    }),
                    pages_label: format!("{} {pages}", record.page_count),
                    previewable: record.is_previewable(),
                    markers: self.drag.markers(&record.id),
                })
                .collect(),
        )
    }
}

fn progress_view(presenter: &ProgressPresenter, language: Language) -> ProgressView {
    let state = presenter.state();
    let title = language.text(match presenter.operation() {
        OperationKind::Upload => TextKey::Uploading,
        OperationKind::Generation => TextKey::Generating,
    });
    let (tone, headline, body, details) = match &state.label {
        ProgressLabel::Text(key) => (BarTone::Normal, None, language.text(*key).to_owned(), None),
        ProgressLabel::Percent(percent) => (BarTone::Normal, None, format!("{percent}%"), None),
        ProgressLabel::Succeeded => (
            BarTone::Normal,
            Some(language.text(TextKey::DownloadComplete)),
            language.text(TextKey::BookDownloaded).to_owned(),
            None,
        ),
        ProgressLabel::Failed { message, details } => (
            BarTone::Error,
            Some(language.text(TextKey::Error)),
            message.clone(),
            details.as_ref().map(|lines| DetailsView {
                expanded: presenter.details_expanded(),
                toggle_label: language.text(if presenter.details_expanded() {
                    TextKey::HideDetails
                } else {
                    TextKey::ShowDetails
                }),
                lines: lines.clone(),
            }),
        ),
    };
    ProgressView {
        visible: presenter.is_visible(),
        title,
        percent: state.displayed_percent,
        tone,
        headline,
        body,
        details,
        dismiss_label: presenter
            .is_dismissible()
            .then(|| language.text(TextKey::Close)),
    }
}
