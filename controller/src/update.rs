use log::{debug, info, warn};

use crate::action::Action;
use crate::drag::DropOutcome;
use crate::effect::Effect;
use crate::i18n::TextKey;
use crate::state::WorkspaceState;
use crate::transfer::{interpret_upload, UploadVerdict};
use common::requests::ReorderRequest;

/// Applies one action to the workspace and returns the effects to run.
///
/// Network failures never escape as errors: each one becomes a state change,
/// an alert or a log line.
pub fn update(state: &mut WorkspaceState, action: Action) -> Vec<Effect> {
    let mut effects = Vec::new();
    match action {
        Action::PageLoaded => {
            effects.push(fetch_documents(state));
        }
        Action::DocumentsLoaded(records) => {
            state.drag.reset();
            state.list.replace_all(records);
        }
        Action::DocumentsLoadFailed(reason) => {
            warn!("could not load documents: {reason}");
        }

        Action::UploadRequested { file_count } => {
            if file_count == 0 {
                debug!("upload requested without files");
            } else if state.upload.is_busy() {
                warn!("upload already in progress, ignoring {file_count} more files");
            } else {
                info!("uploading {file_count} files");
                effects.extend(state.upload.start_transfer());
                effects.push(Effect::SendUpload {
                    url: state.config.endpoints.upload.clone(),
                });
                state.mark_dirty();
            }
        }
        Action::UploadProgressed(progress) => {
            if let Some(percent) = progress.percent() {
                if state.upload.report_percent(percent) {
                    state.mark_dirty();
                }
            }
        }
        Action::UploadFinished(outcome) => {
            effects.extend(state.upload.finish_transfer());
            effects.push(Effect::ResetUploadInputs);
            match interpret_upload(&outcome) {
                UploadVerdict::Refresh => effects.push(fetch_documents(state)),
                UploadVerdict::Alert(reason) => effects.push(Effect::ShowAlert(format!(
                    "{}: {reason}",
                    state.language.text(TextKey::Error).trim_end_matches('!')
                ))),
                UploadVerdict::GenericAlert => effects.push(Effect::ShowAlert(
                    state.language.text(TextKey::UploadFailed).to_owned(),
                )),
            }
            state.mark_dirty();
        }
        Action::DropZoneHighlighted(active) => {
            if state.drop_zone_active != active {
                state.drop_zone_active = active;
                state.mark_dirty();
            }
        }

        Action::DeleteRequested(id) => {
            if state.list.get(&id).is_some() {
                effects.push(Effect::DeleteDocument {
                    url: state.config.endpoints.delete_url(&id),
                    id,
                });
            } else {
                debug!("delete of unlisted document {id} ignored");
            }
        }
        Action::DeleteCompleted { id, result } => match result {
            Ok(reply) if reply.is_success() => {
                state.list.remove_by_id(&id);
            }
            Ok(reply) => warn!("store refused to delete {id}: {reply:?}"),
            Err(reason) => warn!("deleting {id} failed: {reason}"),
        },
        Action::ClearRequested => {
            effects.push(Effect::ConfirmClear {
                prompt: state.language.text(TextKey::ConfirmClear).to_owned(),
            });
        }
        Action::ClearConfirmed(confirmed) => {
            if confirmed {
                effects.push(Effect::ClearDocuments {
                    url: state.config.endpoints.clear.clone(),
                });
            }
        }
        Action::ClearCompleted(result) => match result {
            Ok(reply) if reply.is_success() => {
                state.drag.reset();
                state.list.clear();
            }
            Ok(reply) => warn!("store refused to clear documents: {reply:?}"),
            Err(reason) => warn!("clearing documents failed: {reason}"),
        },
        Action::PreviewRequested(id) => match state.list.get(&id) {
            Some(record) if record.is_previewable() => effects.push(Effect::OpenPreview {
                url: state.config.endpoints.view_url(&id),
            }),
            Some(_) => effects.push(Effect::ShowAlert(
                state.language.text(TextKey::PreviewNotAvailable).to_owned(),
            )),
            None => debug!("preview of unlisted document {id} ignored"),
        },

        Action::DragStarted(id) => {
            if state.drag.drag_start(&state.list, &id) {
                state.mark_dirty();
            }
        }
        Action::DragEntered(id) | Action::DragOver(id) => {
            if state.drag.drag_over(&id) {
                state.mark_dirty();
            }
        }
        Action::DragLeft(id) => {
            if state.drag.drag_leave(&id) {
                state.mark_dirty();
            }
        }
        Action::Dropped(target) => {
            if let DropOutcome::Reordered(order) = state.drag.drop(&mut state.list, &target) {
                effects.push(Effect::CommitOrder {
                    url: state.config.endpoints.reorder.clone(),
                    body: ReorderRequest { order },
                });
            }
            state.mark_dirty();
        }
        Action::DragEnded => {
            state.drag.drag_end();
            state.mark_dirty();
        }
        Action::OrderCommitted(result) => {
            // Fire-and-forget: the optimistic order stays on failure.
            if let Err(reason) = result {
                warn!("reorder commit failed: {reason}");
            }
        }

        Action::GenerateRequested => {
            let language = state.language;
            let started = state
                .generation
                .start(&state.config, &state.schedule, language);
            if !started.is_empty() {
                state.mark_dirty();
            }
            effects.extend(started);
        }
        Action::GenerationResponded(reply) => {
            let language = state.language;
            effects.extend(state.generation.on_response(reply, &state.config, language));
            state.mark_dirty();
        }
        Action::GenerationBodyReceived(bytes) => {
            effects.extend(state.generation.on_body(bytes, &state.config));
            state.mark_dirty();
        }
        Action::GenerationTransportFailed(reason) => {
            let language = state.language;
            effects.extend(state.generation.on_transport_failure(reason, language));
            state.mark_dirty();
        }

        Action::ProgressTicked(operation) => {
            let schedule = state.schedule.clone();
            let presenter = state.presenter_mut(operation);
            let advanced = presenter.tick(&schedule);
            let ticking = presenter.ticker_active();
            if advanced {
                state.mark_dirty();
            } else if !ticking {
                // Queued before the ticker was stopped.
                debug!("late {operation:?} tick ignored");
            }
        }
        Action::ProgressDismissed(operation) => {
            if state.presenter_mut(operation).dismiss() {
                state.mark_dirty();
            }
        }
        Action::AutoDismissElapsed { operation, run } => {
            if state.presenter_mut(operation).auto_dismiss(run) {
                state.mark_dirty();
            }
        }
        Action::DetailsToggled(operation) => {
            if state.presenter_mut(operation).toggle_details() {
                state.mark_dirty();
            }
        }

        Action::LanguageChanged(language) => {
            if state.language != language {
                info!("language switched to {}", language.code());
                state.language = language;
                effects.push(Effect::PersistLanguage {
                    key: state.config.language_storage_key.clone(),
                    code: language.code(),
                });
                state.mark_dirty();
            }
        }
        Action::LogsToggled => {
            state.logs.open = !state.logs.open;
            if state.logs.open && state.logs.content.is_none() {
                effects.push(fetch_logs(state));
            }
            state.mark_dirty();
        }
        Action::LogsRefreshRequested => {
            if !state.logs.loading {
                effects.push(fetch_logs(state));
                state.mark_dirty();
            }
        }
        Action::LogsLoaded(result) => {
            if let Err(reason) = &result {
                warn!("could not load logs: {reason}");
            }
            state.logs.loading = false;
            state.logs.content = Some(result);
            state.mark_dirty();
        }
    }
    effects
}

fn fetch_documents(state: &WorkspaceState) -> Effect {
    Effect::FetchDocuments {
        url: state.config.endpoints.documents.clone(),
    }
}

fn fetch_logs(state: &mut WorkspaceState) -> Effect {
    state.logs.loading = true;
    Effect::FetchLogs {
        url: state.config.endpoints.logs.clone(),
    }
}
