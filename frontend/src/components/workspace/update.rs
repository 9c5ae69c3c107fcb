//! Message handling for the workspace page.
//!
//! Every message ends up as a [`controller::Action`]; the effects returned by
//! the controller are executed in order by [`run_effect`]. Asynchronous work
//! reports back through the component link, so all failures arrive as
//! further actions.

use controller::{Action, Effect, TransferOutcome};
use gloo_timers::callback::{Interval, Timeout};
use log::{debug, warn};
use web_sys::HtmlInputElement;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::api::{documents, generation, transfer};

use super::helpers::{alert, confirm, open_in_new_tab, save_blob};
use super::messages::{Msg, Picker};
use super::state::WorkspaceComponent;

pub fn update(
    component: &mut WorkspaceComponent,
    ctx: &Context<WorkspaceComponent>,
    msg: Msg,
) -> bool {
    match msg {
        Msg::Workspace(action) => dispatch(component, ctx, action),
        Msg::FilesChosen { field, files } => {
            let file_count = files.len();
            component.pending_upload = files.into_iter().map(|file| (field, file)).collect();
            let rerender = dispatch(component, ctx, Action::UploadRequested { file_count });
            // Refused requests leave their files behind.
            component.pending_upload.clear();
            rerender
        }
        Msg::OpenPicker(picker) => {
            let input_ref = match picker {
                Picker::Files => &component.file_input_ref,
                Picker::Folder => &component.folder_input_ref,
            };
            if let Some(input) = input_ref.cast::<HtmlInputElement>() {
                input.click();
            }
            false
        }
    }
}

fn dispatch(
    component: &mut WorkspaceComponent,
    ctx: &Context<WorkspaceComponent>,
    action: Action,
) -> bool {
    let effects = controller::update(&mut component.workspace, action);
    for effect in effects {
        run_effect(component, ctx, effect);
    }
    component.workspace.consume_dirty()
}

fn run_effect(
    component: &mut WorkspaceComponent,
    ctx: &Context<WorkspaceComponent>,
    effect: Effect,
) {
    let link = ctx.link().clone();
    match effect {
        Effect::FetchDocuments { url } => spawn_local(async move {
            let action = match documents::list(&url).await {
                Ok(records) => Action::DocumentsLoaded(records),
                Err(err) => Action::DocumentsLoadFailed(err.to_string()),
            };
            link.send_message(Msg::Workspace(action));
        }),
        Effect::SendUpload { url } => {
            let files = std::mem::take(&mut component.pending_upload);
            let form = match transfer::form_data(&files) {
                Ok(form) => form,
                Err(err) => {
                    warn!("could not build upload form: {err}");
                    ctx.link().send_message(Msg::Workspace(Action::UploadFinished(
                        TransferOutcome::Failed {
                            status_code: 0,
                            raw_body: String::new(),
                        },
                    )));
                    return;
                }
            };
            let progress_link = link.clone();
            spawn_local(async move {
                let outcome = transfer::upload(&url, &form, move |progress| {
                    progress_link.send_message(Msg::Workspace(Action::UploadProgressed(progress)));
                })
                .await
                .unwrap_or_else(|err| {
                    warn!("upload failed: {err}");
                    TransferOutcome::Failed {
                        status_code: 0,
                        raw_body: String::new(),
                    }
                });
                link.send_message(Msg::Workspace(Action::UploadFinished(outcome)));
            });
        }
        Effect::ResetUploadInputs => {
            for input_ref in [&component.file_input_ref, &component.folder_input_ref] {
                if let Some(input) = input_ref.cast::<HtmlInputElement>() {
                    input.set_value("");
                }
            }
        }
        Effect::DeleteDocument { id, url } => spawn_local(async move {
            let result = documents::delete(&url).await.map_err(|err| err.to_string());
            link.send_message(Msg::Workspace(Action::DeleteCompleted { id, result }));
        }),
        Effect::ConfirmClear { prompt } => {
            ctx.link()
                .send_message(Msg::Workspace(Action::ClearConfirmed(confirm(&prompt))));
        }
        Effect::ClearDocuments { url } => spawn_local(async move {
            let result = documents::clear(&url).await.map_err(|err| err.to_string());
            link.send_message(Msg::Workspace(Action::ClearCompleted(result)));
        }),
        Effect::CommitOrder { url, body } => spawn_local(async move {
            let result = documents::reorder(&url, &body)
                .await
                .map_err(|err| err.to_string());
            link.send_message(Msg::Workspace(Action::OrderCommitted(result)));
        }),
        Effect::StartTicker {
            operation,
            interval_ms,
        } => {
            let ticker = Interval::new(interval_ms, move || {
                link.send_message(Msg::Workspace(Action::ProgressTicked(operation)));
            });
            component.tickers.insert(operation, ticker);
        }
        Effect::StopTicker { operation } => {
            if component.tickers.remove(&operation).is_none() {
                debug!("no {operation:?} ticker to stop");
            }
        }
        Effect::ScheduleAutoDismiss {
            operation,
            run,
            delay_ms,
        } => {
            let timer = Timeout::new(delay_ms, move || {
                link.send_message(Msg::Workspace(Action::AutoDismissElapsed { operation, run }));
            });
            component.dismiss_timers.insert(operation, timer);
        }
        Effect::SendGenerate { url } => spawn_local(async move {
            match generation::generate(&url).await {
                Ok((reply, book)) => {
                    link.send_message(Msg::Workspace(Action::GenerationResponded(reply)));
                    if let Some(book) = book {
                        let action = match book.bytes().await {
                            Ok(bytes) => Action::GenerationBodyReceived(bytes),
                            Err(err) => Action::GenerationTransportFailed(err.to_string()),
                        };
                        link.send_message(Msg::Workspace(action));
                    }
                }
                Err(err) => link.send_message(Msg::Workspace(
                    Action::GenerationTransportFailed(err.to_string()),
                )),
            }
        }),
        Effect::SaveBlob { filename, bytes } => save_blob(&filename, &bytes),
        Effect::OpenPreview { url } => open_in_new_tab(&url),
        Effect::ShowAlert(message) => alert(&message),
        Effect::PersistLanguage { key, code } => crate::preferences::save_language(&key, code),
        Effect::FetchLogs { url } => spawn_local(async move {
            let result = documents::recent_logs(&url)
                .await
                .map_err(|err| err.to_string());
            link.send_message(Msg::Workspace(Action::LogsLoaded(result)));
        }),
    }
}
