//! View rendering for the workspace page.
//!
//! Everything shown comes from [`controller::WorkspaceView`]; this module
//! only lays it out and maps browser events to messages.

use common::model::document::DocumentId;
use common::requests::{FILE_FIELD, FOLDER_FIELD};
use controller::{Action, DocumentRow, Language, ListView, OperationKind, TextKey, WorkspaceView};
use web_sys::{DragEvent, HtmlInputElement, HtmlSelectElement};
use yew::html::Scope;
use yew::prelude::*;

use crate::components::progress_sheet::ProgressSheet;

use super::helpers::files_from_list;
use super::messages::{Msg, Picker};
use super::state::WorkspaceComponent;

pub fn view(component: &WorkspaceComponent, ctx: &Context<WorkspaceComponent>) -> Html {
    let link = ctx.link();
    let view = component.workspace.view();
    let t = |key| view.language.text(key);

    html! {
        <div class="workspace">
            <header class="workspace-header">
                <h1>{ t(TextKey::AppTitle) }</h1>
                { build_language_selector(&view, link) }
            </header>
            { build_upload_section(component, &view, link) }
            <section class="document-section">
                <div class="section-header">
                    <h2>{ t(TextKey::DocumentList) }</h2>
                    <div class="section-actions">
                        <button
                            id="clearAll"
                            class="btn btn-secondary"
                            onclick={link.callback(|_| Msg::Workspace(Action::ClearRequested))}
                        >
                            { t(TextKey::ClearAll) }
                        </button>
                        <button
                            id="generatePDF"
                            class="btn btn-primary"
                            disabled={!view.generate_enabled}
                            onclick={link.callback(|_| Msg::Workspace(Action::GenerateRequested))}
                        >
                            { t(TextKey::GenerateBook) }
                        </button>
                    </div>
                </div>
                <p class="drag-hint">{ t(TextKey::DragHint) }</p>
                { build_document_list(&view, link) }
            </section>
            { build_logs_panel(&view, link) }
            <ProgressSheet
                id="uploadProgress"
                view={view.upload.clone()}
                on_dismiss={link.callback(|_| Msg::Workspace(Action::ProgressDismissed(OperationKind::Upload)))}
                on_toggle_details={link.callback(|_| Msg::Workspace(Action::DetailsToggled(OperationKind::Upload)))}
            />
            <ProgressSheet
                id="generationProgress"
                view={view.generation.clone()}
                on_dismiss={link.callback(|_| Msg::Workspace(Action::ProgressDismissed(OperationKind::Generation)))}
                on_toggle_details={link.callback(|_| Msg::Workspace(Action::DetailsToggled(OperationKind::Generation)))}
            />
        </div>
    }
}

fn build_language_selector(view: &WorkspaceView, link: &Scope<WorkspaceComponent>) -> Html {
    let onchange = link.batch_callback(|event: Event| {
        let select: HtmlSelectElement = event.target_unchecked_into();
        Language::from_code(&select.value())
            .map(|language| Msg::Workspace(Action::LanguageChanged(language)))
    });
    html! {
        <label class="language-selector">
            { view.language.text(TextKey::Language) }
            <select {onchange}>
                { for Language::ALL.iter().map(|language| html! {
                    <option value={language.code()} selected={*language == view.language}>
                        { language.native_name() }
                    </option>
                }) }
            </select>
        </label>
    }
}

fn build_upload_section(
    component: &WorkspaceComponent,
    view: &WorkspaceView,
    link: &Scope<WorkspaceComponent>,
) -> Html {
    let t = |key| view.language.text(key);
    let highlight = |active: bool| {
        link.callback(move |event: DragEvent| {
            event.prevent_default();
            event.stop_propagation();
            Msg::Workspace(Action::DropZoneHighlighted(active))
        })
    };
    let ondrop = link.batch_callback(|event: DragEvent| {
        event.prevent_default();
        event.stop_propagation();
        let files = files_from_list(event.data_transfer().and_then(|transfer| transfer.files()));
        vec![
            Msg::Workspace(Action::DropZoneHighlighted(false)),
            Msg::FilesChosen {
                field: FILE_FIELD,
                files,
            },
        ]
    });
    let on_files = link.callback(|event: Event| {
        let input: HtmlInputElement = event.target_unchecked_into();
        Msg::FilesChosen {
            field: FILE_FIELD,
            files: files_from_list(input.files()),
        }
    });
    let on_folder = link.callback(|event: Event| {
        let input: HtmlInputElement = event.target_unchecked_into();
        Msg::FilesChosen {
            field: FOLDER_FIELD,
            files: files_from_list(input.files()),
        }
    });

    html! {
        <section class="upload-section">
            <h2>{ t(TextKey::UploadTitle) }</h2>
            <div
                id="dropZone"
                class={classes!("drop-zone", view.drop_zone_active.then_some("active"))}
                ondragenter={highlight(true)}
                ondragover={highlight(true)}
                ondragleave={highlight(false)}
                {ondrop}
                onclick={link.callback(|_| Msg::OpenPicker(Picker::Files))}
            >
                <p>{ t(TextKey::UploadInstructions) }</p>
                <button type="button" class="btn btn-primary">{ t(TextKey::ChooseFiles) }</button>
            </div>
            <input
                id="file"
                type="file"
                multiple=true
                accept=".pdf,.zip"
                hidden=true
                ref={component.file_input_ref.clone()}
                onchange={on_files}
            />
            <input
                id="folder"
                type="file"
                multiple=true
                webkitdirectory=true
                hidden=true
                ref={component.folder_input_ref.clone()}
                onchange={on_folder}
            />
            <p class="folder-option">
                <a class="folder-link" onclick={link.callback(|_| Msg::OpenPicker(Picker::Folder))}>
                    { t(TextKey::UploadFolderOption) }
                </a>
            </p>
        </section>
    }
}

fn build_document_list(view: &WorkspaceView, link: &Scope<WorkspaceComponent>) -> Html {
    match &view.list {
        ListView::Placeholder(text) => html! {
            <div id="documentList" class="document-list">
                <div class="no-documents">{ *text }</div>
            </div>
        },
        ListView::Items(rows) => html! {
            <div id="documentList" class="document-list">
                { for rows.iter().map(|row| build_document_item(row, view.language, link)) }
            </div>
        },
    }
}

fn build_document_item(
    row: &DocumentRow,
    language: Language,
    link: &Scope<WorkspaceComponent>,
) -> Html {
    let id = row.id.clone();
    let item_callback = |make: fn(DocumentId) -> Action, prevent: bool| {
        let id = id.clone();
        link.callback(move |event: DragEvent| {
            if prevent {
                event.prevent_default();
            }
            Msg::Workspace(make(id.clone()))
        })
    };
    let ondragstart = {
        let id = id.clone();
        link.callback(move |event: DragEvent| {
            // Some engines refuse to start a drag without a payload.
            if let Some(transfer) = event.data_transfer() {
                transfer.set_data("text/plain", "").ok();
                transfer.set_effect_allowed("move");
            }
            Msg::Workspace(Action::DragStarted(id.clone()))
        })
    };
    let on_delete = {
        let id = id.clone();
        link.callback(move |event: MouseEvent| {
            event.stop_propagation();
            Msg::Workspace(Action::DeleteRequested(id.clone()))
        })
    };
    let on_preview = {
        let id = id.clone();
        link.callback(move |_| Msg::Workspace(Action::PreviewRequested(id.clone())))
    };

    html! {
        <div
            key={row.id.as_str().to_owned()}
            class={classes!(
                "document-item",
                row.markers.being_moved.then_some("dragging"),
                row.markers.drop_eligible.then_some("drag-over"),
            )}
            draggable="true"
            data-id={row.id.as_str().to_owned()}
            {ondragstart}
            ondragenter={item_callback(Action::DragEntered, true)}
            ondragover={item_callback(Action::DragOver, true)}
            ondragleave={item_callback(Action::DragLeft, false)}
            ondrop={item_callback(Action::Dropped, true)}
            ondragend={link.callback(|_: DragEvent| Msg::Workspace(Action::DragEnded))}
        >
            <div
                class={classes!("document-info", row.previewable.then_some("previewable"))}
                onclick={on_preview}
            >
                <div class="document-name">{ &row.filename }</div>
                <div class="document-meta">
                    <span class={classes!("document-status", row.status.as_str())}>
                        { row.status_label }
                    </span>
                    <span class="document-pages">{ &row.pages_label }</span>
                </div>
            </div>
            <button class="btn-delete" data-id={row.id.as_str().to_owned()} onclick={on_delete}>
                { language.text(TextKey::Delete) }
            </button>
        </div>
    }
}

fn build_logs_panel(view: &WorkspaceView, link: &Scope<WorkspaceComponent>) -> Html {
    let t = |key| view.language.text(key);
    let logs = &view.logs;
    html! {
        <section class="logs-section">
            <button class="btn btn-link" onclick={link.callback(|_| Msg::Workspace(Action::LogsToggled))}>
                { t(TextKey::ViewLogs) }
            </button>
            if logs.open {
                <div class="logs-panel">
                    <button
                        class="btn btn-secondary"
                        disabled={logs.loading}
                        onclick={link.callback(|_| Msg::Workspace(Action::LogsRefreshRequested))}
                    >
                        { t(TextKey::RefreshLogs) }
                    </button>
                    if let Some(error) = &logs.error {
                        <p class="logs-error">{ error }</p>
                    }
                    if let Some(text) = &logs.text {
                        <pre class="logs-content">{ text }</pre>
                    }
                </div>
            }
        </section>
    }
}
