use std::collections::HashMap;

use controller::{OperationKind, WorkspaceState};
use gloo_timers::callback::{Interval, Timeout};
use web_sys::File;
use yew::prelude::*;

/// Runtime state of the workspace page.
///
/// Decisions live in `workspace`; the other fields hold browser resources
/// that must stay alive while an effect is running.
pub struct WorkspaceComponent {
    pub workspace: WorkspaceState,

    /// Files picked for the upload being requested, tagged with their form field.
    pub pending_upload: Vec<(&'static str, File)>,

    /// Simulated-progress tickers. Dropping a handle cancels it.
    pub tickers: HashMap<OperationKind, Interval>,

    /// Auto-dismiss timers; a newer run replaces and cancels the older one.
    pub dismiss_timers: HashMap<OperationKind, Timeout>,

    pub file_input_ref: NodeRef,
    pub folder_input_ref: NodeRef,

    pub loaded: bool,
}

impl WorkspaceComponent {
    pub fn new(workspace: WorkspaceState) -> Self {
        Self {
            workspace,
            pending_upload: Vec::new(),
            tickers: HashMap::new(),
            dismiss_timers: HashMap::new(),
            file_input_ref: NodeRef::default(),
            folder_input_ref: NodeRef::default(),
            loaded: false,
        }
    }
}
