use crate::config::UiConfig;
use crate::drag::DragReorderController;
use crate::generation::GenerationOrchestrator;
use crate::i18n::Language;
use crate::list_model::ListModel;
use crate::progress::{OperationKind, ProgressPresenter, SimulatedSchedule};

/// The collapsible panel showing the store's recent log lines.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LogsPanel {
    pub open: bool,
    pub loading: bool,
    pub content: Option<Result<String, String>>,
}

/// Everything the workspace page knows, owned by the page component.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkspaceState {
    pub config: UiConfig,
    pub schedule: SimulatedSchedule,
    pub language: Language,
    pub list: ListModel,
    pub drag: DragReorderController,
    pub upload: ProgressPresenter,
    pub generation: GenerationOrchestrator,
    pub logs: LogsPanel,
    pub drop_zone_active: bool,
    /// Set by every action that changes what is displayed.
    dirty: bool,
}

impl WorkspaceState {
    pub fn new(config: UiConfig, language: Language) -> Self {
        let schedule = SimulatedSchedule::from_config(&config);
        Self {
            config,
            schedule,
            language,
            list: ListModel::new(),
            drag: DragReorderController::new(),
            upload: ProgressPresenter::new(OperationKind::Upload),
            generation: GenerationOrchestrator::new(),
            logs: LogsPanel::default(),
            drop_zone_active: false,
            dirty: true,
        }
    }

    pub fn presenter(&self, operation: OperationKind) -> &ProgressPresenter {
        match operation {
            OperationKind::Upload => &self.upload,
            OperationKind::Generation => self.generation.progress(),
        }
    }

    pub fn presenter_mut(&mut self, operation: OperationKind) -> &mut ProgressPresenter {
        match operation {
            OperationKind::Upload => &mut self.upload,
            OperationKind::Generation => self.generation.progress_mut(),
        }
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// Whether a re-render is due, resetting the flag. List mutations count.
    pub fn consume_dirty(&mut self) -> bool {
        let list_changed = self.list.take_render_request();
        std::mem::take(&mut self.dirty) || list_changed
    }
}
