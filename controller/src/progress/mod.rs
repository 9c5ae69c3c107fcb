//! Progress overlays for uploads and book generation.
//!
//! Upload and generation each own a separate [`ProgressPresenter`]; they can
//! run independently and never share state.
//!
//! Generation runs in *simulated* mode: a fixed-period ticker advances the
//! bar along a [`SimulatedSchedule`] until the real request resolves. Uploads
//! run in *transfer* mode: the bar follows byte counts and nothing ticks.

mod schedule;

pub use schedule::SimulatedSchedule;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::effect::Effect;
use crate::i18n::TextKey;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OperationKind {
    Upload,
    Generation,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Running,
    /// The real operation answered; the result is still being consumed.
    Completing,
    Done,
    Failed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProgressLabel {
    Text(TextKey),
    Percent(u8),
    Succeeded,
    Failed {
        message: String,
        details: Option<Vec<String>>,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProgressState {
    pub phase: Phase,
    pub displayed_percent: f64,
    pub label: ProgressLabel,
}

impl Default for ProgressState {
    fn default() -> Self {
        Self {
            phase: Phase::Idle,
            displayed_percent: 0.0,
            label: ProgressLabel::Percent(0),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProgressPresenter {
    operation: OperationKind,
    state: ProgressState,
    visible: bool,
    ticker_active: bool,
    dismissible: bool,
    details_expanded: bool,
    /// Incremented on every start so timers of an earlier run can be told apart.
    run: u64,
}

impl ProgressPresenter {
    pub fn new(operation: OperationKind) -> Self {
        Self {
            operation,
            state: ProgressState::default(),
            visible: false,
            ticker_active: false,
            dismissible: false,
            details_expanded: false,
            run: 0,
        }
    }

    pub fn operation(&self) -> OperationKind {
        self.operation
    }

    pub fn state(&self) -> &ProgressState {
        &self.state
    }

    pub fn phase(&self) -> Phase {
        self.state.phase
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn is_busy(&self) -> bool {
        matches!(self.state.phase, Phase::Running | Phase::Completing)
    }

    pub fn is_dismissible(&self) -> bool {
        self.dismissible
    }

    pub fn details_expanded(&self) -> bool {
        self.details_expanded
    }

    pub fn ticker_active(&self) -> bool {
        self.ticker_active
    }

    pub fn run(&self) -> u64 {
        self.run
    }

    /// Starts a simulated run and its ticker.
    pub fn start_simulated(&mut self, schedule: &SimulatedSchedule, interval_ms: u32) -> Vec<Effect> {
        let mut effects = self.stop_ticker();
        self.begin_run();
        self.state.label = ProgressLabel::Text(schedule.label_for(0.0));
        self.ticker_active = true;
        effects.push(Effect::StartTicker {
            operation: self.operation,
            interval_ms,
        });
        effects
    }

    /// Starts a byte-driven run. No ticker is involved.
    pub fn start_transfer(&mut self) -> Vec<Effect> {
        let effects = self.stop_ticker();
        self.begin_run();
        self.state.label = ProgressLabel::Percent(0);
        effects
    }

    fn begin_run(&mut self) {
        self.run += 1;
        self.state = ProgressState {
            phase: Phase::Running,
            displayed_percent: 0.0,
            label: ProgressLabel::Percent(0),
        };
        self.visible = true;
        self.dismissible = false;
        self.details_expanded = false;
        debug!("{:?} progress run {} started", self.operation, self.run);
    }

    /// Advances a simulated run by one tick. Ticks outside a running
    /// simulated run are ignored.
    pub fn tick(&mut self, schedule: &SimulatedSchedule) -> bool {
        if self.state.phase != Phase::Running || !self.ticker_active {
            return false;
        }
        let next = schedule.advance(self.state.displayed_percent);
        let label = ProgressLabel::Text(schedule.label_for(next));
        let changed = next != self.state.displayed_percent || label != self.state.label;
        self.state.displayed_percent = next;
        self.state.label = label;
        changed
    }

    /// Applies a known transfer percentage to a byte-driven run.
    pub fn report_percent(&mut self, percent: u8) -> bool {
        if self.state.phase != Phase::Running || self.ticker_active {
            return false;
        }
        let percent = percent.min(100);
        self.state.displayed_percent = f64::from(percent);
        self.state.label = ProgressLabel::Percent(percent);
        true
    }

    /// The real operation answered and its result is being consumed.
    pub fn begin_completing(&mut self, label: TextKey) -> Vec<Effect> {
        let effects = self.stop_ticker();
        if self.state.phase == Phase::Running {
            self.state.phase = Phase::Completing;
            self.state.label = ProgressLabel::Text(label);
        }
        effects
    }

    /// Snaps to 100%, shows the dismiss control and schedules auto-dismissal.
    pub fn succeed(&mut self, auto_dismiss_ms: u32) -> Vec<Effect> {
        let mut effects = self.stop_ticker();
        self.state = ProgressState {
            phase: Phase::Done,
            displayed_percent: 100.0,
            label: ProgressLabel::Succeeded,
        };
        self.dismissible = true;
        self.details_expanded = false;
        effects.push(Effect::ScheduleAutoDismiss {
            operation: self.operation,
            run: self.run,
            delay_ms: auto_dismiss_ms,
        });
        effects
    }

    /// Switches to the error treatment. Failures are never auto-dismissed.
    pub fn fail(&mut self, message: String, details: Option<Vec<String>>) -> Vec<Effect> {
        let effects = self.stop_ticker();
        let details = details.filter(|lines| !lines.is_empty());
        self.state.phase = Phase::Failed;
        self.state.label = ProgressLabel::Failed { message, details };
        self.dismissible = true;
        self.details_expanded = false;
        effects
    }

    /// Ends a byte-driven run by hiding the overlay straight away.
    pub fn finish_transfer(&mut self) -> Vec<Effect> {
        let effects = self.stop_ticker();
        self.state.phase = Phase::Done;
        self.visible = false;
        self.dismissible = false;
        effects
    }

    pub fn toggle_details(&mut self) -> bool {
        match &self.state.label {
            ProgressLabel::Failed {
                details: Some(_), ..
            } => {
                self.details_expanded = !self.details_expanded;
                true
            }
            _ => false,
        }
    }

    /// User pressed the dismiss control.
    pub fn dismiss(&mut self) -> bool {
        if !self.dismissible {
            return false;
        }
        self.visible = false;
        self.dismissible = false;
        self.details_expanded = false;
        self.state.phase = Phase::Idle;
        true
    }

    /// Auto-dismiss timer of `run` elapsed; only a successful run that is
    /// still the current one is hidden.
    pub fn auto_dismiss(&mut self, run: u64) -> bool {
        if run != self.run || self.state.phase != Phase::Done || !self.visible {
            return false;
        }
        self.dismiss()
    }

    /// Cancels the ticker. Cancelling twice yields no second effect.
    fn stop_ticker(&mut self) -> Vec<Effect> {
        if std::mem::take(&mut self.ticker_active) {
            vec![Effect::StopTicker {
                operation: self.operation,
            }]
        } else {
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::UiConfig;

    fn schedule() -> SimulatedSchedule {
        SimulatedSchedule::from_config(&UiConfig::default())
    }

    #[test]
    fn ticker_is_stopped_exactly_once() {
        let mut presenter = ProgressPresenter::new(OperationKind::Generation);
        presenter.start_simulated(&schedule(), 50);

        let first = presenter.begin_completing(TextKey::DownloadProgress);
        assert_eq!(
            first,
            vec![Effect::StopTicker {
                operation: OperationKind::Generation
            }]
        );
        let second = presenter.succeed(5000);
        assert!(!second
            .iter()
            .any(|effect| matches!(effect, Effect::StopTicker { .. })));
    }

    #[test]
    fn transfer_mode_ignores_ticks() {
        let mut presenter = ProgressPresenter::new(OperationKind::Upload);
        presenter.start_transfer();
        assert!(!presenter.tick(&schedule()));
        assert!(presenter.report_percent(42));
        assert_eq!(presenter.state().label, ProgressLabel::Percent(42));
    }

    #[test]
    fn simulated_mode_ignores_byte_reports() {
        let mut presenter = ProgressPresenter::new(OperationKind::Generation);
        presenter.start_simulated(&schedule(), 50);
        assert!(!presenter.report_percent(80));
        assert_eq!(presenter.state().displayed_percent, 0.0);
    }

    #[test]
    fn stale_auto_dismiss_does_not_hide_a_newer_run() {
        let mut presenter = ProgressPresenter::new(OperationKind::Generation);
        presenter.start_simulated(&schedule(), 50);
        presenter.succeed(5000);
        let old_run = presenter.run();

        presenter.start_simulated(&schedule(), 50);
        assert!(!presenter.auto_dismiss(old_run));
        assert!(presenter.is_visible());
    }

    #[test]
    fn details_toggle_needs_details() {
        let mut presenter = ProgressPresenter::new(OperationKind::Generation);
        presenter.start_simulated(&schedule(), 50);
        presenter.fail("boom".into(), Some(Vec::new()));
        assert!(!presenter.toggle_details());

        presenter.start_simulated(&schedule(), 50);
        presenter.fail("boom".into(), Some(vec!["line".into()]));
        assert!(presenter.toggle_details());
        assert!(presenter.details_expanded());
        assert!(presenter.toggle_details());
        assert!(!presenter.details_expanded());
    }
}
