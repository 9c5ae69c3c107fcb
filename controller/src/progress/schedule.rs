use crate::config::{IncrementBand, LabelBand, UiConfig};
use crate::i18n::TextKey;

/// Piecewise deceleration schedule for simulated progress.
///
/// Each tick adds the step of the first band whose upper bound lies above
/// the current value; the result is clamped to the ceiling, so the value
/// creeps towards but never reaches completion on its own.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulatedSchedule {
    ceiling: f64,
    increments: Vec<IncrementBand>,
    labels: Vec<LabelBand>,
    final_label: TextKey,
}

impl SimulatedSchedule {
    pub fn from_config(config: &UiConfig) -> Self {
        Self {
            ceiling: config.progress_ceiling.min(99.0),
            increments: config.increment_bands.clone(),
            labels: config.label_bands.clone(),
            final_label: config.final_label,
        }
    }

    pub fn ceiling(&self) -> f64 {
        self.ceiling
    }

    pub fn advance(&self, current: f64) -> f64 {
        let step = self
            .increments
            .iter()
            .find(|band| current < band.below)
            .map_or(0.0, |band| band.step);
        (current + step).min(self.ceiling)
    }

    pub fn label_for(&self, percent: f64) -> TextKey {
        self.labels
            .iter()
            .find(|band| percent < band.below)
            .map_or(self.final_label, |band| band.label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn steps_shrink_as_value_grows() {
        let schedule = SimulatedSchedule::from_config(&UiConfig::default());
        assert_eq!(schedule.advance(0.0), 1.5);
        assert_eq!(schedule.advance(20.0), 22.0);
        assert!((schedule.advance(60.0) - 61.2).abs() < 1e-9);
        assert!((schedule.advance(90.0) - 90.8).abs() < 1e-9);
    }

    #[test]
    fn value_stalls_at_ceiling() {
        let schedule = SimulatedSchedule::from_config(&UiConfig::default());
        assert_eq!(schedule.advance(94.9), 95.0);
        assert_eq!(schedule.advance(95.0), 95.0);
    }

    #[test]
    fn labels_follow_bands() {
        let schedule = SimulatedSchedule::from_config(&UiConfig::default());
        assert_eq!(schedule.label_for(0.0), TextKey::InitializingGeneration);
        assert_eq!(schedule.label_for(39.9), TextKey::ProcessingContent);
        assert_eq!(schedule.label_for(40.0), TextKey::CreatingIndex);
        assert_eq!(schedule.label_for(79.0), TextKey::MergingDocuments);
        assert_eq!(schedule.label_for(95.0), TextKey::Finalizing);
    }
}
