//! Tuning values and endpoint paths for the workspace client.
//!
//! All fields have defaults matching the store's stock deployment. A page
//! may override any subset by embedding a JSON object (see
//! [`UiConfig::from_json`]); missing fields keep their default.

use serde::Deserialize;
use thiserror::Error;

use common::model::document::DocumentId;

use crate::i18n::{Language, TextKey};

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("invalid configuration JSON: {0}")]
    Parse(String),
    #[error("tick interval must be positive")]
    TickInterval,
    #[error("progress ceiling must lie in (0, 100), got {0}")]
    Ceiling(f64),
    #[error("{0} bands must not be empty")]
    EmptyBands(&'static str),
    #[error("{0} bands must be sorted by strictly increasing upper bound")]
    UnsortedBands(&'static str),
    #[error("increment for band below {0} must be positive")]
    Increment(f64),
}

/// Simulated progress grows by `step` while the displayed value is below `below`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct IncrementBand {
    pub below: f64,
    pub step: f64,
}

/// The displayed value shows `label` while it is below `below`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LabelBand {
    pub below: f64,
    pub label: TextKey,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Endpoints {
    pub documents: String,
    pub upload: String,
    pub clear: String,
    pub reorder: String,
    pub generate: String,
    pub view: String,
    pub logs: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            documents: "/documents".into(),
            upload: "/documents".into(),
            clear: "/documents/clear".into(),
            reorder: "/documents/reorder".into(),
            generate: "/generate".into(),
            view: "/documents/view".into(),
            logs: "/logs".into(),
        }
    }
}

impl Endpoints {
    pub fn delete_url(&self, id: &DocumentId) -> String {
        format!("{}/{}", self.documents.trim_end_matches('/'), id)
    }

    pub fn view_url(&self, id: &DocumentId) -> String {
        format!("{}/{}", self.view.trim_end_matches('/'), id)
    }

    /// The store localizes the cover and index pages from this parameter.
    pub fn generate_url(&self, language: Language) -> String {
        let separator = if self.generate.contains('?') { '&' } else { '?' };
        format!("{}{}language={}", self.generate, separator, language.code())
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    pub tick_interval_ms: u32,
    /// Simulated progress never passes this value on its own.
    pub progress_ceiling: f64,
    pub increment_bands: Vec<IncrementBand>,
    pub label_bands: Vec<LabelBand>,
    /// Label shown once the value is past every label band.
    pub final_label: TextKey,
    pub auto_dismiss_ms: u32,
    pub default_filename: String,
    pub language_storage_key: String,
    pub default_language: Language,
    pub endpoints: Endpoints,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: 50,
            progress_ceiling: 95.0,
            increment_bands: vec![
                IncrementBand { below: 20.0, step: 1.5 },
                IncrementBand { below: 60.0, step: 2.0 },
                IncrementBand { below: 85.0, step: 1.2 },
                IncrementBand { below: 95.0, step: 0.8 },
            ],
            label_bands: vec![
                LabelBand { below: 20.0, label: TextKey::InitializingGeneration },
                LabelBand { below: 40.0, label: TextKey::ProcessingContent },
                LabelBand { below: 60.0, label: TextKey::CreatingIndex },
                LabelBand { below: 80.0, label: TextKey::MergingDocuments },
            ],
            final_label: TextKey::Finalizing,
            auto_dismiss_ms: 5000,
            default_filename: "book_of_documents.pdf".into(),
            language_storage_key: "language".into(),
            default_language: Language::En,
            endpoints: Endpoints::default(),
        }
    }
}

impl UiConfig {
    /// Parses a (possibly partial) JSON override and validates the result.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: UiConfig =
            serde_json::from_str(raw).map_err(|err| ConfigError::Parse(err.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tick_interval_ms == 0 {
            return Err(ConfigError::TickInterval);
        }
        if !(self.progress_ceiling > 0.0 && self.progress_ceiling < 100.0) {
            return Err(ConfigError::Ceiling(self.progress_ceiling));
        }
        if self.increment_bands.is_empty() {
            return Err(ConfigError::EmptyBands("increment"));
        }
        if !strictly_increasing(self.increment_bands.iter().map(|band| band.below)) {
            return Err(ConfigError::UnsortedBands("increment"));
        }
        if let Some(band) = self.increment_bands.iter().find(|band| band.step <= 0.0) {
            return Err(ConfigError::Increment(band.below));
        }
        if !strictly_increasing(self.label_bands.iter().map(|band| band.below)) {
            return Err(ConfigError::UnsortedBands("label"));
        }
        Ok(())
    }
}

fn strictly_increasing(values: impl Iterator<Item = f64>) -> bool {
    let mut previous = f64::NEG_INFINITY;
    for value in values {
        if value <= previous {
            return false;
        }
        previous = value;
    }
    true
}
