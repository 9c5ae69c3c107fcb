//! Generate-and-save flow for the merged book.
//!
//! The orchestrator owns the generation progress overlay. It moves through
//! `idle -> awaiting response -> receiving body -> idle`; replies that arrive
//! in any other stage belong to an abandoned run and are dropped.

use common::replies::GenerationErrorPayload;
use log::{debug, info, warn};
use regex::Regex;

use crate::config::UiConfig;
use crate::effect::Effect;
use crate::i18n::{Language, TextKey};
use crate::progress::{OperationKind, ProgressPresenter, SimulatedSchedule};

/// Head of the answer to `POST /generate`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerateReply {
    Success {
        content_disposition: Option<String>,
    },
    Failed {
        status: u16,
        status_text: String,
        body: String,
    },
}

/// Message and optional detail lines shown for a failed generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationFailure {
    pub message: String,
    pub details: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
enum Stage {
    #[default]
    Idle,
    AwaitingResponse,
    ReceivingBody {
        filename: String,
    },
}

/// Pulls the suggested filename out of a `content-disposition` header.
pub fn filename_from_disposition(header: &str) -> Option<String> {
    if !header.contains("filename") {
        return None;
    }
    let pattern = Regex::new(r#"filename[^;=\n]*=("[^"]*"|'[^']*'|[^;\n]*)"#).ok()?;
    let raw = pattern.captures(header)?.get(1)?.as_str();
    let unquoted: String = raw.chars().filter(|c| *c != '"' && *c != '\'').collect();
    // RFC 5987 form: filename*=UTF-8''my%20book.pdf
    let name = match unquoted
        .strip_prefix("UTF-8")
        .or_else(|| unquoted.strip_prefix("utf-8"))
    {
        Some(encoded) => urlencoding::decode(encoded.trim())
            .map(|decoded| decoded.into_owned())
            .unwrap_or_else(|_| encoded.trim().to_owned()),
        None => unquoted.trim().to_owned(),
    };
    if name.is_empty() {
        None
    } else {
        Some(name)
    }
}

/// Reads the structured error body of a failed generation.
///
/// A body that is not the expected JSON yields `Error {status}: {status_text}`.
/// A structured body without a message yields `unknown_message`.
pub fn parse_generation_error(
    status: u16,
    status_text: &str,
    body: &str,
    unknown_message: &str,
) -> GenerationFailure {
    match serde_json::from_str::<GenerationErrorPayload>(body) {
        Ok(payload) => GenerationFailure {
            message: payload
                .message
                .filter(|message| !message.trim().is_empty())
                .unwrap_or_else(|| unknown_message.to_owned()),
            details: payload
                .details
                .map(|details| details.into_lines())
                .filter(|lines| !lines.is_empty()),
        },
        Err(err) => {
            debug!("generation error body is not structured: {err}");
            let message = if status_text.trim().is_empty() {
                format!("Error {status}")
            } else {
                format!("Error {status}: {}", status_text.trim())
            };
            GenerationFailure {
                message,
                details: None,
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GenerationOrchestrator {
    stage: Stage,
    progress: ProgressPresenter,
}

impl Default for GenerationOrchestrator {
    fn default() -> Self {
        Self::new()
    }
}

impl GenerationOrchestrator {
    pub fn new() -> Self {
        Self {
            stage: Stage::Idle,
            progress: ProgressPresenter::new(OperationKind::Generation),
        }
    }

    pub fn progress(&self) -> &ProgressPresenter {
        &self.progress
    }

    pub fn progress_mut(&mut self) -> &mut ProgressPresenter {
        &mut self.progress
    }

    pub fn is_busy(&self) -> bool {
        self.stage != Stage::Idle
    }

    /// Starts the simulated overlay and issues the generate request.
    pub fn start(
        &mut self,
        config: &UiConfig,
        schedule: &SimulatedSchedule,
        language: Language,
    ) -> Vec<Effect> {
        if self.is_busy() {
            warn!("generation already in progress, ignoring request");
            return Vec::new();
        }
        info!("starting book generation");
        self.stage = Stage::AwaitingResponse;
        let mut effects = self
            .progress
            .start_simulated(schedule, config.tick_interval_ms);
        effects.push(Effect::SendGenerate {
            url: config.endpoints.generate_url(language),
        });
        effects
    }

    pub fn on_response(
        &mut self,
        reply: GenerateReply,
        config: &UiConfig,
        language: Language,
    ) -> Vec<Effect> {
        if self.stage != Stage::AwaitingResponse {
            debug!("dropping generate reply for an abandoned run");
            return Vec::new();
        }
        match reply {
            GenerateReply::Success {
                content_disposition,
            } => {
                let filename = content_disposition
                    .as_deref()
                    .and_then(filename_from_disposition)
                    .unwrap_or_else(|| config.default_filename.clone());
                debug!("generation answered, saving as {filename}");
                self.stage = Stage::ReceivingBody { filename };
                self.progress.begin_completing(TextKey::DownloadProgress)
            }
            GenerateReply::Failed {
                status,
                status_text,
                body,
            } => {
                let failure = parse_generation_error(
                    status,
                    &status_text,
                    &body,
                    language.text(TextKey::UnknownError),
                );
                warn!("generation failed with status {status}: {}", failure.message);
                self.stage = Stage::Idle;
                self.progress.fail(failure.message, failure.details)
            }
        }
    }

    /// The binary body arrived: save it, then show success.
    pub fn on_body(&mut self, bytes: Vec<u8>, config: &UiConfig) -> Vec<Effect> {
        let Stage::ReceivingBody { filename } = std::mem::take(&mut self.stage) else {
            debug!("dropping generated body for an abandoned run");
            return Vec::new();
        };
        info!("book generated: {} bytes as {filename}", bytes.len());
        let mut effects = vec![Effect::SaveBlob { filename, bytes }];
        effects.extend(self.progress.succeed(config.auto_dismiss_ms));
        effects
    }

    /// The request or the body read failed below HTTP.
    pub fn on_transport_failure(&mut self, reason: String, language: Language) -> Vec<Effect> {
        if !self.is_busy() {
            return Vec::new();
        }
        warn!("generation transport failure: {reason}");
        self.stage = Stage::Idle;
        let details = if reason.trim().is_empty() {
            None
        } else {
            Some(vec![reason])
        };
        self.progress
            .fail(language.text(TextKey::ServerUnreachable).to_owned(), details)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::progress::{Phase, ProgressLabel};

    #[test]
    fn filename_forms() {
        assert_eq!(
            filename_from_disposition(r#"attachment; filename="book.pdf""#).as_deref(),
            Some("book.pdf")
        );
        assert_eq!(
            filename_from_disposition("attachment; filename=plain.pdf; size=10").as_deref(),
            Some("plain.pdf")
        );
        assert_eq!(
            filename_from_disposition("attachment; filename*=UTF-8''livre.pdf").as_deref(),
            Some("livre.pdf")
        );
        assert_eq!(filename_from_disposition("attachment"), None);
        assert_eq!(filename_from_disposition(r#"attachment; filename="""#), None);
    }

    #[test]
    fn extended_filename_is_percent_decoded() {
        assert_eq!(
            filename_from_disposition("attachment; filename*=UTF-8''my%20book.pdf").as_deref(),
            Some("my book.pdf")
        );
        assert_eq!(
            filename_from_disposition("attachment; filename*=UTF-8''livre%C3%A9t%C3%A9.pdf")
                .as_deref(),
            Some("livreété.pdf")
        );
        assert_eq!(
            filename_from_disposition(r#"attachment; filename="100%25 done.pdf""#).as_deref(),
            Some("100%25 done.pdf")
        );
    }

    #[test]
    fn unstructured_error_uses_status() {
        let failure = parse_generation_error(502, "Bad Gateway", "<html/>", "Unknown");
        assert_eq!(failure.message, "Error 502: Bad Gateway");
        assert_eq!(failure.details, None);
    }

    #[test]
    fn structured_error_without_message_is_unknown() {
        let failure = parse_generation_error(500, "", r#"{"details":["x"]}"#, "Unknown");
        assert_eq!(failure.message, "Unknown");
        assert_eq!(failure.details, Some(vec!["x".to_owned()]));
    }

    #[test]
    fn start_while_busy_is_ignored() {
        let config = UiConfig::default();
        let schedule = SimulatedSchedule::from_config(&config);
        let mut orchestrator = GenerationOrchestrator::new();

        assert!(!orchestrator.start(&config, &schedule, Language::En).is_empty());
        assert!(orchestrator.start(&config, &schedule, Language::En).is_empty());
    }

    #[test]
    fn save_precedes_success() {
        let config = UiConfig::default();
        let schedule = SimulatedSchedule::from_config(&config);
        let mut orchestrator = GenerationOrchestrator::new();
        orchestrator.start(&config, &schedule, Language::En);
        orchestrator.on_response(
            GenerateReply::Success {
                content_disposition: None,
            },
            &config,
            Language::En,
        );
        let effects = orchestrator.on_body(vec![1, 2, 3], &config);

        assert_eq!(
            effects[0],
            Effect::SaveBlob {
                filename: "book_of_documents.pdf".into(),
                bytes: vec![1, 2, 3]
            }
        );
        assert!(matches!(effects[1], Effect::ScheduleAutoDismiss { .. }));
        assert_eq!(orchestrator.progress().phase(), Phase::Done);
        assert_eq!(orchestrator.progress().state().label, ProgressLabel::Succeeded);
        assert!(!orchestrator.is_busy());
    }

    #[test]
    fn late_body_after_failure_is_dropped() {
        let config = UiConfig::default();
        let mut orchestrator = GenerationOrchestrator::new();
        assert!(orchestrator.on_body(vec![0], &config).is_empty());
        assert!(orchestrator
            .on_transport_failure("offline".into(), Language::Fr)
            .is_empty());
    }
}
