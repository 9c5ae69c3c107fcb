//! Page-level configuration.
//!
//! The host page may embed overrides as
//! `<script id="workspace-config" type="application/json">{...}</script>`.
//! Anything missing or invalid falls back to the built-in defaults.

use controller::UiConfig;
use log::{info, warn};

pub const CONFIG_ELEMENT_ID: &str = "workspace-config";

pub fn load_page_config() -> UiConfig {
    let raw = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|element| element.text_content());
    parse_page_config(raw.as_deref())
}

pub fn parse_page_config(raw: Option<&str>) -> UiConfig {
    match raw.map(str::trim).filter(|raw| !raw.is_empty()) {
        None => UiConfig::default(),
        Some(raw) => match UiConfig::from_json(raw) {
            Ok(config) => {
                info!("using page configuration overrides");
                config
            }
            Err(err) => {
                warn!("ignoring page configuration: {err}");
                UiConfig::default()
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn missing_or_blank_config_uses_defaults() {
        assert_eq!(parse_page_config(None), UiConfig::default());
        assert_eq!(parse_page_config(Some("  \n")), UiConfig::default());
    }

    #[test]
    fn invalid_config_uses_defaults() {
        assert_eq!(parse_page_config(Some("{not json")), UiConfig::default());
        assert_eq!(
            parse_page_config(Some(r#"{"tick_interval_ms": 0}"#)),
            UiConfig::default()
        );
    }

    #[test]
    fn overrides_are_applied() {
        let config = parse_page_config(Some(r#"{"auto_dismiss_ms": 8000}"#));
        assert_eq!(config.auto_dismiss_ms, 8000);
    }
}
