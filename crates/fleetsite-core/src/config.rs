//! Site configuration.
//!
//! Every field has a default matching the production page, so an empty
//! JSON object (or no file at all) yields a working configuration.
//!
//! ```json
//! {
//!   "submit": { "delay_ms": 800, "simulate_failure": true },
//!   "logging": { "filter": "fleetsite=debug", "journal_dir": "./logs" }
//! }
//! ```

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{SiteError, SiteResult};

/// Root configuration for the page behaviors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub classes: ClassNames,
    /// Class names of the elements animated on first appearance
    pub reveal_selectors: Vec<String>,
    /// Fraction of an element that must be visible before it is revealed
    pub reveal_threshold: f64,
    pub submit: SubmitConfig,
    pub messages: Messages,
    pub logging: LoggingConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            classes: ClassNames::default(),
            reveal_selectors: vec![
                "service-card".to_string(),
                "fleet-card".to_string(),
                "stat-item".to_string(),
            ],
            reveal_threshold: 0.1,
            submit: SubmitConfig::default(),
            messages: Messages::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Load and validate a configuration file.
    pub fn load(path: impl AsRef<Path>) -> SiteResult<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)?;
        let config: SiteConfig = serde_json::from_str(&raw)?;
        config.validate()?;
        tracing::debug!(path = %path.display(), "Loaded site config");
        Ok(config)
    }

    /// Load `path` when given and present, otherwise fall back to defaults.
    ///
    /// A file that exists but fails to parse or validate is still an error.
    pub fn load_or_default(path: Option<&Path>) -> SiteResult<Self> {
        match path {
            Some(path) if path.exists() => Self::load(path),
            Some(path) => {
                tracing::info!(path = %path.display(), "No config file, using defaults");
                Ok(Self::default())
            }
            None => Ok(Self::default()),
        }
    }

    /// Check value ranges that serde cannot express.
    pub fn validate(&self) -> SiteResult<()> {
        if !(self.reveal_threshold > 0.0 && self.reveal_threshold <= 1.0) {
            return Err(SiteError::Config(format!(
                "reveal_threshold must be in (0, 1], got {}",
                self.reveal_threshold
            )));
        }
        if self.reveal_selectors.is_empty() {
            return Err(SiteError::Config(
                "reveal_selectors must name at least one class".to_string(),
            ));
        }
        if self.submit.busy_label.trim().is_empty() {
            return Err(SiteError::Config("submit.busy_label is empty".to_string()));
        }
        Ok(())
    }

    /// Whether `class` is one of the reveal targets.
    pub fn is_reveal_target(&self, class: &str) -> bool {
        self.reveal_selectors.iter().any(|s| s == class)
    }
}

/// Class names making up the page's DOM contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassNames {
    pub menu_control: String,
    pub menu_panel: String,
    pub active: String,
    /// The scrolling page root
    pub page_root: String,
    /// Applied to the page root while the menu is open
    pub scroll_lock: String,
    pub header: String,
    pub header_hidden: String,
    pub header_shown: String,
    pub form: String,
    pub field_error: String,
    pub error_message: String,
    pub submit: String,
    pub revealed: String,
}

impl Default for ClassNames {
    fn default() -> Self {
        Self {
            menu_control: "burger-button".to_string(),
            menu_panel: "nav-links".to_string(),
            active: "active".to_string(),
            page_root: "page".to_string(),
            scroll_lock: "scroll-locked".to_string(),
            header: "header".to_string(),
            header_hidden: "scroll-down".to_string(),
            header_shown: "scroll-up".to_string(),
            form: "contact-form".to_string(),
            field_error: "error".to_string(),
            error_message: "error-message".to_string(),
            submit: "submit-button".to_string(),
            revealed: "animate".to_string(),
        }
    }
}

/// Submission behavior.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SubmitConfig {
    /// Simulated network latency in milliseconds
    pub delay_ms: u64,
    /// Make the simulated endpoint fail every submission
    pub simulate_failure: bool,
    /// Label shown on the submit control while a submission is pending
    pub busy_label: String,
}

impl Default for SubmitConfig {
    fn default() -> Self {
        Self {
            delay_ms: 1500,
            simulate_failure: false,
            busy_label: "Отправка...".to_string(),
        }
    }
}

impl SubmitConfig {
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }
}

/// User-facing strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Messages {
    pub invalid_name: String,
    pub invalid_email: String,
    pub invalid_phone: String,
    pub invalid_message: String,
    pub submit_success: String,
    pub submit_failure: String,
}

impl Default for Messages {
    fn default() -> Self {
        Self {
            invalid_name: "Введите корректное имя (минимум 2 символа, только буквы)".to_string(),
            invalid_email: "Введите корректный email адрес".to_string(),
            invalid_phone: "Введите корректный номер телефона".to_string(),
            invalid_message: "Сообщение должно содержать минимум 10 символов".to_string(),
            submit_success: "Спасибо за ваше сообщение! Мы свяжемся с вами в ближайшее время."
                .to_string(),
            submit_failure:
                "Извините, произошла ошибка при отправке сообщения. Пожалуйста, попробуйте еще раз."
                    .to_string(),
        }
    }
}

/// Logging setup, see [`crate::logging::init_logging`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `EnvFilter` directive; `RUST_LOG` wins when unset
    pub filter: Option<String>,
    /// Directory for the JSONL interaction journal; disabled when unset
    pub journal_dir: Option<PathBuf>,
}
