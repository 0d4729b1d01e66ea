//! Contact form submission.
//!
//! ```text
//! Idle -> Validating -> Blocked -> Idle
//!                    -> Submitting -> Succeeded | Failed -> Idle
//! ```
//!
//! [`SubmissionFlow::begin`] and [`SubmissionFlow::finish`] are the two
//! synchronous halves around the single await point, so UI glue can hold
//! the form state only while it is not suspended.
//! [`crate::submit_contact_form`] runs the whole sequence over a
//! [`crate::PageController`].

use std::future::Future;
use std::time::Duration;

use crate::config::{Messages, SubmitConfig};
use crate::error::SubmitError;
use crate::form::{ContactForm, FormRecord};

/// Where the submission state machine currently stands.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmitPhase {
    #[default]
    Idle,
    Validating,
    Blocked,
    Submitting,
    Succeeded,
    Failed,
}

/// Endpoint that receives a validated form record.
pub trait Submitter {
    fn submit(&self, record: FormRecord) -> impl Future<Output = Result<(), SubmitError>>;
}

/// Blocking, modal notification of a submission outcome.
pub trait Notifier {
    fn notify(&self, notice: &Notice) -> impl Future<Output = ()>;
}

/// Stand-in endpoint: waits a fixed delay and never transmits anything.
#[derive(Debug, Clone)]
pub struct SimulatedSubmitter {
    delay: Duration,
    fail: bool,
}

impl SimulatedSubmitter {
    pub fn new(delay: Duration) -> Self {
        Self { delay, fail: false }
    }

    /// Make every submission resolve to a transport error.
    pub fn failing(mut self) -> Self {
        self.fail = true;
        self
    }

    pub fn from_config(config: &SubmitConfig) -> Self {
        let submitter = Self::new(config.delay());
        if config.simulate_failure {
            submitter.failing()
        } else {
            submitter
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

impl Submitter for SimulatedSubmitter {
    async fn submit(&self, record: FormRecord) -> Result<(), SubmitError> {
        tracing::debug!(
            fields = record.len(),
            delay_ms = self.delay.as_millis() as u64,
            "Simulating submission"
        );
        tokio::time::sleep(self.delay).await;
        if self.fail {
            Err(SubmitError::Transport("simulated failure".to_string()))
        } else {
            Ok(())
        }
    }
}

/// Notification shown once a submission resolves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Success(String),
    Failure(String),
}

impl Notice {
    pub fn for_outcome(outcome: &Result<(), SubmitError>, messages: &Messages) -> Self {
        match outcome {
            Ok(()) => Self::Success(messages.submit_success.clone()),
            Err(_) => Self::Failure(messages.submit_failure.clone()),
        }
    }

    pub fn text(&self) -> &str {
        match self {
            Self::Success(text) | Self::Failure(text) => text,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }
}

/// The form's submit button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitControl {
    label: String,
    original_label: String,
    disabled: bool,
}

impl SubmitControl {
    pub fn new(label: impl Into<String>) -> Self {
        let label = label.into();
        Self {
            original_label: label.clone(),
            label,
            disabled: false,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    fn mark_busy(&mut self, busy_label: &str) {
        self.label = busy_label.to_string();
        self.disabled = true;
    }

    fn restore(&mut self) {
        self.label.clone_from(&self.original_label);
        self.disabled = false;
    }
}

/// Result of a submit trigger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BeginOutcome {
    /// At least one field failed validation
    Blocked,
    /// A submission is already pending
    Busy,
    /// Validation passed; hand the record to a [`Submitter`]
    Started(FormRecord),
}

/// Submission state machine plus the submit control it drives.
#[derive(Debug, Clone)]
pub struct SubmissionFlow {
    phase: SubmitPhase,
    control: SubmitControl,
    busy_label: String,
}

impl SubmissionFlow {
    pub fn new(control_label: impl Into<String>, busy_label: impl Into<String>) -> Self {
        Self {
            phase: SubmitPhase::Idle,
            control: SubmitControl::new(control_label),
            busy_label: busy_label.into(),
        }
    }

    pub fn phase(&self) -> SubmitPhase {
        self.phase
    }

    pub fn control(&self) -> &SubmitControl {
        &self.control
    }

    pub fn is_pending(&self) -> bool {
        self.phase == SubmitPhase::Submitting
    }

    /// Submit trigger: validate every field and, if all pass, go busy.
    pub fn begin(&mut self, form: &mut ContactForm) -> BeginOutcome {
        if self.is_pending() {
            tracing::debug!("Submit ignored, submission pending");
            return BeginOutcome::Busy;
        }

        self.phase = SubmitPhase::Validating;
        if !form.validate_all() {
            self.phase = SubmitPhase::Blocked;
            tracing::debug!("Submit blocked by invalid fields");
            self.phase = SubmitPhase::Idle;
            return BeginOutcome::Blocked;
        }

        self.phase = SubmitPhase::Submitting;
        self.control.mark_busy(&self.busy_label);
        BeginOutcome::Started(form.record())
    }

    /// Apply the submitter's outcome. Restores the control in every case
    /// and resets the form on success. Returns the terminal phase.
    pub fn finish(
        &mut self,
        form: &mut ContactForm,
        outcome: &Result<(), SubmitError>,
    ) -> SubmitPhase {
        let terminal = match outcome {
            Ok(()) => {
                form.reset();
                tracing::info!("Contact form submitted");
                SubmitPhase::Succeeded
            }
            Err(e) => {
                tracing::warn!(error = %e, "Contact form submission failed");
                SubmitPhase::Failed
            }
        };
        self.phase = terminal;
        self.control.restore();
        self.phase = SubmitPhase::Idle;
        terminal
    }
}

/// What [`crate::submit_contact_form`] did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitReport {
    Blocked,
    Busy,
    Completed { phase: SubmitPhase, notice: Notice },
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> ContactForm {
        let mut form = ContactForm::new(Messages::default());
        form.input("name", "Ольга");
        form.input("email", "olga@example.com");
        form.input("message", "Нужен трансфер на двоих");
        form
    }

    #[test]
    fn begin_blocks_on_invalid_form() {
        let mut flow = SubmissionFlow::new("Отправить", "Отправка...");
        let mut form = ContactForm::new(Messages::default());

        assert_eq!(flow.begin(&mut form), BeginOutcome::Blocked);
        assert_eq!(flow.phase(), SubmitPhase::Idle);
        assert!(!flow.control().is_disabled());
        assert_eq!(flow.control().label(), "Отправить");
    }

    #[test]
    fn begin_marks_control_busy() {
        let mut flow = SubmissionFlow::new("Отправить", "Отправка...");
        let mut form = valid_form();

        let BeginOutcome::Started(record) = flow.begin(&mut form) else {
            panic!("expected submission to start");
        };
        assert_eq!(record.get("name"), Some("Ольга"));
        assert_eq!(record.get("phone"), Some(""));
        assert_eq!(flow.phase(), SubmitPhase::Submitting);
        assert!(flow.control().is_disabled());
        assert_eq!(flow.control().label(), "Отправка...");
    }

    #[test]
    fn second_trigger_while_pending_is_ignored() {
        let mut flow = SubmissionFlow::new("Отправить", "Отправка...");
        let mut form = valid_form();
        assert!(matches!(flow.begin(&mut form), BeginOutcome::Started(_)));
        assert_eq!(flow.begin(&mut form), BeginOutcome::Busy);
    }

    #[test]
    fn finish_restores_control_on_failure_and_keeps_values() {
        let mut flow = SubmissionFlow::new("Отправить", "Отправка...");
        let mut form = valid_form();
        flow.begin(&mut form);

        let outcome = Err(SubmitError::Transport("offline".to_string()));
        assert_eq!(flow.finish(&mut form, &outcome), SubmitPhase::Failed);
        assert_eq!(flow.phase(), SubmitPhase::Idle);
        assert!(!flow.control().is_disabled());
        assert_eq!(flow.control().label(), "Отправить");
        assert_eq!(form.field("name").unwrap().value(), "Ольга");
    }

    #[test]
    fn finish_resets_form_on_success() {
        let mut flow = SubmissionFlow::new("Отправить", "Отправка...");
        let mut form = valid_form();
        flow.begin(&mut form);

        assert_eq!(flow.finish(&mut form, &Ok(())), SubmitPhase::Succeeded);
        assert!(form.fields().iter().all(|f| f.value().is_empty()));
        assert_eq!(flow.control().label(), "Отправить");
    }

    #[test]
    fn notice_text_follows_outcome() {
        let messages = Messages::default();
        let ok = Notice::for_outcome(&Ok(()), &messages);
        assert!(ok.is_success());
        assert_eq!(ok.text(), messages.submit_success);

        let err = Notice::for_outcome(&Err(SubmitError::Rejected("spam".into())), &messages);
        assert!(!err.is_success());
        assert_eq!(err.text(), messages.submit_failure);
    }

    #[test]
    fn simulated_submitter_from_config() {
        let mut config = SubmitConfig::default();
        assert_eq!(
            SimulatedSubmitter::from_config(&config).delay(),
            Duration::from_millis(1500)
        );
        config.simulate_failure = true;
        assert!(SimulatedSubmitter::from_config(&config).fail);
    }
}
