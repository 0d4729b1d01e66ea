//! The page controller.
//!
//! Owns the state of every page behavior and maps it to the class names
//! of the DOM contract. Constructed once at startup; events only take
//! effect between [`PageController::attach`] and [`PageController::detach`].
//!
//! Renderers usually keep the controller behind a cell that cannot stay
//! borrowed across an await; [`PageHandle`] lets [`submit_contact_form`]
//! borrow it once per step instead.

use crate::config::{ClassNames, SiteConfig};
use crate::error::SubmitError;
use crate::form::ContactForm;
use crate::header::{HeaderScroll, HeaderState};
use crate::menu::{ClickTarget, MenuFlags, MenuState};
use crate::reveal::RevealSet;
use crate::submit::{
    BeginOutcome, Notice, Notifier, SubmissionFlow, SubmitPhase, SubmitReport, Submitter,
};

/// Default label of the submit control.
pub const SUBMIT_LABEL: &str = "Отправить";

#[derive(Debug, Clone)]
pub struct PageController {
    config: SiteConfig,
    attached: bool,
    menu: MenuState,
    header: HeaderScroll,
    reveal: RevealSet<String>,
    form: ContactForm,
    submission: SubmissionFlow,
}

impl PageController {
    pub fn new(config: SiteConfig) -> Self {
        Self::with_submit_label(config, SUBMIT_LABEL)
    }

    pub fn with_submit_label(config: SiteConfig, submit_label: &str) -> Self {
        Self {
            attached: false,
            menu: MenuState::new(),
            header: HeaderScroll::new(),
            reveal: RevealSet::new(config.reveal_threshold),
            form: ContactForm::new(config.messages.clone()),
            submission: SubmissionFlow::new(submit_label, config.submit.busy_label.clone()),
            config,
        }
    }

    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }

    /// Start handling events. Reveal targets are accepted from here on,
    /// as each one is registered through [`PageController::observe`].
    pub fn attach(&mut self) {
        if !self.attached {
            tracing::debug!("Page controller attached");
        }
        self.attached = true;
    }

    /// Stop handling events: drop reveal observations and return the menu
    /// and header to their neutral state.
    pub fn detach(&mut self) {
        if !self.attached {
            return;
        }
        self.reveal.disconnect();
        self.menu.close();
        self.header.reset();
        self.attached = false;
        tracing::debug!("Page controller detached");
    }

    // === Navigation ===

    pub fn menu_flags(&self) -> MenuFlags {
        self.menu.flags()
    }

    pub fn toggle_menu(&mut self) -> MenuFlags {
        if self.attached {
            self.menu.toggle();
        }
        self.menu.flags()
    }

    pub fn document_click(&mut self, target: ClickTarget) -> MenuFlags {
        if self.attached {
            self.menu.document_click(target);
        }
        self.menu.flags()
    }

    pub fn menu_link_click(&mut self) -> MenuFlags {
        if self.attached {
            self.menu.link_click();
        }
        self.menu.flags()
    }

    // === Header ===

    pub fn scroll(&mut self, offset: f64) -> HeaderState {
        if self.attached {
            self.header.on_scroll(offset);
        }
        self.header.state()
    }

    pub fn header_state(&self) -> HeaderState {
        self.header.state()
    }

    // === Reveal ===

    /// Register a reveal target. Only elements carrying one of the
    /// configured reveal classes are accepted.
    pub fn observe(&mut self, id: impl Into<String>, class: &str) -> bool {
        if !self.attached || !self.config.is_reveal_target(class) {
            return false;
        }
        self.reveal.observe(id.into())
    }

    pub fn intersection(&mut self, id: &str, ratio: f64) -> bool {
        self.attached && self.reveal.on_intersection(&id.to_string(), ratio)
    }

    pub fn is_revealed(&self, id: &str) -> bool {
        self.reveal.is_revealed(&id.to_string())
    }

    /// Ids still waiting to be revealed.
    pub fn pending_reveals(&self) -> Vec<String> {
        self.reveal.pending().cloned().collect()
    }

    // === Contact form ===

    pub fn form(&self) -> &ContactForm {
        &self.form
    }

    pub fn field_input(&mut self, name: &str, value: impl Into<String>) -> Option<bool> {
        if !self.attached {
            return None;
        }
        self.form.input(name, value)
    }

    pub fn field_blur(&mut self, name: &str) -> Option<bool> {
        if !self.attached {
            return None;
        }
        self.form.blur(name)
    }

    pub fn submission(&self) -> &SubmissionFlow {
        &self.submission
    }

    /// Submit trigger. A detached controller never starts a submission.
    pub fn begin_submit(&mut self) -> BeginOutcome {
        if !self.attached {
            return BeginOutcome::Blocked;
        }
        self.submission.begin(&mut self.form)
    }

    /// The notice to show for a resolved submission.
    pub fn notice_for(&self, outcome: &Result<(), SubmitError>) -> Notice {
        Notice::for_outcome(outcome, &self.config.messages)
    }

    /// Complete a pending submission. Runs even when detached so that a
    /// control disabled before detaching is always restored.
    pub fn finish_submit(&mut self, outcome: &Result<(), SubmitError>) -> SubmitPhase {
        self.submission.finish(&mut self.form, outcome)
    }

    // === Class names ===

    fn classes(&self) -> &ClassNames {
        &self.config.classes
    }

    pub fn menu_control_class(&self) -> String {
        with_marker(
            &self.classes().menu_control,
            self.menu.flags().control_active,
            &self.classes().active,
        )
    }

    pub fn menu_panel_class(&self) -> String {
        with_marker(
            &self.classes().menu_panel,
            self.menu.flags().panel_active,
            &self.classes().active,
        )
    }

    /// Class of the page root; carries the scroll lock while the menu is open.
    pub fn page_class(&self) -> String {
        with_marker(
            &self.classes().page_root,
            self.menu.flags().scroll_locked,
            &self.classes().scroll_lock,
        )
    }

    pub fn header_class(&self) -> String {
        let classes = self.classes();
        match self.header.state() {
            HeaderState::Neutral => classes.header.clone(),
            HeaderState::Hidden => format!("{} {}", classes.header, classes.header_hidden),
            HeaderState::Shown => format!("{} {}", classes.header, classes.header_shown),
        }
    }

    pub fn reveal_class(&self, id: &str, base: &str) -> String {
        with_marker(base, self.is_revealed(id), &self.classes().revealed)
    }

    /// Class of a form field, with the error marker when invalid.
    pub fn field_class(&self, name: &str, base: &str) -> String {
        let invalid = self
            .form
            .field(name)
            .is_some_and(|f| f.is_marked_invalid());
        with_marker(base, invalid, &self.classes().field_error)
    }
}

/// Short-lived access to a [`PageController`].
pub trait PageHandle {
    fn with_page<R>(&mut self, f: impl FnOnce(&mut PageController) -> R) -> R;
}

impl PageHandle for PageController {
    fn with_page<R>(&mut self, f: impl FnOnce(&mut PageController) -> R) -> R {
        f(self)
    }
}

/// Run one submit trigger end to end: validate, submit, notify, restore.
///
/// The controller is only borrowed between awaits. The notification is
/// shown while the control is still busy, and the form is reset once it
/// has been acknowledged.
pub async fn submit_contact_form<H, S, N>(
    page: &mut H,
    submitter: &S,
    notifier: &N,
) -> SubmitReport
where
    H: PageHandle,
    S: Submitter,
    N: Notifier,
{
    let record = match page.with_page(|p| p.begin_submit()) {
        BeginOutcome::Blocked => return SubmitReport::Blocked,
        BeginOutcome::Busy => return SubmitReport::Busy,
        BeginOutcome::Started(record) => record,
    };

    tracing::info!(fields = record.len(), "Submitting contact form");
    let outcome = submitter.submit(record).await;
    let notice = page.with_page(|p| p.notice_for(&outcome));
    notifier.notify(&notice).await;
    let phase = page.with_page(|p| p.finish_submit(&outcome));

    SubmitReport::Completed { phase, notice }
}

fn with_marker(base: &str, on: bool, marker: &str) -> String {
    if on {
        format!("{} {}", base, marker)
    } else {
        base.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn attached() -> PageController {
        let mut page = PageController::new(SiteConfig::default());
        page.attach();
        page
    }

    #[test]
    fn detached_controller_ignores_events() {
        let mut page = PageController::new(SiteConfig::default());
        assert_eq!(page.toggle_menu(), MenuFlags::default());
        assert_eq!(page.scroll(100.0), HeaderState::Neutral);
        assert!(!page.observe("fleet-0", "fleet-card"));
        assert_eq!(page.field_input("name", "Иван"), None);
        assert_eq!(page.begin_submit(), BeginOutcome::Blocked);
    }

    #[test]
    fn menu_classes_follow_state() {
        let mut page = attached();
        assert_eq!(page.menu_control_class(), "burger-button");
        assert_eq!(page.page_class(), "page");

        page.toggle_menu();
        assert_eq!(page.menu_control_class(), "burger-button active");
        assert_eq!(page.menu_panel_class(), "nav-links active");
        assert_eq!(page.page_class(), "page scroll-locked");

        page.document_click(ClickTarget::Outside);
        assert_eq!(page.menu_panel_class(), "nav-links");
    }

    #[test]
    fn page_root_class_comes_from_config() {
        let mut config = SiteConfig::default();
        config.classes.page_root = "site".to_string();
        config.classes.scroll_lock = "no-scroll".to_string();
        let mut page = PageController::new(config);
        page.attach();

        assert_eq!(page.page_class(), "site");
        page.toggle_menu();
        assert_eq!(page.page_class(), "site no-scroll");
    }

    #[test]
    fn reveal_targets_register_while_attached() {
        let mut page = PageController::new(SiteConfig::default());
        assert!(!page.observe("svc-0", "service-card"));
        assert!(page.pending_reveals().is_empty());

        page.attach();
        assert!(page.observe("svc-0", "service-card"));
        assert_eq!(page.pending_reveals(), vec!["svc-0".to_string()]);

        page.detach();
        assert!(!page.observe("svc-1", "service-card"));
        assert!(page.pending_reveals().is_empty());
    }

    #[test]
    fn header_classes_follow_scroll() {
        let mut page = attached();
        page.scroll(0.0);
        assert_eq!(page.header_class(), "header");
        page.scroll(50.0);
        assert_eq!(page.header_class(), "header scroll-down");
        page.scroll(30.0);
        assert_eq!(page.header_class(), "header scroll-up");
    }

    #[test]
    fn only_configured_classes_are_observed() {
        let mut page = attached();
        assert!(page.observe("svc-0", "service-card"));
        assert!(!page.observe("hero", "hero"));

        assert!(page.intersection("svc-0", 0.2));
        assert_eq!(page.reveal_class("svc-0", "service-card"), "service-card animate");
        assert!(!page.intersection("svc-0", 0.9));
    }

    #[test]
    fn detach_restores_neutral_state() {
        let mut page = attached();
        page.toggle_menu();
        page.scroll(120.0);
        page.observe("stat-0", "stat-item");

        page.detach();
        assert!(!page.is_attached());
        assert_eq!(page.menu_flags(), MenuFlags::default());
        assert_eq!(page.header_state(), HeaderState::Neutral);
        assert!(page.pending_reveals().is_empty());
    }

    #[test]
    fn field_class_marks_errors() {
        let mut page = attached();
        page.field_input("email", "nope");
        assert_eq!(page.field_class("email", "form-input"), "form-input error");
        page.field_input("email", "yes@example.com");
        assert_eq!(page.field_class("email", "form-input"), "form-input");
    }
}
