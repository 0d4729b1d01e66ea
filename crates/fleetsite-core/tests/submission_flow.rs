//! Submission flow tests
//!
//! Run on tokio's paused clock so the simulated latency can be stepped
//! through deterministically.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

use fleetsite_core::{
    submit_contact_form, BeginOutcome, FormRecord, Notice, Notifier, PageController, PageHandle,
    SimulatedSubmitter, SiteConfig, SubmitError, SubmitPhase, SubmitReport, Submitter,
};

// ============================================================================
// Test doubles
// ============================================================================

/// Submitter that records what it was given and resolves immediately.
#[derive(Default)]
struct RecordingSubmitter {
    calls: Cell<usize>,
    last: RefCell<Option<FormRecord>>,
    fail: bool,
}

impl Submitter for RecordingSubmitter {
    async fn submit(&self, record: FormRecord) -> Result<(), SubmitError> {
        self.calls.set(self.calls.get() + 1);
        *self.last.borrow_mut() = Some(record);
        if self.fail {
            Err(SubmitError::Rejected("test".to_string()))
        } else {
            Ok(())
        }
    }
}

#[derive(Default)]
struct RecordingNotifier {
    notices: RefCell<Vec<Notice>>,
}

impl Notifier for RecordingNotifier {
    async fn notify(&self, notice: &Notice) {
        self.notices.borrow_mut().push(notice.clone());
    }
}

/// Controller shared the way a renderer shares it: borrowed per step.
#[derive(Clone)]
struct SharedPage(Rc<RefCell<PageController>>);

impl PageHandle for SharedPage {
    fn with_page<R>(&mut self, f: impl FnOnce(&mut PageController) -> R) -> R {
        f(&mut self.0.borrow_mut())
    }
}

/// Notifier that snapshots the page while the notice is on screen.
struct SnapshotNotifier {
    page: SharedPage,
    seen: RefCell<Vec<(bool, String)>>,
}

impl Notifier for SnapshotNotifier {
    async fn notify(&self, _notice: &Notice) {
        let page = self.page.0.borrow();
        let busy = page.submission().control().is_disabled();
        let email = page.form().field("email").unwrap().value().to_string();
        self.seen.borrow_mut().push((busy, email));
    }
}

fn filled_page() -> PageController {
    let mut page = PageController::new(SiteConfig::default());
    page.attach();
    page.field_input("name", "Мария-Луиза");
    page.field_input("email", "maria@example.com");
    page.field_input("phone", "89991234567");
    page.field_input("message", "Интересует аренда самолёта на выходные");
    page
}

// ============================================================================
// Blocked submissions
// ============================================================================

#[tokio::test]
async fn invalid_form_never_reaches_submitter() {
    let mut page = PageController::new(SiteConfig::default());
    page.attach();
    page.field_input("name", "Ли");
    page.field_input("email", "li@example.com");
    page.field_input("message", "коротко");

    let submitter = RecordingSubmitter::default();
    let notifier = RecordingNotifier::default();

    let report = submit_contact_form(&mut page, &submitter, &notifier).await;

    assert_eq!(report, SubmitReport::Blocked);
    assert_eq!(submitter.calls.get(), 0);
    assert!(notifier.notices.borrow().is_empty());
    assert!(page.form().field("message").unwrap().error_node().is_displayed());
    assert_eq!(page.form().field("name").unwrap().value(), "Ли");
}

#[tokio::test]
async fn detached_page_never_submits() {
    let mut page = filled_page();
    page.detach();

    let submitter = RecordingSubmitter::default();
    let notifier = RecordingNotifier::default();

    let report = submit_contact_form(&mut page, &submitter, &notifier).await;

    assert_eq!(report, SubmitReport::Blocked);
    assert_eq!(submitter.calls.get(), 0);
}

#[tokio::test]
async fn invalid_optional_phone_blocks_submission() {
    let mut page = filled_page();
    page.field_input("phone", "12345");

    assert_eq!(page.begin_submit(), BeginOutcome::Blocked);
    assert!(!page.submission().control().is_disabled());
    assert!(page.form().field("phone").unwrap().is_marked_invalid());
}

// ============================================================================
// Successful submissions
// ============================================================================

#[tokio::test]
async fn success_notifies_and_clears_form() {
    let config = SiteConfig::default();
    let mut page = PageController::new(config.clone());
    page.attach();
    page.field_input("name", "Анна");
    page.field_input("email", "anna@example.com");
    page.field_input("message", "Хотим лететь в Сочи");

    let submitter = RecordingSubmitter::default();
    let notifier = RecordingNotifier::default();

    let report = submit_contact_form(&mut page, &submitter, &notifier).await;

    let SubmitReport::Completed { phase, notice } = report else {
        panic!("expected completed submission, got {report:?}");
    };
    assert_eq!(phase, SubmitPhase::Succeeded);
    assert_eq!(notice.text(), config.messages.submit_success);
    assert_eq!(notifier.notices.borrow().len(), 1);

    let sent = submitter.last.borrow().clone().unwrap();
    assert_eq!(sent.get("name"), Some("Анна"));
    assert_eq!(sent.get("phone"), Some(""));

    let form = page.form();
    assert!(form.fields().iter().all(|f| f.value().is_empty()));
    assert!(form.fields().iter().all(|f| !f.error_node().is_displayed()));
    assert!(!page.submission().control().is_disabled());
    assert_eq!(page.submission().control().label(), "Отправить");
}

#[tokio::test]
async fn notice_is_shown_before_the_form_resets() {
    let mut handle = SharedPage(Rc::new(RefCell::new(filled_page())));
    let submitter = RecordingSubmitter::default();
    let notifier = SnapshotNotifier {
        page: handle.clone(),
        seen: RefCell::new(Vec::new()),
    };

    submit_contact_form(&mut handle, &submitter, &notifier).await;

    // still busy and still filled while the notice is up
    assert_eq!(
        notifier.seen.borrow().as_slice(),
        &[(true, "maria@example.com".to_string())]
    );
    let page = handle.0.borrow();
    assert!(!page.submission().control().is_disabled());
    assert_eq!(page.form().field("email").unwrap().value(), "");
}

#[tokio::test(start_paused = true)]
async fn shared_page_is_busy_while_submission_is_pending() {
    let shared = SharedPage(Rc::new(RefCell::new(filled_page())));
    let submitter = SimulatedSubmitter::new(Duration::from_millis(1500));
    let notifier = RecordingNotifier::default();

    let mut handle = shared.clone();
    let run = submit_contact_form(&mut handle, &submitter, &notifier);
    tokio::pin!(run);

    assert!(futures::poll!(&mut run).is_pending());
    {
        let page = shared.0.borrow();
        assert!(page.submission().control().is_disabled());
        assert_eq!(page.submission().control().label(), "Отправка...");
    }

    // a second trigger during the wait is ignored
    let mut second = shared.clone();
    let report = submit_contact_form(&mut second, &submitter, &notifier).await;
    assert_eq!(report, SubmitReport::Busy);

    tokio::time::advance(Duration::from_millis(1500)).await;
    let report = match futures::poll!(&mut run) {
        std::task::Poll::Ready(report) => report,
        std::task::Poll::Pending => panic!("submission still pending after delay"),
    };
    assert!(matches!(
        report,
        SubmitReport::Completed {
            phase: SubmitPhase::Succeeded,
            ..
        }
    ));
    assert!(!shared.0.borrow().submission().control().is_disabled());
    assert_eq!(notifier.notices.borrow().len(), 1);
}

#[tokio::test(start_paused = true)]
async fn control_is_busy_for_the_whole_delay() {
    let mut page = filled_page();
    let submitter = SimulatedSubmitter::from_config(&page.config().submit);

    let BeginOutcome::Started(record) = page.begin_submit() else {
        panic!("expected submission to start");
    };
    assert!(page.submission().control().is_disabled());
    assert_eq!(page.submission().control().label(), "Отправка...");
    assert_eq!(page.submission().phase(), SubmitPhase::Submitting);

    let pending = submitter.submit(record);
    tokio::pin!(pending);

    assert!(futures::poll!(&mut pending).is_pending());
    tokio::time::advance(Duration::from_millis(1499)).await;
    assert!(futures::poll!(&mut pending).is_pending());
    assert!(page.submission().control().is_disabled());

    tokio::time::advance(Duration::from_millis(1)).await;
    let outcome = match futures::poll!(&mut pending) {
        std::task::Poll::Ready(outcome) => outcome,
        std::task::Poll::Pending => panic!("submission still pending after delay"),
    };

    assert_eq!(page.finish_submit(&outcome), SubmitPhase::Succeeded);
    assert!(!page.submission().control().is_disabled());
    assert_eq!(page.submission().control().label(), "Отправить");
    assert_eq!(page.form().field("email").unwrap().value(), "");
}

#[tokio::test(start_paused = true)]
async fn simulated_delay_is_fixed() {
    let submitter = SimulatedSubmitter::new(Duration::from_millis(1500));
    let start = tokio::time::Instant::now();
    submitter.submit(FormRecord::default()).await.unwrap();
    assert!(start.elapsed() >= Duration::from_millis(1500));
}

#[tokio::test]
async fn resubmit_while_pending_is_ignored() {
    let mut page = filled_page();
    assert!(matches!(page.begin_submit(), BeginOutcome::Started(_)));
    assert_eq!(page.begin_submit(), BeginOutcome::Busy);

    page.finish_submit(&Ok(()));
    // fields were cleared by the success, so the next trigger is blocked
    assert_eq!(page.begin_submit(), BeginOutcome::Blocked);
}

// ============================================================================
// Failed submissions
// ============================================================================

#[tokio::test(start_paused = true)]
async fn failure_notifies_and_restores_control() {
    let mut page = filled_page();
    let config = page.config().clone();
    let submitter = SimulatedSubmitter::from_config(&config.submit).failing();

    let BeginOutcome::Started(record) = page.begin_submit() else {
        panic!("expected submission to start");
    };
    let outcome = submitter.submit(record).await;
    assert!(matches!(outcome, Err(SubmitError::Transport(_))));

    let notice = page.notice_for(&outcome);
    assert!(!notice.is_success());
    assert_eq!(notice.text(), config.messages.submit_failure);

    assert_eq!(page.finish_submit(&outcome), SubmitPhase::Failed);
    assert!(!page.submission().control().is_disabled());
    assert_eq!(page.submission().control().label(), "Отправить");
    // values survive a failure so the user can retry
    assert_eq!(
        page.form().field("email").unwrap().value(),
        "maria@example.com"
    );
}

#[tokio::test]
async fn rejected_submission_reports_failure() {
    let config = SiteConfig::default();
    let mut page = PageController::new(config.clone());
    page.attach();
    page.field_input("name", "Олег");
    page.field_input("email", "oleg@example.com");
    page.field_input("message", "Нужна консультация");

    let submitter = RecordingSubmitter {
        fail: true,
        ..Default::default()
    };
    let notifier = RecordingNotifier::default();

    let report = submit_contact_form(&mut page, &submitter, &notifier).await;

    assert!(matches!(
        report,
        SubmitReport::Completed {
            phase: SubmitPhase::Failed,
            ..
        }
    ));
    assert_eq!(
        notifier.notices.borrow()[0],
        Notice::Failure(config.messages.submit_failure.clone())
    );
    assert_eq!(page.submission().phase(), SubmitPhase::Idle);
    assert!(!page.submission().control().is_disabled());
    assert_eq!(page.form().field("name").unwrap().value(), "Олег");
}
