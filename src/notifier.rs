//! Native dialog notifications for submission results.

use fleetsite_core::{Notice, Notifier};
use rfd::{AsyncMessageDialog, MessageButtons, MessageLevel};

/// Shows the submission notice as a modal message box.
#[derive(Debug, Clone, Default)]
pub struct DialogNotifier;

impl Notifier for DialogNotifier {
    async fn notify(&self, notice: &Notice) {
        let level = if notice.is_success() {
            MessageLevel::Info
        } else {
            MessageLevel::Error
        };

        AsyncMessageDialog::new()
            .set_level(level)
            .set_title("Fleetsite")
            .set_description(notice.text())
            .set_buttons(MessageButtons::Ok)
            .show()
            .await;
    }
}
