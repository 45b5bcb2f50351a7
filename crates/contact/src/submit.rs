use std::sync::Arc;

use getdev_notification::{MailError, Mailer};

use crate::{ContactSubmission, Notice};

/// Sends one message for `submission` to `recipient` and reports the outcome
/// as a notice. Mail failures are logged and never returned to the caller.
pub async fn submit(
    mailer: Arc<dyn Mailer>,
    recipient: &str,
    submission: &ContactSubmission,
) -> Notice {
    let message = submission.to_message(recipient);
    let subject = message.subject.clone();

    let result = tokio::task::spawn_blocking(move || mailer.send(&message))
        .await
        .unwrap_or_else(|err| Err(MailError::Aborted(err.to_string())));

    match result {
        Ok(()) => {
            tracing::info!(subject = %subject, "Contact form submission sent");
            Notice::success()
        }
        Err(err) => {
            tracing::error!(error = %err, "Error sending email");
            Notice::error()
        }
    }
}
