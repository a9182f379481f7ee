use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use super::delivery::{EmailDelivery, OutboundMessage};
use super::form::ContactForm;
use super::notice::Notice;
use crate::error::{FolioError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionState {
    Idle,
    Submitting,
    Success,
    Failed,
}

/// Terminal result of one submission attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    /// Either [`SubmissionState::Success`] or [`SubmissionState::Failed`].
    pub state: SubmissionState,
    pub notice: Notice,
    /// Cleared after a success, the submitted values after a failure.
    pub form: ContactForm,
}

impl Submission {
    pub fn succeeded(&self) -> bool {
        self.state == SubmissionState::Success
    }
}

/// Single-attempt contact submission.
///
/// At most one submission is in flight per flow; a second call while one is
/// pending is refused with [`FolioError::SubmissionInProgress`]. The flow is
/// back to idle once `submit` returns or its future is dropped.
pub struct ContactFlow {
    delivery: Arc<dyn EmailDelivery>,
    recipient_name: String,
    in_flight: AtomicBool,
}

/// Releases the in-flight flag when dropped.
struct InFlight<'a>(&'a AtomicBool);

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

impl ContactFlow {
    pub fn new(delivery: Arc<dyn EmailDelivery>, recipient_name: impl Into<String>) -> Self {
        Self {
            delivery,
            recipient_name: recipient_name.into(),
            in_flight: AtomicBool::new(false),
        }
    }

    pub fn recipient_name(&self) -> &str {
        &self.recipient_name
    }

    /// Current state: only `Idle` or `Submitting` are observable between calls.
    pub fn state(&self) -> SubmissionState {
        if self.in_flight.load(Ordering::Acquire) {
            SubmissionState::Submitting
        } else {
            SubmissionState::Idle
        }
    }

    pub fn can_submit(&self) -> bool {
        self.state() == SubmissionState::Idle
    }

    /// Forwards the form to the delivery collaborator once.
    ///
    /// Returns `Err` only when the precondition fails (an invalid form, or a
    /// submission already in flight). A delivery failure is an `Ok` with
    /// [`SubmissionState::Failed`].
    pub async fn submit(&self, form: ContactForm) -> Result<Submission> {
        form.validate()?;

        if self
            .in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            return Err(FolioError::SubmissionInProgress);
        }
        let _guard = InFlight(&self.in_flight);

        let clean = form.trimmed();
        let message = OutboundMessage {
            from_name: clean.name,
            from_email: clean.email,
            subject: clean.subject,
            message: clean.message,
            to_name: self.recipient_name.clone(),
        };

        tracing::info!(subject = %message.subject, "Submitting contact message");
        match self.delivery.send(&message).await {
            Ok(()) => {
                tracing::info!("Contact message delivered");
                Ok(Submission {
                    state: SubmissionState::Success,
                    notice: Notice::sent(),
                    form: ContactForm::default(),
                })
            }
            Err(e) => {
                tracing::error!(error = %e, "Contact message delivery failed");
                Ok(Submission {
                    state: SubmissionState::Failed,
                    notice: Notice::failed(),
                    form,
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contact::notice::NoticeKind;
    use async_trait::async_trait;
    use std::sync::Mutex;
    use tokio::sync::Notify;

    #[derive(Default)]
    struct Recorder {
        fail: bool,
        sent: Mutex<Vec<OutboundMessage>>,
    }

    #[async_trait]
    impl EmailDelivery for Recorder {
        async fn send(&self, message: &OutboundMessage) -> Result<()> {
            self.sent.lock().unwrap().push(message.clone());
            if self.fail {
                Err(FolioError::Delivery("401 Unauthorized".to_string()))
            } else {
                Ok(())
            }
        }
    }

    /// Blocks every send until released.
    struct Gate {
        entered: Notify,
        release: Notify,
    }

    #[async_trait]
    impl EmailDelivery for Gate {
        async fn send(&self, _message: &OutboundMessage) -> Result<()> {
            self.entered.notify_one();
            self.release.notified().await;
            Ok(())
        }
    }

    fn form() -> ContactForm {
        ContactForm::new(" Ada ", "ada@example.com", "Hello", "A message")
    }

    #[tokio::test]
    async fn test_success_clears_form_and_notifies_once() {
        let recorder = Arc::new(Recorder::default());
        let flow = ContactFlow::new(recorder.clone(), "Durai Raj S");

        let submission = flow.submit(form()).await.unwrap();

        assert_eq!(submission.state, SubmissionState::Success);
        assert_eq!(submission.form, ContactForm::default());
        assert_eq!(submission.notice, Notice::sent());
        assert!(flow.can_submit());

        let sent = recorder.sent.lock().unwrap();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].from_name, "Ada");
        assert_eq!(sent[0].to_name, "Durai Raj S");
    }

    #[tokio::test]
    async fn test_failure_preserves_form_and_reenables() {
        let recorder = Arc::new(Recorder {
            fail: true,
            ..Default::default()
        });
        let flow = ContactFlow::new(recorder.clone(), "Durai Raj S");

        let submission = flow.submit(form()).await.unwrap();

        assert_eq!(submission.state, SubmissionState::Failed);
        assert_eq!(submission.form, form());
        assert_eq!(submission.notice.kind, NoticeKind::Error);
        assert_eq!(submission.notice, Notice::failed());
        assert_eq!(flow.state(), SubmissionState::Idle);
        assert_eq!(recorder.sent.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_invalid_form_never_reaches_delivery() {
        let recorder = Arc::new(Recorder::default());
        let flow = ContactFlow::new(recorder.clone(), "Durai Raj S");

        let err = flow
            .submit(ContactForm {
                message: String::new(),
                ..form()
            })
            .await
            .unwrap_err();

        assert!(matches!(err, FolioError::Validation(_)));
        assert!(recorder.sent.lock().unwrap().is_empty());
        assert!(flow.can_submit());
    }

    #[tokio::test]
    async fn test_reentrant_submit_is_refused() {
        let gate = Arc::new(Gate {
            entered: Notify::new(),
            release: Notify::new(),
        });
        let flow = Arc::new(ContactFlow::new(gate.clone(), "Durai Raj S"));

        let first = tokio::spawn({
            let flow = flow.clone();
            async move { flow.submit(form()).await }
        });
        gate.entered.notified().await;

        assert_eq!(flow.state(), SubmissionState::Submitting);
        let err = flow.submit(form()).await.unwrap_err();
        assert!(matches!(err, FolioError::SubmissionInProgress));

        gate.release.notify_one();
        let submission = first.await.unwrap().unwrap();
        assert!(submission.succeeded());
        assert_eq!(flow.state(), SubmissionState::Idle);
    }

    #[tokio::test]
    async fn test_dropped_submission_returns_to_idle() {
        let gate = Arc::new(Gate {
            entered: Notify::new(),
            release: Notify::new(),
        });
        let flow = Arc::new(ContactFlow::new(gate.clone(), "Durai Raj S"));

        let pending = tokio::spawn({
            let flow = flow.clone();
            async move { flow.submit(form()).await }
        });
        gate.entered.notified().await;
        pending.abort();
        let _ = pending.await;

        assert_eq!(flow.state(), SubmissionState::Idle);
    }
}
