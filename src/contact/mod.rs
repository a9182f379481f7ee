//! Contact form submission.
//!
//! A visitor's [`ContactForm`] is checked, then handed to an [`EmailDelivery`]
//! collaborator exactly once by [`ContactFlow`]. The outcome comes back as a
//! [`Submission`] carrying a single [`Notice`] and the form to re-render:
//! empty after a success, untouched after a failure.
//!
//! ```text
//! Idle -> Submitting -> Success | Failed -> Idle
//! ```

mod delivery;
mod flow;
mod form;
mod notice;

pub use delivery::{EmailDelivery, EmailJsClient, OutboundMessage, Unconfigured};
pub use flow::{ContactFlow, Submission, SubmissionState};
pub use form::{ContactForm, FieldError, MAX_FIELD_LENGTH, MAX_MESSAGE_LENGTH};
pub use notice::{Notice, NoticeKind};

use std::sync::Arc;

use crate::config::ContactSettings;

/// Builds the delivery collaborator from settings, degrading to
/// [`Unconfigured`] when credentials are missing.
pub fn delivery_from_settings(settings: &ContactSettings) -> Arc<dyn EmailDelivery> {
    match EmailJsClient::new(settings) {
        Ok(client) => Arc::new(client),
        Err(e) => {
            tracing::warn!(error = %e, "Contact form disabled; submissions will fail");
            Arc::new(Unconfigured::new(e.to_string()))
        }
    }
}
