//! Contact form stub: one email field, a submit action and a transient status
//! line. Nothing typed here is stored or sent anywhere.

use std::time::Duration;
use thiserror::Error;

/// How long a status message stays before the form returns to idle.
pub const STATUS_TIMEOUT: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("Please enter a valid email address.")]
    MalformedEmail,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormStatus {
    #[default]
    Idle,
    Success,
    Error(FormError),
}

/// The only validation performed: an address must contain `@`.
pub fn validate_email(email: &str) -> Result<(), FormError> {
    if email.contains('@') {
        Ok(())
    } else {
        Err(FormError::MalformedEmail)
    }
}

#[derive(Debug, Clone, Default)]
pub struct ContactForm {
    input: String,
    status: FormStatus,
    status_set_at: Option<Duration>,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn status(&self) -> FormStatus {
        self.status
    }

    /// The field is read-only while the success message is showing.
    pub fn is_locked(&self) -> bool {
        self.status == FormStatus::Success
    }

    pub fn push_char(&mut self, c: char) {
        if !self.is_locked() {
            self.input.push(c);
        }
    }

    pub fn pop_char(&mut self) {
        if !self.is_locked() {
            self.input.pop();
        }
    }

    /// Validate and report. Success clears the field.
    pub fn submit(&mut self, now: Duration) -> Result<(), FormError> {
        let result = validate_email(&self.input);
        match result {
            Ok(()) => {
                tracing::info!("contact form submitted");
                self.input.clear();
                self.set_status(FormStatus::Success, now);
            }
            Err(err) => {
                tracing::debug!(%err, "contact form rejected");
                self.set_status(FormStatus::Error(err), now);
            }
        }
        result
    }

    fn set_status(&mut self, status: FormStatus, now: Duration) {
        self.status = status;
        self.status_set_at = Some(now);
    }

    /// Return to idle once a status has been visible for [`STATUS_TIMEOUT`].
    pub fn tick(&mut self, now: Duration) {
        if let Some(set_at) = self.status_set_at {
            if now.saturating_sub(set_at) >= STATUS_TIMEOUT {
                self.status = FormStatus::Idle;
                self.status_set_at = None;
            }
        }
    }
}
