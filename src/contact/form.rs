use crate::{
    contact::mailer::{ContactMessage, Mailer, MailerConfig},
    foundation::error::{ScrollyteError, ScrollyteResult},
};

/// Where the form currently is in its submit cycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FormPhase {
    /// Accepting input.
    #[default]
    Editing,
    /// A send is in flight; further submits are rejected.
    Sending,
    /// Delivery confirmed; fields are cleared.
    Sent,
}

/// Contact form state machine: `Editing -> Sending -> Sent | Editing(error)`.
///
/// On failure the entered field values are preserved for retry; on success
/// they are cleared and the form shows its confirmation state.
#[derive(Clone, Debug, Default)]
pub struct ContactForm {
    name: String,
    email: String,
    message: String,
    phase: FormPhase,
    error: Option<String>,
}

impl ContactForm {
    /// Empty form in the editing phase.
    pub fn new() -> Self {
        Self::default()
    }

    /// Update the name field.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Update the email field.
    pub fn set_email(&mut self, email: impl Into<String>) {
        self.email = email.into();
    }

    /// Update the message field.
    pub fn set_message(&mut self, message: impl Into<String>) {
        self.message = message.into();
    }

    /// Current field values as `(name, email, message)`.
    pub fn fields(&self) -> (&str, &str, &str) {
        (&self.name, &self.email, &self.message)
    }

    /// Current phase.
    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    /// Whether a send is in flight (hosts disable their submit control).
    pub fn is_sending(&self) -> bool {
        self.phase == FormPhase::Sending
    }

    /// Last user-visible failure, if any.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Validate fields and configuration, then enter the sending phase.
    ///
    /// Fails fast on missing configuration before any delivery attempt and
    /// returns the message the host must hand to its [`Mailer`]. The split
    /// from [`finish_submit`](Self::finish_submit) exists because delivery is
    /// asynchronous for real hosts.
    pub fn begin_submit(&mut self, config: &MailerConfig) -> ScrollyteResult<ContactMessage> {
        if self.is_sending() {
            return Err(ScrollyteError::send("a send is already in progress"));
        }

        if self.name.trim().is_empty()
            || self.email.trim().is_empty()
            || self.message.trim().is_empty()
        {
            let err = ScrollyteError::validation("name, email and message must be non-empty");
            self.error = Some(err.to_string());
            return Err(err);
        }

        if let Err(err) = config.validate() {
            self.error = Some(err.to_string());
            return Err(err);
        }

        self.phase = FormPhase::Sending;
        self.error = None;
        Ok(ContactMessage {
            name: self.name.clone(),
            email: self.email.clone(),
            message: self.message.clone(),
        })
    }

    /// Record the outcome of the delivery attempt started by
    /// [`begin_submit`](Self::begin_submit).
    pub fn finish_submit(&mut self, outcome: ScrollyteResult<()>) {
        match outcome {
            Ok(()) => {
                self.name.clear();
                self.email.clear();
                self.message.clear();
                self.phase = FormPhase::Sent;
                self.error = None;
            }
            Err(err) => {
                // Keep the entered values for retry.
                self.phase = FormPhase::Editing;
                self.error = Some(err.to_string());
            }
        }
    }

    /// Synchronous convenience submit for hosts whose mailer blocks.
    pub fn submit(&mut self, config: &MailerConfig, mailer: &dyn Mailer) -> ScrollyteResult<()> {
        let message = self.begin_submit(config)?;
        let outcome = mailer.send(config, &message);
        let report = match &outcome {
            Ok(()) => Ok(()),
            Err(e) => Err(ScrollyteError::send(e.to_string())),
        };
        self.finish_submit(outcome);
        report
    }

    /// Return from the confirmation state to an empty editing form.
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

#[cfg(test)]
#[path = "../../tests/unit/contact/form.rs"]
mod tests;
