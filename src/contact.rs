//! Contact form state and the submission boundary.

use std::fmt;

use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Name, Field::Email, Field::Subject, Field::Message];

    /// The `name` attribute of the matching form control.
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Subject => "subject",
            Field::Message => "message",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.as_str() == name)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The record handed to the submission collaborator.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ContactError {
    #[error("required field `{0}` is empty")]
    MissingField(Field),
    #[error("submission rejected: {0}")]
    Rejected(String),
}

/// Delivers a contact message somewhere.
pub trait SubmissionHandler {
    fn submit(&mut self, message: &ContactMessage) -> Result<(), ContactError>;
}

/// Stub collaborator: logs the message and reports success.
#[derive(Debug, Default)]
pub struct LogHandler;

impl SubmissionHandler for LogHandler {
    fn submit(&mut self, message: &ContactMessage) -> Result<(), ContactError> {
        log::info!(
            "contact form submitted: name={:?} email={:?} subject={:?} ({} chars)",
            message.name,
            message.email,
            message.subject,
            message.message.len()
        );
        Ok(())
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
    values: ContactMessage,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.values.name,
            Field::Email => &self.values.email,
            Field::Subject => &self.values.subject,
            Field::Message => &self.values.message,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::Name => &mut self.values.name,
            Field::Email => &mut self.values.email,
            Field::Subject => &mut self.values.subject,
            Field::Message => &mut self.values.message,
        };
        *slot = value.into();
    }

    pub fn clear(&mut self) {
        self.values = ContactMessage::default();
    }

    /// Hand the four values to `handler` once, then clear the form.
    ///
    /// An empty field stops before the handler is called. A handler error leaves the
    /// values in place so the visitor can retry.
    pub fn submit<H: SubmissionHandler + ?Sized>(
        &mut self,
        handler: &mut H,
    ) -> Result<ContactMessage, ContactError> {
        if let Some(field) = Field::ALL.into_iter().find(|f| self.get(*f).is_empty()) {
            return Err(ContactError::MissingField(field));
        }
        handler.submit(&self.values)?;
        Ok(std::mem::take(&mut self.values))
    }
}
