//! Contact form state and validation.
//!
//! Nothing is actually sent: a submission is validated, then the app waits
//! out the configured transmit delay and reports success.

use crate::ui::components::TextInputState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    Email,
    Message,
    /// The SEND_TRANSMISSION button
    Submit,
}

impl FormField {
    pub const ALL: [FormField; 4] = [
        FormField::Name,
        FormField::Email,
        FormField::Message,
        FormField::Submit,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            FormField::Name => "IDENTIFIER",
            FormField::Email => "COMM_ADDRESS",
            FormField::Message => "MESSAGE_PAYLOAD",
            FormField::Submit => "SEND_TRANSMISSION",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            FormField::Name => "Enter your name",
            FormField::Email => "your@email.com",
            FormField::Message => "Type your message...",
            FormField::Submit => "",
        }
    }

    pub fn next(&self) -> Self {
        let idx = self.index();
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    pub fn prev(&self) -> Self {
        let idx = self.index();
        Self::ALL[(idx + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    fn index(&self) -> usize {
        Self::ALL.iter().position(|f| f == self).unwrap_or(0)
    }
}

/// Why a submission was rejected
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("{} is required", .0.label())]
    Missing(FormField),
    #[error("COMM_ADDRESS is not a valid email address")]
    InvalidEmail,
    #[error("transmission already in progress")]
    Busy,
}

impl FormError {
    /// Field to move focus to so the user can fix the problem
    pub fn field(&self) -> Option<FormField> {
        match self {
            FormError::Missing(field) => Some(*field),
            FormError::InvalidEmail => Some(FormField::Email),
            FormError::Busy => None,
        }
    }
}

/// A validated submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// `local@domain.tld`: non-empty local part, a dot somewhere in the domain,
/// no whitespace.
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
}

#[derive(Debug, Clone, Default)]
pub struct ContactForm {
    pub name: TextInputState,
    pub email: TextInputState,
    pub message: TextInputState,
    focus: Option<FormField>,
    transmitting: bool,
    error: Option<FormError>,
}

impl ContactForm {
    pub fn new() -> Self {
        Self {
            focus: Some(FormField::Name),
            ..Self::default()
        }
    }

    pub fn focus(&self) -> Option<FormField> {
        self.focus
    }

    pub fn set_focus(&mut self, field: FormField) {
        self.focus = Some(field);
    }

    pub fn focus_next(&mut self) {
        self.focus = Some(self.focus.map_or(FormField::Name, |f| f.next()));
    }

    pub fn focus_prev(&mut self) {
        self.focus = Some(self.focus.map_or(FormField::Submit, |f| f.prev()));
    }

    /// Input behind the focused field, if it is a text field
    pub fn focused_input_mut(&mut self) -> Option<&mut TextInputState> {
        match self.focus? {
            FormField::Name => Some(&mut self.name),
            FormField::Email => Some(&mut self.email),
            FormField::Message => Some(&mut self.message),
            FormField::Submit => None,
        }
    }

    pub fn input(&self, field: FormField) -> Option<&TextInputState> {
        match field {
            FormField::Name => Some(&self.name),
            FormField::Email => Some(&self.email),
            FormField::Message => Some(&self.message),
            FormField::Submit => None,
        }
    }

    pub fn is_transmitting(&self) -> bool {
        self.transmitting
    }

    pub fn error(&self) -> Option<&FormError> {
        self.error.as_ref()
    }

    /// Check every field without changing state
    pub fn validate(&self) -> Result<ContactMessage, FormError> {
        let name = self.name.value().trim();
        let email = self.email.value().trim();
        let message = self.message.value().trim();

        if name.is_empty() {
            return Err(FormError::Missing(FormField::Name));
        }
        if email.is_empty() {
            return Err(FormError::Missing(FormField::Email));
        }
        if !is_valid_email(email) {
            return Err(FormError::InvalidEmail);
        }
        if message.is_empty() {
            return Err(FormError::Missing(FormField::Message));
        }

        Ok(ContactMessage {
            name: name.to_string(),
            email: email.to_string(),
            message: message.to_string(),
        })
    }

    /// Validate and enter the transmitting state.
    ///
    /// Rejected submissions record the error and focus the offending field.
    pub fn begin_submit(&mut self) -> Result<ContactMessage, FormError> {
        if self.transmitting {
            return Err(FormError::Busy);
        }
        match self.validate() {
            Ok(message) => {
                self.error = None;
                self.transmitting = true;
                Ok(message)
            }
            Err(e) => {
                if let Some(field) = e.field() {
                    self.focus = Some(field);
                }
                self.error = Some(e.clone());
                Err(e)
            }
        }
    }

    /// Transmission finished: clear the fields and accept input again
    pub fn finish_submit(&mut self) {
        self.transmitting = false;
        self.name.clear();
        self.email.clear();
        self.message.clear();
        self.focus = Some(FormField::Name);
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }
}
