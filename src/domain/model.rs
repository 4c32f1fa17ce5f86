use serde::{Deserialize, Serialize};
use std::fmt;

/// Snapshot of the contact form. Updates produce a new snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Message,
}

impl ContactMessage {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            message: message.into(),
        }
    }

    pub fn with_field(&self, field: Field, value: impl Into<String>) -> Self {
        let mut next = self.clone();
        let value = value.into();
        match field {
            Field::Name => next.name = value,
            Field::Email => next.email = value,
            Field::Message => next.message = value,
        }
        next
    }

    pub fn field(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }

    pub fn trimmed(&self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            message: self.message.trim().to_string(),
        }
    }

    /// All three fields empty (the state right after mount or a successful send).
    pub fn is_blank(&self) -> bool {
        self.name.is_empty() && self.email.is_empty() && self.message.is_empty()
    }
}

impl std::str::FromStr for Field {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "name" => Ok(Field::Name),
            "email" => Ok(Field::Email),
            "message" => Ok(Field::Message),
            other => Err(format!("unknown form field: {}", other)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionStatus {
    Checking,
    Connected,
    Error,
}

impl fmt::Display for ConnectionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ConnectionStatus::Checking => "checking",
            ConnectionStatus::Connected => "connected",
            ConnectionStatus::Error => "error",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationFailure {
    IncompleteFields,
    InvalidEmail,
}

impl ValidationFailure {
    pub fn message(&self) -> &'static str {
        match self {
            ValidationFailure::IncompleteFields => "Please fill in all fields.",
            ValidationFailure::InvalidEmail => "Please enter a valid email address.",
        }
    }
}

impl fmt::Display for ValidationFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitFailure {
    /// Transport-level failure: DNS, refused connection, reset.
    Network(String),
    /// 401/403 from the hosted database.
    Authentication { status: u16 },
    /// 5xx.
    Remote { status: u16 },
    Unknown(String),
}

impl SubmitFailure {
    pub fn from_status(status: u16) -> Self {
        match status {
            401 | 403 => SubmitFailure::Authentication { status },
            500..=599 => SubmitFailure::Remote { status },
            other => SubmitFailure::Unknown(format!("unexpected HTTP status {}", other)),
        }
    }

    pub fn user_message(&self) -> String {
        let detail = match self {
            SubmitFailure::Network(_) => "The contact service could not be reached.",
            SubmitFailure::Authentication { .. } => {
                "The contact service refused the request (authentication or session issue)."
            }
            SubmitFailure::Remote { .. } => "The contact service ran into an error.",
            SubmitFailure::Unknown(_) => "Something unexpected went wrong.",
        };
        format!("Failed to send message. {} Please try again.", detail)
    }
}

impl fmt::Display for SubmitFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubmitFailure::Network(reason) => write!(f, "network error: {}", reason),
            SubmitFailure::Authentication { status } => {
                write!(f, "authentication rejected (HTTP {})", status)
            }
            SubmitFailure::Remote { status } => write!(f, "remote service error (HTTP {})", status),
            SubmitFailure::Unknown(reason) => write!(f, "unknown failure: {}", reason),
        }
    }
}

/// Result of one `submit` call on the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Sent,
    Rejected(ValidationFailure),
    Failed(SubmitFailure),
    /// Not connected or another submission in flight; nothing was sent.
    Disabled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub kind: NotificationKind,
    pub text: String,
    pub at: chrono::DateTime<chrono::Utc>,
}
