use std::borrow::Cow;

use strum::{AsRefStr, Display, EnumString};

pub const SUCCESS_MESSAGE: &str = "Thank you for your message! We'll get back to you soon.";
pub const FAILURE_MESSAGE: &str =
    "Sorry, there was an error sending your message. Please try again later.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, AsRefStr)]
#[strum(serialize_all = "lowercase")]
pub enum Severity {
    Success,
    Error,
}

/// Short-lived status message shown on the next rendered page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub severity: Severity,
    pub message: Cow<'static, str>,
}

impl Notice {
    pub fn success() -> Self {
        Self::from(Severity::Success)
    }

    pub fn error() -> Self {
        Self::from(Severity::Error)
    }

    pub fn is_success(&self) -> bool {
        self.severity == Severity::Success
    }
}

/// Contact notices carry fixed texts, so the severity alone identifies them.
impl From<Severity> for Notice {
    fn from(severity: Severity) -> Self {
        let message = match severity {
            Severity::Success => SUCCESS_MESSAGE,
            Severity::Error => FAILURE_MESSAGE,
        };

        Self {
            severity,
            message: Cow::Borrowed(message),
        }
    }
}
