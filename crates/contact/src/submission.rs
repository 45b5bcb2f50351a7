use getdev_notification::OutboundMessage;
use serde::Deserialize;

pub const SUBJECT_PREFIX: &str = "Get Dev Contact Form: ";

/// Contact form fields as submitted. Every field is optional and an absent
/// field is rendered as empty text.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContactSubmission {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub subject: Option<String>,
    #[serde(default)]
    pub service_interest: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl ContactSubmission {
    pub fn to_message(&self, recipient: &str) -> OutboundMessage {
        OutboundMessage::new(
            format!("{SUBJECT_PREFIX}{}", field(&self.subject)),
            recipient,
            self.body(),
        )
    }

    fn body(&self) -> String {
        format!(
            "New contact form submission from Get Dev website:\n\
             \n\
             Name: {}\n\
             Email: {}\n\
             Service Interest: {}\n\
             Subject: {}\n\
             \n\
             Message:\n\
             {}\n",
            field(&self.name),
            field(&self.email),
            field(&self.service_interest),
            field(&self.subject),
            field(&self.message),
        )
    }
}

fn field(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or_default()
}
