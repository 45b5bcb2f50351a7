/// A plain-text email ready to be handed to a [`crate::Mailer`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundMessage {
    pub subject: String,
    pub recipients: Vec<String>,
    pub body: String,
}

impl OutboundMessage {
    pub fn new(
        subject: impl Into<String>,
        recipient: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Self {
            subject: subject.into(),
            recipients: vec![recipient.into()],
            body: body.into(),
        }
    }
}
