use lettre::address::AddressError;
use thiserror::Error;

use crate::OutboundMessage;

#[derive(Error, Debug)]
pub enum MailError {
    #[error("invalid address `{address}`: {source}")]
    Address {
        address: String,
        #[source]
        source: AddressError,
    },

    #[error("message has no recipients")]
    NoRecipients,

    #[error("failed to build message: {0}")]
    Build(#[from] lettre::error::Error),

    #[error("smtp error: {0}")]
    Smtp(#[from] lettre::transport::smtp::Error),

    #[error("mail dispatch aborted: {0}")]
    Aborted(String),
}

/// Outbound-mail capability.
///
/// `send` is blocking: it returns once the exchange with the mail server has
/// completed or failed. Callers on an async runtime run it on the blocking
/// pool.
pub trait Mailer: Send + Sync + 'static {
    fn send(&self, message: &OutboundMessage) -> Result<(), MailError>;
}
