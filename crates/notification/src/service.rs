//! SMTP delivery using lettre

use lettre::{
    Message, SmtpTransport, Transport,
    message::{Mailbox, header::ContentType},
    transport::smtp::authentication::Credentials,
};

use crate::{MailConfig, MailError, Mailer, OutboundMessage};

#[derive(Clone)]
pub struct SmtpMailer {
    transport: SmtpTransport,
    from: String,
}

impl SmtpMailer {
    pub fn new(config: &MailConfig) -> Result<Self, MailError> {
        let mut builder = if config.use_tls {
            SmtpTransport::starttls_relay(&config.server)?
        } else {
            tracing::info!(
                smtp_host = %config.server,
                smtp_port = config.port,
                "TLS disabled, using plain SMTP connection (e.g., MailDev)"
            );
            SmtpTransport::builder_dangerous(&config.server)
        };

        builder = builder.port(config.port);

        if config.has_credentials() {
            builder = builder.credentials(Credentials::new(
                config.username.clone(),
                config.password.clone(),
            ));
        } else {
            tracing::warn!(
                smtp_host = %config.server,
                "SMTP credentials not configured, sending unauthenticated"
            );
        }

        tracing::info!(
            smtp_host = %config.server,
            smtp_port = config.port,
            tls = config.use_tls,
            from = %config.default_sender(),
            "Mail transport initialized"
        );

        Ok(Self {
            transport: builder.build(),
            from: config.default_sender().to_owned(),
        })
    }

    fn build(&self, message: &OutboundMessage) -> Result<Message, MailError> {
        if message.recipients.is_empty() {
            return Err(MailError::NoRecipients);
        }

        let mut builder = Message::builder()
            .from(parse_mailbox(&self.from)?)
            .subject(message.subject.as_str())
            .header(ContentType::TEXT_PLAIN);

        for recipient in &message.recipients {
            builder = builder.to(parse_mailbox(recipient)?);
        }

        Ok(builder.body(message.body.clone())?)
    }
}

impl Mailer for SmtpMailer {
    fn send(&self, message: &OutboundMessage) -> Result<(), MailError> {
        let email = self.build(message)?;

        tracing::debug!(
            subject = %message.subject,
            recipients = message.recipients.len(),
            "Sending email"
        );

        self.transport.send(&email)?;

        Ok(())
    }
}

fn parse_mailbox(address: &str) -> Result<Mailbox, MailError> {
    address.parse().map_err(|source| MailError::Address {
        address: address.to_owned(),
        source,
    })
}
