#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use getdev_notification::{MailError, Mailer, OutboundMessage};

#[derive(Default)]
pub struct RecordingMailer {
    sent: Mutex<Vec<OutboundMessage>>,
}

impl RecordingMailer {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn sent(&self) -> Vec<OutboundMessage> {
        self.sent.lock().unwrap().clone()
    }
}

impl Mailer for RecordingMailer {
    fn send(&self, message: &OutboundMessage) -> Result<(), MailError> {
        self.sent.lock().unwrap().push(message.clone());
        Ok(())
    }
}

#[derive(Default)]
pub struct FailingMailer {
    attempts: Mutex<usize>,
}

impl FailingMailer {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn attempts(&self) -> usize {
        *self.attempts.lock().unwrap()
    }
}

impl Mailer for FailingMailer {
    fn send(&self, _message: &OutboundMessage) -> Result<(), MailError> {
        *self.attempts.lock().unwrap() += 1;
        Err(MailError::Aborted("connection refused".to_string()))
    }
}

pub struct PanickingMailer;

impl Mailer for PanickingMailer {
    fn send(&self, _message: &OutboundMessage) -> Result<(), MailError> {
        panic!("transport exploded");
    }
}
