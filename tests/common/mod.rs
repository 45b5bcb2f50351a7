#![allow(dead_code)]

use std::{
    io,
    sync::{Arc, Mutex},
};

use axum::{
    Router,
    body::Body,
    http::{Request, Response, header},
};
use getdev::{
    AppState, Config,
    config::{ObservabilityConfig, ServerConfig, SessionConfig},
};
use getdev_notification::{MailConfig, MailError, Mailer, OutboundMessage};
use http_body_util::BodyExt;

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
        Err(MailError::Aborted("535 authentication rejected".to_string()))
    }
}

pub fn test_config() -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 5000,
            debug: false,
        },
        session: SessionConfig {
            secret: "test_secret_key_minimum_32_characters_long".to_string(),
        },
        mail: MailConfig {
            default_sender: Some("ops@getdev.com".to_string()),
            ..MailConfig::default()
        },
        observability: ObservabilityConfig::default(),
    }
}

pub fn create_test_app(mailer: Arc<dyn Mailer>) -> Router {
    create_test_app_with_config(test_config(), mailer)
}

pub fn create_test_app_with_config(config: Config, mailer: Arc<dyn Mailer>) -> Router {
    let state = AppState::new(config, mailer).unwrap();
    getdev::router(state)
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

pub fn post_form(uri: &str, fields: &[(&str, &str)]) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(serde_urlencoded::to_string(fields).unwrap()))
        .unwrap()
}

pub async fn body_string(response: Response<Body>) -> String {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(body.to_vec()).unwrap()
}

/// Log sink for asserting on emitted events.
#[derive(Clone, Default)]
pub struct LogCapture(Arc<Mutex<Vec<u8>>>);

impl LogCapture {
    pub fn contents(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

impl io::Write for LogCapture {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
