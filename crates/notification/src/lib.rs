mod config;
mod mailer;
mod message;
mod service;

pub use config::*;
pub use mailer::*;
pub use message::*;
pub use service::*;
