use serde::Deserialize;

/// Address that receives contact submissions when no default sender is set.
pub const FALLBACK_SENDER: &str = "info@getdev.com";

#[derive(Debug, Deserialize, Clone)]
pub struct MailConfig {
    #[serde(default = "default_server")]
    pub server: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_use_tls")]
    pub use_tls: bool,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub default_sender: Option<String>,
}

impl Default for MailConfig {
    fn default() -> Self {
        Self {
            server: default_server(),
            port: default_port(),
            use_tls: default_use_tls(),
            username: String::new(),
            password: String::new(),
            default_sender: None,
        }
    }
}

impl MailConfig {
    /// The configured default sender, which is also where every contact
    /// submission is delivered.
    pub fn default_sender(&self) -> &str {
        self.default_sender
            .as_deref()
            .filter(|sender| !sender.trim().is_empty())
            .unwrap_or(FALLBACK_SENDER)
    }

    pub fn has_credentials(&self) -> bool {
        !self.username.is_empty() && !self.password.is_empty()
    }
}

fn default_server() -> String {
    "smtp.gmail.com".to_string()
}

fn default_port() -> u16 {
    587
}

fn default_use_tls() -> bool {
    true
}
