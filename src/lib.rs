pub mod assets;
pub mod cli;
pub mod config;
pub mod error;
pub mod flash;
pub mod middleware;
pub mod observability;
pub mod routes;
pub mod template;

pub use cli::app;
pub use config::Config;
pub use routes::{AppState, router};
