use std::sync::Arc;

use axum::{Router, extract::FromRef, response::IntoResponse, routing::get};
use axum_extra::extract::cookie::Key;
use getdev_notification::Mailer;

use crate::{assets::AssetsService, config::Config, error::AppError, template::Template};

mod ai;
mod blog;
mod contact;
mod health;
mod index;
mod portfolio;
mod services;
mod trainings;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub mailer: Arc<dyn Mailer>,
    key: Key,
}

impl AppState {
    pub fn new(config: Config, mailer: Arc<dyn Mailer>) -> anyhow::Result<Self> {
        config.validate().map_err(anyhow::Error::msg)?;

        let key = Key::derive_from(config.session.secret.as_bytes());

        Ok(Self {
            config,
            mailer,
            key,
        })
    }
}

impl FromRef<AppState> for Key {
    fn from_ref(state: &AppState) -> Self {
        state.key.clone()
    }
}

pub async fn fallback(template: Template) -> impl IntoResponse {
    AppError::NotFound(template.path().to_owned())
}

pub fn router(app_state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health))
        .route("/", get(index::page))
        .route("/services", get(services::page))
        .route("/contact", get(contact::page).post(contact::action))
        .route("/trainings", get(trainings::page))
        .route("/portfolio", get(portfolio::page))
        .route("/ai", get(ai::page))
        .route("/blog", get(blog::page))
        .nest_service("/static", AssetsService::new())
        .fallback(fallback)
        .with_state(app_state)
}
