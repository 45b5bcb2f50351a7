use axum::response::IntoResponse;

use crate::template::{Template, filters};

#[derive(askama::Template)]
#[template(path = "trainings.html")]
pub struct TrainingsTemplate;

pub async fn page(template: Template) -> impl IntoResponse {
    template.render(TrainingsTemplate)
}
