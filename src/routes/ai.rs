use axum::response::IntoResponse;

use crate::template::{Template, filters};

#[derive(askama::Template)]
#[template(path = "ai.html")]
pub struct AiTemplate;

pub async fn page(template: Template) -> impl IntoResponse {
    template.render(AiTemplate)
}
