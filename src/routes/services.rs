use axum::response::IntoResponse;

use crate::template::{Template, filters};

#[derive(askama::Template)]
#[template(path = "services.html")]
pub struct ServicesTemplate;

pub async fn page(template: Template) -> impl IntoResponse {
    template.render(ServicesTemplate)
}
