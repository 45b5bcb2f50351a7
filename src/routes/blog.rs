use axum::response::IntoResponse;

use crate::template::{Template, filters};

#[derive(askama::Template)]
#[template(path = "blog.html")]
pub struct BlogTemplate;

pub async fn page(template: Template) -> impl IntoResponse {
    template.render(BlogTemplate)
}
