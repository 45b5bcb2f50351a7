use axum::response::IntoResponse;

use crate::template::{Template, filters};

#[derive(askama::Template)]
#[template(path = "portfolio.html")]
pub struct PortfolioTemplate;

pub async fn page(template: Template) -> impl IntoResponse {
    template.render(PortfolioTemplate)
}
