use axum::{
    extract::FromRequestParts,
    http::{StatusCode, request::Parts},
    response::{Html, IntoResponse, Response},
};
use std::{any::Any, collections::HashMap, convert::Infallible};

pub const NOT_FOUND_MESSAGE: &str = "Page not found!";
pub const SERVER_ERROR_MESSAGE: &str = "Internal server error!";

const FALLBACK_ERROR_PAGE: &str =
    "<!DOCTYPE html><html><head><title>Error | Get Dev</title></head><body><h1>Internal server error!</h1></body></html>";

pub(crate) mod filters {
    /// CSS class for a navigation link, marking the page being rendered.
    #[askama::filter_fn]
    pub fn nav_class(href: &str, values: &dyn askama::Values) -> askama::Result<String> {
        let active = askama::get_value::<String>(values, "current_path")
            .map(|path| path == href)
            .unwrap_or(false);

        let class = if active { "nav-link active" } else { "nav-link" };

        Ok(class.to_owned())
    }
}

/// Renders askama templates for the page being requested.
pub struct Template {
    current_path: String,
}

impl Template {
    pub fn new(current_path: impl Into<String>) -> Self {
        Self {
            current_path: current_path.into(),
        }
    }

    pub fn path(&self) -> &str {
        &self.current_path
    }

    fn render_with_values<T: askama::Template>(
        &self,
        template: T,
    ) -> Result<String, askama::Error> {
        let mut values: HashMap<&str, Box<dyn Any>> = HashMap::new();
        values.insert("current_path", Box::new(self.current_path.to_owned()));

        template.render_with_values(&values)
    }

    pub fn render<T: askama::Template>(&self, template: T) -> Response {
        self.render_with_status(StatusCode::OK, template)
    }

    pub fn render_with_status<T: askama::Template>(
        &self,
        status: StatusCode,
        template: T,
    ) -> Response {
        match self.render_with_values(template) {
            Ok(html) => (status, Html(html)).into_response(),
            Err(err) => {
                tracing::error!(error = %err, path = %self.current_path, "Failed to render template");

                self.server_error()
            }
        }
    }

    fn server_error(&self) -> Response {
        let html = self
            .render_with_values(ErrorTemplate {
                error_message: SERVER_ERROR_MESSAGE,
            })
            .unwrap_or_else(|err| {
                tracing::error!(error = %err, "Failed to render error page");
                FALLBACK_ERROR_PAGE.to_owned()
            });

        (StatusCode::INTERNAL_SERVER_ERROR, Html(html)).into_response()
    }
}

impl<S: Send + Sync> FromRequestParts<S> for Template {
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Template::new(parts.uri.path()))
    }
}

#[derive(askama::Template)]
#[template(path = "error.html")]
pub struct ErrorTemplate<'a> {
    pub error_message: &'a str,
}
