use axum::{
    body::{Body, to_bytes},
    http::header,
    response::Response,
};
use std::sync::LazyLock;

static MINIFY_CFG: LazyLock<minify_html::Cfg> = LazyLock::new(|| minify_html::Cfg {
    keep_closing_tags: true,
    keep_html_and_head_opening_tags: true,
    minify_doctype: false,
    minify_css: true,
    minify_js: true,
    ..Default::default()
});

/// Minifies `text/html` responses. Not installed in debug mode.
pub async fn minify_html_middleware(response: Response<Body>) -> Response<Body> {
    let is_html = response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|h| h.to_str().ok())
        .is_some_and(|content_type| content_type.contains("text/html"));

    if !is_html {
        return response;
    }

    let (mut parts, body) = response.into_parts();
    let bytes = to_bytes(body, usize::MAX).await.unwrap_or_default();
    let minified = minify_html::minify(&bytes, &MINIFY_CFG);

    parts.headers.remove(header::CONTENT_LENGTH);

    Response::from_parts(parts, Body::from(minified))
}
