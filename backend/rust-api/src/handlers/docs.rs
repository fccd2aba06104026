use axum::response::Html;

pub async fn health_check() -> &'static str {
    "OK"
}

/// Static page documenting the theme endpoints.
pub async fn api_docs() -> Html<&'static str> {
    Html(include_str!("../../static/api-docs/index.html"))
}
