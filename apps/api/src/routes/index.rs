use axum::response::Html;

/// GET /
/// The single-page front end: a directory input plus parse/analyze actions.
pub async fn index_handler() -> Html<&'static str> {
    Html(include_str!("../../static/index.html"))
}
