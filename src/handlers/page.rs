use axum::response::Html;

/// GET / — the dashboard single-page frontend, embedded at compile time.
pub async fn dashboard() -> Html<&'static str> {
    Html(include_str!("../../assets/index.html"))
}
