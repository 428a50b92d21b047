// ABOUTME: Serves the single-page browser client
// ABOUTME: The page is compiled into the binary, so there is no asset directory to deploy

use axum::response::Html;

const INDEX_HTML: &str = include_str!("../../static/index.html");

pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}
