//! Handler for the landing page.

use axum::response::Html;

/// Serves the static shorten form and link list page.
///
/// # Endpoint
///
/// `GET /`
///
/// Pure presentation: the page drives `POST /api/shorten` and `GET /api/urls`
/// from the browser.
pub async fn index_handler() -> Html<&'static str> {
    Html(include_str!("../../../static/index.html"))
}
