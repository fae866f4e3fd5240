//! Static page handlers.

use axum::response::Html;

use crate::api::views;

/// Main page
pub async fn index() -> Html<String> {
    Html(views::index())
}

/// Shelf page
pub async fn shelf() -> Html<String> {
    Html(views::shelf())
}

/// Login page
pub async fn login() -> Html<String> {
    Html(views::login())
}
