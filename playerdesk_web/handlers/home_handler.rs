use axum::response::{IntoResponse, Redirect};

use crate::routes;

/// GET / – The list page is the only landing page.
pub async fn home() -> impl IntoResponse {
    Redirect::to(&routes::players())
}
