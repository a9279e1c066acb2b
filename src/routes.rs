use axum::{extract::State, response::Html, routing::get, Router};
use tower_http::trace::TraceLayer;

use crate::{error::AppError, picker::pick_quote, templates, Data};

pub fn router(data: Data) -> Router {
    Router::new()
        .route("/", get(home_handler))
        .route("/about", get(about_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(data)
}

#[tracing::instrument(skip_all)]
pub async fn home_handler(State(data): State<Data>) -> Result<Html<String>, AppError> {
    let quote = pick_quote(&data.store).await?;

    Ok(Html(templates::home_page(&quote)))
}

pub async fn about_handler() -> Html<String> {
    Html(templates::about_page())
}
