use axum::extract::{Path, State};
use axum::response::Html;

use super::with_engine;
use crate::error::ApiError;
use crate::state::AppState;

/// Handle `GET /page/:id/content`
/// Returns the pre-rendered body of the page with that identifier
pub async fn handle_page_content(
    state: &AppState,
    identifier: String,
) -> Result<Html<String>, ApiError> {
    let body = with_engine(state, move |engine| engine.read_page(&identifier)).await?;
    body.map(Html).ok_or(ApiError::NotFound)
}

pub async fn page_content_handler(
    State(state): State<AppState>,
    Path(identifier): Path<String>,
) -> Result<Html<String>, ApiError> {
    handle_page_content(&state, identifier).await
}
