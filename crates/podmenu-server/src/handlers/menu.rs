use axum::extract::State;
use axum::response::Html;

use super::with_engine;
use crate::error::ApiError;
use crate::state::AppState;

/// Handle `GET /menu`
/// Scans, reconciles with the order file and renders the navigation markup
pub async fn handle_menu(state: &AppState) -> Result<Html<String>, ApiError> {
    let html = with_engine(state, |engine| engine.render_menu()).await?;
    Ok(Html(html))
}

pub async fn menu_handler(State(state): State<AppState>) -> Result<Html<String>, ApiError> {
    handle_menu(&state).await
}
