//! Podmenu HTTP Library
//!
//! Thin transport layer, maps HTTP requests to Core engine calls.

use axum::routing::get;
use axum::Router;

mod error;
mod handlers;
mod state;

#[cfg(test)]
mod tests;

pub use error::ApiError;
pub use handlers::{handle_menu, handle_page_content};
pub use state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/menu", get(handlers::menu_handler))
        .route("/page/:id/content", get(handlers::page_content_handler))
        .with_state(state)
}
