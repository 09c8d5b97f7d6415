use std::sync::Arc;

use podmenu_core::MenuEngine;

/// State handed to every axum handler; cloning it only bumps the engine's
/// reference count.
#[derive(Clone)]
pub struct AppState {
    /// The engine keeps no tree or order between requests, so no lock
    /// is needed around it; it serializes order-file writes itself.
    pub engine: Arc<MenuEngine>,
}

impl AppState {
    pub fn new(engine: MenuEngine) -> Self {
        Self {
            engine: Arc::new(engine),
        }
    }
}
