mod menu;
mod page;

pub use menu::*;
pub use page::*;

use crate::error::ApiError;
use crate::state::AppState;
use podmenu_core::{MenuEngine, MenuError};

/// Run an engine call on the blocking pool; scanning and the order file
/// use synchronous filesystem I/O.
async fn with_engine<T, F>(state: &AppState, f: F) -> Result<T, ApiError>
where
    T: Send + 'static,
    F: FnOnce(&MenuEngine) -> Result<T, MenuError> + Send + 'static,
{
    let engine = state.engine.clone();
    Ok(tokio::task::spawn_blocking(move || f(engine.as_ref())).await??)
}
