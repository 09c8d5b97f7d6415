use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use podmenu_core::MenuError;

/// A request that could not be served.
///
/// The body is deliberately generic; details go to the log.
#[derive(Debug)]
pub enum ApiError {
    Menu(MenuError),
    /// The blocking task running the pipeline panicked or was cancelled
    Task(tokio::task::JoinError),
    NotFound,
}

impl From<MenuError> for ApiError {
    fn from(err: MenuError) -> Self {
        ApiError::Menu(err)
    }
}

impl From<tokio::task::JoinError> for ApiError {
    fn from(err: tokio::task::JoinError) -> Self {
        ApiError::Task(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::NotFound => (StatusCode::NOT_FOUND, "Page not found").into_response(),
            ApiError::Menu(err) => {
                log::error!("request failed: {err}");
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error").into_response()
            }
            ApiError::Task(err) => {
                log::error!("request task failed: {err}");
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error").into_response()
            }
        }
    }
}
