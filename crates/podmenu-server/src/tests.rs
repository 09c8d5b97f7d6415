use crate::error::ApiError;
use crate::handlers;
use crate::state::AppState;
use axum::body::to_bytes;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use podmenu_core::{MenuConfig, MenuEngine};
use std::fs;
use tempfile::TempDir;

fn setup_test_context() -> (AppState, TempDir) {
    let temp_dir = TempDir::new().unwrap();
    let config = MenuConfig {
        content_root: temp_dir.path().join("content"),
        order_file: temp_dir.path().join("menuindex.yml"),
        ..MenuConfig::default()
    };
    fs::create_dir_all(&config.content_root).unwrap();
    (AppState::new(MenuEngine::physical(config)), temp_dir)
}

fn page(temp_dir: &TempDir, rel: &str, body: &str) {
    let dir = temp_dir.path().join("content").join(rel);
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("index.html"), body).unwrap();
}

async fn body_of(response: axum::response::Response) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

#[tokio::test]
async fn test_cloned_state_shares_one_engine() {
    fn assert_router_state<T: Clone + Send + Sync + 'static>() {}
    assert_router_state::<AppState>();

    let (state, temp_dir) = setup_test_context();
    page(&temp_dir, "About", "x");
    let cloned = state.clone();
    assert!(std::sync::Arc::ptr_eq(&state.engine, &cloned.engine));

    let handle = tokio::spawn(async move { handlers::handle_menu(&cloned).await.is_ok() });
    assert!(handle.await.unwrap());
    assert!(temp_dir.path().join("menuindex.yml").exists());
}

#[tokio::test]
async fn test_menu_renders_and_persists_order() {
    let (state, temp_dir) = setup_test_context();
    page(&temp_dir, "About", "<p>about</p>");
    page(&temp_dir, "Episodes/Ep1", "<p>ep1</p>");

    let response = handlers::handle_menu(&state).await.unwrap().into_response();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()["content-type"],
        "text/html; charset=utf-8"
    );

    let html = body_of(response).await;
    assert!(html.starts_with("<nav><ul>"));
    assert!(html.find("About").unwrap() < html.find("Episodes").unwrap());
    assert!(temp_dir.path().join("menuindex.yml").exists());
}

#[tokio::test]
async fn test_menu_follows_edited_order() {
    let (state, temp_dir) = setup_test_context();
    page(&temp_dir, "About", "x");
    page(&temp_dir, "Contact", "x");
    fs::write(
        temp_dir.path().join("menuindex.yml"),
        "root: [contact, about]\n",
    )
    .unwrap();

    let html = body_of(handlers::handle_menu(&state).await.unwrap().into_response()).await;
    assert!(html.find("Contact").unwrap() < html.find("About").unwrap());
}

#[tokio::test]
async fn test_menu_scan_failure_is_500() {
    let (state, temp_dir) = setup_test_context();
    fs::remove_dir_all(temp_dir.path().join("content")).unwrap();

    let err = handlers::handle_menu(&state).await.unwrap_err();
    assert!(matches!(err, ApiError::Menu(_)));

    let response = err.into_response();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body_of(response).await, "Internal server error");
}

#[tokio::test]
async fn test_page_content_by_identifier() {
    let (state, temp_dir) = setup_test_context();
    page(&temp_dir, "Episodes/Season-1", "<h1>Season 1</h1>");

    let response = handlers::handle_page_content(&state, "episodes-season-1".to_string())
        .await
        .unwrap()
        .into_response();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_of(response).await, "<h1>Season 1</h1>");
}

#[tokio::test]
async fn test_page_content_unknown_is_404() {
    let (state, temp_dir) = setup_test_context();
    fs::create_dir_all(temp_dir.path().join("content").join("Heading")).unwrap();

    for id in ["missing", "heading", "..%2F..%2Fetc"] {
        let err = handlers::handle_page_content(&state, id.to_string())
            .await
            .unwrap_err();
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
