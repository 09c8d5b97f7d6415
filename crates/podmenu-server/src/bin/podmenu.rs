//! Podmenu HTTP Server Binary Entry Point

use std::path::PathBuf;
use std::process::ExitCode;

use podmenu_core::{MenuConfig, MenuEngine, MenuError};
use podmenu_server::{build_router, AppState};
use tokio::net::TcpListener;

const CONFIG_ENV: &str = "PODMENU_CONFIG";
const DEFAULT_CONFIG: &str = "podmenu.yml";

fn load_config() -> Result<MenuConfig, MenuError> {
    let path = std::env::var_os(CONFIG_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG));
    MenuConfig::load(&path)
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        log::error!("cannot listen for shutdown signal: {err}");
    }
    log::info!("shutting down");
}

#[tokio::main]
async fn main() -> ExitCode {
    let config = match load_config() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("podmenu: {err}");
            return ExitCode::FAILURE;
        }
    };

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.logging.level.as_str()),
    )
    .init();

    log::info!(
        "serving menu for {:?} (order file {:?})",
        config.content_root,
        config.order_file
    );

    let bind = config.server.bind.clone();
    let router = build_router(AppState::new(MenuEngine::physical(config)));

    let listener = match TcpListener::bind(&bind).await {
        Ok(listener) => listener,
        Err(err) => {
            log::error!("cannot bind {bind}: {err}");
            return ExitCode::FAILURE;
        }
    };
    log::info!("listening on {bind}");

    if let Err(err) = axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        log::error!("server failed: {err}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
