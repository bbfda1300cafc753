#![forbid(unsafe_code)]

use std::env;
use std::path::PathBuf;
use tokenize_server::{build_router, ApiConfig, AppState};
use tokio::net::TcpListener;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn env_bool(name: &str, default: bool) -> bool {
    env::var(name)
        .ok()
        .and_then(|v| match v.as_str() {
            "1" | "true" | "TRUE" | "yes" | "YES" => Some(true),
            "0" | "false" | "FALSE" | "no" | "NO" => Some(false),
            _ => None,
        })
        .unwrap_or(default)
}

fn env_usize(name: &str, default: usize) -> usize {
    env::var(name)
        .ok()
        .and_then(|v| v.parse::<usize>().ok())
        .unwrap_or(default)
}

fn env_path(name: &str, default: &str) -> PathBuf {
    PathBuf::from(env::var(name).unwrap_or_else(|_| default.to_string()))
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if env_bool("TOKENIZE_LOG_JSON", false) {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }
}

async fn wait_for_shutdown_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};
        let mut sigterm = signal(SignalKind::terminate()).expect("register SIGTERM");
        let mut sigint = signal(SignalKind::interrupt()).expect("register SIGINT");
        tokio::select! {
            _ = sigterm.recv() => {}
            _ = sigint.recv() => {}
        }
    }
    #[cfg(not(unix))]
    {
        let _ = tokio::signal::ctrl_c().await;
    }
}

#[tokio::main]
async fn main() -> Result<(), String> {
    init_tracing();

    let defaults = ApiConfig::default();
    let api_cfg = ApiConfig {
        source_path: env_path(
            "TOKENIZE_SOURCE_CSV",
            &defaults.source_path.to_string_lossy(),
        ),
        static_dir: env_path("TOKENIZE_STATIC_DIR", &defaults.static_dir.to_string_lossy()),
        max_body_bytes: env_usize("TOKENIZE_MAX_BODY_BYTES", defaults.max_body_bytes),
    };
    let bind_addr = env::var("TOKENIZE_BIND").unwrap_or_else(|_| "0.0.0.0:3030".to_string());

    // Phase one: load runs to completion before any connection is accepted,
    // so no request can observe a partially populated catalog. A failed load
    // leaves the query surface up over an empty catalog.
    let components = match tokenize_ingest::load_components(&api_cfg.source_path) {
        Ok(components) => {
            info!(
                source = %api_cfg.source_path.display(),
                count = components.len(),
                "component catalog loaded"
            );
            components
        }
        Err(e) => {
            error!(
                source = %api_cfg.source_path.display(),
                "catalog load failed, serving empty catalog: {e}"
            );
            Vec::new()
        }
    };

    let state = AppState::with_config(components, api_cfg);
    let app = build_router(state);

    let listener = TcpListener::bind(&bind_addr)
        .await
        .map_err(|e| format!("bind {bind_addr} failed: {e}"))?;
    info!("tokenize-server listening on {bind_addr}");
    axum::serve(listener, app)
        .with_graceful_shutdown(wait_for_shutdown_signal())
        .await
        .map_err(|e| format!("server failed: {e}"))
}
