#![forbid(unsafe_code)]

use axum::extract::DefaultBodyLimit;
use axum::routing::get;
use axum::Router;
use std::sync::atomic::AtomicU64;
use std::sync::Arc;
use tokenize_model::Component;
use tower_http::cors::CorsLayer;
use tower_http::services::{ServeDir, ServeFile};

mod config;
mod http;
mod middleware;

pub const CRATE_NAME: &str = "tokenize-server";

pub use config::ApiConfig;

/// Shared, read-only state handed to every handler. The catalog is fixed at
/// startup (possibly empty, when the load failed) and no handler holds
/// mutation rights over it.
#[derive(Clone)]
pub struct AppState {
    pub components: Arc<Vec<Component>>,
    pub api: ApiConfig,
    pub(crate) request_id_seed: Arc<AtomicU64>,
}

impl AppState {
    #[must_use]
    pub fn new(components: Vec<Component>) -> Self {
        Self::with_config(components, ApiConfig::default())
    }

    #[must_use]
    pub fn with_config(components: Vec<Component>, api: ApiConfig) -> Self {
        Self {
            components: Arc::new(components),
            api,
            request_id_seed: Arc::new(AtomicU64::new(1)),
        }
    }
}

pub fn build_router(state: AppState) -> Router {
    let index = state.api.static_dir.join("index.html");
    let frontend =
        ServeDir::new(&state.api.static_dir).not_found_service(ServeFile::new(index));
    Router::new()
        .route("/healthz", get(http::handlers::healthz_handler))
        .route("/api/components", get(http::handlers::list_all_handler))
        .route(
            "/api/components/:main_type",
            get(http::handlers::list_by_main_type_handler),
        )
        .route(
            "/api/components/:main_type/:sub_type",
            get(http::handlers::list_by_main_and_sub_type_handler),
        )
        .fallback_service(frontend)
        .layer(axum::middleware::from_fn_with_state(
            state.clone(),
            middleware::request_tracing::request_tracing_middleware,
        ))
        .layer(CorsLayer::permissive())
        .layer(DefaultBodyLimit::max(state.api.max_body_bytes))
        .with_state(state)
}
