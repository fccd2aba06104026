// Library root - the binary and the integration tests build the router from here

pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod store;
pub mod utils;

pub use config::Config;
pub use error::ApiError;
pub use models::ThemeRecord;
pub use store::{SharedThemeStore, ThemeStore};

use axum::{
    routing::get,
    Router,
};
use std::sync::Arc;
use tower::ServiceBuilder;

#[derive(Clone)]
pub struct AppState {
    pub store: SharedThemeStore,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(store: SharedThemeStore, config: Arc<Config>) -> Self {
        Self { store, config }
    }
}

/// Builds the full HTTP surface: theme API, docs page and health check.
pub fn build_router(state: AppState) -> Router {
    let cors_permissive = state.config.cors_permissive;

    let router = Router::new()
        .route("/health", get(handlers::health_check))
        .route("/api-docs", get(handlers::api_docs))
        .route(
            "/api/themes",
            get(handlers::list_themes).post(handlers::create_theme),
        )
        .route("/api/themes/:id", get(handlers::get_theme))
        .layer(
            ServiceBuilder::new()
                .layer(tower_http::trace::TraceLayer::new_for_http())
                .layer(axum::middleware::from_fn(
                    middleware::security_headers_middleware,
                )),
        )
        .with_state(state);

    if cors_permissive {
        router.layer(tower_http::cors::CorsLayer::permissive())
    } else {
        router
    }
}
