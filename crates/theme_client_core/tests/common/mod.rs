#![allow(dead_code)]

use std::sync::Arc;

use theme_api::{build_router, AppState, Config, SharedThemeStore, ThemeStore};

/// Serves the real theme API on an ephemeral port; returns its base URL and store.
pub async fn spawn_server() -> (String, SharedThemeStore) {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind test listener");
    let addr = listener.local_addr().expect("local addr");
    let store = ThemeStore::shared();
    let app = build_router(AppState::new(store.clone(), Arc::new(Config::default())));
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("test server");
    });
    (format!("http://{}", addr), store)
}

/// Base URL of a port nothing is listening on.
pub async fn unreachable_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind probe listener");
    let addr = listener.local_addr().expect("local addr");
    drop(listener);
    format!("http://{}", addr)
}
