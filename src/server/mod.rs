use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use crate::storage::Database;

pub mod routes;

/// Server state
pub struct AppState {
    pub db: Database,
}

/// Build the HTTP router over an explicitly constructed storage client
pub fn router(db: Database) -> Router {
    let state = Arc::new(AppState { db });

    Router::new()
        .route("/questions", post(routes::create_question))
        .route("/questions/", post(routes::create_question))
        .route("/questions/{id}", get(routes::get_question))
        .route("/stats", get(routes::get_stats))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

pub async fn start_server(host: &str, port: u16, db: Database) -> anyhow::Result<()> {
    let app = router(db);

    let listener = tokio::net::TcpListener::bind((host, port)).await?;
    let addr = listener.local_addr()?;
    tracing::info!("Starting server on {}", addr);
    if !crate::output::is_quiet() {
        println!("🌍 Server running at http://{}", addr);
    }

    axum::serve(listener, app).await?;

    Ok(())
}
