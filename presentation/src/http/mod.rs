//! HTTP API
//!
//! Routes live under `/api`; every response, errors included, carries
//! permissive CORS headers.

pub mod cors;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod state;

pub use error::{ApiError, ErrorBody};
pub use state::AppState;

use axum::routing::{delete, get, post};
use axum::{Router, middleware};
use std::future::Future;
use tokio::net::TcpListener;
use tracing::info;

pub fn build_router(state: AppState) -> Router {
    let api = Router::new()
        .route("/categories", get(handlers::list_categories))
        .route(
            "/categories/{id}/questions",
            get(handlers::list_category_questions),
        )
        .route(
            "/questions",
            get(handlers::list_questions).post(handlers::post_questions),
        )
        .route("/questions/{id}", delete(handlers::delete_question))
        .route("/quizzes", post(handlers::play_quiz))
        .method_not_allowed_fallback(handlers::method_not_allowed);

    Router::new()
        .route("/", get(handlers::health))
        .nest("/api", api)
        .fallback(handlers::not_found)
        .method_not_allowed_fallback(handlers::method_not_allowed)
        .layer(middleware::from_fn(cors::cors))
        .with_state(state)
}

/// Serve the API on `listener` until `shutdown` resolves
pub async fn serve(
    listener: TcpListener,
    state: AppState,
    shutdown: impl Future<Output = ()> + Send + 'static,
) -> std::io::Result<()> {
    if let Ok(addr) = listener.local_addr() {
        info!("Trivia API listening on http://{}", addr);
    }
    axum::serve(listener, build_router(state))
        .with_graceful_shutdown(shutdown)
        .await
}
