//! Axum router configuration with middleware.
//!
//! Every route is served both at the root and under `/api`.
//! Middleware: CORS (any origin), request tracing.

use axum::Router;
use axum::routing::{delete, get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::http::handlers;
use crate::http::response::ApiResponse;
use crate::state::AppState;

/// Build the complete API router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_routes = api_routes();

    Router::new()
        .merge(api_routes.clone())
        .nest("/api", api_routes)
        .route("/health", get(health_check))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn api_routes() -> Router<AppState> {
    Router::new()
        // Chat sessions
        .route("/chat/start", post(handlers::chat::start_chat))
        .route("/chat/send", post(handlers::chat::send_message))
        .route(
            "/chat/history/{session_id}",
            get(handlers::chat::get_history),
        )
        .route("/chat/sessions", get(handlers::chat::list_sessions))
        .route(
            "/chat/delete/{session_id}",
            delete(handlers::chat::delete_session),
        )
        // Story catalog
        .route(
            "/stories",
            get(handlers::story::list_stories).post(handlers::story::create_story),
        )
        .route("/stories/stats", get(handlers::story::get_stats))
        .route(
            "/stories/{id}",
            get(handlers::story::get_story)
                .put(handlers::story::update_story)
                .delete(handlers::story::delete_story),
        )
}

#[derive(serde::Serialize)]
struct Health {
    status: &'static str,
    version: &'static str,
}

/// GET /health - Liveness probe.
async fn health_check() -> ApiResponse<Health> {
    ApiResponse::success(Health {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}
