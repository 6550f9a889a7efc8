//! Route table.

use std::sync::Arc;

use axum::{Router, routing::get};
use tower_http::trace::TraceLayer;

use super::{handler, state::AppState};

/// Build the application router
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/health", get(handler::health_check))
        .route(
            "/api/clients",
            get(handler::list_clients).post(handler::register_client),
        )
        .route("/api/clients/{client_id}", get(handler::get_client))
        .route(
            "/api/rooms",
            get(handler::list_rooms).post(handler::create_room),
        )
        .route("/api/rooms/{room_id}", get(handler::get_room))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
