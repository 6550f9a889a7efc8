//! Server bootstrap.

use std::{future::Future, sync::Arc};

use tokio::net::TcpListener;
use tsudoi_shared::time::get_jst_timestamp;

use crate::{
    config::ServerConfig,
    domain::Timestamp,
    error::ServerError,
    infrastructure::{
        repository::{InMemoryClientRepository, InMemoryRoomRepository},
        seed::load_pinned_rooms,
    },
};

use super::{router::build_router, signal::shutdown_signal, state::AppState};

/// Build state from `config`, bind and serve until a shutdown signal arrives.
pub async fn run(config: ServerConfig) -> Result<(), ServerError> {
    let state = build_state(&config).await?;

    let addr = config.bind_address();
    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|source| ServerError::Bind { addr, source })?;

    serve(listener, state, shutdown_signal()).await
}

/// Create the in-memory repositories, seeding pinned rooms when configured.
pub async fn build_state(config: &ServerConfig) -> Result<Arc<AppState>, ServerError> {
    let pinned_rooms = match &config.pinned_rooms {
        Some(path) => load_pinned_rooms(path, Timestamp::new(get_jst_timestamp())).await?,
        None => Vec::new(),
    };

    Ok(Arc::new(AppState::new(
        Arc::new(InMemoryRoomRepository::with_rooms(pinned_rooms)),
        Arc::new(InMemoryClientRepository::new()),
        config.room_policy(),
    )))
}

/// Serve on an already-bound listener until `shutdown` resolves.
pub async fn serve<F>(listener: TcpListener, state: Arc<AppState>, shutdown: F) -> Result<(), ServerError>
where
    F: Future<Output = ()> + Send + 'static,
{
    let local_addr = listener.local_addr().map_err(ServerError::Serve)?;
    tracing::info!("Listening on http://{}", local_addr);

    axum::serve(listener, build_router(state))
        .with_graceful_shutdown(shutdown)
        .await
        .map_err(ServerError::Serve)
}
