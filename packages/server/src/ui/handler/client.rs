//! Client registry endpoints.

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::{
    infrastructure::dto::http::{ClientRes, RegisterClientReq},
    ui::{error::HttpError, extract::WireJson, state::AppState},
    usecase::{GetClientUseCase, ListClientsUseCase, RegisterClientUseCase},
};

/// Register a new client
pub async fn register_client(
    State(state): State<Arc<AppState>>,
    WireJson(req): WireJson<RegisterClientReq>,
) -> Result<(StatusCode, Json<ClientRes>), HttpError> {
    let usecase = RegisterClientUseCase::new(state.client_repository.clone());
    let client = usecase.execute(req.username).await?;
    Ok((StatusCode::CREATED, Json(ClientRes::from(&client))))
}

/// Get list of registered clients
pub async fn list_clients(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<ClientRes>>, HttpError> {
    let usecase = ListClientsUseCase::new(state.client_repository.clone());
    let clients = usecase.execute().await?;
    Ok(Json(clients.iter().map(ClientRes::from).collect()))
}

/// Get client by ID
pub async fn get_client(
    State(state): State<Arc<AppState>>,
    Path(client_id): Path<String>,
) -> Result<Json<ClientRes>, HttpError> {
    let usecase = GetClientUseCase::new(state.client_repository.clone());
    let client = usecase.execute(client_id).await?;
    Ok(Json(ClientRes::from(&client)))
}
