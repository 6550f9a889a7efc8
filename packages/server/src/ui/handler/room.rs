//! Room endpoints.

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::{
    infrastructure::dto::http::{CreateRoomReq, RoomRes},
    ui::{
        error::HttpError,
        extract::{CallerId, WireJson},
        state::AppState,
    },
    usecase::{CreateRoomUseCase, GetRoomUseCase, ListRoomsUseCase},
};

/// Get list of rooms, pinned rooms first
pub async fn list_rooms(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<RoomRes>>, HttpError> {
    let usecase = ListRoomsUseCase::new(state.room_repository.clone());
    let rooms = usecase.execute().await?;
    Ok(Json(rooms.iter().map(RoomRes::from).collect()))
}

/// Create a room owned by the calling client
pub async fn create_room(
    State(state): State<Arc<AppState>>,
    CallerId(caller): CallerId,
    WireJson(req): WireJson<CreateRoomReq>,
) -> Result<(StatusCode, Json<RoomRes>), HttpError> {
    let usecase = CreateRoomUseCase::new(
        state.room_repository.clone(),
        state.client_repository.clone(),
        state.room_policy.clone(),
        state.room_creation_lock.clone(),
    );
    let room = usecase.execute(caller, req.id, req.name).await?;
    Ok((StatusCode::CREATED, Json(RoomRes::from(&room))))
}

/// Get room detail by ID
pub async fn get_room(
    State(state): State<Arc<AppState>>,
    Path(room_id): Path<String>,
) -> Result<Json<RoomRes>, HttpError> {
    let usecase = GetRoomUseCase::new(state.room_repository.clone());
    let room = usecase.execute(room_id).await?;
    Ok(Json(RoomRes::from(&room)))
}
