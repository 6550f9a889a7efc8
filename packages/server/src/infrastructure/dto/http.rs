//! HTTP API request/response DTOs for the chat room directory.
//!
//! Optional fields are `Option<String>` and are omitted from the payload
//! when `None`; they are never encoded as `null` or `""`.

use serde::{Deserialize, Serialize};

use crate::domain::{Client, Room};

use super::decode::WireShape;

/// Request body for `POST /api/rooms`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateRoomReq {
    /// Proposed room id; `None` lets the server assign one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
}

impl WireShape for CreateRoomReq {
    const SHAPE: &'static str = "CreateRoomReq";
    const REQUIRED: &'static [&'static str] = &["name"];
}

/// Request body for `POST /api/clients`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterClientReq {
    pub username: String,
}

impl WireShape for RegisterClientReq {
    const SHAPE: &'static str = "RegisterClientReq";
    const REQUIRED: &'static [&'static str] = &["username"];
}

/// A registered client
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientRes {
    pub id: String,
    pub username: String,
}

impl From<&Client> for ClientRes {
    fn from(client: &Client) -> Self {
        Self {
            id: client.id.as_str().to_string(),
            username: client.username.as_str().to_string(),
        }
    }
}

/// A room as listed by the API
///
/// The four `topic_*` keys are flattened from the room's single optional
/// topic, so they are either all present or all absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomRes {
    pub id: String,
    pub name: String,
    pub is_pinned: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub topic_title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub topic_description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub topic_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub topic_source: Option<String>,
}

impl From<&Room> for RoomRes {
    fn from(room: &Room) -> Self {
        let topic = room.topic.as_ref();
        Self {
            id: room.id.as_str().to_string(),
            name: room.name.as_str().to_string(),
            is_pinned: room.is_pinned,
            topic_title: topic.map(|t| t.title.clone()),
            topic_description: topic.map(|t| t.description.clone()),
            topic_url: topic.map(|t| t.url.clone()),
            topic_source: topic.map(|t| t.source.clone()),
        }
    }
}
