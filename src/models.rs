use serde::{Deserialize, Serialize};

use crate::maze::{Direction, RoomState};
use crate::routes;

/// Request body for a move
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct MoveRequest {
    /// One of `N`, `E` or `S`
    pub direction: Option<String>,
}

/// Traversal status reported with every room
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "kebab-case")]
pub enum RoomStatus {
    InProgress,
    Finished,
}

/// Room descriptor returned by the start and move endpoints
#[derive(Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RoomResponse {
    pub status: RoomStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exits: Option<Vec<Direction>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location_path: Option<String>,
}

impl From<RoomState> for RoomResponse {
    fn from(state: RoomState) -> Self {
        match state {
            RoomState::InProgress { room } => RoomResponse {
                status: RoomStatus::InProgress,
                exits: Some(state.exits().to_vec()),
                location_path: Some(routes::room_path(room)),
            },
            RoomState::Finished => RoomResponse {
                status: RoomStatus::Finished,
                exits: None,
                location_path: None,
            },
        }
    }
}
