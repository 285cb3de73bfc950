use crate::error::{ApiError, ErrorResponse};
use crate::maze;
use crate::models::{MoveRequest, RoomResponse};
use crate::routes;
use axum::{
    extract::{rejection::JsonRejection, Path},
    http::StatusCode,
    Json,
};

/// POST /pathbot/rooms/:room handler - Move out of a room
///
/// The maze is rebuilt from the room in the path on every request. A body
/// that cannot be read as a move is treated like an unknown direction.
#[utoipa::path(
    post,
    path = routes::PATHBOT_ROOM,
    params(
        ("room" = i64, Path, description = "Current room number")
    ),
    request_body = MoveRequest,
    responses(
        (status = 200, description = "Room reached by the move", body = RoomResponse),
        (status = 400, description = "Bad move or bad room", body = ErrorResponse)
    ),
    tag = "pathbot"
)]
pub async fn move_handler(
    Path(room_str): Path<String>,
    payload: Result<Json<MoveRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<RoomResponse>), ApiError> {
    let room = maze::parse_room(&room_str)?;

    let direction = match payload {
        Ok(Json(request)) => request.direction.unwrap_or_default(),
        Err(rejection) => {
            tracing::debug!("Unreadable move from room {}: {}", room, rejection);
            return Err(ApiError::BadMove);
        }
    };

    match maze::resolve(room, &direction) {
        Ok(next) => {
            tracing::info!("Moved {} from room {} to {:?}", direction, room, next);
            if next.is_root() {
                tracing::debug!("Traversal returned to the origin");
            }
            Ok((StatusCode::OK, Json(RoomResponse::from(next))))
        }
        Err(e) => {
            tracing::debug!("Rejected move from room {}: {}", room, e);
            Err(e.into())
        }
    }
}
