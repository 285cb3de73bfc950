use crate::maze::ROOT;
use crate::models::RoomResponse;
use crate::routes;
use axum::{http::StatusCode, Json};

/// POST /pathbot/start handler - Enter the maze at the origin
#[utoipa::path(
    post,
    path = routes::PATHBOT_START,
    responses(
        (status = 200, description = "Root room of the maze", body = RoomResponse)
    ),
    tag = "pathbot"
)]
pub async fn start_handler() -> (StatusCode, Json<RoomResponse>) {
    tracing::info!("Starting maze traversal at room 0");
    (StatusCode::OK, Json(RoomResponse::from(ROOT)))
}
