// Route path constants - single source of truth for all API paths

pub const HEALTH: &str = "/health";
pub const PATHBOT_START: &str = "/pathbot/start";
pub const PATHBOT_ROOMS: &str = "/pathbot/rooms";
pub const PATHBOT_ROOM: &str = "/pathbot/rooms/{room}";
pub const SWAGGER_UI: &str = "/swagger-ui";
pub const OPENAPI_JSON: &str = "/api-docs/openapi.json";

/// Location path advertised for a room
pub fn room_path(room: i64) -> String {
    format!("{}/{}", PATHBOT_ROOMS, room)
}
