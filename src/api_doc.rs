use utoipa::OpenApi;

use crate::error::{ErrorResponse, HealthResponse};
use crate::handlers;
use crate::maze::Direction;
use crate::models::{MoveRequest, RoomResponse, RoomStatus};

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "pathbot-mock API",
        version = "1.0.0",
        description = "A deterministic Pathbot maze server for exercising maze clients"
    ),
    paths(
        handlers::health::health_handler,
        handlers::start::start_handler,
        handlers::rooms::move_handler
    ),
    components(
        schemas(
            MoveRequest,
            RoomResponse,
            RoomStatus,
            Direction,
            ErrorResponse,
            HealthResponse
        )
    ),
    tags(
        (name = "health", description = "Health check operations"),
        (name = "pathbot", description = "Maze traversal operations")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_lists_pathbot_routes() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&String> = doc.paths.paths.keys().collect();

        assert!(paths.iter().any(|p| p.as_str() == "/pathbot/start"));
        assert!(paths.iter().any(|p| p.as_str() == "/pathbot/rooms/{room}"));
        assert!(paths.iter().any(|p| p.as_str() == "/health"));
    }
}
