use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api_doc::ApiDoc;
use crate::handlers::{health_handler, move_handler, start_handler};
use crate::routes;

/// Assemble the full HTTP surface of the service
pub fn build_router() -> Router {
    Router::new()
        .route(routes::HEALTH, get(health_handler))
        .route(routes::PATHBOT_START, post(start_handler))
        .route(routes::PATHBOT_ROOM, post(move_handler))
        .merge(SwaggerUi::new(routes::SWAGGER_UI).url(routes::OPENAPI_JSON, ApiDoc::openapi()))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{header, Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    async fn post_json(app: &Router, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let request = match body {
            Some(body) => Request::builder()
                .method("POST")
                .uri(uri)
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => Request::builder()
                .method("POST")
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        };

        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&body).unwrap())
    }

    #[tokio::test]
    async fn test_end_to_end_traversal() {
        let app = build_router();
        let root = json!({
            "status": "in-progress",
            "exits": ["N", "E", "S"],
            "locationPath": "/pathbot/rooms/0"
        });

        let (status, body) = post_json(&app, "/pathbot/start", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, root);

        let location = body["locationPath"].as_str().unwrap().to_string();
        let (status, body) = post_json(&app, &location, Some(json!({ "direction": "E" }))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "status": "finished" }));

        let (status, body) = post_json(&app, &location, Some(json!({ "direction": "N" }))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({
                "status": "in-progress",
                "exits": ["N", "S"],
                "locationPath": "/pathbot/rooms/-1"
            })
        );

        let location = body["locationPath"].as_str().unwrap().to_string();
        let (status, body) = post_json(&app, &location, Some(json!({ "direction": "S" }))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, root);
    }

    #[tokio::test]
    async fn test_walk_south_and_back() {
        let app = build_router();
        let mut location = "/pathbot/rooms/0".to_string();

        for expected in 1..=3 {
            let (status, body) = post_json(&app, &location, Some(json!({ "direction": "S" }))).await;
            assert_eq!(status, StatusCode::OK);
            location = body["locationPath"].as_str().unwrap().to_string();
            assert_eq!(location, format!("/pathbot/rooms/{}", expected));
        }

        for _ in 0..3 {
            let (status, body) = post_json(&app, &location, Some(json!({ "direction": "N" }))).await;
            assert_eq!(status, StatusCode::OK);
            location = body["locationPath"].as_str().unwrap().to_string();
        }

        assert_eq!(location, "/pathbot/rooms/0");
    }

    #[tokio::test]
    async fn test_bad_move_through_full_stack() {
        let app = build_router();
        let (status, body) =
            post_json(&app, "/pathbot/rooms/5", Some(json!({ "direction": "W" }))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({ "message": "bad move" }));
    }

    #[tokio::test]
    async fn test_cross_origin_requests_allowed() {
        let app = build_router();

        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/pathbot/start")
                    .header(header::ORIGIN, "http://example.com")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
            "*"
        );

        let preflight = app
            .oneshot(
                Request::builder()
                    .method("OPTIONS")
                    .uri("/pathbot/rooms/0")
                    .header(header::ORIGIN, "http://example.com")
                    .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
                    .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "content-type")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(preflight.status(), StatusCode::OK);
        assert!(preflight
            .headers()
            .contains_key(header::ACCESS_CONTROL_ALLOW_METHODS));
    }

    #[tokio::test]
    async fn test_openapi_document_served() {
        let response = build_router()
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri("/api-docs/openapi.json")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let doc: Value = serde_json::from_slice(&body).unwrap();
        assert!(doc["paths"]["/pathbot/start"].is_object());
    }

    #[tokio::test]
    async fn test_unknown_route_not_found() {
        let response = build_router()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/pathbot/elsewhere")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
