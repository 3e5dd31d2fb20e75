use std::time::Duration;

use axum::{
    http::{header, Method, StatusCode},
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::{
    handlers::{
        health::{healthz, livez},
        items::{create_item, delete_item, invoke, read_item, update_item},
    },
    state::AppState,
};

/// Create the application router with all routes and middleware.
pub fn create_app(state: AppState) -> Router {
    // CORS configuration for item endpoints
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE]);

    let item_routes = Router::new()
        .route(
            "/items",
            get(read_item)
                .post(create_item)
                .put(update_item)
                .delete(delete_item),
        )
        .route("/invoke/{operation}", post(invoke))
        .layer(cors);

    Router::new()
        .route("/livez", get(livez))
        .route("/healthz", get(healthz))
        .merge(item_routes)
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(10),
        ))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use http_body_util::BodyExt;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let body = response.into_body().collect().await.unwrap().to_bytes();
        let json = serde_json::from_slice(&body).unwrap();
        (status, json)
    }

    fn get_item(query: &str) -> Request<Body> {
        Request::builder()
            .uri(format!("/items?{query}"))
            .body(Body::empty())
            .unwrap()
    }

    fn with_body(method: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri("/items")
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_livez() {
        let app = create_app(AppState::default());

        let response = app
            .oneshot(Request::builder().uri("/livez").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_healthz_reports_backend() {
        let app = create_app(AppState::default());

        let (status, json) = send(
            &app,
            Request::builder().uri("/healthz").body(Body::empty()).unwrap(),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["healthy"], true);
        assert_eq!(json["table_name"], Value::Null);
    }

    #[tokio::test]
    async fn test_item_lifecycle() {
        let app = create_app(AppState::default());

        let (status, json) = send(
            &app,
            with_body(
                "POST",
                r#"{"year": 2014, "title": "Interstellar", "info": {"rating": 8.6}}"#,
            ),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(json, json!({}));

        let (status, json) = send(&app, get_item("year=2014&title=Interstellar")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            json,
            json!({"Item": {"year": 2014, "title": "Interstellar", "info": {"rating": 8.6}}})
        );

        let (status, json) = send(
            &app,
            with_body("PUT", r#"{"year": 2014, "title": "Interstellar"}"#),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json, json!({"Attributes": {"info": {}}}));

        let (_, json) = send(&app, get_item("year=2014&title=Interstellar")).await;
        assert_eq!(json["Item"]["info"], json!({}));

        let (status, json) = send(
            &app,
            with_body("DELETE", r#"{"year": 2014, "title": "Interstellar"}"#),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json, json!({}));

        let (status, json) = send(&app, get_item("year=2014&title=Interstellar")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json, json!({}));
    }

    #[tokio::test]
    async fn test_read_without_query_is_400() {
        let app = create_app(AppState::default());

        let (status, json) = send(
            &app,
            Request::builder().uri("/items").body(Body::empty()).unwrap(),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            json,
            json!({
                "errorType": "InvalidRequest",
                "errorMessage": "Please provide the year of the movie."
            })
        );
    }

    #[tokio::test]
    async fn test_create_without_body_is_400() {
        let app = create_app(AppState::default());

        let (status, json) = send(
            &app,
            Request::builder()
                .method("POST")
                .uri("/items")
                .body(Body::empty())
                .unwrap(),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            json["errorMessage"],
            "Request malformed: body element missing."
        );
    }

    #[tokio::test]
    async fn test_create_with_empty_title_is_500() {
        let app = create_app(AppState::default());

        let (status, json) = send(&app, with_body("POST", r#"{"year": 2014, "title": ""}"#)).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json["errorType"], "InvalidRequest");
        assert!(json["errorMessage"]
            .as_str()
            .unwrap()
            .starts_with("Unable to add item. Error JSON:"));
    }

    #[tokio::test]
    async fn test_non_utf8_body_is_malformed_envelope() {
        let app = create_app(AppState::default());

        for method in ["POST", "PUT", "DELETE"] {
            let response = app
                .clone()
                .oneshot(
                    Request::builder()
                        .method(method)
                        .uri("/items")
                        .header("Content-Type", "application/json")
                        .body(Body::from(vec![b'{', 0xff, 0xfe, b'}']))
                        .unwrap(),
                )
                .await
                .unwrap();

            assert_eq!(response.status(), StatusCode::BAD_REQUEST);
            assert_eq!(
                response.headers()[header::CONTENT_TYPE],
                "application/json"
            );
            let body = response.into_body().collect().await.unwrap().to_bytes();
            let json: Value = serde_json::from_slice(&body).unwrap();
            assert_eq!(
                json,
                json!({
                    "errorType": "InvalidRequest",
                    "errorMessage": "Request malformed: body is not valid JSON."
                })
            );
        }
    }

    #[tokio::test]
    async fn test_invoke_returns_envelope() {
        let app = create_app(AppState::default());
        let event = json!({
            "httpMethod": "POST",
            "body": "{\"year\": 1999, \"title\": \"The Matrix\"}"
        });

        let (status, json) = send(
            &app,
            Request::builder()
                .method("POST")
                .uri("/invoke/create")
                .header("Content-Type", "application/json")
                .body(Body::from(event.to_string()))
                .unwrap(),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json, json!({"statusCode": 201, "body": "{}"}));
    }

    #[tokio::test]
    async fn test_invoke_unknown_operation() {
        let app = create_app(AppState::default());

        let (status, json) = send(
            &app,
            Request::builder()
                .method("POST")
                .uri("/invoke/list")
                .header("Content-Type", "application/json")
                .body(Body::from("{}"))
                .unwrap(),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["statusCode"], 404);
    }
}
