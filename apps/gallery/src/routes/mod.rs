pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::layout::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Gallery API
        .route("/api/v1/gallery/columns", get(handlers::handle_columns))
        .route("/api/v1/gallery/arrange", post(handlers::handle_arrange))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    fn app() -> Router {
        build_router(AppState::new(Config::default()))
    }

    async fn send(request: Request<Body>) -> (StatusCode, Value) {
        let response = app().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, body)
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn slides(heights: &[f64]) -> Vec<Value> {
        heights
            .iter()
            .enumerate()
            .map(|(i, h)| json!({ "id": format!("upload-{i}"), "height": h }))
            .collect()
    }

    #[tokio::test]
    async fn test_health() {
        let request = Request::get("/health").body(Body::empty()).unwrap();
        let (status, body) = send(request).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
        assert_eq!(body["service"], "meowseum-gallery");
    }

    #[tokio::test]
    async fn test_columns_for_phone_width() {
        let request = Request::get("/api/v1/gallery/columns?viewport_width=400")
            .body(Body::empty())
            .unwrap();
        let (status, body) = send(request).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["column_count"], 2);
        assert_eq!(body["column_class"], "col-xs-6");
    }

    #[tokio::test]
    async fn test_arrange_by_viewport_width() {
        let request = post_json(
            "/api/v1/gallery/arrange",
            json!({ "items": slides(&[30.0, 10.0, 10.0, 10.0]), "viewport_width": 320 }),
        );
        let (status, body) = send(request).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["column_count"], 2);
        assert_eq!(body["column_class"], "col-xs-6");
        assert_eq!(body["columns"][0]["items"], json!(["upload-0"]));
        assert_eq!(
            body["columns"][1]["items"],
            json!(["upload-2", "upload-1", "upload-3"])
        );
        assert_eq!(body["columns"][1]["height"], 30.0);
        assert_eq!(body["report"]["transfers"], 1);
        assert_eq!(body["report"]["final_difference"], 0.0);
    }

    #[tokio::test]
    async fn test_arrange_by_explicit_column_count() {
        let request = post_json(
            "/api/v1/gallery/arrange",
            json!({ "items": slides(&[10.0; 7]), "column_count": 3 }),
        );
        let (status, body) = send(request).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["column_class"], "col-xs-4");
        let columns = body["columns"].as_array().unwrap();
        assert_eq!(columns.len(), 3);
        assert_eq!(columns[0]["height"], 30.0);
        assert_eq!(body["report"]["final_difference"], 10.0);
    }

    #[tokio::test]
    async fn test_arrange_empty_items() {
        let request = post_json(
            "/api/v1/gallery/arrange",
            json!({ "items": [], "viewport_width": 1600 }),
        );
        let (status, body) = send(request).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["column_count"], 4);
        assert_eq!(body["columns"], json!([]));
    }

    #[tokio::test]
    async fn test_arrange_requires_exactly_one_column_source() {
        let both = post_json(
            "/api/v1/gallery/arrange",
            json!({ "items": slides(&[1.0]), "viewport_width": 800, "column_count": 2 }),
        );
        let (status, body) = send(both).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");

        let neither = post_json("/api/v1/gallery/arrange", json!({ "items": slides(&[1.0]) }));
        let (status, _) = send(neither).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_arrange_rejects_zero_columns() {
        let request = post_json(
            "/api/v1/gallery/arrange",
            json!({ "items": slides(&[1.0, 2.0]), "column_count": 0 }),
        );
        let (status, body) = send(request).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"]["message"]
            .as_str()
            .unwrap()
            .contains("column_count"));
    }

    #[tokio::test]
    async fn test_arrange_rejects_column_count_above_limit() {
        for count in [13, usize::MAX] {
            let request = post_json(
                "/api/v1/gallery/arrange",
                json!({ "items": slides(&[1.0]), "column_count": count }),
            );
            let (status, body) = send(request).await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "column_count={count}");
            assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
        }
    }

    #[tokio::test]
    async fn test_arrange_accepts_column_count_at_limit() {
        let request = post_json(
            "/api/v1/gallery/arrange",
            json!({ "items": slides(&[5.0, 7.0]), "column_count": 12 }),
        );
        let (status, body) = send(request).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["columns"].as_array().unwrap().len(), 12);
        assert_eq!(body["column_class"], "col-xs-1");
    }

    #[tokio::test]
    async fn test_arrange_rejects_negative_height() {
        let request = post_json(
            "/api/v1/gallery/arrange",
            json!({ "items": [{ "id": "a", "height": -5.0 }], "column_count": 2 }),
        );
        let (status, _) = send(request).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }
}
