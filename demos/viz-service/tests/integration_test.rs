use axum::{
    body::{to_bytes, Body},
    http::{header, Request, StatusCode},
    Router,
};
use serde_json::json;
use tower::ServiceExt;
use viz_service::{build_router, config::Config, state::AppState};

fn app() -> Router {
    build_router(AppState::new(Config::default()))
}

async fn get(uri: &str) -> (StatusCode, Option<String>, Vec<u8>) {
    let response = app()
        .oneshot(Request::get(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    split(response).await
}

async fn post_json(uri: &str, body: serde_json::Value) -> (StatusCode, Option<String>, Vec<u8>) {
    let request = Request::post(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    split(app().oneshot(request).await.unwrap()).await
}

async fn split(response: axum::response::Response) -> (StatusCode, Option<String>, Vec<u8>) {
    let status = response.status();
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_owned);
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, content_type, body.to_vec())
}

fn count(svg: &[u8], tag: &str) -> usize {
    let text = std::str::from_utf8(svg).unwrap();
    let doc = roxmltree::Document::parse(text).unwrap();
    assert_eq!(doc.root_element().tag_name().name(), "svg");
    doc.descendants()
        .filter(|n| n.is_element() && n.tag_name().name() == tag)
        .count()
}

#[tokio::test]
async fn test_health() {
    let (status, _, body) = get("/health").await;
    assert_eq!(status, StatusCode::OK);
    let body: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn test_viz_scalars() {
    let (status, content_type, body) = get("/viz?type=int&v=5").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(content_type.as_deref(), Some("image/svg+xml"));
    assert_eq!(count(&body, "rect"), 2);

    let (_, _, body) = get("/viz?type=float&v=-0.5").await;
    assert_eq!(count(&body, "circle"), 1);

    let (_, _, body) = get("/viz?type=bool&v=true").await;
    assert_eq!(count(&body, "polygon"), 1);

    let (status, _, _) = get("/viz?type=string&v=hi").await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_viz_rejects_bad_input() {
    for uri in ["/viz?type=int&v=abc", "/viz?type=matrix&v=1", "/viz?v=1", "/viz?type=byte&v=300"] {
        let (status, content_type, body) = get(uri).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{}", uri);
        assert_eq!(content_type.as_deref(), Some("application/json"));
        let body: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(body["error"], "InvalidRequest");
    }
}

#[tokio::test]
async fn test_struct_demo() {
    let (status, _, body) = get("/struct").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(count(&body, "rect"), 5);
    assert_eq!(count(&body, "circle"), 1);
    assert_eq!(count(&body, "polygon"), 1);
}

#[tokio::test]
async fn test_slice_demo() {
    let (status, _, body) = get("/slice").await;
    assert_eq!(status, StatusCode::OK);
    let text = String::from_utf8(body.clone()).unwrap();
    assert!(text.contains(r#"viewBox="0 0 900 900""#));
    // Every item draws its own float and the float of its inner record.
    assert_eq!(count(&body, "circle"), 32);
    // Eight flags per item.
    assert_eq!(count(&body, "polygon"), 16 * 8);
}

#[tokio::test]
async fn test_marshal_endpoint() {
    let (status, content_type, body) =
        post_json("/api/v1/marshal", json!({ "size": 200.0, "data": [true, false] })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(content_type.as_deref(), Some("image/svg+xml"));
    assert_eq!(count(&body, "polygon"), 2);
}

#[tokio::test]
async fn test_marshal_encode_failure_is_unprocessable() {
    let (status, _, body) = post_json("/api/v1/marshal", json!({ "size": -1.0, "data": 1 })).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    let body: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(body["error"], "EncodeError");
}

#[tokio::test]
async fn test_marshal_rejects_oversized_documents() {
    let (status, _, _) = post_json("/api/v1/marshal", json!({ "size": 1e9, "data": 1 })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}
