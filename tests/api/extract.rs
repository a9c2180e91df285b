use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use serde_json::json;

use crate::helpers::{send, TestApp};

#[tokio::test]
async fn malformed_json_body_gets_the_envelope() {
    let app = TestApp::spawn().await;
    let request = Request::builder()
        .method(Method::POST)
        .uri("/users/register")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .unwrap();

    let (status, body) = send(&app.router, request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["status"], 400);
    assert!(body["data"].is_string());
}

#[tokio::test]
async fn missing_user_id_query_gets_the_envelope() {
    let app = TestApp::spawn().await;
    let (_, token) = app.account("ana").await;

    let (status, body) = app
        .request(
            Method::PUT,
            "/users",
            Some(&token),
            Some(json!({ "username": "ana2", "email": "ana2@example.com" })),
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["status"], 400);
    assert!(body["data"].as_str().unwrap().contains("userId"));
}

#[tokio::test]
async fn non_numeric_id_gets_the_envelope() {
    let app = TestApp::spawn().await;
    let (_, token) = app.account("ana").await;

    for uri in ["/photos/abc", "/comments/abc", "/socialmedias/abc"] {
        let (status, body) = app.request(Method::DELETE, uri, Some(&token), None).await;

        assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
        assert_eq!(body["status"], 400, "{uri}");
        assert!(body["data"].is_string(), "{uri}");
    }
}
