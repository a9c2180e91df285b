use axum::http::{Method, StatusCode};
use serde_json::json;

use crate::helpers::TestApp;

#[tokio::test]
async fn create_and_list_photos_with_owner() {
    let app = TestApp::spawn().await;
    let (ana, token) = app.account("ana").await;

    let (status, body) = app
        .request(
            Method::POST,
            "/photos",
            Some(&token),
            Some(json!({
                "title": "sunset",
                "caption": "over the bay",
                "photo_url": "https://photo.domain.com/sunset.jpg",
            })),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["data"]["title"], "sunset");
    assert_eq!(body["data"]["user_id"], ana);

    let (status, body) = app.request(Method::GET, "/photos", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    let photos = body["data"].as_array().unwrap();
    assert_eq!(photos.len(), 1);
    assert_eq!(photos[0]["caption"], "over the bay");
    assert_eq!(photos[0]["user"]["username"], "ana");
    assert_eq!(photos[0]["user"]["email"], "ana@example.com");
}

#[tokio::test]
async fn photo_requires_title_and_url() {
    let app = TestApp::spawn().await;
    let (_, token) = app.account("ana").await;

    for payload in [
        json!({ "title": "", "photo_url": "https://photo.domain.com/1.jpg" }),
        json!({ "title": "sunset", "photo_url": "" }),
    ] {
        let (status, _) = app
            .request(Method::POST, "/photos", Some(&token), Some(payload))
            .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }
}

#[tokio::test]
async fn photos_require_authentication() {
    let app = TestApp::spawn().await;

    let (status, body) = app.request(Method::GET, "/photos", None, None).await;

    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["data"], "FORBIDDEN");
}

#[tokio::test]
async fn owner_can_update_and_delete() {
    let app = TestApp::spawn().await;
    let (_, token) = app.account("ana").await;
    let id = app.post_photo(&token, "sunset").await;

    let (status, body) = app
        .request(
            Method::PUT,
            &format!("/photos/{id}"),
            Some(&token),
            Some(json!({
                "title": "sunrise",
                "caption": "early",
                "photo_url": "https://photo.domain.com/sunrise.jpg",
            })),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["title"], "sunrise");
    assert_eq!(body["data"]["photo_url"], "https://photo.domain.com/sunrise.jpg");

    let (status, body) = app
        .request(Method::DELETE, &format!("/photos/{id}"), Some(&token), None)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["data"]["message"],
        "Your photo has been successfully deleted"
    );

    let (_, body) = app.request(Method::GET, "/photos", Some(&token), None).await;
    assert!(body["data"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn other_accounts_cannot_touch_a_photo() {
    let app = TestApp::spawn().await;
    let (_, owner) = app.account("ana").await;
    let (_, intruder) = app.account("bob").await;
    let id = app.post_photo(&owner, "sunset").await;

    let (status, body) = app
        .request(
            Method::PUT,
            &format!("/photos/{id}"),
            Some(&intruder),
            Some(json!({ "title": "mine now", "photo_url": "https://evil.example.com/x.jpg" })),
        )
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["data"], "UNAUTHORIZED");

    let (status, _) = app
        .request(Method::DELETE, &format!("/photos/{id}"), Some(&intruder), None)
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (_, body) = app.request(Method::GET, "/photos", Some(&owner), None).await;
    assert_eq!(body["data"][0]["title"], "sunset");
}

#[tokio::test]
async fn missing_photo_is_not_found() {
    let app = TestApp::spawn().await;
    let (_, token) = app.account("ana").await;

    let (status, _) = app
        .request(Method::DELETE, "/photos/999", Some(&token), None)
        .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn deleting_a_photo_removes_its_comments() {
    let app = TestApp::spawn().await;
    let (_, owner) = app.account("ana").await;
    let (_, fan) = app.account("bob").await;
    let photo = app.post_photo(&owner, "sunset").await;

    let (status, _) = app
        .request(
            Method::POST,
            "/comments",
            Some(&fan),
            Some(json!({ "photo_id": photo, "message": "lovely" })),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, _) = app
        .request(Method::DELETE, &format!("/photos/{photo}"), Some(&owner), None)
        .await;
    assert_eq!(status, StatusCode::OK);

    let (_, body) = app.request(Method::GET, "/comments", Some(&fan), None).await;
    assert!(body["data"].as_array().unwrap().is_empty());
}
