use axum::http::{Method, StatusCode};
use serde_json::{json, Value};

use crate::helpers::TestApp;

async fn comment(app: &TestApp, token: &str, photo_id: i64, message: &str) -> (StatusCode, Value) {
    app.request(
        Method::POST,
        "/comments",
        Some(token),
        Some(json!({ "photo_id": photo_id, "message": message })),
    )
    .await
}

#[tokio::test]
async fn comment_on_a_photo_and_list_it() {
    let app = TestApp::spawn().await;
    let (ana, owner) = app.account("ana").await;
    let (bob, fan) = app.account("bob").await;
    let photo = app.post_photo(&owner, "sunset").await;

    let (status, body) = comment(&app, &fan, photo, "lovely").await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["data"]["message"], "lovely");
    assert_eq!(body["data"]["user_id"], bob);
    assert_eq!(body["data"]["photo_id"], photo);

    let (status, body) = app.request(Method::GET, "/comments", Some(&owner), None).await;
    assert_eq!(status, StatusCode::OK);
    let comments = body["data"].as_array().unwrap();
    assert_eq!(comments.len(), 1);
    assert_eq!(comments[0]["user"]["id"], bob);
    assert_eq!(comments[0]["user"]["username"], "bob");
    assert_eq!(comments[0]["photo"]["id"], photo);
    assert_eq!(comments[0]["photo"]["title"], "sunset");
    assert_eq!(comments[0]["photo"]["user_id"], ana);
}

#[tokio::test]
async fn comment_needs_an_existing_photo() {
    let app = TestApp::spawn().await;
    let (_, token) = app.account("ana").await;

    let (status, _) = comment(&app, &token, 999, "hello?").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = comment(&app, &token, 0, "hello?").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn empty_message_is_rejected() {
    let app = TestApp::spawn().await;
    let (_, token) = app.account("ana").await;
    let photo = app.post_photo(&token, "sunset").await;

    let (status, _) = comment(&app, &token, photo, "   ").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn author_edits_and_deletes_comment() {
    let app = TestApp::spawn().await;
    let (_, token) = app.account("ana").await;
    let photo = app.post_photo(&token, "sunset").await;
    let (_, body) = comment(&app, &token, photo, "first").await;
    let id = body["data"]["id"].as_i64().unwrap();

    let (status, body) = app
        .request(
            Method::PUT,
            &format!("/comments/{id}"),
            Some(&token),
            Some(json!({ "message": "edited" })),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["message"], "edited");

    let (status, body) = app
        .request(Method::DELETE, &format!("/comments/{id}"), Some(&token), None)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["data"]["message"],
        "Your comment has been successfully deleted"
    );
}

#[tokio::test]
async fn only_the_author_may_change_a_comment() {
    let app = TestApp::spawn().await;
    let (_, owner) = app.account("ana").await;
    let (_, fan) = app.account("bob").await;
    let photo = app.post_photo(&owner, "sunset").await;
    let (_, body) = comment(&app, &fan, photo, "lovely").await;
    let id = body["data"]["id"].as_i64().unwrap();

    // Owning the photo does not grant rights over comments on it.
    let (status, _) = app
        .request(
            Method::PUT,
            &format!("/comments/{id}"),
            Some(&owner),
            Some(json!({ "message": "censored" })),
        )
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _) = app
        .request(Method::DELETE, &format!("/comments/{id}"), Some(&owner), None)
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _) = app
        .request(Method::DELETE, "/comments/999", Some(&owner), None)
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
