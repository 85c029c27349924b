use axum::http::StatusCode;

use crate::helpers::spawn_app;

const POST: &str = r#"{"title":"Hello","content":"World"}"#;

#[tokio::test]
async fn home_greets() {
    let app = spawn_app().await;

    let response = app.get("/").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, "Hello, world! This is my blog API.");
}

#[tokio::test]
async fn unknown_route_is_not_found() {
    let app = spawn_app().await;

    let response = app.get("/nowhere").await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn create_post_without_header_is_rejected() {
    let app = spawn_app().await;

    let response = app.create_post(POST, None).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body, "Missing Authorization header");
    assert_eq!(app.get("/posts").await.json(), serde_json::json!([]));
}

#[tokio::test]
async fn create_post_without_bearer_prefix_is_rejected() {
    let app = spawn_app().await;
    let token = app.admin_token().await;

    let response = app.create_post(POST, Some(&token)).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body, "Invalid Authorization header format");
}

#[tokio::test]
async fn create_post_with_tampered_token_is_rejected() {
    let app = spawn_app().await;
    let token = app.admin_token().await;
    let (signed, signature) = token.rsplit_once('.').unwrap();
    let flipped = if signature.starts_with('A') { "B" } else { "A" };
    let tampered = format!("{}.{}{}", signed, flipped, &signature[1..]);

    let response = app
        .create_post(POST, Some(&format!("Bearer {}", tampered)))
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body, "Invalid token");
}

#[tokio::test]
async fn admin_can_create_post_and_anyone_can_read_it() {
    let app = spawn_app().await;
    let auth = format!("Bearer {}", app.admin_token().await);

    let response = app.create_post(POST, Some(&auth)).await;
    assert_eq!(response.status, StatusCode::OK);
    let created = response.json();
    assert_eq!(created["title"], "Hello");
    assert_eq!(created["content"], "World");
    assert!(created["id"].is_i64());
    assert!(created["createdAt"].is_string());
    assert!(created.get("comments").is_none());

    let posts = app.get("/posts").await;
    assert_eq!(posts.status, StatusCode::OK);
    let posts = posts.json();
    assert_eq!(posts.as_array().unwrap().len(), 1);
    assert_eq!(posts[0]["id"], created["id"]);
}

#[tokio::test]
async fn create_post_with_malformed_body_is_bad_request() {
    let app = spawn_app().await;
    let auth = format!("Bearer {}", app.admin_token().await);

    let response = app.create_post("{", Some(&auth)).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn anyone_can_comment_on_a_post() {
    let app = spawn_app().await;
    let auth = format!("Bearer {}", app.admin_token().await);
    let post = app.create_post(POST, Some(&auth)).await.json();
    let uri = format!("/posts/{}/comments", post["id"]);

    let response = app
        .post_json(&uri, r#"{"author":"ana","content":"Nice post"}"#, None)
        .await;

    assert_eq!(response.status, StatusCode::OK);
    let comment = response.json();
    assert_eq!(comment["author"], "ana");
    assert_eq!(comment["content"], "Nice post");
    assert!(comment.get("post_id").is_none());

    let posts = app.get("/posts").await.json();
    assert_eq!(posts[0]["comments"][0]["author"], "ana");
}

#[tokio::test]
async fn comment_with_invalid_post_id_is_bad_request() {
    let app = spawn_app().await;

    for id in ["abc", "0", "-3"] {
        let response = app
            .post_json(&format!("/posts/{}/comments", id), r#"{"author":"a","content":"c"}"#, None)
            .await;
        assert_eq!(response.status, StatusCode::BAD_REQUEST);
        assert_eq!(response.body, "Invalid post ID");
    }
}

#[tokio::test]
async fn comment_on_missing_post_is_not_found() {
    let app = spawn_app().await;

    let response = app
        .post_json("/posts/99/comments", r#"{"author":"a","content":"c"}"#, None)
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn comment_with_malformed_body_is_bad_request() {
    let app = spawn_app().await;
    let auth = format!("Bearer {}", app.admin_token().await);
    let post = app.create_post(POST, Some(&auth)).await.json();

    let response = app
        .post_json(&format!("/posts/{}/comments", post["id"]), "[", None)
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body, "Invalid request payload");
}

#[tokio::test]
async fn post_and_comment_bodies_need_no_json_content_type() {
    let app = spawn_app().await;
    let auth = format!("Bearer {}", app.admin_token().await);

    let response = app.post_raw("/posts", POST, None, Some(&auth)).await;
    assert_eq!(response.status, StatusCode::OK);
    let uri = format!("/posts/{}/comments", response.json()["id"]);

    let response = app
        .post_raw(&uri, r#"{"author":"ana","content":"hi"}"#, Some("text/plain"), None)
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.json()["author"], "ana");
}
