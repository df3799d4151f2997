//! # Post Read Tests

use super::*;

#[tokio::test]
async fn test_list_newest_first() {
    // Arrange
    let pool = setup_test_db().await;
    let app = test_app(pool, test_config());
    let auth = register_user(&app, "Ann", "ann@example.com", "secret123").await;

    create_post(&app, &auth.token, "First", "one").await;
    create_post(&app, &auth.token, "Second", "two").await;
    create_post(&app, &auth.token, "Third", "three").await;

    // Act
    let response = send(&app, "GET", "/api/blogs", Some(&auth.token), None).await;

    // Assert
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    let posts = body.as_array().expect("list response should be an array");

    assert_eq!(posts.len(), 3);
    assert_eq!(posts[0]["title"], "Third");
    assert_eq!(posts[1]["title"], "Second");
    assert_eq!(posts[2]["title"], "First");
}

#[tokio::test]
async fn test_any_authenticated_user_can_read() {
    // Reads carry no ownership check: Bob can read Ann's post.
    let pool = setup_test_db().await;
    let app = test_app(pool, test_config());
    let ann = register_user(&app, "Ann", "ann@example.com", "secret123").await;
    let bob = register_user(&app, "Bob", "bob@example.com", "hunter22!").await;

    let post = create_post(&app, &ann.token, "Hi", "world").await;
    let id = post["id"].as_str().unwrap();

    let response = send(
        &app,
        "GET",
        &format!("/api/blogs/{id}"),
        Some(&bob.token),
        None,
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["author"]["name"], "Ann");
}

#[tokio::test]
async fn test_get_unknown_post_is_404() {
    let pool = setup_test_db().await;
    let app = test_app(pool, test_config());
    let auth = register_user(&app, "Ann", "ann@example.com", "secret123").await;

    let response = send(&app, "GET", "/api/blogs/9999", Some(&auth.token), None).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = body_json(response).await;
    assert_eq!(body["code"], "NotFound");
}
