mod common;

use common::TestApp;
use reqwest::StatusCode;
use serde_json::json;

#[tokio::test]
async fn test_health_check() {
    let app = TestApp::spawn().await;

    let response = app.get("/").send().await.expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "success");
    assert_eq!(body["message"], "API is running securely.");
}

#[tokio::test]
async fn test_protected_route_without_token() {
    let app = TestApp::spawn().await;

    let response = app
        .get("/api/v1/users")
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "error");
    assert_eq!(body["message"], "No token provided");
}

#[tokio::test]
async fn test_protected_route_with_non_bearer_header() {
    let app = TestApp::spawn().await;

    let response = app
        .get("/api/v1/users")
        .header("Authorization", "Basic dXNlcjpwYXNz")
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["message"], "No token provided");
}

#[tokio::test]
async fn test_protected_route_with_malformed_token() {
    let app = TestApp::spawn().await;

    let response = app
        .get("/api/v1/users")
        .header("Authorization", "Bearer not.a.token")
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["message"], "Invalid or expired token");
}

#[tokio::test]
async fn test_protected_route_with_wrong_secret_token() {
    let app = TestApp::spawn().await;

    let other_handler = auth::JwtHandler::new(b"another-secret-key-at-least-32-bytes-long");
    let claims = auth::Claims::for_principal(uuid::Uuid::new_v4(), "ADMIN", 24);
    let token = other_handler.encode(&claims).unwrap();

    let response = app
        .get("/api/v1/users")
        .header("Authorization", format!("Bearer {}", token))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["message"], "Invalid or expired token");
}

#[tokio::test]
async fn test_protected_route_with_expired_token() {
    let app = TestApp::spawn().await;

    let response = app
        .get("/api/v1/users")
        .header("Authorization", format!("Bearer {}", app.expired_token()))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["message"], "Invalid or expired token");
}

#[tokio::test]
async fn test_protected_route_with_non_admin_token() {
    let app = TestApp::spawn().await;

    let response = app
        .get("/api/v1/users")
        .header(
            "Authorization",
            format!("Bearer {}", app.token_for_role("STAFF")),
        )
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "error");
    assert_eq!(body["message"], "Admin access required");
}

#[tokio::test]
async fn test_admin_token_reaches_handler() {
    let app = TestApp::spawn().await;

    // The gate passes; the unreachable database turns into the enveloped
    // resource-specific 500.
    let response = app
        .get("/api/v1/users")
        .header(
            "Authorization",
            format!("Bearer {}", app.token_for_role("ADMIN")),
        )
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "error");
    assert_eq!(body["message"], "Failed to fetch users");
}

#[tokio::test]
async fn test_blog_write_routes_are_gated() {
    let app = TestApp::spawn().await;

    let response = app
        .post("/api/v1/blogs")
        .json(&json!({
            "title": "Safari basics",
            "slug": "safari-basics",
            "content": "<p>Bring binoculars.</p>",
            "authorName": "Asha"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let delete_response = app
        .delete("/api/v1/blogs/3f2b1a2c-5d4e-4f6a-8b9c-0d1e2f3a4b5c")
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(delete_response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_blog_list_is_public() {
    let app = TestApp::spawn().await;

    // No token: the gate is not in the path, so the request reaches the
    // handler and fails only on the unreachable database.
    let response = app
        .get("/api/v1/blogs?publishedOnly=true")
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["message"], "Failed to fetch blog posts");
}

#[tokio::test]
async fn test_login_missing_fields() {
    let app = TestApp::spawn().await;

    let response = app
        .post("/api/v1/auth/login")
        .json(&json!({ "email": "admin@example.com" }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "error");
    assert_eq!(body["message"], "Email and password are required");
}

#[tokio::test]
async fn test_login_empty_fields() {
    let app = TestApp::spawn().await;

    let response = app
        .post("/api/v1/auth/login")
        .json(&json!({ "email": "", "password": "" }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["message"], "Email and password are required");
}

#[tokio::test]
async fn test_create_user_missing_fields() {
    let app = TestApp::spawn().await;

    let response = app
        .post("/api/v1/users")
        .header(
            "Authorization",
            format!("Bearer {}", app.token_for_role("ADMIN")),
        )
        .json(&json!({ "firstName": "Jane", "email": "jane@example.com" }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["message"], "All fields are required");
}

#[tokio::test]
async fn test_create_blog_post_missing_fields() {
    let app = TestApp::spawn().await;

    let response = app
        .post("/api/v1/blogs")
        .header(
            "Authorization",
            format!("Bearer {}", app.token_for_role("ADMIN")),
        )
        .json(&json!({ "title": "Missing the rest" }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["message"], "Title, slug, content, and author are required");
}

#[tokio::test]
async fn test_update_user_invalid_id() {
    let app = TestApp::spawn().await;

    let response = app
        .put("/api/v1/users/not-a-uuid")
        .header(
            "Authorization",
            format!("Bearer {}", app.token_for_role("ADMIN")),
        )
        .json(&json!({ "firstName": "Jane" }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert!(body["message"]
        .as_str()
        .unwrap()
        .contains("Invalid user ID"));
}
