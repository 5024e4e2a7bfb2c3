//! Integration tests for the puppy catalog.

mod helpers;

use http::StatusCode;
use sanctuary_entity::puppy::PuppyStatus;
use sanctuary_entity::user::UserRole;
use uuid::Uuid;

#[tokio::test]
async fn test_catalog_is_public() {
    let app = helpers::TestApp::new().await;
    app.create_test_puppy("Biscuit", PuppyStatus::Available, 500)
        .await;
    app.create_test_puppy("Clover", PuppyStatus::Adopted, 300)
        .await;

    let response = app.request("GET", "/api/puppies", None, None).await;

    assert_eq!(response.status, StatusCode::OK);
    let items = response.body["data"]["items"].as_array().unwrap();
    assert_eq!(items.len(), 2);
}

#[tokio::test]
async fn test_catalog_filters_by_status() {
    let app = helpers::TestApp::new().await;
    app.create_test_puppy("Biscuit", PuppyStatus::Available, 500)
        .await;
    app.create_test_puppy("Clover", PuppyStatus::Adopted, 300)
        .await;

    let response = app
        .request("GET", "/api/puppies?status=available", None, None)
        .await;

    assert_eq!(response.status, StatusCode::OK);
    let items = response.body["data"]["items"].as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["name"].as_str().unwrap(), "Biscuit");
}

#[tokio::test]
async fn test_get_unknown_puppy_not_found() {
    let app = helpers::TestApp::new().await;

    let response = app
        .request("GET", &format!("/api/puppies/{}", Uuid::new_v4()), None, None)
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_admin_creates_puppy() {
    let app = helpers::TestApp::new().await;
    let admin = app.create_test_user("admin@example.com", UserRole::Admin).await;
    let admin_token = app.token_for(admin, "admin@example.com", UserRole::Admin);

    let response = app
        .request(
            "POST",
            "/api/admin/puppies",
            Some(serde_json::json!({
                "name": "Maple",
                "age": "10 weeks",
                "gender": "female",
                "adoption_fee": 2000,
                "deposit_amount": 500,
                "description": "Loves snow",
                "image_urls": ["https://cdn.example.com/maple.jpg"],
            })),
            Some(&admin_token),
        )
        .await;

    assert_eq!(response.status, StatusCode::CREATED, "{:?}", response.body);
    let data = &response.body["data"];
    assert_eq!(data["name"].as_str().unwrap(), "Maple");
    assert_eq!(data["status"].as_str().unwrap(), "available");
}

#[tokio::test]
async fn test_create_puppy_requires_admin() {
    let app = helpers::TestApp::new().await;
    let user = app.create_test_user("jane@example.com", UserRole::User).await;
    let token = app.token_for(user, "jane@example.com", UserRole::User);

    let response = app
        .request(
            "POST",
            "/api/admin/puppies",
            Some(serde_json::json!({
                "name": "Maple",
                "age": "10 weeks",
                "gender": "female",
                "adoption_fee": 2000,
                "deposit_amount": 500,
            })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_admin_updates_puppy() {
    let app = helpers::TestApp::new().await;
    let admin = app.create_test_user("admin@example.com", UserRole::Admin).await;
    let admin_token = app.token_for(admin, "admin@example.com", UserRole::Admin);
    let puppy_id = app
        .create_test_puppy("Biscuit", PuppyStatus::Available, 500)
        .await;

    let response = app
        .request(
            "PUT",
            &format!("/api/admin/puppies/{}", puppy_id),
            Some(serde_json::json!({
                "status": "pending",
                "deposit_amount": 600,
            })),
            Some(&admin_token),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK, "{:?}", response.body);
    let data = &response.body["data"];
    assert_eq!(data["status"].as_str().unwrap(), "pending");
    assert_eq!(data["deposit_amount"].as_i64().unwrap(), 600);
    // Untouched fields survive a partial update.
    assert_eq!(data["name"].as_str().unwrap(), "Biscuit");
}

#[tokio::test]
async fn test_admin_deletes_puppy() {
    let app = helpers::TestApp::new().await;
    let admin = app.create_test_user("admin@example.com", UserRole::Admin).await;
    let admin_token = app.token_for(admin, "admin@example.com", UserRole::Admin);
    let puppy_id = app
        .create_test_puppy("Biscuit", PuppyStatus::Available, 500)
        .await;

    let response = app
        .request(
            "DELETE",
            &format!("/api/admin/puppies/{}", puppy_id),
            None,
            Some(&admin_token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let response = app
        .request("GET", &format!("/api/puppies/{}", puppy_id), None, None)
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}
