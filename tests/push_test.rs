//! Integration tests for push subscription management.

mod helpers;

use http::StatusCode;
use sanctuary_entity::user::UserRole;
use uuid::Uuid;

fn subscription_body(endpoint: &str) -> serde_json::Value {
    serde_json::json!({
        "endpoint": endpoint,
        "subscription": {
            "endpoint": endpoint,
            "keys": {
                "p256dh": "BNcW4oA7zq5H9TKIrA3XfKklNzO-pwwEHnhpkDWGXE4",
                "auth": "tBHItJI5svbpez7KI4CCXg"
            }
        }
    })
}

async fn subscription_count(app: &helpers::TestApp, user_id: Uuid) -> i64 {
    let row: (i64,) =
        sqlx::query_as("SELECT COUNT(*) FROM push_subscriptions WHERE user_id = $1")
            .bind(user_id)
            .fetch_one(&app.db_pool)
            .await
            .unwrap();
    row.0
}

#[tokio::test]
async fn test_subscribe_stores_subscription() {
    let app = helpers::TestApp::new().await;
    let jane = app.create_test_user("jane@example.com", UserRole::User).await;
    let token = app.token_for(jane, "jane@example.com", UserRole::User);

    let response = app
        .request(
            "POST",
            "/api/push/subscriptions",
            Some(subscription_body("https://push.example.com/sub/abc")),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK, "{:?}", response.body);
    assert_eq!(
        response.body["data"]["message"].as_str().unwrap(),
        "Subscription registered"
    );
    assert_eq!(subscription_count(&app, jane).await, 1);
}

#[tokio::test]
async fn test_resubscribing_same_endpoint_keeps_one_row() {
    let app = helpers::TestApp::new().await;
    let jane = app.create_test_user("jane@example.com", UserRole::User).await;
    let token = app.token_for(jane, "jane@example.com", UserRole::User);

    for _ in 0..2 {
        let response = app
            .request(
                "POST",
                "/api/push/subscriptions",
                Some(subscription_body("https://push.example.com/sub/abc")),
                Some(&token),
            )
            .await;
        assert_eq!(response.status, StatusCode::OK);
    }

    // Browsers re-send the subscription on every page load.
    assert_eq!(subscription_count(&app, jane).await, 1);
}

#[tokio::test]
async fn test_unsubscribe_removes_subscription() {
    let app = helpers::TestApp::new().await;
    let jane = app.create_test_user("jane@example.com", UserRole::User).await;
    let token = app.token_for(jane, "jane@example.com", UserRole::User);

    let response = app
        .request(
            "POST",
            "/api/push/subscriptions",
            Some(subscription_body("https://push.example.com/sub/abc")),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let response = app
        .request(
            "DELETE",
            "/api/push/subscriptions",
            Some(serde_json::json!({ "endpoint": "https://push.example.com/sub/abc" })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(subscription_count(&app, jane).await, 0);
}

#[tokio::test]
async fn test_subscribe_requires_authentication() {
    let app = helpers::TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/api/push/subscriptions",
            Some(subscription_body("https://push.example.com/sub/abc")),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}
