//! Integration tests for support chat.

mod helpers;

use http::StatusCode;
use sanctuary_entity::user::UserRole;

#[tokio::test]
async fn test_open_conversation_is_idempotent() {
    let app = helpers::TestApp::new().await;
    let jane = app.create_test_user("jane@example.com", UserRole::User).await;
    let token = app.token_for(jane, "jane@example.com", UserRole::User);

    let first = app
        .request("POST", "/api/chat/conversation", None, Some(&token))
        .await;
    assert_eq!(first.status, StatusCode::OK, "{:?}", first.body);

    let second = app
        .request("POST", "/api/chat/conversation", None, Some(&token))
        .await;
    assert_eq!(second.status, StatusCode::OK);

    // One conversation per user; reopening returns the same one.
    assert_eq!(first.body["data"]["id"], second.body["data"]["id"]);
}

#[tokio::test]
async fn test_send_message_updates_conversation_preview() {
    let app = helpers::TestApp::new().await;
    let jane = app.create_test_user("jane@example.com", UserRole::User).await;
    let token = app.token_for(jane, "jane@example.com", UserRole::User);

    let response = app
        .request("POST", "/api/chat/conversation", None, Some(&token))
        .await;
    let conversation_id = response.body["data"]["id"].as_str().unwrap().to_string();

    let response = app
        .request(
            "POST",
            &format!("/api/chat/conversations/{}/messages", conversation_id),
            Some(serde_json::json!({ "text": "Is Biscuit still available?" })),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK, "{:?}", response.body);

    let row: (Option<String>,) =
        sqlx::query_as("SELECT last_message FROM conversations WHERE id = $1::uuid")
            .bind(&conversation_id)
            .fetch_one(&app.db_pool)
            .await
            .unwrap();
    assert_eq!(row.0.as_deref(), Some("Is Biscuit still available?"));
}

#[tokio::test]
async fn test_messages_are_listed_oldest_first() {
    let app = helpers::TestApp::new().await;
    let jane = app.create_test_user("jane@example.com", UserRole::User).await;
    let token = app.token_for(jane, "jane@example.com", UserRole::User);

    let response = app
        .request("POST", "/api/chat/conversation", None, Some(&token))
        .await;
    let conversation_id = response.body["data"]["id"].as_str().unwrap().to_string();

    for text in ["first", "second", "third"] {
        let response = app
            .request(
                "POST",
                &format!("/api/chat/conversations/{}/messages", conversation_id),
                Some(serde_json::json!({ "text": text })),
                Some(&token),
            )
            .await;
        assert_eq!(response.status, StatusCode::OK);
    }

    let response = app
        .request(
            "GET",
            &format!("/api/chat/conversations/{}/messages", conversation_id),
            None,
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    let items = response.body["data"]["items"].as_array().unwrap();
    let texts: Vec<&str> = items
        .iter()
        .map(|m| m["text"].as_str().unwrap())
        .collect();
    assert_eq!(texts, ["first", "second", "third"]);
}

#[tokio::test]
async fn test_empty_and_oversized_messages_rejected() {
    let app = helpers::TestApp::new().await;
    let jane = app.create_test_user("jane@example.com", UserRole::User).await;
    let token = app.token_for(jane, "jane@example.com", UserRole::User);

    let response = app
        .request("POST", "/api/chat/conversation", None, Some(&token))
        .await;
    let conversation_id = response.body["data"]["id"].as_str().unwrap().to_string();

    let response = app
        .request(
            "POST",
            &format!("/api/chat/conversations/{}/messages", conversation_id),
            Some(serde_json::json!({ "text": "   " })),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);

    let response = app
        .request(
            "POST",
            &format!("/api/chat/conversations/{}/messages", conversation_id),
            Some(serde_json::json!({ "text": "x".repeat(4001) })),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_foreign_conversation_is_forbidden() {
    let app = helpers::TestApp::new().await;
    let jane = app.create_test_user("jane@example.com", UserRole::User).await;
    let jane_token = app.token_for(jane, "jane@example.com", UserRole::User);
    let mark = app.create_test_user("mark@example.com", UserRole::User).await;
    let mark_token = app.token_for(mark, "mark@example.com", UserRole::User);

    let response = app
        .request("POST", "/api/chat/conversation", None, Some(&jane_token))
        .await;
    let conversation_id = response.body["data"]["id"].as_str().unwrap().to_string();

    let response = app
        .request(
            "POST",
            &format!("/api/chat/conversations/{}/messages", conversation_id),
            Some(serde_json::json!({ "text": "hello" })),
            Some(&mark_token),
        )
        .await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_admin_can_reply_in_any_conversation() {
    let app = helpers::TestApp::new().await;
    let jane = app.create_test_user("jane@example.com", UserRole::User).await;
    let jane_token = app.token_for(jane, "jane@example.com", UserRole::User);
    let admin = app.create_test_user("admin@example.com", UserRole::Admin).await;
    let admin_token = app.token_for(admin, "admin@example.com", UserRole::Admin);

    let response = app
        .request("POST", "/api/chat/conversation", None, Some(&jane_token))
        .await;
    let conversation_id = response.body["data"]["id"].as_str().unwrap().to_string();

    let response = app
        .request(
            "POST",
            &format!("/api/chat/conversations/{}/messages", conversation_id),
            Some(serde_json::json!({ "text": "How can we help?" })),
            Some(&admin_token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let response = app
        .request("GET", "/api/chat/conversations", None, Some(&admin_token))
        .await;
    assert_eq!(response.status, StatusCode::OK);
    let items = response.body["data"]["items"].as_array().unwrap();
    assert_eq!(items.len(), 1);
}

#[tokio::test]
async fn test_conversation_listing_requires_admin() {
    let app = helpers::TestApp::new().await;
    let jane = app.create_test_user("jane@example.com", UserRole::User).await;
    let token = app.token_for(jane, "jane@example.com", UserRole::User);

    let response = app
        .request("GET", "/api/chat/conversations", None, Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
}
