//! Integration tests for adoption request submission.

mod helpers;

use http::StatusCode;
use sanctuary_entity::puppy::PuppyStatus;
use sanctuary_entity::user::UserRole;

#[tokio::test]
async fn test_submit_creates_pending_request() {
    let app = helpers::TestApp::new().await;
    let user_id = app.create_test_user("jane@example.com", UserRole::User).await;
    let token = app.token_for(user_id, "jane@example.com", UserRole::User);
    let puppy_id = app
        .create_test_puppy("Biscuit", PuppyStatus::Available, 500)
        .await;

    let response = app
        .request(
            "POST",
            "/api/adoptions",
            Some(serde_json::json!({
                "puppy_id": puppy_id,
                "application": helpers::complete_application(),
            })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::CREATED, "{:?}", response.body);
    let data = response.body.get("data").unwrap();
    assert_eq!(data.get("status").unwrap().as_str().unwrap(), "pending");
    assert_eq!(data.get("deposit_amount").unwrap().as_i64().unwrap(), 500);
    assert_eq!(
        data.get("puppy_id").unwrap().as_str().unwrap(),
        puppy_id.to_string()
    );
}

#[tokio::test]
async fn test_deposit_is_snapshotted_at_submission() {
    let app = helpers::TestApp::new().await;
    let user_id = app.create_test_user("jane@example.com", UserRole::User).await;
    let token = app.token_for(user_id, "jane@example.com", UserRole::User);
    let puppy_id = app
        .create_test_puppy("Biscuit", PuppyStatus::Available, 500)
        .await;

    let response = app
        .request(
            "POST",
            "/api/adoptions",
            Some(serde_json::json!({
                "puppy_id": puppy_id,
                "application": helpers::complete_application(),
            })),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::CREATED);
    let request_id = response.body["data"]["id"].as_str().unwrap().to_string();

    // Raising the puppy's deposit later must not affect the stored request.
    sqlx::query("UPDATE puppies SET deposit_amount = 999 WHERE id = $1")
        .bind(puppy_id)
        .execute(&app.db_pool)
        .await
        .unwrap();

    let response = app
        .request(
            "GET",
            &format!("/api/adoptions/{}", request_id),
            None,
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.body["data"]["deposit_amount"].as_i64().unwrap(),
        500
    );
}

#[tokio::test]
async fn test_incomplete_application_rejected_before_storage() {
    let app = helpers::TestApp::new().await;
    let user_id = app.create_test_user("jane@example.com", UserRole::User).await;
    let token = app.token_for(user_id, "jane@example.com", UserRole::User);
    let puppy_id = app
        .create_test_puppy("Biscuit", PuppyStatus::Available, 500)
        .await;

    let mut application = helpers::complete_application();
    application["first_name"] = serde_json::json!("");
    application["agreed_to_terms"] = serde_json::json!(false);

    let response = app
        .request(
            "POST",
            "/api/adoptions",
            Some(serde_json::json!({
                "puppy_id": puppy_id,
                "application": application,
            })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    let message = response.body["message"].as_str().unwrap();
    assert!(message.contains("first_name"), "{}", message);
    assert!(message.contains("agreed_to_terms"), "{}", message);

    // Nothing was written.
    let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM adoption_requests")
        .fetch_one(&app.db_pool)
        .await
        .unwrap();
    assert_eq!(count.0, 0);
}

#[tokio::test]
async fn test_submit_for_adopted_puppy_rejected() {
    let app = helpers::TestApp::new().await;
    let user_id = app.create_test_user("jane@example.com", UserRole::User).await;
    let token = app.token_for(user_id, "jane@example.com", UserRole::User);
    let puppy_id = app
        .create_test_puppy("Biscuit", PuppyStatus::Adopted, 500)
        .await;

    let response = app
        .request(
            "POST",
            "/api/adoptions",
            Some(serde_json::json!({
                "puppy_id": puppy_id,
                "application": helpers::complete_application(),
            })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_submit_for_pending_puppy_allowed() {
    let app = helpers::TestApp::new().await;
    let user_id = app.create_test_user("jane@example.com", UserRole::User).await;
    let token = app.token_for(user_id, "jane@example.com", UserRole::User);
    let puppy_id = app
        .create_test_puppy("Biscuit", PuppyStatus::Pending, 500)
        .await;

    let response = app
        .request(
            "POST",
            "/api/adoptions",
            Some(serde_json::json!({
                "puppy_id": puppy_id,
                "application": helpers::complete_application(),
            })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::CREATED);
}

#[tokio::test]
async fn test_submit_for_unknown_puppy_not_found() {
    let app = helpers::TestApp::new().await;
    let user_id = app.create_test_user("jane@example.com", UserRole::User).await;
    let token = app.token_for(user_id, "jane@example.com", UserRole::User);

    let response = app
        .request(
            "POST",
            "/api/adoptions",
            Some(serde_json::json!({
                "puppy_id": uuid::Uuid::new_v4(),
                "application": helpers::complete_application(),
            })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_submit_unauthenticated() {
    let app = helpers::TestApp::new().await;
    let puppy_id = app
        .create_test_puppy("Biscuit", PuppyStatus::Available, 500)
        .await;

    let response = app
        .request(
            "POST",
            "/api/adoptions",
            Some(serde_json::json!({
                "puppy_id": puppy_id,
                "application": helpers::complete_application(),
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_applicant_cannot_view_foreign_request() {
    let app = helpers::TestApp::new().await;
    let jane = app.create_test_user("jane@example.com", UserRole::User).await;
    let jane_token = app.token_for(jane, "jane@example.com", UserRole::User);
    let mark = app.create_test_user("mark@example.com", UserRole::User).await;
    let mark_token = app.token_for(mark, "mark@example.com", UserRole::User);
    let puppy_id = app
        .create_test_puppy("Biscuit", PuppyStatus::Available, 500)
        .await;

    let response = app
        .request(
            "POST",
            "/api/adoptions",
            Some(serde_json::json!({
                "puppy_id": puppy_id,
                "application": helpers::complete_application(),
            })),
            Some(&jane_token),
        )
        .await;
    let request_id = response.body["data"]["id"].as_str().unwrap().to_string();

    let response = app
        .request(
            "GET",
            &format!("/api/adoptions/{}", request_id),
            None,
            Some(&mark_token),
        )
        .await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_list_mine_returns_only_own_requests() {
    let app = helpers::TestApp::new().await;
    let jane = app.create_test_user("jane@example.com", UserRole::User).await;
    let jane_token = app.token_for(jane, "jane@example.com", UserRole::User);
    let mark = app.create_test_user("mark@example.com", UserRole::User).await;
    let mark_token = app.token_for(mark, "mark@example.com", UserRole::User);
    let puppy_id = app
        .create_test_puppy("Biscuit", PuppyStatus::Available, 500)
        .await;

    for token in [&jane_token, &mark_token] {
        let response = app
            .request(
                "POST",
                "/api/adoptions",
                Some(serde_json::json!({
                    "puppy_id": puppy_id,
                    "application": helpers::complete_application(),
                })),
                Some(token),
            )
            .await;
        assert_eq!(response.status, StatusCode::CREATED);
    }

    let response = app
        .request("GET", "/api/adoptions", None, Some(&jane_token))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    let items = response.body["data"]["items"].as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(
        items[0]["applicant_id"].as_str().unwrap(),
        jane.to_string()
    );
}
