//! Integration tests for health checks and the public contact form.

mod helpers;

use http::StatusCode;

#[tokio::test]
async fn test_health_reports_ok() {
    let app = helpers::TestApp::new().await;

    let response = app.request("GET", "/api/health", None, None).await;

    assert_eq!(response.status, StatusCode::OK);
    let data = &response.body["data"];
    assert_eq!(data["status"].as_str().unwrap(), "ok");
    assert!(!data["version"].as_str().unwrap().is_empty());
}

#[tokio::test]
async fn test_detailed_health_reports_database() {
    let app = helpers::TestApp::new().await;

    let response = app.request("GET", "/api/health/detailed", None, None).await;

    assert_eq!(response.status, StatusCode::OK);
    let data = &response.body["data"];
    assert_eq!(data["status"].as_str().unwrap(), "ok");
    assert_eq!(data["database"].as_str().unwrap(), "connected");
}

#[tokio::test]
async fn test_contact_form_accepted() {
    let app = helpers::TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/api/contact",
            Some(serde_json::json!({
                "name": "Jane Doe",
                "email": "jane@example.com",
                "subject": "Visiting hours",
                "message": "When can I come meet the puppies?",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::OK, "{:?}", response.body);
    assert_eq!(
        response.body["data"]["message"].as_str().unwrap(),
        "Your message has been sent"
    );
}

#[tokio::test]
async fn test_contact_form_rejects_invalid_email() {
    let app = helpers::TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/api/contact",
            Some(serde_json::json!({
                "name": "Jane Doe",
                "email": "not-an-address",
                "subject": "Visiting hours",
                "message": "When can I come meet the puppies?",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_contact_form_rejects_empty_message() {
    let app = helpers::TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/api/contact",
            Some(serde_json::json!({
                "name": "Jane Doe",
                "email": "jane@example.com",
                "subject": "Visiting hours",
                "message": "",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}
