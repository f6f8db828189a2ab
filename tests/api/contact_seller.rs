use crate::helpers::spawn_app;
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, ResponseTemplate};

fn valid_body() -> serde_json::Value {
    json!({
        "name": "Alice",
        "email": "a@x.com",
        "phone": "555",
        "message": "hi",
        "product_id": "P1",
        "product_name": "Shoe"
    })
}

#[tokio::test]
async fn contact_seller_returns_a_200_and_sends_two_emails_for_a_valid_submission() {
    let app = spawn_app().await;

    Mock::given(path("/email"))
        .and(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(2)
        .mount(&app.email_server)
        .await;

    let response = app.post_contact_seller(valid_body()).await;

    assert_eq!(response.status().as_u16(), 200);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "Seller message sent successfully.");
}

#[tokio::test]
async fn contact_seller_persists_the_submission_with_its_product() {
    let app = spawn_app().await;

    Mock::given(path("/email"))
        .and(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&app.email_server)
        .await;

    app.post_contact_seller(valid_body()).await;

    let stored = app.stored_submissions().await;
    assert_eq!(stored.len(), 1);
    let submission = &stored[0];
    assert_eq!(submission.kind, "seller");
    assert_eq!(submission.product_id.as_deref(), Some("P1"));
    assert_eq!(submission.product_name.as_deref(), Some("Shoe"));
    assert_eq!(submission.name, "Alice");
    assert!(submission.created_at <= chrono::Utc::now());
}

#[tokio::test]
async fn contact_seller_returns_a_400_when_data_is_missing() {
    let app = spawn_app().await;
    let test_cases = vec![
        (
            json!({"name": "Alice", "email": "a@x.com", "phone": "555", "message": "hi",
                   "product_name": "Shoe"}),
            "missing the product id",
        ),
        (
            json!({"name": "Alice", "email": "a@x.com", "phone": "555", "message": "hi",
                   "product_id": "P1"}),
            "missing the product name",
        ),
        (
            json!({"email": "a@x.com", "phone": "555", "message": "hi",
                   "product_id": "P1", "product_name": "Shoe"}),
            "missing the name",
        ),
        (
            json!({"name": "Alice", "email": "a@x.com", "phone": "555", "message": "hi"}),
            "missing both product fields",
        ),
    ];

    for (invalid_body, error_message) in test_cases {
        let response = app.post_contact_seller(invalid_body).await;

        assert_eq!(
            response.status().as_u16(),
            400,
            "The API did not fail with 400 Bad Request when the payload was {}.",
            error_message
        );
    }

    assert!(app.stored_submissions().await.is_empty());
}

#[tokio::test]
async fn contact_seller_returns_a_400_when_product_fields_are_empty() {
    let app = spawn_app().await;
    let test_cases = vec![
        (
            json!({"name": "Alice", "email": "a@x.com", "phone": "555", "message": "hi",
                   "product_id": "", "product_name": "Shoe"}),
            "empty product id",
        ),
        (
            json!({"name": "Alice", "email": "a@x.com", "phone": "555", "message": "hi",
                   "product_id": "P1", "product_name": "  "}),
            "blank product name",
        ),
    ];

    for (invalid_body, error_message) in test_cases {
        let response = app.post_contact_seller(invalid_body).await;

        assert_eq!(
            response.status().as_u16(),
            400,
            "The API did not fail with 400 Bad Request when the payload had an {}.",
            error_message
        );
    }

    assert!(app.stored_submissions().await.is_empty());
}

#[tokio::test]
async fn contact_seller_returns_a_500_but_keeps_the_record_if_email_delivery_fails() {
    let app = spawn_app().await;

    Mock::given(path("/email"))
        .and(method("POST"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&app.email_server)
        .await;

    let response = app.post_contact_seller(valid_body()).await;

    assert_eq!(response.status().as_u16(), 500);
    assert_eq!(app.stored_submissions().await.len(), 1);
}
