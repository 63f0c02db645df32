//! API integration tests
//!
//! These need a running server backed by a database with `sql/schema.sql`
//! applied. Run with: cargo test -- --ignored

use reqwest::{Client, StatusCode};
use serde_json::{json, Value};

const BASE_URL: &str = "http://localhost:10000/api";

/// Create a row and return its generated id
async fn create(client: &Client, resource: &str, payload: Value) -> i64 {
    let response = client
        .post(format!("{}/{}", BASE_URL, resource))
        .json(&payload)
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), StatusCode::CREATED);
    let body: Value = response.json().await.expect("Failed to parse response");
    body["Id"].as_i64().expect("No id in response")
}

#[tokio::test]
#[ignore] // Run with: cargo test -- --ignored
async fn test_health_check() {
    let client = Client::new();

    let response = client
        .get(format!("{}/health", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
#[ignore]
async fn test_book_round_trip() {
    let client = Client::new();
    let id = create(&client, "books", json!({"name": "Dune", "author": "Herbert"})).await;

    let response = client
        .get(format!("{}/books/{}", BASE_URL, id))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body, json!({"Name": "Dune", "Author": "Herbert"}));

    let response = client
        .put(format!("{}/books/{}", BASE_URL, id))
        .json(&json!({"Name": "Dune Messiah", "Author": "Herbert"}))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::OK);

    let body: Value = client
        .get(format!("{}/books/{}", BASE_URL, id))
        .send()
        .await
        .expect("Failed to send request")
        .json()
        .await
        .expect("Failed to parse response");
    assert_eq!(body["Name"], "Dune Messiah");

    let response = client
        .delete(format!("{}/books/{}", BASE_URL, id))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = client
        .get(format!("{}/books/{}", BASE_URL, id))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
}

#[tokio::test]
#[ignore]
async fn test_update_and_delete_unknown_ids() {
    let client = Client::new();

    let response = client
        .put(format!("{}/clients/{}", BASE_URL, i64::MAX))
        .json(&json!({"name": "Nobody"}))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::OK);

    let response = client
        .delete(format!("{}/clients/{}", BASE_URL, i64::MAX))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
}

#[tokio::test]
#[ignore]
async fn test_invalid_requests() {
    let client = Client::new();

    let response = client
        .post(format!("{}/books", BASE_URL))
        .json(&json!({"name": "Dune"}))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = client
        .post(format!("{}/books", BASE_URL))
        .body("{not json")
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    for (id, expected) in [
        ("0", StatusCode::BAD_REQUEST),
        ("-5", StatusCode::BAD_REQUEST),
        ("abc", StatusCode::INTERNAL_SERVER_ERROR),
    ] {
        let response = client
            .delete(format!("{}/libraries/{}", BASE_URL, id))
            .send()
            .await
            .expect("Failed to send request");
        assert_eq!(response.status(), expected, "DELETE /libraries/{}", id);
    }
}

#[tokio::test]
#[ignore]
async fn test_borrow_embeds_book_and_client() {
    let client = Client::new();
    let book_id = create(&client, "books", json!({"name": "Emma", "author": "Austen"})).await;
    let client_id = create(&client, "clients", json!({"name": "Ada"})).await;
    let borrow_id = create(
        &client,
        "libraries",
        json!({
            "library": {"date": "2024-03-01", "active": true},
            "book": {"id": book_id},
            "client": {"id": client_id}
        }),
    )
    .await;

    let body: Value = client
        .get(format!("{}/libraries/{}", BASE_URL, borrow_id))
        .send()
        .await
        .expect("Failed to send request")
        .json()
        .await
        .expect("Failed to parse response");
    assert_eq!(body["Book"]["Author"], "Austen");
    assert_eq!(body["Client"]["Name"], "Ada");
    assert_eq!(body["Library"]["Active"], true);

    // Cleanup
    for path in [
        format!("libraries/{}", borrow_id),
        format!("books/{}", book_id),
        format!("clients/{}", client_id),
    ] {
        let _ = client
            .delete(format!("{}/{}", BASE_URL, path))
            .send()
            .await;
    }
}
