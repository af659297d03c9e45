//! API integration tests against a running server

use reqwest::Client;
use serde_json::{json, Value};

const BASE_URL: &str = "http://localhost:8080/api";

async fn list_books(client: &Client) -> Vec<Value> {
    let response = client
        .get(format!("{}/books", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    body.as_array().expect("Expected an array").clone()
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
async fn test_list_books_contains_seed() {
    let client = Client::new();
    let books = list_books(&client).await;

    assert!(books.len() >= 3);
    assert_eq!(books[0]["title"], "The Lord of the Rings");
    assert_eq!(books[1]["author"], "Jane Austen");
    assert_eq!(books[2]["id"], 3);
}

#[tokio::test]
#[ignore]
async fn test_create_book() {
    let client = Client::new();
    let before = list_books(&client).await;

    let response = client
        .post(format!("{}/books", BASE_URL))
        .json(&json!({
            "title": "Dune",
            "author": "Frank Herbert"
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 201);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["title"], "Dune");
    assert_eq!(body["author"], "Frank Herbert");

    let after = list_books(&client).await;
    assert_eq!(after.len(), before.len() + 1);
    assert_eq!(after.last(), Some(&body));
}

#[tokio::test]
#[ignore]
async fn test_create_book_missing_author() {
    let client = Client::new();

    let response = client
        .post(format!("{}/books", BASE_URL))
        .json(&json!({ "title": "Dune" }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 400);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["error"], "Title and author are required.");
}
