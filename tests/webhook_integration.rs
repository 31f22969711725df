//! Integration tests for the store bot HTTP surface
//!
//! These tests drive the full router:
//! - Chat webhook (commands, free text, payment requests)
//! - Catalog listing and upserts
//! - Error handling for malformed requests

use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::{json, Value};
use std::sync::Arc;
use tower::util::ServiceExt; // for `oneshot`

use general_store_bot::router::create_app_router;
use general_store_bot::state::AppState;

/// Helper function to create a test app instance with the opening stock
fn create_test_app() -> axum::Router {
    create_app_router(Arc::new(AppState::default()))
}

/// Helper function to send a JSON request and get the response
async fn send_json(
    app: &axum::Router,
    method: &str,
    uri: &str,
    body: Value,
) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_string(&body).unwrap()))
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();

    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(json!({}));

    (status, body)
}

/// Sends a private-chat message and returns the reply text
async fn say(app: &axum::Router, chat_id: i64, text: &str) -> String {
    let (status, body) = send_json(
        app,
        "POST",
        "/message",
        json!({ "chatId": chat_id, "text": text }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    body["reply"].as_str().unwrap_or_default().to_string()
}

#[tokio::test]
async fn test_health() {
    let app = create_test_app();

    let request = Request::builder()
        .method("GET")
        .uri("/health")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_order_checkout_confirm_flow() {
    let app = create_test_app();

    let reply = say(&app, 10, "/order Rice 10").await;
    assert!(reply.contains("10 Rice added to cart. Total: 25.0"));

    let reply = say(&app, 10, "/checkout").await;
    assert!(reply.starts_with("Your Order Summary:"));
    assert!(reply.contains("Rice x 10 = 25.0"));

    let reply = say(&app, 10, "/confirm").await;
    assert!(reply.contains("has been confirmed"));

    assert_eq!(say(&app, 10, "/cart").await, "Your cart is empty.");

    let (_, catalog) = send_json(&app, "GET", "/catalog", Value::Null).await;
    assert_eq!(catalog["products"][0]["name"], "Rice");
    assert_eq!(catalog["products"][0]["quantity"], 50);
}

#[tokio::test]
async fn test_order_beyond_stock_leaves_cart_alone() {
    let app = create_test_app();

    assert_eq!(say(&app, 11, "/order Rice 1000").await, "Not enough stock");
    assert_eq!(say(&app, 11, "/cart").await, "Your cart is empty.");
}

#[tokio::test]
async fn test_carts_are_per_chat() {
    let app = create_test_app();

    say(&app, 1, "/order Milk 2").await;
    say(&app, 2, "/order Bread 1").await;

    assert_eq!(say(&app, 1, "/cart").await, "Your cart:\nMilk: 2");
    assert_eq!(say(&app, 2, "/cart").await, "Your cart:\nBread: 1");

    assert_eq!(say(&app, 1, "/cancel").await, "Your cart has been cleared.");
    assert_eq!(say(&app, 1, "/cancel").await, "Your cart is already empty.");
    assert_eq!(say(&app, 2, "/cart").await, "Your cart:\nBread: 1");
}

#[tokio::test]
async fn test_free_text_replies() {
    let app = create_test_app();

    assert_eq!(say(&app, 3, "hello there").await, "Hey there!");
    assert_eq!(say(&app, 3, "xyz").await, "I don't understand");
}

#[tokio::test]
async fn test_group_chat_without_mention_is_silent() {
    let app = create_test_app();

    let (status, body) = send_json(
        &app,
        "POST",
        "/message",
        json!({ "chatId": -42, "text": "hello all", "chatType": "group" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["reply"].is_null());
    assert!(body["invoice"].is_null());
}

#[tokio::test]
async fn test_bill_returns_invoice() {
    let app = create_test_app();

    let (status, body) = send_json(
        &app,
        "POST",
        "/message",
        json!({
            "chatId": 8,
            "text": "/bill",
            "from": { "id": 8, "firstName": "Ravi", "username": "ravi" }
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["reply"], "Please select the following button to pay your bill:");

    let invoice = &body["invoice"];
    assert_eq!(invoice["totalAmount"], 10000);
    assert_eq!(invoice["currency"], "USD");
    assert_eq!(invoice["startParameter"], "bot-invoice");
    assert_eq!(invoice["payload"], "Ravi  (ravi) - 8");
    assert!(invoice["invoiceId"].is_string());
}

#[tokio::test]
async fn test_catalog_upsert_changes_checkout_total() {
    let app = create_test_app();

    say(&app, 5, "/order Butter 2").await;

    let (status, body) = send_json(
        &app,
        "POST",
        "/catalog",
        json!({
            "name": "Butter",
            "quantity": 15,
            "price": "4.5",
            "description": "Unsalted butter"
        }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Butter");

    let reply = say(&app, 5, "/checkout").await;
    assert!(reply.contains("Butter x 2 = 9.0"));
}

#[tokio::test]
async fn test_catalog_upsert_adds_new_product_last() {
    let app = create_test_app();

    let (status, _) = send_json(
        &app,
        "POST",
        "/catalog",
        json!({ "name": "Tea", "quantity": 12, "price": "3.75", "description": "Masala chai" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (_, body) = send_json(&app, "GET", "/catalog", Value::Null).await;
    let products = body["products"].as_array().unwrap();
    assert_eq!(products.len(), 16);
    assert_eq!(products[15]["name"], "Tea");

    assert!(say(&app, 6, "/order tea 2").await.contains("2 Tea added to cart. Total: 7.50"));
}

#[tokio::test]
async fn test_catalog_rejects_negative_price() {
    let app = create_test_app();

    let (status, body) = send_json(
        &app,
        "POST",
        "/catalog",
        json!({ "name": "Salt", "quantity": 1, "price": "-1", "description": "" }),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn test_malformed_message_is_rejected() {
    let app = create_test_app();

    let request = Request::builder()
        .method("POST")
        .uri("/message")
        .header("content-type", "application/json")
        .body(Body::from("{ not json"))
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    // The server keeps answering afterwards
    assert_eq!(say(&app, 4, "/contact").await.lines().count(), 3);
}
