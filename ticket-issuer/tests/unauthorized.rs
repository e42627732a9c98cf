//!
//! Module testing if API paths are protected by auth middleware.
//!
//! Any request should return 401 if URI and method is correct, 404 otherwise
//!
mod common;
use common::*;

use reqwest::{header::CONTENT_TYPE, Client, StatusCode};

#[tokio::test]
async fn post_create_ticket() {
    init_env();

    let client = Client::new();

    let response = client
        .post(format!("http://{}/create-ticket", address()))
        .header(CONTENT_TYPE, "application/json")
        .body(r#"{"vatin":"12345678901","firstName":"Ana","lastName":"Anić"}"#)
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn post_create_ticket_invalid_token() {
    init_env();

    let client = Client::new();

    let response = client
        .post(format!("http://{}/create-ticket", address()))
        .bearer_auth("not a jwt")
        .header(CONTENT_TYPE, "application/json")
        .body(r#"{"vatin":"12345678901","firstName":"Ana","lastName":"Anić"}"#)
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}
