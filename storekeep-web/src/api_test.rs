//! Tests for the API client.
//!
//! Exercises request construction and response normalization natively, with
//! no server: requests are built and inspected, responses decoded from
//! canned status/body pairs.

use crate::api::{ListQuery, StorekeepClient, decode_body};
use crate::error::ApiError;
use crate::storage::MemoryStorage;
use reqwest::Method;
use shared::models::{TokenResponse, User};
use std::rc::Rc;

fn client_with_token(token: Option<&str>) -> StorekeepClient {
    let storage = match token {
        Some(token) => MemoryStorage::with_token(token),
        None => MemoryStorage::default(),
    };
    StorekeepClient::new("http://localhost:8000/api/", Rc::new(storage))
}

#[test]
fn joins_paths_onto_a_trimmed_base_url() {
    let client = client_with_token(None);
    let request = client
        .request(Method::GET, "/products/", false)
        .build()
        .unwrap();
    assert_eq!(request.url().as_str(), "http://localhost:8000/api/products/");
}

#[test]
fn authorized_requests_carry_the_stored_token() {
    let client = client_with_token(Some("token123"));
    let request = client
        .request(Method::GET, "auth/me", true)
        .build()
        .unwrap();
    let header = request
        .headers()
        .get("authorization")
        .and_then(|value| value.to_str().ok());
    assert_eq!(header, Some("Bearer token123"));
}

#[test]
fn an_empty_token_slot_attaches_no_header() {
    let client = client_with_token(None);
    let request = client
        .request(Method::GET, "auth/me", true)
        .build()
        .unwrap();
    assert!(request.headers().get("authorization").is_none());
}

#[test]
fn unauthenticated_requests_never_carry_a_header() {
    let client = client_with_token(Some("token123"));
    let request = client
        .request(Method::POST, "auth/token", false)
        .build()
        .unwrap();
    assert!(request.headers().get("authorization").is_none());
}

#[test]
fn login_submits_form_encoded_credentials() {
    let client = client_with_token(None);
    let request = client
        .request(Method::POST, "auth/token", false)
        .form(&[("username", "admin"), ("password", "s3cret")])
        .build()
        .unwrap();
    let content_type = request
        .headers()
        .get("content-type")
        .and_then(|value| value.to_str().ok());
    assert_eq!(content_type, Some("application/x-www-form-urlencoded"));
    let body = request.body().and_then(|body| body.as_bytes()).unwrap();
    assert_eq!(body, b"username=admin&password=s3cret");
}

#[test]
fn list_query_omits_unset_fields() {
    assert!(ListQuery::default().to_pairs().is_empty());

    let query = ListQuery {
        skip: Some(20),
        limit: Some(10),
        ..ListQuery::default()
    };
    assert_eq!(
        query.to_pairs(),
        vec![("skip", "20".to_string()), ("limit", "10".to_string())]
    );

    assert_eq!(
        ListQuery::searching("tee").to_pairs(),
        vec![("search", "tee".to_string())]
    );
    assert_eq!(
        ListQuery::with_status("shipped").to_pairs(),
        vec![("status", "shipped".to_string())]
    );
}

#[test]
fn decode_body_accepts_a_success_payload() {
    let token: TokenResponse =
        decode_body(200, r#"{"access_token":"abc","token_type":"bearer"}"#).unwrap();
    assert_eq!(token.access_token, "abc");
}

#[test]
fn decode_body_normalizes_backend_errors() {
    let result: Result<User, ApiError> = decode_body(401, r#"{"detail":"Bad credentials"}"#);
    let err = result.unwrap_err();
    assert_eq!(err.to_string(), "Bad credentials");
    assert_eq!(err.status(), Some(401));
    assert!(err.is_unauthorized());
}

#[test]
fn decode_body_falls_back_on_undetailed_errors() {
    let result: Result<User, ApiError> = decode_body(500, "<html>oops</html>");
    assert_eq!(result.unwrap_err().to_string(), "Request failed");
}

#[test]
fn decode_body_flags_malformed_success_bodies() {
    let result: Result<User, ApiError> = decode_body(200, "not json");
    assert!(matches!(result.unwrap_err(), ApiError::Decode(_)));
}
