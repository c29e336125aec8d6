use std::sync::Arc;

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use sea_orm::DatabaseConnection;
use serde_json::{json, Value};
use tower::ServiceExt;

use crate::server::{
    router, service::mail::MailService, state::AppState, store::memory::MemoryDocumentStore,
    util::token::hash_token,
};
use test_utils::{builder::TestBuilder, factory};


/// Builds the application router without rate limiting over a test database.
fn app(db: &DatabaseConnection) -> Router {
    router::router(None)
        .unwrap()
        .with_state(AppState::new(
            db.clone(),
            Arc::new(MemoryDocumentStore::new()),
            MailService::disabled(),
            "http://localhost".to_string(),
        ))
}

/// Sends one request and returns the status with the decoded JSON body
/// (`Value::Null` for an empty body).
async fn send(
    app: Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut request = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        request = request.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }
    let request = match body {
        Some(body) => request
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => request.body(Body::empty()).unwrap(),
    };

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };

    (status, value)
}
