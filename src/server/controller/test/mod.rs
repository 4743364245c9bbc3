//! HTTP level tests driving the full router with an in-memory database.

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use sea_orm::DatabaseConnection;
use serde_json::{json, Value};
use tower::ServiceExt;
use tower_sessions::SessionManagerLayer;
use tower_sessions_sqlx_store::SqliteStore;
use test_utils::{
    builder::TestBuilder,
    factory::{
        self,
        user::{UserFactory, DEFAULT_PASSWORD},
    },
};

use crate::server::{error::AppError, router::router, state::AppState};


/// Response status and JSON body, `Value::Null` when the body is empty.
struct TestResponse {
    status: StatusCode,
    cookie: Option<String>,
    body: Value,
}

/// Builds the API router over `db` with sessions stored in the same database.
async fn app(db: &DatabaseConnection) -> Result<Router, AppError> {
    let store = SqliteStore::new(db.get_sqlite_connection_pool().clone());
    store.migrate().await?;

    Ok(router()
        .with_state(AppState::new(db.clone()))
        .layer(SessionManagerLayer::new(store).with_secure(false)))
}

async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    cookie: Option<&str>,
    body: Option<Value>,
) -> TestResponse {
    let mut request = Request::builder().method(method).uri(uri);
    if let Some(cookie) = cookie {
        request = request.header(header::COOKIE, cookie);
    }
    let request = match body {
        Some(body) => request
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string())),
        None => request.body(Body::empty()),
    }
    .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();

    let status = response.status();
    let cookie = response
        .headers()
        .get(header::SET_COOKIE)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(';').next())
        .map(str::to_string);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

    TestResponse {
        status,
        cookie,
        body,
    }
}

/// Logs in as `username` with the factory password and returns the session cookie.
async fn login(app: &Router, username: &str) -> String {
    let response = send(
        app,
        Method::POST,
        "/api/auth/login",
        None,
        Some(json!({ "username": username, "password": DEFAULT_PASSWORD })),
    )
    .await;

    assert_eq!(response.status, StatusCode::OK);

    response.cookie.unwrap()
}
