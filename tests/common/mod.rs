#![allow(dead_code)]

use axum::{
    body::{to_bytes, Body},
    http::{header, Request, StatusCode},
    Router,
};
use serde_json::Value;
use tower::ServiceExt;

use gestao_patio::{
    config::AppState, db::Storage, routes::build_router, services::auth::AuthService,
};

pub const USERNAME: &str = "admin";
pub const PASSWORD: &str = "12345";

// Aplicação completa sobre armazenamento em memória, isolada por teste.
pub async fn build_app() -> anyhow::Result<Router> {
    let auth_service = AuthService::from_plain_password(
        USERNAME.into(),
        PASSWORD.into(),
        4,
        "test-secret".into(),
        1,
    )
    .await?;

    Ok(build_router(AppState::with_storage(Storage::Memory, auth_service)))
}

pub struct TestResponse {
    pub status: StatusCode,
    pub location: Option<String>,
    pub body: Value,
}

pub async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    body: Option<Value>,
    token: Option<&str>,
) -> anyhow::Result<TestResponse> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }

    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(serde_json::to_vec(&json)?))?,
        None => builder.body(Body::empty())?,
    };

    let response = app.clone().oneshot(request).await?;
    let status = response.status();
    let location = response
        .headers()
        .get(header::LOCATION)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string);

    let bytes = to_bytes(response.into_body(), usize::MAX).await?;
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or_else(|_| {
            Value::String(String::from_utf8_lossy(&bytes).into_owned())
        })
    };

    Ok(TestResponse { status, location, body })
}

pub async fn login(app: &Router) -> anyhow::Result<String> {
    let response = send(
        app,
        "POST",
        "/api/v1/Auth/login",
        Some(serde_json::json!({ "username": USERNAME, "password": PASSWORD })),
        None,
    )
    .await?;
    assert_eq!(response.status, StatusCode::OK);

    Ok(response.body["token"]
        .as_str()
        .ok_or_else(|| anyhow::anyhow!("login sem token"))?
        .to_string())
}
