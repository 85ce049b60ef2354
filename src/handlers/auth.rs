use axum::{extract::State, Json};

use crate::{
    common::error::AppError,
    middleware::json::ValidatedJson,
    models::auth::{AuthResponse, LoginRequest},
    services::auth::AuthService,
};

// Handler de login
pub async fn login(
    State(auth_service): State<AuthService>,
    ValidatedJson(payload): ValidatedJson<LoginRequest>,
) -> Result<Json<AuthResponse>, AppError> {
    let token = auth_service.login(&payload.username, &payload.password).await?;

    Ok(Json(AuthResponse { token }))
}
