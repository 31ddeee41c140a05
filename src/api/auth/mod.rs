//! Registration and login endpoints

use axum::extract::State;
use serde::{Deserialize, Serialize};

use crate::api::state::AppState;
use crate::api::types::{ApiError, Json};

/// Registration request. Fields default to empty so a missing field is
/// handled by the flow's own validation rather than a decode error.
#[derive(Debug, Deserialize, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub secret_code: String,
}

/// Login request
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Session response: the bearer token and the email it belongs to. The
/// password and its hash never appear in any response.
#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub token: String,
    pub email: String,
}

/// POST /api/register
pub async fn register(
    State(state): State<AppState>,
    Json(request): Json<RegisterRequest>,
) -> Result<Json<SessionResponse>, ApiError> {
    let session = state
        .auth_service
        .register(&request.email, &request.password, &request.secret_code)
        .await?;

    Ok(Json(SessionResponse {
        token: session.token,
        email: session.email,
    }))
}

/// POST /api/login
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<SessionResponse>, ApiError> {
    let session = state
        .auth_service
        .login(&request.email, &request.password)
        .await?;

    Ok(Json(SessionResponse {
        token: session.token,
        email: session.email,
    }))
}
