//! Request authentication gate
//!
//! Authentication only: the gate establishes *who* is calling and nothing
//! about what they may touch.

use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts},
};
use tracing::debug;

use crate::api::state::AppState;
use crate::api::types::ApiError;

/// Extractor that requires a valid bearer token and carries the
/// authenticated user's id for the rest of this request only.
///
/// Every verification failure is answered with the same status and one of
/// two fixed messages: "missing token" when no bearer token was presented,
/// "invalid token" for everything else. Clients learn nothing about *why*
/// a token was rejected.
#[derive(Debug, Clone, Copy)]
pub struct CurrentUser(pub i64);

impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = extract_bearer_token(&parts.headers)?;

        debug!("Validating bearer token");

        let user_id = state
            .token_service
            .verify(&token)
            .map_err(|_| ApiError::unauthorized("invalid token"))?;

        Ok(CurrentUser(user_id))
    }
}

/// Extract the bearer token from the Authorization header
pub fn extract_bearer_token(headers: &axum::http::HeaderMap) -> Result<String, ApiError> {
    if let Some(auth_header) = headers.get(header::AUTHORIZATION) {
        let auth_str = auth_header
            .to_str()
            .map_err(|_| ApiError::unauthorized("missing token"))?;

        if let Some(token) = auth_str.strip_prefix("Bearer ") {
            return Ok(token.trim().to_string());
        }
    }

    Err(ApiError::unauthorized("missing token"))
}
