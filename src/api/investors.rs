//! Investor endpoints

use axum::extract::{Path, State};
use axum::http::StatusCode;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::api::middleware::CurrentUser;
use crate::api::state::AppState;
use crate::api::types::{ApiError, Json};
use crate::domain::investor::{FieldUpdate, Investor, InvestorUpdate, NewInvestor};

/// Create request: a partial investor. Missing fields default to empty/zero,
/// so creation never fails for an incomplete body.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct CreateInvestorRequest {
    pub full_name: String,
    pub invested_amount: f64,
}

/// Update request: each field is independently absent (leave alone) or
/// present (overwrite, empty string and zero included).
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct UpdateInvestorRequest {
    pub full_name: Option<String>,
    pub invested_amount: Option<f64>,
}

/// Investor response in the ledger's snake_case wire format
#[derive(Debug, Serialize)]
pub struct InvestorResponse {
    pub id: i64,
    pub full_name: String,
    pub invested_amount: f64,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl From<&Investor> for InvestorResponse {
    fn from(investor: &Investor) -> Self {
        Self {
            id: investor.id(),
            full_name: investor.full_name().to_string(),
            invested_amount: investor.invested_amount(),
            created_at: investor.created_at(),
        }
    }
}

/// Confirmation body for deletions
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

fn parse_investor_id(raw: &str) -> Result<i64, ApiError> {
    raw.parse()
        .map_err(|_| ApiError::bad_request("invalid investor id"))
}

/// GET /api/investors
pub async fn list_investors(
    State(state): State<AppState>,
    CurrentUser(_): CurrentUser,
) -> Result<Json<Vec<InvestorResponse>>, ApiError> {
    let investors = state.ledger_service.list_investors().await?;

    Ok(Json(investors.iter().map(InvestorResponse::from).collect()))
}

/// POST /api/investors
pub async fn create_investor(
    State(state): State<AppState>,
    CurrentUser(_): CurrentUser,
    Json(request): Json<CreateInvestorRequest>,
) -> Result<(StatusCode, Json<InvestorResponse>), ApiError> {
    debug!(full_name = %request.full_name, "Creating investor");

    let investor = state
        .ledger_service
        .create_investor(NewInvestor {
            full_name: request.full_name,
            invested_amount: request.invested_amount,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(InvestorResponse::from(&investor))))
}

/// PUT /api/investors/{id}
pub async fn update_investor(
    State(state): State<AppState>,
    CurrentUser(_): CurrentUser,
    Path(id): Path<String>,
    Json(request): Json<UpdateInvestorRequest>,
) -> Result<Json<InvestorResponse>, ApiError> {
    let id = parse_investor_id(&id)?;

    debug!(id, "Updating investor");

    let update = InvestorUpdate {
        full_name: FieldUpdate::from_option(request.full_name),
        invested_amount: FieldUpdate::from_option(request.invested_amount),
    };

    let investor = state.ledger_service.update_investor(id, update).await?;

    Ok(Json(InvestorResponse::from(&investor)))
}

/// DELETE /api/investors/{id}
pub async fn delete_investor(
    State(state): State<AppState>,
    CurrentUser(_): CurrentUser,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    let id = parse_investor_id(&id)?;

    debug!(id, "Deleting investor");

    state.ledger_service.delete_investor(id).await?;

    Ok(Json(MessageResponse {
        message: "deleted".to_string(),
    }))
}
