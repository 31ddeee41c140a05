//! Payout endpoints

use axum::extract::State;
use axum::http::StatusCode;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::api::middleware::CurrentUser;
use crate::api::state::AppState;
use crate::api::types::{ApiError, Json};
use crate::domain::payout::{NewPayout, Payout, PeriodMonth};

/// Create request in the client's camelCase wire format. The period comes
/// in as a `"YYYY-MM"` string and is parsed strictly at this boundary.
#[derive(Debug, Deserialize, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct CreatePayoutRequest {
    pub investor_id: i64,
    pub period_month: String,
    pub payout_amount: f64,
    pub reinvest: bool,
    pub is_withdrawal_profit: bool,
    pub is_withdrawal_capital: bool,
}

/// Capital top-up request
#[derive(Debug, Deserialize, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct TopupRequest {
    pub investor_id: i64,
    pub period_month: String,
    pub amount: f64,
}

/// Payout response in the ledger's snake_case wire format
#[derive(Debug, Serialize)]
pub struct PayoutResponse {
    pub id: i64,
    pub investor_id: i64,
    pub period_month: NaiveDate,
    pub period_date: NaiveDate,
    pub payout_amount: f64,
    pub reinvest: bool,
    pub is_withdrawal_profit: bool,
    pub is_withdrawal_capital: bool,
    pub is_topup: bool,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

/// Present the stored period under both of its historical wire names.
///
/// `period_month` is canonical; `period_date` is the name older clients and
/// exports still read. Delete this shim once no stored consumer asks for
/// the legacy name.
fn present_period(period: PeriodMonth) -> (NaiveDate, NaiveDate) {
    let day = period.first_day();
    (day, day)
}

impl From<&Payout> for PayoutResponse {
    fn from(payout: &Payout) -> Self {
        let (period_month, period_date) = present_period(payout.period_month());

        Self {
            id: payout.id(),
            investor_id: payout.investor_id(),
            period_month,
            period_date,
            payout_amount: payout.payout_amount(),
            reinvest: payout.reinvest(),
            is_withdrawal_profit: payout.is_withdrawal_profit(),
            is_withdrawal_capital: payout.is_withdrawal_capital(),
            is_topup: payout.is_topup(),
            created_at: payout.created_at(),
        }
    }
}

/// GET /api/payouts
pub async fn list_payouts(
    State(state): State<AppState>,
    CurrentUser(_): CurrentUser,
) -> Result<Json<Vec<PayoutResponse>>, ApiError> {
    let payouts = state.ledger_service.list_payouts().await?;

    Ok(Json(payouts.iter().map(PayoutResponse::from).collect()))
}

/// POST /api/payouts
pub async fn create_payout(
    State(state): State<AppState>,
    CurrentUser(_): CurrentUser,
    Json(request): Json<CreatePayoutRequest>,
) -> Result<(StatusCode, Json<PayoutResponse>), ApiError> {
    let period_month = PeriodMonth::parse(&request.period_month)?;

    debug!(investor_id = request.investor_id, period = %period_month, "Recording payout");

    let payout = state
        .ledger_service
        .create_payout(NewPayout {
            investor_id: request.investor_id,
            period_month,
            payout_amount: request.payout_amount,
            reinvest: request.reinvest,
            is_withdrawal_profit: request.is_withdrawal_profit,
            is_withdrawal_capital: request.is_withdrawal_capital,
            is_topup: false,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(PayoutResponse::from(&payout))))
}

/// POST /api/payouts/topup
pub async fn create_topup(
    State(state): State<AppState>,
    CurrentUser(_): CurrentUser,
    Json(request): Json<TopupRequest>,
) -> Result<(StatusCode, Json<PayoutResponse>), ApiError> {
    let period_month = PeriodMonth::parse(&request.period_month)?;

    debug!(investor_id = request.investor_id, period = %period_month, "Recording top-up");

    let payout = state
        .ledger_service
        .create_payout(NewPayout::topup(
            request.investor_id,
            period_month,
            request.amount,
        ))
        .await?;

    Ok((StatusCode::CREATED, Json(PayoutResponse::from(&payout))))
}
