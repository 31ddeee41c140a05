//! PostgreSQL payout repository implementation

use async_trait::async_trait;
use sqlx::{PgPool, Row};

use crate::domain::payout::{NewPayout, Payout, PayoutRepository, PeriodMonth};
use crate::domain::DomainError;

/// PostgreSQL implementation of PayoutRepository
#[derive(Debug, Clone)]
pub struct PostgresPayoutRepository {
    pool: PgPool,
}

impl PostgresPayoutRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PayoutRepository for PostgresPayoutRepository {
    async fn list(&self) -> Result<Vec<Payout>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT id, investor_id, period_month, payout_amount, reinvest,
                   is_withdrawal_profit, is_withdrawal_capital, is_topup, created_at
            FROM payouts
            ORDER BY period_month, id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to list payouts: {}", e)))?;

        Ok(rows.iter().map(row_to_payout).collect())
    }

    async fn create(&self, payout: NewPayout) -> Result<Payout, DomainError> {
        let row = sqlx::query(
            r#"
            INSERT INTO payouts
                (investor_id, period_month, payout_amount, reinvest,
                 is_withdrawal_profit, is_withdrawal_capital, is_topup)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id, investor_id, period_month, payout_amount, reinvest,
                      is_withdrawal_profit, is_withdrawal_capital, is_topup, created_at
            "#,
        )
        .bind(payout.investor_id)
        .bind(payout.period_month.first_day())
        .bind(payout.payout_amount)
        .bind(payout.reinvest)
        .bind(payout.is_withdrawal_profit)
        .bind(payout.is_withdrawal_capital)
        .bind(payout.is_topup)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to create payout: {}", e)))?;

        Ok(row_to_payout(&row))
    }
}

fn row_to_payout(row: &sqlx::postgres::PgRow) -> Payout {
    let id: i64 = row.get("id");
    let investor_id: i64 = row.get("investor_id");
    let period_month: chrono::NaiveDate = row.get("period_month");
    let payout_amount: f64 = row.get("payout_amount");
    let reinvest: bool = row.get("reinvest");
    let is_withdrawal_profit: bool = row.get("is_withdrawal_profit");
    let is_withdrawal_capital: bool = row.get("is_withdrawal_capital");
    let is_topup: bool = row.get("is_topup");
    let created_at: chrono::DateTime<chrono::Utc> = row.get("created_at");

    Payout::new(
        id,
        investor_id,
        PeriodMonth::from_date(period_month),
        payout_amount,
        reinvest,
        is_withdrawal_profit,
        is_withdrawal_capital,
        is_topup,
        created_at,
    )
}
