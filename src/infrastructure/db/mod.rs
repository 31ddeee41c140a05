//! PostgreSQL connection pool and schema bootstrap

use std::time::Duration;

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tracing::info;

use crate::config::DatabaseConfig;
use crate::domain::DomainError;

/// Connect a bounded pool. Idle connections are recycled after five minutes
/// and no connection outlives thirty minutes.
pub async fn connect(config: &DatabaseConfig) -> Result<PgPool, DomainError> {
    info!(
        "Connecting to Postgres: {}@{}:{}/{}",
        config.user, config.host, config.port, config.name
    );

    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .idle_timeout(Duration::from_secs(5 * 60))
        .max_lifetime(Duration::from_secs(30 * 60))
        .connect(&config.url())
        .await
        .map_err(|e| {
            DomainError::configuration(format!("Cannot connect to PostgreSQL: {}", e))
        })?;

    Ok(pool)
}

/// Create the schema if it does not exist yet. Idempotent, run at startup.
///
/// `payouts.investor_id` carries no foreign key: payouts are historical
/// ledger rows and survive deletion of the investor they reference.
pub async fn ensure_schema(pool: &PgPool) -> Result<(), DomainError> {
    let statements = [
        r#"
        CREATE TABLE IF NOT EXISTS users (
            id BIGSERIAL PRIMARY KEY,
            email TEXT NOT NULL UNIQUE,
            password_hash TEXT NOT NULL,
            created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
        )
        "#,
        r#"
        CREATE TABLE IF NOT EXISTS investors (
            id BIGSERIAL PRIMARY KEY,
            full_name TEXT NOT NULL DEFAULT '',
            invested_amount DOUBLE PRECISION NOT NULL DEFAULT 0,
            created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
        )
        "#,
        r#"
        CREATE TABLE IF NOT EXISTS payouts (
            id BIGSERIAL PRIMARY KEY,
            investor_id BIGINT NOT NULL,
            period_month DATE NOT NULL,
            payout_amount DOUBLE PRECISION NOT NULL,
            reinvest BOOLEAN NOT NULL DEFAULT FALSE,
            is_withdrawal_profit BOOLEAN NOT NULL DEFAULT FALSE,
            is_withdrawal_capital BOOLEAN NOT NULL DEFAULT FALSE,
            is_topup BOOLEAN NOT NULL DEFAULT FALSE,
            created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
        )
        "#,
        r#"
        CREATE INDEX IF NOT EXISTS payouts_period_month_idx
            ON payouts (period_month, id)
        "#,
    ];

    for statement in statements {
        sqlx::query(statement)
            .execute(pool)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to ensure schema: {}", e)))?;
    }

    info!("Database schema ready");
    Ok(())
}
