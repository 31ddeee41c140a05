//! PostgreSQL investor repository implementation

use async_trait::async_trait;
use sqlx::{PgPool, Row};

use crate::domain::investor::{FieldUpdate, Investor, InvestorRepository, InvestorUpdate, NewInvestor};
use crate::domain::DomainError;

/// PostgreSQL implementation of InvestorRepository
#[derive(Debug, Clone)]
pub struct PostgresInvestorRepository {
    pool: PgPool,
}

impl PostgresInvestorRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl InvestorRepository for PostgresInvestorRepository {
    async fn list(&self) -> Result<Vec<Investor>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT id, full_name, invested_amount, created_at
            FROM investors
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to list investors: {}", e)))?;

        Ok(rows.iter().map(row_to_investor).collect())
    }

    async fn get(&self, id: i64) -> Result<Option<Investor>, DomainError> {
        let row = sqlx::query(
            r#"
            SELECT id, full_name, invested_amount, created_at
            FROM investors
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to get investor: {}", e)))?;

        Ok(row.as_ref().map(row_to_investor))
    }

    async fn create(&self, investor: NewInvestor) -> Result<Investor, DomainError> {
        let row = sqlx::query(
            r#"
            INSERT INTO investors (full_name, invested_amount)
            VALUES ($1, $2)
            RETURNING id, full_name, invested_amount, created_at
            "#,
        )
        .bind(&investor.full_name)
        .bind(investor.invested_amount)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to create investor: {}", e)))?;

        Ok(row_to_investor(&row))
    }

    async fn update(&self, id: i64, update: &InvestorUpdate) -> Result<(), DomainError> {
        // Each set field is its own statement; a failure on the second can
        // leave the first committed.
        if let FieldUpdate::Set(full_name) = &update.full_name {
            sqlx::query("UPDATE investors SET full_name = $1 WHERE id = $2")
                .bind(full_name)
                .bind(id)
                .execute(&self.pool)
                .await
                .map_err(|e| {
                    DomainError::storage(format!("Failed to update investor name: {}", e))
                })?;
        }

        if let FieldUpdate::Set(invested_amount) = update.invested_amount {
            sqlx::query("UPDATE investors SET invested_amount = $1 WHERE id = $2")
                .bind(invested_amount)
                .bind(id)
                .execute(&self.pool)
                .await
                .map_err(|e| {
                    DomainError::storage(format!("Failed to update investor amount: {}", e))
                })?;
        }

        Ok(())
    }

    async fn delete(&self, id: i64) -> Result<(), DomainError> {
        sqlx::query("DELETE FROM investors WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to delete investor: {}", e)))?;

        Ok(())
    }
}

fn row_to_investor(row: &sqlx::postgres::PgRow) -> Investor {
    let id: i64 = row.get("id");
    let full_name: String = row.get("full_name");
    let invested_amount: f64 = row.get("invested_amount");
    let created_at: chrono::DateTime<chrono::Utc> = row.get("created_at");

    Investor::new(id, full_name, invested_amount, created_at)
}
