//! Ledger service over the investor and payout repositories

use std::sync::Arc;

use crate::domain::investor::{Investor, InvestorRepository, InvestorUpdate, NewInvestor};
use crate::domain::payout::{NewPayout, Payout, PayoutRepository};
use crate::domain::DomainError;

/// Owns the persisted representation of investors and payouts. Every read
/// goes to durable storage; nothing is cached in process.
#[derive(Debug)]
pub struct LedgerService<I: InvestorRepository, P: PayoutRepository> {
    investors: Arc<I>,
    payouts: Arc<P>,
}

impl<I: InvestorRepository, P: PayoutRepository> LedgerService<I, P> {
    pub fn new(investors: Arc<I>, payouts: Arc<P>) -> Self {
        Self { investors, payouts }
    }

    pub async fn list_investors(&self) -> Result<Vec<Investor>, DomainError> {
        self.investors.list().await
    }

    pub async fn create_investor(&self, new: NewInvestor) -> Result<Investor, DomainError> {
        self.investors.create(new).await
    }

    /// Apply a field-level patch, then read the record back so the caller
    /// sees the applied state.
    pub async fn update_investor(
        &self,
        id: i64,
        update: InvestorUpdate,
    ) -> Result<Investor, DomainError> {
        self.investors.update(id, &update).await?;

        self.investors
            .get(id)
            .await?
            .ok_or_else(|| DomainError::not_found(format!("Investor '{}' not found", id)))
    }

    pub async fn delete_investor(&self, id: i64) -> Result<(), DomainError> {
        self.investors.delete(id).await
    }

    pub async fn list_payouts(&self) -> Result<Vec<Payout>, DomainError> {
        self.payouts.list().await
    }

    pub async fn create_payout(&self, new: NewPayout) -> Result<Payout, DomainError> {
        self.payouts.create(new).await
    }
}
