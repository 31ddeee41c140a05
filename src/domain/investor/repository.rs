//! Investor repository trait

use async_trait::async_trait;
use std::fmt::Debug;

use super::entity::{Investor, InvestorUpdate, NewInvestor};
use crate::domain::DomainError;

/// Repository trait for investor storage
#[async_trait]
pub trait InvestorRepository: Send + Sync + Debug {
    /// List all investors ordered by id
    async fn list(&self) -> Result<Vec<Investor>, DomainError>;

    /// Get an investor by id
    async fn get(&self, id: i64) -> Result<Option<Investor>, DomainError>;

    /// Persist a new investor
    async fn create(&self, investor: NewInvestor) -> Result<Investor, DomainError>;

    /// Apply a field-level patch. Each `Set` field is written independently;
    /// there is no all-or-nothing guarantee across the two fields.
    async fn update(&self, id: i64, update: &InvestorUpdate) -> Result<(), DomainError>;

    /// Delete an investor. Deleting a missing id is not an error, and
    /// recorded payouts referencing the investor are left in place.
    async fn delete(&self, id: i64) -> Result<(), DomainError>;
}
