//! Payout repository trait

use async_trait::async_trait;
use std::fmt::Debug;

use super::entity::{NewPayout, Payout};
use crate::domain::DomainError;

/// Repository trait for the append-only payout ledger. There is no update
/// or delete: a recorded payout is history.
#[async_trait]
pub trait PayoutRepository: Send + Sync + Debug {
    /// List all payouts ordered by period month, then id
    async fn list(&self) -> Result<Vec<Payout>, DomainError>;

    /// Append a payout
    async fn create(&self, payout: NewPayout) -> Result<Payout, DomainError>;
}
