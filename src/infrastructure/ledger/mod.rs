//! Ledger infrastructure: investor and payout persistence

mod investors;
mod payouts;
mod service;

pub use investors::PostgresInvestorRepository;
pub use payouts::PostgresPayoutRepository;
pub use service::LedgerService;
