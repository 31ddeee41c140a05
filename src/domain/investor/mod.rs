//! Investor domain
//!
//! Ledger participants and the field-level patch types used for partial
//! updates.

mod entity;
mod repository;

pub use entity::{FieldUpdate, Investor, InvestorUpdate, NewInvestor};
pub use repository::InvestorRepository;

#[cfg(test)]
pub use repository::mock::MockInvestorRepository;
