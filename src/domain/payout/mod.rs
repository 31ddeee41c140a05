//! Payout domain
//!
//! Append-only transaction events tied to investors, keyed by the calendar
//! month they settle.

mod entity;
mod period;
mod repository;

pub use entity::{NewPayout, Payout};
pub use period::PeriodMonth;
pub use repository::PayoutRepository;

#[cfg(test)]
pub use repository::mock::MockPayoutRepository;
