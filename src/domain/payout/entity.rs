//! Payout entity

use chrono::{DateTime, Utc};

use super::period::PeriodMonth;

/// A single ledger transaction tied to one investor.
///
/// The four booleans are independent bits describing how the amount was
/// disposed of; callers own any exclusivity policy, this type enforces none.
#[derive(Debug, Clone)]
pub struct Payout {
    id: i64,
    /// Reference to an investor; the payout store does not own that lifecycle
    investor_id: i64,
    period_month: PeriodMonth,
    payout_amount: f64,
    reinvest: bool,
    is_withdrawal_profit: bool,
    is_withdrawal_capital: bool,
    is_topup: bool,
    created_at: DateTime<Utc>,
}

impl Payout {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: i64,
        investor_id: i64,
        period_month: PeriodMonth,
        payout_amount: f64,
        reinvest: bool,
        is_withdrawal_profit: bool,
        is_withdrawal_capital: bool,
        is_topup: bool,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            investor_id,
            period_month,
            payout_amount,
            reinvest,
            is_withdrawal_profit,
            is_withdrawal_capital,
            is_topup,
            created_at,
        }
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn investor_id(&self) -> i64 {
        self.investor_id
    }

    pub fn period_month(&self) -> PeriodMonth {
        self.period_month
    }

    pub fn payout_amount(&self) -> f64 {
        self.payout_amount
    }

    pub fn reinvest(&self) -> bool {
        self.reinvest
    }

    pub fn is_withdrawal_profit(&self) -> bool {
        self.is_withdrawal_profit
    }

    pub fn is_withdrawal_capital(&self) -> bool {
        self.is_withdrawal_capital
    }

    pub fn is_topup(&self) -> bool {
        self.is_topup
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

/// Fields for appending a payout; the store assigns `id` and `created_at`.
/// Amount and flags are stored verbatim, without sign or exclusivity checks.
#[derive(Debug, Clone)]
pub struct NewPayout {
    pub investor_id: i64,
    pub period_month: PeriodMonth,
    pub payout_amount: f64,
    pub reinvest: bool,
    pub is_withdrawal_profit: bool,
    pub is_withdrawal_capital: bool,
    pub is_topup: bool,
}

impl NewPayout {
    /// A capital top-up: the amount was added to the investor's capital,
    /// none of the disposal flags apply.
    pub fn topup(investor_id: i64, period_month: PeriodMonth, amount: f64) -> Self {
        Self {
            investor_id,
            period_month,
            payout_amount: amount,
            reinvest: false,
            is_withdrawal_profit: false,
            is_withdrawal_capital: false,
            is_topup: true,
        }
    }
}
