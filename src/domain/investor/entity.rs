//! Investor entity and partial-update types

use chrono::{DateTime, Utc};
use serde::Serialize;

/// A ledger participant
#[derive(Debug, Clone, Serialize)]
pub struct Investor {
    /// Store-assigned identifier, immutable once assigned
    id: i64,
    /// Display name; empty is a valid state, not an error
    full_name: String,
    /// Currently invested capital; zero is valid
    invested_amount: f64,
    /// Creation timestamp, immutable
    created_at: DateTime<Utc>,
}

impl Investor {
    pub fn new(
        id: i64,
        full_name: impl Into<String>,
        invested_amount: f64,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            full_name: full_name.into(),
            invested_amount,
            created_at,
        }
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    pub fn invested_amount(&self) -> f64 {
        self.invested_amount
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

/// Fields for creating an investor. Both default to their empty values, so
/// creation never fails for a missing field.
#[derive(Debug, Clone, Default)]
pub struct NewInvestor {
    pub full_name: String,
    pub invested_amount: f64,
}

/// One field of a partial update: either left alone or overwritten.
///
/// `Set("")` and `Set(0.0)` are real overwrites, distinct from `Unchanged`;
/// the two states must never be conflated with the field's empty value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FieldUpdate<T> {
    #[default]
    Unchanged,
    Set(T),
}

impl<T> FieldUpdate<T> {
    /// Build from transport-level optionality: an absent field leaves the
    /// stored value alone, a present one overwrites it.
    pub fn from_option(value: Option<T>) -> Self {
        match value {
            Some(v) => Self::Set(v),
            None => Self::Unchanged,
        }
    }

    pub fn is_unchanged(&self) -> bool {
        matches!(self, Self::Unchanged)
    }

    pub fn as_set(&self) -> Option<&T> {
        match self {
            Self::Set(v) => Some(v),
            Self::Unchanged => None,
        }
    }
}

/// Field-level patch for an investor record
#[derive(Debug, Clone, Default)]
pub struct InvestorUpdate {
    pub full_name: FieldUpdate<String>,
    pub invested_amount: FieldUpdate<f64>,
}

impl InvestorUpdate {
    /// True when no field is overwritten; applying it is a plain read-back.
    pub fn is_noop(&self) -> bool {
        self.full_name.is_unchanged() && self.invested_amount.is_unchanged()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_investor_defaults_to_empty() {
        let new = NewInvestor::default();
        assert_eq!(new.full_name, "");
        assert_eq!(new.invested_amount, 0.0);
    }

    #[test]
    fn test_field_update_from_option() {
        assert_eq!(
            FieldUpdate::from_option(Some("x".to_string())),
            FieldUpdate::Set("x".to_string())
        );
        assert_eq!(FieldUpdate::<String>::from_option(None), FieldUpdate::Unchanged);
    }

    #[test]
    fn test_set_empty_is_not_unchanged() {
        let update = FieldUpdate::Set(String::new());
        assert!(!update.is_unchanged());
        assert_eq!(update.as_set(), Some(&String::new()));
    }

    #[test]
    fn test_update_noop() {
        assert!(InvestorUpdate::default().is_noop());

        let update = InvestorUpdate {
            full_name: FieldUpdate::Unchanged,
            invested_amount: FieldUpdate::Set(0.0),
        };
        assert!(!update.is_noop());
    }

    #[test]
    fn test_investor_serializes_snake_case() {
        let investor = Investor::new(1, "Alice", 100.0, Utc::now());
        let json = serde_json::to_value(&investor).unwrap();

        assert_eq!(json["id"], 1);
        assert_eq!(json["full_name"], "Alice");
        assert_eq!(json["invested_amount"], 100.0);
        assert!(json["created_at"].is_string());
    }
}
