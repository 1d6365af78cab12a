//! Budget data types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Composite key identifying a budget: department and fiscal year.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct BudgetKey {
    /// Department name.
    pub department: String,
    /// Fiscal year.
    pub fiscal_year: i32,
}

impl BudgetKey {
    /// Creates a key for a department and fiscal year.
    #[must_use]
    pub fn new(department: impl Into<String>, fiscal_year: i32) -> Self {
        Self {
            department: department.into(),
            fiscal_year,
        }
    }
}

impl std::fmt::Display for BudgetKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.department, self.fiscal_year)
    }
}

/// A stored budget.
///
/// Records only exist with a positive amount; an absent record reads as 0.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetRecord {
    /// Department name.
    pub department: String,
    /// Fiscal year.
    pub fiscal_year: i32,
    /// Budgeted amount in currency units.
    pub amount: i64,
    /// When the budget was first set.
    pub created_at: DateTime<Utc>,
    /// When the amount last changed.
    pub updated_at: DateTime<Utc>,
}

impl BudgetRecord {
    /// Creates a fresh record stamped with `now`.
    #[must_use]
    pub fn new(key: BudgetKey, amount: i64, now: DateTime<Utc>) -> Self {
        Self {
            department: key.department,
            fiscal_year: key.fiscal_year,
            amount,
            created_at: now,
            updated_at: now,
        }
    }

    /// Returns the record's key.
    #[must_use]
    pub fn key(&self) -> BudgetKey {
        BudgetKey::new(self.department.clone(), self.fiscal_year)
    }
}
