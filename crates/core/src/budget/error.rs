//! Budget ledger error types.

use budgetary_shared::{AppError, Principal};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Budget ledger errors.
///
/// Every error leaves the ledger unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LedgerError {
    /// Caller is not the configured authority.
    #[error("Principal {caller} is not authorized to modify budgets")]
    Unauthorized {
        /// The principal that attempted the write.
        caller: Principal,
    },

    /// Amount must be strictly greater than zero.
    #[error("Budget amount must be greater than zero, got {0}")]
    InvalidAmount(i64),

    /// No budget recorded for the department and fiscal year.
    #[error("Budget not found for {department} in fiscal year {fiscal_year}")]
    NotFound {
        /// Department name.
        department: String,
        /// Fiscal year.
        fiscal_year: i32,
    },
}

impl LedgerError {
    /// Returns the error kind, dropping the context payload.
    #[must_use]
    pub const fn kind(&self) -> LedgerErrorKind {
        match self {
            Self::Unauthorized { .. } => LedgerErrorKind::Unauthorized,
            Self::InvalidAmount(_) => LedgerErrorKind::InvalidAmount,
            Self::NotFound { .. } => LedgerErrorKind::NotFound,
        }
    }

    /// Returns the numeric error code (100, 101 or 102).
    #[must_use]
    pub const fn code(&self) -> u32 {
        self.kind().code()
    }
}

/// Error kinds with their stable numeric codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LedgerErrorKind {
    /// Caller is not the configured authority.
    Unauthorized,
    /// Amount was zero or negative.
    InvalidAmount,
    /// Update targeted a budget that does not exist.
    NotFound,
}

impl LedgerErrorKind {
    /// Returns the numeric error code.
    #[must_use]
    pub const fn code(self) -> u32 {
        match self {
            Self::Unauthorized => 100,
            Self::InvalidAmount => 101,
            Self::NotFound => 102,
        }
    }

    /// Maps a numeric error code back to its kind.
    #[must_use]
    pub const fn from_code(code: u32) -> Option<Self> {
        match code {
            100 => Some(Self::Unauthorized),
            101 => Some(Self::InvalidAmount),
            102 => Some(Self::NotFound),
            _ => None,
        }
    }
}

impl From<LedgerError> for AppError {
    fn from(err: LedgerError) -> Self {
        match err {
            LedgerError::Unauthorized { .. } => Self::Unauthorized(err.to_string()),
            LedgerError::InvalidAmount(_) => Self::Validation(err.to_string()),
            LedgerError::NotFound { .. } => Self::NotFound(err.to_string()),
        }
    }
}
