//! Tagged call outcomes.
//!
//! Write operations report back as `{"type":"ok","value":true}` or
//! `{"type":"err","value":<code>}`.

use serde::{Deserialize, Serialize};

use super::error::{LedgerError, LedgerErrorKind};

/// Tagged success or failure of a ledger write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum CallOutcome {
    /// The write was applied.
    Ok(bool),
    /// The write was rejected with the given error code.
    Err(u32),
}

impl CallOutcome {
    /// Returns true for a successful outcome.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        matches!(self, Self::Ok(_))
    }

    /// Returns the error kind of a failed outcome.
    ///
    /// Unknown codes map to `None`, as do successful outcomes.
    #[must_use]
    pub const fn error_kind(&self) -> Option<LedgerErrorKind> {
        match self {
            Self::Ok(_) => None,
            Self::Err(code) => LedgerErrorKind::from_code(*code),
        }
    }
}

impl From<&LedgerError> for CallOutcome {
    fn from(err: &LedgerError) -> Self {
        Self::Err(err.code())
    }
}

impl From<Result<(), LedgerError>> for CallOutcome {
    fn from(result: Result<(), LedgerError>) -> Self {
        match result {
            Ok(()) => Self::Ok(true),
            Err(err) => Self::from(&err),
        }
    }
}
