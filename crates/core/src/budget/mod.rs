//! Budget ledger: authority-gated budgets keyed by department and fiscal year.

pub mod error;
pub mod outcome;
pub mod service;
pub mod store;
pub mod types;


pub use error::{LedgerError, LedgerErrorKind};
pub use outcome::CallOutcome;
pub use service::BudgetLedger;
pub use store::{BudgetStore, InMemoryBudgetStore};
pub use types::{BudgetKey, BudgetRecord};
