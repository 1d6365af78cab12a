//! Budget ledger: authority-gated reads and writes of budgets.

use budgetary_shared::{AppError, AppResult, LedgerConfig, Principal};
use tracing::{debug, info, warn};

use super::error::LedgerError;
use super::store::{BudgetStore, InMemoryBudgetStore};
use super::types::{BudgetKey, BudgetRecord};

/// Budget ledger keyed by department and fiscal year.
///
/// Only the configured authority may write. Reads are open to everyone and
/// return 0 for budgets that were never set.
pub struct BudgetLedger<S = InMemoryBudgetStore> {
    authority: Principal,
    store: S,
}

impl BudgetLedger<InMemoryBudgetStore> {
    /// Creates an empty in-memory ledger governed by `authority`.
    #[must_use]
    pub fn new(authority: impl Into<Principal>) -> Self {
        Self::with_store(authority, InMemoryBudgetStore::new())
    }

    /// Creates an in-memory ledger from configuration.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Validation` if an initial budget is not positive.
    pub fn from_config(config: &LedgerConfig) -> AppResult<Self> {
        Self::from_config_with_store(config, InMemoryBudgetStore::new())
    }
}

impl<S: BudgetStore> BudgetLedger<S> {
    /// Creates a ledger over an existing store.
    pub fn with_store(authority: impl Into<Principal>, store: S) -> Self {
        Self {
            authority: authority.into(),
            store,
        }
    }

    /// Creates a ledger over `store` and seeds it with the configured
    /// initial budgets.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Validation` if an initial budget is not positive.
    /// Nothing is seeded in that case.
    pub fn from_config_with_store(config: &LedgerConfig, store: S) -> AppResult<Self> {
        if let Some(bad) = config.initial_budgets.iter().find(|b| b.amount <= 0) {
            return Err(AppError::Validation(format!(
                "initial budget for {} in fiscal year {} must be greater than zero, got {}",
                bad.department, bad.fiscal_year, bad.amount
            )));
        }

        let ledger = Self::with_store(config.authority.clone(), store);
        for seed in &config.initial_budgets {
            ledger
                .store
                .insert(BudgetKey::new(seed.department.clone(), seed.fiscal_year), seed.amount);
        }

        info!(
            authority = %ledger.authority,
            seeded = config.initial_budgets.len(),
            "Budget ledger initialized"
        );
        Ok(ledger)
    }

    /// The principal allowed to write budgets.
    pub fn authority(&self) -> &Principal {
        &self.authority
    }

    /// Sets the budget for a department and fiscal year, overwriting any
    /// existing amount.
    ///
    /// Checks run in order: caller must be the authority, then the amount
    /// must be positive.
    pub fn set_budget(
        &self,
        caller: &Principal,
        department: &str,
        fiscal_year: i32,
        amount: i64,
    ) -> Result<(), LedgerError> {
        self.authorize(caller)
            .and_then(|()| validate_amount(amount))
            .inspect_err(|err| log_rejected("set_budget", department, fiscal_year, err))?;

        self.store.insert(BudgetKey::new(department, fiscal_year), amount);

        info!(department, fiscal_year, amount, "Budget set");
        Ok(())
    }

    /// Returns the budget for a department and fiscal year, or 0 if none
    /// was ever set.
    pub fn get_budget(&self, department: &str, fiscal_year: i32) -> i64 {
        let amount = self
            .store
            .get(&BudgetKey::new(department, fiscal_year))
            .map_or(0, |record| record.amount);

        debug!(department, fiscal_year, amount, "Budget read");
        amount
    }

    /// Replaces the amount of an existing budget.
    ///
    /// Checks run in order: caller must be the authority, the amount must be
    /// positive, then a budget must already exist for the key.
    pub fn update_budget(
        &self,
        caller: &Principal,
        department: &str,
        fiscal_year: i32,
        new_amount: i64,
    ) -> Result<(), LedgerError> {
        self.authorize(caller)
            .and_then(|()| validate_amount(new_amount))
            .inspect_err(|err| log_rejected("update_budget", department, fiscal_year, err))?;

        let key = BudgetKey::new(department, fiscal_year);
        if self.store.replace_existing(&key, new_amount).is_none() {
            let err = LedgerError::NotFound {
                department: key.department,
                fiscal_year,
            };
            log_rejected("update_budget", department, fiscal_year, &err);
            return Err(err);
        }

        info!(department, fiscal_year, amount = new_amount, "Budget updated");
        Ok(())
    }

    /// Returns true if a budget exists for the department and fiscal year.
    pub fn has_budget(&self, department: &str, fiscal_year: i32) -> bool {
        self.store
            .get(&BudgetKey::new(department, fiscal_year))
            .is_some()
    }

    /// Snapshot of every stored budget, ordered by department then year.
    pub fn budgets(&self) -> Vec<BudgetRecord> {
        self.store.records()
    }

    fn authorize(&self, caller: &Principal) -> Result<(), LedgerError> {
        if *caller == self.authority {
            Ok(())
        } else {
            Err(LedgerError::Unauthorized {
                caller: caller.clone(),
            })
        }
    }
}

fn validate_amount(amount: i64) -> Result<(), LedgerError> {
    if amount > 0 {
        Ok(())
    } else {
        Err(LedgerError::InvalidAmount(amount))
    }
}

fn log_rejected(operation: &str, department: &str, fiscal_year: i32, err: &LedgerError) {
    warn!(
        operation,
        department,
        fiscal_year,
        code = err.code(),
        error = %err,
        "Budget write rejected"
    );
}
