//! Budget storage.
//!
//! The ledger owns its table through the [`BudgetStore`] trait so each
//! ledger instance gets an isolated table injected at construction.

use chrono::Utc;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;

use super::types::{BudgetKey, BudgetRecord};

/// Table of budgets keyed by department and fiscal year.
///
/// Implementations must make each method atomic with respect to the key it
/// touches; the ledger relies on this for [`BudgetStore::replace_existing`].
pub trait BudgetStore: Send + Sync {
    /// Returns the record for `key`, if any.
    fn get(&self, key: &BudgetKey) -> Option<BudgetRecord>;

    /// Stores `amount` under `key`, overwriting any existing amount.
    fn insert(&self, key: BudgetKey, amount: i64) -> BudgetRecord;

    /// Overwrites the amount under `key` only if a record already exists.
    ///
    /// Returns `None` without modifying the table when the key is absent.
    fn replace_existing(&self, key: &BudgetKey, amount: i64) -> Option<BudgetRecord>;

    /// Number of stored budgets.
    fn len(&self) -> usize;

    /// Returns true if no budgets are stored.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Snapshot of all records ordered by department, then fiscal year.
    fn records(&self) -> Vec<BudgetRecord>;
}

/// In-memory budget table backed by a concurrent map.
#[derive(Debug, Default)]
pub struct InMemoryBudgetStore {
    table: DashMap<BudgetKey, BudgetRecord>,
}

impl InMemoryBudgetStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl BudgetStore for InMemoryBudgetStore {
    fn get(&self, key: &BudgetKey) -> Option<BudgetRecord> {
        self.table.get(key).map(|record| record.value().clone())
    }

    fn insert(&self, key: BudgetKey, amount: i64) -> BudgetRecord {
        let now = Utc::now();
        match self.table.entry(key) {
            Entry::Occupied(mut entry) => {
                let record = entry.get_mut();
                record.amount = amount;
                record.updated_at = now;
                record.clone()
            }
            Entry::Vacant(entry) => {
                let record = BudgetRecord::new(entry.key().clone(), amount, now);
                entry.insert(record.clone());
                record
            }
        }
    }

    fn replace_existing(&self, key: &BudgetKey, amount: i64) -> Option<BudgetRecord> {
        self.table.get_mut(key).map(|mut record| {
            record.amount = amount;
            record.updated_at = Utc::now();
            record.value().clone()
        })
    }

    fn len(&self) -> usize {
        self.table.len()
    }

    fn records(&self) -> Vec<BudgetRecord> {
        let mut records: Vec<_> = self
            .table
            .iter()
            .map(|entry| entry.value().clone())
            .collect();
        records.sort_by(|a, b| {
            a.department
                .cmp(&b.department)
                .then(a.fiscal_year.cmp(&b.fiscal_year))
        });
        records
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_store() {
        let store = InMemoryBudgetStore::new();
        assert!(store.is_empty());
        assert!(store.get(&BudgetKey::new("Education", 2023)).is_none());
        assert!(store.records().is_empty());
    }

    #[test]
    fn test_insert_overwrites_and_keeps_created_at() {
        let store = InMemoryBudgetStore::new();
        let key = BudgetKey::new("Education", 2023);

        let first = store.insert(key.clone(), 1_000_000);
        let second = store.insert(key.clone(), 1_200_000);

        assert_eq!(store.len(), 1);
        assert_eq!(second.amount, 1_200_000);
        assert_eq!(second.created_at, first.created_at);
        assert!(second.updated_at >= first.updated_at);
        assert_eq!(store.get(&key).map(|r| r.amount), Some(1_200_000));
    }

    #[test]
    fn test_replace_existing_requires_record() {
        let store = InMemoryBudgetStore::new();
        let key = BudgetKey::new("NonExistent", 2023);

        assert!(store.replace_existing(&key, 500).is_none());
        assert!(store.is_empty());

        store.insert(key.clone(), 100);
        let replaced = store.replace_existing(&key, 500).unwrap();
        assert_eq!(replaced.amount, 500);
        assert_eq!(store.get(&key).unwrap().amount, 500);
    }

    #[test]
    fn test_records_sorted_by_key() {
        let store = InMemoryBudgetStore::new();
        store.insert(BudgetKey::new("Healthcare", 2023), 2_000_000);
        store.insert(BudgetKey::new("Education", 2024), 1_500_000);
        store.insert(BudgetKey::new("Education", 2023), 1_000_000);

        let keys: Vec<_> = store.records().iter().map(BudgetRecord::key).collect();
        assert_eq!(
            keys,
            vec![
                BudgetKey::new("Education", 2023),
                BudgetKey::new("Education", 2024),
                BudgetKey::new("Healthcare", 2023),
            ]
        );
    }
}
