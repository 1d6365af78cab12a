//! Core business logic for Budgetary.
//!
//! This crate contains pure business logic with ZERO web or database dependencies.
//!
//! # Modules
//!
//! - `budget` - Authority-gated budget ledger keyed by department and fiscal year

pub mod budget;
