//! Shared types, errors, and configuration for Budgetary.
//!
//! This crate provides common types used across all other crates:
//! - Caller identities (`Principal`)
//! - Application-wide error types
//! - Configuration management

pub mod config;
pub mod error;
pub mod types;

pub use self::config::{AppConfig, InitialBudget, LedgerConfig};
pub use error::{AppError, AppResult};
pub use types::Principal;
