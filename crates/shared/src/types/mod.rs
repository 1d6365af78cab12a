//! Common types used across the application.

pub mod principal;

pub use principal::Principal;
