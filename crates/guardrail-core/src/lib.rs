//! # guardrail-core
//!
//! Core crate for the IAM guardrail. Contains the audit-event model, the
//! decision and result types, the identity-client trait, configuration
//! schemas, and the unified error system.
//!
//! This crate has **no** internal dependencies on other guardrail crates.

pub mod config;
pub mod error;
pub mod events;
pub mod result;
pub mod traits;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
