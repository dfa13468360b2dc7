//! Core traits defined in `guardrail-core` and implemented by other crates.

pub mod identity;

pub use identity::{IdentityClient, IdentityServiceError};
