//! # guardrail-service
//!
//! Decision-and-remediation logic for the IAM guardrail.
//!
//! [`classify`] inspects one audit event and decides whether it is a user
//! adding themself to a group. [`MembershipRevoker`] reverses such a change
//! with a single identity-service call. [`GuardrailHandler`] runs both for
//! one delivery and produces an [`InvocationReport`].

pub mod classifier;
pub mod handler;
pub mod report;
pub mod revoker;

#[cfg(test)]
pub(crate) mod testing;

pub use classifier::{classify, classify_envelope};
pub use handler::GuardrailHandler;
pub use report::InvocationReport;
pub use revoker::MembershipRevoker;
