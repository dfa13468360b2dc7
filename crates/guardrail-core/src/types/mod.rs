//! Values produced and consumed within one invocation.

pub mod decision;

pub use decision::{Decision, FailureCause, RevocationResult};
