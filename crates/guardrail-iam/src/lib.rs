//! # guardrail-iam
//!
//! AWS IAM implementation of [`IdentityClient`](guardrail_core::traits::IdentityClient).
//! Credentials come from the standard AWS provider chain.

pub mod client;
pub mod errors;

pub use client::AwsIamClient;
