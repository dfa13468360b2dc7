//! # guardrail-api
//!
//! HTTP ingress for the IAM guardrail built on Axum.
//!
//! The event bus posts one delivery envelope per request to `/api/events`.
//! The response status tells the bus whether to redeliver.

pub mod app;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod router;
pub mod state;

pub use app::{build_app, serve};
pub use state::AppState;
