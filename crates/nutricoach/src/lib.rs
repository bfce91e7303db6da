//! Core domain library for the nutrition coaching platform.
//!
//! The `profiles` module owns the patient and nutritionist profile model and
//! the completion scoring engine that drives onboarding and dashboard
//! surfaces. `config`, `telemetry`, and `error` carry the shared service
//! plumbing used by the API binary.

pub mod config;
pub mod error;
pub mod profiles;
pub mod telemetry;
