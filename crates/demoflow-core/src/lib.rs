//! demoflow-core - Core library for demoflow
//!
//! This crate provides the shared types used across all demoflow components:
//! project path layout, run-variable construction, the validation branch
//! policy, and seed-file clearing.

pub mod error;
pub mod layout;
pub mod policy;
pub mod seeds;
pub mod vars;

pub use error::{CoreError, CoreResult};
pub use layout::ProjectLayout;
pub use policy::{RandomValidationPolicy, ValidationPolicy};
pub use seeds::{clear_csv, clear_data};
pub use vars::RunVars;
