//! demoflow-dbt - dbt client for demoflow
//!
//! Wraps the `dbt` CLI behind an async trait so the orchestrator can be
//! exercised against a recording double in tests while production runs
//! spawn the real tool.

pub mod error;
pub mod runner;
pub mod traits;

pub use error::{DbtError, DbtResult};
pub use runner::DbtRunner;
pub use traits::{DbtClient, Vars};
