//! dbt client trait definition

use async_trait::async_trait;

use crate::error::DbtResult;

/// String-keyed variable map serialized into `--vars` / `--args` JSON
pub type Vars = serde_json::Map<String, serde_json::Value>;

/// dbt invocation abstraction for demoflow
///
/// Each method returns `Ok(true)` on success and `Ok(false)` when the
/// step failed but the client is configured not to raise.
/// Implementations must be Send + Sync for async operation.
#[async_trait]
pub trait DbtClient: Send + Sync {
    /// `dbt seed --select <select>`
    async fn seed(&self, select: &str) -> DbtResult<bool>;

    /// `dbt run [--vars <json>]`
    async fn run(&self, vars: Option<&Vars>) -> DbtResult<bool>;

    /// `dbt test [--vars <json>]`
    async fn test(&self, vars: Option<&Vars>) -> DbtResult<bool>;

    /// `dbt run-operation <macro_name> [--args <json>]`
    async fn run_operation(&self, macro_name: &str, args: Option<&Vars>) -> DbtResult<bool>;
}
