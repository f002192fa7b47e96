//! Run variables passed to dbt invocations
//!
//! Every seed/run/test cycle hands dbt a `--vars` map identifying the
//! simulated run: the custom start timestamp, the orchestrator name, the
//! job name, and a job id. A fresh job id is minted for every constructed
//! value, so no two invocations ever share an identifier.

use chrono::{DateTime, SecondsFormat, Utc};
use serde_json::{Map, Value};
use uuid::Uuid;

/// Orchestrator name reported in run variables
pub const ORCHESTRATOR: &str = "dbt_cloud";

/// Job name for model-building invocations
pub const JOB_NAME_DATA_LOAD: &str = "jaffle_shop_online_data_load";

/// Job name for test invocations
pub const JOB_NAME_DATA_TEST: &str = "jaffle_shop_online_data_test";

/// Variables for a single dbt invocation
#[derive(Debug, Clone, Default)]
pub struct RunVars {
    /// Simulated "now" for the run, ISO-8601
    pub custom_run_started_at: Option<String>,

    /// Whether the invocation targets the validation models
    pub validation: bool,

    /// Orchestrator name
    pub orchestrator: Option<String>,

    /// Job name
    pub job_name: Option<String>,

    /// Unique id for this invocation
    pub job_id: Option<String>,
}

impl RunVars {
    fn job(run_started_at: DateTime<Utc>, job_name: &str) -> Self {
        Self {
            custom_run_started_at: Some(
                run_started_at.to_rfc3339_opts(SecondsFormat::Micros, true),
            ),
            validation: false,
            orchestrator: Some(ORCHESTRATOR.to_string()),
            job_name: Some(job_name.to_string()),
            job_id: Some(Uuid::new_v4().to_string()),
        }
    }

    /// Variables for a `dbt run` invocation, with a fresh job id
    pub fn data_load(run_started_at: DateTime<Utc>) -> Self {
        Self::job(run_started_at, JOB_NAME_DATA_LOAD)
    }

    /// Variables for a `dbt test` invocation, with a fresh job id
    pub fn data_test(run_started_at: DateTime<Utc>) -> Self {
        Self::job(run_started_at, JOB_NAME_DATA_TEST)
    }

    /// A map carrying only `validation: true` (one-shot demo)
    pub fn validation_only() -> Self {
        Self {
            validation: true,
            ..Self::default()
        }
    }

    /// Mark the invocation as targeting the validation models
    pub fn with_validation(mut self) -> Self {
        self.validation = true;
        self
    }

    /// Build the JSON map handed to dbt via `--vars`.
    ///
    /// Absent fields are omitted entirely; `validation` appears only
    /// when set.
    pub fn to_vars(&self) -> Map<String, Value> {
        let mut vars = Map::new();
        if let Some(ts) = &self.custom_run_started_at {
            vars.insert("custom_run_started_at".to_string(), Value::from(ts.clone()));
        }
        if self.validation {
            vars.insert("validation".to_string(), Value::from(true));
        }
        if let Some(orchestrator) = &self.orchestrator {
            vars.insert("orchestrator".to_string(), Value::from(orchestrator.clone()));
        }
        if let Some(job_name) = &self.job_name {
            vars.insert("job_name".to_string(), Value::from(job_name.clone()));
        }
        if let Some(job_id) = &self.job_id {
            vars.insert("job_id".to_string(), Value::from(job_id.clone()));
        }
        vars
    }
}

#[cfg(test)]
#[path = "vars_test.rs"]
mod tests;
