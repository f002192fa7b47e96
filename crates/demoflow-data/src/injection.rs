//! Synthetic test-result injection
//!
//! After a demo finishes, a handful of curated failures are planted into
//! the demo environment through the separate injection dbt project, so
//! the monitoring UI has interesting history to show. Unlike the demo
//! loop, injection runs against a raising client: a half-injected
//! environment is worse than an aborted one.

use demoflow_dbt::{DbtClient, DbtResult, Vars};
use serde_json::Value;

/// A synthetic test result to plant
#[derive(Debug, Clone)]
pub struct InjectedTest {
    /// Model the test is attached to
    pub model: &'static str,
    /// Test name as it should appear in the environment
    pub test_name: &'static str,
    /// Column under test, when column-scoped
    pub column: Option<&'static str>,
    /// Result status: "fail" or "warn"
    pub status: &'static str,
    /// Number of offending rows to report
    pub failed_rows: u64,
}

impl InjectedTest {
    /// Macro arguments for one `inject_test_result` invocation
    pub fn to_args(&self) -> Vars {
        let mut args = Vars::new();
        args.insert("model".to_string(), Value::from(self.model));
        args.insert("test_name".to_string(), Value::from(self.test_name));
        if let Some(column) = self.column {
            args.insert("column_name".to_string(), Value::from(column));
        }
        args.insert("status".to_string(), Value::from(self.status));
        args.insert("failed_rows".to_string(), Value::from(self.failed_rows));
        args
    }
}

/// The curated failure scenarios for the jaffle_shop_online demo
pub fn demo_test_scenarios() -> Vec<InjectedTest> {
    vec![
        InjectedTest {
            model: "customers",
            test_name: "not_null_customers_email",
            column: Some("email"),
            status: "fail",
            failed_rows: 27,
        },
        InjectedTest {
            model: "orders",
            test_name: "accepted_values_orders_status",
            column: Some("status"),
            status: "fail",
            failed_rows: 14,
        },
        InjectedTest {
            model: "orders",
            test_name: "amount_column_anomalies",
            column: Some("amount"),
            status: "fail",
            failed_rows: 52,
        },
        InjectedTest {
            model: "signups",
            test_name: "unique_signups_id",
            column: Some("id"),
            status: "warn",
            failed_rows: 3,
        },
        InjectedTest {
            model: "sessions",
            test_name: "sessions_freshness_anomalies",
            column: None,
            status: "fail",
            failed_rows: 1,
        },
    ]
}

/// Plant every curated scenario through the injection project.
///
/// The first failed invocation aborts the rest.
pub async fn inject_demo_tests(client: &dyn DbtClient) -> DbtResult<()> {
    let scenarios = demo_test_scenarios();
    log::info!("Injecting {} synthetic test results", scenarios.len());

    for scenario in &scenarios {
        let args = scenario.to_args();
        client.run_operation("inject_test_result", Some(&args)).await?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "injection_test.rs"]
mod tests;
