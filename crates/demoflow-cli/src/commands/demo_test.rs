use super::*;
use crate::commands::test_support::{CallKind, RecordingClient};
use demoflow_dbt::Vars;

#[tokio::test]
async fn test_single_pass_sequence() {
    let runner = RecordingClient::new();

    run_demo(&runner).await.unwrap();

    assert_eq!(
        runner.kinds(),
        vec![
            "seed:ads",
            "seed:sessions",
            "run-operation:jaffle_shop_online.clear_tests",
            "seed:training",
            "run",
            "test",
            "seed:validation",
            "run",
            "test",
        ]
    );
}

#[tokio::test]
async fn test_only_validation_run_carries_vars() {
    let runner = RecordingClient::new();

    run_demo(&runner).await.unwrap();

    let run_vars: Vec<Option<Vars>> = runner
        .calls()
        .iter()
        .filter_map(|call| match &call.kind {
            CallKind::Run(vars) => Some(vars.clone()),
            _ => None,
        })
        .collect();

    assert_eq!(run_vars.len(), 2);
    assert!(run_vars[0].is_none());

    let validation_vars = run_vars[1].as_ref().unwrap();
    assert_eq!(validation_vars.len(), 1);
    assert_eq!(validation_vars["validation"], true);

    // Tests run without vars in the single-pass demo
    let test_vars: Vec<Option<Vars>> = runner
        .calls()
        .iter()
        .filter_map(|call| match &call.kind {
            CallKind::Test(vars) => Some(vars.clone()),
            _ => None,
        })
        .collect();
    assert!(test_vars.iter().all(Option::is_none));
}
