//! Recording dbt client used by command tests

use std::path::PathBuf;
use std::sync::Mutex;

use async_trait::async_trait;
use demoflow_dbt::{DbtClient, DbtResult, Vars};

/// One recorded dbt invocation
#[derive(Debug, Clone)]
pub(crate) enum CallKind {
    Seed(String),
    Run(Option<Vars>),
    Test(Option<Vars>),
    RunOperation(String, Option<Vars>),
}

#[derive(Debug, Clone)]
pub(crate) struct Call {
    pub kind: CallKind,
    /// Contents of the watched file at call time, when watching
    pub watched: Option<String>,
}

/// Records every invocation in order; optionally snapshots one file's
/// contents at each call so tests can assert on seed-time state.
pub(crate) struct RecordingClient {
    calls: Mutex<Vec<Call>>,
    watch: Option<PathBuf>,
}

impl RecordingClient {
    pub fn new() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            watch: None,
        }
    }

    pub fn watching(path: PathBuf) -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            watch: Some(path),
        }
    }

    fn record(&self, kind: CallKind) {
        let watched = self
            .watch
            .as_ref()
            .map(|p| std::fs::read_to_string(p).unwrap_or_default());
        self.calls.lock().unwrap().push(Call { kind, watched });
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    /// Compact labels for sequence assertions
    pub fn kinds(&self) -> Vec<String> {
        self.calls()
            .iter()
            .map(|call| match &call.kind {
                CallKind::Seed(select) => format!("seed:{select}"),
                CallKind::Run(_) => "run".to_string(),
                CallKind::Test(_) => "test".to_string(),
                CallKind::RunOperation(name, _) => format!("run-operation:{name}"),
            })
            .collect()
    }

    /// Every job id carried by run/test vars, in invocation order
    pub fn job_ids(&self) -> Vec<String> {
        self.calls()
            .iter()
            .filter_map(|call| match &call.kind {
                CallKind::Run(vars) | CallKind::Test(vars) => vars.as_ref(),
                _ => None,
            })
            .filter_map(|vars| vars.get("job_id"))
            .filter_map(|id| id.as_str().map(str::to_string))
            .collect()
    }
}

#[async_trait]
impl DbtClient for RecordingClient {
    async fn seed(&self, select: &str) -> DbtResult<bool> {
        self.record(CallKind::Seed(select.to_string()));
        Ok(true)
    }

    async fn run(&self, vars: Option<&Vars>) -> DbtResult<bool> {
        self.record(CallKind::Run(vars.cloned()));
        Ok(true)
    }

    async fn test(&self, vars: Option<&Vars>) -> DbtResult<bool> {
        self.record(CallKind::Test(vars.cloned()));
        Ok(true)
    }

    async fn run_operation(&self, macro_name: &str, args: Option<&Vars>) -> DbtResult<bool> {
        self.record(CallKind::RunOperation(macro_name.to_string(), args.cloned()));
        Ok(true)
    }
}
