//! Execution service backed by an external command.
//!
//! The command is run once per batch with the queries appended to its
//! arguments. It must print a JSON array of `{"query", "count", "unread"}`
//! objects on standard output.

use tokio::process::Command;
use tracing::debug;

use super::{ExecutionService, ServiceError};
use crate::config::CommandConfig;
use crate::results::LiveResult;

/// Runs searches through an external program.
#[derive(Debug, Clone)]
pub struct CommandService {
    program: String,
    args: Vec<String>,
    latest: Vec<LiveResult>,
}

impl CommandService {
    /// Creates a service running `program` with the leading `args`.
    #[must_use]
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
            latest: Vec::new(),
        }
    }

    /// Creates a service from configuration.
    #[must_use]
    pub fn from_config(config: &CommandConfig) -> Self {
        Self::new(config.program.clone(), config.args.clone())
    }
}

impl ExecutionService for CommandService {
    fn live_results(&self) -> &[LiveResult] {
        &self.latest
    }

    async fn submit(&mut self, queries: Vec<String>) -> Result<(), ServiceError> {
        debug!(program = %self.program, queries = queries.len(), "Running search command");

        let output = Command::new(&self.program)
            .args(&self.args)
            .args(&queries)
            .kill_on_drop(true)
            .output()
            .await
            .map_err(ServiceError::Spawn)?;

        if !output.status.success() {
            return Err(ServiceError::Exit {
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        self.latest = serde_json::from_slice(&output.stdout)?;
        debug!(results = self.latest.len(), "Search command finished");
        Ok(())
    }
}
