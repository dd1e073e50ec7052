//! Command execution utilities
//!
//! This module provides the [`StepExecutor`] seam between the runner and the
//! operating system, and [`ProcessExecutor`], which spawns real processes.

use std::collections::BTreeMap;
use std::future::Future;
use std::path::{Path, PathBuf};

use tokio::process::Command;

use crate::targets::Step;
use crate::types::{GotaskError, GotaskResult};

/// Exit status of one step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepStatus {
    /// `None` when the process was terminated by a signal
    pub code: Option<i32>,
}

impl StepStatus {
    pub fn from_code(code: i32) -> Self {
        Self { code: Some(code) }
    }

    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

impl From<std::process::ExitStatus> for StepStatus {
    fn from(status: std::process::ExitStatus) -> Self {
        Self {
            code: status.code(),
        }
    }
}

/// Runs a single step and reports how it exited
pub trait StepExecutor {
    fn execute(&self, step: &Step) -> impl Future<Output = GotaskResult<StepStatus>> + Send;
}

/// Executes steps as child processes in the workspace root.
///
/// Standard streams are inherited, so the operator sees each tool's own output.
#[derive(Debug, Clone)]
pub struct ProcessExecutor {
    root: PathBuf,
    env: BTreeMap<String, String>,
}

impl ProcessExecutor {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            env: BTreeMap::new(),
        }
    }

    pub fn with_env(mut self, env: BTreeMap<String, String>) -> Self {
        self.env = env;
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl StepExecutor for ProcessExecutor {
    async fn execute(&self, step: &Step) -> GotaskResult<StepStatus> {
        tracing::debug!(
            program = %step.program,
            args = ?step.args,
            cwd = %self.root.display(),
            "spawning step"
        );

        let status = Command::new(&step.program)
            .args(&step.args)
            .current_dir(&self.root)
            .envs(&self.env)
            .status()
            .await
            .map_err(|source| GotaskError::Spawn {
                program: step.program.clone(),
                source,
            })?;

        Ok(status.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_success() {
        assert!(StepStatus::from_code(0).success());
        assert!(!StepStatus::from_code(1).success());
        assert!(!StepStatus { code: None }.success());
    }

    #[tokio::test]
    async fn test_missing_program_is_a_spawn_error() {
        let dir = tempfile::tempdir().unwrap();
        let executor = ProcessExecutor::new(dir.path());
        let step = Step::new("gotask-definitely-not-installed", ["run"]);

        let err = executor.execute(&step).await.unwrap_err();
        assert!(
            matches!(err, GotaskError::Spawn { ref program, .. } if program == "gotask-definitely-not-installed")
        );
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_process_exit_code_and_env() {
        let dir = tempfile::tempdir().unwrap();
        let mut env = BTreeMap::new();
        env.insert("GOTASK_TEST_CODE".to_string(), "3".to_string());
        let executor = ProcessExecutor::new(dir.path()).with_env(env);

        let status = executor
            .execute(&Step::new("sh", ["-c", "exit $GOTASK_TEST_CODE"]))
            .await
            .unwrap();
        assert_eq!(status, StepStatus::from_code(3));

        let status = executor.execute(&Step::new("true", Vec::<String>::new())).await.unwrap();
        assert!(status.success());
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_steps_run_in_workspace_root() {
        let dir = tempfile::tempdir().unwrap();
        let executor = ProcessExecutor::new(dir.path());

        let status = executor
            .execute(&Step::new("sh", ["-c", "touch marker"]))
            .await
            .unwrap();
        assert!(status.success());
        assert!(dir.path().join("marker").exists());
    }
}
