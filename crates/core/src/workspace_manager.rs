//! High-level workspace management interface
//!
//! This module provides the [`WorkspaceManager`] which serves as the primary interface
//! for all gotask operations. It loads the optional workspace configuration,
//! resolves target names into execution plans and runs them.
//!
//! ## Example
//!
//! ```rust,no_run
//! use gotask_core::workspace_manager::{WorkspaceManager, WorkspaceManagerConfig};
//! use std::path::PathBuf;
//!
//! # async fn example() -> gotask_core::types::GotaskResult<()> {
//! let manager = WorkspaceManager::new(WorkspaceManagerConfig {
//!     workspace_root: PathBuf::from("."),
//!     config_path: None,
//! })?;
//!
//! // Show what `all` would run
//! let plan = manager.get_execution_plan("all")?;
//!
//! // Run the tests
//! manager.run_target("test").await?;
//! # Ok(())
//! # }
//! ```

use std::path::{Path, PathBuf};

use crate::configs::workspace::{load_workspace_config, WorkspaceConfig};
use crate::execution::command::{ProcessExecutor, StepExecutor};
use crate::plan::{resolve_execution_plan, ExecutionPlan};
use crate::results::{RunReport, TargetInfo, TargetListResult};
use crate::targets::Target;
use crate::tasks::run_plan;
use crate::types::{GotaskError, GotaskResult};

/// High-level manager that encapsulates all workspace operations
pub struct WorkspaceManager {
    pub workspace_root: PathBuf,
    pub workspace_config: WorkspaceConfig,
}

/// Configuration for initializing a workspace manager
pub struct WorkspaceManagerConfig {
    pub workspace_root: PathBuf,
    /// Explicit configuration file; defaults to `.gotask/workspace.yml`
    pub config_path: Option<PathBuf>,
}

impl WorkspaceManager {
    /// Initialize a new workspace manager from the given workspace root
    pub fn new(config: WorkspaceManagerConfig) -> GotaskResult<Self> {
        let workspace_root = config.workspace_root.canonicalize().map_err(|e| {
            GotaskError::Config(format!(
                "Workspace root '{}' is not accessible: {}",
                config.workspace_root.display(),
                e
            ))
        })?;

        if !workspace_root.is_dir() {
            return Err(GotaskError::Config(format!(
                "Workspace root '{}' is not a directory",
                workspace_root.display()
            )));
        }

        let workspace_config =
            load_workspace_config(&workspace_root, config.config_path.as_deref())?;

        Ok(Self {
            workspace_root,
            workspace_config,
        })
    }

    pub fn root(&self) -> &Path {
        &self.workspace_root
    }

    /// List every target with the commands it would run here
    pub fn list_targets(&self) -> TargetListResult {
        let targets = Target::ALL_TARGETS
            .into_iter()
            .map(|target| TargetInfo {
                name: target.name().to_string(),
                description: target.description().to_string(),
                dependencies: target
                    .dependencies()
                    .iter()
                    .map(|d| d.name().to_string())
                    .collect(),
                commands: target
                    .steps(&self.workspace_config.tools, &self.workspace_config.lint)
                    .iter()
                    .map(ToString::to_string)
                    .collect(),
            })
            .collect();

        TargetListResult {
            workspace_name: self.workspace_config.name.clone(),
            targets,
        }
    }

    /// Get the execution plan for a target name
    pub fn get_execution_plan(&self, target: &str) -> GotaskResult<ExecutionPlan> {
        let target: Target = target.parse()?;
        Ok(resolve_execution_plan(
            target,
            &self.workspace_config.tools,
            &self.workspace_config.lint,
        ))
    }

    /// Run a target, spawning the external tools in the workspace root
    pub async fn run_target(&self, target: &str) -> GotaskResult<RunReport> {
        let executor = ProcessExecutor::new(&self.workspace_root)
            .with_env(self.workspace_config.env.clone());
        self.run_target_with(target, executor).await
    }

    /// Run a target with a caller supplied executor
    pub async fn run_target_with<E: StepExecutor>(
        &self,
        target: &str,
        executor: E,
    ) -> GotaskResult<RunReport> {
        // Unknown names are rejected here, before anything is spawned
        let plan = self.get_execution_plan(target)?;
        tracing::debug!(target_name = %plan.target, steps = plan.steps.len(), "resolved plan");
        run_plan(&plan, executor).await
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;
    use crate::configs::workspace::default_config_path;
    use crate::execution::command::StepStatus;
    use crate::targets::Step;

    #[derive(Default)]
    struct CountingExecutor {
        calls: AtomicUsize,
    }

    impl StepExecutor for &CountingExecutor {
        async fn execute(&self, _step: &Step) -> GotaskResult<StepStatus> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(StepStatus::from_code(0))
        }
    }

    fn manager_in(dir: &Path) -> WorkspaceManager {
        WorkspaceManager::new(WorkspaceManagerConfig {
            workspace_root: dir.to_path_buf(),
            config_path: None,
        })
        .unwrap()
    }

    #[test]
    fn test_missing_root_is_a_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = WorkspaceManager::new(WorkspaceManagerConfig {
            workspace_root: dir.path().join("missing"),
            config_path: None,
        });
        assert!(matches!(result, Err(GotaskError::Config(_))));
    }

    #[test]
    fn test_list_targets_uses_configured_tools() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join(".gotask")).unwrap();
        std::fs::write(
            default_config_path(dir.path()),
            "name: demo\ntools:\n  go: go1.22\n",
        )
        .unwrap();

        let result = manager_in(dir.path()).list_targets();
        assert_eq!(result.workspace_name.as_deref(), Some("demo"));
        assert_eq!(result.targets.len(), 6);

        let build = result.targets.iter().find(|t| t.name == "build").unwrap();
        assert_eq!(build.commands, ["go1.22 build ./..."]);

        let all = result.targets.iter().find(|t| t.name == "all").unwrap();
        assert_eq!(all.dependencies, ["fmt", "vet", "lint", "test", "build"]);
        assert!(all.commands.is_empty());
    }

    #[test]
    fn test_unknown_target_plan_fails() {
        let dir = tempfile::tempdir().unwrap();
        let err = manager_in(dir.path()).get_execution_plan("deploy").unwrap_err();
        assert!(matches!(err, GotaskError::Target(_)));
    }

    #[tokio::test]
    async fn test_unknown_target_runs_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let executor = CountingExecutor::default();

        let result = manager_in(dir.path())
            .run_target_with("deploy", &executor)
            .await;

        assert!(result.is_err());
        assert_eq!(executor.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_run_all_with_executor() {
        let dir = tempfile::tempdir().unwrap();
        let executor = CountingExecutor::default();

        let report = manager_in(dir.path())
            .run_target_with("all", &executor)
            .await
            .unwrap();

        assert_eq!(report.target, Target::All);
        assert_eq!(report.steps_run, 6);
        assert_eq!(executor.calls.load(Ordering::SeqCst), 6);
    }
}
