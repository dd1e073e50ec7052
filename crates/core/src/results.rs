//! Result types for workspace manager operations
//!
//! This module contains the output structures returned by the
//! [`WorkspaceManager`](crate::workspace_manager::WorkspaceManager), kept apart
//! from presentation so the CLI can render them as text or JSON.

use serde::Serialize;

use crate::targets::Target;

/// Description of one target as it would run in this workspace
#[derive(Debug, Clone, Serialize)]
pub struct TargetInfo {
    pub name: String,
    pub description: String,
    pub dependencies: Vec<String>,
    /// Command lines the target runs itself, excluding dependencies
    pub commands: Vec<String>,
}

/// Result of listing targets
#[derive(Debug, Serialize)]
pub struct TargetListResult {
    pub workspace_name: Option<String>,
    pub targets: Vec<TargetInfo>,
}

/// Outcome of a successful run
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub target: Target,
    /// Targets that finished, in execution order
    pub completed: Vec<Target>,
    pub steps_run: usize,
}
