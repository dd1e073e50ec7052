//! gotask Core Library
//!
//! This is the core library for the gotask task runner. It defines the fixed
//! set of targets a Go module is checked with, resolves a target into the
//! external commands it runs and executes them one at a time, stopping at the
//! first command that fails.
//!
//! ## Architecture
//!
//! - [`workspace_manager`] - High-level interface used by the CLI
//! - [`targets`] - The target set and the commands behind each target
//! - [`plan`] - Flattening a target and its dependencies into ordered steps
//! - [`execution`] - Step executors and the sequential runner
//! - [`configs`] - Optional workspace configuration
//! - [`results`] - Result types for manager operations
//! - [`types`] - Error type and result alias
//!
//! ## Usage
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
//! manager.run_target("all").await?;
//! # Ok(())
//! # }
//! ```

pub mod configs;
pub mod execution;
pub mod plan;
pub mod results;
pub mod targets;
pub mod tasks;
pub mod types;
pub mod workspace_manager;

// Re-export the main types for easier usage
pub use targets::{Step, Target, COVERAGE_PROFILE};
pub use types::{GotaskError, GotaskResult};
pub use workspace_manager::{WorkspaceManager, WorkspaceManagerConfig};
