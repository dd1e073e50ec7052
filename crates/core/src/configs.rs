//! Configuration parsing
//!
//! gotask works without any configuration file. When `.gotask/workspace.yml`
//! exists it can override the external tool programs, point the linter at a
//! configuration file and add environment variables for every step.

pub mod workspace;

pub use workspace::{
    load_workspace_config, parse_workspace_config, workspace_config_schema, LintConfig,
    ToolsConfig, WorkspaceConfig,
};
