use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::types::{GotaskError, GotaskResult};

/// Directory holding gotask configuration, relative to the workspace root
pub const CONFIG_DIR: &str = ".gotask";
/// Workspace configuration file name inside [`CONFIG_DIR`]
pub const CONFIG_FILE: &str = "workspace.yml";

#[derive(Debug, Default, Deserialize, Serialize, JsonSchema, Clone)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct WorkspaceConfig {
    /// Display name of the Go module.
    pub name: Option<String>,
    /// Overrides for the external programs each target invokes.
    #[serde(default)]
    pub tools: ToolsConfig,
    #[serde(default)]
    pub lint: LintConfig,
    /// Extra environment variables set for every step.
    #[serde(default)]
    pub env: BTreeMap<String, String>,
}

#[derive(Debug, Deserialize, Serialize, JsonSchema, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase", deny_unknown_fields, default)]
pub struct ToolsConfig {
    pub go: String,
    pub gofmt: String,
    pub goimports: String,
    pub golangci_lint: String,
}

impl Default for ToolsConfig {
    fn default() -> Self {
        Self {
            go: "go".to_string(),
            gofmt: "gofmt".to_string(),
            goimports: "goimports".to_string(),
            golangci_lint: "golangci-lint".to_string(),
        }
    }
}

impl ToolsConfig {
    fn validate(&self) -> GotaskResult<()> {
        let tools = [
            ("go", &self.go),
            ("gofmt", &self.gofmt),
            ("goimports", &self.goimports),
            ("golangciLint", &self.golangci_lint),
        ];
        for (key, program) in tools {
            if program.trim().is_empty() {
                return Err(GotaskError::Config(format!(
                    "tools.{} must not be empty",
                    key
                )));
            }
        }
        Ok(())
    }
}

#[derive(Debug, Default, Deserialize, Serialize, JsonSchema, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct LintConfig {
    /// Linter configuration file, passed to the linter as `--config <path>`.
    pub config: Option<String>,
}

pub fn parse_workspace_config(yaml_str: &str) -> GotaskResult<WorkspaceConfig> {
    // An empty file deserializes to unit, not to an empty mapping
    if yaml_str.trim().is_empty() {
        return Ok(WorkspaceConfig::default());
    }
    let config: WorkspaceConfig = serde_yaml::from_str(yaml_str)?;
    config.tools.validate()?;
    Ok(config)
}

/// JSON schema of the workspace configuration file, pretty printed
pub fn workspace_config_schema() -> GotaskResult<String> {
    let schema = schemars::schema_for!(WorkspaceConfig);
    serde_json::to_string_pretty(&schema)
        .map_err(|e| GotaskError::Config(format!("Failed to render config schema: {}", e)))
}

/// Default location of the workspace configuration file
pub fn default_config_path(workspace_root: &Path) -> PathBuf {
    workspace_root.join(CONFIG_DIR).join(CONFIG_FILE)
}

/// Load configuration from an explicit path, or from the default location.
///
/// An explicit path must exist. A missing default file yields the defaults.
pub fn load_workspace_config(
    workspace_root: &Path,
    explicit_path: Option<&Path>,
) -> GotaskResult<WorkspaceConfig> {
    let path = match explicit_path {
        Some(path) if path.is_relative() => workspace_root.join(path),
        Some(path) => path.to_path_buf(),
        None => {
            let path = default_config_path(workspace_root);
            if !path.exists() {
                tracing::debug!(path = %path.display(), "no workspace config, using defaults");
                return Ok(WorkspaceConfig::default());
            }
            path
        }
    };

    if !path.exists() {
        return Err(GotaskError::Config(format!(
            "Config file '{}' not found",
            path.display()
        )));
    }

    let content = std::fs::read_to_string(&path)?;
    let config = parse_workspace_config(&content).map_err(|e| {
        GotaskError::Config(format!(
            "Failed to parse workspace config {}: {}",
            path.display(),
            e
        ))
    })?;
    tracing::debug!(path = %path.display(), "loaded workspace config");
    Ok(config)
}
