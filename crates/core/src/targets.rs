//! Target definitions
//!
//! The target set is fixed: five targets that each wrap one or two external
//! Go tool invocations, and `all`, which runs the five in a fixed order.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::configs::{LintConfig, ToolsConfig};
use crate::types::GotaskError;

/// Coverage profile written by the `test` target, relative to the workspace root
pub const COVERAGE_PROFILE: &str = "coverage.out";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Target {
    Fmt,
    Vet,
    Lint,
    Test,
    Build,
    All,
}

impl Target {
    /// Every target, in declaration order
    pub const ALL_TARGETS: [Target; 6] = [
        Target::Fmt,
        Target::Vet,
        Target::Lint,
        Target::Test,
        Target::Build,
        Target::All,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Target::Fmt => "fmt",
            Target::Vet => "vet",
            Target::Lint => "lint",
            Target::Test => "test",
            Target::Build => "build",
            Target::All => "all",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Target::Fmt => "Rewrite source formatting and import order in place",
            Target::Vet => "Run static correctness analysis",
            Target::Lint => "Run the aggregate linter",
            Target::Test => "Run tests with race detection and a coverage profile",
            Target::Build => "Compile all packages",
            Target::All => "Run fmt, vet, lint, test and build in order",
        }
    }

    /// Targets that run before this one, in order
    pub fn dependencies(self) -> &'static [Target] {
        match self {
            Target::All => &[
                Target::Fmt,
                Target::Vet,
                Target::Lint,
                Target::Test,
                Target::Build,
            ],
            _ => &[],
        }
    }

    /// External commands this target runs itself, excluding its dependencies
    pub fn steps(self, tools: &ToolsConfig, lint: &LintConfig) -> Vec<Step> {
        match self {
            Target::Fmt => vec![
                Step::new(&tools.gofmt, ["-w", "."]),
                Step::new(&tools.goimports, ["-w", "."]),
            ],
            Target::Vet => vec![Step::new(&tools.go, ["vet", "./..."])],
            Target::Lint => {
                let mut step = Step::new(&tools.golangci_lint, ["run"]);
                if let Some(config) = &lint.config {
                    step.args.push("--config".to_string());
                    step.args.push(config.clone());
                }
                vec![step]
            }
            Target::Test => {
                let coverage = format!("-coverprofile={}", COVERAGE_PROFILE);
                vec![Step::new(
                    &tools.go,
                    ["test", "-v", "-race", coverage.as_str(), "./..."],
                )]
            }
            Target::Build => vec![Step::new(&tools.go, ["build", "./..."])],
            Target::All => Vec::new(),
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Target {
    type Err = GotaskError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Target::ALL_TARGETS
            .into_iter()
            .find(|target| target.name() == s)
            .ok_or_else(|| {
                let valid: Vec<&str> = Target::ALL_TARGETS.iter().map(|t| t.name()).collect();
                GotaskError::Target(format!(
                    "Unknown target '{}' (expected one of: {})",
                    s,
                    valid.join(", ")
                ))
            })
    }
}

/// One external command invocation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Step {
    pub program: String,
    pub args: Vec<String>,
}

impl Step {
    pub fn new<I, S>(program: &str, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.to_string(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}
