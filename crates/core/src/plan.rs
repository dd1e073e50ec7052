use serde::Serialize;

use crate::configs::{LintConfig, ToolsConfig};
use crate::targets::{Step, Target};

/// A step together with the target it belongs to
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlannedStep {
    pub target: Target,
    pub step: Step,
}

/// Flattened, ordered list of every step a target runs
#[derive(Debug, Clone, Serialize)]
pub struct ExecutionPlan {
    pub target: Target,
    pub steps: Vec<PlannedStep>,
}

impl ExecutionPlan {
    /// Distinct targets in the order they execute
    pub fn targets(&self) -> Vec<Target> {
        let mut targets: Vec<Target> = Vec::new();
        for planned in &self.steps {
            if targets.last() != Some(&planned.target) {
                targets.push(planned.target);
            }
        }
        targets
    }
}

/// Resolve a target into the steps it runs: dependencies first, depth-first in
/// declared order, each target at most once, then the target's own steps
pub fn resolve_execution_plan(
    target: Target,
    tools: &ToolsConfig,
    lint: &LintConfig,
) -> ExecutionPlan {
    let mut visited = Vec::new();
    let mut steps = Vec::new();
    collect_steps(target, tools, lint, &mut visited, &mut steps);
    ExecutionPlan { target, steps }
}

fn collect_steps(
    target: Target,
    tools: &ToolsConfig,
    lint: &LintConfig,
    visited: &mut Vec<Target>,
    steps: &mut Vec<PlannedStep>,
) {
    if visited.contains(&target) {
        return;
    }
    visited.push(target);

    for dependency in target.dependencies() {
        collect_steps(*dependency, tools, lint, visited, steps);
    }

    steps.extend(
        target
            .steps(tools, lint)
            .into_iter()
            .map(|step| PlannedStep { target, step }),
    );
}
