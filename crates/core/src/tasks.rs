//! Target color management and run helpers
//!
//! Keeps terminal colors for targets consistent between `list`, `plan` and
//! `run` output.

use colored::*;

use crate::execution::command::StepExecutor;
use crate::execution::runner::TaskRunner;
use crate::plan::ExecutionPlan;
use crate::results::RunReport;
use crate::targets::Target;
use crate::types::GotaskResult;

/// Get a consistent color for a target
pub fn get_target_color(target: Target) -> Color {
    // Hash of the name bytes so the palette can grow without reshuffling
    let hash = target
        .name()
        .bytes()
        .fold(0u64, |acc, b| acc.wrapping_mul(31).wrapping_add(b as u64));

    // Jewel tones, away from the red/green used for failure and success lines
    let colors = [
        Color::TrueColor {
            r: 147,
            g: 112,
            b: 219,
        },
        Color::TrueColor {
            r: 64,
            g: 224,
            b: 208,
        },
        Color::TrueColor {
            r: 255,
            g: 140,
            b: 0,
        },
        Color::TrueColor {
            r: 199,
            g: 21,
            b: 133,
        },
        Color::TrueColor {
            r: 72,
            g: 209,
            b: 204,
        },
        Color::TrueColor {
            r: 138,
            g: 43,
            b: 226,
        },
    ];

    colors[(hash % colors.len() as u64) as usize]
}

/// Run a plan to completion with the given executor
pub async fn run_plan<E: StepExecutor>(plan: &ExecutionPlan, executor: E) -> GotaskResult<RunReport> {
    let mut runner = TaskRunner::new(executor);
    runner.run(plan).await
}
