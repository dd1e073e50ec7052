use anyhow::{Context, Result};
use colored::*;
use gotask_core::tasks::get_target_color;
use gotask_core::workspace_manager::WorkspaceManager;

pub fn execute(manager: &WorkspaceManager, target: &str, json: bool) -> Result<()> {
    let execution_plan = manager
        .get_execution_plan(target)
        .context("Failed to get execution plan")?;

    if json {
        println!("{}", serde_json::to_string_pretty(&execution_plan)?);
        return Ok(());
    }

    println!("{} {}", "Execution plan for".bold(), target.cyan());

    println!("\n{}:", "Execution order".bold());
    for (i, planned) in execution_plan.steps.iter().enumerate() {
        println!(
            "  {}. {} {}",
            i + 1,
            format!("[{}]", planned.target).color(get_target_color(planned.target)),
            planned.step
        );
    }

    Ok(())
}
