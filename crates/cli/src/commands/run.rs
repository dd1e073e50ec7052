use anyhow::{Context, Result};
use colored::*;
use gotask_core::workspace_manager::WorkspaceManager;

pub async fn execute(manager: &WorkspaceManager, target: &str) -> Result<()> {
    println!(
        "{} {} {}",
        "Running target".bold(),
        target.cyan(),
        format!("in {}", manager.root().display()).bright_black()
    );

    let report = manager
        .run_target(target)
        .await
        .with_context(|| format!("Failed to run target '{}'", target))?;

    println!();
    println!(
        "{} {}",
        "✓".green().bold(),
        format!(
            "All targets completed successfully! ({} steps)",
            report.steps_run
        )
        .green()
        .bold()
    );

    Ok(())
}
