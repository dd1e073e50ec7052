use anyhow::Result;
use colored::*;
use gotask_core::tasks::get_target_color;
use gotask_core::workspace_manager::WorkspaceManager;
use gotask_core::Target;

pub fn execute(manager: &WorkspaceManager, json: bool) -> Result<()> {
    let result = manager.list_targets();

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    let heading = match &result.workspace_name {
        Some(name) => format!("Targets ({})", name),
        None => "Targets".to_string(),
    };
    println!("{}", heading.bold().underline());

    for (target, info) in Target::ALL_TARGETS.iter().zip(&result.targets) {
        println!(
            "{} {}",
            info.name.color(get_target_color(*target)).bold(),
            info.description.dimmed()
        );
        if !info.dependencies.is_empty() {
            println!("  {} {}", "runs:".bright_black(), info.dependencies.join(" → "));
        }
        for command in &info.commands {
            println!("  {} {}", "$".bright_black(), command);
        }
    }

    Ok(())
}
