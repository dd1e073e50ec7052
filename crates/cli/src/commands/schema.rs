use anyhow::Result;
use gotask_core::configs::workspace_config_schema;

pub fn execute() -> Result<()> {
    println!("{}", workspace_config_schema()?);
    Ok(())
}
