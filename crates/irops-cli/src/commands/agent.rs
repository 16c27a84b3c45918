use anyhow::{bail, Result};
use colored::Colorize;
use irops_warehouse::agent::{register_agent, AgentSpec};
use irops_warehouse::ConnectionCache;

/// Creates the assistant agent in the warehouse and prints its description.
///
/// Registration is administrative, so unlike the dashboard there is no
/// fallback: without a connection this command fails.
pub async fn register() -> Result<()> {
    let cache = ConnectionCache::from_env();
    let Some(gateway) = cache.get().await else {
        bail!(
            "no warehouse connection; set IROPS_ACCOUNT/IROPS_TOKEN or configure \
             ~/.config/irops/connections.toml"
        );
    };

    let spec = AgentSpec::irops_assistant();
    let description = register_agent(gateway.as_ref(), &spec).await?;

    println!("{}", "Agent registered successfully!".bright_green());

    if let Some(row) = description.rows().first() {
        for (name, cell) in description.columns().iter().zip(row) {
            println!("  {}: {}", name.bright_black(), cell.render());
        }
    }

    Ok(())
}
