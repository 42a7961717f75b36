use anyhow::Result;
use clap::Args;
use monkeys::{Client, MonkeysConfig};

use crate::examples::ExampleGroup;
use crate::output::{OutputFormat, OutputManager};

pub const SEED_EXAMPLES: &[ExampleGroup] = &[ExampleGroup {
    title: "Sample data",
    commands: &[
        "monkeys seed                       # Refuses when monkeys already exist",
        "monkeys seed --reset               # Wipe the namespace, then seed",
    ],
}];

#[derive(Args)]
pub struct SeedArgs {
    /// Remove all existing data in the namespace first
    #[arg(long)]
    pub reset: bool,
}

pub async fn seed(client: &mut Client, args: SeedArgs, output: &OutputManager) -> Result<()> {
    if args.reset {
        let removed = client.purge().await?;
        output.info(&format!("Removed {removed} key(s)"));
    } else if client.count().await? > 0 {
        anyhow::bail!("store already contains monkeys; rerun with --reset to replace them");
    }

    let troop = client.seed().await?;
    output.success(&format!("Seeded {} monkeys", troop.len()));
    Ok(())
}

pub fn show_config(config: &MonkeysConfig, output: &OutputManager) -> Result<()> {
    if output.options.output_format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(config)?);
        return Ok(());
    }
    output.key_value("redis.url", &config.redis_url()?);
    output.key_value("store.prefix", &config.store.prefix);
    output.key_value("store.service", &config.store.service);
    Ok(())
}
