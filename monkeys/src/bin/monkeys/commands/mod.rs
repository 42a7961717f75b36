pub mod friends;
pub mod monkey;
pub mod troop;

use anyhow::{Context, Result};
use clap::Subcommand;
use monkeys::{Client, MonkeysConfig};

use crate::output::OutputManager;

#[derive(Subcommand)]
pub enum Commands {
    /// List every monkey with its friend count and best friend
    List,

    /// Show one monkey and its friends
    Show {
        /// Name of the monkey
        name: String,
    },

    /// Add a new monkey
    Add(monkey::AddArgs),

    /// Edit a monkey's name, age or email
    Edit(monkey::EditArgs),

    /// Delete monkeys by name
    Delete {
        /// Names of the monkeys to delete
        #[arg(required = true)]
        names: Vec<String>,
    },

    /// Replace a monkey's friends
    Friends {
        /// Monkey whose friends are replaced
        name: String,

        /// New friends (none clears the friend set)
        targets: Vec<String>,
    },

    /// Choose a monkey's best friend
    #[command(name = "best-friend")]
    BestFriend {
        /// Monkey choosing a best friend
        name: String,

        /// The new best friend
        target: String,
    },

    /// Populate the store with the sample troop
    Seed(troop::SeedArgs),

    /// Show the resolved configuration
    Config,
}

pub async fn handle_command(command: Commands, config: &MonkeysConfig, output: &OutputManager) -> Result<()> {
    if let Commands::Config = command {
        return troop::show_config(config, output);
    }

    let url = config.redis_url()?;
    let mut client = Client::from_config(config)
        .await
        .with_context(|| format!("failed to connect to {url}"))?;

    match command {
        Commands::List => monkey::list(&mut client, output).await,
        Commands::Show { name } => monkey::show(&mut client, &name, output).await,
        Commands::Add(args) => monkey::add(&mut client, args, output).await,
        Commands::Edit(args) => monkey::edit(&mut client, args, output).await,
        Commands::Delete { names } => monkey::delete(&mut client, names, output).await,
        Commands::Friends { name, targets } => friends::replace(&mut client, &name, targets, output).await,
        Commands::BestFriend { name, target } => friends::best_friend(&mut client, &name, &target, output).await,
        Commands::Seed(args) => troop::seed(&mut client, args, output).await,
        Commands::Config => Ok(()),
    }
}
