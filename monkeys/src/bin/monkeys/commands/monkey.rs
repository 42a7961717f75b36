use anyhow::{Context, Result};
use clap::Args;
use monkeys::Client;

use crate::examples::ExampleGroup;
use crate::output::OutputManager;

pub const LIST_EXAMPLES: &[ExampleGroup] = &[ExampleGroup {
    title: "Listing",
    commands: &[
        "monkeys list                      # Table of monkeys ordered by name",
        "monkeys list --output json        # Same data as JSON",
    ],
}];

pub const ADD_EXAMPLES: &[ExampleGroup] = &[ExampleGroup {
    title: "Adding",
    commands: &["monkeys add Jack --age 4 --email Jack@gmail.com"],
}];

pub const EDIT_EXAMPLES: &[ExampleGroup] = &[ExampleGroup {
    title: "Editing",
    commands: &[
        "monkeys edit veeti --age 4                  # Change one field",
        "monkeys edit veeti --name vee --age 4       # Rename and change age",
    ],
}];

pub const DELETE_EXAMPLES: &[ExampleGroup] = &[ExampleGroup {
    title: "Deleting",
    commands: &["monkeys delete veeti kukka         # Removes both along with their friendships"],
}];

#[derive(Args)]
pub struct AddArgs {
    /// Unique name of the monkey
    pub name: String,

    /// Age in years
    #[arg(long)]
    pub age: u32,

    /// Contact email
    #[arg(long)]
    pub email: String,
}

#[derive(Args)]
pub struct EditArgs {
    /// Current name of the monkey
    pub name: String,

    /// New name
    #[arg(long = "name", value_name = "NEW_NAME")]
    pub new_name: Option<String>,

    /// New age
    #[arg(long)]
    pub age: Option<u32>,

    /// New email
    #[arg(long)]
    pub email: Option<String>,
}

pub async fn list(client: &mut Client, output: &OutputManager) -> Result<()> {
    let profiles = client.profiles().await?;
    if profiles.is_empty() {
        output.info("No monkeys yet. Run 'monkeys seed' or 'monkeys add' to create some.");
        return Ok(());
    }
    output.display(profiles.as_slice())
}

pub async fn show(client: &mut Client, name: &str, output: &OutputManager) -> Result<()> {
    let id = client.id_of(name).await?;
    let profile = client.profile(id).await?;
    output.display(&profile)
}

pub async fn add(client: &mut Client, args: AddArgs, output: &OutputManager) -> Result<()> {
    let monkey = client
        .add(&args.name, args.age, &args.email)
        .await
        .with_context(|| format!("could not add '{}'", args.name))?;
    output.success(&format!("Added {} (id {})", monkey.name, monkey.id));
    Ok(())
}

pub async fn edit(client: &mut Client, args: EditArgs, output: &OutputManager) -> Result<()> {
    let id = client.id_of(&args.name).await?;
    let current = client
        .monkey(id)
        .await?
        .with_context(|| format!("monkey '{}' disappeared", args.name))?;
    let name = args.new_name.unwrap_or(current.name);
    let age = args.age.unwrap_or(current.age);
    let email = args.email.unwrap_or(current.email);

    let monkey = client
        .edit(id, &name, age, &email)
        .await
        .with_context(|| format!("could not edit '{}'", args.name))?;
    output.success(&format!("Updated {} (id {})", monkey.name, monkey.id));
    output.key_value("age", &monkey.age.to_string());
    output.key_value("email", &monkey.email);
    Ok(())
}

pub async fn delete(client: &mut Client, names: Vec<String>, output: &OutputManager) -> Result<()> {
    let summary = client.delete(names).await?;
    output.success(&format!(
        "Deleted {} monkey(s) and {} friendship edge(s)",
        summary.deleted, summary.removed_edges
    ));
    Ok(())
}
