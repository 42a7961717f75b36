use anyhow::Result;
use monkeys::Client;

use crate::examples::ExampleGroup;
use crate::output::OutputManager;
use crate::theme::ICONS;

pub const FRIENDS_EXAMPLES: &[ExampleGroup] = &[ExampleGroup {
    title: "Friends",
    commands: &[
        "monkeys friends veeti admin guest     # veeti's friends become admin and guest",
        "monkeys friends veeti                 # veeti has no friends afterwards",
    ],
}];

pub const BEST_FRIEND_EXAMPLES: &[ExampleGroup] = &[ExampleGroup {
    title: "Best friend",
    commands: &["monkeys best-friend veeti admin      # Befriends admin first when needed"],
}];

pub async fn replace(client: &mut Client, name: &str, targets: Vec<String>, output: &OutputManager) -> Result<()> {
    let id = client.id_of(name).await?;
    let lenfriends = client.friend2(id, targets).await?;
    output.success(&format!("{name} now has {lenfriends} friend(s)"));

    let profile = client.profile(id).await?;
    for friend in &profile.friend_names {
        output.info(&format!("{} {friend}", ICONS.bullet));
    }
    Ok(())
}

pub async fn best_friend(client: &mut Client, name: &str, target: &str, output: &OutputManager) -> Result<()> {
    let id = client.id_of(name).await?;
    let outcome = client.best_friend2(id, target).await?;
    if outcome.created {
        output.warning(&format!("{name} and {target} were not friends yet; they are now"));
    }
    output.success(&format!("{} {target} is now {name}'s best friend", ICONS.star));
    Ok(())
}
