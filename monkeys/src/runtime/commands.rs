use serde::Serialize;

use crate::{id::MonkeyId, keys::KeyLayout, types::MonkeyFields};

/// One atomic mutation, executed by a single Lua script.
#[derive(Debug, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MutationCommand {
    CreateMonkey(MonkeyCreate),
    UpdateMonkey(MonkeyUpdate),
    DeleteMonkeys(MonkeyDelete),
    ReplaceFriends(FriendSetReplace),
    SetBestFriend(BestFriendSet),
}

impl MutationCommand {
    pub fn name(&self) -> &'static str {
        match self {
            Self::CreateMonkey(_) => "create_monkey",
            Self::UpdateMonkey(_) => "update_monkey",
            Self::DeleteMonkeys(_) => "delete_monkeys",
            Self::ReplaceFriends(_) => "replace_friends",
            Self::SetBestFriend(_) => "set_best_friend",
        }
    }
}

/// Insert a monkey, allocating its id from the sequence.
#[derive(Debug, Serialize)]
pub struct MonkeyCreate {
    pub keys: KeyLayout,
    pub fields: MonkeyFields,
}

/// Overwrite a monkey's fields, keeping its edges.
#[derive(Debug, Serialize)]
pub struct MonkeyUpdate {
    pub keys: KeyLayout,
    pub monkey_id: MonkeyId,
    pub fields: MonkeyFields,
}

/// Remove monkeys by name together with every edge touching them.
#[derive(Debug, Serialize)]
pub struct MonkeyDelete {
    pub keys: KeyLayout,
    pub names: Vec<String>,
}

/// Replace the owner's friend set with unflagged edges to `target_names`.
#[derive(Debug, Serialize)]
pub struct FriendSetReplace {
    pub keys: KeyLayout,
    pub owner_id: MonkeyId,
    pub target_names: Vec<String>,
}

/// Flag the owner's edge to `target_name` as best, creating it if needed.
#[derive(Debug, Serialize)]
pub struct BestFriendSet {
    pub keys: KeyLayout,
    pub owner_id: MonkeyId,
    pub target_name: String,
}

/// Exactly one command; a plan never spans more than one script call.
#[derive(Debug, Serialize)]
pub struct MutationPlan {
    command: MutationCommand,
}

impl MutationPlan {
    pub fn single(command: MutationCommand) -> Self {
        Self { command }
    }

    pub fn command(&self) -> &MutationCommand {
        &self.command
    }
}

/// Drops repeated names while keeping first-seen order.
pub fn dedup_names<I, S>(names: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut seen = std::collections::HashSet::new();
    let mut unique = Vec::new();
    for name in names {
        let name = name.into();
        if seen.insert(name.clone()) {
            unique.push(name);
        }
    }
    unique
}
