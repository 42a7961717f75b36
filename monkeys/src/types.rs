use serde::{Deserialize, Serialize};

use crate::{
    errors::ValidationResult,
    id::{FriendId, MonkeyId},
    validators::validate_monkey_fields,
};

/// Stored monkey record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Monkey {
    pub id: MonkeyId,
    pub name: String,
    pub age: u32,
    pub email: String,
}

/// Directed friend edge owned by `owner_id` and pointing at `to_monkey_id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FriendEdge {
    pub id: FriendId,
    pub owner_id: MonkeyId,
    pub to_monkey_id: MonkeyId,
    #[serde(default)]
    pub is_best: bool,
}

/// Field values for creating or editing a monkey.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonkeyFields {
    pub name: String,
    pub age: u32,
    pub email: String,
}

impl MonkeyFields {
    pub fn new(name: impl Into<String>, age: u32, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            age,
            email: email.into(),
        }
    }

    /// Trims surrounding whitespace and checks every field.
    pub fn validated(self) -> ValidationResult<Self> {
        let fields = Self {
            name: self.name.trim().to_string(),
            age: self.age,
            email: self.email.trim().to_string(),
        };
        validate_monkey_fields(&fields)?;
        Ok(fields)
    }
}

/// A monkey together with the values derived from its friend edges.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonkeyProfile {
    pub monkey: Monkey,
    pub lenfriends: u64,
    pub best_friend_name: Option<String>,
    /// Names of the monkeys this one points at, sorted.
    pub friend_names: Vec<String>,
}

/// A friend edge with both endpoints resolved to names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FriendView {
    pub id: FriendId,
    pub name: String,
    pub to_monkey: String,
    pub is_best: bool,
}
