use serde::Serialize;

use crate::id::{FriendId, MonkeyId};

pub const MONKEY_COLLECTION: &str = "monkeys";
pub const FRIEND_COLLECTION: &str = "friends";
pub const FRIEND_RELATION: &str = "friends";

/// Common key-construction helpers.
#[derive(Debug, Clone)]
pub struct KeyContext<'a> {
    pub prefix: &'a str,
    pub service: &'a str,
}

impl<'a> KeyContext<'a> {
    pub fn new(prefix: &'a str, service: &'a str) -> Self {
        Self { prefix, service }
    }

    pub fn base(&self) -> String {
        format!("{}:{}", self.prefix, self.service)
    }

    pub fn monkey(&self, id: MonkeyId) -> String {
        format!("{}:{}:{}", self.base(), MONKEY_COLLECTION, id)
    }

    pub fn friend(&self, id: FriendId) -> String {
        format!("{}:{}:{}", self.base(), FRIEND_COLLECTION, id)
    }

    pub fn sequence(&self, collection: &str) -> String {
        format!("{}:{}:seq", self.base(), collection)
    }

    pub fn monkey_index(&self) -> String {
        format!("{}:{}:all", self.base(), MONKEY_COLLECTION)
    }

    pub fn unique(&self, collection: &str, field: &str) -> String {
        format!("{}:{}:unique:{}", self.base(), collection, field)
    }

    pub fn relation(&self, alias: &str, left_id: MonkeyId) -> String {
        format!("{}:rel:{}:{}", self.base(), alias, left_id)
    }

    pub fn relation_reverse(&self, alias: &str, right_id: MonkeyId) -> String {
        format!("{}:rel:{}_reverse:{}", self.base(), alias, right_id)
    }

    /// Glob matching every key in this service. Glob metacharacters in the
    /// prefix or service match literally.
    pub fn service_pattern(&self) -> String {
        format!("{}:*", escape_glob(&self.base()))
    }

    /// Key layout handed to the Lua scripts, which derive concrete keys from it.
    pub fn layout(&self) -> KeyLayout {
        let base = self.base();
        KeyLayout {
            monkey_prefix: format!("{base}:{MONKEY_COLLECTION}:"),
            friend_prefix: format!("{base}:{FRIEND_COLLECTION}:"),
            monkey_seq: self.sequence(MONKEY_COLLECTION),
            friend_seq: self.sequence(FRIEND_COLLECTION),
            monkey_index: self.monkey_index(),
            name_index: self.unique(MONKEY_COLLECTION, "name"),
            relation_prefix: format!("{base}:rel:{FRIEND_RELATION}:"),
            reverse_prefix: format!("{base}:rel:{FRIEND_RELATION}_reverse:"),
        }
    }
}

/// Backslash-escapes the characters Redis `MATCH` patterns treat specially.
pub fn escape_glob(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        if matches!(ch, '*' | '?' | '[' | ']' | '\\') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}

/// Serialized key layout; every entry is either a full key or a prefix that
/// gets an id appended.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct KeyLayout {
    pub monkey_prefix: String,
    pub friend_prefix: String,
    pub monkey_seq: String,
    pub friend_seq: String,
    pub monkey_index: String,
    pub name_index: String,
    pub relation_prefix: String,
    pub reverse_prefix: String,
}
