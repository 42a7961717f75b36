use redis::Script;
use std::sync::LazyLock;

pub const MONKEY_CREATE_SCRIPT_BODY: &str = include_str!("../../lua/monkey_create.lua");
pub const MONKEY_UPDATE_SCRIPT_BODY: &str = include_str!("../../lua/monkey_update.lua");
pub const MONKEY_DELETE_SCRIPT_BODY: &str = include_str!("../../lua/monkey_delete.lua");
pub const FRIENDS_REPLACE_SCRIPT_BODY: &str = include_str!("../../lua/friends_replace.lua");
pub const BEST_FRIEND_SCRIPT_BODY: &str = include_str!("../../lua/best_friend_set.lua");

pub static MONKEY_CREATE_SCRIPT: LazyLock<Script> = LazyLock::new(|| Script::new(MONKEY_CREATE_SCRIPT_BODY));
pub static MONKEY_UPDATE_SCRIPT: LazyLock<Script> = LazyLock::new(|| Script::new(MONKEY_UPDATE_SCRIPT_BODY));
pub static MONKEY_DELETE_SCRIPT: LazyLock<Script> = LazyLock::new(|| Script::new(MONKEY_DELETE_SCRIPT_BODY));
pub static FRIENDS_REPLACE_SCRIPT: LazyLock<Script> = LazyLock::new(|| Script::new(FRIENDS_REPLACE_SCRIPT_BODY));
pub static BEST_FRIEND_SCRIPT: LazyLock<Script> = LazyLock::new(|| Script::new(BEST_FRIEND_SCRIPT_BODY));
