//! Monkey records and their mutual friendships, stored in Redis.
//!
//! Every mutation is a single Lua script, so an operation is either applied
//! completely or not at all. Reads return typed records and the values derived
//! from friend edges (`lenfriends`, `best_friend_name`).

pub mod client;
pub mod config;
pub mod errors;
pub mod id;
pub mod keys;
pub mod repository;
pub mod runtime;
pub mod seed;
pub mod types;
pub mod validators;

pub use client::Client;
pub use config::MonkeysConfig;
pub use errors::*;
pub use id::{FriendId, MonkeyId};
pub use repository::{BestFriendOutcome, DeleteSummary, MonkeyRepo};
pub use runtime::{MutationExecutor, RedisExecutor};
pub use types::{FriendEdge, FriendView, Monkey, MonkeyFields, MonkeyProfile};

// Re-export redis types so users don't need to depend on a specific redis version
pub use redis;
pub use redis::aio::ConnectionManager;

/// Delete all keys matching a pattern (for test cleanup).
///
/// This performs a SCAN + DEL operation to safely delete keys without blocking Redis.
pub async fn cleanup_pattern(conn: &mut ConnectionManager, pattern: &str) -> Result<u64, RepoError> {
    const SCAN_COUNT: usize = 1000;
    let mut cursor: u64 = 0;
    let mut total_deleted: u64 = 0;

    loop {
        let (next_cursor, keys): (u64, Vec<String>) = redis::cmd("SCAN")
            .arg(cursor)
            .arg("MATCH")
            .arg(pattern)
            .arg("COUNT")
            .arg(SCAN_COUNT)
            .query_async(conn)
            .await?;

        if !keys.is_empty() {
            let deleted: u64 = redis::cmd("DEL").arg(&keys).query_async(conn).await?;
            total_deleted += deleted;
        }

        cursor = next_cursor;
        if cursor == 0 {
            break;
        }
    }

    log::debug!("removed {total_deleted} key(s) matching {pattern}");
    Ok(total_deleted)
}
