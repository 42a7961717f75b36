//! Mutation plans and the Lua-backed executor that applies them.

pub mod commands;
pub mod executor;
pub mod scripts;

pub use executor::{MutationExecutor, RedisExecutor, execute_plan};
