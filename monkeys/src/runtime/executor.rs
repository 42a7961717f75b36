use std::borrow::Cow;

use log::debug;
use redis::aio::ConnectionLike;
use serde_json::Value;

use crate::{
    errors::RepoError,
    runtime::{
        commands::{MutationCommand, MutationPlan},
        scripts::{
            BEST_FRIEND_SCRIPT, FRIENDS_REPLACE_SCRIPT, MONKEY_CREATE_SCRIPT, MONKEY_DELETE_SCRIPT,
            MONKEY_UPDATE_SCRIPT,
        },
    },
};

/// Runs the plan's command as one script invocation and returns its reply.
pub async fn execute_plan<C>(conn: &mut C, plan: &MutationPlan) -> Result<Value, RepoError>
where
    C: ConnectionLike + Send,
{
    let command = plan.command();
    let script = match command {
        MutationCommand::CreateMonkey(_) => &*MONKEY_CREATE_SCRIPT,
        MutationCommand::UpdateMonkey(_) => &*MONKEY_UPDATE_SCRIPT,
        MutationCommand::DeleteMonkeys(_) => &*MONKEY_DELETE_SCRIPT,
        MutationCommand::ReplaceFriends(_) => &*FRIENDS_REPLACE_SCRIPT,
        MutationCommand::SetBestFriend(_) => &*BEST_FRIEND_SCRIPT,
    };

    let payload = serde_json::to_string(command).map_err(|err| RepoError::Other {
        message: Cow::Owned(format!("failed to serialize command: {err}")),
    })?;
    debug!("executing {} ({} bytes)", command.name(), payload.len());

    let mut invocation = script.prepare_invoke();
    invocation.arg(payload);
    let raw: String = invocation.invoke_async(conn).await.map_err(RepoError::from)?;

    let value: Value = serde_json::from_str(&raw).map_err(|err| RepoError::Other {
        message: Cow::Owned(format!("failed to parse lua response: {err}")),
    })?;

    if let Some(error) = script_error(&value) {
        debug!("{} rejected: {error}", command.name());
        return Err(error);
    }

    Ok(value)
}

/// Maps the `error` member of a script response onto a [`RepoError`].
pub fn script_error(value: &Value) -> Option<RepoError> {
    let error = value.get("error")?;
    let Some(code) = error.as_str() else {
        return Some(RepoError::Other {
            message: Cow::Borrowed("lua_error"),
        });
    };
    let text = |field: &str| {
        value
            .get(field)
            .map(|v| match v {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            })
            .unwrap_or_default()
    };
    let err = match code {
        "entity_not_found" => RepoError::NotFound { entity: text("entity") },
        "unique_constraint_violation" => RepoError::UniqueConstraintViolation {
            field: text("field"),
            value: text("value"),
            existing_id: value.get("existing_id").and_then(|v| v.as_u64()).unwrap_or_default(),
        },
        other => RepoError::Other {
            message: Cow::Owned(other.to_string()),
        },
    };
    Some(err)
}

/// Transaction-scoped handle through which repositories apply mutations.
#[allow(async_fn_in_trait)]
pub trait MutationExecutor {
    async fn execute(&mut self, plan: MutationPlan) -> Result<Value, RepoError>;
}

pub struct RedisExecutor<'a, C>
where
    C: ConnectionLike + Send,
{
    connection: &'a mut C,
}

impl<'a, C> RedisExecutor<'a, C>
where
    C: ConnectionLike + Send,
{
    pub fn new(connection: &'a mut C) -> Self {
        Self { connection }
    }
}

impl<'a, C> MutationExecutor for RedisExecutor<'a, C>
where
    C: ConnectionLike + Send,
{
    async fn execute(&mut self, plan: MutationPlan) -> Result<Value, RepoError> {
        execute_plan(self.connection, &plan).await
    }
}
