//! Typed access to monkeys and their friend edges.
//!
//! Reads go straight to Redis through a [`ConnectionManager`]. Mutations are
//! turned into a [`MutationPlan`] and handed to a [`MutationExecutor`], which
//! applies each command atomically.

mod friends;

use std::borrow::Cow;

use log::info;
use redis::{aio::ConnectionManager, cmd};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::{
    errors::RepoError,
    id::MonkeyId,
    keys::{FRIEND_RELATION, KeyContext, KeyLayout},
    runtime::{
        MutationExecutor,
        commands::{
            BestFriendSet, FriendSetReplace, MonkeyCreate, MonkeyDelete, MonkeyUpdate, MutationCommand,
            MutationPlan, dedup_names,
        },
    },
    types::{Monkey, MonkeyFields},
};

pub const DEFAULT_SERVICE: &str = "troop";

/// Outcome of deleting monkeys by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DeleteSummary {
    pub deleted: u64,
    pub removed_edges: u64,
}

/// Outcome of designating a best friend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BestFriendOutcome {
    pub friend_id: u64,
    /// True when the edge did not exist before the call.
    pub created: bool,
}

#[derive(Debug, Clone)]
pub struct MonkeyRepo {
    prefix: String,
    service: String,
}

impl MonkeyRepo {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self::with_service(prefix, DEFAULT_SERVICE)
    }

    pub fn with_service(prefix: impl Into<String>, service: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            service: service.into(),
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn key_context(&self) -> KeyContext<'_> {
        KeyContext::new(&self.prefix, &self.service)
    }

    pub fn monkey_key(&self, id: MonkeyId) -> String {
        self.key_context().monkey(id)
    }

    pub fn relation_key(&self, owner_id: MonkeyId) -> String {
        self.key_context().relation(FRIEND_RELATION, owner_id)
    }

    pub fn relation_reverse_key(&self, target_id: MonkeyId) -> String {
        self.key_context().relation_reverse(FRIEND_RELATION, target_id)
    }

    /// Glob matching every key this repository writes.
    pub fn service_pattern(&self) -> String {
        self.key_context().service_pattern()
    }

    fn layout(&self) -> KeyLayout {
        self.key_context().layout()
    }

    pub async fn execute<E>(&self, executor: &mut E, plan: MutationPlan) -> Result<Value, RepoError>
    where
        E: MutationExecutor + ?Sized,
    {
        executor.execute(plan).await
    }

    /// Inserts a new monkey and returns its id.
    pub async fn create<E>(&self, executor: &mut E, fields: MonkeyFields) -> Result<MonkeyId, RepoError>
    where
        E: MutationExecutor + ?Sized,
    {
        let fields = fields.validated()?;
        let name = fields.name.clone();
        let plan = MutationPlan::single(MutationCommand::CreateMonkey(MonkeyCreate {
            keys: self.layout(),
            fields,
        }));
        let response = self.execute(executor, plan).await?;
        let id = response_u64(&response, "monkey_id")?;
        info!("created monkey {id} ({name})");
        Ok(id)
    }

    /// Overwrites the fields of an existing monkey.
    pub async fn update<E>(&self, executor: &mut E, id: MonkeyId, fields: MonkeyFields) -> Result<(), RepoError>
    where
        E: MutationExecutor + ?Sized,
    {
        let fields = fields.validated()?;
        let plan = MutationPlan::single(MutationCommand::UpdateMonkey(MonkeyUpdate {
            keys: self.layout(),
            monkey_id: id,
            fields,
        }));
        self.execute(executor, plan).await?;
        info!("updated monkey {id}");
        Ok(())
    }

    /// Deletes the named monkeys and every friend edge touching them.
    ///
    /// Fails with [`RepoError::NotFound`] without deleting anything when a
    /// name is unknown.
    pub async fn delete_by_names<E, I, S>(&self, executor: &mut E, names: I) -> Result<DeleteSummary, RepoError>
    where
        E: MutationExecutor + ?Sized,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names = dedup_names(names);
        if names.is_empty() {
            return Ok(DeleteSummary::default());
        }
        let plan = MutationPlan::single(MutationCommand::DeleteMonkeys(MonkeyDelete {
            keys: self.layout(),
            names: names.clone(),
        }));
        let response = self.execute(executor, plan).await?;
        let summary = DeleteSummary {
            deleted: response_u64(&response, "deleted")?,
            removed_edges: response_u64(&response, "removed_edges")?,
        };
        info!(
            "deleted {} monkey(s) {:?}, {} friend edge(s) removed",
            summary.deleted, names, summary.removed_edges
        );
        Ok(summary)
    }

    /// Replaces the owner's friends with `target_names`; returns the new friend count.
    pub async fn replace_friends<E, I, S>(
        &self,
        executor: &mut E,
        owner_id: MonkeyId,
        target_names: I,
    ) -> Result<u64, RepoError>
    where
        E: MutationExecutor + ?Sized,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let target_names = dedup_names(target_names);
        let plan = MutationPlan::single(MutationCommand::ReplaceFriends(FriendSetReplace {
            keys: self.layout(),
            owner_id,
            target_names,
        }));
        let response = self.execute(executor, plan).await?;
        let lenfriends = response_u64(&response, "lenfriends")?;
        info!("monkey {owner_id} now has {lenfriends} friend(s)");
        Ok(lenfriends)
    }

    /// Makes `target_name` the owner's best friend, befriending it first if needed.
    pub async fn set_best_friend<E>(
        &self,
        executor: &mut E,
        owner_id: MonkeyId,
        target_name: impl Into<String>,
    ) -> Result<BestFriendOutcome, RepoError>
    where
        E: MutationExecutor + ?Sized,
    {
        let target_name = target_name.into();
        let plan = MutationPlan::single(MutationCommand::SetBestFriend(BestFriendSet {
            keys: self.layout(),
            owner_id,
            target_name: target_name.clone(),
        }));
        let response = self.execute(executor, plan).await?;
        let outcome = BestFriendOutcome {
            friend_id: response_u64(&response, "friend_id")?,
            created: response
                .get("created")
                .and_then(Value::as_bool)
                .unwrap_or(false),
        };
        info!("monkey {owner_id} best friend is now {target_name}");
        Ok(outcome)
    }

    pub async fn get(&self, conn: &mut ConnectionManager, id: MonkeyId) -> Result<Option<Monkey>, RepoError> {
        let raw: Option<String> = cmd("GET").arg(self.monkey_key(id)).query_async(conn).await?;
        raw.as_deref().map(decode::<Monkey>).transpose()
    }

    /// Like [`MonkeyRepo::get`] but a missing monkey is an error.
    pub async fn require(&self, conn: &mut ConnectionManager, id: MonkeyId) -> Result<Monkey, RepoError> {
        self.get(conn, id).await?.ok_or_else(|| RepoError::not_found(id))
    }

    pub async fn exists(&self, conn: &mut ConnectionManager, id: MonkeyId) -> Result<bool, RepoError> {
        let exists: i64 = cmd("EXISTS").arg(self.monkey_key(id)).query_async(conn).await?;
        Ok(exists == 1)
    }

    pub async fn id_by_name(&self, conn: &mut ConnectionManager, name: &str) -> Result<Option<MonkeyId>, RepoError> {
        let name_index = self.key_context().unique(crate::keys::MONKEY_COLLECTION, "name");
        let id: Option<MonkeyId> = cmd("HGET").arg(name_index).arg(name).query_async(conn).await?;
        Ok(id)
    }

    pub async fn find_by_name(&self, conn: &mut ConnectionManager, name: &str) -> Result<Option<Monkey>, RepoError> {
        match self.id_by_name(conn, name).await? {
            Some(id) => self.get(conn, id).await,
            None => Ok(None),
        }
    }

    pub async fn count(&self, conn: &mut ConnectionManager) -> Result<u64, RepoError> {
        let count: u64 = cmd("SCARD").arg(self.key_context().monkey_index()).query_async(conn).await?;
        Ok(count)
    }

    /// Every monkey, ordered by name.
    pub async fn all(&self, conn: &mut ConnectionManager) -> Result<Vec<Monkey>, RepoError> {
        let ids: Vec<MonkeyId> = cmd("SMEMBERS").arg(self.key_context().monkey_index()).query_async(conn).await?;
        let keys: Vec<String> = ids.iter().map(|id| self.monkey_key(*id)).collect();
        let mut monkeys: Vec<Monkey> = fetch_documents(conn, &keys).await?;
        monkeys.sort_by(|a, b| a.name.cmp(&b.name).then(a.id.cmp(&b.id)));
        Ok(monkeys)
    }
}

/// Loads JSON documents stored under `keys`, skipping keys that vanished.
pub(crate) async fn fetch_documents<T>(conn: &mut ConnectionManager, keys: &[String]) -> Result<Vec<T>, RepoError>
where
    T: DeserializeOwned,
{
    if keys.is_empty() {
        return Ok(Vec::new());
    }
    let raw: Vec<Option<String>> = cmd("MGET").arg(keys).query_async(conn).await?;
    raw.iter().flatten().map(|json| decode(json)).collect()
}

fn decode<T>(json: &str) -> Result<T, RepoError>
where
    T: DeserializeOwned,
{
    serde_json::from_str(json).map_err(|err| RepoError::Other {
        message: format!("failed to deserialize document: {err}").into(),
    })
}

fn response_u64(response: &Value, field: &str) -> Result<u64, RepoError> {
    response
        .get(field)
        .and_then(Value::as_u64)
        .ok_or_else(|| RepoError::Other {
            message: Cow::Owned(format!("script response is missing `{field}`")),
        })
}
