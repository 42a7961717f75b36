//! Request-level facade over [`MonkeyRepo`].
//!
//! Each method is one logical request: it builds a [`RedisExecutor`] over the
//! client's connection, runs exactly one atomic mutation or a set of reads,
//! and returns typed results.
//!
//! # Example
//! ```ignore
//! let mut client = Client::connect("redis://localhost:6379", "zoo").await?;
//! let jack = client.add("Jack", 4, "Jack@gmail.com").await?;
//! client.best_friend2(jack.id, "veeti").await?;
//! ```

use redis::aio::ConnectionManager;

use crate::{
    cleanup_pattern,
    config::MonkeysConfig,
    errors::RepoError,
    id::MonkeyId,
    repository::{BestFriendOutcome, DeleteSummary, MonkeyRepo},
    runtime::RedisExecutor,
    seed::{self, SeededTroop},
    types::{FriendEdge, FriendView, Monkey, MonkeyFields, MonkeyProfile},
};

#[derive(Clone)]
pub struct Client {
    conn: ConnectionManager,
    repo: MonkeyRepo,
}

impl Client {
    /// Create a new client with the given connection and key prefix.
    pub fn new(conn: ConnectionManager, prefix: impl Into<String>) -> Self {
        Self::with_repo(conn, MonkeyRepo::new(prefix))
    }

    pub fn with_repo(conn: ConnectionManager, repo: MonkeyRepo) -> Self {
        Self { conn, repo }
    }

    /// Open a connection manager for `url` and wrap it.
    pub async fn connect(url: &str, prefix: impl Into<String>) -> Result<Self, RepoError> {
        let redis_client = redis::Client::open(url)?;
        let conn = ConnectionManager::new(redis_client).await?;
        Ok(Self::new(conn, prefix))
    }

    pub async fn from_config(config: &MonkeysConfig) -> Result<Self, RepoError> {
        let url = config.redis_url()?;
        let redis_client = redis::Client::open(url.as_str())?;
        let conn = ConnectionManager::new(redis_client).await?;
        let repo = MonkeyRepo::with_service(config.store.prefix.clone(), config.store.service.clone());
        Ok(Self::with_repo(conn, repo))
    }

    pub fn repo(&self) -> &MonkeyRepo {
        &self.repo
    }

    pub fn prefix(&self) -> &str {
        self.repo.prefix()
    }

    pub fn connection(&self) -> ConnectionManager {
        self.conn.clone()
    }

    pub fn connection_mut(&mut self) -> &mut ConnectionManager {
        &mut self.conn
    }

    /// Creates a monkey and returns the stored record.
    pub async fn add(&mut self, name: &str, age: u32, email: &str) -> Result<Monkey, RepoError> {
        let mut executor = RedisExecutor::new(&mut self.conn);
        let id = self.repo.create(&mut executor, MonkeyFields::new(name, age, email)).await?;
        self.repo.require(&mut self.conn, id).await
    }

    /// Rewrites a monkey's fields; its friends are untouched.
    pub async fn edit(&mut self, id: MonkeyId, name: &str, age: u32, email: &str) -> Result<Monkey, RepoError> {
        let mut executor = RedisExecutor::new(&mut self.conn);
        self.repo
            .update(&mut executor, id, MonkeyFields::new(name, age, email))
            .await?;
        self.repo.require(&mut self.conn, id).await
    }

    /// Deletes the named monkeys together with every edge touching them.
    pub async fn delete<I, S>(&mut self, names: I) -> Result<DeleteSummary, RepoError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut executor = RedisExecutor::new(&mut self.conn);
        self.repo.delete_by_names(&mut executor, names).await
    }

    /// Replaces a monkey's friend set; returns the resulting friend count.
    pub async fn friend2<I, S>(&mut self, id: MonkeyId, target_names: I) -> Result<u64, RepoError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut executor = RedisExecutor::new(&mut self.conn);
        self.repo.replace_friends(&mut executor, id, target_names).await
    }

    /// Designates a best friend, befriending it first when necessary.
    pub async fn best_friend2(&mut self, id: MonkeyId, target_name: &str) -> Result<BestFriendOutcome, RepoError> {
        let mut executor = RedisExecutor::new(&mut self.conn);
        self.repo.set_best_friend(&mut executor, id, target_name).await
    }

    pub async fn seed(&mut self) -> Result<SeededTroop, RepoError> {
        let mut executor = RedisExecutor::new(&mut self.conn);
        seed::populate(&self.repo, &mut executor).await
    }

    pub async fn monkey(&mut self, id: MonkeyId) -> Result<Option<Monkey>, RepoError> {
        self.repo.get(&mut self.conn, id).await
    }

    pub async fn monkey_by_name(&mut self, name: &str) -> Result<Option<Monkey>, RepoError> {
        self.repo.find_by_name(&mut self.conn, name).await
    }

    /// Resolves a name to an id, failing with NotFound.
    pub async fn id_of(&mut self, name: &str) -> Result<MonkeyId, RepoError> {
        self.repo
            .id_by_name(&mut self.conn, name)
            .await?
            .ok_or_else(|| RepoError::not_found(name))
    }

    pub async fn monkeys(&mut self) -> Result<Vec<Monkey>, RepoError> {
        self.repo.all(&mut self.conn).await
    }

    pub async fn count(&mut self) -> Result<u64, RepoError> {
        self.repo.count(&mut self.conn).await
    }

    pub async fn friends_of(&mut self, id: MonkeyId) -> Result<Vec<FriendEdge>, RepoError> {
        self.repo.friends_of(&mut self.conn, id).await
    }

    pub async fn lenfriends(&mut self, id: MonkeyId) -> Result<u64, RepoError> {
        self.repo.lenfriends(&mut self.conn, id).await
    }

    pub async fn best_friend_name(&mut self, id: MonkeyId) -> Result<Option<String>, RepoError> {
        self.repo.best_friend_name(&mut self.conn, id).await
    }

    pub async fn profile(&mut self, id: MonkeyId) -> Result<MonkeyProfile, RepoError> {
        self.repo.profile(&mut self.conn, id).await
    }

    pub async fn profiles(&mut self) -> Result<Vec<MonkeyProfile>, RepoError> {
        self.repo.profiles(&mut self.conn).await
    }

    pub async fn friend_listing(&mut self) -> Result<Vec<FriendView>, RepoError> {
        self.repo.friend_listing(&mut self.conn).await
    }

    /// Removes every key under this client's namespace.
    pub async fn purge(&mut self) -> Result<u64, RepoError> {
        let pattern = self.repo.service_pattern();
        cleanup_pattern(&mut self.conn, &pattern).await
    }
}
