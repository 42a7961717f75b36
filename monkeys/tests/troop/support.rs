pub(crate) use monkeys::{
    Client, ConnectionManager, MonkeyRepo, RedisExecutor, RepoError, id::unique_namespace, seed::SeededTroop,
};

pub(crate) struct Troop {
    pub(crate) client: Client,
    pub(crate) ids: SeededTroop,
}

impl Troop {
    /// A freshly seeded troop in its own key namespace.
    pub(crate) async fn seeded(label: &str) -> Self {
        let mut client = Client::new(redis_conn().await, unique_namespace(label));
        let ids = client.seed().await.expect("seed troop");
        Self { client, ids }
    }

    pub(crate) fn id(&self, name: &str) -> u64 {
        self.ids.id(name).unwrap_or_else(|| panic!("{name} was not seeded"))
    }

    pub(crate) async fn lenfriends(&mut self, name: &str) -> u64 {
        let id = self.id(name);
        self.client.lenfriends(id).await.expect("lenfriends")
    }

    pub(crate) async fn best_friend_name(&mut self, name: &str) -> Option<String> {
        let id = self.id(name);
        self.client.best_friend_name(id).await.expect("best friend")
    }

    /// (name, lenfriends) for every monkey, ordered by name.
    pub(crate) async fn friend_counts(&mut self) -> Vec<(String, u64)> {
        self.client
            .profiles()
            .await
            .expect("profiles")
            .into_iter()
            .map(|profile| (profile.monkey.name, profile.lenfriends))
            .collect()
    }

    pub(crate) async fn finish(mut self) {
        self.client.purge().await.expect("purge namespace");
    }
}

pub(crate) async fn redis_conn() -> ConnectionManager {
    let url = std::env::var("REDIS_URL").unwrap_or_else(|_| "redis://127.0.0.1/".to_string());
    let client = monkeys::redis::Client::open(url).expect("redis client");
    client.get_connection_manager().await.expect("connection manager")
}

pub(crate) fn counts(expected: &[(&str, u64)]) -> Vec<(String, u64)> {
    expected.iter().map(|(name, len)| (name.to_string(), *len)).collect()
}
