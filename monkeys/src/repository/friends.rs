use std::collections::HashMap;

use redis::{aio::ConnectionManager, cmd};

use super::{MonkeyRepo, fetch_documents};
use crate::{
    errors::RepoError,
    id::MonkeyId,
    types::{FriendEdge, FriendView, Monkey, MonkeyProfile},
};

impl MonkeyRepo {
    /// Edges owned by `owner_id`, in creation order.
    pub async fn friends_of(&self, conn: &mut ConnectionManager, owner_id: MonkeyId) -> Result<Vec<FriendEdge>, RepoError> {
        let ids: Vec<u64> = cmd("SMEMBERS").arg(self.relation_key(owner_id)).query_async(conn).await?;
        let keys: Vec<String> = ids.iter().map(|id| self.key_context().friend(*id)).collect();
        let mut edges: Vec<FriendEdge> = fetch_documents(conn, &keys).await?;
        edges.sort_by_key(|edge| edge.id);
        Ok(edges)
    }

    /// Number of edges owned by `owner_id`.
    pub async fn lenfriends(&self, conn: &mut ConnectionManager, owner_id: MonkeyId) -> Result<u64, RepoError> {
        let count: u64 = cmd("SCARD").arg(self.relation_key(owner_id)).query_async(conn).await?;
        Ok(count)
    }

    pub async fn best_friend(&self, conn: &mut ConnectionManager, owner_id: MonkeyId) -> Result<Option<Monkey>, RepoError> {
        let edges = self.friends_of(conn, owner_id).await?;
        match edges.iter().find(|edge| edge.is_best) {
            Some(edge) => self.get(conn, edge.to_monkey_id).await,
            None => Ok(None),
        }
    }

    pub async fn best_friend_name(
        &self,
        conn: &mut ConnectionManager,
        owner_id: MonkeyId,
    ) -> Result<Option<String>, RepoError> {
        Ok(self.best_friend(conn, owner_id).await?.map(|monkey| monkey.name))
    }

    /// The monkey plus everything derived from its edges.
    pub async fn profile(&self, conn: &mut ConnectionManager, id: MonkeyId) -> Result<MonkeyProfile, RepoError> {
        let monkey = self.require(conn, id).await?;
        let edges = self.friends_of(conn, id).await?;
        let mut friend_names = Vec::with_capacity(edges.len());
        let mut best_friend_name = None;
        for edge in &edges {
            let Some(friend) = self.get(conn, edge.to_monkey_id).await? else {
                continue;
            };
            if edge.is_best {
                best_friend_name = Some(friend.name.clone());
            }
            friend_names.push(friend.name);
        }
        friend_names.sort();
        Ok(MonkeyProfile {
            monkey,
            lenfriends: edges.len() as u64,
            best_friend_name,
            friend_names,
        })
    }

    /// Profiles of every monkey, ordered by name.
    pub async fn profiles(&self, conn: &mut ConnectionManager) -> Result<Vec<MonkeyProfile>, RepoError> {
        let monkeys = self.all(conn).await?;
        let mut profiles = Vec::with_capacity(monkeys.len());
        for monkey in monkeys {
            profiles.push(self.profile(conn, monkey.id).await?);
        }
        Ok(profiles)
    }

    /// Every edge with both endpoints named, ordered by owner name then target name.
    pub async fn friend_listing(&self, conn: &mut ConnectionManager) -> Result<Vec<FriendView>, RepoError> {
        let monkeys = self.all(conn).await?;
        let names: HashMap<MonkeyId, String> = monkeys.iter().map(|m| (m.id, m.name.clone())).collect();
        let mut views = Vec::new();
        for monkey in &monkeys {
            for edge in self.friends_of(conn, monkey.id).await? {
                let Some(target) = names.get(&edge.to_monkey_id) else {
                    continue;
                };
                views.push(FriendView {
                    id: edge.id,
                    name: monkey.name.clone(),
                    to_monkey: target.clone(),
                    is_best: edge.is_best,
                });
            }
        }
        views.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.to_monkey.cmp(&b.to_monkey)));
        Ok(views)
    }
}
