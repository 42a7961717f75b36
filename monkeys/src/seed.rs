//! Sample troop used by the demo CLI and the integration tests.
//!
//! | monkey | age | friends        | best friend |
//! |--------|-----|----------------|-------------|
//! | admin  | 12  | guest          | guest       |
//! | guest  | 12  | admin          | admin       |
//! | veeti  | 3   | kerttu, kukka  | kerttu      |
//! | kerttu | 7   | veeti          | veeti       |
//! | kukka  | 10  | veeti, kukka   | veeti       |

use log::info;

use crate::{
    errors::RepoError,
    id::MonkeyId,
    repository::MonkeyRepo,
    runtime::MutationExecutor,
    types::MonkeyFields,
};

/// (name, age, email), in id order.
pub const SAMPLE_MONKEYS: [(&str, u32, &str); 5] = [
    ("admin", 12, "admin@example.com"),
    ("guest", 12, "guest@example.com"),
    ("veeti", 3, "veeti@example.com"),
    ("kerttu", 7, "kerttu@example.com"),
    ("kukka", 10, "kukka@example.com"),
];

const SAMPLE_FRIENDS: [(&str, &[&str]); 3] = [
    ("admin", &["guest"]),
    ("veeti", &["kerttu", "kukka"]),
    ("kukka", &["veeti", "kukka"]),
];

const SAMPLE_BEST_FRIENDS: [(&str, &str); 5] = [
    ("admin", "guest"),
    ("guest", "admin"),
    ("veeti", "kerttu"),
    ("kerttu", "veeti"),
    ("kukka", "veeti"),
];

/// Ids handed out while seeding.
#[derive(Debug, Clone, Default)]
pub struct SeededTroop {
    ids: Vec<(String, MonkeyId)>,
}

impl SeededTroop {
    pub fn id(&self, name: &str) -> Option<MonkeyId> {
        self.ids.iter().find(|(candidate, _)| candidate == name).map(|(_, id)| *id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    fn require(&self, name: &str) -> Result<MonkeyId, RepoError> {
        self.id(name).ok_or_else(|| RepoError::not_found(name))
    }
}

/// Creates the sample troop. Fails on a name clash if any sample monkey already exists.
pub async fn populate<E>(repo: &MonkeyRepo, executor: &mut E) -> Result<SeededTroop, RepoError>
where
    E: MutationExecutor + ?Sized,
{
    let mut troop = SeededTroop::default();
    for (name, age, email) in SAMPLE_MONKEYS {
        let id = repo.create(executor, MonkeyFields::new(name, age, email)).await?;
        troop.ids.push((name.to_string(), id));
    }

    // Later replacements rebuild the mirror edges of earlier ones, so the
    // best flags are applied only once every edge is in place.
    for (owner, friends) in SAMPLE_FRIENDS {
        repo.replace_friends(executor, troop.require(owner)?, friends.iter().copied())
            .await?;
    }
    for (owner, best) in SAMPLE_BEST_FRIENDS {
        repo.set_best_friend(executor, troop.require(owner)?, best).await?;
    }

    info!("seeded {} monkeys under prefix {}", troop.len(), repo.prefix());
    Ok(troop)
}
