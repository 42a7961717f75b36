use super::support::*;

#[tokio::test]
async fn seeded_troop_has_expected_shape() {
    let mut troop = Troop::seeded("fixture").await;

    assert_eq!(troop.id("admin"), 1);
    assert_eq!(troop.id("veeti"), 3);
    assert_eq!(troop.client.count().await.expect("count"), 5);

    let expected = counts(&[("admin", 1), ("guest", 1), ("kerttu", 1), ("kukka", 2), ("veeti", 2)]);
    assert_eq!(troop.friend_counts().await, expected);

    assert_eq!(troop.best_friend_name("admin").await.as_deref(), Some("guest"));
    assert_eq!(troop.best_friend_name("guest").await.as_deref(), Some("admin"));
    assert_eq!(troop.best_friend_name("veeti").await.as_deref(), Some("kerttu"));
    assert_eq!(troop.best_friend_name("kerttu").await.as_deref(), Some("veeti"));
    assert_eq!(troop.best_friend_name("kukka").await.as_deref(), Some("veeti"));

    troop.finish().await;
}

#[tokio::test]
async fn friend_listing_is_ordered_by_owner_then_target() {
    let mut troop = Troop::seeded("listing").await;

    let listing: Vec<(String, String, bool)> = troop
        .client
        .friend_listing()
        .await
        .expect("listing")
        .into_iter()
        .map(|view| (view.name, view.to_monkey, view.is_best))
        .collect();

    let expected = [
        ("admin", "guest", true),
        ("guest", "admin", true),
        ("kerttu", "veeti", true),
        ("kukka", "kukka", false),
        ("kukka", "veeti", true),
        ("veeti", "kerttu", true),
        ("veeti", "kukka", false),
    ];
    let expected: Vec<(String, String, bool)> = expected
        .iter()
        .map(|(owner, target, best)| (owner.to_string(), target.to_string(), *best))
        .collect();
    assert_eq!(listing, expected);

    troop.finish().await;
}

#[tokio::test]
async fn at_most_one_best_edge_per_owner() {
    let mut troop = Troop::seeded("onebest").await;

    for name in ["admin", "guest", "veeti", "kerttu", "kukka"] {
        let id = troop.id(name);
        let edges = troop.client.friends_of(id).await.expect("friends");
        assert!(edges.iter().all(|edge| edge.owner_id == id));
        assert!(edges.iter().filter(|edge| edge.is_best).count() <= 1, "{name} has several best friends");
    }

    troop.finish().await;
}

#[tokio::test]
async fn profile_collects_friend_names() {
    let mut troop = Troop::seeded("profile").await;

    let veeti = troop.id("veeti");
    let profile = troop.client.profile(veeti).await.expect("profile");
    assert_eq!(profile.monkey.name, "veeti");
    assert_eq!(profile.monkey.age, 3);
    assert_eq!(profile.lenfriends, 2);
    assert_eq!(profile.friend_names, vec!["kerttu".to_string(), "kukka".to_string()]);
    assert_eq!(profile.best_friend_name.as_deref(), Some("kerttu"));

    troop.finish().await;
}

#[tokio::test]
async fn purge_with_glob_prefix_stays_in_its_namespace() {
    let base = unique_namespace("purge");
    let mut neighbour = Client::new(redis_conn().await, format!("{base}_a"));
    let mut wildcard = Client::new(redis_conn().await, format!("{base}_*"));
    neighbour.seed().await.expect("seed neighbour");
    wildcard.seed().await.expect("seed wildcard");

    let removed = wildcard.purge().await.expect("purge wildcard");
    assert!(removed > 0);
    assert_eq!(wildcard.count().await.expect("count"), 0);
    assert_eq!(neighbour.count().await.expect("count"), 5);

    neighbour.purge().await.expect("purge neighbour");
}
