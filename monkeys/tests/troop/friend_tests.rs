use super::support::*;

#[tokio::test]
async fn friend2_replaces_the_friend_set() {
    let mut troop = Troop::seeded("friend2").await;
    let veeti = troop.id("veeti");

    let lenfriends = troop.client.friend2(veeti, ["admin", "guest"]).await.expect("friend2");
    assert_eq!(lenfriends, 2);
    assert_eq!(troop.lenfriends("veeti").await, 2);
    assert_eq!(troop.best_friend_name("veeti").await, None);

    let profile = troop.client.profile(veeti).await.expect("profile");
    assert_eq!(profile.friend_names, vec!["admin".to_string(), "guest".to_string()]);

    // Former friends lose the mirrored edge back to veeti.
    assert_eq!(troop.lenfriends("kerttu").await, 0);
    assert_eq!(troop.lenfriends("kukka").await, 1);
    assert_eq!(troop.best_friend_name("kukka").await, None);

    // New friends befriend veeti back, keeping their own best friend.
    assert_eq!(troop.lenfriends("admin").await, 2);
    assert_eq!(troop.best_friend_name("admin").await.as_deref(), Some("guest"));

    troop.finish().await;
}

#[tokio::test]
async fn friend2_with_the_same_set_keeps_friends_best_flags() {
    let mut troop = Troop::seeded("friend2_same").await;
    let veeti = troop.id("veeti");

    let lenfriends = troop.client.friend2(veeti, ["kerttu", "kukka"]).await.expect("friend2");
    assert_eq!(lenfriends, 2);
    assert_eq!(troop.best_friend_name("veeti").await, None);

    assert_eq!(troop.best_friend_name("kerttu").await.as_deref(), Some("veeti"));
    assert_eq!(troop.best_friend_name("kukka").await.as_deref(), Some("veeti"));
    assert_eq!(troop.lenfriends("kerttu").await, 1);
    assert_eq!(troop.lenfriends("kukka").await, 2);

    troop.finish().await;
}

#[tokio::test]
async fn friend2_drops_only_former_friends_mirrors() {
    let mut troop = Troop::seeded("friend2_overlap").await;
    let veeti = troop.id("veeti");

    troop.client.friend2(veeti, ["kerttu", "admin"]).await.expect("friend2");

    assert_eq!(troop.best_friend_name("kerttu").await.as_deref(), Some("veeti"));
    assert_eq!(troop.lenfriends("kerttu").await, 1);
    assert_eq!(troop.best_friend_name("kukka").await, None);
    assert_eq!(troop.lenfriends("kukka").await, 1);
    assert_eq!(troop.lenfriends("admin").await, 2);

    troop.finish().await;
}

#[tokio::test]
async fn friend2_with_no_names_clears_friends() {
    let mut troop = Troop::seeded("friend2_clear").await;
    let veeti = troop.id("veeti");

    let lenfriends = troop.client.friend2(veeti, Vec::<String>::new()).await.expect("friend2");
    assert_eq!(lenfriends, 0);

    let expected = counts(&[("admin", 1), ("guest", 1), ("kerttu", 0), ("kukka", 1), ("veeti", 0)]);
    assert_eq!(troop.friend_counts().await, expected);

    troop.finish().await;
}

#[tokio::test]
async fn friend2_ignores_duplicate_names() {
    let mut troop = Troop::seeded("friend2_dup").await;
    let admin = troop.id("admin");

    let lenfriends = troop
        .client
        .friend2(admin, ["guest", "guest", "kerttu"])
        .await
        .expect("friend2");
    assert_eq!(lenfriends, 2);
    assert_eq!(troop.lenfriends("guest").await, 1);
    assert_eq!(troop.lenfriends("kerttu").await, 2);

    troop.finish().await;
}

#[tokio::test]
async fn friend2_self_friendship_is_one_edge() {
    let mut troop = Troop::seeded("friend2_self").await;
    let guest = troop.id("guest");

    let lenfriends = troop.client.friend2(guest, ["guest"]).await.expect("friend2");
    assert_eq!(lenfriends, 1);
    assert_eq!(troop.lenfriends("admin").await, 0);

    troop.finish().await;
}

#[tokio::test]
async fn best_friend2_befriends_when_needed() {
    let mut troop = Troop::seeded("best_new").await;
    let veeti = troop.id("veeti");

    let outcome = troop.client.best_friend2(veeti, "admin").await.expect("best_friend2");
    assert!(outcome.created);

    assert_eq!(troop.lenfriends("veeti").await, 3);
    assert_eq!(troop.best_friend_name("veeti").await.as_deref(), Some("admin"));
    assert_eq!(troop.lenfriends("admin").await, 2);
    assert_eq!(troop.best_friend_name("admin").await.as_deref(), Some("guest"));

    let edges = troop.client.friends_of(veeti).await.expect("friends");
    assert_eq!(edges.iter().filter(|edge| edge.is_best).count(), 1);

    troop.finish().await;
}

#[tokio::test]
async fn best_friend2_flags_an_existing_friend() {
    let mut troop = Troop::seeded("best_existing").await;
    let veeti = troop.id("veeti");
    let kukka = troop.id("kukka");

    let outcome = troop.client.best_friend2(veeti, "kukka").await.expect("best_friend2");
    assert!(!outcome.created);

    assert_eq!(troop.lenfriends("veeti").await, 2);
    assert_eq!(troop.best_friend_name("veeti").await.as_deref(), Some("kukka"));
    assert_eq!(troop.lenfriends("kukka").await, 2);

    let edges = troop.client.friends_of(veeti).await.expect("friends");
    let best = edges.iter().find(|edge| edge.is_best).expect("best edge");
    assert_eq!(best.id, outcome.friend_id);
    assert_eq!(best.to_monkey_id, kukka);

    troop.finish().await;
}

#[tokio::test]
async fn best_friend2_is_idempotent() {
    let mut troop = Troop::seeded("best_again").await;
    let admin = troop.id("admin");

    let first = troop.client.best_friend2(admin, "guest").await.expect("first");
    let second = troop.client.best_friend2(admin, "guest").await.expect("second");
    assert_eq!(first.friend_id, second.friend_id);
    assert_eq!(troop.lenfriends("admin").await, 1);

    troop.finish().await;
}
