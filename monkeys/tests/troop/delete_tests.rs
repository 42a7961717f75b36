use super::support::*;

#[tokio::test]
async fn delete_removes_monkey_and_its_friendships() {
    let mut troop = Troop::seeded("delete").await;
    let veeti = troop.id("veeti");

    let summary = troop.client.delete(["veeti"]).await.expect("delete veeti");
    assert_eq!(summary.deleted, 1);
    // veeti->kerttu, veeti->kukka, kerttu->veeti, kukka->veeti
    assert_eq!(summary.removed_edges, 4);

    assert_eq!(troop.client.count().await.expect("count"), 4);
    assert_eq!(troop.client.monkey(veeti).await.expect("get"), None);
    assert_eq!(troop.client.monkey_by_name("veeti").await.expect("lookup"), None);

    assert_eq!(troop.lenfriends("kerttu").await, 0);
    assert_eq!(troop.lenfriends("kukka").await, 1);
    assert_eq!(troop.best_friend_name("kerttu").await, None);
    assert_eq!(troop.best_friend_name("kukka").await, None);

    let listing = troop.client.friend_listing().await.expect("listing");
    assert!(listing.iter().all(|view| view.name != "veeti" && view.to_monkey != "veeti"));

    troop.finish().await;
}

#[tokio::test]
async fn delete_monkey_that_befriends_itself() {
    let mut troop = Troop::seeded("delete_self").await;
    assert_eq!(troop.lenfriends("veeti").await, 2);

    let summary = troop.client.delete(["kukka"]).await.expect("delete kukka");
    assert_eq!(summary.deleted, 1);
    // kukka->veeti, kukka->kukka, veeti->kukka
    assert_eq!(summary.removed_edges, 3);

    assert_eq!(troop.lenfriends("veeti").await, 1);
    assert_eq!(troop.best_friend_name("veeti").await.as_deref(), Some("kerttu"));
    assert_eq!(troop.client.count().await.expect("count"), 4);

    troop.finish().await;
}

#[tokio::test]
async fn delete_several_names_at_once() {
    let mut troop = Troop::seeded("delete_many").await;

    let summary = troop
        .client
        .delete(["admin", "guest", "admin"])
        .await
        .expect("delete admin and guest");
    assert_eq!(summary.deleted, 2);
    assert_eq!(summary.removed_edges, 2);

    let expected = counts(&[("kerttu", 1), ("kukka", 2), ("veeti", 2)]);
    assert_eq!(troop.friend_counts().await, expected);

    troop.finish().await;
}

#[tokio::test]
async fn delete_nothing_is_a_no_op() {
    let mut troop = Troop::seeded("delete_none").await;

    let summary = troop.client.delete(Vec::<String>::new()).await.expect("empty delete");
    assert_eq!(summary.deleted, 0);
    assert_eq!(troop.client.count().await.expect("count"), 5);

    troop.finish().await;
}

#[tokio::test]
async fn delete_with_unknown_name_changes_nothing() {
    let mut troop = Troop::seeded("delete_unknown").await;

    let err = troop
        .client
        .delete(["veeti", "nobody"])
        .await
        .expect_err("unknown name");
    match err {
        RepoError::NotFound { entity } => assert_eq!(entity, "nobody"),
        other => panic!("unexpected error: {other:?}"),
    }

    assert_eq!(troop.client.count().await.expect("count"), 5);
    assert_eq!(troop.lenfriends("veeti").await, 2);
    assert_eq!(troop.lenfriends("kerttu").await, 1);

    troop.finish().await;
}
