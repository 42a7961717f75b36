use super::support::*;

#[tokio::test]
async fn add_rejects_invalid_fields() {
    let mut troop = Troop::seeded("invalid").await;

    let err = troop.client.add("", 500, "not-an-email").await.expect_err("invalid fields");
    match err {
        RepoError::Validation(validation) => {
            assert!(validation.has_field("name"));
            assert!(validation.has_field("age"));
            assert!(validation.has_field("email"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(troop.client.count().await.expect("count"), 5);

    troop.finish().await;
}

#[tokio::test]
async fn names_are_unique() {
    let mut troop = Troop::seeded("unique").await;

    let err = troop.client.add("veeti", 2, "other@example.com").await.expect_err("duplicate");
    match err {
        RepoError::UniqueConstraintViolation {
            field,
            value,
            existing_id,
        } => {
            assert_eq!(field, "name");
            assert_eq!(value, "veeti");
            assert_eq!(existing_id, troop.id("veeti"));
        }
        other => panic!("unexpected error: {other:?}"),
    }

    let kerttu = troop.id("kerttu");
    let err = troop
        .client
        .edit(kerttu, "admin", 7, "kerttu@example.com")
        .await
        .expect_err("rename onto admin");
    assert!(matches!(err, RepoError::UniqueConstraintViolation { .. }));
    let stored = troop.client.monkey(kerttu).await.expect("get").expect("kerttu");
    assert_eq!(stored.name, "kerttu");

    troop.finish().await;
}

#[tokio::test]
async fn edit_unknown_id_is_not_found() {
    let mut troop = Troop::seeded("edit_missing").await;

    let err = troop
        .client
        .edit(999, "ghost", 1, "ghost@example.com")
        .await
        .expect_err("missing monkey");
    assert!(err.is_not_found());
    assert_eq!(troop.client.monkey_by_name("ghost").await.expect("lookup"), None);

    troop.finish().await;
}

#[tokio::test]
async fn friend2_with_unknown_target_changes_nothing() {
    let mut troop = Troop::seeded("friend2_missing").await;
    let veeti = troop.id("veeti");

    let err = troop
        .client
        .friend2(veeti, ["admin", "nobody"])
        .await
        .expect_err("unknown target");
    match err {
        RepoError::NotFound { entity } => assert_eq!(entity, "nobody"),
        other => panic!("unexpected error: {other:?}"),
    }

    assert_eq!(troop.lenfriends("veeti").await, 2);
    assert_eq!(troop.lenfriends("admin").await, 1);
    assert_eq!(troop.best_friend_name("veeti").await.as_deref(), Some("kerttu"));

    troop.finish().await;
}

#[tokio::test]
async fn unknown_owner_is_not_found() {
    let mut troop = Troop::seeded("owner_missing").await;

    assert!(troop.client.friend2(999, ["admin"]).await.expect_err("friend2").is_not_found());
    assert!(troop.client.best_friend2(999, "admin").await.expect_err("best").is_not_found());
    assert!(troop.client.profile(999).await.expect_err("profile").is_not_found());
    assert_eq!(troop.lenfriends("admin").await, 1);

    troop.finish().await;
}

#[tokio::test]
async fn best_friend2_with_unknown_target_changes_nothing() {
    let mut troop = Troop::seeded("best_missing").await;
    let veeti = troop.id("veeti");

    let err = troop.client.best_friend2(veeti, "nobody").await.expect_err("unknown");
    assert!(err.is_not_found());
    assert_eq!(troop.lenfriends("veeti").await, 2);
    assert_eq!(troop.best_friend_name("veeti").await.as_deref(), Some("kerttu"));

    troop.finish().await;
}

#[tokio::test]
async fn repo_and_executor_work_without_the_client() {
    let mut conn = redis_conn().await;
    let repo = MonkeyRepo::new(unique_namespace("repo"));

    let mut executor = RedisExecutor::new(&mut conn);
    let id = repo
        .create(&mut executor, monkeys::MonkeyFields::new("solo", 1, "solo@example.com"))
        .await
        .expect("create");
    let lenfriends = repo.replace_friends(&mut executor, id, ["solo"]).await.expect("self friend");
    assert_eq!(lenfriends, 1);

    assert!(repo.exists(&mut conn, id).await.expect("exists"));
    assert_eq!(repo.best_friend_name(&mut conn, id).await.expect("best"), None);

    let removed = monkeys::cleanup_pattern(&mut conn, &repo.service_pattern()).await.expect("cleanup");
    assert!(removed > 0);
    assert_eq!(repo.count(&mut conn).await.expect("count"), 0);
}
