use super::*;

/// Tests that a configuration is created when the user has none.
///
/// Expected: Ok with a new configuration, reused on the next call
#[tokio::test]
async fn creates_then_reuses_configuration() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_marketplace_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;

    let repo = ConfigurationRepository::new(db);
    let created = repo.first_or_create(user.id).await?;
    let reused = repo.first_or_create(user.id).await?;

    assert_eq!(created.id, reused.id);
    assert_eq!(repo.get_by_user(user.id).await?.len(), 1);

    Ok(())
}
