use super::*;

/// Tests that a configuration is only visible to its owner.
///
/// Expected: Ok(Some) for the owner, Ok(None) for anyone else
#[tokio::test]
async fn hides_configuration_of_other_users() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_marketplace_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::user::create_user(db).await?;
    let other = factory::user::create_user(db).await?;
    let configuration = factory::configuration::create_configuration(db, owner.id).await?;
    factory::configuration::create_parameter(db, configuration.id, "fumeur", "non").await?;

    let repo = ConfigurationRepository::new(db);
    let found = repo.find_for_user(configuration.id, owner.id).await?;

    let found = found.unwrap();
    assert_eq!(found.parameters.len(), 1);
    assert_eq!(found.parameters[0].property, "fumeur");
    assert!(repo
        .find_for_user(configuration.id, other.id)
        .await?
        .is_none());

    Ok(())
}
