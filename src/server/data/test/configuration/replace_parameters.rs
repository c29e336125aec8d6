use super::*;

/// Tests replacing the parameter set of a configuration.
///
/// Expected: Ok and only the new parameters remain
#[tokio::test]
async fn replaces_every_parameter() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_marketplace_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let configuration = factory::configuration::create_configuration(db, user.id).await?;
    factory::configuration::create_parameter(db, configuration.id, "fumeur", "oui").await?;
    factory::configuration::create_parameter(db, configuration.id, "animaux", "non").await?;

    let repo = ConfigurationRepository::new(db);
    repo.replace_parameters(
        configuration.id,
        vec![ParameterInput {
            property: "musique".to_string(),
            value: "jazz".to_string(),
        }],
    )
    .await?;

    let preferences = repo.preferences_of(user.id).await?;
    assert_eq!(preferences.len(), 1);
    assert_eq!(preferences[0].property, "musique");
    assert_eq!(preferences[0].value, "jazz");

    Ok(())
}
