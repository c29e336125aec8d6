use super::*;

/// Tests resolving a user from their token hash.
///
/// Expected: Ok(Some(user))
#[tokio::test]
async fn finds_user_by_token_hash() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db)
        .api_token_hash("abc123")
        .build()
        .await?;
    factory::user::UserFactory::new(db)
        .api_token_hash("other")
        .build()
        .await?;

    let found = UserRepository::new(db).find_by_token_hash("abc123").await?;

    assert_eq!(found.map(|u| u.id), Some(user.id));

    Ok(())
}

/// Tests an unknown token hash.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_hash() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::create_user(db).await?;

    let found = UserRepository::new(db).find_by_token_hash("missing").await?;

    assert!(found.is_none());

    Ok(())
}
