use super::*;

/// Tests crediting a balance.
///
/// Expected: Ok and balance increased
#[tokio::test]
async fn adds_to_balance() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db).credits(5).build().await?;

    UserRepository::new(db).credit_credits(user.id, 15).await?;

    assert_eq!(UserRepository::new(db).credits(user.id).await?, Some(20));

    Ok(())
}

/// Tests the total of all balances.
///
/// Expected: Ok with the sum
#[tokio::test]
async fn sums_all_balances() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db).credits(5).build().await?;
    factory::user::UserFactory::new(db).credits(12).build().await?;

    assert_eq!(UserRepository::new(db).total_credits().await?, 17);

    Ok(())
}
