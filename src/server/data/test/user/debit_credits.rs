use super::*;

/// Tests debiting a balance that covers the amount.
///
/// Expected: Ok(true) and balance reduced
#[tokio::test]
async fn debits_covered_amount() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db).credits(20).build().await?;

    let debited = UserRepository::new(db).debit_credits(user.id, 2).await?;

    assert!(debited);
    assert_eq!(UserRepository::new(db).credits(user.id).await?, Some(18));

    Ok(())
}

/// Tests that a balance never goes negative.
///
/// Expected: Ok(false) and balance unchanged
#[tokio::test]
async fn refuses_when_balance_too_low() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db).credits(1).build().await?;

    let debited = UserRepository::new(db).debit_credits(user.id, 2).await?;

    assert!(!debited);
    assert_eq!(UserRepository::new(db).credits(user.id).await?, Some(1));

    Ok(())
}

/// Tests debiting the exact balance.
///
/// Expected: Ok(true) and balance 0
#[tokio::test]
async fn debits_exact_balance() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db).credits(2).build().await?;

    assert!(UserRepository::new(db).debit_credits(user.id, 2).await?);
    assert_eq!(UserRepository::new(db).credits(user.id).await?, Some(0));

    Ok(())
}
