use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(User::Table)
                    .if_not_exists()
                    .col(pk_auto(User::Id))
                    .col(string(User::LastName))
                    .col(string(User::FirstName))
                    .col(string_uniq(User::Email))
                    .col(string(User::PasswordHash))
                    .col(string_null(User::Pseudo))
                    .col(string_null(User::Phone))
                    .col(string_null(User::Address))
                    .col(date_null(User::BirthDate))
                    .col(blob_null(User::Photo))
                    .col(string_null(User::ApiTokenHash).unique_key())
                    .col(string_null(User::ResetTokenHash))
                    .col(timestamp_with_time_zone_null(User::ResetTokenExpiresAt))
                    .col(boolean(User::IsDriver).default(false))
                    .col(boolean(User::IsPassenger).default(true))
                    .col(integer(User::Credits).default(20))
                    .col(boolean(User::IsActive).default(true))
                    .col(timestamp_with_time_zone_null(User::SuspendedAt))
                    .col(string_null(User::SuspendReason))
                    .col(
                        timestamp_with_time_zone(User::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(User::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum User {
    Table,
    Id,
    LastName,
    FirstName,
    Email,
    PasswordHash,
    Pseudo,
    Phone,
    Address,
    BirthDate,
    Photo,
    ApiTokenHash,
    ResetTokenHash,
    ResetTokenExpiresAt,
    IsDriver,
    IsPassenger,
    Credits,
    IsActive,
    SuspendedAt,
    SuspendReason,
    CreatedAt,
}
