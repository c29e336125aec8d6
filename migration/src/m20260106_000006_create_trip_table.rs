use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Trip::Table)
                    .if_not_exists()
                    .col(pk_auto(Trip::Id))
                    .col(string(Trip::DeparturePlace))
                    .col(string(Trip::ArrivalPlace))
                    .col(date(Trip::DepartureDate))
                    .col(time(Trip::DepartureTime))
                    .col(date(Trip::ArrivalDate))
                    .col(time(Trip::ArrivalTime))
                    .col(integer(Trip::Seats))
                    .col(integer(Trip::Price))
                    .col(string_len(Trip::Status, 16).default("disponible"))
                    .col(
                        timestamp_with_time_zone(Trip::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_trip_search")
                    .table(Trip::Table)
                    .col(Trip::DeparturePlace)
                    .col(Trip::ArrivalPlace)
                    .col(Trip::DepartureDate)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Trip::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Trip {
    Table,
    Id,
    DeparturePlace,
    ArrivalPlace,
    DepartureDate,
    DepartureTime,
    ArrivalDate,
    ArrivalTime,
    Seats,
    Price,
    Status,
    CreatedAt,
}
