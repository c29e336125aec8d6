use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260105_000005_create_vehicle_table::Vehicle, m20260106_000006_create_trip_table::Trip,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TripVehicle::Table)
                    .if_not_exists()
                    .col(pk_auto(TripVehicle::Id))
                    .col(integer_uniq(TripVehicle::TripId))
                    .col(integer(TripVehicle::VehicleId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_trip_vehicle_trip_id")
                            .from(TripVehicle::Table, TripVehicle::TripId)
                            .to(Trip::Table, Trip::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_trip_vehicle_vehicle_id")
                            .from(TripVehicle::Table, TripVehicle::VehicleId)
                            .to(Vehicle::Table, Vehicle::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(TripVehicle::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum TripVehicle {
    Table,
    Id,
    TripId,
    VehicleId,
}
