pub use sea_orm_migration::prelude::*;

mod m20260105_000001_create_user_table;
mod m20260105_000002_create_role_table;
mod m20260105_000003_create_user_role_table;
mod m20260105_000004_create_brand_table;
mod m20260105_000005_create_vehicle_table;
mod m20260106_000006_create_trip_table;
mod m20260106_000007_create_trip_vehicle_table;
mod m20260106_000008_create_participation_table;
mod m20260107_000009_create_review_table;
mod m20260107_000010_create_configuration_table;
mod m20260107_000011_create_parameter_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260105_000001_create_user_table::Migration),
            Box::new(m20260105_000002_create_role_table::Migration),
            Box::new(m20260105_000003_create_user_role_table::Migration),
            Box::new(m20260105_000004_create_brand_table::Migration),
            Box::new(m20260105_000005_create_vehicle_table::Migration),
            Box::new(m20260106_000006_create_trip_table::Migration),
            Box::new(m20260106_000007_create_trip_vehicle_table::Migration),
            Box::new(m20260106_000008_create_participation_table::Migration),
            Box::new(m20260107_000009_create_review_table::Migration),
            Box::new(m20260107_000010_create_configuration_table::Migration),
            Box::new(m20260107_000011_create_parameter_table::Migration),
        ]
    }
}
