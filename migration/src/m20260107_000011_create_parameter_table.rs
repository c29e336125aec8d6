use sea_orm_migration::{prelude::*, schema::*};

use super::m20260107_000010_create_configuration_table::Configuration;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Parameter::Table)
                    .if_not_exists()
                    .col(pk_auto(Parameter::Id))
                    .col(integer(Parameter::ConfigurationId))
                    .col(string(Parameter::Property))
                    .col(string(Parameter::Value))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_parameter_configuration_id")
                            .from(Parameter::Table, Parameter::ConfigurationId)
                            .to(Configuration::Table, Configuration::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Parameter::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Parameter {
    Table,
    Id,
    ConfigurationId,
    Property,
    Value,
}
