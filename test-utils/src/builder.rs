use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Collects the tables a test needs and creates them in a fresh SQLite database.
///
/// Most tests use `with_user_tables()` or `with_marketplace_tables()`; `with_table()`
/// covers the rest.
pub struct TestBuilder {
    tables: Vec<TableCreateStatement>,
}

impl TestBuilder {
    pub fn new() -> Self {
        Self { tables: Vec::new() }
    }

    /// Queues the CREATE TABLE for `entity`. Referenced tables must be queued first.
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds the tables needed for authentication and role checks.
    ///
    /// Adds, in dependency order: User, Role, UserRole.
    pub fn with_user_tables(self) -> Self {
        self.with_table(User).with_table(Role).with_table(UserRole)
    }

    /// Adds every table of the marketplace schema.
    ///
    /// Adds, in dependency order: User, Role, UserRole, Brand, Vehicle, Trip,
    /// TripVehicle, Participation, Review, Configuration, Parameter.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let test = TestBuilder::new()
    ///     .with_marketplace_tables()
    ///     .build()
    ///     .await?;
    /// ```
    pub fn with_marketplace_tables(self) -> Self {
        self.with_user_tables()
            .with_table(Brand)
            .with_table(Vehicle)
            .with_table(Trip)
            .with_table(TripVehicle)
            .with_table(Participation)
            .with_table(Review)
            .with_table(Configuration)
            .with_table(Parameter)
    }

    /// Connects and creates the queued tables.
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut context = TestContext::new();
        context.with_tables(self.tables).await?;

        Ok(context)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
