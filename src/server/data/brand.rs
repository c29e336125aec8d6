use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::brand::Brand;

/// Repository for vehicle brands.
pub struct BrandRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> BrandRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Returns every brand ordered by label.
    pub async fn get_all(&self) -> Result<Vec<Brand>, DbErr> {
        let entities = entity::prelude::Brand::find()
            .order_by_asc(entity::brand::Column::Label)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Brand::from_entity).collect())
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Brand>, DbErr> {
        let entity = entity::prelude::Brand::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Brand::from_entity))
    }

    pub async fn find_by_label(&self, label: &str) -> Result<Option<Brand>, DbErr> {
        let entity = entity::prelude::Brand::find()
            .filter(entity::brand::Column::Label.eq(label))
            .one(self.db)
            .await?;

        Ok(entity.map(Brand::from_entity))
    }

    pub async fn create(&self, label: String) -> Result<Brand, DbErr> {
        let entity = entity::brand::ActiveModel {
            label: ActiveValue::Set(label),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Brand::from_entity(entity))
    }

    /// Returns the brand with this label, creating it when missing.
    pub async fn get_or_create(&self, label: &str) -> Result<Brand, DbErr> {
        match self.find_by_label(label).await? {
            Some(brand) => Ok(brand),
            None => self.create(label.to_string()).await,
        }
    }

    /// # Returns
    /// - `Ok(None)` - No brand with that ID
    pub async fn update(&self, id: i32, label: String) -> Result<Option<Brand>, DbErr> {
        if self.find_by_id(id).await?.is_none() {
            return Ok(None);
        }

        let entity = entity::brand::ActiveModel {
            id: ActiveValue::Unchanged(id),
            label: ActiveValue::Set(label),
        }
        .update(self.db)
        .await?;

        Ok(Some(Brand::from_entity(entity)))
    }

    /// Deletes a brand; its vehicles keep existing without a brand.
    ///
    /// # Returns
    /// - `Ok(false)` - No brand with that ID
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        entity::prelude::Vehicle::update_many()
            .col_expr(
                entity::vehicle::Column::BrandId,
                sea_orm::sea_query::Expr::value(Option::<i32>::None),
            )
            .filter(entity::vehicle::Column::BrandId.eq(id))
            .exec(self.db)
            .await?;

        let result = entity::prelude::Brand::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected > 0)
    }
}
