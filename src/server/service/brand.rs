//! Vehicle brand catalogue.

use sea_orm::DatabaseConnection;

use crate::{
    model::brand::BrandPayloadDto,
    server::{
        data::brand::BrandRepository,
        error::{is_unique_violation, AppError},
        model::brand::Brand,
        util::parse::required,
    },
};

pub struct BrandService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BrandService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_all(&self) -> Result<Vec<Brand>, AppError> {
        Ok(BrandRepository::new(self.db).get_all().await?)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Brand, AppError> {
        BrandRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(not_found)
    }

    /// # Returns
    /// - `Ok(Brand)` - Created brand
    /// - `Err(AppError::BadRequest)` - Empty label
    /// - `Err(AppError::Conflict)` - Label already used
    pub async fn create(&self, dto: BrandPayloadDto) -> Result<Brand, AppError> {
        let label = label_of(dto)?;
        let repo = BrandRepository::new(self.db);

        if repo.find_by_label(&label).await?.is_some() {
            return Err(duplicate());
        }

        repo.create(label).await.map_err(|err| {
            if is_unique_violation(&err) {
                duplicate()
            } else {
                err.into()
            }
        })
    }

    /// # Returns
    /// - `Ok(Brand)` - Renamed brand
    /// - `Err(AppError::BadRequest)` - Empty label
    /// - `Err(AppError::NotFound)` - Unknown brand
    /// - `Err(AppError::Conflict)` - Label used by another brand
    pub async fn update(&self, id: i32, dto: BrandPayloadDto) -> Result<Brand, AppError> {
        let label = label_of(dto)?;
        let repo = BrandRepository::new(self.db);

        if repo
            .find_by_label(&label)
            .await?
            .is_some_and(|existing| existing.id != id)
        {
            return Err(duplicate());
        }

        repo.update(id, label).await?.ok_or_else(not_found)
    }

    /// Deletes a brand; vehicles of that brand become unbranded.
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !BrandRepository::new(self.db).delete(id).await? {
            return Err(not_found());
        }

        Ok(())
    }
}

fn label_of(dto: BrandPayloadDto) -> Result<String, AppError> {
    required(dto.libelle)
        .ok_or_else(|| AppError::BadRequest("Le libellé est obligatoire".to_string()))
}

fn not_found() -> AppError {
    AppError::NotFound("Marque introuvable".to_string())
}

fn duplicate() -> AppError {
    AppError::Conflict("Cette marque existe déjà".to_string())
}
