use sea_orm::DatabaseConnection;

use crate::{
    model::role::RolePayloadDto,
    server::{
        data::role::RoleRepository,
        error::{is_unique_violation, AppError},
        model::role::Role,
        util::parse::required,
    },
};

pub struct RoleService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RoleService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_all(&self) -> Result<Vec<Role>, AppError> {
        Ok(RoleRepository::new(self.db).get_all().await?)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Role, AppError> {
        RoleRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(not_found)
    }

    pub async fn create(&self, dto: RolePayloadDto) -> Result<Role, AppError> {
        let label = label_of(dto)?;
        let repo = RoleRepository::new(self.db);

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

    pub async fn update(&self, id: i32, dto: RolePayloadDto) -> Result<Role, AppError> {
        let label = label_of(dto)?;
        let repo = RoleRepository::new(self.db);

        if repo
            .find_by_label(&label)
            .await?
            .is_some_and(|existing| existing.id != id)
        {
            return Err(duplicate());
        }

        repo.update(id, label).await?.ok_or_else(not_found)
    }

    /// Deletes a role and unassigns it from every user.
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !RoleRepository::new(self.db).delete(id).await? {
            return Err(not_found());
        }

        Ok(())
    }
}

fn label_of(dto: RolePayloadDto) -> Result<String, AppError> {
    required(dto.libelle)
        .map(|l| l.to_lowercase())
        .ok_or_else(|| AppError::BadRequest("Le libellé est obligatoire".to_string()))
}

fn not_found() -> AppError {
    AppError::NotFound("Rôle introuvable".to_string())
}

fn duplicate() -> AppError {
    AppError::Conflict("Ce rôle existe déjà".to_string())
}
