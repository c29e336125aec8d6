use crate::model::role::RoleDto;

#[derive(Debug, Clone, PartialEq)]
pub struct Role {
    pub id: i32,
    pub label: String,
}

impl Role {
    pub fn from_entity(entity: entity::role::Model) -> Self {
        Self {
            id: entity.id,
            label: entity.label,
        }
    }

    pub fn into_dto(self) -> RoleDto {
        RoleDto {
            id: self.id,
            libelle: self.label,
        }
    }
}
