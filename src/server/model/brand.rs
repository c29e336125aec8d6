use crate::model::brand::BrandDto;

#[derive(Debug, Clone, PartialEq)]
pub struct Brand {
    pub id: i32,
    pub label: String,
}

impl Brand {
    pub fn from_entity(entity: entity::brand::Model) -> Self {
        Self {
            id: entity.id,
            label: entity.label,
        }
    }

    pub fn into_dto(self) -> BrandDto {
        BrandDto {
            id: self.id,
            libelle: self.label,
        }
    }
}
