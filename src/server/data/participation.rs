//! Participation data repository.
//!
//! A participation links a user to a trip with a role: the trip's driver or a
//! passenger holding one seat. The (user, trip) pair is unique.

use chrono::Utc;
use entity::participation::ParticipationRole;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::trip::Trip;

pub struct ParticipationRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ParticipationRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a participation.
    ///
    /// # Returns
    /// - `Ok(())` - Participation stored
    /// - `Err(DbErr)` - Database error; a unique violation means the pair already exists
    pub async fn create(
        &self,
        user_id: i32,
        trip_id: i32,
        role: ParticipationRole,
    ) -> Result<(), DbErr> {
        entity::participation::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            trip_id: ActiveValue::Set(trip_id),
            role: ActiveValue::Set(role),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(())
    }

    /// Role of a user on a trip, if they participate.
    pub async fn role_of(
        &self,
        user_id: i32,
        trip_id: i32,
    ) -> Result<Option<ParticipationRole>, DbErr> {
        let entity = entity::prelude::Participation::find()
            .filter(entity::participation::Column::UserId.eq(user_id))
            .filter(entity::participation::Column::TripId.eq(trip_id))
            .one(self.db)
            .await?;

        Ok(entity.map(|p| p.role))
    }

    pub async fn exists(&self, user_id: i32, trip_id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Participation::find()
            .filter(entity::participation::Column::UserId.eq(user_id))
            .filter(entity::participation::Column::TripId.eq(trip_id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// User ID of the trip's driver.
    pub async fn driver_of(&self, trip_id: i32) -> Result<Option<i32>, DbErr> {
        let entity = entity::prelude::Participation::find()
            .filter(entity::participation::Column::TripId.eq(trip_id))
            .filter(entity::participation::Column::Role.eq(ParticipationRole::Driver))
            .one(self.db)
            .await?;

        Ok(entity.map(|p| p.user_id))
    }

    /// Every participant of a trip with their role, driver first.
    pub async fn participants_of(
        &self,
        trip_id: i32,
    ) -> Result<Vec<(entity::user::Model, ParticipationRole)>, DbErr> {
        let rows = entity::prelude::Participation::find()
            .filter(entity::participation::Column::TripId.eq(trip_id))
            .find_also_related(entity::prelude::User)
            .order_by_asc(entity::participation::Column::Id)
            .all(self.db)
            .await?;

        let mut participants: Vec<_> = rows
            .into_iter()
            .filter_map(|(participation, user)| user.map(|u| (u, participation.role)))
            .collect();
        participants.sort_by_key(|(_, role)| *role != ParticipationRole::Driver);

        Ok(participants)
    }

    /// Removes a user's participation.
    ///
    /// # Returns
    /// - `Ok(true)` - Participation removed
    /// - `Ok(false)` - The user did not participate
    pub async fn delete(&self, user_id: i32, trip_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Participation::delete_many()
            .filter(entity::participation::Column::UserId.eq(user_id))
            .filter(entity::participation::Column::TripId.eq(trip_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Trips a user participates in with their role, newest departure first.
    pub async fn trips_of_user(
        &self,
        user_id: i32,
    ) -> Result<Vec<(Trip, ParticipationRole)>, DbErr> {
        let rows = entity::prelude::Participation::find()
            .filter(entity::participation::Column::UserId.eq(user_id))
            .find_also_related(entity::prelude::Trip)
            .order_by_desc(entity::trip::Column::DepartureDate)
            .order_by_desc(entity::trip::Column::DepartureTime)
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .filter_map(|(participation, trip)| {
                trip.map(|t| (Trip::from_entity(t), participation.role))
            })
            .collect())
    }
}
