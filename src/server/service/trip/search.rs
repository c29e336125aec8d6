use std::collections::HashMap;

use entity::participation::ParticipationRole;

use crate::server::{
    data::{
        configuration::ConfigurationRepository, participation::ParticipationRepository,
        review::ReviewRepository, trip::TripRepository, vehicle::VehicleRepository,
    },
    error::{trip::TripError, AppError},
    model::{
        trip::{DriverSummary, Trip, TripDetails, TripSearchOutcome, TripSearchParams, TripSearchResult},
        vehicle::is_ecological,
    },
    service::trip::{driver_summary, TripService},
};

impl<'a> TripService<'a> {
    /// Every trip ordered by departure.
    pub async fn list(&self) -> Result<Vec<Trip>, AppError> {
        Ok(TripRepository::new(self.db).get_all().await?)
    }

    /// Searches bookable trips on a route and date, then applies the optional filters.
    ///
    /// Trips whose driver cannot be resolved are skipped.
    ///
    /// # Arguments
    /// - `params` - Route, date and optional filters (ecological, max price,
    ///   max duration, min driver note)
    ///
    /// # Returns
    /// - `Ok(TripSearchOutcome::Found)` - At least one trip matched
    /// - `Ok(TripSearchOutcome::Empty)` - Nothing matched; carries the next later
    ///   departure date on the route with a bookable trip, if any
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn search(&self, params: TripSearchParams) -> Result<TripSearchOutcome, AppError> {
        let trips = TripRepository::new(self.db);
        let participations = ParticipationRepository::new(self.db);
        let vehicles = VehicleRepository::new(self.db);

        let candidates = trips
            .search_available(&params.departure_place, &params.arrival_place, params.date)
            .await?;

        let mut drivers: HashMap<i32, DriverSummary> = HashMap::new();
        let mut results = Vec::new();

        for trip in candidates {
            let Some(driver_id) = participations.driver_of(trip.id).await? else {
                tracing::warn!("Trip {} has no driver, skipped from search", trip.id);
                continue;
            };

            let driver = match drivers.get(&driver_id) {
                Some(driver) => driver.clone(),
                None => {
                    let Some(driver) = driver_summary(self.db, driver_id).await? else {
                        continue;
                    };
                    drivers.insert(driver_id, driver.clone());
                    driver
                }
            };

            let ecological = vehicles
                .find_for_trip(trip.id)
                .await?
                .is_some_and(|v| is_ecological(&v.energy));

            let result = TripSearchResult {
                trip,
                driver,
                ecological,
            };
            if result.matches(&params) {
                results.push(result);
            }
        }

        if !results.is_empty() {
            return Ok(TripSearchOutcome::Found(results));
        }

        let next_date = trips
            .next_available_date(&params.departure_place, &params.arrival_place, params.date)
            .await?;

        Ok(TripSearchOutcome::Empty { next_date })
    }

    /// Everything shown on a trip's page.
    ///
    /// # Returns
    /// - `Ok(TripDetails)` - Trip with driver (when still attached), vehicle, driver
    ///   preferences and approved reviews
    /// - `Err(TripError::NotFound)` - No trip with that ID
    pub async fn details(&self, trip_id: i32) -> Result<TripDetails, AppError> {
        let Some(trip) = TripRepository::new(self.db).find_by_id(trip_id).await? else {
            return Err(TripError::NotFound(trip_id).into());
        };

        let driver_id = ParticipationRepository::new(self.db)
            .driver_of(trip.id)
            .await?;

        let (driver, preferences) = match driver_id {
            Some(driver_id) => (
                driver_summary(self.db, driver_id).await?,
                ConfigurationRepository::new(self.db)
                    .preferences_of(driver_id)
                    .await?,
            ),
            None => (None, Vec::new()),
        };

        let vehicle = VehicleRepository::new(self.db).find_for_trip(trip.id).await?;

        let reviews = ReviewRepository::new(self.db)
            .approved_for_trip(trip.id)
            .await?
            .into_iter()
            .map(|r| (r.rating, r.comment))
            .collect();

        Ok(TripDetails {
            trip,
            driver,
            vehicle,
            preferences,
            reviews,
        })
    }

    /// Trips the user participates in with their role, newest departure first.
    pub async fn trips_of_user(
        &self,
        user_id: i32,
    ) -> Result<Vec<(Trip, ParticipationRole)>, AppError> {
        Ok(ParticipationRepository::new(self.db)
            .trips_of_user(user_id)
            .await?)
    }
}
