//! Administration: user moderation, employee accounts and platform statistics.

use std::collections::BTreeMap;

use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::admin::{CreateEmployeeDto, DailyCreditsDto, DailyTripsDto, StatsDto},
    server::{
        data::{role::RoleRepository, trip::TripRepository, user::UserRepository},
        error::{is_unique_violation, AppError},
        model::{
            booking::PLATFORM_FEE,
            user::{
                CreateUserParams, NewAccount, UserWithRoles, ROLE_ADMIN, ROLE_EMPLOYEE,
                STARTING_CREDITS,
            },
        },
        service::user::UserService,
        util::password::hash_password,
    },
};

/// Reason stored when an admin suspends a user without giving one.
const DEFAULT_SUSPEND_REASON: &str = "Suspension sans motif";

pub struct AdminService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AdminService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_users(&self) -> Result<Vec<UserWithRoles>, AppError> {
        UserService::new(self.db).get_all_with_roles().await
    }

    /// Suspends a user and revokes their token.
    ///
    /// # Returns
    /// - `Ok(())` - User suspended
    /// - `Err(AppError::NotFound)` - No user with that ID
    pub async fn suspend(&self, user_id: i32, reason: Option<String>) -> Result<(), AppError> {
        let reason = reason
            .map(|r| r.trim().to_string())
            .filter(|r| !r.is_empty())
            .unwrap_or_else(|| DEFAULT_SUSPEND_REASON.to_string());

        if !UserRepository::new(self.db)
            .suspend(user_id, reason.clone())
            .await?
        {
            return Err(user_not_found());
        }

        tracing::info!("User {} suspended: {}", user_id, reason);

        Ok(())
    }

    pub async fn reactivate(&self, user_id: i32) -> Result<(), AppError> {
        if !UserRepository::new(self.db).reactivate(user_id).await? {
            return Err(user_not_found());
        }

        tracing::info!("User {} reactivated", user_id);

        Ok(())
    }

    /// Creates an employee account.
    ///
    /// # Returns
    /// - `Ok(UserWithRoles)` - Account holding the `employe` role
    /// - `Err(AppError::BadRequest)` - Missing field or malformed email
    /// - `Err(AppError::Conflict)` - Email already registered
    pub async fn create_employee(
        &self,
        dto: CreateEmployeeDto,
    ) -> Result<UserWithRoles, AppError> {
        let account = NewAccount::from_fields(dto.nom, dto.prenom, dto.email, dto.password, None)?;

        self.create_staff(account, ROLE_EMPLOYEE).await
    }

    /// Whether at least one user holds the admin role.
    pub async fn admin_exists(&self) -> Result<bool, AppError> {
        Ok(RoleRepository::new(self.db).any_user_has(ROLE_ADMIN).await?)
    }

    /// Creates an admin account from startup credentials.
    pub async fn create_admin(&self, email: &str, password: &str) -> Result<UserWithRoles, AppError> {
        let account = NewAccount::from_fields(
            Some("Admin".to_string()),
            Some("EcoRide".to_string()),
            Some(email.to_string()),
            Some(password.to_string()),
            Some("admin".to_string()),
        )?;

        self.create_staff(account, ROLE_ADMIN).await
    }

    /// Trips and platform credits per departure day, plus the sum of all balances.
    ///
    /// Every published trip earned the platform its 2-credit fee, so the credits of a
    /// day are the day's trip count times the fee.
    pub async fn stats(&self) -> Result<StatsDto, AppError> {
        let dates = TripRepository::new(self.db).departure_dates().await?;

        let mut per_day: BTreeMap<String, i64> = BTreeMap::new();
        for date in dates {
            *per_day.entry(date.to_string()).or_insert(0) += 1;
        }

        let total_credits = UserRepository::new(self.db).total_credits().await?;

        Ok(StatsDto {
            credits: per_day
                .iter()
                .map(|(jour, total)| DailyCreditsDto {
                    jour: jour.clone(),
                    credits: total * i64::from(PLATFORM_FEE),
                })
                .collect(),
            covoiturages: per_day
                .into_iter()
                .map(|(jour, total)| DailyTripsDto { jour, total })
                .collect(),
            total_credits,
        })
    }

    async fn create_staff(
        &self,
        account: NewAccount,
        role: &str,
    ) -> Result<UserWithRoles, AppError> {
        if UserRepository::new(self.db)
            .find_by_email(&account.email)
            .await?
            .is_some()
        {
            return Err(email_taken());
        }

        let password_hash = hash_password(&account.password)?;

        let txn = self.db.begin().await?;

        let user = UserRepository::new(&txn)
            .create(CreateUserParams {
                last_name: account.last_name,
                first_name: account.first_name,
                email: account.email,
                password_hash,
                pseudo: account.pseudo,
                is_driver: false,
                is_passenger: false,
                credits: STARTING_CREDITS,
                api_token_hash: None,
            })
            .await
            .map_err(|err| {
                if is_unique_violation(&err) {
                    email_taken()
                } else {
                    err.into()
                }
            })?;

        let roles = RoleRepository::new(&txn);
        let staff_role = roles.get_or_create(role).await?;
        roles.assign(user.id, staff_role.id).await?;

        txn.commit().await?;

        tracing::info!("Created {} account {} ({})", role, user.id, user.email);

        Ok(UserWithRoles {
            user,
            roles: vec![role.to_string()],
        })
    }
}

fn user_not_found() -> AppError {
    AppError::NotFound("Utilisateur introuvable".to_string())
}

fn email_taken() -> AppError {
    AppError::Conflict("Cet email est déjà utilisé".to_string())
}
