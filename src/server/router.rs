use axum::{
    routing::{delete, get, post, put},
    Router,
};
use tower_governor::{governor::GovernorConfigBuilder, GovernorLayer};
use utoipa::{
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    Modify, OpenApi,
};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    config::Config,
    controller::{
        admin, auth, brand, configuration, history, profile, review, role, trip, vehicle,
    },
    error::AppError,
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(title = "EcoRide API", description = "Carpooling marketplace"),
    paths(
        auth::register,
        auth::login,
        auth::logout,
        auth::reset_password,
        auth::reset_password_confirm,
        trip::list_trips,
        trip::search_trips,
        trip::filter_trips,
        trip::trip_details,
        trip::my_trips,
        trip::create_trip,
        trip::participate,
        trip::cancel_trip,
        trip::update_trip_status,
        vehicle::get_my_vehicles,
        vehicle::delete_vehicle,
        brand::get_brands,
        brand::get_brand,
        brand::create_brand,
        brand::update_brand,
        brand::delete_brand,
        role::get_roles,
        role::get_role,
        role::create_role,
        role::update_role,
        role::delete_role,
        configuration::get_configurations,
        configuration::get_configuration,
        configuration::create_configuration,
        configuration::update_configuration,
        configuration::delete_configuration,
        configuration::get_parameters,
        configuration::get_parameter,
        configuration::create_parameter,
        configuration::update_parameter,
        configuration::delete_parameter,
        profile::get_profile,
        profile::update_profile,
        profile::update_status,
        profile::register_driver,
        review::create_review,
        review::get_driver_reviews,
        review::get_pending_reviews,
        review::approve_review,
        review::reject_review,
        admin::get_users,
        admin::suspend_user,
        admin::reactivate_user,
        admin::create_employee,
        admin::get_stats,
        history::get_collections,
        history::get_confirmations,
        history::get_participations,
        history::get_history,
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "auth", description = "Registration, login and password reset"),
        (name = "covoiturage", description = "Trips, bookings and cancellations"),
        (name = "voitures", description = "Vehicles of the caller"),
        (name = "marque", description = "Vehicle brands"),
        (name = "roles", description = "Roles"),
        (name = "configuration", description = "User configurations and parameters"),
        (name = "profile", description = "Profile and driver registration"),
        (name = "avis", description = "Reviews and moderation"),
        (name = "admin", description = "Administration and statistics"),
        (name = "mongo", description = "Booking records and trip history"),
    )
)]
pub struct ApiDoc;

/// Registers the `bearer` scheme referenced by protected endpoints.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer",
                SecurityScheme::Http(HttpBuilder::new().scheme(HttpAuthScheme::Bearer).build()),
            );
        }
    }
}

/// Request budget per client IP on the authentication routes.
#[derive(Debug, Clone, Copy)]
pub struct RateLimit {
    pub per_second: u64,
    pub burst: u32,
}

impl RateLimit {
    pub fn from_config(config: &Config) -> Self {
        Self {
            per_second: config.rate_limit_per_second,
            burst: config.rate_limit_burst,
        }
    }
}

/// Builds the API router with Swagger UI.
///
/// The rate limiter keys on the peer IP, so a limited router must be served with
/// `into_make_service_with_connect_info::<SocketAddr>()`.
///
/// # Arguments
/// - `rate_limit` - Budget applied to the authentication routes; `None` disables limiting
///
/// # Returns
/// - `Ok(Router)` - Router awaiting its `AppState`
/// - `Err(AppError::InternalError)` - Rate limit of zero
pub fn router(rate_limit: Option<RateLimit>) -> Result<Router<AppState>, AppError> {
    let mut auth_routes = Router::new()
        .route("/api/register", post(auth::register))
        .route("/api/login", post(auth::login))
        .route("/api/logout", post(auth::logout))
        .route("/api/reset-password", post(auth::reset_password))
        .route(
            "/api/reset-password/confirm",
            post(auth::reset_password_confirm),
        );

    if let Some(limit) = rate_limit {
        let config = GovernorConfigBuilder::default()
            .per_second(limit.per_second)
            .burst_size(limit.burst)
            .finish()
            .ok_or_else(|| {
                AppError::InternalError(
                    "Rate limit per second and burst must both be positive".to_string(),
                )
            })?;

        auth_routes = auth_routes.layer(GovernorLayer::new(config));
    }

    let api_routes = Router::new()
        // Trips
        .route("/api/covoiturage", get(trip::list_trips))
        .route("/api/covoiturage/search", get(trip::search_trips))
        .route("/api/covoiturage/filter", get(trip::filter_trips))
        .route("/api/covoiturage/details/{id}", get(trip::trip_details))
        .route("/api/covoiturage/mes-covoiturages", get(trip::my_trips))
        .route("/api/covoiturage/creer", post(trip::create_trip))
        .route("/api/covoiturage/{id}/participer", post(trip::participate))
        .route("/api/covoiturage/{id}/annuler", delete(trip::cancel_trip))
        .route("/api/covoiturage/{id}/statut", put(trip::update_trip_status))
        // Vehicles
        .route("/api/voitures/utilisateur", get(vehicle::get_my_vehicles))
        .route("/api/voitures/{id}", delete(vehicle::delete_vehicle))
        // Brands
        .route(
            "/api/marque",
            get(brand::get_brands).post(brand::create_brand),
        )
        .route(
            "/api/marque/{id}",
            get(brand::get_brand)
                .put(brand::update_brand)
                .delete(brand::delete_brand),
        )
        // Roles
        .route("/api/roles", get(role::get_roles).post(role::create_role))
        .route(
            "/api/roles/{id}",
            get(role::get_role)
                .put(role::update_role)
                .delete(role::delete_role),
        )
        // Configurations & parameters
        .route(
            "/api/configuration",
            get(configuration::get_configurations).post(configuration::create_configuration),
        )
        .route(
            "/api/configuration/{id}",
            get(configuration::get_configuration)
                .put(configuration::update_configuration)
                .delete(configuration::delete_configuration),
        )
        .route(
            "/api/parametre",
            get(configuration::get_parameters).post(configuration::create_parameter),
        )
        .route(
            "/api/parametre/{id}",
            get(configuration::get_parameter)
                .put(configuration::update_parameter)
                .delete(configuration::delete_parameter),
        )
        // Profile
        .route(
            "/api/profile/me",
            get(profile::get_profile).put(profile::update_profile),
        )
        .route("/api/profile/status", post(profile::update_status))
        .route(
            "/api/profile/register-chauffeur",
            post(profile::register_driver),
        )
        // Reviews & moderation
        .route("/api/avis/covoiturage/{id}", post(review::create_review))
        .route("/api/avis/chauffeur/{id}", get(review::get_driver_reviews))
        .route(
            "/api/employe/dashboard-data",
            get(review::get_pending_reviews),
        )
        .route(
            "/api/employe/avis/{id}/approuver",
            post(review::approve_review),
        )
        .route("/api/employe/avis/{id}/rejeter", post(review::reject_review))
        // Admin
        .route("/api/admin/utilisateurs", get(admin::get_users))
        .route(
            "/api/admin/utilisateur/suspend/{id}",
            post(admin::suspend_user),
        )
        .route(
            "/api/admin/utilisateur/reactivate/{id}",
            post(admin::reactivate_user),
        )
        .route("/api/admin/employes", post(admin::create_employee))
        .route("/api/stats", get(admin::get_stats))
        // Document store
        .route("/api/mongo/test", get(history::get_collections))
        .route(
            "/api/mongo/confirmation_covoiturage",
            get(history::get_confirmations),
        )
        .route("/api/mongo/participations", get(history::get_participations))
        .route(
            "/api/mongo/historique_covoiturage",
            get(history::get_history),
        );

    Ok(Router::new()
        .merge(auth_routes)
        .merge(api_routes)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi())))
}
