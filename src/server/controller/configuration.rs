use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        configuration::{
            ConfigurationDto, CreateParameterDto, ParameterDto, UpdateConfigurationDto,
            UpdateParameterDto,
        },
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::configuration::{Configuration, Parameter},
        service::configuration::{ConfigurationService, ParameterService},
        state::AppState,
    },
};

/// Tag for grouping configuration and parameter endpoints in OpenAPI documentation
pub static CONFIGURATION_TAG: &str = "configuration";

/// List the caller's configurations with their parameters.
///
/// # Access Control
/// - Authenticated; only the caller's own configurations are visible
#[utoipa::path(
    get,
    path = "/api/configuration",
    tag = CONFIGURATION_TAG,
    responses(
        (status = 200, description = "Caller's configurations", body = Vec<ConfigurationDto>),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_configurations(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &headers).require(&[]).await?;

    let configurations = ConfigurationService::new(&state.db)
        .get_all(caller.user.id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(
            configurations
                .into_iter()
                .map(Configuration::into_dto)
                .collect::<Vec<_>>(),
        ),
    ))
}

#[utoipa::path(
    get,
    path = "/api/configuration/{id}",
    tag = CONFIGURATION_TAG,
    params(("id" = i32, Path, description = "Configuration ID")),
    responses(
        (status = 200, description = "Configuration", body = ConfigurationDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Configuration not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_configuration(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &headers).require(&[]).await?;

    let configuration = ConfigurationService::new(&state.db)
        .get_by_id(caller.user.id, id)
        .await?;

    Ok((StatusCode::OK, Json(configuration.into_dto())))
}

/// Create an empty configuration for the caller.
#[utoipa::path(
    post,
    path = "/api/configuration",
    tag = CONFIGURATION_TAG,
    responses(
        (status = 201, description = "Configuration created", body = ConfigurationDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn create_configuration(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &headers).require(&[]).await?;

    let configuration = ConfigurationService::new(&state.db)
        .create(caller.user.id)
        .await?;

    Ok((StatusCode::CREATED, Json(configuration.into_dto())))
}

/// Replace every parameter of a configuration.
///
/// # Returns
/// - `200 OK` - Configuration with its new parameters
/// - `404 Not Found` - Unknown configuration or not the caller's
#[utoipa::path(
    put,
    path = "/api/configuration/{id}",
    tag = CONFIGURATION_TAG,
    params(("id" = i32, Path, description = "Configuration ID")),
    request_body = UpdateConfigurationDto,
    responses(
        (status = 200, description = "Configuration replaced", body = ConfigurationDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Configuration not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn update_configuration(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateConfigurationDto>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &headers).require(&[]).await?;

    let configuration = ConfigurationService::new(&state.db)
        .replace(caller.user.id, id, payload)
        .await?;

    Ok((StatusCode::OK, Json(configuration.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/api/configuration/{id}",
    tag = CONFIGURATION_TAG,
    params(("id" = i32, Path, description = "Configuration ID")),
    responses(
        (status = 204, description = "Configuration deleted"),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Configuration not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn delete_configuration(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &headers).require(&[]).await?;

    ConfigurationService::new(&state.db)
        .delete(caller.user.id, id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// List the parameters of all the caller's configurations.
#[utoipa::path(
    get,
    path = "/api/parametre",
    tag = CONFIGURATION_TAG,
    responses(
        (status = 200, description = "Caller's parameters", body = Vec<ParameterDto>),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_parameters(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &headers).require(&[]).await?;

    let parameters = ParameterService::new(&state.db)
        .get_all(caller.user.id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(
            parameters
                .into_iter()
                .map(Parameter::into_dto)
                .collect::<Vec<_>>(),
        ),
    ))
}

#[utoipa::path(
    get,
    path = "/api/parametre/{id}",
    tag = CONFIGURATION_TAG,
    params(("id" = i32, Path, description = "Parameter ID")),
    responses(
        (status = 200, description = "Parameter", body = ParameterDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Parameter not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_parameter(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &headers).require(&[]).await?;

    let parameter = ParameterService::new(&state.db)
        .get_by_id(caller.user.id, id)
        .await?;

    Ok((StatusCode::OK, Json(parameter.into_dto())))
}

/// Add a parameter.
///
/// Without `configurationId` the parameter goes to the caller's first configuration,
/// created if needed.
///
/// # Returns
/// - `201 Created` - Parameter created
/// - `400 Bad Request` - Property or value missing
/// - `404 Not Found` - `configurationId` unknown or not the caller's
#[utoipa::path(
    post,
    path = "/api/parametre",
    tag = CONFIGURATION_TAG,
    request_body = CreateParameterDto,
    responses(
        (status = 201, description = "Parameter created", body = ParameterDto),
        (status = 400, description = "Missing field", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Configuration not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn create_parameter(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateParameterDto>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &headers).require(&[]).await?;

    let parameter = ParameterService::new(&state.db)
        .create(caller.user.id, payload)
        .await?;

    Ok((StatusCode::CREATED, Json(parameter.into_dto())))
}

/// Update a parameter; absent fields are kept.
#[utoipa::path(
    put,
    path = "/api/parametre/{id}",
    tag = CONFIGURATION_TAG,
    params(("id" = i32, Path, description = "Parameter ID")),
    request_body = UpdateParameterDto,
    responses(
        (status = 200, description = "Parameter updated", body = ParameterDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Parameter not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn update_parameter(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateParameterDto>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &headers).require(&[]).await?;

    let parameter = ParameterService::new(&state.db)
        .update(caller.user.id, id, payload)
        .await?;

    Ok((StatusCode::OK, Json(parameter.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/api/parametre/{id}",
    tag = CONFIGURATION_TAG,
    params(("id" = i32, Path, description = "Parameter ID")),
    responses(
        (status = 204, description = "Parameter deleted"),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Parameter not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn delete_parameter(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &headers).require(&[]).await?;

    ParameterService::new(&state.db)
        .delete(caller.user.id, id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
