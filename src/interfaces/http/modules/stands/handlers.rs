//! Stand API handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Extension, Json,
};

use super::dto::{CreateStandRequest, StandResponse, UpdateStandRequest};
use crate::domain::utilisateur::Permission;
use crate::interfaces::http::common::{ApiResult, ValidatedJson};
use crate::interfaces::http::middleware::AuthenticatedUser;
use crate::interfaces::http::state::ApiState;
use crate::shared::DomainError;

#[utoipa::path(
    get,
    path = "/api/stands",
    tag = "Stands",
    responses((status = 200, description = "All stands", body = Vec<StandResponse>)),
    security(("bearer_auth" = []))
)]
pub async fn list_stands(
    State(state): State<ApiState>,
    Extension(user): Extension<AuthenticatedUser>,
) -> ApiResult<Json<Vec<StandResponse>>> {
    user.require(Permission::ViewCatalog)?;
    let stands = state.repos.stands().find_all().await?;
    Ok(Json(stands.into_iter().map(Into::into).collect()))
}

#[utoipa::path(
    get,
    path = "/api/stands/{id}",
    tag = "Stands",
    params(("id" = i32, Path, description = "Stand id")),
    responses(
        (status = 200, description = "Stand", body = StandResponse),
        (status = 404, description = "Not found")
    ),
    security(("bearer_auth" = []))
)]
pub async fn get_stand(
    State(state): State<ApiState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(id): Path<i32>,
) -> ApiResult<Json<StandResponse>> {
    user.require(Permission::ViewCatalog)?;
    let stand = state
        .repos
        .stands()
        .find_by_id(id)
        .await?
        .ok_or_else(|| DomainError::not_found("Stand", id))?;
    Ok(Json(stand.into()))
}

#[utoipa::path(
    get,
    path = "/api/stands/zone/{zone}",
    tag = "Stands",
    params(("zone" = String, Path, description = "Zone label, matched exactly")),
    responses((status = 200, description = "Stands in the zone", body = Vec<StandResponse>)),
    security(("bearer_auth" = []))
)]
pub async fn list_stands_by_zone(
    State(state): State<ApiState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(zone): Path<String>,
) -> ApiResult<Json<Vec<StandResponse>>> {
    user.require(Permission::ViewCatalog)?;
    let stands = state.repos.stands().find_by_zone(&zone).await?;
    Ok(Json(stands.into_iter().map(Into::into).collect()))
}

#[utoipa::path(
    post,
    path = "/api/stands",
    tag = "Stands",
    request_body = CreateStandRequest,
    responses(
        (status = 200, description = "Created, statut defaults to LIBRE", body = StandResponse),
        (status = 400, description = "Invalid body or numero already taken"),
        (status = 403, description = "Insufficient permissions"),
        (status = 409, description = "Company already holds a stand")
    ),
    security(("bearer_auth" = []))
)]
pub async fn create_stand(
    State(state): State<ApiState>,
    Extension(user): Extension<AuthenticatedUser>,
    ValidatedJson(request): ValidatedJson<CreateStandRequest>,
) -> ApiResult<Json<StandResponse>> {
    user.require(Permission::ManageCatalog)?;
    let repo = state.repos.stands();
    if repo.exists_by_numero(request.numero).await? {
        return Err(DomainError::AlreadyExists {
            entity: "Stand",
            field: "numero",
            value: request.numero.to_string(),
        }
        .into());
    }
    let stand = repo.create(request.into()).await?;
    Ok(Json(stand.into()))
}

#[utoipa::path(
    put,
    path = "/api/stands/{id}",
    tag = "Stands",
    params(("id" = i32, Path, description = "Stand id")),
    request_body = UpdateStandRequest,
    responses(
        (status = 200, description = "Updated", body = StandResponse),
        (status = 404, description = "Not found"),
        (status = 409, description = "Company already holds a stand")
    ),
    security(("bearer_auth" = []))
)]
pub async fn update_stand(
    State(state): State<ApiState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(id): Path<i32>,
    ValidatedJson(request): ValidatedJson<UpdateStandRequest>,
) -> ApiResult<Json<StandResponse>> {
    user.require(Permission::ManageCatalog)?;
    let repo = state.repos.stands();
    let mut stand = repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| DomainError::not_found("Stand", id))?;
    stand.statut = request.statut;
    stand.entreprise_id = request.entreprise_id;
    let stand = repo.update(stand).await?;
    Ok(Json(stand.into()))
}

#[utoipa::path(
    delete,
    path = "/api/stands/{id}",
    tag = "Stands",
    params(("id" = i32, Path, description = "Stand id")),
    responses(
        (status = 200, description = "Deleted"),
        (status = 404, description = "Not found")
    ),
    security(("bearer_auth" = []))
)]
pub async fn delete_stand(
    State(state): State<ApiState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(id): Path<i32>,
) -> ApiResult<StatusCode> {
    user.require(Permission::ManageCatalog)?;
    state.repos.stands().delete(id).await?;
    Ok(StatusCode::OK)
}
