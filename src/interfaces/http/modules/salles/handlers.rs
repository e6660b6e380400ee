//! Salle API handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Extension, Json,
};

use super::dto::{SalleRequest, SalleResponse};
use crate::domain::salle::Salle;
use crate::domain::utilisateur::Permission;
use crate::interfaces::http::common::{ApiResult, ValidatedJson};
use crate::interfaces::http::middleware::AuthenticatedUser;
use crate::interfaces::http::state::ApiState;
use crate::shared::DomainError;

#[utoipa::path(
    get,
    path = "/api/salles",
    tag = "Salles",
    responses((status = 200, description = "All rooms", body = Vec<SalleResponse>)),
    security(("bearer_auth" = []))
)]
pub async fn list_salles(
    State(state): State<ApiState>,
    Extension(user): Extension<AuthenticatedUser>,
) -> ApiResult<Json<Vec<SalleResponse>>> {
    user.require(Permission::ViewCatalog)?;
    let salles = state.repos.salles().find_all().await?;
    Ok(Json(salles.into_iter().map(Into::into).collect()))
}

#[utoipa::path(
    get,
    path = "/api/salles/{id}",
    tag = "Salles",
    params(("id" = i32, Path, description = "Salle id")),
    responses(
        (status = 200, description = "Room", body = SalleResponse),
        (status = 404, description = "Not found")
    ),
    security(("bearer_auth" = []))
)]
pub async fn get_salle(
    State(state): State<ApiState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(id): Path<i32>,
) -> ApiResult<Json<SalleResponse>> {
    user.require(Permission::ViewCatalog)?;
    let salle = state
        .repos
        .salles()
        .find_by_id(id)
        .await?
        .ok_or_else(|| DomainError::not_found("Salle", id))?;
    Ok(Json(salle.into()))
}

#[utoipa::path(
    post,
    path = "/api/salles",
    tag = "Salles",
    request_body = SalleRequest,
    responses(
        (status = 200, description = "Created", body = SalleResponse),
        (status = 400, description = "Invalid body or numero already taken"),
        (status = 403, description = "Insufficient permissions")
    ),
    security(("bearer_auth" = []))
)]
pub async fn create_salle(
    State(state): State<ApiState>,
    Extension(user): Extension<AuthenticatedUser>,
    ValidatedJson(request): ValidatedJson<SalleRequest>,
) -> ApiResult<Json<SalleResponse>> {
    user.require(Permission::ManageCatalog)?;
    let repo = state.repos.salles();
    if repo.exists_by_numero(request.numero).await? {
        return Err(DomainError::AlreadyExists {
            entity: "Salle",
            field: "numero",
            value: request.numero.to_string(),
        }
        .into());
    }
    let salle = repo.create(request.numero, request.capacite).await?;
    Ok(Json(salle.into()))
}

#[utoipa::path(
    put,
    path = "/api/salles/{id}",
    tag = "Salles",
    params(("id" = i32, Path, description = "Salle id")),
    request_body = SalleRequest,
    responses(
        (status = 200, description = "Updated", body = SalleResponse),
        (status = 404, description = "Not found"),
        (status = 409, description = "Numero already taken")
    ),
    security(("bearer_auth" = []))
)]
pub async fn update_salle(
    State(state): State<ApiState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(id): Path<i32>,
    ValidatedJson(request): ValidatedJson<SalleRequest>,
) -> ApiResult<Json<SalleResponse>> {
    user.require(Permission::ManageCatalog)?;
    let salle = state
        .repos
        .salles()
        .update(Salle {
            id,
            numero: request.numero,
            capacite: request.capacite,
        })
        .await?;
    Ok(Json(salle.into()))
}

#[utoipa::path(
    delete,
    path = "/api/salles/{id}",
    tag = "Salles",
    params(("id" = i32, Path, description = "Salle id")),
    responses(
        (status = 200, description = "Deleted, conferences detached"),
        (status = 404, description = "Not found")
    ),
    security(("bearer_auth" = []))
)]
pub async fn delete_salle(
    State(state): State<ApiState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(id): Path<i32>,
) -> ApiResult<StatusCode> {
    user.require(Permission::ManageCatalog)?;
    state.repos.salles().delete(id).await?;
    Ok(StatusCode::OK)
}
