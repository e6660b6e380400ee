//! Entreprise API handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Extension, Json,
};

use super::dto::{EntrepriseRequest, EntrepriseResponse};
use crate::domain::entreprise::Entreprise;
use crate::domain::utilisateur::Permission;
use crate::interfaces::http::common::{ApiResult, ValidatedJson};
use crate::interfaces::http::middleware::AuthenticatedUser;
use crate::interfaces::http::state::ApiState;
use crate::shared::DomainError;

#[utoipa::path(
    get,
    path = "/api/entreprises",
    tag = "Entreprises",
    responses((status = 200, description = "All companies", body = Vec<EntrepriseResponse>)),
    security(("bearer_auth" = []))
)]
pub async fn list_entreprises(
    State(state): State<ApiState>,
    Extension(user): Extension<AuthenticatedUser>,
) -> ApiResult<Json<Vec<EntrepriseResponse>>> {
    user.require(Permission::ViewCatalog)?;
    let entreprises = state.repos.entreprises().find_all().await?;
    Ok(Json(entreprises.into_iter().map(Into::into).collect()))
}

#[utoipa::path(
    get,
    path = "/api/entreprises/{id}",
    tag = "Entreprises",
    params(("id" = i32, Path, description = "Entreprise id")),
    responses(
        (status = 200, description = "Company", body = EntrepriseResponse),
        (status = 404, description = "Not found")
    ),
    security(("bearer_auth" = []))
)]
pub async fn get_entreprise(
    State(state): State<ApiState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(id): Path<i32>,
) -> ApiResult<Json<EntrepriseResponse>> {
    user.require(Permission::ViewCatalog)?;
    let entreprise = state
        .repos
        .entreprises()
        .find_by_id(id)
        .await?
        .ok_or_else(|| DomainError::not_found("Entreprise", id))?;
    Ok(Json(entreprise.into()))
}

#[utoipa::path(
    post,
    path = "/api/entreprises",
    tag = "Entreprises",
    request_body = EntrepriseRequest,
    responses(
        (status = 200, description = "Created", body = EntrepriseResponse),
        (status = 400, description = "Invalid body or name already taken"),
        (status = 403, description = "Insufficient permissions")
    ),
    security(("bearer_auth" = []))
)]
pub async fn create_entreprise(
    State(state): State<ApiState>,
    Extension(user): Extension<AuthenticatedUser>,
    ValidatedJson(request): ValidatedJson<EntrepriseRequest>,
) -> ApiResult<Json<EntrepriseResponse>> {
    user.require(Permission::ManageCatalog)?;
    let repo = state.repos.entreprises();
    if repo.exists_by_nom(&request.nom).await? {
        return Err(DomainError::AlreadyExists {
            entity: "Entreprise",
            field: "nom",
            value: request.nom,
        }
        .into());
    }
    let entreprise = repo.create(&request.nom).await?;
    Ok(Json(entreprise.into()))
}

#[utoipa::path(
    put,
    path = "/api/entreprises/{id}",
    tag = "Entreprises",
    params(("id" = i32, Path, description = "Entreprise id")),
    request_body = EntrepriseRequest,
    responses(
        (status = 200, description = "Updated", body = EntrepriseResponse),
        (status = 404, description = "Not found"),
        (status = 409, description = "Name already taken")
    ),
    security(("bearer_auth" = []))
)]
pub async fn update_entreprise(
    State(state): State<ApiState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(id): Path<i32>,
    ValidatedJson(request): ValidatedJson<EntrepriseRequest>,
) -> ApiResult<Json<EntrepriseResponse>> {
    user.require(Permission::ManageCatalog)?;
    let entreprise = state
        .repos
        .entreprises()
        .update(Entreprise {
            id,
            nom: request.nom,
        })
        .await?;
    Ok(Json(entreprise.into()))
}

#[utoipa::path(
    delete,
    path = "/api/entreprises/{id}",
    tag = "Entreprises",
    params(("id" = i32, Path, description = "Entreprise id")),
    responses(
        (status = 200, description = "Deleted; stands detached, speakers removed"),
        (status = 404, description = "Not found")
    ),
    security(("bearer_auth" = []))
)]
pub async fn delete_entreprise(
    State(state): State<ApiState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(id): Path<i32>,
) -> ApiResult<StatusCode> {
    user.require(Permission::ManageCatalog)?;
    state.repos.entreprises().delete(id).await?;
    Ok(StatusCode::OK)
}
