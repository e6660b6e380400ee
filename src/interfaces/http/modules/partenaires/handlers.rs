//! Partenaire API handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Extension, Json,
};

use super::dto::{PartenaireRequest, PartenaireResponse};
use crate::domain::utilisateur::Permission;
use crate::interfaces::http::common::{ApiResult, ValidatedJson};
use crate::interfaces::http::middleware::AuthenticatedUser;
use crate::interfaces::http::state::ApiState;
use crate::shared::DomainError;

#[utoipa::path(
    get,
    path = "/api/partenaires",
    tag = "Partenaires",
    responses((status = 200, description = "All partners", body = Vec<PartenaireResponse>)),
    security(("bearer_auth" = []))
)]
pub async fn list_partenaires(
    State(state): State<ApiState>,
    Extension(user): Extension<AuthenticatedUser>,
) -> ApiResult<Json<Vec<PartenaireResponse>>> {
    user.require(Permission::ViewCatalog)?;
    let partenaires = state.repos.partenaires().find_all().await?;
    Ok(Json(partenaires.into_iter().map(Into::into).collect()))
}

#[utoipa::path(
    get,
    path = "/api/partenaires/{id}",
    tag = "Partenaires",
    params(("id" = i32, Path, description = "Partenaire id")),
    responses(
        (status = 200, description = "Partner", body = PartenaireResponse),
        (status = 404, description = "Not found")
    ),
    security(("bearer_auth" = []))
)]
pub async fn get_partenaire(
    State(state): State<ApiState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(id): Path<i32>,
) -> ApiResult<Json<PartenaireResponse>> {
    user.require(Permission::ViewCatalog)?;
    let partenaire = state
        .repos
        .partenaires()
        .find_by_id(id)
        .await?
        .ok_or_else(|| DomainError::not_found("Partenaire", id))?;
    Ok(Json(partenaire.into()))
}

#[utoipa::path(
    post,
    path = "/api/partenaires",
    tag = "Partenaires",
    request_body = PartenaireRequest,
    responses(
        (status = 200, description = "Created", body = PartenaireResponse),
        (status = 400, description = "Invalid body, unknown contrat or evenement"),
        (status = 409, description = "Contrat already bound to another partner")
    ),
    security(("bearer_auth" = []))
)]
pub async fn create_partenaire(
    State(state): State<ApiState>,
    Extension(user): Extension<AuthenticatedUser>,
    ValidatedJson(request): ValidatedJson<PartenaireRequest>,
) -> ApiResult<Json<PartenaireResponse>> {
    user.require(Permission::ManageCatalog)?;
    let partenaire = state.repos.partenaires().create(request.into()).await?;
    Ok(Json(partenaire.into()))
}

#[utoipa::path(
    put,
    path = "/api/partenaires/{id}",
    tag = "Partenaires",
    params(("id" = i32, Path, description = "Partenaire id")),
    request_body = PartenaireRequest,
    responses(
        (status = 200, description = "Updated", body = PartenaireResponse),
        (status = 404, description = "Not found")
    ),
    security(("bearer_auth" = []))
)]
pub async fn update_partenaire(
    State(state): State<ApiState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(id): Path<i32>,
    ValidatedJson(request): ValidatedJson<PartenaireRequest>,
) -> ApiResult<Json<PartenaireResponse>> {
    user.require(Permission::ManageCatalog)?;
    let partenaire = state
        .repos
        .partenaires()
        .update(request.into_partenaire(id))
        .await?;
    Ok(Json(partenaire.into()))
}

#[utoipa::path(
    delete,
    path = "/api/partenaires/{id}",
    tag = "Partenaires",
    params(("id" = i32, Path, description = "Partenaire id")),
    responses(
        (status = 200, description = "Deleted together with its contract"),
        (status = 404, description = "Not found")
    ),
    security(("bearer_auth" = []))
)]
pub async fn delete_partenaire(
    State(state): State<ApiState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(id): Path<i32>,
) -> ApiResult<StatusCode> {
    user.require(Permission::ManageCatalog)?;
    state.repos.partenaires().delete(id).await?;
    Ok(StatusCode::OK)
}
