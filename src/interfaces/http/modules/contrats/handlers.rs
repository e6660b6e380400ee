//! Contrat API handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Extension, Json,
};

use super::dto::{
    ContratResponse, CreateContratRequest, TypeContratResponse, UpdateContratRequest,
};
use crate::domain::contrat::TypeContrat;
use crate::domain::utilisateur::Permission;
use crate::interfaces::http::common::{ApiResult, ValidatedJson};
use crate::interfaces::http::middleware::AuthenticatedUser;
use crate::interfaces::http::state::ApiState;
use crate::shared::DomainError;

#[utoipa::path(
    get,
    path = "/api/contrats",
    tag = "Contrats",
    responses((status = 200, description = "All contracts", body = Vec<ContratResponse>)),
    security(("bearer_auth" = []))
)]
pub async fn list_contrats(
    State(state): State<ApiState>,
    Extension(user): Extension<AuthenticatedUser>,
) -> ApiResult<Json<Vec<ContratResponse>>> {
    user.require(Permission::ViewCatalog)?;
    let contrats = state.repos.contrats().find_all().await?;
    Ok(Json(contrats.into_iter().map(Into::into).collect()))
}

#[utoipa::path(
    get,
    path = "/api/contrats/types",
    tag = "Contrats",
    responses((status = 200, description = "Contract tiers with base amounts", body = Vec<TypeContratResponse>)),
    security(("bearer_auth" = []))
)]
pub async fn list_contrat_types(
    Extension(user): Extension<AuthenticatedUser>,
) -> ApiResult<Json<Vec<TypeContratResponse>>> {
    user.require(Permission::ViewCatalog)?;
    Ok(Json(TypeContrat::ALL.into_iter().map(Into::into).collect()))
}

#[utoipa::path(
    get,
    path = "/api/contrats/{id}",
    tag = "Contrats",
    params(("id" = String, Path, description = "Contrat id")),
    responses(
        (status = 200, description = "Contract", body = ContratResponse),
        (status = 404, description = "Not found")
    ),
    security(("bearer_auth" = []))
)]
pub async fn get_contrat(
    State(state): State<ApiState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(id): Path<String>,
) -> ApiResult<Json<ContratResponse>> {
    user.require(Permission::ViewCatalog)?;
    let contrat = state
        .repos
        .contrats()
        .find_by_id(&id)
        .await?
        .ok_or_else(|| DomainError::not_found("Contrat", &id))?;
    Ok(Json(contrat.into()))
}

#[utoipa::path(
    post,
    path = "/api/contrats",
    tag = "Contrats",
    request_body = CreateContratRequest,
    responses(
        (status = 200, description = "Created", body = ContratResponse),
        (status = 400, description = "Invalid body"),
        (status = 409, description = "Id already taken")
    ),
    security(("bearer_auth" = []))
)]
pub async fn create_contrat(
    State(state): State<ApiState>,
    Extension(user): Extension<AuthenticatedUser>,
    ValidatedJson(request): ValidatedJson<CreateContratRequest>,
) -> ApiResult<Json<ContratResponse>> {
    user.require(Permission::ManageCatalog)?;
    let contrat = state.repos.contrats().create(request.into()).await?;
    Ok(Json(contrat.into()))
}

#[utoipa::path(
    put,
    path = "/api/contrats/{id}",
    tag = "Contrats",
    params(("id" = String, Path, description = "Contrat id")),
    request_body = UpdateContratRequest,
    responses(
        (status = 200, description = "Updated", body = ContratResponse),
        (status = 404, description = "Not found")
    ),
    security(("bearer_auth" = []))
)]
pub async fn update_contrat(
    State(state): State<ApiState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(id): Path<String>,
    ValidatedJson(request): ValidatedJson<UpdateContratRequest>,
) -> ApiResult<Json<ContratResponse>> {
    user.require(Permission::ManageCatalog)?;
    let contrat = state
        .repos
        .contrats()
        .update(request.into_contrat(id))
        .await?;
    Ok(Json(contrat.into()))
}

#[utoipa::path(
    delete,
    path = "/api/contrats/{id}",
    tag = "Contrats",
    params(("id" = String, Path, description = "Contrat id")),
    responses(
        (status = 200, description = "Deleted, partner detached"),
        (status = 404, description = "Not found")
    ),
    security(("bearer_auth" = []))
)]
pub async fn delete_contrat(
    State(state): State<ApiState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    user.require(Permission::ManageCatalog)?;
    state.repos.contrats().delete(&id).await?;
    Ok(StatusCode::OK)
}
