//! Intervenant API handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Extension, Json,
};

use super::dto::{IntervenantRequest, IntervenantResponse};
use crate::domain::utilisateur::Permission;
use crate::interfaces::http::common::{ApiResult, ValidatedJson};
use crate::interfaces::http::middleware::AuthenticatedUser;
use crate::interfaces::http::state::ApiState;
use crate::shared::DomainError;

#[utoipa::path(
    get,
    path = "/api/intervenants",
    tag = "Intervenants",
    responses((status = 200, description = "All speakers", body = Vec<IntervenantResponse>)),
    security(("bearer_auth" = []))
)]
pub async fn list_intervenants(
    State(state): State<ApiState>,
    Extension(user): Extension<AuthenticatedUser>,
) -> ApiResult<Json<Vec<IntervenantResponse>>> {
    user.require(Permission::ViewCatalog)?;
    let intervenants = state.repos.intervenants().find_all().await?;
    Ok(Json(intervenants.into_iter().map(Into::into).collect()))
}

#[utoipa::path(
    get,
    path = "/api/intervenants/{id}",
    tag = "Intervenants",
    params(("id" = i32, Path, description = "Intervenant id")),
    responses(
        (status = 200, description = "Speaker", body = IntervenantResponse),
        (status = 404, description = "Not found")
    ),
    security(("bearer_auth" = []))
)]
pub async fn get_intervenant(
    State(state): State<ApiState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(id): Path<i32>,
) -> ApiResult<Json<IntervenantResponse>> {
    user.require(Permission::ViewCatalog)?;
    let intervenant = state
        .repos
        .intervenants()
        .find_by_id(id)
        .await?
        .ok_or_else(|| DomainError::not_found("Intervenant", id))?;
    Ok(Json(intervenant.into()))
}

#[utoipa::path(
    post,
    path = "/api/intervenants",
    tag = "Intervenants",
    request_body = IntervenantRequest,
    responses(
        (status = 200, description = "Created", body = IntervenantResponse),
        (status = 400, description = "Invalid body or unknown entreprise"),
        (status = 403, description = "Insufficient permissions")
    ),
    security(("bearer_auth" = []))
)]
pub async fn create_intervenant(
    State(state): State<ApiState>,
    Extension(user): Extension<AuthenticatedUser>,
    ValidatedJson(request): ValidatedJson<IntervenantRequest>,
) -> ApiResult<Json<IntervenantResponse>> {
    user.require(Permission::ManageCatalog)?;
    let intervenant = state.repos.intervenants().create(request.into()).await?;
    Ok(Json(intervenant.into()))
}

#[utoipa::path(
    put,
    path = "/api/intervenants/{id}",
    tag = "Intervenants",
    params(("id" = i32, Path, description = "Intervenant id")),
    request_body = IntervenantRequest,
    responses(
        (status = 200, description = "Updated", body = IntervenantResponse),
        (status = 404, description = "Not found")
    ),
    security(("bearer_auth" = []))
)]
pub async fn update_intervenant(
    State(state): State<ApiState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(id): Path<i32>,
    ValidatedJson(request): ValidatedJson<IntervenantRequest>,
) -> ApiResult<Json<IntervenantResponse>> {
    user.require(Permission::ManageCatalog)?;
    let intervenant = state
        .repos
        .intervenants()
        .update(request.into_intervenant(id))
        .await?;
    Ok(Json(intervenant.into()))
}

#[utoipa::path(
    delete,
    path = "/api/intervenants/{id}",
    tag = "Intervenants",
    params(("id" = i32, Path, description = "Intervenant id")),
    responses(
        (status = 200, description = "Deleted, conference links removed"),
        (status = 404, description = "Not found")
    ),
    security(("bearer_auth" = []))
)]
pub async fn delete_intervenant(
    State(state): State<ApiState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(id): Path<i32>,
) -> ApiResult<StatusCode> {
    user.require(Permission::ManageCatalog)?;
    state.repos.intervenants().delete(id).await?;
    Ok(StatusCode::OK)
}
