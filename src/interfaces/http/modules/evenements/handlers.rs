//! Evenement API handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Extension, Json,
};

use super::dto::{EvenementRequest, EvenementResponse};
use crate::domain::utilisateur::Permission;
use crate::interfaces::http::common::{ApiResult, ValidatedJson};
use crate::interfaces::http::middleware::AuthenticatedUser;
use crate::interfaces::http::state::ApiState;
use crate::shared::DomainError;

#[utoipa::path(
    get,
    path = "/api/evenements",
    tag = "Evenements",
    responses((status = 200, description = "All events", body = Vec<EvenementResponse>)),
    security(("bearer_auth" = []))
)]
pub async fn list_evenements(
    State(state): State<ApiState>,
    Extension(user): Extension<AuthenticatedUser>,
) -> ApiResult<Json<Vec<EvenementResponse>>> {
    user.require(Permission::ViewCatalog)?;
    let evenements = state.repos.evenements().find_all().await?;
    Ok(Json(evenements.into_iter().map(Into::into).collect()))
}

#[utoipa::path(
    get,
    path = "/api/evenements/{id}",
    tag = "Evenements",
    params(("id" = i32, Path, description = "Evenement id")),
    responses(
        (status = 200, description = "Event", body = EvenementResponse),
        (status = 404, description = "Not found")
    ),
    security(("bearer_auth" = []))
)]
pub async fn get_evenement(
    State(state): State<ApiState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(id): Path<i32>,
) -> ApiResult<Json<EvenementResponse>> {
    user.require(Permission::ViewCatalog)?;
    let evenement = state
        .repos
        .evenements()
        .find_by_id(id)
        .await?
        .ok_or_else(|| DomainError::not_found("Evenement", id))?;
    Ok(Json(evenement.into()))
}

#[utoipa::path(
    post,
    path = "/api/evenements",
    tag = "Evenements",
    request_body = EvenementRequest,
    responses(
        (status = 200, description = "Created", body = EvenementResponse),
        (status = 400, description = "Invalid body"),
        (status = 403, description = "Insufficient permissions")
    ),
    security(("bearer_auth" = []))
)]
pub async fn create_evenement(
    State(state): State<ApiState>,
    Extension(user): Extension<AuthenticatedUser>,
    ValidatedJson(request): ValidatedJson<EvenementRequest>,
) -> ApiResult<Json<EvenementResponse>> {
    user.require(Permission::ManageCatalog)?;
    let evenement = state.repos.evenements().create(request.into()).await?;
    Ok(Json(evenement.into()))
}

#[utoipa::path(
    put,
    path = "/api/evenements/{id}",
    tag = "Evenements",
    params(("id" = i32, Path, description = "Evenement id")),
    request_body = EvenementRequest,
    responses(
        (status = 200, description = "Updated", body = EvenementResponse),
        (status = 404, description = "Not found")
    ),
    security(("bearer_auth" = []))
)]
pub async fn update_evenement(
    State(state): State<ApiState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(id): Path<i32>,
    ValidatedJson(request): ValidatedJson<EvenementRequest>,
) -> ApiResult<Json<EvenementResponse>> {
    user.require(Permission::ManageCatalog)?;
    let evenement = state
        .repos
        .evenements()
        .update(request.into_evenement(id))
        .await?;
    Ok(Json(evenement.into()))
}

#[utoipa::path(
    delete,
    path = "/api/evenements/{id}",
    tag = "Evenements",
    params(("id" = i32, Path, description = "Evenement id")),
    responses(
        (status = 200, description = "Deleted together with its partners"),
        (status = 404, description = "Not found")
    ),
    security(("bearer_auth" = []))
)]
pub async fn delete_evenement(
    State(state): State<ApiState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(id): Path<i32>,
) -> ApiResult<StatusCode> {
    user.require(Permission::ManageCatalog)?;
    state.repos.evenements().delete(id).await?;
    Ok(StatusCode::OK)
}
