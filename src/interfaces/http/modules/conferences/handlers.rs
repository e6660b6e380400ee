//! Conference API handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Extension, Json,
};

use super::dto::{ConferenceRequest, ConferenceResponse};
use crate::domain::utilisateur::Permission;
use crate::interfaces::http::common::{ApiResult, ValidatedJson};
use crate::interfaces::http::middleware::AuthenticatedUser;
use crate::interfaces::http::state::ApiState;
use crate::shared::DomainError;

#[utoipa::path(
    get,
    path = "/api/conferences",
    tag = "Conferences",
    responses((status = 200, description = "All conferences", body = Vec<ConferenceResponse>)),
    security(("bearer_auth" = []))
)]
pub async fn list_conferences(
    State(state): State<ApiState>,
    Extension(user): Extension<AuthenticatedUser>,
) -> ApiResult<Json<Vec<ConferenceResponse>>> {
    user.require(Permission::ViewCatalog)?;
    let conferences = state.repos.conferences().find_all().await?;
    Ok(Json(conferences.into_iter().map(Into::into).collect()))
}

#[utoipa::path(
    get,
    path = "/api/conferences/{id}",
    tag = "Conferences",
    params(("id" = i32, Path, description = "Conference id")),
    responses(
        (status = 200, description = "Conference", body = ConferenceResponse),
        (status = 404, description = "Not found")
    ),
    security(("bearer_auth" = []))
)]
pub async fn get_conference(
    State(state): State<ApiState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(id): Path<i32>,
) -> ApiResult<Json<ConferenceResponse>> {
    user.require(Permission::ViewCatalog)?;
    let conference = state
        .repos
        .conferences()
        .find_by_id(id)
        .await?
        .ok_or_else(|| DomainError::not_found("Conference", id))?;
    Ok(Json(conference.into()))
}

#[utoipa::path(
    post,
    path = "/api/conferences",
    tag = "Conferences",
    request_body = ConferenceRequest,
    responses(
        (status = 200, description = "Created", body = ConferenceResponse),
        (status = 400, description = "Invalid body, unknown salle or intervenant"),
        (status = 403, description = "Insufficient permissions")
    ),
    security(("bearer_auth" = []))
)]
pub async fn create_conference(
    State(state): State<ApiState>,
    Extension(user): Extension<AuthenticatedUser>,
    ValidatedJson(request): ValidatedJson<ConferenceRequest>,
) -> ApiResult<Json<ConferenceResponse>> {
    user.require(Permission::ManageCatalog)?;
    let conference = state.repos.conferences().create(request.into()).await?;
    Ok(Json(conference.into()))
}

#[utoipa::path(
    put,
    path = "/api/conferences/{id}",
    tag = "Conferences",
    params(("id" = i32, Path, description = "Conference id")),
    request_body = ConferenceRequest,
    responses(
        (status = 200, description = "Updated", body = ConferenceResponse),
        (status = 404, description = "Not found")
    ),
    security(("bearer_auth" = []))
)]
pub async fn update_conference(
    State(state): State<ApiState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(id): Path<i32>,
    ValidatedJson(request): ValidatedJson<ConferenceRequest>,
) -> ApiResult<Json<ConferenceResponse>> {
    user.require(Permission::ManageCatalog)?;
    let conference = state
        .repos
        .conferences()
        .update(request.into_conference(id))
        .await?;
    Ok(Json(conference.into()))
}

#[utoipa::path(
    delete,
    path = "/api/conferences/{id}",
    tag = "Conferences",
    params(("id" = i32, Path, description = "Conference id")),
    responses(
        (status = 200, description = "Deleted"),
        (status = 404, description = "Not found")
    ),
    security(("bearer_auth" = []))
)]
pub async fn delete_conference(
    State(state): State<ApiState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(id): Path<i32>,
) -> ApiResult<StatusCode> {
    user.require(Permission::ManageCatalog)?;
    state.repos.conferences().delete(id).await?;
    Ok(StatusCode::OK)
}
