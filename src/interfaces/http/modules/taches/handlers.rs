//! Tache API handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Extension, Json,
};
use tracing::info;

use super::dto::{CreateTacheRequest, TacheResponse, UpdateTacheRequest};
use crate::domain::utilisateur::Permission;
use crate::interfaces::http::common::{ApiResult, ValidatedJson};
use crate::interfaces::http::middleware::AuthenticatedUser;
use crate::interfaces::http::state::ApiState;
use crate::shared::DomainError;

#[utoipa::path(
    get,
    path = "/api/taches",
    tag = "Taches",
    responses((status = 200, description = "All tasks", body = Vec<TacheResponse>)),
    security(("bearer_auth" = []))
)]
pub async fn list_taches(
    State(state): State<ApiState>,
    Extension(user): Extension<AuthenticatedUser>,
) -> ApiResult<Json<Vec<TacheResponse>>> {
    user.require(Permission::ViewTasks)?;
    let taches = state.repos.taches().find_all().await?;
    Ok(Json(taches.into_iter().map(Into::into).collect()))
}

#[utoipa::path(
    get,
    path = "/api/taches/{id}",
    tag = "Taches",
    params(("id" = i32, Path, description = "Tache id")),
    responses(
        (status = 200, description = "Task", body = TacheResponse),
        (status = 404, description = "Not found")
    ),
    security(("bearer_auth" = []))
)]
pub async fn get_tache(
    State(state): State<ApiState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(id): Path<i32>,
) -> ApiResult<Json<TacheResponse>> {
    user.require(Permission::ViewTasks)?;
    let tache = state
        .repos
        .taches()
        .find_by_id(id)
        .await?
        .ok_or_else(|| DomainError::not_found("Tache", id))?;
    Ok(Json(tache.into()))
}

#[utoipa::path(
    post,
    path = "/api/taches",
    tag = "Taches",
    request_body = CreateTacheRequest,
    responses(
        (status = 200, description = "Created, statut EN_ATTENTE and priorite MEDIUM by default", body = TacheResponse),
        (status = 400, description = "Invalid body or unknown responsable"),
        (status = 403, description = "Insufficient permissions")
    ),
    security(("bearer_auth" = []))
)]
pub async fn create_tache(
    State(state): State<ApiState>,
    Extension(user): Extension<AuthenticatedUser>,
    ValidatedJson(request): ValidatedJson<CreateTacheRequest>,
) -> ApiResult<Json<TacheResponse>> {
    user.require(Permission::ManageTasks)?;
    let tache = state.repos.taches().create(request.into()).await?;
    Ok(Json(tache.into()))
}

#[utoipa::path(
    put,
    path = "/api/taches/{id}",
    tag = "Taches",
    params(("id" = i32, Path, description = "Tache id")),
    request_body = UpdateTacheRequest,
    responses(
        (status = 200, description = "Updated", body = TacheResponse),
        (status = 404, description = "Not found")
    ),
    security(("bearer_auth" = []))
)]
pub async fn update_tache(
    State(state): State<ApiState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(id): Path<i32>,
    ValidatedJson(request): ValidatedJson<UpdateTacheRequest>,
) -> ApiResult<Json<TacheResponse>> {
    user.require(Permission::UpdateTasks)?;
    let repo = state.repos.taches();
    let mut tache = repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| DomainError::not_found("Tache", id))?;
    tache.description = request.description;
    tache.statut = request.statut;
    tache.date_limite = request.date_limite;
    tache.priorite = request.priorite;

    let tache = repo.update(tache).await?;
    info!(tache_id = id, statut = %tache.statut, by = user.user_id, "Task updated");
    Ok(Json(tache.into()))
}

#[utoipa::path(
    delete,
    path = "/api/taches/{id}",
    tag = "Taches",
    params(("id" = i32, Path, description = "Tache id")),
    responses(
        (status = 200, description = "Deleted"),
        (status = 404, description = "Not found")
    ),
    security(("bearer_auth" = []))
)]
pub async fn delete_tache(
    State(state): State<ApiState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(id): Path<i32>,
) -> ApiResult<StatusCode> {
    user.require(Permission::ManageTasks)?;
    state.repos.taches().delete(id).await?;
    Ok(StatusCode::OK)
}
