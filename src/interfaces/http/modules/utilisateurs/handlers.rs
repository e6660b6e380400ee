//! Utilisateur API handlers (administrators only)

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Extension, Json,
};

use super::dto::{CreateUtilisateurRequest, UpdateUtilisateurRequest, UtilisateurResponse};
use crate::domain::utilisateur::Permission;
use crate::interfaces::http::common::{ApiResult, ValidatedJson};
use crate::interfaces::http::middleware::AuthenticatedUser;
use crate::interfaces::http::state::ApiState;
use crate::shared::DomainError;

#[utoipa::path(
    get,
    path = "/api/utilisateurs",
    tag = "Utilisateurs",
    responses(
        (status = 200, description = "All accounts", body = Vec<UtilisateurResponse>),
        (status = 403, description = "Administrators only")
    ),
    security(("bearer_auth" = []))
)]
pub async fn list_utilisateurs(
    State(state): State<ApiState>,
    Extension(user): Extension<AuthenticatedUser>,
) -> ApiResult<Json<Vec<UtilisateurResponse>>> {
    user.require(Permission::ManageUsers)?;
    let utilisateurs = state.repos.utilisateurs().find_all().await?;
    Ok(Json(utilisateurs.into_iter().map(Into::into).collect()))
}

#[utoipa::path(
    get,
    path = "/api/utilisateurs/{id}",
    tag = "Utilisateurs",
    params(("id" = i32, Path, description = "Utilisateur id")),
    responses(
        (status = 200, description = "Account", body = UtilisateurResponse),
        (status = 404, description = "Not found")
    ),
    security(("bearer_auth" = []))
)]
pub async fn get_utilisateur(
    State(state): State<ApiState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(id): Path<i32>,
) -> ApiResult<Json<UtilisateurResponse>> {
    user.require(Permission::ManageUsers)?;
    let utilisateur = state
        .repos
        .utilisateurs()
        .find_by_id(id)
        .await?
        .ok_or_else(|| DomainError::not_found("Utilisateur", id))?;
    Ok(Json(utilisateur.into()))
}

#[utoipa::path(
    post,
    path = "/api/utilisateurs",
    tag = "Utilisateurs",
    request_body = CreateUtilisateurRequest,
    responses(
        (status = 200, description = "Created", body = UtilisateurResponse),
        (status = 400, description = "Invalid body or email already taken"),
        (status = 403, description = "Administrators only")
    ),
    security(("bearer_auth" = []))
)]
pub async fn create_utilisateur(
    State(state): State<ApiState>,
    Extension(user): Extension<AuthenticatedUser>,
    ValidatedJson(request): ValidatedJson<CreateUtilisateurRequest>,
) -> ApiResult<Json<UtilisateurResponse>> {
    user.require(Permission::ManageUsers)?;
    let utilisateur = state.auth.create_user(request.into()).await?;
    Ok(Json(utilisateur.into()))
}

#[utoipa::path(
    put,
    path = "/api/utilisateurs/{id}",
    tag = "Utilisateurs",
    params(("id" = i32, Path, description = "Utilisateur id")),
    request_body = UpdateUtilisateurRequest,
    responses(
        (status = 200, description = "Updated", body = UtilisateurResponse),
        (status = 404, description = "Not found"),
        (status = 409, description = "Email already taken")
    ),
    security(("bearer_auth" = []))
)]
pub async fn update_utilisateur(
    State(state): State<ApiState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(id): Path<i32>,
    ValidatedJson(request): ValidatedJson<UpdateUtilisateurRequest>,
) -> ApiResult<Json<UtilisateurResponse>> {
    user.require(Permission::ManageUsers)?;
    let mut utilisateur = state
        .repos
        .utilisateurs()
        .find_by_id(id)
        .await?
        .ok_or_else(|| DomainError::not_found("Utilisateur", id))?;
    utilisateur.nom = request.nom;
    utilisateur.prenom = request.prenom;
    utilisateur.email = request.email;
    utilisateur.role = request.role;

    let utilisateur = state
        .auth
        .update_user(utilisateur, request.mot_de_passe.as_deref())
        .await?;
    Ok(Json(utilisateur.into()))
}

#[utoipa::path(
    delete,
    path = "/api/utilisateurs/{id}",
    tag = "Utilisateurs",
    params(("id" = i32, Path, description = "Utilisateur id")),
    responses(
        (status = 200, description = "Deleted, assigned tasks detached"),
        (status = 404, description = "Not found")
    ),
    security(("bearer_auth" = []))
)]
pub async fn delete_utilisateur(
    State(state): State<ApiState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(id): Path<i32>,
) -> ApiResult<StatusCode> {
    user.require(Permission::ManageUsers)?;
    state.repos.utilisateurs().delete(id).await?;
    Ok(StatusCode::OK)
}
