//! API Router with Swagger UI

use std::sync::Arc;

use axum::{
    middleware,
    routing::{get, post, put},
    Router,
};
use metrics_exporter_prometheus::PrometheusHandle;
use sea_orm::DatabaseConnection;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};
use utoipa_swagger_ui::SwaggerUi;

use super::middleware::{auth_middleware, AuthState};
use super::modules::{
    auth, conferences, contrats, entreprises, evenements, health, intervenants, metrics,
    partenaires, request_id, salles, stands, taches, utilisateurs,
};
use super::state::ApiState;
use crate::application::AuthService;
use crate::domain::contrat::TypeContrat;
use crate::domain::stand::{StatutStand, TailleStand};
use crate::domain::tache::{PrioriteTache, StatutTache};
use crate::domain::utilisateur::Role;
use crate::domain::RepositoryProvider;

/// Security scheme modifier for OpenAPI
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("Token returned by POST /api/auth/login"))
                        .build(),
                ),
            );
        }
    }
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        auth::login,
        auth::get_current_user,
        auth::change_password,
        entreprises::list_entreprises,
        entreprises::get_entreprise,
        entreprises::create_entreprise,
        entreprises::update_entreprise,
        entreprises::delete_entreprise,
        stands::list_stands,
        stands::get_stand,
        stands::list_stands_by_zone,
        stands::create_stand,
        stands::update_stand,
        stands::delete_stand,
        intervenants::list_intervenants,
        intervenants::get_intervenant,
        intervenants::create_intervenant,
        intervenants::update_intervenant,
        intervenants::delete_intervenant,
        salles::list_salles,
        salles::get_salle,
        salles::create_salle,
        salles::update_salle,
        salles::delete_salle,
        conferences::list_conferences,
        conferences::get_conference,
        conferences::create_conference,
        conferences::update_conference,
        conferences::delete_conference,
        evenements::list_evenements,
        evenements::get_evenement,
        evenements::create_evenement,
        evenements::update_evenement,
        evenements::delete_evenement,
        partenaires::list_partenaires,
        partenaires::get_partenaire,
        partenaires::create_partenaire,
        partenaires::update_partenaire,
        partenaires::delete_partenaire,
        contrats::list_contrats,
        contrats::list_contrat_types,
        contrats::get_contrat,
        contrats::create_contrat,
        contrats::update_contrat,
        contrats::delete_contrat,
        taches::list_taches,
        taches::get_tache,
        taches::create_tache,
        taches::update_tache,
        taches::delete_tache,
        utilisateurs::list_utilisateurs,
        utilisateurs::get_utilisateur,
        utilisateurs::create_utilisateur,
        utilisateurs::update_utilisateur,
        utilisateurs::delete_utilisateur,
    ),
    components(
        schemas(
            // Enums
            Role,
            StatutStand,
            TailleStand,
            TypeContrat,
            StatutTache,
            PrioriteTache,
            // Health
            health::HealthResponse,
            health::ComponentHealth,
            // Auth
            auth::LoginRequest,
            auth::LoginResponse,
            auth::ChangePasswordRequest,
            // Catalog
            entreprises::EntrepriseRequest,
            entreprises::EntrepriseResponse,
            stands::CreateStandRequest,
            stands::UpdateStandRequest,
            stands::StandResponse,
            intervenants::IntervenantRequest,
            intervenants::IntervenantResponse,
            salles::SalleRequest,
            salles::SalleResponse,
            conferences::ConferenceRequest,
            conferences::ConferenceResponse,
            evenements::EvenementRequest,
            evenements::EvenementResponse,
            partenaires::PartenaireRequest,
            partenaires::PartenaireResponse,
            contrats::CreateContratRequest,
            contrats::UpdateContratRequest,
            contrats::ContratResponse,
            contrats::TypeContratResponse,
            // Logistics
            taches::CreateTacheRequest,
            taches::UpdateTacheRequest,
            taches::TacheResponse,
            utilisateurs::CreateUtilisateurRequest,
            utilisateurs::UpdateUtilisateurRequest,
            utilisateurs::UtilisateurResponse,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Health", description = "Server health check"),
        (name = "Authentication", description = "Login (JWT), profile, password change"),
        (name = "Entreprises", description = "Exhibiting companies"),
        (name = "Stands", description = "Exhibition booths"),
        (name = "Intervenants", description = "Conference speakers"),
        (name = "Salles", description = "Conference rooms"),
        (name = "Conferences", description = "Talks with room and speakers"),
        (name = "Evenements", description = "Events"),
        (name = "Partenaires", description = "Sponsors attached to events"),
        (name = "Contrats", description = "Sponsorship contracts"),
        (name = "Taches", description = "Logistics tasks"),
        (name = "Utilisateurs", description = "Staff accounts (administrators only)"),
    ),
    info(
        title = "Forum EMI API",
        version = "1.0.0",
        description = "Administrative backend of the Forum EMI: companies, booths, speakers, conferences, partners and logistics",
        license(name = "MIT")
    )
)]
pub struct ApiDoc;

/// Create the API router with all routes
pub fn create_api_router(
    repos: Arc<dyn RepositoryProvider>,
    auth_service: Arc<AuthService>,
    db: DatabaseConnection,
    metrics_handle: PrometheusHandle,
) -> Router {
    let auth_state = AuthState {
        jwt_config: auth_service.jwt_config().clone(),
    };
    let api_state = ApiState::new(repos, auth_service);
    let require_auth = || middleware::from_fn_with_state(auth_state.clone(), auth_middleware);

    // Login is public; `route_layer` only covers the routes above it
    let auth_routes = Router::new()
        .route("/me", get(auth::get_current_user))
        .route("/change-password", put(auth::change_password))
        .route_layer(require_auth())
        .route("/login", post(auth::login))
        .with_state(api_state.clone());

    let entreprise_routes = Router::new()
        .route(
            "/",
            get(entreprises::list_entreprises).post(entreprises::create_entreprise),
        )
        .route(
            "/{id}",
            get(entreprises::get_entreprise)
                .put(entreprises::update_entreprise)
                .delete(entreprises::delete_entreprise),
        )
        .layer(require_auth())
        .with_state(api_state.clone());

    let stand_routes = Router::new()
        .route("/", get(stands::list_stands).post(stands::create_stand))
        .route("/zone/{zone}", get(stands::list_stands_by_zone))
        .route(
            "/{id}",
            get(stands::get_stand)
                .put(stands::update_stand)
                .delete(stands::delete_stand),
        )
        .layer(require_auth())
        .with_state(api_state.clone());

    let intervenant_routes = Router::new()
        .route(
            "/",
            get(intervenants::list_intervenants).post(intervenants::create_intervenant),
        )
        .route(
            "/{id}",
            get(intervenants::get_intervenant)
                .put(intervenants::update_intervenant)
                .delete(intervenants::delete_intervenant),
        )
        .layer(require_auth())
        .with_state(api_state.clone());

    let salle_routes = Router::new()
        .route("/", get(salles::list_salles).post(salles::create_salle))
        .route(
            "/{id}",
            get(salles::get_salle)
                .put(salles::update_salle)
                .delete(salles::delete_salle),
        )
        .layer(require_auth())
        .with_state(api_state.clone());

    let conference_routes = Router::new()
        .route(
            "/",
            get(conferences::list_conferences).post(conferences::create_conference),
        )
        .route(
            "/{id}",
            get(conferences::get_conference)
                .put(conferences::update_conference)
                .delete(conferences::delete_conference),
        )
        .layer(require_auth())
        .with_state(api_state.clone());

    let evenement_routes = Router::new()
        .route(
            "/",
            get(evenements::list_evenements).post(evenements::create_evenement),
        )
        .route(
            "/{id}",
            get(evenements::get_evenement)
                .put(evenements::update_evenement)
                .delete(evenements::delete_evenement),
        )
        .layer(require_auth())
        .with_state(api_state.clone());

    let partenaire_routes = Router::new()
        .route(
            "/",
            get(partenaires::list_partenaires).post(partenaires::create_partenaire),
        )
        .route(
            "/{id}",
            get(partenaires::get_partenaire)
                .put(partenaires::update_partenaire)
                .delete(partenaires::delete_partenaire),
        )
        .layer(require_auth())
        .with_state(api_state.clone());

    let contrat_routes = Router::new()
        .route("/", get(contrats::list_contrats).post(contrats::create_contrat))
        .route("/types", get(contrats::list_contrat_types))
        .route(
            "/{id}",
            get(contrats::get_contrat)
                .put(contrats::update_contrat)
                .delete(contrats::delete_contrat),
        )
        .layer(require_auth())
        .with_state(api_state.clone());

    let tache_routes = Router::new()
        .route("/", get(taches::list_taches).post(taches::create_tache))
        .route(
            "/{id}",
            get(taches::get_tache)
                .put(taches::update_tache)
                .delete(taches::delete_tache),
        )
        .layer(require_auth())
        .with_state(api_state.clone());

    let utilisateur_routes = Router::new()
        .route(
            "/",
            get(utilisateurs::list_utilisateurs).post(utilisateurs::create_utilisateur),
        )
        .route(
            "/{id}",
            get(utilisateurs::get_utilisateur)
                .put(utilisateurs::update_utilisateur)
                .delete(utilisateurs::delete_utilisateur),
        )
        .layer(require_auth())
        .with_state(api_state);

    let health_routes = Router::new()
        .route("/health", get(health::health_check))
        .with_state(health::HealthState::new(db));

    let metrics_routes = Router::new()
        .route("/metrics", get(metrics::prometheus_metrics))
        .with_state(metrics::MetricsState {
            handle: metrics_handle,
        });

    let swagger_routes = SwaggerUi::new("/docs").url("/api-doc/openapi.json", ApiDoc::openapi());

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .merge(swagger_routes)
        .merge(health_routes)
        .merge(metrics_routes)
        .nest("/api/auth", auth_routes)
        .nest("/api/entreprises", entreprise_routes)
        .nest("/api/stands", stand_routes)
        .nest("/api/intervenants", intervenant_routes)
        .nest("/api/salles", salle_routes)
        .nest("/api/conferences", conference_routes)
        .nest("/api/evenements", evenement_routes)
        .nest("/api/partenaires", partenaire_routes)
        .nest("/api/contrats", contrat_routes)
        .nest("/api/taches", tache_routes)
        .nest("/api/utilisateurs", utilisateur_routes)
        .layer(middleware::from_fn(metrics::http_metrics_middleware))
        .layer(middleware::from_fn(request_id::request_id_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn openapi_lists_every_resource() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&String> = doc.paths.paths.keys().collect();
        for expected in [
            "/health",
            "/api/auth/login",
            "/api/stands/zone/{zone}",
            "/api/contrats/types",
            "/api/taches/{id}",
            "/api/utilisateurs",
        ] {
            assert!(
                paths.iter().any(|p| p.as_str() == expected),
                "missing {expected}"
            );
        }
        let components = doc.components.expect("components");
        assert!(components.security_schemes.contains_key("bearer_auth"));
    }
}
