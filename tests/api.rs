//! End-to-end tests of the REST API against a migrated in-memory database.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use metrics_exporter_prometheus::PrometheusBuilder;
use sea_orm_migration::MigratorTrait;
use serde_json::{json, Value};
use tower::ServiceExt;

use forum_emi::application::{AuthService, DataSeeder};
use forum_emi::config::AdminConfig;
use forum_emi::create_api_router;
use forum_emi::domain::RepositoryProvider;
use forum_emi::infrastructure::crypto::jwt::{JwtConfig, ISSUER};
use forum_emi::infrastructure::database::migrator::Migrator;
use forum_emi::infrastructure::database::repositories::SeaOrmRepositoryProvider;
use forum_emi::infrastructure::database::{in_memory, init_database};

const ADMIN: (&str, &str) = ("admin@emi.ac.ma", "admin123");
const SARA: (&str, &str) = ("sara.alami@emi.ac.ma", "sara123");

async fn app() -> Router {
    let db = init_database(&in_memory()).await.unwrap();
    Migrator::up(&db, None).await.unwrap();

    let repos: Arc<dyn RepositoryProvider> = Arc::new(SeaOrmRepositoryProvider::new(db.clone()));
    let jwt = JwtConfig {
        secret: "api-test-secret".into(),
        expiration_hours: 1,
        issuer: ISSUER.into(),
    };
    let auth = Arc::new(AuthService::new(repos.clone(), jwt, 4));
    DataSeeder::new(repos.clone(), auth.clone(), AdminConfig::default())
        .run()
        .await
        .unwrap();

    let metrics = PrometheusBuilder::new().build_recorder().handle();
    create_api_router(repos, auth, db, metrics)
}

struct Reply {
    status: StatusCode,
    body: Vec<u8>,
}

impl Reply {
    fn json(&self) -> Value {
        serde_json::from_slice(&self.body).unwrap()
    }
}

async fn send(app: &Router, method: Method, uri: &str, token: Option<&str>, body: Option<Value>) -> Reply {
    let mut req = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        req = req.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    let req = match body {
        Some(body) => req
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(serde_json::to_vec(&body).unwrap())),
        None => req.body(Body::empty()),
    }
    .unwrap();

    let resp = app.clone().oneshot(req).await.unwrap();
    let status = resp.status();
    let body = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .unwrap()
        .to_vec();
    Reply { status, body }
}

async fn login(app: &Router, (email, password): (&str, &str)) -> String {
    let reply = send(
        app,
        Method::POST,
        "/api/auth/login",
        None,
        Some(json!({"email": email, "motDePasse": password})),
    )
    .await;
    assert_eq!(reply.status, StatusCode::OK, "login of {email}");
    reply.json()["token"].as_str().unwrap().to_string()
}

// ── Authentication ─────────────────────────────────────────────────

#[tokio::test]
async fn login_echoes_profile_with_token() {
    let app = app().await;
    let reply = send(
        &app,
        Method::POST,
        "/api/auth/login",
        None,
        Some(json!({"email": "admin@emi.ac.ma", "motDePasse": "admin123"})),
    )
    .await;

    assert_eq!(reply.status, StatusCode::OK);
    let body = reply.json();
    assert!(!body["token"].as_str().unwrap().is_empty());
    assert_eq!(body["nom"], "Admin");
    assert_eq!(body["prenom"], "Forum EMI");
    assert_eq!(body["email"], "admin@emi.ac.ma");
    assert_eq!(body["role"], "ADMIN");
}

#[tokio::test]
async fn login_failures_are_indistinguishable() {
    let app = app().await;
    for (email, password) in [("admin@emi.ac.ma", "wrong-pass"), ("nobody@emi.ac.ma", "admin123")] {
        let reply = send(
            &app,
            Method::POST,
            "/api/auth/login",
            None,
            Some(json!({"email": email, "motDePasse": password})),
        )
        .await;
        assert_eq!(reply.status, StatusCode::UNAUTHORIZED);
        let body = reply.json();
        assert_eq!(body["error"], "Email ou mot de passe incorrect");
        assert!(body.get("token").is_none());
    }
}

#[tokio::test]
async fn protected_routes_require_a_token() {
    let app = app().await;
    for uri in ["/api/entreprises", "/api/taches", "/api/auth/me", "/api/contrats/types"] {
        let reply = send(&app, Method::GET, uri, None, None).await;
        assert_eq!(reply.status, StatusCode::UNAUTHORIZED, "{uri}");
    }
    let reply = send(&app, Method::GET, "/api/stands", Some("not-a-jwt"), None).await;
    assert_eq!(reply.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn me_and_change_password() {
    let app = app().await;
    let token = login(&app, SARA).await;

    let me = send(&app, Method::GET, "/api/auth/me", Some(&token), None).await;
    assert_eq!(me.status, StatusCode::OK);
    let body = me.json();
    assert_eq!(body["email"], "sara.alami@emi.ac.ma");
    assert_eq!(body["role"], "EQUIPIER");
    assert!(body.get("motDePasse").is_none());

    let wrong = send(
        &app,
        Method::PUT,
        "/api/auth/change-password",
        Some(&token),
        Some(json!({"motDePasseActuel": "nope", "nouveauMotDePasse": "sara-2025"})),
    )
    .await;
    assert_eq!(wrong.status, StatusCode::BAD_REQUEST);

    let ok = send(
        &app,
        Method::PUT,
        "/api/auth/change-password",
        Some(&token),
        Some(json!({"motDePasseActuel": "sara123", "nouveauMotDePasse": "sara-2025"})),
    )
    .await;
    assert_eq!(ok.status, StatusCode::NO_CONTENT);

    login(&app, ("sara.alami@emi.ac.ma", "sara-2025")).await;
}

// ── Permissions ────────────────────────────────────────────────────

#[tokio::test]
async fn equipier_updates_tasks_but_cannot_manage_catalog() {
    let app = app().await;
    let admin = login(&app, ADMIN).await;
    let sara = login(&app, SARA).await;

    let denied = send(
        &app,
        Method::POST,
        "/api/entreprises",
        Some(&sara),
        Some(json!({"nom": "OCP Group"})),
    )
    .await;
    assert_eq!(denied.status, StatusCode::FORBIDDEN);
    assert_eq!(denied.json()["success"], false);

    let listed = send(&app, Method::GET, "/api/entreprises", Some(&sara), None).await;
    assert_eq!(listed.status, StatusCode::OK);

    let created = send(
        &app,
        Method::POST,
        "/api/taches",
        Some(&admin),
        Some(json!({"description": "Installer la signalétique", "dateLimite": "2025-03-10"})),
    )
    .await;
    assert_eq!(created.status, StatusCode::OK);
    let tache = created.json();
    assert_eq!(tache["statut"], "EN_ATTENTE");
    assert_eq!(tache["priorite"], "MEDIUM");
    let id = tache["id"].as_i64().unwrap();

    let updated = send(
        &app,
        Method::PUT,
        &format!("/api/taches/{id}"),
        Some(&sara),
        Some(json!({
            "description": "Installer la signalétique",
            "statut": "EN_COURS",
            "dateLimite": "2025-03-11",
            "priorite": "HIGH"
        })),
    )
    .await;
    assert_eq!(updated.status, StatusCode::OK);
    let body = updated.json();
    assert_eq!(body["statut"], "EN_COURS");
    assert_eq!(body["dateLimite"], "2025-03-11");

    let create_denied = send(
        &app,
        Method::POST,
        "/api/taches",
        Some(&sara),
        Some(json!({"description": "x", "dateLimite": "2025-03-10"})),
    )
    .await;
    assert_eq!(create_denied.status, StatusCode::FORBIDDEN);

    let users_denied = send(&app, Method::GET, "/api/utilisateurs", Some(&sara), None).await;
    assert_eq!(users_denied.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn tache_lifecycle_keeps_the_assignee() {
    let app = app().await;
    let admin = login(&app, ADMIN).await;
    let sara = login(&app, SARA).await;
    let sara_id = send(&app, Method::GET, "/api/auth/me", Some(&sara), None).await.json()["id"].clone();

    let created = send(
        &app,
        Method::POST,
        "/api/taches",
        Some(&admin),
        Some(json!({
            "description": "Préparer les badges",
            "dateLimite": "2025-03-05",
            "priorite": "HIGH",
            "responsableId": sara_id
        })),
    )
    .await;
    assert_eq!(created.status, StatusCode::OK);
    let id = created.json()["id"].as_i64().unwrap();

    let updated = send(
        &app,
        Method::PUT,
        &format!("/api/taches/{id}"),
        Some(&sara),
        Some(json!({
            "description": "Préparer et distribuer les badges",
            "statut": "TERMINEE",
            "dateLimite": "2025-03-06",
            "priorite": "LOW"
        })),
    )
    .await;
    assert_eq!(updated.status, StatusCode::OK);
    let body = updated.json();
    assert_eq!(body["statut"], "TERMINEE");
    assert_eq!(body["priorite"], "LOW");
    assert_eq!(body["responsableId"], sara_id);

    let without_statut = send(
        &app,
        Method::PUT,
        &format!("/api/taches/{id}"),
        Some(&sara),
        Some(json!({"description": "x", "dateLimite": "2025-03-06", "priorite": "LOW"})),
    )
    .await;
    assert_eq!(without_statut.status, StatusCode::BAD_REQUEST);

    let missing = send(
        &app,
        Method::PUT,
        "/api/taches/9999",
        Some(&admin),
        Some(json!({
            "description": "Ghost",
            "statut": "EN_COURS",
            "dateLimite": "2025-03-06",
            "priorite": "LOW"
        })),
    )
    .await;
    assert_eq!(missing.status, StatusCode::NOT_FOUND);

    let denied = send(&app, Method::DELETE, &format!("/api/taches/{id}"), Some(&sara), None).await;
    assert_eq!(denied.status, StatusCode::FORBIDDEN);

    let deleted = send(&app, Method::DELETE, &format!("/api/taches/{id}"), Some(&admin), None).await;
    assert_eq!(deleted.status, StatusCode::OK);
    assert!(deleted.body.is_empty());
    let gone = send(&app, Method::GET, &format!("/api/taches/{id}"), Some(&admin), None).await;
    assert_eq!(gone.status, StatusCode::NOT_FOUND);
}

// ── Catalog ────────────────────────────────────────────────────────

#[tokio::test]
async fn entreprise_lifecycle() {
    let app = app().await;
    let admin = login(&app, ADMIN).await;

    let created = send(
        &app,
        Method::POST,
        "/api/entreprises",
        Some(&admin),
        Some(json!({"nom": "OCP Group"})),
    )
    .await;
    assert_eq!(created.status, StatusCode::OK);
    let id = created.json()["id"].as_i64().unwrap();

    let duplicate = send(
        &app,
        Method::POST,
        "/api/entreprises",
        Some(&admin),
        Some(json!({"nom": "OCP Group"})),
    )
    .await;
    assert_eq!(duplicate.status, StatusCode::BAD_REQUEST);
    assert!(duplicate.body.is_empty());

    let blank = send(
        &app,
        Method::POST,
        "/api/entreprises",
        Some(&admin),
        Some(json!({"nom": "  "})),
    )
    .await;
    assert_eq!(blank.status, StatusCode::BAD_REQUEST);
    assert!(blank.json()["error"].as_str().unwrap().contains("nom"));

    let renamed = send(
        &app,
        Method::PUT,
        &format!("/api/entreprises/{id}"),
        Some(&admin),
        Some(json!({"nom": "OCP"})),
    )
    .await;
    assert_eq!(renamed.status, StatusCode::OK);
    assert_eq!(renamed.json()["nom"], "OCP");

    let missing = send(
        &app,
        Method::PUT,
        "/api/entreprises/9999",
        Some(&admin),
        Some(json!({"nom": "Ghost"})),
    )
    .await;
    assert_eq!(missing.status, StatusCode::NOT_FOUND);
    assert!(missing.body.is_empty());

    let deleted = send(&app, Method::DELETE, &format!("/api/entreprises/{id}"), Some(&admin), None).await;
    assert_eq!(deleted.status, StatusCode::OK);
    assert!(deleted.body.is_empty());

    let gone = send(&app, Method::GET, &format!("/api/entreprises/{id}"), Some(&admin), None).await;
    assert_eq!(gone.status, StatusCode::NOT_FOUND);

    let again = send(&app, Method::DELETE, &format!("/api/entreprises/{id}"), Some(&admin), None).await;
    assert_eq!(again.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn stand_defaults_and_duplicate_numero() {
    let app = app().await;
    let admin = login(&app, ADMIN).await;

    let created = send(
        &app,
        Method::POST,
        "/api/stands",
        Some(&admin),
        Some(json!({"numero": 5, "zone": "A", "taille": "LARGE"})),
    )
    .await;
    assert_eq!(created.status, StatusCode::OK);
    let stand = created.json();
    assert!(stand["id"].as_i64().is_some());
    assert_eq!(stand["statut"], "LIBRE");
    assert_eq!(stand["taille"], "LARGE");
    assert_eq!(stand["entrepriseId"], Value::Null);

    let duplicate = send(
        &app,
        Method::POST,
        "/api/stands",
        Some(&admin),
        Some(json!({"numero": 5})),
    )
    .await;
    assert_eq!(duplicate.status, StatusCode::BAD_REQUEST);

    let by_zone = send(&app, Method::GET, "/api/stands/zone/A", Some(&admin), None).await;
    assert_eq!(by_zone.json().as_array().unwrap().len(), 1);
    let other_zone = send(&app, Method::GET, "/api/stands/zone/B", Some(&admin), None).await;
    assert!(other_zone.json().as_array().unwrap().is_empty());

    let entreprise = send(
        &app,
        Method::POST,
        "/api/entreprises",
        Some(&admin),
        Some(json!({"nom": "Capgemini"})),
    )
    .await
    .json();
    let id = stand["id"].as_i64().unwrap();
    let occupied = send(
        &app,
        Method::PUT,
        &format!("/api/stands/{id}"),
        Some(&admin),
        Some(json!({"statut": "OCCUPE", "entrepriseId": entreprise["id"]})),
    )
    .await;
    assert_eq!(occupied.status, StatusCode::OK);
    let body = occupied.json();
    assert_eq!(body["statut"], "OCCUPE");
    assert_eq!(body["entrepriseId"], entreprise["id"]);
    // Not editable: preserved
    assert_eq!(body["numero"], 5);
    assert_eq!(body["taille"], "LARGE");
    assert_eq!(body["zone"], "A");

    let without_statut = send(
        &app,
        Method::PUT,
        &format!("/api/stands/{id}"),
        Some(&admin),
        Some(json!({"entrepriseId": entreprise["id"]})),
    )
    .await;
    assert_eq!(without_statut.status, StatusCode::BAD_REQUEST);

    let missing = send(
        &app,
        Method::PUT,
        "/api/stands/9999",
        Some(&admin),
        Some(json!({"statut": "RESERVE", "entrepriseId": null})),
    )
    .await;
    assert_eq!(missing.status, StatusCode::NOT_FOUND);

    let second_for_company = send(
        &app,
        Method::POST,
        "/api/stands",
        Some(&admin),
        Some(json!({"numero": 6, "zone": "A", "entrepriseId": entreprise["id"]})),
    )
    .await;
    assert_eq!(second_for_company.status, StatusCode::CONFLICT);

    let stored = send(&app, Method::GET, &format!("/api/stands/{id}"), Some(&admin), None).await.json();
    assert_eq!(stored["statut"], "OCCUPE");
    assert_eq!(stored["taille"], "LARGE");

    let deleted = send(&app, Method::DELETE, &format!("/api/stands/{id}"), Some(&admin), None).await;
    assert_eq!(deleted.status, StatusCode::OK);
    let gone = send(&app, Method::GET, &format!("/api/stands/{id}"), Some(&admin), None).await;
    assert_eq!(gone.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn salles_are_seeded_and_validated() {
    let app = app().await;
    let admin = login(&app, ADMIN).await;

    let salles = send(&app, Method::GET, "/api/salles", Some(&admin), None).await.json();
    assert_eq!(salles.as_array().unwrap().len(), 2);

    let taken = send(
        &app,
        Method::POST,
        "/api/salles",
        Some(&admin),
        Some(json!({"numero": 1, "capacite": 50})),
    )
    .await;
    assert_eq!(taken.status, StatusCode::BAD_REQUEST);

    let empty_room = send(
        &app,
        Method::POST,
        "/api/salles",
        Some(&admin),
        Some(json!({"numero": 3, "capacite": 0})),
    )
    .await;
    assert_eq!(empty_room.status, StatusCode::BAD_REQUEST);
    assert!(empty_room.json()["error"]
        .as_str()
        .unwrap()
        .contains("capacite"));

    let missing_field = send(
        &app,
        Method::POST,
        "/api/salles",
        Some(&admin),
        Some(json!({"capacite": 10})),
    )
    .await;
    assert_eq!(missing_field.status, StatusCode::BAD_REQUEST);

    let id = salles[1]["id"].as_i64().unwrap();
    let renumbered_onto_taken = send(
        &app,
        Method::PUT,
        &format!("/api/salles/{id}"),
        Some(&admin),
        Some(json!({"numero": 1, "capacite": 220})),
    )
    .await;
    assert_eq!(renumbered_onto_taken.status, StatusCode::CONFLICT);

    let enlarged = send(
        &app,
        Method::PUT,
        &format!("/api/salles/{id}"),
        Some(&admin),
        Some(json!({"numero": 2, "capacite": 250})),
    )
    .await;
    assert_eq!(enlarged.status, StatusCode::OK);
    assert_eq!(enlarged.json()["capacite"], 250);

    let missing = send(
        &app,
        Method::PUT,
        "/api/salles/9999",
        Some(&admin),
        Some(json!({"numero": 9, "capacite": 10})),
    )
    .await;
    assert_eq!(missing.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn intervenant_update_and_delete() {
    let app = app().await;
    let admin = login(&app, ADMIN).await;

    let created = send(
        &app,
        Method::POST,
        "/api/intervenants",
        Some(&admin),
        Some(json!({"nom": "Amrani", "specialite": "IA", "email": "amrani@uir.ac.ma"})),
    )
    .await;
    assert_eq!(created.status, StatusCode::OK);
    let id = created.json()["id"].as_i64().unwrap();

    let updated = send(
        &app,
        Method::PUT,
        &format!("/api/intervenants/{id}"),
        Some(&admin),
        Some(json!({
            "nom": "Amrani",
            "biographie": "Chercheur en vision par ordinateur",
            "specialite": "Vision",
            "telephone": "0600000000"
        })),
    )
    .await;
    assert_eq!(updated.status, StatusCode::OK);
    let body = updated.json();
    assert_eq!(body["id"], id);
    assert_eq!(body["specialite"], "Vision");
    assert_eq!(body["email"], Value::Null);

    let fetched = send(&app, Method::GET, &format!("/api/intervenants/{id}"), Some(&admin), None).await;
    assert_eq!(fetched.json(), body);

    let missing = send(
        &app,
        Method::PUT,
        "/api/intervenants/9999",
        Some(&admin),
        Some(json!({"nom": "Ghost"})),
    )
    .await;
    assert_eq!(missing.status, StatusCode::NOT_FOUND);

    let deleted = send(&app, Method::DELETE, &format!("/api/intervenants/{id}"), Some(&admin), None).await;
    assert_eq!(deleted.status, StatusCode::OK);
    let gone = send(&app, Method::GET, &format!("/api/intervenants/{id}"), Some(&admin), None).await;
    assert_eq!(gone.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn evenement_update_and_delete_cascades_to_contracts() {
    let app = app().await;
    let admin = login(&app, ADMIN).await;

    let id = send(
        &app,
        Method::POST,
        "/api/evenements",
        Some(&admin),
        Some(json!({"nom": "Forum EMI 2025", "dateDebut": "2025-03-12", "dateFin": "2025-03-13"})),
    )
    .await
    .json()["id"]
        .as_i64()
        .unwrap();

    let updated = send(
        &app,
        Method::PUT,
        &format!("/api/evenements/{id}"),
        Some(&admin),
        Some(json!({
            "nom": "Forum EMI 2025",
            "dateDebut": "2025-03-12",
            "dateFin": "2025-03-14",
            "lieu": "Rabat"
        })),
    )
    .await;
    assert_eq!(updated.status, StatusCode::OK);
    let body = updated.json();
    assert_eq!(body["dateFin"], "2025-03-14");
    assert_eq!(body["lieu"], "Rabat");

    let missing = send(
        &app,
        Method::PUT,
        "/api/evenements/9999",
        Some(&admin),
        Some(json!({"nom": "Ghost", "dateDebut": "2025-03-12", "dateFin": "2025-03-13"})),
    )
    .await;
    assert_eq!(missing.status, StatusCode::NOT_FOUND);

    let contrat = send(
        &app,
        Method::POST,
        "/api/contrats",
        Some(&admin),
        Some(json!({"id": "CTR-OCP", "type": "DIAMOND", "date": "2025-01-20"})),
    )
    .await;
    assert_eq!(contrat.status, StatusCode::OK);
    let partenaire_id = send(
        &app,
        Method::POST,
        "/api/partenaires",
        Some(&admin),
        Some(json!({"nom": "OCP", "contratId": "CTR-OCP", "evenementId": id})),
    )
    .await
    .json()["id"]
        .as_i64()
        .unwrap();

    let deleted = send(&app, Method::DELETE, &format!("/api/evenements/{id}"), Some(&admin), None).await;
    assert_eq!(deleted.status, StatusCode::OK);

    let partner = send(&app, Method::GET, &format!("/api/partenaires/{partenaire_id}"), Some(&admin), None).await;
    assert_eq!(partner.status, StatusCode::NOT_FOUND);
    let contract = send(&app, Method::GET, "/api/contrats/CTR-OCP", Some(&admin), None).await;
    assert_eq!(contract.status, StatusCode::NOT_FOUND);
    let event = send(&app, Method::GET, &format!("/api/evenements/{id}"), Some(&admin), None).await;
    assert_eq!(event.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn partenaire_update_and_delete() {
    let app = app().await;
    let admin = login(&app, ADMIN).await;

    let evenement_id = send(
        &app,
        Method::POST,
        "/api/evenements",
        Some(&admin),
        Some(json!({"nom": "Forum EMI 2025", "dateDebut": "2025-03-12", "dateFin": "2025-03-13"})),
    )
    .await
    .json()["id"]
        .clone();
    send(
        &app,
        Method::POST,
        "/api/contrats",
        Some(&admin),
        Some(json!({"id": "CTR-S1", "type": "SILVER", "montant": 7000.0, "date": "2025-01-10"})),
    )
    .await;

    let id = send(
        &app,
        Method::POST,
        "/api/partenaires",
        Some(&admin),
        Some(json!({"nom": "Inwi"})),
    )
    .await
    .json()["id"]
        .as_i64()
        .unwrap();

    let updated = send(
        &app,
        Method::PUT,
        &format!("/api/partenaires/{id}"),
        Some(&admin),
        Some(json!({"nom": "inwi", "contratId": "CTR-S1", "evenementId": evenement_id})),
    )
    .await;
    assert_eq!(updated.status, StatusCode::OK);
    let body = updated.json();
    assert_eq!(body["nom"], "inwi");
    assert_eq!(body["contratId"], "CTR-S1");
    assert_eq!(body["evenementId"], evenement_id);

    let missing = send(
        &app,
        Method::PUT,
        "/api/partenaires/9999",
        Some(&admin),
        Some(json!({"nom": "Ghost"})),
    )
    .await;
    assert_eq!(missing.status, StatusCode::NOT_FOUND);

    let deleted = send(&app, Method::DELETE, &format!("/api/partenaires/{id}"), Some(&admin), None).await;
    assert_eq!(deleted.status, StatusCode::OK);
    let gone = send(&app, Method::GET, &format!("/api/partenaires/{id}"), Some(&admin), None).await;
    assert_eq!(gone.status, StatusCode::NOT_FOUND);
    let again = send(&app, Method::DELETE, &format!("/api/partenaires/{id}"), Some(&admin), None).await;
    assert_eq!(again.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn conference_with_room_and_speakers() {
    let app = app().await;
    let admin = login(&app, ADMIN).await;

    let mut speaker_ids = Vec::new();
    for nom in ["Yassine Amrani", "Nadia Tazi"] {
        let reply = send(
            &app,
            Method::POST,
            "/api/intervenants",
            Some(&admin),
            Some(json!({"nom": nom, "specialite": "IA"})),
        )
        .await;
        assert_eq!(reply.status, StatusCode::OK);
        speaker_ids.push(reply.json()["id"].as_i64().unwrap());
    }
    let salle_id = send(&app, Method::GET, "/api/salles", Some(&admin), None).await.json()[0]["id"].clone();

    let created = send(
        &app,
        Method::POST,
        "/api/conferences",
        Some(&admin),
        Some(json!({
            "titre": "L'IA au service de l'industrie",
            "dateDebut": "2025-03-12T09:00:00",
            "dateFin": "2025-03-12T10:30:00",
            "salleId": salle_id,
            "intervenantIds": [speaker_ids[1], speaker_ids[0]]
        })),
    )
    .await;
    assert_eq!(created.status, StatusCode::OK);
    let conference = created.json();
    assert_eq!(conference["dateDebut"], "2025-03-12T09:00:00");
    assert_eq!(conference["salleId"], salle_id);
    let mut sorted = speaker_ids.clone();
    sorted.sort();
    assert_eq!(conference["intervenantIds"], json!(sorted));

    let id = conference["id"].as_i64().unwrap();
    let updated = send(
        &app,
        Method::PUT,
        &format!("/api/conferences/{id}"),
        Some(&admin),
        Some(json!({
            "titre": "L'IA au service de l'industrie",
            "dateDebut": "2025-03-12T09:00:00",
            "dateFin": "2025-03-12T11:00:00",
            "salleId": null,
            "intervenantIds": [speaker_ids[0]]
        })),
    )
    .await;
    assert_eq!(updated.status, StatusCode::OK);
    let body = updated.json();
    assert_eq!(body["salleId"], Value::Null);
    assert_eq!(body["intervenantIds"], json!([speaker_ids[0]]));

    let unknown_speaker = send(
        &app,
        Method::POST,
        "/api/conferences",
        Some(&admin),
        Some(json!({
            "titre": "Fantôme",
            "dateDebut": "2025-03-12T14:00:00",
            "dateFin": "2025-03-12T15:00:00",
            "intervenantIds": [4242]
        })),
    )
    .await;
    assert_eq!(unknown_speaker.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn contracts_and_partners() {
    let app = app().await;
    let admin = login(&app, ADMIN).await;

    let types = send(&app, Method::GET, "/api/contrats/types", Some(&admin), None).await;
    assert_eq!(types.status, StatusCode::OK);
    assert_eq!(
        types.json(),
        json!([
            {"type": "SILVER", "displayName": "Silver", "baseAmount": 5000.0},
            {"type": "GOLD", "displayName": "Gold", "baseAmount": 15000.0},
            {"type": "DIAMOND", "displayName": "Diamond", "baseAmount": 30000.0}
        ])
    );

    let contrat = send(
        &app,
        Method::POST,
        "/api/contrats",
        Some(&admin),
        Some(json!({"id": "CTR-2025-01", "type": "GOLD", "date": "2025-01-15"})),
    )
    .await;
    assert_eq!(contrat.status, StatusCode::OK);
    assert_eq!(contrat.json()["montant"], 15000.0);

    let taken = send(
        &app,
        Method::POST,
        "/api/contrats",
        Some(&admin),
        Some(json!({"id": "CTR-2025-01", "type": "SILVER", "date": "2025-01-16"})),
    )
    .await;
    assert_eq!(taken.status, StatusCode::CONFLICT);

    let evenement = send(
        &app,
        Method::POST,
        "/api/evenements",
        Some(&admin),
        Some(json!({
            "nom": "Forum EMI 2025",
            "dateDebut": "2025-03-12",
            "dateFin": "2025-03-13",
            "lieu": "Rabat"
        })),
    )
    .await;
    assert_eq!(evenement.status, StatusCode::OK);
    let evenement_id = evenement.json()["id"].clone();

    let partenaire = send(
        &app,
        Method::POST,
        "/api/partenaires",
        Some(&admin),
        Some(json!({"nom": "Attijariwafa Bank", "contratId": "CTR-2025-01", "evenementId": evenement_id})),
    )
    .await;
    assert_eq!(partenaire.status, StatusCode::OK);
    let partenaire_id = partenaire.json()["id"].as_i64().unwrap();

    let deleted = send(
        &app,
        Method::DELETE,
        &format!("/api/partenaires/{partenaire_id}"),
        Some(&admin),
        None,
    )
    .await;
    assert_eq!(deleted.status, StatusCode::OK);

    let contract_gone = send(&app, Method::GET, "/api/contrats/CTR-2025-01", Some(&admin), None).await;
    assert_eq!(contract_gone.status, StatusCode::NOT_FOUND);
}

// ── Accounts ───────────────────────────────────────────────────────

#[tokio::test]
async fn admin_manages_accounts() {
    let app = app().await;
    let admin = login(&app, ADMIN).await;

    let list = send(&app, Method::GET, "/api/utilisateurs", Some(&admin), None).await;
    assert_eq!(list.status, StatusCode::OK);
    let users = list.json();
    assert_eq!(users.as_array().unwrap().len(), 5);
    assert!(users[0].get("motDePasse").is_none());

    let created = send(
        &app,
        Method::POST,
        "/api/utilisateurs",
        Some(&admin),
        Some(json!({
            "nom": "Lahlou",
            "prenom": "Karim",
            "email": "karim.lahlou@emi.ac.ma",
            "motDePasse": "karim123"
        })),
    )
    .await;
    assert_eq!(created.status, StatusCode::OK);
    assert_eq!(created.json()["role"], "EQUIPIER");

    let duplicate = send(
        &app,
        Method::POST,
        "/api/utilisateurs",
        Some(&admin),
        Some(json!({
            "nom": "Lahlou",
            "prenom": "Karim",
            "email": "karim.lahlou@emi.ac.ma",
            "motDePasse": "karim123"
        })),
    )
    .await;
    assert_eq!(duplicate.status, StatusCode::BAD_REQUEST);

    login(&app, ("karim.lahlou@emi.ac.ma", "karim123")).await;
}

// ── Operations ─────────────────────────────────────────────────────

#[tokio::test]
async fn health_metrics_and_docs_are_public() {
    let app = app().await;

    let health = send(&app, Method::GET, "/health", None, None).await;
    assert_eq!(health.status, StatusCode::OK);
    assert_eq!(health.json()["status"], "ok");

    let metrics = send(&app, Method::GET, "/metrics", None, None).await;
    assert_eq!(metrics.status, StatusCode::OK);

    let openapi = send(&app, Method::GET, "/api-doc/openapi.json", None, None).await;
    assert_eq!(openapi.status, StatusCode::OK);
    assert_eq!(openapi.json()["info"]["title"], "Forum EMI API");
}
