use std::sync::{Arc, Mutex};

use axum::{
    body::Body,
    extract::{Path, State},
    http::{header, HeaderMap, Method, Request, StatusCode},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::{get, post, put},
    Json, Router,
};
use chrono::{Duration, Local, Utc};
use jsonwebtoken::{encode, EncodingKey, Header};
use serde_json::{json, Value};
use tokio::net::TcpListener;
use tower::ServiceExt;

use prona_portal::{config::Config, routes, utils::jwt::TokenClaims, AppState};

fn token(sub: &str, roles: &[&str], valid_for: Duration) -> String {
    let claims = TokenClaims {
        sub: sub.to_string(),
        exp: (Utc::now() + valid_for).timestamp(),
        iat: Some(Utc::now().timestamp()),
        roles: roles.iter().map(|r| r.to_string()).collect(),
    };
    encode(&Header::default(), &claims, &EncodingKey::from_secret(b"backend-secret")).unwrap()
}

/// Stand-in backend state: which bearer is the admin, plus a log of what the portal sent
#[derive(Clone, Default)]
struct StandIn {
    admin_token: String,
    calls: Arc<Mutex<Vec<String>>>,
    last_body: Arc<Mutex<Option<Value>>>,
}

impl StandIn {
    fn new(admin_token: &str) -> Self {
        Self {
            admin_token: admin_token.to_string(),
            ..Self::default()
        }
    }

    /// `"METHOD /path"` of every request received, in order
    fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn last_body(&self) -> Option<Value> {
        self.last_body.lock().unwrap().clone()
    }

    fn keep_body(&self, body: &Value) {
        *self.last_body.lock().unwrap() = Some(body.clone());
    }
}

async fn record(State(backend): State<StandIn>, request: Request<Body>, next: Next) -> Response {
    backend
        .calls
        .lock()
        .unwrap()
        .push(format!("{} {}", request.method(), request.uri().path()));
    next.run(request).await
}

async fn backend_properties() -> Json<Value> {
    Json(json!({
        "content": [
            { "id": 1, "title": "Banesë", "location": "Prishtinë, Dardani",
              "latitude": 42.66, "longitude": 21.16, "price": "85000.00" },
            { "id": 2, "title": "Shtëpi", "location": "Prizren",
              "latitude": 42.21, "longitude": 20.74 },
            { "id": 3, "title": "Tokë", "location": "Pejë" }
        ],
        "totalPages": 1
    }))
}

async fn backend_property(Path(id): Path<i64>) -> Json<Value> {
    Json(json!({
        "id": id, "title": "Banesë e rifreskuar", "location": "Prishtinë, Arbëri",
        "type": "BANESA", "status": "FOR_SALE", "area": 80, "price": 90000
    }))
}

/// Apartments answer updates with an empty body
async fn backend_update_banesa(State(backend): State<StandIn>, Json(body): Json<Value>) -> StatusCode {
    backend.keep_body(&body);
    StatusCode::OK
}

async fn backend_update_shtepi(
    State(backend): State<StandIn>,
    Path(id): Path<i64>,
    Json(body): Json<Value>,
) -> Json<Value> {
    backend.keep_body(&body);
    Json(json!({
        "id": id, "title": body["title"], "location": body["location"], "type": body["type"],
        "status": body["status"], "area": body["area"], "price": body["price"], "hasGarden": true
    }))
}

async fn backend_me(State(backend): State<StandIn>, headers: HeaderMap) -> Response {
    let bearer = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .unwrap_or_default();

    match bearer {
        "" => StatusCode::UNAUTHORIZED.into_response(),
        t if t == backend.admin_token => {
            Json(json!({ "username": "admin", "roles": ["ROLE_ADMIN"] })).into_response()
        }
        _ => Json(json!({ "username": "arta", "email": "arta@example.com", "roles": ["ROLE_USER"] }))
            .into_response(),
    }
}

async fn backend_register(State(backend): State<StandIn>, Json(body): Json<Value>) -> Json<Value> {
    backend.keep_body(&body);
    Json(json!({ "message": "ok" }))
}

async fn backend_profile() -> Json<Value> {
    Json(json!({
        "username": "arta", "firstName": "Arta", "lastName": "Krasniqi", "phoneNumber": "044123456"
    }))
}

async fn backend_update_profile(State(backend): State<StandIn>, Json(body): Json<Value>) -> Json<Value> {
    backend.keep_body(&body);
    Json(body)
}

async fn backend_change_password(State(backend): State<StandIn>, Json(body): Json<Value>) -> Response {
    backend.keep_body(&body);
    if body["currentPassword"] != "old-secret" {
        let message = json!({ "message": "Fjalëkalimi aktual është i gabuar" });
        return (StatusCode::BAD_REQUEST, Json(message)).into_response();
    }
    StatusCode::OK.into_response()
}

async fn backend_appointments() -> Json<Value> {
    Json(json!({
        "content": [
            { "id": 1, "propertyName": "Banesë në Dardani", "userName": "arta", "status": "PENDING" },
            { "id": 2, "propertyName": "Shtëpi në Prizren", "userName": "blerim", "status": "APPROVED" },
            { "id": 3, "property": { "id": 5, "title": "Lokal në Pejë" },
              "user": { "username": "arta" }, "status": "PENDING" }
        ],
        "totalPages": 1
    }))
}

async fn backend_decide_appointment() -> StatusCode {
    StatusCode::OK
}

async fn backend_users() -> Json<Value> {
    Json(json!({
        "content": [
            { "id": 1, "username": "admin", "roles": ["ROLE_ADMIN"], "enabled": true },
            { "id": 2, "username": "arta", "email": "arta@example.com",
              "roles": ["ROLE_USER"], "enabled": false }
        ],
        "totalPages": 1
    }))
}

async fn backend_stats() -> Json<Value> {
    Json(json!({ "totalProperties": 3, "appointments": 4, "users": 2 }))
}

/// Serve a stand-in backend on an ephemeral port and return its API base URL
async fn spawn(backend: StandIn) -> String {
    let app = Router::new()
        .route("/api/properties", get(backend_properties))
        .route("/api/properties/{id}", get(backend_property))
        .route("/api/banesa/{id}", put(backend_update_banesa))
        .route("/api/shtepi/{id}", put(backend_update_shtepi))
        .route("/api/auth/me", get(backend_me))
        .route("/api/auth/register", post(backend_register))
        .route("/api/profile", get(backend_profile).put(backend_update_profile))
        .route("/api/profile/password", put(backend_change_password))
        .route("/api/appointments", get(backend_appointments))
        .route("/api/appointments/{id}/approve", put(backend_decide_appointment))
        .route("/api/appointments/{id}/reject", put(backend_decide_appointment))
        .route("/api/users", get(backend_users))
        .route("/api/users/stats", get(backend_stats))
        .layer(middleware::from_fn_with_state(backend.clone(), record))
        .with_state(backend);

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}/api", addr)
}

async fn spawn_backend(admin_token: String) -> String {
    spawn(StandIn::new(&admin_token)).await
}

fn portal(backend_api_url: String) -> Router {
    let config = Config {
        backend_api_url,
        backend_timeout_secs: 2,
        ..Config::default()
    };
    routes::create_router(AppState::new(config).unwrap())
}

async fn call(
    app: &Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }
    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

fn side_list_ids(view: &Value) -> Vec<i64> {
    view["side_list"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["id"].as_i64().unwrap())
        .collect()
}

#[tokio::test]
async fn test_radius_search_flow() {
    let app = portal(spawn_backend("unused".to_string()).await);

    let (status, view) = call(&app, Method::POST, "/api/search-views", None, None).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(view["count"], 3);
    assert_eq!(view["map"]["markers"].as_array().unwrap().len(), 2);
    assert!(view["map"]["circle"].is_null());
    let id = view["id"].as_str().unwrap().to_string();

    let (_, view) = call(&app, Method::POST, &format!("/api/search-views/{}/toggle", id), None, None).await;
    assert_eq!(view["radius"]["enabled"], true);
    assert_eq!(view["radius"]["center"]["lat"], 42.6629);

    let click = json!({ "lat": 42.66, "lng": 21.16 });
    call(&app, Method::POST, &format!("/api/search-views/{}/click", id), None, Some(click)).await;
    let (status, view) = call(
        &app,
        Method::PUT,
        &format!("/api/search-views/{}/radius", id),
        None,
        Some(json!({ "radius_km": "5" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(side_list_ids(&view), vec![1]);
    assert_eq!(view["map"]["circle"]["radius_m"], 5000.0);

    // Off again: everything is back, center and radius are kept
    let (_, view) = call(&app, Method::POST, &format!("/api/search-views/{}/toggle", id), None, None).await;
    assert_eq!(side_list_ids(&view), vec![1, 2, 3]);
    assert_eq!(view["radius"]["radius_km"], 5.0);
    assert_eq!(view["radius"]["center"]["lat"], 42.66);

    let (_, view) = call(
        &app,
        Method::PUT,
        &format!("/api/search-views/{}/city", id),
        None,
        Some(json!({ "city": "Prizren" })),
    )
    .await;
    assert_eq!(side_list_ids(&view), vec![2]);

    let (status, _) = call(&app, Method::DELETE, &format!("/api/search-views/{}", id), None, None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    let (status, _) = call(&app, Method::GET, &format!("/api/search-views/{}", id), None, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_unreachable_backend_gives_empty_view() {
    let app = portal("http://127.0.0.1:9/api".to_string());

    let (status, view) = call(&app, Method::POST, "/api/search-views", None, None).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(view["count"], 0);
    assert_eq!(view["empty_message"], "Nuk u gjet pronë.");
}

#[tokio::test]
async fn test_catalogue_filters() {
    let app = portal(spawn_backend("unused".to_string()).await);

    let (status, body) = call(&app, Method::GET, "/api/properties?city=Prishtin%C3%AB&min_price=", None, None).await;
    assert_eq!(status, StatusCode::OK);
    let items = body["items"].as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["neighborhood"], "Dardani");
    assert_eq!(body["show_pagination"], false);
}

#[tokio::test]
async fn test_session_required() {
    let app = portal(spawn_backend("unused".to_string()).await);

    let (status, body) = call(&app, Method::GET, "/api/auth/me", None, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert!(body["error"].is_string());

    let expired = token("arta", &["ROLE_USER"], Duration::hours(-1));
    let (status, _) = call(&app, Method::GET, "/api/auth/me", Some(&expired), None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let user = token("arta", &["ROLE_USER"], Duration::hours(1));
    let (status, me) = call(&app, Method::GET, "/api/auth/me", Some(&user), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(me["username"], "arta");
    assert_eq!(me["is_admin"], false);
    assert_eq!(me["verified"], true);
}

#[tokio::test]
async fn test_admin_routes_require_admin_role() {
    let admin = token("admin", &["ROLE_ADMIN"], Duration::hours(1));
    let app = portal(spawn_backend(admin.clone()).await);

    let user = token("arta", &["ROLE_USER"], Duration::hours(1));
    let (status, _) = call(&app, Method::GET, "/api/admin/stats", Some(&user), None).await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, stats) = call(&app, Method::GET, "/api/admin/stats", Some(&admin), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(stats["total_properties"], 3);
}

#[tokio::test]
async fn test_unreachable_backend_falls_back_to_token_roles() {
    let app = portal("http://127.0.0.1:9/api".to_string());

    let admin = token("admin", &["ROLE_ADMIN"], Duration::hours(1));
    let (status, me) = call(&app, Method::GET, "/api/auth/me", Some(&admin), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(me["is_admin"], true);
    assert_eq!(me["verified"], false);
}

#[tokio::test]
async fn test_appointment_needs_three_hours_notice() {
    let app = portal(spawn_backend("unused".to_string()).await);
    let user = token("arta", &["ROLE_USER"], Duration::hours(1));

    let soon = (Local::now() + Duration::hours(1)).format("%Y-%m-%dT%H:%M").to_string();
    let (status, _) = call(
        &app,
        Method::POST,
        "/api/appointments",
        Some(&user),
        Some(json!({ "propertyId": 1, "date": soon })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_map_config() {
    let app = portal("http://127.0.0.1:9/api".to_string());
    let (status, body) = call(&app, Method::GET, "/api/map/config", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["default_radius_km"], 10.0);
    assert_eq!(body["max_radius_km"], 50.0);
}

fn registration(confirm_password: &str) -> Value {
    json!({
        "firstName": " Arta ",
        "lastName": "Krasniqi",
        "username": "arta",
        "email": "arta@example.com",
        "phoneNumber": "044123456",
        "password": "sekret123",
        "confirmPassword": confirm_password
    })
}

#[tokio::test]
async fn test_register_rejects_mismatched_passwords() {
    let backend = StandIn::new("unused");
    let app = portal(spawn(backend.clone()).await);

    let (status, body) = call(
        &app,
        Method::POST,
        "/api/auth/register",
        None,
        Some(registration("tjeter")),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Fjalëkalimet nuk përputhen!");

    let mut short_phone = registration("sekret123");
    short_phone["phoneNumber"] = json!("044");
    let (status, _) = call(&app, Method::POST, "/api/auth/register", None, Some(short_phone)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    assert!(backend.calls().is_empty());
    assert_eq!(backend.last_body(), None);
}

#[tokio::test]
async fn test_register_forwards_full_form() {
    let backend = StandIn::new("unused");
    let app = portal(spawn(backend.clone()).await);

    let (status, body) = call(
        &app,
        Method::POST,
        "/api/auth/register",
        None,
        Some(registration("sekret123")),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert!(body["message"].is_string());

    assert_eq!(backend.calls(), vec!["POST /api/auth/register"]);
    assert_eq!(
        backend.last_body(),
        Some(json!({
            "firstName": "Arta",
            "lastName": "Krasniqi",
            "username": "arta",
            "email": "arta@example.com",
            "phoneNumber": "044123456",
            "password": "sekret123",
            "confirmPassword": "sekret123"
        }))
    );
}

#[tokio::test]
async fn test_profile_view_and_update() {
    let backend = StandIn::new("unused");
    let app = portal(spawn(backend.clone()).await);
    let user = token("arta", &["ROLE_USER"], Duration::hours(1));

    let (status, _) = call(&app, Method::GET, "/api/profile", None, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, profile) = call(&app, Method::GET, "/api/profile", Some(&user), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        profile,
        json!({
            "username": "arta",
            "first_name": "Arta",
            "last_name": "Krasniqi",
            "phone_number": "044123456"
        })
    );

    let update = json!({
        "username": "arta",
        "firstName": "Arta",
        "lastName": "Gashi",
        "phoneNumber": "049000111"
    });
    let (status, profile) = call(&app, Method::PUT, "/api/profile", Some(&user), Some(update.clone())).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(profile["last_name"], "Gashi");
    assert_eq!(backend.last_body(), Some(update));
    assert_eq!(backend.calls().last().map(String::as_str), Some("PUT /api/profile"));
}

#[tokio::test]
async fn test_change_password() {
    let backend = StandIn::new("unused");
    let app = portal(spawn(backend.clone()).await);
    let user = token("arta", &["ROLE_USER"], Duration::hours(1));

    let mismatch = json!({
        "currentPassword": "old-secret",
        "newPassword": "new-secret",
        "confirmPassword": "other-secret"
    });
    let (status, body) = call(&app, Method::PUT, "/api/profile/password", Some(&user), Some(mismatch)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Fjalëkalimet nuk përputhen!");
    assert!(!backend.calls().contains(&"PUT /api/profile/password".to_string()));

    let wrong_current = json!({
        "currentPassword": "guess",
        "newPassword": "new-secret",
        "confirmPassword": "new-secret"
    });
    let (status, body) = call(&app, Method::PUT, "/api/profile/password", Some(&user), Some(wrong_current)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Fjalëkalimi aktual është i gabuar");

    let change = json!({
        "currentPassword": "old-secret",
        "newPassword": "new-secret",
        "confirmPassword": "new-secret"
    });
    let (status, body) = call(&app, Method::PUT, "/api/profile/password", Some(&user), Some(change.clone())).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Fjalëkalimi u ndryshua me sukses!");
    assert_eq!(backend.last_body(), Some(change));
}

fn listing(property_type: &str, title: &str) -> Value {
    json!({
        "title": title,
        "city": "Prishtinë",
        "neighborhood": "Arbëri",
        "type": property_type,
        "status": "FOR_SALE",
        "area": 80.0,
        "price": 90000.0
    })
}

#[tokio::test]
async fn test_update_property_goes_to_type_endpoint() {
    let admin = token("admin", &["ROLE_ADMIN"], Duration::hours(1));
    let backend = StandIn::new(&admin);
    let app = portal(spawn(backend.clone()).await);

    let (status, updated) = call(
        &app,
        Method::PUT,
        "/api/admin/properties/8",
        Some(&admin),
        Some(listing("SHTEPI", "Shtëpi me oborr")),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(backend.calls(), vec!["GET /api/auth/me", "PUT /api/shtepi/8"]);
    assert_eq!(updated["id"], 8);
    assert_eq!(updated["title"], "Shtëpi me oborr");
    assert_eq!(updated["type_label"], "Shtëpi");
    assert_eq!(updated["has_garden"], true);

    let forwarded = backend.last_body().unwrap();
    assert_eq!(forwarded["location"], "Prishtinë, Arbëri");
    assert_eq!(forwarded["type"], "SHTEPI");
}

#[tokio::test]
async fn test_update_property_refetches_on_empty_reply() {
    let admin = token("admin", &["ROLE_ADMIN"], Duration::hours(1));
    let backend = StandIn::new(&admin);
    let app = portal(spawn(backend.clone()).await);

    let (status, updated) = call(
        &app,
        Method::PUT,
        "/api/admin/properties/7",
        Some(&admin),
        Some(listing("BANESA", "Banesë e re")),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        backend.calls(),
        vec!["GET /api/auth/me", "PUT /api/banesa/7", "GET /api/properties/7"]
    );
    assert_eq!(updated["id"], 7);
    assert_eq!(updated["title"], "Banesë e rifreskuar");
    assert_eq!(updated["neighborhood"], "Arbëri");
    assert_eq!(updated["type_label"], "Banesë");
    assert_eq!(backend.last_body().unwrap()["title"], "Banesë e re");
}

#[tokio::test]
async fn test_admin_appointment_decisions() {
    let admin = token("admin", &["ROLE_ADMIN"], Duration::hours(1));
    let backend = StandIn::new(&admin);
    let app = portal(spawn(backend.clone()).await);

    let (status, decision) = call(&app, Method::PUT, "/api/admin/appointments/4/approve", Some(&admin), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(decision, json!({ "id": 4, "status": "APPROVED", "label": "Aprovuar" }));
    assert_eq!(
        backend.calls().last().map(String::as_str),
        Some("PUT /api/appointments/4/approve")
    );

    let (status, decision) = call(&app, Method::PUT, "/api/admin/appointments/4/reject", Some(&admin), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(decision, json!({ "id": 4, "status": "REJECTED", "label": "Refuzuar" }));
    assert_eq!(
        backend.calls().last().map(String::as_str),
        Some("PUT /api/appointments/4/reject")
    );
}

fn appointment_ids(list: &Value) -> Vec<i64> {
    list["items"]
        .as_array()
        .unwrap()
        .iter()
        .map(|a| a["id"].as_i64().unwrap())
        .collect()
}

#[tokio::test]
async fn test_admin_appointment_list_filters() {
    let admin = token("admin", &["ROLE_ADMIN"], Duration::hours(1));
    let backend = StandIn::new(&admin);
    let app = portal(spawn(backend.clone()).await);

    let (status, list) = call(&app, Method::GET, "/api/admin/appointments", Some(&admin), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(appointment_ids(&list), vec![1, 2, 3]);
    assert_eq!(list["items"][2]["property_name"], "Lokal në Pejë");
    assert_eq!(backend.calls().last().map(String::as_str), Some("GET /api/appointments"));

    let uri = "/api/admin/appointments?status=PENDING&search=dardani";
    let (_, list) = call(&app, Method::GET, uri, Some(&admin), None).await;
    assert_eq!(appointment_ids(&list), vec![1]);

    let uri = "/api/admin/appointments?status=&search=ARTA";
    let (_, list) = call(&app, Method::GET, uri, Some(&admin), None).await;
    assert_eq!(appointment_ids(&list), vec![1, 3]);

    let uri = "/api/admin/appointments?status=APPROVED&page=";
    let (_, list) = call(&app, Method::GET, uri, Some(&admin), None).await;
    assert_eq!(appointment_ids(&list), vec![2]);
    assert_eq!(list["items"][0]["user"], "blerim");
}

#[tokio::test]
async fn test_admin_user_list_marks_admins() {
    let admin = token("admin", &["ROLE_ADMIN"], Duration::hours(1));
    let app = portal(spawn_backend(admin.clone()).await);

    let (status, list) = call(&app, Method::GET, "/api/admin/users", Some(&admin), None).await;
    assert_eq!(status, StatusCode::OK);
    let users = list["items"].as_array().unwrap();
    assert_eq!(users.len(), 2);
    assert_eq!(users[0]["username"], "admin");
    assert_eq!(users[0]["is_admin"], true);
    assert_eq!(users[1]["is_admin"], false);
    assert_eq!(users[1]["enabled"], false);
}
