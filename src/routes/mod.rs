use axum::{
    middleware,
    routing::{delete, get, post, put},
    Router,
};

use crate::handlers::{admin, appointments, auth, profile, properties, search};
use crate::middleware::auth::{require_admin, session_middleware};
use crate::AppState;

pub fn create_router(state: AppState) -> Router {
    // Map page state, one entry per mounted view
    let search_routes = Router::new()
        .route("/", post(search::create_view))
        .route("/{id}", get(search::get_view).delete(search::delete_view))
        .route("/{id}/toggle", post(search::toggle_radius))
        .route("/{id}/click", post(search::click_map))
        .route("/{id}/radius", put(search::set_radius))
        .route("/{id}/city", put(search::set_city));

    let property_routes = Router::new()
        .route("/", get(properties::list_properties))
        .route("/{id}", get(properties::get_property))
        .route("/{id}/nearby", get(properties::nearby_properties));

    let auth_routes = Router::new()
        .route("/login", post(auth::login))
        .route("/register", post(auth::register))
        .route("/logout", post(auth::logout))
        .route("/forgot-password", post(auth::forgot_password))
        .route("/reset-password", post(auth::reset_password))
        .route("/verify", get(auth::verify_email));

    // Requires a live session
    let session_routes = Router::new()
        .route("/auth/me", get(auth::me))
        .route("/appointments", post(appointments::request_appointment))
        .route("/profile", get(profile::get_profile).put(profile::update_profile))
        .route("/profile/password", put(profile::change_password))
        .layer(middleware::from_fn_with_state(state.clone(), session_middleware));

    // Admin routes (requires session + admin role)
    let admin_routes = Router::new()
        .route("/properties", get(admin::list_properties))
        .route("/properties", post(admin::create_property))
        .route("/properties/{id}", put(admin::update_property))
        .route("/properties/{id}", delete(admin::delete_property))
        .route("/appointments", get(admin::list_appointments))
        .route("/appointments/{id}/approve", put(admin::approve_appointment))
        .route("/appointments/{id}/reject", put(admin::reject_appointment))
        .route("/users", get(admin::list_users))
        .route("/users/{id}", delete(admin::delete_user))
        .route("/users/{id}/toggle-status", put(admin::toggle_user_status))
        .route("/users/{id}/email", put(admin::update_user_email))
        .route("/users/{id}/roles", put(admin::update_user_roles))
        .route("/stats", get(admin::dashboard_stats))
        .layer(middleware::from_fn(require_admin))
        .layer(middleware::from_fn_with_state(state.clone(), session_middleware));

    Router::new()
        .route("/api/map/config", get(search::map_config))
        .nest("/api/search-views", search_routes)
        .nest("/api/properties", property_routes)
        .nest("/api/auth", auth_routes)
        .nest("/api", session_routes)
        .nest("/api/admin", admin_routes)
        .with_state(state)
}
