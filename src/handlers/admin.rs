use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Extension, Json,
};
use serde::{Deserialize, Serialize};

use super::{ListResponse, MessageResponse};
use crate::appointments::{AppointmentDecision, AppointmentFilter};
use crate::entities::{
    Appointment, AppointmentId, AppointmentStatus, DashboardStats, Property, PropertyId,
    PropertyInput, UserAccount, UserId,
};
use crate::error::{AppError, AppResult};
use crate::handlers::properties::PropertyDetailResponse;
use crate::pagination::Page;
use crate::search::ListingFilters;
use crate::session::Session;
use crate::utils::form::empty_as_none;
use crate::AppState;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct AdminPropertiesQuery {
    #[serde(deserialize_with = "empty_as_none")]
    pub page: Option<u32>,
    #[serde(flatten)]
    pub filters: ListingFilters,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct AdminAppointmentsQuery {
    #[serde(deserialize_with = "empty_as_none")]
    pub page: Option<u32>,
    #[serde(flatten)]
    pub filter: AppointmentFilter,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct AdminUsersQuery {
    #[serde(deserialize_with = "empty_as_none")]
    pub page: Option<u32>,
    pub search: Option<String>,
}

/// An account row with its admin badge resolved
#[derive(Debug, Serialize)]
pub struct UserRow {
    #[serde(flatten)]
    pub account: UserAccount,
    pub is_admin: bool,
}

impl From<UserAccount> for UserRow {
    fn from(account: UserAccount) -> Self {
        Self {
            is_admin: account.is_admin(),
            account,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct UpdateEmailRequest {
    pub email: String,
}

#[derive(Debug, Deserialize)]
pub struct UpdateRolesRequest {
    pub roles: Vec<String>,
}

// ============ Properties ============

pub async fn list_properties(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
    Query(query): Query<AdminPropertiesQuery>,
) -> AppResult<Json<ListResponse<Property>>> {
    let result = state
        .backend
        .list_properties(
            query.page.unwrap_or(1),
            state.config.listing_page_size,
            Some(session.token()),
        )
        .await?;

    let page = Page {
        items: query.filters.apply(result.items),
        ..result
    };
    Ok(Json(page.into()))
}

pub async fn create_property(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
    Json(input): Json<PropertyInput>,
) -> AppResult<(StatusCode, Json<PropertyDetailResponse>)> {
    input.validate()?;
    let created = state
        .backend
        .create_property(&input, session.token())
        .await?;
    tracing::info!(property_id = created.property.id, admin = %session.user.username, "Property created");

    Ok((StatusCode::CREATED, Json(created.into())))
}

pub async fn update_property(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
    Path(id): Path<PropertyId>,
    Json(input): Json<PropertyInput>,
) -> AppResult<Json<PropertyDetailResponse>> {
    input.validate()?;
    let updated = state
        .backend
        .update_property(id, &input, session.token())
        .await?;
    tracing::info!(property_id = id, admin = %session.user.username, "Property updated");

    Ok(Json(updated.into()))
}

pub async fn delete_property(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
    Path(id): Path<PropertyId>,
) -> AppResult<Json<MessageResponse>> {
    state.backend.delete_property(id, session.token()).await?;
    tracing::info!(property_id = id, admin = %session.user.username, "Property deleted");

    Ok(Json(MessageResponse::new("Property deleted")))
}

// ============ Appointments ============

/// One backend page, narrowed by search text and status on our side
pub async fn list_appointments(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
    Query(query): Query<AdminAppointmentsQuery>,
) -> AppResult<Json<ListResponse<Appointment>>> {
    let result = state
        .backend
        .list_appointments(
            query.page.unwrap_or(1),
            state.config.listing_page_size,
            session.token(),
        )
        .await?;

    let page = Page {
        items: query.filter.apply(result.items),
        ..result
    };
    Ok(Json(page.into()))
}

pub async fn approve_appointment(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
    Path(id): Path<AppointmentId>,
) -> AppResult<Json<AppointmentDecision>> {
    state.backend.approve_appointment(id, session.token()).await?;
    tracing::info!(appointment_id = id, admin = %session.user.username, "Appointment approved");

    Ok(Json(AppointmentDecision::new(id, AppointmentStatus::Approved)))
}

pub async fn reject_appointment(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
    Path(id): Path<AppointmentId>,
) -> AppResult<Json<AppointmentDecision>> {
    state.backend.reject_appointment(id, session.token()).await?;
    tracing::info!(appointment_id = id, admin = %session.user.username, "Appointment rejected");

    Ok(Json(AppointmentDecision::new(id, AppointmentStatus::Rejected)))
}

// ============ Users ============

pub async fn list_users(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
    Query(query): Query<AdminUsersQuery>,
) -> AppResult<Json<ListResponse<UserRow>>> {
    let page = state
        .backend
        .list_users(
            query.page.unwrap_or(1),
            state.config.listing_page_size,
            query.search.as_deref(),
            session.token(),
        )
        .await?;
    Ok(Json(page.map(UserRow::from).into()))
}

pub async fn toggle_user_status(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
    Path(id): Path<UserId>,
) -> AppResult<Json<MessageResponse>> {
    state.backend.toggle_user_status(id, session.token()).await?;
    tracing::info!(user_id = id, admin = %session.user.username, "User status toggled");

    Ok(Json(MessageResponse::new("User status updated")))
}

pub async fn update_user_email(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
    Path(id): Path<UserId>,
    Json(payload): Json<UpdateEmailRequest>,
) -> AppResult<Json<MessageResponse>> {
    let email = payload.email.trim();
    if email.is_empty() || !email.contains('@') {
        return Err(AppError::BadRequest("Invalid email address".to_string()));
    }

    state
        .backend
        .update_user_email(id, email, session.token())
        .await?;
    Ok(Json(MessageResponse::new("Email updated")))
}

pub async fn update_user_roles(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
    Path(id): Path<UserId>,
    Json(payload): Json<UpdateRolesRequest>,
) -> AppResult<Json<MessageResponse>> {
    let roles: Vec<String> = payload
        .roles
        .iter()
        .map(|r| r.trim().to_string())
        .filter(|r| !r.is_empty())
        .collect();
    if roles.is_empty() {
        return Err(AppError::BadRequest("At least one role is required".to_string()));
    }

    state
        .backend
        .update_user_roles(id, &roles, session.token())
        .await?;
    tracing::info!(user_id = id, roles = ?roles, admin = %session.user.username, "User roles updated");

    Ok(Json(MessageResponse::new("Roles updated")))
}

pub async fn delete_user(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
    Path(id): Path<UserId>,
) -> AppResult<Json<MessageResponse>> {
    state.backend.delete_user(id, session.token()).await?;
    tracing::info!(user_id = id, admin = %session.user.username, "User deleted");

    Ok(Json(MessageResponse::new("User deleted")))
}

pub async fn dashboard_stats(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
) -> AppResult<Json<DashboardStats>> {
    let stats = state.backend.dashboard_stats(session.token()).await?;
    Ok(Json(stats))
}
