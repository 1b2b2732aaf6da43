use axum::{extract::State, http::StatusCode, Extension, Json};
use chrono::Local;
use serde::Deserialize;

use super::MessageResponse;
use crate::appointments::validate_requested_date;
use crate::backend::normalize::parse_datetime;
use crate::entities::PropertyId;
use crate::error::{AppError, AppResult};
use crate::session::Session;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct AppointmentRequest {
    #[serde(alias = "propertyId")]
    pub property_id: PropertyId,
    /// Local date and time, as entered in a datetime-local field
    pub date: String,
}

/// Ask for a viewing of a property
pub async fn request_appointment(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
    Json(payload): Json<AppointmentRequest>,
) -> AppResult<(StatusCode, Json<MessageResponse>)> {
    let date = parse_datetime(&payload.date)
        .ok_or_else(|| AppError::BadRequest("Invalid appointment date".to_string()))?;
    validate_requested_date(date, Local::now().naive_local())?;

    state
        .backend
        .request_appointment(payload.property_id, date, session.token())
        .await?;
    tracing::info!(
        user = %session.user.username,
        property_id = payload.property_id,
        date = %date,
        "Appointment requested"
    );

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("Kërkesa për takim u dërgua.")),
    ))
}
