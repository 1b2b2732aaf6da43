use axum::{extract::State, Extension, Json};

use super::MessageResponse;
use crate::entities::{PasswordChange, Profile};
use crate::error::AppResult;
use crate::session::Session;
use crate::AppState;

pub async fn get_profile(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
) -> AppResult<Json<Profile>> {
    let profile = state.backend.get_profile(session.token()).await?;
    Ok(Json(profile))
}

pub async fn update_profile(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
    Json(profile): Json<Profile>,
) -> AppResult<Json<Profile>> {
    profile.validate()?;
    let updated = state.backend.update_profile(&profile, session.token()).await?;
    tracing::info!(user = %session.user.username, "Profile updated");

    Ok(Json(updated))
}

/// Mismatched confirmation is rejected before the backend is asked
pub async fn change_password(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
    Json(change): Json<PasswordChange>,
) -> AppResult<Json<MessageResponse>> {
    change.validate()?;
    state.backend.change_password(&change, session.token()).await?;
    tracing::info!(user = %session.user.username, "Password changed");

    Ok(Json(MessageResponse::new("Fjalëkalimi u ndryshua me sukses!")))
}
