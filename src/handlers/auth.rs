use axum::{
    extract::{Query, State},
    http::StatusCode,
    Extension, Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::MessageResponse;
use crate::entities::Registration;
use crate::error::{AppError, AppResult};
use crate::session::{LoginOutcome, Session};
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct ForgotPasswordRequest {
    pub email: String,
}

#[derive(Debug, Deserialize)]
pub struct ResetPasswordRequest {
    pub token: String,
    #[serde(alias = "newPassword")]
    pub new_password: String,
}

#[derive(Debug, Deserialize)]
pub struct VerifyQuery {
    pub token: String,
}

#[derive(Debug, Serialize)]
pub struct MeResponse {
    pub username: String,
    pub email: Option<String>,
    pub roles: Vec<String>,
    pub is_admin: bool,
    pub verified: bool,
    pub expires_at: Option<DateTime<Utc>>,
}

fn require(field: &str, value: &str) -> AppResult<()> {
    if value.trim().is_empty() {
        return Err(AppError::BadRequest(format!("{} is required", field)));
    }
    Ok(())
}

/// Log in against the backend and tell the client where to go next
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> AppResult<Json<LoginOutcome>> {
    require("Username", &payload.username)?;
    require("Password", &payload.password)?;

    let grant = state
        .backend
        .login(payload.username.trim(), &payload.password)
        .await?;
    tracing::info!(user = %grant.username, "User logged in");

    Ok(Json(grant.into()))
}

/// Validated here first; a rejected form never reaches the backend
pub async fn register(
    State(state): State<AppState>,
    Json(form): Json<Registration>,
) -> AppResult<(StatusCode, Json<MessageResponse>)> {
    form.validate()?;

    state.backend.register(&form).await?;
    tracing::info!(user = %form.username.trim(), "User registered");

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new(
            "Regjistrimi u krye. Kontrolloni email-in për verifikim.",
        )),
    ))
}

/// Sessions live in the client; there is nothing to tear down here
pub async fn logout() -> Json<MessageResponse> {
    Json(MessageResponse::new("Logged out"))
}

pub async fn forgot_password(
    State(state): State<AppState>,
    Json(payload): Json<ForgotPasswordRequest>,
) -> AppResult<Json<MessageResponse>> {
    require("Email", &payload.email)?;
    state.backend.forgot_password(payload.email.trim()).await?;
    Ok(Json(MessageResponse::new(
        "Nëse email-i ekziston, do të merrni një link për rivendosjen e fjalëkalimit.",
    )))
}

pub async fn reset_password(
    State(state): State<AppState>,
    Json(payload): Json<ResetPasswordRequest>,
) -> AppResult<Json<MessageResponse>> {
    require("Token", &payload.token)?;
    require("Password", &payload.new_password)?;
    state
        .backend
        .reset_password(payload.token.trim(), &payload.new_password)
        .await?;
    Ok(Json(MessageResponse::new("Fjalëkalimi u ndryshua me sukses.")))
}

pub async fn verify_email(
    State(state): State<AppState>,
    Query(query): Query<VerifyQuery>,
) -> AppResult<Json<MessageResponse>> {
    require("Token", &query.token)?;
    state.backend.verify_email(query.token.trim()).await?;
    Ok(Json(MessageResponse::new("Email-i u verifikua me sukses.")))
}

pub async fn me(Extension(session): Extension<Session>) -> Json<MeResponse> {
    Json(MeResponse {
        is_admin: session.is_admin(),
        verified: session.verified,
        expires_at: session.expires_at,
        username: session.user.username,
        email: session.user.email,
        roles: session.user.roles,
    })
}
