use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use axum_extra::{
    headers::{authorization::Bearer, Authorization},
    TypedHeader,
};

use crate::error::{AppError, AppResult};
use crate::session::Session;
use crate::AppState;

/// Resolve the bearer token into a [`Session`] and attach it to the request
pub async fn session_middleware(
    State(state): State<AppState>,
    auth: Option<TypedHeader<Authorization<Bearer>>>,
    mut request: Request,
    next: Next,
) -> AppResult<Response> {
    let TypedHeader(auth) =
        auth.ok_or_else(|| AppError::Unauthorized("Login required".to_string()))?;

    let session = Session::establish(&state.backend, auth.token()).await?;
    request.extensions_mut().insert(session);
    Ok(next.run(request).await)
}

/// Require an admin session. Must run after [`session_middleware`].
pub async fn require_admin(request: Request, next: Next) -> AppResult<Response> {
    let session = request
        .extensions()
        .get::<Session>()
        .ok_or_else(|| AppError::Unauthorized("No authentication found".to_string()))?;

    if !session.is_admin() {
        return Err(AppError::Forbidden("Admin access required".to_string()));
    }

    Ok(next.run(request).await)
}
