use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::AppResult;
use crate::search::controller::{MAX_RADIUS_KM, MIN_RADIUS_KM};
use crate::search::view::MAP_ZOOM;
use crate::search::{Projection, RadiusInput, SearchView};
use crate::utils::geo::GeoPoint;
use crate::AppState;

#[derive(Debug, Serialize)]
pub struct MapConfigResponse {
    pub default_center: GeoPoint,
    pub default_radius_km: f64,
    pub min_radius_km: f64,
    pub max_radius_km: f64,
    pub zoom: u8,
    pub tile_url: String,
}

#[derive(Debug, Serialize)]
pub struct ViewResponse {
    pub id: Uuid,
    #[serde(flatten)]
    pub projection: Projection,
}

#[derive(Debug, Deserialize)]
pub struct RadiusRequest {
    pub radius_km: RadiusInput,
}

#[derive(Debug, Deserialize)]
pub struct CityRequest {
    #[serde(default)]
    pub city: Option<String>,
}

/// Map defaults for the client
pub async fn map_config(State(state): State<AppState>) -> Json<MapConfigResponse> {
    let map = &state.config.map;
    Json(MapConfigResponse {
        default_center: map.default_center,
        default_radius_km: map.default_radius_km,
        min_radius_km: MIN_RADIUS_KM,
        max_radius_km: MAX_RADIUS_KM,
        zoom: MAP_ZOOM,
        tile_url: map.tile_url.clone(),
    })
}

/// Mount a map page: fetch the property snapshot once and start a view.
/// A failed fetch still creates the view, with nothing in it.
pub async fn create_view(
    State(state): State<AppState>,
) -> (StatusCode, Json<ViewResponse>) {
    let snapshot = match state
        .backend
        .list_properties(1, state.config.snapshot_page_size, None)
        .await
    {
        Ok(page) => page.items,
        Err(e) => {
            tracing::warn!(error = %e, "Property snapshot unavailable, starting with an empty map");
            Vec::new()
        }
    };

    let located = snapshot.iter().filter(|p| p.location.is_some()).count();
    let (id, projection) = state
        .views
        .insert(SearchView::new(snapshot, &state.config.map))
        .await;
    tracing::debug!(view = %id, properties = projection.count, located, "Search view created");

    (StatusCode::CREATED, Json(ViewResponse { id, projection }))
}

pub async fn get_view(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ViewResponse>> {
    let projection = state.views.projection(id).await?;
    Ok(Json(ViewResponse { id, projection }))
}

pub async fn delete_view(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<StatusCode> {
    state.views.remove(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn toggle_radius(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ViewResponse>> {
    let projection = state
        .views
        .update(id, |view| {
            view.toggle();
        })
        .await?;
    Ok(Json(ViewResponse { id, projection }))
}

/// Clicks while the radius tool is off are accepted and ignored
pub async fn click_map(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(point): Json<GeoPoint>,
) -> AppResult<Json<ViewResponse>> {
    let projection = state
        .views
        .update(id, |view| {
            view.click(point);
        })
        .await?;
    Ok(Json(ViewResponse { id, projection }))
}

/// Out-of-range values are clamped; non-numeric ones keep the current radius
pub async fn set_radius(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<RadiusRequest>,
) -> AppResult<Json<ViewResponse>> {
    let projection = state
        .views
        .update(id, |view| {
            if !view.set_radius(payload.radius_km) {
                tracing::debug!(view = %id, "Ignoring non-numeric radius");
            }
        })
        .await?;
    Ok(Json(ViewResponse { id, projection }))
}

pub async fn set_city(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<CityRequest>,
) -> AppResult<Json<ViewResponse>> {
    let projection = state
        .views
        .update(id, |view| view.set_city(payload.city))
        .await?;
    Ok(Json(ViewResponse { id, projection }))
}
