use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

use super::ListResponse;
use crate::entities::{Feature, Property, PropertyDetail, PropertyId};
use crate::error::AppResult;
use crate::pagination::Page;
use crate::search::ListingFilters;
use crate::utils::form::empty_as_none;
use crate::AppState;

/// Radius used by the "nearby" strip on the detail page
pub const NEARBY_RADIUS_KM: f64 = 10.0;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct CatalogueQuery {
    #[serde(deserialize_with = "empty_as_none")]
    pub page: Option<u32>,
    #[serde(flatten)]
    pub filters: ListingFilters,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct NearbyQuery {
    #[serde(deserialize_with = "empty_as_none")]
    pub radius_km: Option<f64>,
}

#[derive(Debug, Serialize)]
pub struct PropertyDetailResponse {
    #[serde(flatten)]
    pub detail: PropertyDetail,
    pub features: Vec<Feature>,
    pub status_label: Option<&'static str>,
    pub type_label: Option<&'static str>,
}

impl From<PropertyDetail> for PropertyDetailResponse {
    fn from(detail: PropertyDetail) -> Self {
        Self {
            features: detail.features(),
            status_label: detail.property.status.map(|s| s.label()),
            type_label: detail.property.property_type.map(|t| t.label()),
            detail,
        }
    }
}

/// Public catalogue: one backend page, narrowed by the filter form
pub async fn list_properties(
    State(state): State<AppState>,
    Query(query): Query<CatalogueQuery>,
) -> AppResult<Json<ListResponse<Property>>> {
    let page = query.page.unwrap_or(1);
    let result = state
        .backend
        .list_properties(page, state.config.listing_page_size, None)
        .await?;

    let filters = query.filters;
    let page = Page {
        items: filters.apply(result.items),
        ..result
    };
    Ok(Json(page.into()))
}

pub async fn get_property(
    State(state): State<AppState>,
    Path(id): Path<PropertyId>,
) -> AppResult<Json<PropertyDetailResponse>> {
    let detail = state.backend.get_property(id).await?;
    Ok(Json(detail.into()))
}

/// Other listings around this one; never includes the property itself
pub async fn nearby_properties(
    State(state): State<AppState>,
    Path(id): Path<PropertyId>,
    Query(query): Query<NearbyQuery>,
) -> AppResult<Json<Vec<Property>>> {
    let radius_km = query
        .radius_km
        .filter(|r| r.is_finite() && *r >= 0.0)
        .unwrap_or(NEARBY_RADIUS_KM);
    let nearby = state.backend.nearby_properties(id, radius_km).await?;
    Ok(Json(nearby))
}
