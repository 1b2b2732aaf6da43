use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::utils::geo::GeoPoint;

pub type PropertyId = i64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PropertyType {
    /// Apartment
    Banesa,
    /// House
    Shtepi,
    /// Commercial unit
    Lokale,
    /// Land
    Toka,
}

impl PropertyType {
    /// Backend collection that owns updates for this type
    pub fn endpoint(&self) -> &'static str {
        match self {
            PropertyType::Banesa => "banesa",
            PropertyType::Shtepi => "shtepi",
            PropertyType::Lokale => "lokale",
            PropertyType::Toka => "toka",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PropertyType::Banesa => "Banesë",
            PropertyType::Shtepi => "Shtëpi",
            PropertyType::Lokale => "Lokal",
            PropertyType::Toka => "Tokë",
        }
    }
}

impl FromStr for PropertyType {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "BANESA" => Ok(PropertyType::Banesa),
            "SHTEPI" => Ok(PropertyType::Shtepi),
            "LOKALE" => Ok(PropertyType::Lokale),
            "TOKA" => Ok(PropertyType::Toka),
            other => Err(AppError::BadRequest(format!("Unknown property type: {}", other))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ListingStatus {
    ForSale,
    ForRent,
}

impl ListingStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ListingStatus::ForSale => "Në shitje",
            ListingStatus::ForRent => "Me qira",
        }
    }
}

impl FromStr for ListingStatus {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "FOR_SALE" => Ok(ListingStatus::ForSale),
            "FOR_RENT" => Ok(ListingStatus::ForRent),
            other => Err(AppError::BadRequest(format!("Unknown listing status: {}", other))),
        }
    }
}

/// Canonical listing record, produced once by the normalization boundary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Property {
    pub id: PropertyId,
    pub title: String,
    pub city: String,
    pub neighborhood: String,
    #[serde(rename = "type")]
    pub property_type: Option<PropertyType>,
    pub status: Option<ListingStatus>,
    pub area: Option<f64>,
    pub price: Option<f64>,
    pub rooms: Option<i32>,
    pub floor: Option<i32>,
    pub images: Vec<String>,
    /// Both coordinates or neither
    pub location: Option<GeoPoint>,
}

impl Property {
    pub fn thumbnail(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }

    pub fn detail_path(&self) -> String {
        detail_path(self.id)
    }
}

pub fn detail_path(id: PropertyId) -> String {
    format!("/properties/{}", id)
}

/// A property with the type-specific attributes shown on its detail page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyDetail {
    #[serde(flatten)]
    pub property: Property,
    pub description: Option<String>,
    pub bathrooms: Option<i32>,
    pub floors: Option<i32>,
    pub has_elevator: Option<bool>,
    pub has_balcony: Option<bool>,
    pub has_garden: Option<bool>,
    pub has_garage: Option<bool>,
    pub has_parking: Option<bool>,
    pub has_infrastructure: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Feature {
    pub label: &'static str,
    pub value: String,
}

impl PropertyDetail {
    /// Label/value pairs for the detail page, depending on the property type
    pub fn features(&self) -> Vec<Feature> {
        let mut features = Vec::new();
        let p = &self.property;

        if let Some(area) = p.area.filter(|a| *a > 0.0) {
            features.push(feature("Sipërfaqja", format!("{} m²", area)));
        }
        if let Some(status) = p.status {
            features.push(feature("Statusi", status.label().to_string()));
        }

        match p.property_type {
            Some(PropertyType::Banesa) => {
                push_count(&mut features, "Dhomat", p.rooms);
                push_count(&mut features, "Banjot", self.bathrooms);
                push_count(&mut features, "Kati", p.floor);
                push_flag(&mut features, "Ashensor", self.has_elevator);
                push_flag(&mut features, "Ballkon", self.has_balcony);
            }
            Some(PropertyType::Shtepi) => {
                push_count(&mut features, "Kate", self.floors);
                push_flag(&mut features, "Kopsht", self.has_garden);
                push_flag(&mut features, "Garazh", self.has_garage);
                push_count(&mut features, "Banjot", self.bathrooms);
            }
            Some(PropertyType::Lokale) => {
                push_count(&mut features, "Kati", p.floor);
                push_flag(&mut features, "Parking", self.has_parking);
            }
            Some(PropertyType::Toka) => {
                push_flag(&mut features, "Infrastrukturë", self.has_infrastructure);
            }
            None => {}
        }

        features
    }
}

fn feature(label: &'static str, value: String) -> Feature {
    Feature { label, value }
}

fn push_count(features: &mut Vec<Feature>, label: &'static str, value: Option<i32>) {
    if let Some(v) = value.filter(|v| *v != 0) {
        features.push(feature(label, v.to_string()));
    }
}

fn push_flag(features: &mut Vec<Feature>, label: &'static str, value: Option<bool>) {
    if let Some(v) = value {
        features.push(feature(label, if v { "Po" } else { "Jo" }.to_string()));
    }
}

/// Admin form for creating or editing a listing
#[derive(Debug, Clone, Deserialize)]
pub struct PropertyInput {
    pub title: String,
    pub city: String,
    #[serde(default)]
    pub neighborhood: String,
    #[serde(rename = "type")]
    pub property_type: PropertyType,
    pub status: ListingStatus,
    pub area: f64,
    pub price: f64,
    pub rooms: Option<i32>,
    pub floor: Option<i32>,
    pub bathrooms: Option<i32>,
    pub floors: Option<i32>,
    #[serde(default)]
    pub images: Vec<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub description: Option<String>,
    pub has_elevator: Option<bool>,
    pub has_balcony: Option<bool>,
    pub has_garden: Option<bool>,
    pub has_garage: Option<bool>,
    pub has_parking: Option<bool>,
    pub has_infrastructure: Option<bool>,
}

impl PropertyInput {
    pub fn validate(&self) -> AppResult<()> {
        if self.title.trim().is_empty() {
            return Err(AppError::BadRequest("Title is required".to_string()));
        }
        if self.city.trim().is_empty() {
            return Err(AppError::BadRequest("City is required".to_string()));
        }
        if !(self.area.is_finite() && self.area > 0.0) {
            return Err(AppError::BadRequest("Area must be positive".to_string()));
        }
        if !(self.price.is_finite() && self.price >= 0.0) {
            return Err(AppError::BadRequest("Price cannot be negative".to_string()));
        }

        match (self.latitude, self.longitude) {
            (None, None) => Ok(()),
            (Some(lat), Some(lng)) if GeoPoint::new(lat, lng).is_valid() => Ok(()),
            (Some(_), Some(_)) => Err(AppError::BadRequest("Coordinates out of range".to_string())),
            _ => Err(AppError::BadRequest(
                "Latitude and longitude must be given together".to_string(),
            )),
        }
    }

    /// The backend stores city and neighborhood as one `"City, Neighborhood"` string
    pub fn location(&self) -> String {
        let city = self.city.trim();
        let neighborhood = self.neighborhood.trim();
        if neighborhood.is_empty() {
            city.to_string()
        } else {
            format!("{}, {}", city, neighborhood)
        }
    }
}
