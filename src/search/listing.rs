use serde::Deserialize;

use crate::entities::{ListingStatus, Property, PropertyType};
use crate::utils::form::empty_as_none;

/// Catalogue and admin list filters, as submitted from the filter form.
///
/// Blank fields are absent. A numeric bound excludes properties that lack the
/// field it refers to.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ListingFilters {
    #[serde(deserialize_with = "empty_as_none")]
    pub city: Option<String>,
    #[serde(deserialize_with = "empty_as_none")]
    pub neighborhood: Option<String>,
    #[serde(rename = "type", deserialize_with = "empty_as_none")]
    pub property_type: Option<PropertyType>,
    #[serde(deserialize_with = "empty_as_none")]
    pub status: Option<ListingStatus>,
    #[serde(deserialize_with = "empty_as_none")]
    pub min_area: Option<f64>,
    #[serde(deserialize_with = "empty_as_none")]
    pub max_area: Option<f64>,
    #[serde(deserialize_with = "empty_as_none")]
    pub floor: Option<i32>,
    #[serde(deserialize_with = "empty_as_none")]
    pub rooms: Option<i32>,
    #[serde(deserialize_with = "empty_as_none")]
    pub min_price: Option<f64>,
    #[serde(deserialize_with = "empty_as_none")]
    pub max_price: Option<f64>,
    #[serde(deserialize_with = "empty_as_none")]
    pub search: Option<String>,
}

impl ListingFilters {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn matches(&self, p: &Property) -> bool {
        if let Some(city) = &self.city {
            if &p.city != city {
                return false;
            }
        }
        if let Some(neighborhood) = &self.neighborhood {
            if !contains_ignore_case(&p.neighborhood, neighborhood) {
                return false;
            }
        }
        if self.property_type.is_some() && p.property_type != self.property_type {
            return false;
        }
        if self.status.is_some() && p.status != self.status {
            return false;
        }
        if !within(p.area, self.min_area, self.max_area) {
            return false;
        }
        if !within(p.price, self.min_price, self.max_price) {
            return false;
        }
        if let Some(floor) = self.floor {
            if p.floor != Some(floor) {
                return false;
            }
        }
        if let Some(rooms) = self.rooms {
            if !p.rooms.is_some_and(|r| r >= rooms) {
                return false;
            }
        }
        if let Some(search) = &self.search {
            let hit = [&p.title, &p.city, &p.neighborhood]
                .iter()
                .any(|field| contains_ignore_case(field, search));
            if !hit {
                return false;
            }
        }
        true
    }

    pub fn apply(&self, properties: Vec<Property>) -> Vec<Property> {
        if self.is_empty() {
            return properties;
        }
        properties.into_iter().filter(|p| self.matches(p)).collect()
    }
}

fn within(value: Option<f64>, min: Option<f64>, max: Option<f64>) -> bool {
    if min.is_none() && max.is_none() {
        return true;
    }
    match value {
        Some(v) => min.is_none_or(|m| v >= m) && max.is_none_or(|m| v <= m),
        None => false,
    }
}

pub(crate) fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.trim().to_lowercase())
}
