//! The single place where backend payloads become canonical entities.

use chrono::{DateTime, NaiveDateTime};
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::wire::{RawAppointment, RawProperty, RawUser};
use crate::entities::{
    Appointment, AppointmentStatus, ListingStatus, Property, PropertyDetail, PropertyType,
    UserAccount,
};
use crate::pagination::Page;
use crate::utils::geo::GeoPoint;

/// Split `"City, Neighborhood"` at the first comma
pub fn split_location(location: Option<&str>) -> (String, String) {
    match location {
        None => (String::new(), String::new()),
        Some(location) => match location.split_once(',') {
            Some((city, rest)) => (city.trim().to_string(), rest.trim().to_string()),
            None => (location.trim().to_string(), String::new()),
        },
    }
}

/// JSON number or numeric string (BigDecimal fields arrive either way)
pub fn number(value: Option<&Value>) -> Option<f64> {
    let n: f64 = match value? {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().parse().ok()?,
        _ => return None,
    };
    n.is_finite().then_some(n)
}

pub fn integer(value: Option<&Value>) -> Option<i64> {
    match value? {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().filter(|f| f.fract() == 0.0).map(|f| f as i64)),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn small_integer(value: Option<&Value>) -> Option<i32> {
    integer(value).and_then(|n| i32::try_from(n).ok())
}

/// Coordinates survive only as a complete, in-range pair
pub fn coordinates(lat: Option<&Value>, lng: Option<&Value>) -> Option<GeoPoint> {
    let point = GeoPoint::new(number(lat)?, number(lng)?);
    point.is_valid().then_some(point)
}

pub fn property_type(raw: Option<&str>) -> Option<PropertyType> {
    raw?.parse().ok()
}

pub fn listing_status(raw: Option<&str>) -> Option<ListingStatus> {
    raw?.parse().ok()
}

/// Missing or unknown statuses count as pending
pub fn appointment_status(raw: Option<&str>) -> AppointmentStatus {
    raw.and_then(|s| s.parse().ok()).unwrap_or_default()
}

pub fn parse_datetime(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.naive_local());
    }
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
}

pub fn property(raw: RawProperty) -> Option<Property> {
    let id = integer(raw.id.as_ref())?;
    let (city, neighborhood) = split_location(raw.location.as_deref());

    Some(Property {
        id,
        title: raw.title.unwrap_or_default(),
        city,
        neighborhood,
        property_type: property_type(raw.property_type.as_deref()),
        status: listing_status(raw.status.as_deref()),
        area: number(raw.area.as_ref()),
        price: number(raw.price.as_ref()),
        rooms: small_integer(raw.rooms.as_ref()),
        floor: small_integer(raw.floor.as_ref()),
        images: raw
            .images
            .unwrap_or_default()
            .into_iter()
            .filter_map(|img| match img {
                Value::String(url) if !url.trim().is_empty() => Some(url),
                _ => None,
            })
            .collect(),
        location: coordinates(raw.latitude.as_ref(), raw.longitude.as_ref()),
    })
}

pub fn property_detail(mut raw: RawProperty) -> Option<PropertyDetail> {
    let description = raw.description.take();
    let bathrooms = small_integer(raw.bathrooms.as_ref());
    let floors = small_integer(raw.floors.as_ref());
    let flags = (
        raw.has_elevator,
        raw.has_balcony,
        raw.has_garden,
        raw.has_garage,
        raw.has_parking,
        raw.has_infrastructure,
    );

    Some(PropertyDetail {
        property: property(raw)?,
        description,
        bathrooms,
        floors,
        has_elevator: flags.0,
        has_balcony: flags.1,
        has_garden: flags.2,
        has_garage: flags.3,
        has_parking: flags.4,
        has_infrastructure: flags.5,
    })
}

pub fn appointment(raw: RawAppointment) -> Option<Appointment> {
    let id = integer(raw.id.as_ref())?;

    let property_name = raw
        .property_name
        .filter(|s| !s.is_empty())
        .or_else(|| raw.property.as_ref().and_then(|p| p.title.clone()))
        .unwrap_or_else(|| "-".to_string());
    let property_id = integer(raw.property_id.as_ref())
        .or_else(|| raw.property.as_ref().and_then(|p| integer(p.id.as_ref())));
    let user = raw
        .user_name
        .filter(|s| !s.is_empty())
        .or_else(|| match &raw.user {
            Some(Value::Object(map)) => map.get("username").and_then(Value::as_str).map(String::from),
            Some(Value::String(name)) => Some(name.clone()),
            _ => None,
        })
        .unwrap_or_else(|| "-".to_string());
    let date = raw
        .date
        .as_deref()
        .or(raw.created_at.as_deref())
        .and_then(parse_datetime);

    Some(Appointment {
        id,
        property_id,
        property_name,
        user,
        date,
        status: appointment_status(raw.status.as_deref()),
    })
}

pub fn user(raw: RawUser) -> Option<UserAccount> {
    Some(UserAccount {
        id: integer(raw.id.as_ref())?,
        username: raw.username.unwrap_or_default(),
        email: raw.email,
        roles: raw.roles.unwrap_or_default(),
        enabled: raw.enabled.unwrap_or(true),
    })
}

/// Accepts a bare array, a `{content, totalPages}` page or an `{items, totalPages}` page.
///
/// Records that fail to decode or normalize are dropped with a warning rather than
/// failing the whole page.
pub fn page<R, T>(body: Value, page: u32, normalize: impl Fn(R) -> Option<T>) -> Page<T>
where
    R: DeserializeOwned,
{
    let (records, total_pages) = match body {
        Value::Array(records) => (records, 1),
        Value::Object(mut map) => {
            let total_pages = integer(map.get("totalPages"))
                .and_then(|n| u32::try_from(n).ok())
                .unwrap_or(1);
            let records = match map.remove("content").or_else(|| map.remove("items")) {
                Some(Value::Array(records)) => records,
                _ => Vec::new(),
            };
            (records, total_pages)
        }
        _ => (Vec::new(), 1),
    };

    let items = records
        .into_iter()
        .filter_map(|record| match serde_json::from_value::<R>(record) {
            Ok(raw) => normalize(raw),
            Err(e) => {
                tracing::warn!(error = %e, "Skipping malformed record");
                None
            }
        })
        .collect();

    Page::new(items, page, total_pages)
}
