//! Raw payloads as the backend sends them.
//!
//! Shapes here are loose: numbers may arrive as strings,
//! nested objects may be missing. Nothing outside `backend` sees these types;
//! `normalize` turns them into the canonical entities.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::entities::{
    ListingStatus, PasswordChange, Profile, PropertyInput, PropertyType, Registration,
};

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawProperty {
    pub id: Option<Value>,
    pub title: Option<String>,
    pub location: Option<String>,
    #[serde(rename = "type")]
    pub property_type: Option<String>,
    pub status: Option<String>,
    pub area: Option<Value>,
    pub price: Option<Value>,
    pub rooms: Option<Value>,
    pub floor: Option<Value>,
    pub images: Option<Vec<Value>>,
    pub latitude: Option<Value>,
    pub longitude: Option<Value>,
    pub description: Option<String>,
    pub bathrooms: Option<Value>,
    pub floors: Option<Value>,
    pub has_elevator: Option<bool>,
    pub has_balcony: Option<bool>,
    pub has_garden: Option<bool>,
    pub has_garage: Option<bool>,
    pub has_parking: Option<bool>,
    pub has_infrastructure: Option<bool>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawAppointment {
    pub id: Option<Value>,
    pub property_id: Option<Value>,
    pub property_name: Option<String>,
    pub property: Option<RawPropertyRef>,
    pub user_name: Option<String>,
    pub user: Option<Value>,
    pub date: Option<String>,
    pub created_at: Option<String>,
    pub status: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct RawPropertyRef {
    pub id: Option<Value>,
    pub title: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct RawUser {
    pub id: Option<Value>,
    pub username: Option<String>,
    pub email: Option<String>,
    pub roles: Option<Vec<String>>,
    pub enabled: Option<bool>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct RawLoginResponse {
    pub token: Option<String>,
    pub username: Option<String>,
    pub roles: Option<Vec<String>>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawProfile {
    pub username: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone_number: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct LoginPayload<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterPayload<'a> {
    pub first_name: &'a str,
    pub last_name: &'a str,
    pub username: &'a str,
    pub email: &'a str,
    pub phone_number: &'a str,
    pub password: &'a str,
    pub confirm_password: &'a str,
}

impl<'a> From<&'a Registration> for RegisterPayload<'a> {
    fn from(form: &'a Registration) -> Self {
        Self {
            first_name: form.first_name.trim(),
            last_name: form.last_name.trim(),
            username: form.username.trim(),
            email: form.email.trim(),
            phone_number: form.phone_number.trim(),
            password: &form.password,
            confirm_password: &form.confirm_password,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfilePayload<'a> {
    pub username: &'a str,
    pub first_name: &'a str,
    pub last_name: &'a str,
    pub phone_number: &'a str,
}

impl<'a> From<&'a Profile> for ProfilePayload<'a> {
    fn from(profile: &'a Profile) -> Self {
        Self {
            username: profile.username.trim(),
            first_name: profile.first_name.trim(),
            last_name: profile.last_name.trim(),
            phone_number: profile.phone_number.trim(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PasswordPayload<'a> {
    pub current_password: &'a str,
    pub new_password: &'a str,
    pub confirm_password: &'a str,
}

impl<'a> From<&'a PasswordChange> for PasswordPayload<'a> {
    fn from(change: &'a PasswordChange) -> Self {
        Self {
            current_password: &change.current_password,
            new_password: &change.new_password,
            confirm_password: &change.confirm_password,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentPayload {
    pub property_id: i64,
    /// `YYYY-MM-DDTHH:MM`, the format of a datetime-local input
    pub date: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyPayload {
    pub title: String,
    pub location: String,
    #[serde(rename = "type")]
    pub property_type: PropertyType,
    pub status: ListingStatus,
    pub area: f64,
    pub price: f64,
    pub images: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rooms: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub floor: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bathrooms: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub floors: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_elevator: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_balcony: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_garden: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_garage: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_parking: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_infrastructure: Option<bool>,
}

impl From<&PropertyInput> for PropertyPayload {
    fn from(input: &PropertyInput) -> Self {
        Self {
            title: input.title.trim().to_string(),
            location: input.location(),
            property_type: input.property_type,
            status: input.status,
            area: input.area,
            price: input.price,
            images: input.images.clone(),
            rooms: input.rooms,
            floor: input.floor,
            bathrooms: input.bathrooms,
            floors: input.floors,
            latitude: input.latitude,
            longitude: input.longitude,
            description: input.description.clone(),
            has_elevator: input.has_elevator,
            has_balcony: input.has_balcony,
            has_garden: input.has_garden,
            has_garage: input.has_garage,
            has_parking: input.has_parking,
            has_infrastructure: input.has_infrastructure,
        }
    }
}
