use std::str::FromStr;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::property::PropertyId;
use crate::error::AppError;

pub type AppointmentId = i64;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AppointmentStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
}

impl AppointmentStatus {
    pub fn label(&self) -> &'static str {
        match self {
            AppointmentStatus::Pending => "Në pritje",
            AppointmentStatus::Approved => "Aprovuar",
            AppointmentStatus::Rejected => "Refuzuar",
        }
    }
}

impl FromStr for AppointmentStatus {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "PENDING" => Ok(AppointmentStatus::Pending),
            "APPROVED" => Ok(AppointmentStatus::Approved),
            "REJECTED" => Ok(AppointmentStatus::Rejected),
            other => Err(AppError::BadRequest(format!("Unknown appointment status: {}", other))),
        }
    }
}

/// A viewing request, as shown in the admin approval list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Appointment {
    pub id: AppointmentId,
    pub property_id: Option<PropertyId>,
    pub property_name: String,
    pub user: String,
    pub date: Option<NaiveDateTime>,
    pub status: AppointmentStatus,
}
