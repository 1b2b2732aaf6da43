use chrono::{Duration, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::entities::{Appointment, AppointmentId, AppointmentStatus};
use crate::error::{AppError, AppResult};
use crate::search::listing::contains_ignore_case;

/// Viewings must be requested at least this far ahead
pub const MIN_LEAD_HOURS: i64 = 3;

pub fn validate_requested_date(requested: NaiveDateTime, now: NaiveDateTime) -> AppResult<()> {
    if requested < now + Duration::hours(MIN_LEAD_HOURS) {
        return Err(AppError::BadRequest(format!(
            "Takimi duhet të caktohet të paktën {} orë përpara",
            MIN_LEAD_HOURS
        )));
    }
    Ok(())
}

/// `ALL` or a single status
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StatusFilter {
    #[default]
    All,
    Only(AppointmentStatus),
}

impl<'de> Deserialize<'de> for StatusFilter {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        let raw = raw.trim();
        if raw.is_empty() || raw.eq_ignore_ascii_case("ALL") {
            return Ok(StatusFilter::All);
        }
        raw.parse()
            .map(StatusFilter::Only)
            .map_err(serde::de::Error::custom)
    }
}

/// Client-side narrowing of the admin appointment list
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppointmentFilter {
    pub search: Option<String>,
    pub status: StatusFilter,
}

impl AppointmentFilter {
    pub fn matches(&self, appointment: &Appointment) -> bool {
        if let StatusFilter::Only(status) = self.status {
            if appointment.status != status {
                return false;
            }
        }
        match self.search.as_deref().map(str::trim) {
            None | Some("") => true,
            Some(search) => {
                contains_ignore_case(&appointment.property_name, search)
                    || contains_ignore_case(&appointment.user, search)
            }
        }
    }

    pub fn apply(&self, appointments: Vec<Appointment>) -> Vec<Appointment> {
        appointments.into_iter().filter(|a| self.matches(a)).collect()
    }
}

/// Outcome of an approve/reject call. The caller patches its own copy of the
/// list with it; nothing is refetched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AppointmentDecision {
    pub id: AppointmentId,
    pub status: AppointmentStatus,
    pub label: &'static str,
}

impl AppointmentDecision {
    pub fn new(id: AppointmentId, status: AppointmentStatus) -> Self {
        Self {
            id,
            status,
            label: status.label(),
        }
    }

    pub fn apply_to(&self, appointments: &mut [Appointment]) -> bool {
        match appointments.iter_mut().find(|a| a.id == self.id) {
            Some(appointment) => {
                appointment.status = self.status;
                true
            }
            None => false,
        }
    }
}
