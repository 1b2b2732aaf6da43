use serde::{Deserialize, Serialize};

use crate::config::MapConfig;
use crate::utils::geo::GeoPoint;

pub const MIN_RADIUS_KM: f64 = 0.0;
pub const MAX_RADIUS_KM: f64 = 50.0;

/// Snapshot of the radius tool, as consumed by the filter engine
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RadiusFilterState {
    pub enabled: bool,
    pub center: GeoPoint,
    pub radius_km: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RadiusMode {
    Disabled,
    Enabled,
}

/// Radius as typed into the slider or the numeric box
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RadiusInput {
    Number(f64),
    Text(String),
}

impl RadiusInput {
    fn value(&self) -> Option<f64> {
        let value = match self {
            RadiusInput::Number(n) => *n,
            RadiusInput::Text(s) => s.trim().parse().ok()?,
        };
        value.is_finite().then_some(value)
    }
}

/// A discrete user interaction with the map page
#[derive(Debug, Clone, PartialEq)]
pub enum MapEvent {
    Toggle,
    Click(GeoPoint),
    Radius(RadiusInput),
}

/// Owns the radius tool: whether it is on, where its center is, how wide it is.
///
/// Starts disabled. The center stays unset until the tool is first enabled,
/// then survives any number of disable/enable cycles.
#[derive(Debug, Clone)]
pub struct RadiusController {
    mode: RadiusMode,
    center: Option<GeoPoint>,
    radius_km: f64,
    default_center: GeoPoint,
}

impl RadiusController {
    pub fn new(default_center: GeoPoint, default_radius_km: f64) -> Self {
        Self {
            mode: RadiusMode::Disabled,
            center: None,
            radius_km: clamp_radius(default_radius_km),
            default_center,
        }
    }

    pub fn from_config(map: &MapConfig) -> Self {
        Self::new(map.default_center, map.default_radius_km)
    }

    pub fn mode(&self) -> RadiusMode {
        self.mode
    }

    pub fn is_enabled(&self) -> bool {
        self.mode == RadiusMode::Enabled
    }

    pub fn center(&self) -> Option<GeoPoint> {
        self.center
    }

    pub fn radius_km(&self) -> f64 {
        self.radius_km
    }

    /// Flip the tool on or off. Returns whether it is now enabled.
    pub fn toggle(&mut self) -> bool {
        self.mode = match self.mode {
            RadiusMode::Disabled => {
                if self.center.is_none() {
                    self.center = Some(self.default_center);
                }
                RadiusMode::Enabled
            }
            RadiusMode::Enabled => RadiusMode::Disabled,
        };
        self.is_enabled()
    }

    /// Move the center to a clicked point. Ignored unless enabled.
    pub fn click(&mut self, point: GeoPoint) -> bool {
        if !self.is_enabled() || !point.is_valid() {
            return false;
        }
        self.center = Some(point);
        true
    }

    /// Accepted in either mode; clamped to [0, 50] km.
    /// Non-numeric input leaves the radius untouched and returns `None`.
    pub fn set_radius(&mut self, input: &RadiusInput) -> Option<f64> {
        let value = input.value()?;
        self.radius_km = clamp_radius(value);
        Some(self.radius_km)
    }

    /// Apply an event; true when the filtered view must be recomputed
    pub fn apply(&mut self, event: &MapEvent) -> bool {
        match event {
            MapEvent::Toggle => {
                self.toggle();
                true
            }
            MapEvent::Click(point) => self.click(*point),
            MapEvent::Radius(input) => self.set_radius(input).is_some(),
        }
    }

    pub fn state(&self) -> RadiusFilterState {
        RadiusFilterState {
            enabled: self.is_enabled(),
            center: self.center.unwrap_or(self.default_center),
            radius_km: self.radius_km,
        }
    }

    /// Where the map should be centered
    pub fn map_center(&self) -> GeoPoint {
        self.center.unwrap_or(self.default_center)
    }
}

fn clamp_radius(value: f64) -> f64 {
    value.clamp(MIN_RADIUS_KM, MAX_RADIUS_KM)
}
