use std::env;
use std::str::FromStr;

use crate::error::{AppError, AppResult};
use crate::utils::geo::GeoPoint;

#[derive(Clone, Debug)]
pub struct Config {
    pub backend_api_url: String,
    pub backend_timeout_secs: u64,
    pub server_host: String,
    pub server_port: u16,
    pub map: MapConfig,
    pub snapshot_page_size: u32,
    pub listing_page_size: u32,
}

/// Settings for the radius search map
#[derive(Clone, Debug)]
pub struct MapConfig {
    /// Fallback center representing the service region
    pub default_center: GeoPoint,
    pub default_radius_km: f64,
    pub tile_url: String,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            default_center: GeoPoint::new(42.6629, 21.1655),
            default_radius_km: 10.0,
            tile_url: "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png".to_string(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            backend_api_url: "http://localhost:8080/api".to_string(),
            backend_timeout_secs: 10,
            server_host: "0.0.0.0".to_string(),
            server_port: 3000,
            map: MapConfig::default(),
            snapshot_page_size: 1000,
            listing_page_size: 12,
        }
    }
}

impl Config {
    pub fn from_env() -> AppResult<Self> {
        dotenvy::dotenv().ok();

        let defaults = Config::default();

        Ok(Self {
            backend_api_url: env::var("BACKEND_API_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or(defaults.backend_api_url),
            backend_timeout_secs: parse_var("BACKEND_TIMEOUT_SECS", defaults.backend_timeout_secs)?,
            server_host: env::var("SERVER_HOST").unwrap_or(defaults.server_host),
            server_port: parse_var("SERVER_PORT", defaults.server_port)?,
            map: MapConfig {
                default_center: GeoPoint::new(
                    parse_var("MAP_DEFAULT_LAT", defaults.map.default_center.lat)?,
                    parse_var("MAP_DEFAULT_LNG", defaults.map.default_center.lng)?,
                ),
                default_radius_km: parse_var("MAP_DEFAULT_RADIUS_KM", defaults.map.default_radius_km)?,
                tile_url: env::var("MAP_TILE_URL").unwrap_or(defaults.map.tile_url),
            },
            snapshot_page_size: parse_var("SNAPSHOT_PAGE_SIZE", defaults.snapshot_page_size)?,
            listing_page_size: parse_var("LISTING_PAGE_SIZE", defaults.listing_page_size)?,
        })
    }

    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}

fn parse_var<T: FromStr>(name: &str, default: T) -> AppResult<T> {
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map_err(|_| AppError::Config(format!("{} must be a number, got {:?}", name, raw))),
        Err(_) => Ok(default),
    }
}
