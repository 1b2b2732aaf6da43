use serde::Serialize;

use super::controller::{MapEvent, RadiusController, RadiusFilterState, RadiusInput};
use super::filter::{city_options, filter_properties};
use crate::config::MapConfig;
use crate::entities::{Property, PropertyId};
use crate::utils::geo::GeoPoint;

pub const MAP_ZOOM: u8 = 10;
pub const EMPTY_MESSAGE: &str = "Nuk u gjet pronë.";
const HINT_ENABLED: &str = "Kliko në hartë për të vendosur qendrën e kërkimit.";
const HINT_DISABLED: &str = "Duke shfaqur të gjitha pronat.";

/// State of one mounted map page: the property snapshot fetched at creation,
/// the city selection and the radius tool.
///
/// `filtered` is recomputed after every mutation, so it always matches the
/// current inputs.
#[derive(Debug, Clone)]
pub struct SearchView {
    snapshot: Vec<Property>,
    city: Option<String>,
    controller: RadiusController,
    filtered: Vec<Property>,
    tile_url: String,
}

impl SearchView {
    pub fn new(snapshot: Vec<Property>, map: &MapConfig) -> Self {
        let mut view = Self {
            snapshot,
            city: None,
            controller: RadiusController::from_config(map),
            filtered: Vec::new(),
            tile_url: map.tile_url.clone(),
        };
        view.refresh();
        view
    }

    fn refresh(&mut self) {
        let state = self.controller.state();
        self.filtered = filter_properties(&self.snapshot, self.city.as_deref(), Some(&state));
    }

    pub fn snapshot(&self) -> &[Property] {
        &self.snapshot
    }

    pub fn controller(&self) -> &RadiusController {
        &self.controller
    }

    pub fn city(&self) -> Option<&str> {
        self.city.as_deref()
    }

    /// Returns true if something changed and the view was re-filtered
    pub fn apply(&mut self, event: &MapEvent) -> bool {
        let changed = self.controller.apply(event);
        if changed {
            self.refresh();
        }
        changed
    }

    pub fn toggle(&mut self) -> bool {
        self.apply(&MapEvent::Toggle)
    }

    pub fn click(&mut self, point: GeoPoint) -> bool {
        self.apply(&MapEvent::Click(point))
    }

    pub fn set_radius(&mut self, input: RadiusInput) -> bool {
        self.apply(&MapEvent::Radius(input))
    }

    /// Blank selects all cities
    pub fn set_city(&mut self, city: Option<String>) {
        self.city = city.filter(|c| !c.trim().is_empty());
        self.refresh();
    }

    pub fn projection(&self) -> Projection {
        let enabled = self.controller.is_enabled();
        let state = self.controller.state();

        let markers = self
            .filtered
            .iter()
            .filter_map(|p| {
                p.location.map(|position| Marker {
                    id: p.id,
                    title: p.title.clone(),
                    position,
                    price: p.price,
                    detail_path: p.detail_path(),
                })
            })
            .collect();

        let circle = enabled.then(|| Circle {
            center: state.center,
            radius_m: state.radius_km * 1000.0,
        });

        let side_list = self.filtered.iter().map(SideListEntry::from).collect();

        Projection {
            count: self.filtered.len(),
            map: MapProjection {
                tile_url: self.tile_url.clone(),
                center: self.controller.map_center(),
                zoom: MAP_ZOOM,
                markers,
                circle,
            },
            side_list,
            radius: state,
            city: self.city.clone(),
            city_options: city_options(&self.snapshot),
            hint: if enabled { HINT_ENABLED } else { HINT_DISABLED },
            empty_message: self.filtered.is_empty().then_some(EMPTY_MESSAGE),
        }
    }
}

/// Render-ready output of a search view
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Projection {
    pub count: usize,
    pub map: MapProjection,
    pub side_list: Vec<SideListEntry>,
    pub radius: RadiusFilterState,
    pub city: Option<String>,
    pub city_options: Vec<String>,
    pub hint: &'static str,
    pub empty_message: Option<&'static str>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapProjection {
    pub tile_url: String,
    pub center: GeoPoint,
    pub zoom: u8,
    pub markers: Vec<Marker>,
    pub circle: Option<Circle>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Marker {
    pub id: PropertyId,
    pub title: String,
    pub position: GeoPoint,
    pub price: Option<f64>,
    pub detail_path: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Circle {
    pub center: GeoPoint,
    pub radius_m: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SideListEntry {
    pub id: PropertyId,
    pub title: String,
    pub city: String,
    pub neighborhood: String,
    pub price: Option<f64>,
    pub area: Option<f64>,
    pub thumbnail: Option<String>,
    pub has_location: bool,
    pub detail_path: String,
}

impl From<&Property> for SideListEntry {
    fn from(p: &Property) -> Self {
        Self {
            id: p.id,
            title: p.title.clone(),
            city: p.city.clone(),
            neighborhood: p.neighborhood.clone(),
            price: p.price,
            area: p.area,
            thumbnail: p.thumbnail().map(String::from),
            has_location: p.location.is_some(),
            detail_path: p.detail_path(),
        }
    }
}
