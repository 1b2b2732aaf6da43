use crate::entities::Property;
use crate::utils::geo::is_within_radius;

use super::controller::RadiusFilterState;

/// Derive the visible listing set from the snapshot.
///
/// City matches verbatim. An enabled radius keeps only located properties inside
/// the circle. Input order is preserved and the snapshot is never touched.
pub fn filter_properties(
    all: &[Property],
    city: Option<&str>,
    radius: Option<&RadiusFilterState>,
) -> Vec<Property> {
    let city = city.filter(|c| !c.is_empty());
    let radius = radius.filter(|r| r.enabled);

    all.iter()
        .filter(|p| city.is_none_or(|c| p.city == c))
        .filter(|p| {
            radius.is_none_or(|r| {
                p.location
                    .is_some_and(|loc| is_within_radius(&loc, &r.center, r.radius_km))
            })
        })
        .cloned()
        .collect()
}

/// Distinct non-empty cities, in first-seen order
pub fn city_options(all: &[Property]) -> Vec<String> {
    let mut cities: Vec<String> = Vec::new();
    for p in all {
        if !p.city.is_empty() && !cities.contains(&p.city) {
            cities.push(p.city.clone());
        }
    }
    cities
}
