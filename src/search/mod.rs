pub mod controller;
pub mod filter;
pub mod listing;
pub mod registry;
pub mod view;

pub use controller::{MapEvent, RadiusController, RadiusFilterState, RadiusInput};
pub use filter::{city_options, filter_properties};
pub use listing::ListingFilters;
pub use registry::SearchViews;
pub use view::{Projection, SearchView};
