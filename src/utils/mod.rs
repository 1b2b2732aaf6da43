pub mod form;
pub mod geo;
pub mod jwt;
