pub mod client;
pub mod normalize;
pub mod wire;

pub use client::{BackendClient, LoginGrant};
