pub mod appointment;
pub mod property;
pub mod user;

pub use appointment::{Appointment, AppointmentId, AppointmentStatus};
pub use property::{
    Feature, ListingStatus, Property, PropertyDetail, PropertyId, PropertyInput, PropertyType,
};
pub use user::{
    DashboardStats, PasswordChange, Profile, Registration, SessionUser, UserAccount, UserId,
};
