//! Vehicle category value object
//!
//! The closed set of vehicle categories and the hourly rates attached to them.

pub mod model;

pub use model::{RateCard, VehicleCategory, BIKE_RATE_PER_HOUR, CAR_RATE_PER_HOUR};
