//! Parking spot aggregate
//!
//! Contains the ParkingSpot entity and the spot registry interface.

pub mod model;
pub mod repository;

pub use model::ParkingSpot;
pub use repository::{ParkingSpotRepository, NO_AVAILABLE_SLOT};
