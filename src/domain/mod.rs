pub mod parking_spot;
pub mod ports;
pub mod repositories;
pub mod ticket;
pub mod vehicle;

// Re-export commonly used types
pub use parking_spot::{ParkingSpot, ParkingSpotRepository, NO_AVAILABLE_SLOT};
pub use ports::InputReader;
pub use repositories::{DomainResult, RepositoryProvider};
pub use ticket::{Ticket, TicketRepository};
pub use vehicle::{RateCard, VehicleCategory, BIKE_RATE_PER_HOUR, CAR_RATE_PER_HOUR};

// Re-export DomainError from shared for convenience
pub use crate::shared::errors::DomainError;
