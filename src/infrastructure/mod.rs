//! Infrastructure layer - external concerns

pub mod storage;

pub use storage::{InMemoryParkingSpotRepository, InMemoryRepositoryProvider, InMemoryTicketRepository};
