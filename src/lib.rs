//! # Parkit Parking System
//!
//! Spot allocation, ticket lifecycle and fare calculation for a parking
//! facility with car and bike spots.
//!
//! ## Architecture
//!
//! The project follows Clean Architecture principles:
//!
//! - **domain**: Spots, tickets, vehicle categories and the store/input ports
//! - **application**: Fare calculator, spot allocator and the entry/exit service
//! - **infrastructure**: In-memory spot and ticket stores
//! - **interfaces**: Console input and the operator menu
//! - **terminal**: Runtime wiring and tracing setup

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;
pub mod shared;
pub mod terminal;

pub use config::{default_config_path, AppConfig};

pub use application::{EntryReceipt, FareCalculator, ParkingService, SpotAllocator};
pub use infrastructure::InMemoryRepositoryProvider;
