//! Repository traits for the domain layer
//!
//! Contains:
//! - `RepositoryProvider`: unified access to the spot and ticket stores
//! - `DomainResult`: standard result type for domain operations

use super::parking_spot::ParkingSpotRepository;
use super::ticket::TicketRepository;
use crate::shared::errors::DomainError;

/// Result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

/// Provides access to all domain repositories.
///
/// Consumers request only the repository they need:
///
/// ```ignore
/// async fn handle(repos: &dyn RepositoryProvider) {
///     let slot = repos.parking_spots().next_available_slot(VehicleCategory::Car).await?;
///     let ticket = repos.tickets().find_latest("ABCDEF").await?;
/// }
/// ```
pub trait RepositoryProvider: Send + Sync {
    fn parking_spots(&self) -> &dyn ParkingSpotRepository;
    fn tickets(&self) -> &dyn TicketRepository;
}
