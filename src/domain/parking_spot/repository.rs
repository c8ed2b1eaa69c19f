//! Parking spot repository interface

use async_trait::async_trait;

use super::model::ParkingSpot;
use crate::domain::{DomainResult, VehicleCategory};

/// Slot id returned by [`ParkingSpotRepository::next_available_slot`] when the
/// category is full. Any id `<= 0` means the same thing.
pub const NO_AVAILABLE_SLOT: i32 = 0;

#[async_trait]
pub trait ParkingSpotRepository: Send + Sync {
    /// Lowest-numbered free spot for the category, or an id `<= 0` when none.
    async fn next_available_slot(&self, category: VehicleCategory) -> DomainResult<i32>;
    /// Persist the availability flag of an existing spot.
    ///
    /// Marking a spot occupied is conditional: it fails with
    /// `DomainError::SpotUnavailable` if the stored spot is already taken.
    async fn update(&self, spot: &ParkingSpot) -> DomainResult<()>;
    async fn find_by_id(&self, id: i32) -> DomainResult<Option<ParkingSpot>>;
    async fn find_all(&self) -> DomainResult<Vec<ParkingSpot>>;
}
