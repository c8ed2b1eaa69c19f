//! Spot allocation for incoming vehicles

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::domain::{DomainResult, InputReader, ParkingSpot, RepositoryProvider, VehicleCategory};

/// Finds a free spot for the category the operator selects
pub struct SpotAllocator {
    repos: Arc<dyn RepositoryProvider>,
    input: Arc<dyn InputReader>,
}

impl SpotAllocator {
    pub fn new(repos: Arc<dyn RepositoryProvider>, input: Arc<dyn InputReader>) -> Self {
        Self { repos, input }
    }

    /// Ask the operator which kind of vehicle is entering.
    pub async fn select_category(&self) -> DomainResult<VehicleCategory> {
        let selection = self.input.read_selection().await?;
        VehicleCategory::from_selection(selection).map_err(|e| {
            warn!(selection, "Incorrect vehicle type provided");
            e
        })
    }

    /// Read the category selector, then look up a spot for it.
    ///
    /// An unknown selector fails before the registry is queried.
    pub async fn allocate(&self) -> DomainResult<Option<ParkingSpot>> {
        let category = self.select_category().await?;
        self.next_available_spot(category).await
    }

    /// Lowest-numbered free spot for the category, `None` when the lot is full.
    pub async fn next_available_spot(
        &self,
        category: VehicleCategory,
    ) -> DomainResult<Option<ParkingSpot>> {
        let slot = self
            .repos
            .parking_spots()
            .next_available_slot(category)
            .await?;

        if slot <= 0 {
            info!(%category, "No parking slot available");
            return Ok(None);
        }

        debug!(%category, spot_id = slot, "Parking slot found");
        Ok(Some(ParkingSpot::new(slot, category, true)))
    }
}

// ── Tests ──────────────────────────────────────────────────────
