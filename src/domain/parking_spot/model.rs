//! Parking spot domain entity

use serde::{Deserialize, Serialize};

use crate::domain::VehicleCategory;

/// A single physical parking location
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParkingSpot {
    /// Spot number, unique within the facility
    pub id: i32,
    pub category: VehicleCategory,
    pub available: bool,
}

impl ParkingSpot {
    pub fn new(id: i32, category: VehicleCategory, available: bool) -> Self {
        Self {
            id,
            category,
            available,
        }
    }

    pub fn occupy(&mut self) {
        self.available = false;
    }

    pub fn release(&mut self) {
        self.available = true;
    }
}
