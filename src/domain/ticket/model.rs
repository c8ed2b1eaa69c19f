//! Ticket domain entity

use chrono::{DateTime, Duration, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::ParkingSpot;

/// Record of one vehicle's stay, from entry to exit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ticket {
    /// Assigned by the ticket store on save; `0` until then
    pub id: i32,
    pub vehicle_reg_number: String,
    /// Spot the vehicle was parked in
    pub spot: ParkingSpot,
    pub in_time: DateTime<Utc>,
    /// Absent while the vehicle is still parked
    pub out_time: Option<DateTime<Utc>>,
    pub price: Decimal,
}

impl Ticket {
    /// Open a new ticket at `in_time` with no fare yet.
    pub fn open(
        vehicle_reg_number: impl Into<String>,
        spot: ParkingSpot,
        in_time: DateTime<Utc>,
    ) -> Self {
        Self {
            id: 0,
            vehicle_reg_number: vehicle_reg_number.into(),
            spot,
            in_time,
            out_time: None,
            price: Decimal::ZERO,
        }
    }

    pub fn is_open(&self) -> bool {
        self.out_time.is_none()
    }

    /// Length of the stay, once an out time has been recorded.
    pub fn duration(&self) -> Option<Duration> {
        self.out_time.map(|out| out - self.in_time)
    }
}

// ── Tests ──────────────────────────────────────────────────────
