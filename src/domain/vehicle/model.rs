//! Vehicle categories and their hourly rates

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::shared::errors::DomainError;
use crate::shared::validations::validate_hourly_rate;

/// Default hourly rate for cars.
pub const CAR_RATE_PER_HOUR: Decimal = dec!(1.5);
/// Default hourly rate for bikes.
pub const BIKE_RATE_PER_HOUR: Decimal = dec!(1.0);

/// Kind of vehicle a spot is built for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum VehicleCategory {
    Car,
    Bike,
}

impl VehicleCategory {
    pub const ALL: &'static [VehicleCategory] = &[Self::Car, Self::Bike];

    /// Resolve the numeric menu selector typed at the terminal.
    ///
    /// `1` is a car, `2` is a bike. Anything else is rejected.
    pub fn from_selection(selection: i32) -> Result<Self, DomainError> {
        match selection {
            1 => Ok(Self::Car),
            2 => Ok(Self::Bike),
            other => Err(DomainError::UnknownVehicleCategory(other.to_string())),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Car => "CAR",
            Self::Bike => "BIKE",
        }
    }

    pub fn default_hourly_rate(&self) -> Decimal {
        match self {
            Self::Car => CAR_RATE_PER_HOUR,
            Self::Bike => BIKE_RATE_PER_HOUR,
        }
    }
}

impl fmt::Display for VehicleCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VehicleCategory {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "CAR" => Ok(Self::Car),
            "BIKE" => Ok(Self::Bike),
            _ => Err(DomainError::UnknownVehicleCategory(s.to_string())),
        }
    }
}

/// Hourly rates applied by the fare calculator
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RateCard {
    pub car_per_hour: Decimal,
    pub bike_per_hour: Decimal,
}

impl RateCard {
    pub fn rate_for(&self, category: VehicleCategory) -> Decimal {
        match category {
            VehicleCategory::Car => self.car_per_hour,
            VehicleCategory::Bike => self.bike_per_hour,
        }
    }

    /// Every rate must be strictly positive.
    pub fn validate(&self) -> Result<(), DomainError> {
        for &category in VehicleCategory::ALL {
            validate_hourly_rate(category, self.rate_for(category))?;
        }
        Ok(())
    }
}

impl Default for RateCard {
    fn default() -> Self {
        Self {
            car_per_hour: VehicleCategory::Car.default_hourly_rate(),
            bike_per_hour: VehicleCategory::Bike.default_hourly_rate(),
        }
    }
}

// ── Tests ──────────────────────────────────────────────────────
