//! Application services

mod fare_calculator;
mod parking;
mod spot_allocator;

#[cfg(test)]
pub(crate) mod test_support;

pub use fare_calculator::{FareCalculator, GRACE_PERIOD_MINUTES, LOYALTY_DISCOUNT_FACTOR};
pub use parking::{EntryReceipt, ParkingService};
pub use spot_allocator::SpotAllocator;
