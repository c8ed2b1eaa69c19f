pub mod services;

// Re-export key types for convenience
pub use services::{EntryReceipt, FareCalculator, ParkingService, SpotAllocator};
