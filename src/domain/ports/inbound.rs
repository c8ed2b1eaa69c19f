//! Inbound ports: where the terminal operator's answers come from

use async_trait::async_trait;

use crate::domain::DomainResult;

// ── InputReader ────────────────────────────────────────────────

/// Source of the operator's answers at an entry/exit terminal.
///
/// The console implementation reads stdin; tests script the answers.
#[async_trait]
pub trait InputReader: Send + Sync {
    /// Vehicle category selector: `1` = car, `2` = bike, anything else is invalid.
    async fn read_selection(&self) -> DomainResult<i32>;

    /// Registration number of the vehicle at the terminal, already trimmed.
    async fn read_vehicle_registration_number(&self) -> DomainResult<String>;
}
