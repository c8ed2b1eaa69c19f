//! Ticket repository interface

use async_trait::async_trait;

use super::model::Ticket;
use crate::domain::DomainResult;

#[async_trait]
pub trait TicketRepository: Send + Sync {
    /// Insert a new ticket and return the id the store assigned to it.
    async fn save(&self, ticket: &Ticket) -> DomainResult<i32>;
    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Ticket>>;
    /// Most recent ticket for the vehicle, open or not.
    async fn find_latest(&self, vehicle_reg_number: &str) -> DomainResult<Option<Ticket>>;
    /// Full history for the vehicle, oldest first.
    async fn find_by_vehicle(&self, vehicle_reg_number: &str) -> DomainResult<Vec<Ticket>>;
    /// Persist the out time and price of an existing ticket.
    async fn update(&self, ticket: &Ticket) -> DomainResult<()>;
    /// Number of completed stays already on record for the vehicle.
    async fn count_prior(&self, vehicle_reg_number: &str) -> DomainResult<u32>;
}
