//! Scripted collaborators for service tests
//!
//! Every stub records the calls it receives so tests can assert on what was
//! (and was not) written.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{Duration, Utc};

use crate::domain::{
    DomainError, DomainResult, InputReader, ParkingSpot, ParkingSpotRepository,
    RepositoryProvider, Ticket, TicketRepository, VehicleCategory,
};

pub const REG_NUMBER: &str = "ABCDEF";

/// Input that answers from a script
pub struct ScriptedInput {
    selections: Mutex<VecDeque<i32>>,
    reg_number: String,
    pub selection_reads: AtomicUsize,
}

impl ScriptedInput {
    pub fn new(selections: &[i32]) -> Arc<Self> {
        Arc::new(Self {
            selections: Mutex::new(selections.iter().copied().collect()),
            reg_number: REG_NUMBER.to_string(),
            selection_reads: AtomicUsize::new(0),
        })
    }
}

#[async_trait]
impl InputReader for ScriptedInput {
    async fn read_selection(&self) -> DomainResult<i32> {
        self.selection_reads.fetch_add(1, Ordering::SeqCst);
        Ok(self.selections.lock().unwrap().pop_front().unwrap_or(-1))
    }

    async fn read_vehicle_registration_number(&self) -> DomainResult<String> {
        Ok(self.reg_number.clone())
    }
}

#[derive(Default)]
pub struct StubSpots {
    pub next_slot: i32,
    pub fail_update: bool,
    pub slot_queries: Mutex<Vec<VehicleCategory>>,
    pub updates: Mutex<Vec<ParkingSpot>>,
}

#[async_trait]
impl ParkingSpotRepository for StubSpots {
    async fn next_available_slot(&self, category: VehicleCategory) -> DomainResult<i32> {
        self.slot_queries.lock().unwrap().push(category);
        Ok(self.next_slot)
    }

    async fn update(&self, spot: &ParkingSpot) -> DomainResult<()> {
        self.updates.lock().unwrap().push(spot.clone());
        if self.fail_update {
            return Err(DomainError::Storage("spot table unavailable".into()));
        }
        Ok(())
    }

    async fn find_by_id(&self, id: i32) -> DomainResult<Option<ParkingSpot>> {
        Ok(Some(ParkingSpot::new(id, VehicleCategory::Car, true)))
    }

    async fn find_all(&self) -> DomainResult<Vec<ParkingSpot>> {
        Ok(Vec::new())
    }
}

#[derive(Default)]
pub struct StubTickets {
    pub latest: Mutex<Option<Ticket>>,
    pub prior_count: u32,
    pub fail_save: bool,
    pub fail_update: bool,
    pub saved: Mutex<Vec<Ticket>>,
    pub updated: Mutex<Vec<Ticket>>,
    pub count_queries: Mutex<Vec<String>>,
}

#[async_trait]
impl TicketRepository for StubTickets {
    async fn save(&self, ticket: &Ticket) -> DomainResult<i32> {
        if self.fail_save {
            return Err(DomainError::Storage("ticket table unavailable".into()));
        }
        let mut saved = self.saved.lock().unwrap();
        saved.push(ticket.clone());
        Ok(saved.len() as i32)
    }

    async fn find_by_id(&self, _id: i32) -> DomainResult<Option<Ticket>> {
        Ok(self.latest.lock().unwrap().clone())
    }

    async fn find_latest(&self, _vehicle_reg_number: &str) -> DomainResult<Option<Ticket>> {
        Ok(self.latest.lock().unwrap().clone())
    }

    async fn find_by_vehicle(&self, _vehicle_reg_number: &str) -> DomainResult<Vec<Ticket>> {
        Ok(self.latest.lock().unwrap().iter().cloned().collect())
    }

    async fn update(&self, ticket: &Ticket) -> DomainResult<()> {
        self.updated.lock().unwrap().push(ticket.clone());
        if self.fail_update {
            return Err(DomainError::Storage("write conflict".into()));
        }
        Ok(())
    }

    async fn count_prior(&self, vehicle_reg_number: &str) -> DomainResult<u32> {
        self.count_queries
            .lock()
            .unwrap()
            .push(vehicle_reg_number.to_string());
        Ok(self.prior_count)
    }
}

#[derive(Default)]
pub struct StubRepos {
    pub spots: StubSpots,
    pub tickets: StubTickets,
}

impl RepositoryProvider for StubRepos {
    fn parking_spots(&self) -> &dyn ParkingSpotRepository {
        &self.spots
    }

    fn tickets(&self) -> &dyn TicketRepository {
        &self.tickets
    }
}

/// An open car ticket on spot 1, parked for an hour.
pub fn open_ticket_one_hour_ago() -> Ticket {
    let mut ticket = Ticket::open(
        REG_NUMBER,
        ParkingSpot::new(1, VehicleCategory::Car, false),
        Utc::now() - Duration::hours(1),
    );
    ticket.id = 1;
    ticket
}
