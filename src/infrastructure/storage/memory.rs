//! In-memory storage implementation

use std::sync::atomic::{AtomicI32, Ordering};

use async_trait::async_trait;
use dashmap::DashMap;
use log::debug;

use crate::config::LotConfig;
use crate::domain::{
    DomainError, DomainResult, ParkingSpot, ParkingSpotRepository, RepositoryProvider, Ticket,
    TicketRepository, VehicleCategory, NO_AVAILABLE_SLOT,
};

// ── Spots ──────────────────────────────────────────────────────

/// In-memory spot registry for development and testing
pub struct InMemoryParkingSpotRepository {
    spots: DashMap<i32, ParkingSpot>,
}

impl InMemoryParkingSpotRepository {
    pub fn new() -> Self {
        Self {
            spots: DashMap::new(),
        }
    }

    /// Seed the registry: car spots are numbered first, bike spots follow.
    pub fn with_layout(lot: &LotConfig) -> Self {
        let repo = Self::new();
        let layout = std::iter::repeat(VehicleCategory::Car)
            .take(lot.car_spots as usize)
            .chain(std::iter::repeat(VehicleCategory::Bike).take(lot.bike_spots as usize));
        for (index, category) in layout.enumerate() {
            let id = index as i32 + 1;
            repo.spots.insert(id, ParkingSpot::new(id, category, true));
        }
        repo
    }
}

impl Default for InMemoryParkingSpotRepository {
    fn default() -> Self {
        Self::with_layout(&LotConfig::default())
    }
}

#[async_trait]
impl ParkingSpotRepository for InMemoryParkingSpotRepository {
    async fn next_available_slot(&self, category: VehicleCategory) -> DomainResult<i32> {
        Ok(self
            .spots
            .iter()
            .filter(|s| s.category == category && s.available)
            .map(|s| s.id)
            .min()
            .unwrap_or(NO_AVAILABLE_SLOT))
    }

    async fn update(&self, spot: &ParkingSpot) -> DomainResult<()> {
        let mut stored = self
            .spots
            .get_mut(&spot.id)
            .ok_or_else(|| DomainError::NotFound {
                entity: "ParkingSpot",
                field: "id",
                value: spot.id.to_string(),
            })?;

        // Compare-and-set: the entry lock is held between the check and the write.
        if !spot.available && !stored.available {
            return Err(DomainError::SpotUnavailable(spot.id));
        }

        stored.available = spot.available;
        debug!("Spot {} available={}", spot.id, spot.available);
        Ok(())
    }

    async fn find_by_id(&self, id: i32) -> DomainResult<Option<ParkingSpot>> {
        Ok(self.spots.get(&id).map(|s| s.clone()))
    }

    async fn find_all(&self) -> DomainResult<Vec<ParkingSpot>> {
        let mut spots: Vec<ParkingSpot> = self.spots.iter().map(|s| s.value().clone()).collect();
        spots.sort_by_key(|s| s.id);
        Ok(spots)
    }
}

// ── Tickets ────────────────────────────────────────────────────

/// In-memory ticket store for development and testing
pub struct InMemoryTicketRepository {
    tickets: DashMap<i32, Ticket>,
    ticket_counter: AtomicI32,
}

impl InMemoryTicketRepository {
    pub fn new() -> Self {
        Self {
            tickets: DashMap::new(),
            ticket_counter: AtomicI32::new(1),
        }
    }
}

impl Default for InMemoryTicketRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TicketRepository for InMemoryTicketRepository {
    async fn save(&self, ticket: &Ticket) -> DomainResult<i32> {
        let id = self.ticket_counter.fetch_add(1, Ordering::SeqCst);
        let mut ticket = ticket.clone();
        ticket.id = id;
        debug!("Saving ticket {} for {}", id, ticket.vehicle_reg_number);
        self.tickets.insert(id, ticket);
        Ok(id)
    }

    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Ticket>> {
        Ok(self.tickets.get(&id).map(|t| t.clone()))
    }

    async fn find_latest(&self, vehicle_reg_number: &str) -> DomainResult<Option<Ticket>> {
        Ok(self
            .tickets
            .iter()
            .filter(|t| t.vehicle_reg_number == vehicle_reg_number)
            .max_by_key(|t| (t.in_time, t.id))
            .map(|t| t.clone()))
    }

    async fn find_by_vehicle(&self, vehicle_reg_number: &str) -> DomainResult<Vec<Ticket>> {
        let mut tickets: Vec<Ticket> = self
            .tickets
            .iter()
            .filter(|t| t.vehicle_reg_number == vehicle_reg_number)
            .map(|t| t.value().clone())
            .collect();
        tickets.sort_by_key(|t| (t.in_time, t.id));
        Ok(tickets)
    }

    async fn update(&self, ticket: &Ticket) -> DomainResult<()> {
        let mut stored = self
            .tickets
            .get_mut(&ticket.id)
            .ok_or_else(|| DomainError::NotFound {
                entity: "Ticket",
                field: "id",
                value: ticket.id.to_string(),
            })?;

        // A closed ticket is a historical record.
        if !stored.is_open() {
            return Err(DomainError::TicketAlreadyClosed {
                ticket_id: ticket.id,
                vehicle_reg_number: ticket.vehicle_reg_number.clone(),
            });
        }

        stored.out_time = ticket.out_time;
        stored.price = ticket.price;
        debug!("Updated ticket {} price={}", ticket.id, ticket.price);
        Ok(())
    }

    async fn count_prior(&self, vehicle_reg_number: &str) -> DomainResult<u32> {
        Ok(self
            .tickets
            .iter()
            .filter(|t| t.vehicle_reg_number == vehicle_reg_number && !t.is_open())
            .count() as u32)
    }
}

// ── Provider ───────────────────────────────────────────────────

/// Bundles the in-memory stores behind [`RepositoryProvider`]
#[derive(Default)]
pub struct InMemoryRepositoryProvider {
    spots: InMemoryParkingSpotRepository,
    tickets: InMemoryTicketRepository,
}

impl InMemoryRepositoryProvider {
    pub fn new(lot: &LotConfig) -> Self {
        Self {
            spots: InMemoryParkingSpotRepository::with_layout(lot),
            tickets: InMemoryTicketRepository::new(),
        }
    }
}

impl RepositoryProvider for InMemoryRepositoryProvider {
    fn parking_spots(&self) -> &dyn ParkingSpotRepository {
        &self.spots
    }

    fn tickets(&self) -> &dyn TicketRepository {
        &self.tickets
    }
}

// ── Tests ──────────────────────────────────────────────────────
