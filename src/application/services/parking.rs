//! Vehicle entry and exit: the ticket lifecycle
//!
//! A spot goes Unoccupied → Occupied (ticket open) → Unoccupied (ticket
//! closed). Entry marks the spot occupied before the ticket is saved; exit
//! frees the spot only after the closed ticket has been persisted.

use std::sync::Arc;

use chrono::Utc;
use tracing::{error, info};

use super::fare_calculator::FareCalculator;
use super::spot_allocator::SpotAllocator;
use crate::domain::{
    DomainError, DomainResult, InputReader, ParkingSpot, RateCard, RepositoryProvider, Ticket,
};

/// Outcome of a successful vehicle entry
#[derive(Debug, Clone)]
pub struct EntryReceipt {
    pub ticket: Ticket,
    /// The vehicle already has completed stays and will get the loyalty discount
    pub returning_customer: bool,
}

/// Service for parking entry/exit operations
pub struct ParkingService {
    repos: Arc<dyn RepositoryProvider>,
    input: Arc<dyn InputReader>,
    allocator: SpotAllocator,
    fare_calculator: FareCalculator,
}

impl ParkingService {
    pub fn new(
        repos: Arc<dyn RepositoryProvider>,
        input: Arc<dyn InputReader>,
        rates: RateCard,
    ) -> Self {
        Self {
            allocator: SpotAllocator::new(repos.clone(), input.clone()),
            fare_calculator: FareCalculator::new(rates),
            repos,
            input,
        }
    }

    pub fn spot_allocator(&self) -> &SpotAllocator {
        &self.allocator
    }

    /// Park an incoming vehicle.
    ///
    /// Returns `Ok(None)` when no spot of the selected category is free; in
    /// that case nothing is written to either store. A vehicle that still
    /// holds an open ticket is refused before a category is asked for.
    pub async fn process_entry(&self) -> DomainResult<Option<EntryReceipt>> {
        let vehicle_reg_number = self.input.read_vehicle_registration_number().await?;

        if let Some(open) = self
            .repos
            .tickets()
            .find_latest(&vehicle_reg_number)
            .await?
            .filter(Ticket::is_open)
        {
            return Err(DomainError::VehicleAlreadyParked {
                ticket_id: open.id,
                spot_id: open.spot.id,
                vehicle_reg_number,
            });
        }

        let Some(mut spot) = self.allocator.allocate().await? else {
            metrics::counter!("parking_lot_full_total").increment(1);
            return Ok(None);
        };

        let returning_customer = self
            .repos
            .tickets()
            .count_prior(&vehicle_reg_number)
            .await?
            > 0;

        spot.occupy();
        self.repos.parking_spots().update(&spot).await?;

        let mut ticket = Ticket::open(vehicle_reg_number, spot, Utc::now());
        let ticket_id = match self.repos.tickets().save(&ticket).await {
            Ok(id) => id,
            Err(e) => {
                // The spot stays marked occupied; there is no compensation step.
                error!(
                    spot_id = ticket.spot.id,
                    vehicle = %ticket.vehicle_reg_number,
                    error = %e,
                    "Ticket save failed after spot was occupied"
                );
                return Err(e);
            }
        };
        ticket.id = ticket_id;

        metrics::counter!("parking_entries_total", "category" => ticket.spot.category.as_str())
            .increment(1);

        info!(
            ticket_id = ticket.id,
            spot_id = ticket.spot.id,
            category = %ticket.spot.category,
            vehicle = %ticket.vehicle_reg_number,
            returning_customer,
            "Vehicle entered"
        );

        Ok(Some(EntryReceipt {
            ticket,
            returning_customer,
        }))
    }

    /// Check out the vehicle at the terminal and compute its fare.
    ///
    /// The spot is released only once the closed ticket has been stored. If
    /// the ticket update fails the spot stays occupied and the error is
    /// returned.
    pub async fn process_exit(&self) -> DomainResult<Ticket> {
        let vehicle_reg_number = self.input.read_vehicle_registration_number().await?;

        let mut ticket = self
            .repos
            .tickets()
            .find_latest(&vehicle_reg_number)
            .await?
            .ok_or_else(|| DomainError::TicketNotFound(vehicle_reg_number.clone()))?;

        if !ticket.is_open() {
            return Err(DomainError::TicketAlreadyClosed {
                ticket_id: ticket.id,
                vehicle_reg_number,
            });
        }

        ticket.out_time = Some(Utc::now());

        let discount = self
            .repos
            .tickets()
            .count_prior(&vehicle_reg_number)
            .await?
            > 0;
        self.fare_calculator.compute_fare(&mut ticket, discount)?;

        if let Err(e) = self.repos.tickets().update(&ticket).await {
            error!(
                ticket_id = ticket.id,
                spot_id = ticket.spot.id,
                error = %e,
                "Unable to update ticket information, spot stays occupied"
            );
            return Err(e);
        }

        ticket.spot.release();
        self.repos.parking_spots().update(&ticket.spot).await?;

        metrics::counter!("parking_exits_total", "category" => ticket.spot.category.as_str())
            .increment(1);

        info!(
            ticket_id = ticket.id,
            spot_id = ticket.spot.id,
            vehicle = %ticket.vehicle_reg_number,
            price = %ticket.price,
            discount,
            "Vehicle exited"
        );

        Ok(ticket)
    }

    pub async fn list_spots(&self) -> DomainResult<Vec<ParkingSpot>> {
        self.repos.parking_spots().find_all().await
    }

    pub async fn vehicle_history(&self, vehicle_reg_number: &str) -> DomainResult<Vec<Ticket>> {
        self.repos.tickets().find_by_vehicle(vehicle_reg_number).await
    }
}

// ── Tests ──────────────────────────────────────────────────────
