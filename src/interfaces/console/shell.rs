//! Operator menu loop

use std::sync::Arc;

use tracing::{error, info, warn};

use super::input::ConsoleInput;
use crate::application::ParkingService;
use crate::domain::ports::inbound::InputReader;

const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Interactive terminal: vehicle entry and exit, lot status, shutdown
pub struct InteractiveShell {
    service: Arc<ParkingService>,
    console: Arc<ConsoleInput>,
}

impl InteractiveShell {
    pub fn new(service: Arc<ParkingService>, console: Arc<ConsoleInput>) -> Self {
        Self { service, console }
    }

    /// Serve the menu until the operator shuts down or input ends.
    pub async fn run(&self) {
        info!("Parking terminal started");
        println!("Welcome to Parking System!");

        loop {
            print_menu();
            let option = match self.console.read_menu_option().await {
                Ok(option) => option,
                Err(e) => {
                    warn!(error = %e, "Terminal input closed");
                    break;
                }
            };

            match option {
                1 => self.vehicle_entering().await,
                2 => self.vehicle_exiting().await,
                3 => {
                    println!("Exiting from the system!");
                    break;
                }
                4 => self.show_spots().await,
                5 => self.show_history().await,
                _ => println!(
                    "Unsupported option. Please enter a number corresponding to the provided menu"
                ),
            }
        }

        info!("Parking terminal stopped");
    }

    async fn vehicle_entering(&self) {
        match self.service.process_entry().await {
            Ok(Some(receipt)) => {
                let ticket = &receipt.ticket;
                if receipt.returning_customer {
                    println!(
                        "Welcome back! As a recurring user of our parking lot, \
                         you'll benefit from a 5% discount."
                    );
                }
                println!("Ticket recorded");
                println!("Please park your vehicle in spot number: {}", ticket.spot.id);
                println!(
                    "Recorded in-time for vehicle number: {} is: {}",
                    ticket.vehicle_reg_number,
                    ticket.in_time.format(TIME_FORMAT)
                );
            }
            Ok(None) => {
                println!("Parking slots might be full. Please try again later");
            }
            Err(e) => {
                error!(error = %e, "Unable to process incoming vehicle");
                println!("Unable to process incoming vehicle: {}", e);
            }
        }
    }

    async fn vehicle_exiting(&self) {
        match self.service.process_exit().await {
            Ok(ticket) => {
                if let Some(stay) = ticket.duration() {
                    println!("Total parking time: {} min", stay.num_minutes());
                }
                println!("Please pay the parking fare: {}", ticket.price.round_dp(2));
                if let Some(out_time) = ticket.out_time {
                    println!(
                        "Recorded out-time for vehicle number: {} is: {}",
                        ticket.vehicle_reg_number,
                        out_time.format(TIME_FORMAT)
                    );
                }
            }
            Err(e) => {
                error!(error = %e, "Unable to process exiting vehicle");
                println!("Unable to update ticket information. Error occurred: {}", e);
            }
        }
    }

    async fn show_spots(&self) {
        match self.service.list_spots().await {
            Ok(spots) => {
                for spot in spots {
                    let state = if spot.available { "free" } else { "occupied" };
                    println!("Spot {} ({}): {}", spot.id, spot.category, state);
                }
            }
            Err(e) => {
                error!(error = %e, "Unable to list parking spots");
                println!("Unable to list parking spots: {}", e);
            }
        }
    }

    async fn show_history(&self) {
        let history = match self.console.read_vehicle_registration_number().await {
            Ok(reg) => self.service.vehicle_history(&reg).await,
            Err(e) => Err(e),
        };
        match history {
            Ok(tickets) if tickets.is_empty() => println!("No tickets found for this vehicle"),
            Ok(tickets) => {
                for ticket in tickets {
                    let out = ticket
                        .out_time
                        .map(|t| t.format(TIME_FORMAT).to_string())
                        .unwrap_or_else(|| "still parked".to_string());
                    println!(
                        "Ticket {} spot {}: in {} out {} fare {}",
                        ticket.id,
                        ticket.spot.id,
                        ticket.in_time.format(TIME_FORMAT),
                        out,
                        ticket.price.round_dp(2)
                    );
                }
            }
            Err(e) => {
                error!(error = %e, "Unable to fetch vehicle history");
                println!("Unable to fetch vehicle history: {}", e);
            }
        }
    }
}

fn print_menu() {
    println!("Please select an option. Simply enter the number to choose an action");
    println!("1 New Vehicle Entering - Allocate Parking Space");
    println!("2 Vehicle Exiting - Generate Ticket Price");
    println!("3 Shutdown System");
    println!("4 Show Parking Spots");
    println!("5 Show Vehicle History");
}
