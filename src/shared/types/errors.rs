use chrono::{DateTime, Utc};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Not found: {entity} with {field}={value}")]
    NotFound {
        entity: &'static str,
        field: &'static str,
        value: String,
    },

    #[error("Validation: {0}")]
    Validation(String),

    #[error("Out time provided is incorrect: in={in_time}, out={}", display_out_time(.out_time))]
    InvalidTimeRange {
        in_time: DateTime<Utc>,
        out_time: Option<DateTime<Utc>>,
    },

    #[error("Unknown vehicle category: {0}")]
    UnknownVehicleCategory(String),

    #[error("No ticket found for vehicle {0}")]
    TicketNotFound(String),

    #[error("Ticket {ticket_id} for vehicle {vehicle_reg_number} is already closed")]
    TicketAlreadyClosed {
        ticket_id: i32,
        vehicle_reg_number: String,
    },

    #[error("Vehicle {vehicle_reg_number} is already parked in spot {spot_id} (ticket {ticket_id})")]
    VehicleAlreadyParked {
        ticket_id: i32,
        spot_id: i32,
        vehicle_reg_number: String,
    },

    #[error("Parking spot {0} is already occupied")]
    SpotUnavailable(i32),

    #[error("Storage: {0}")]
    Storage(String),
}

fn display_out_time(out_time: &Option<DateTime<Utc>>) -> String {
    match out_time {
        Some(t) => t.to_rfc3339(),
        None => "none".to_string(),
    }
}

#[derive(Debug, Error)]
pub enum InfraError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Config serialize error: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),

    #[error("Invalid config: {0}")]
    InvalidConfig(#[source] DomainError),
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Infra(#[from] InfraError),
}
