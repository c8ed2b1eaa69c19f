//! Parking System - console terminal
//!
//! Interactive entry/exit terminal for a parking lot with car and bike spots.
//!
//! ```sh
//! # Run with default config (~/.config/parking-system/config.toml)
//! parking-system
//!
//! # Custom config path
//! parking-system --config /etc/parking-system/config.toml
//!
//! # Override the lot size
//! parking-system --car-spots 20 --bike-spots 5
//!
//! # Validate config without starting
//! parking-system --check
//! ```

use std::path::PathBuf;

use clap::Parser;
use tracing::{error, info};

use parkit::config::AppConfig;
use parkit::shared::errors::AppError;
use parkit::terminal::{init_tracing, TerminalHandle};

/// Parking System: allocate spots and compute fares.
#[derive(Parser, Debug)]
#[command(
    name = "parking-system",
    version,
    about = "Interactive parking lot entry/exit terminal",
    long_about = "Parking System: console terminal that allocates spots to \
                  incoming vehicles and computes the fare when they leave.\n\n\
                  Default config: ~/.config/parking-system/config.toml"
)]
struct Cli {
    /// Path to the configuration file (TOML).
    #[arg(short, long, env = "PARKING_CONFIG")]
    config: Option<PathBuf>,

    /// Override the number of car spots.
    #[arg(long)]
    car_spots: Option<u32>,

    /// Override the number of bike spots.
    #[arg(long)]
    bike_spots: Option<u32>,

    /// Override the log level (trace, debug, info, warn, error).
    #[arg(short, long)]
    log_level: Option<String>,

    /// Validate the configuration file and exit without starting the terminal.
    #[arg(long)]
    check: bool,
}

#[tokio::main]
async fn main() -> Result<(), AppError> {
    let cli = Cli::parse();

    // ── Load configuration ─────────────────────────────────────
    let config_path = cli.config.unwrap_or_else(parkit::default_config_path);

    let (mut config, load_error) = match AppConfig::load(&config_path) {
        Ok(cfg) => (cfg, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };

    if let Some(ref level) = cli.log_level {
        config.logging.level = level.clone();
    }
    init_tracing(&config);

    match load_error {
        None => info!("Configuration loaded from {}", config_path.display()),
        Some(e) => {
            error!("Failed to load config from {}: {}", config_path.display(), e);
            if cli.check {
                return Err(e.into());
            }
            error!("Using default configuration.");
        }
    }

    // ── Apply CLI overrides ────────────────────────────────────
    if let Some(spots) = cli.car_spots {
        info!("CLI override: car_spots = {}", spots);
        config.lot.car_spots = spots;
    }
    if let Some(spots) = cli.bike_spots {
        info!("CLI override: bike_spots = {}", spots);
        config.lot.bike_spots = spots;
    }

    // ── Config validation mode ─────────────────────────────────
    if cli.check {
        println!("Configuration is valid");
        println!("   Config file : {}", config_path.display());
        println!("   Car rate    : {}/h", config.fares.car_per_hour);
        println!("   Bike rate   : {}/h", config.fares.bike_per_hour);
        println!("   Car spots   : {}", config.lot.car_spots);
        println!("   Bike spots  : {}", config.lot.bike_spots);
        println!("   Log level   : {}", config.logging.level);
        return Ok(());
    }

    // ── Start terminal ─────────────────────────────────────────
    let terminal = TerminalHandle::build(config);
    terminal.run().await;

    info!("Parking System shutdown complete");
    Ok(())
}
