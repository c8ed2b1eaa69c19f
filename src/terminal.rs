//! Reusable parking terminal runtime.
//!
//! Wires the in-memory stores, the parking service and the console shell
//! from an [`AppConfig`], so the binary stays a thin argument parser.

use std::sync::Arc;

use tracing::info;

use crate::application::ParkingService;
use crate::config::AppConfig;
use crate::domain::RepositoryProvider;
use crate::infrastructure::InMemoryRepositoryProvider;
use crate::interfaces::{ConsoleInput, InteractiveShell};

// ── TerminalHandle ─────────────────────────────────────────────────

/// A wired parking terminal reading from stdin.
///
/// # Examples
///
/// ```rust,no_run
/// use parkit::config::AppConfig;
/// use parkit::terminal::TerminalHandle;
///
/// #[tokio::main]
/// async fn main() {
///     let terminal = TerminalHandle::build(AppConfig::default());
///     terminal.run().await;
/// }
/// ```
pub struct TerminalHandle {
    shell: InteractiveShell,
}

impl TerminalHandle {
    pub fn build(config: AppConfig) -> Self {
        let repos: Arc<dyn RepositoryProvider> =
            Arc::new(InMemoryRepositoryProvider::new(&config.lot));
        info!(
            car_spots = config.lot.car_spots,
            bike_spots = config.lot.bike_spots,
            "Parking lot initialised"
        );

        let console = Arc::new(ConsoleInput::stdin());
        let service = Arc::new(ParkingService::new(repos, console.clone(), config.fares));
        info!(
            car_per_hour = %config.fares.car_per_hour,
            bike_per_hour = %config.fares.bike_per_hour,
            "Fare schedule loaded"
        );

        Self {
            shell: InteractiveShell::new(service, console),
        }
    }

    /// Serve the operator menu until shutdown or Ctrl+C.
    pub async fn run(&self) {
        tokio::select! {
            _ = self.shell.run() => {}
            _ = tokio::signal::ctrl_c() => {
                info!("Received Ctrl+C, shutting down terminal");
            }
        }
    }
}

/// Initialize tracing (logging) from the application config.
///
/// Call this once at process startup (before [`TerminalHandle::build`]).
/// `RUST_LOG` takes precedence over `logging.level`.
pub fn init_tracing(config: &AppConfig) {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.logging.level));

    match config.logging.format.to_lowercase().as_str() {
        "json" => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
                .init();
        }
        _ => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
                .init();
        }
    }
}
