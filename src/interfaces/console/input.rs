//! Line-oriented operator input
//!
//! Lines are read on a dedicated OS thread and forwarded over a channel, so a
//! pending read never holds the runtime open on shutdown.

use std::io::{self, BufRead, BufReader};
use std::thread;

use async_trait::async_trait;
use tokio::sync::{mpsc, Mutex};
use tracing::debug;

use crate::domain::{DomainError, DomainResult, InputReader};
use crate::shared::validations::{parse_selection, validate_registration_number};

/// [`InputReader`] over any line source, stdin in production
pub struct ConsoleInput {
    lines: Mutex<mpsc::UnboundedReceiver<io::Result<String>>>,
}

impl ConsoleInput {
    pub fn stdin() -> Self {
        Self::new(BufReader::new(io::stdin()))
    }

    pub fn new<R>(reader: R) -> Self
    where
        R: BufRead + Send + 'static,
    {
        let (tx, rx) = mpsc::unbounded_channel();
        thread::spawn(move || {
            for line in reader.lines() {
                if tx.send(line).is_err() {
                    break;
                }
            }
            debug!("Console reader finished");
        });

        Self {
            lines: Mutex::new(rx),
        }
    }

    async fn next_line(&self) -> DomainResult<String> {
        let mut lines = self.lines.lock().await;
        match lines.recv().await {
            Some(Ok(line)) => Ok(line),
            None => Err(DomainError::Validation("End of input".to_string())),
            Some(Err(e)) => Err(DomainError::Validation(format!("Unable to read input: {}", e))),
        }
    }

    /// Main-menu choice; non-numeric input reads as `-1`.
    pub async fn read_menu_option(&self) -> DomainResult<i32> {
        Ok(parse_selection(&self.next_line().await?))
    }
}

#[async_trait]
impl InputReader for ConsoleInput {
    async fn read_selection(&self) -> DomainResult<i32> {
        println!("Please select vehicle type from menu");
        println!("1 CAR");
        println!("2 BIKE");
        Ok(parse_selection(&self.next_line().await?))
    }

    async fn read_vehicle_registration_number(&self) -> DomainResult<String> {
        println!("Please type the vehicle registration number and press enter key");
        validate_registration_number(&self.next_line().await?)
    }
}
