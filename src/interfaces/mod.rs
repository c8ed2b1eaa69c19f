//! Interface adapters - how operators reach the parking core

pub mod console;

pub use console::{ConsoleInput, InteractiveShell};
