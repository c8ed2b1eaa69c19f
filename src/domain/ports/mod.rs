//! Ports: interfaces between the core and the outside world

pub mod inbound;

pub use inbound::InputReader;
