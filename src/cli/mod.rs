//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod customer;
pub mod export;
pub mod vehicle;

pub use customer::{handle_customer_command, CustomerCommands};
pub use export::{handle_export_command, ExportArgs, FilterArgs, StatusFilter};
pub use vehicle::{handle_vehicle_command, VehicleCommands};
