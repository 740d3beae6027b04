//! Service layer for fleetdesk
//!
//! The service layer provides business logic on top of the storage layer,
//! handling validation, id assignment, and cross-entity checks.

pub mod customer;
pub mod vehicle;

pub use customer::CustomerService;
pub use vehicle::{ImportSummary, NewVehicle, VehicleChanges, VehicleService};
