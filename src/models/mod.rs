//! Core data models for fleetdesk
//!
//! Vehicles on the lot and the customers they belong to.

pub mod customer;
pub mod vehicle;

pub use customer::{Customer, CustomerValidationError, UNSAVED_CUSTOMER_ID};
pub use vehicle::{VehicleRecord, VehicleStatus, VehicleValidationError};
