//! Display formatting for terminal output
//!
//! Provides table and detail views for vehicles and customers.

pub mod customer;
pub mod vehicle;

pub use customer::{format_customer_details, format_customer_list};
pub use vehicle::{format_vehicle_details, format_vehicle_list};
