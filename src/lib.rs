//! FleetDesk - vehicle and customer records for a car dealership
//!
//! This library provides the core of the FleetDesk command line tool: a
//! filterable vehicle list and exports of the current view as CSV, JSON or
//! XML files.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Vehicle and customer records
//! - `filter`: Filter criteria and the filter engine
//! - `export`: Format encoders and delivery targets
//! - `storage`: JSON file storage layer
//! - `services`: Business logic layer
//! - `display`: Terminal tables and detail views
//! - `cli`: Command handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use fleetdesk::export::{ExportFormat, ExportOptions};
//! use fleetdesk::filter::{FilterCriteria, FilterEngine};
//!
//! let mut engine = FilterEngine::with_records(records);
//! let view = engine.apply(&FilterCriteria::new().with_make("vw"));
//! let csv = ExportFormat::Csv.encode(view, &ExportOptions::default())?;
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod filter;
pub mod models;
pub mod services;
pub mod storage;

pub use error::{FleetError, FleetResult};
