//! Configuration module for fleetdesk
//!
//! This module provides configuration management including:
//! - Platform-aware path resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::FleetPaths;
pub use settings::Settings;
