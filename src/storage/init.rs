//! Storage initialization
//!
//! Handles first-run setup: directories and empty data files.

use crate::config::paths::FleetPaths;
use crate::error::FleetError;

use super::{CustomerRepository, VehicleRepository};

/// Initialize storage for a fresh installation
///
/// Existing data files are left untouched.
pub fn initialize_storage(paths: &FleetPaths) -> Result<(), FleetError> {
    paths.ensure_directories()?;

    if !paths.vehicles_file().exists() {
        VehicleRepository::new(paths.vehicles_file()).save()?;
    }

    if !paths.customers_file().exists() {
        CustomerRepository::new(paths.customers_file()).save()?;
    }

    Ok(())
}
