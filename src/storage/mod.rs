//! Storage layer for fleetdesk
//!
//! Provides JSON file storage with atomic writes and automatic directory
//! creation.

pub mod customers;
pub mod file_io;
pub mod init;
pub mod vehicles;

pub use customers::CustomerRepository;
pub use file_io::DataFile;
pub use init::initialize_storage;
pub use vehicles::VehicleRepository;

use crate::config::paths::FleetPaths;
use crate::error::FleetError;

/// Main storage coordinator that provides access to all repositories
pub struct Storage {
    paths: FleetPaths,
    pub vehicles: VehicleRepository,
    pub customers: CustomerRepository,
}

impl Storage {
    /// Create a new Storage instance
    pub fn new(paths: FleetPaths) -> Result<Self, FleetError> {
        paths.ensure_directories()?;

        Ok(Self {
            vehicles: VehicleRepository::new(paths.vehicles_file()),
            customers: CustomerRepository::new(paths.customers_file()),
            paths,
        })
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &FleetPaths {
        &self.paths
    }

    /// Load all data from disk
    pub fn load_all(&mut self) -> Result<(), FleetError> {
        self.vehicles.load()?;
        self.customers.load()?;
        Ok(())
    }

    /// Save all data to disk
    pub fn save_all(&self) -> Result<(), FleetError> {
        self.vehicles.save()?;
        self.customers.save()?;
        Ok(())
    }
}
