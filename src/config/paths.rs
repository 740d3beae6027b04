//! Path management for fleetdesk
//!
//! ## Path Resolution Order
//!
//! 1. `FLEETDESK_DATA_DIR` environment variable (if set)
//! 2. The platform config directory reported by `directories`
//!    (`~/.config/fleetdesk` on Linux, `%APPDATA%\fleetdesk\config` on Windows)

use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::FleetError;

/// Environment variable that overrides the base directory
pub const DATA_DIR_ENV: &str = "FLEETDESK_DATA_DIR";

/// Manages all paths used by fleetdesk
#[derive(Debug, Clone)]
pub struct FleetPaths {
    /// Base directory for all fleetdesk data
    base_dir: PathBuf,
}

impl FleetPaths {
    /// Create a new FleetPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined.
    pub fn new() -> Result<Self, FleetError> {
        let base_dir = if let Ok(custom) = std::env::var(DATA_DIR_ENV) {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create FleetPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the data directory (<base>/data/)
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Get the default export directory (<base>/exports/)
    pub fn exports_dir(&self) -> PathBuf {
        self.base_dir.join("exports")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to vehicles.json
    pub fn vehicles_file(&self) -> PathBuf {
        self.data_dir().join("vehicles.json")
    }

    /// Get the path to customers.json
    pub fn customers_file(&self) -> PathBuf {
        self.data_dir().join("customers.json")
    }

    /// Ensure the base and data directories exist
    pub fn ensure_directories(&self) -> Result<(), FleetError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| FleetError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| FleetError::Io(format!("Failed to create data directory: {}", e)))?;

        Ok(())
    }

    /// Check if fleetdesk has been initialized (config file exists)
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

fn resolve_default_path() -> Result<PathBuf, FleetError> {
    ProjectDirs::from("", "", "fleetdesk")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| FleetError::Config("Could not determine home directory".into()))
}
