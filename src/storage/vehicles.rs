//! Vehicle repository for JSON storage
//!
//! Manages loading and saving vehicles to vehicles.json

use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::FleetError;
use crate::models::VehicleRecord;

use super::file_io::DataFile;

/// Serializable vehicle data structure
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct VehicleData {
    vehicles: Vec<VehicleRecord>,
}

/// Repository for vehicle persistence
pub struct VehicleRepository {
    file: DataFile,
    data: RwLock<BTreeMap<i64, VehicleRecord>>,
}

impl VehicleRepository {
    /// Create a new vehicle repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            file: DataFile::new(path, "vehicles"),
            data: RwLock::new(BTreeMap::new()),
        }
    }

    /// Load vehicles from disk
    pub fn load(&self) -> Result<(), FleetError> {
        let file_data: VehicleData = self.file.load()?;

        let mut data = self
            .data
            .write()
            .map_err(|e| FleetError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        data.clear();
        for vehicle in file_data.vehicles {
            data.insert(vehicle.id, vehicle);
        }

        Ok(())
    }

    /// Save vehicles to disk
    pub fn save(&self) -> Result<(), FleetError> {
        let vehicles = self.get_all()?;
        self.file.store(&VehicleData { vehicles })
    }

    /// Get a vehicle by ID
    pub fn get(&self, id: i64) -> Result<Option<VehicleRecord>, FleetError> {
        let data = self
            .data
            .read()
            .map_err(|e| FleetError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.get(&id).cloned())
    }

    /// Get all vehicles ordered by id
    pub fn get_all(&self) -> Result<Vec<VehicleRecord>, FleetError> {
        let data = self
            .data
            .read()
            .map_err(|e| FleetError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.values().cloned().collect())
    }

    /// Get all vehicles belonging to a customer
    pub fn get_by_customer(&self, customer_id: i64) -> Result<Vec<VehicleRecord>, FleetError> {
        Ok(self
            .get_all()?
            .into_iter()
            .filter(|v| v.customer_id == customer_id)
            .collect())
    }

    /// Insert or update a vehicle
    pub fn upsert(&self, vehicle: VehicleRecord) -> Result<(), FleetError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| FleetError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        data.insert(vehicle.id, vehicle);
        Ok(())
    }

    /// Delete a vehicle
    pub fn delete(&self, id: i64) -> Result<bool, FleetError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| FleetError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        Ok(data.remove(&id).is_some())
    }

    /// Next free id (one past the highest stored id)
    pub fn next_id(&self) -> Result<i64, FleetError> {
        let data = self
            .data
            .read()
            .map_err(|e| FleetError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.keys().next_back().map_or(1, |max| max + 1))
    }

    /// Count vehicles
    pub fn count(&self) -> Result<usize, FleetError> {
        let data = self
            .data
            .read()
            .map_err(|e| FleetError::Storage(format!("Failed to acquire read lock: {}", e)))?;
        Ok(data.len())
    }
}
