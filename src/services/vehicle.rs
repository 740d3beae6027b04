//! Vehicle service
//!
//! Business logic for the vehicle list: CRUD, status changes, imports, and
//! building a filter engine over the stored collection.

use tracing::info;

use crate::error::{FleetError, FleetResult};
use crate::filter::FilterEngine;
use crate::models::{VehicleRecord, VehicleStatus};
use crate::storage::Storage;

/// Input for creating a vehicle; the id is assigned by the service
#[derive(Debug, Clone, Default)]
pub struct NewVehicle {
    pub customer_id: i64,
    pub make: String,
    pub model: String,
    pub initial_registration: Option<String>,
    pub color: Option<String>,
    pub status: VehicleStatus,
    pub equipment_features: Vec<String>,
}

/// Partial update; `None` leaves a field unchanged
#[derive(Debug, Clone, Default)]
pub struct VehicleChanges {
    pub customer_id: Option<i64>,
    pub make: Option<String>,
    pub model: Option<String>,
    pub initial_registration: Option<String>,
    pub color: Option<String>,
    pub equipment_features: Option<Vec<String>>,
}

/// Outcome of an import
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImportSummary {
    pub created: usize,
    pub updated: usize,
}

/// Service for vehicle management
pub struct VehicleService<'a> {
    storage: &'a Storage,
}

impl<'a> VehicleService<'a> {
    /// Create a new vehicle service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// All vehicles ordered by id
    pub fn fetch_all(&self) -> FleetResult<Vec<VehicleRecord>> {
        self.storage.vehicles.get_all()
    }

    /// A filter engine loaded with every stored vehicle
    pub fn load_engine(&self) -> FleetResult<FilterEngine> {
        Ok(FilterEngine::with_records(self.fetch_all()?))
    }

    /// Get a vehicle by ID
    pub fn get(&self, id: i64) -> FleetResult<Option<VehicleRecord>> {
        self.storage.vehicles.get(id)
    }

    /// Get a vehicle by ID, failing if it does not exist
    pub fn require(&self, id: i64) -> FleetResult<VehicleRecord> {
        self.get(id)?
            .ok_or_else(|| FleetError::vehicle_not_found(id))
    }

    /// Create a new vehicle
    pub fn create(&self, input: NewVehicle) -> FleetResult<VehicleRecord> {
        let vehicle = VehicleRecord {
            id: self.storage.vehicles.next_id()?,
            customer_id: input.customer_id,
            make: input.make.trim().to_string(),
            model: input.model.trim().to_string(),
            initial_registration: input.initial_registration.filter(|d| !d.trim().is_empty()),
            color: input.color.filter(|c| !c.trim().is_empty()),
            status: input.status,
            equipment_features: input.equipment_features,
        };

        self.check(&vehicle)?;

        self.storage.vehicles.upsert(vehicle.clone())?;
        self.storage.vehicles.save()?;

        info!(id = vehicle.id, make = %vehicle.make, model = %vehicle.model, "vehicle created");
        Ok(vehicle)
    }

    /// Apply changes to an existing vehicle
    pub fn update(&self, id: i64, changes: VehicleChanges) -> FleetResult<VehicleRecord> {
        let mut vehicle = self.require(id)?;

        if let Some(customer_id) = changes.customer_id {
            vehicle.customer_id = customer_id;
        }
        if let Some(make) = changes.make {
            vehicle.make = make.trim().to_string();
        }
        if let Some(model) = changes.model {
            vehicle.model = model.trim().to_string();
        }
        if let Some(date) = changes.initial_registration {
            vehicle.initial_registration = Some(date).filter(|d| !d.trim().is_empty());
        }
        if let Some(color) = changes.color {
            vehicle.color = Some(color).filter(|c| !c.trim().is_empty());
        }
        if let Some(features) = changes.equipment_features {
            vehicle.equipment_features = features;
        }

        self.check(&vehicle)?;

        self.storage.vehicles.upsert(vehicle.clone())?;
        self.storage.vehicles.save()?;

        info!(id, "vehicle updated");
        Ok(vehicle)
    }

    /// Set the status of a vehicle
    pub fn change_status(&self, id: i64, status: VehicleStatus) -> FleetResult<VehicleRecord> {
        let mut vehicle = self.require(id)?;
        let before = vehicle.status;
        vehicle.status = status;

        self.storage.vehicles.upsert(vehicle.clone())?;
        self.storage.vehicles.save()?;

        info!(id, from = %before, to = %status, "vehicle status changed");
        Ok(vehicle)
    }

    /// Delete a vehicle, returning the removed record
    pub fn delete(&self, id: i64) -> FleetResult<VehicleRecord> {
        let vehicle = self.require(id)?;

        self.storage.vehicles.delete(id)?;
        self.storage.vehicles.save()?;

        info!(id, "vehicle deleted");
        Ok(vehicle)
    }

    /// Insert or replace vehicles by id.
    ///
    /// Imported records keep their ids and are not checked against the
    /// customer list, since exports may come from another installation.
    pub fn import(&self, records: Vec<VehicleRecord>) -> FleetResult<ImportSummary> {
        for vehicle in &records {
            vehicle
                .validate()
                .map_err(|e| FleetError::Import(format!("vehicle {}: {}", vehicle.id, e)))?;
        }

        let mut summary = ImportSummary::default();
        for vehicle in records {
            if self.storage.vehicles.get(vehicle.id)?.is_some() {
                summary.updated += 1;
            } else {
                summary.created += 1;
            }
            self.storage.vehicles.upsert(vehicle)?;
        }
        self.storage.vehicles.save()?;

        info!(created = summary.created, updated = summary.updated, "vehicles imported");
        Ok(summary)
    }

    fn check(&self, vehicle: &VehicleRecord) -> FleetResult<()> {
        vehicle
            .validate()
            .map_err(|e| FleetError::Validation(e.to_string()))?;

        if self.storage.customers.get(vehicle.customer_id)?.is_none() {
            return Err(FleetError::customer_not_found(vehicle.customer_id));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::FleetPaths;
    use crate::filter::FilterCriteria;
    use crate::models::Customer;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = FleetPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();

        let mut customer = Customer::new("Anna", "Schmidt");
        customer.customer_id = 1;
        storage.customers.upsert(customer).unwrap();

        (temp_dir, storage)
    }

    fn golf() -> NewVehicle {
        NewVehicle {
            customer_id: 1,
            make: "VW".into(),
            model: "Golf".into(),
            equipment_features: vec!["ABS".into(), "Klima".into()],
            ..Default::default()
        }
    }

    #[test]
    fn test_create_assigns_ids() {
        let (_temp_dir, storage) = create_test_storage();
        let service = VehicleService::new(&storage);

        let first = service.create(golf()).unwrap();
        let second = service.create(golf()).unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert_eq!(first.status, VehicleStatus::Available);
        assert_eq!(service.fetch_all().unwrap().len(), 2);
    }

    #[test]
    fn test_create_validates() {
        let (_temp_dir, storage) = create_test_storage();
        let service = VehicleService::new(&storage);

        let err = service
            .create(NewVehicle {
                make: " ".into(),
                ..golf()
            })
            .unwrap_err();
        assert!(err.is_validation());

        let err = service
            .create(NewVehicle {
                customer_id: 99,
                ..golf()
            })
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_create_treats_blank_fields_as_missing() {
        let (_temp_dir, storage) = create_test_storage();
        let service = VehicleService::new(&storage);

        let vehicle = service
            .create(NewVehicle {
                initial_registration: Some("".into()),
                color: Some("  ".into()),
                ..golf()
            })
            .unwrap();

        assert_eq!(vehicle.initial_registration, None);
        assert_eq!(vehicle.color, None);
    }

    #[test]
    fn test_update_and_change_status() {
        let (_temp_dir, storage) = create_test_storage();
        let service = VehicleService::new(&storage);
        let vehicle = service.create(golf()).unwrap();

        let updated = service
            .update(
                vehicle.id,
                VehicleChanges {
                    color: Some("Blau".into()),
                    initial_registration: Some("2020-02-29".into()),
                    ..Default::default()
                },
            )
            .unwrap();
        assert_eq!(updated.color.as_deref(), Some("Blau"));
        assert_eq!(updated.make, "VW");

        let sold = service.change_status(vehicle.id, VehicleStatus::Sold).unwrap();
        assert_eq!(sold.status, VehicleStatus::Sold);
        assert_eq!(service.require(vehicle.id).unwrap().status, VehicleStatus::Sold);
    }

    #[test]
    fn test_delete() {
        let (_temp_dir, storage) = create_test_storage();
        let service = VehicleService::new(&storage);
        let vehicle = service.create(golf()).unwrap();

        service.delete(vehicle.id).unwrap();
        assert!(service.get(vehicle.id).unwrap().is_none());
        assert!(service.delete(vehicle.id).unwrap_err().is_not_found());
    }

    #[test]
    fn test_import_counts_created_and_updated() {
        let (_temp_dir, storage) = create_test_storage();
        let service = VehicleService::new(&storage);
        service.create(golf()).unwrap();

        let summary = service
            .import(vec![
                VehicleRecord::new(1, 1, "VW", "Golf GTI"),
                VehicleRecord::new(8, 42, "BMW", "X5"),
            ])
            .unwrap();

        assert_eq!(summary, ImportSummary { created: 1, updated: 1 });
        assert_eq!(service.require(1).unwrap().model, "Golf GTI");
        assert_eq!(service.require(8).unwrap().customer_id, 42);
    }

    #[test]
    fn test_engine_reflects_storage() {
        let (_temp_dir, storage) = create_test_storage();
        let service = VehicleService::new(&storage);
        service.create(golf()).unwrap();
        service
            .create(NewVehicle {
                make: "BMW".into(),
                model: "X5".into(),
                ..golf()
            })
            .unwrap();

        let mut engine = service.load_engine().unwrap();
        assert_eq!(engine.apply(&FilterCriteria::new().with_make("bmw")).ids(), vec![2]);
        assert_eq!(engine.reset().ids(), vec![1, 2]);
    }
}
