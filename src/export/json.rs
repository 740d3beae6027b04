//! JSON export functionality
//!
//! Serializes the full vehicle records, nothing renamed or dropped, so the
//! payload can be read back with [`import_vehicles_json`].

use crate::error::{FleetError, FleetResult};
use crate::filter::FilteredView;
use crate::models::VehicleRecord;

/// Encode a view as a pretty-printed JSON array
pub fn encode_json(view: &FilteredView) -> FleetResult<Vec<u8>> {
    serde_json::to_vec_pretty(view.records()).map_err(|e| FleetError::Export(e.to_string()))
}

/// Parse a JSON export back into vehicle records
pub fn import_vehicles_json(json_str: &str) -> FleetResult<Vec<VehicleRecord>> {
    let records: Vec<VehicleRecord> =
        serde_json::from_str(json_str).map_err(|e| FleetError::Import(e.to_string()))?;

    for vehicle in &records {
        vehicle
            .validate()
            .map_err(|e| FleetError::Import(format!("vehicle {}: {}", vehicle.id, e)))?;
    }

    Ok(records)
}
