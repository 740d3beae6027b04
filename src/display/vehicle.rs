//! Vehicle display formatting
//!
//! Formats the vehicle list as a table and single vehicles as detail views.

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::filter::FilteredView;
use crate::models::VehicleRecord;

#[derive(Tabled)]
struct VehicleRow {
    #[tabled(rename = "ID")]
    id: i64,
    #[tabled(rename = "Customer")]
    customer_id: i64,
    #[tabled(rename = "Make")]
    make: String,
    #[tabled(rename = "Model")]
    model: String,
    #[tabled(rename = "Registered")]
    initial_registration: String,
    #[tabled(rename = "Color")]
    color: String,
    #[tabled(rename = "Status")]
    status: String,
    #[tabled(rename = "Equipment")]
    equipment: String,
}

impl From<&VehicleRecord> for VehicleRow {
    fn from(vehicle: &VehicleRecord) -> Self {
        Self {
            id: vehicle.id,
            customer_id: vehicle.customer_id,
            make: vehicle.make.clone(),
            model: vehicle.model.clone(),
            initial_registration: vehicle.initial_registration_or_empty().to_string(),
            color: vehicle.color_or_empty().to_string(),
            status: vehicle.status.to_string(),
            equipment: vehicle.features_joined(),
        }
    }
}

/// Format a view as a table, followed by a "shown of total" footer
pub fn format_vehicle_list(view: &FilteredView, total: usize) -> String {
    if view.is_empty() {
        return if total == 0 {
            "No vehicles found.".to_string()
        } else {
            format!("No vehicles match the filter ({} total).", total)
        };
    }

    let mut table = Table::new(view.iter().map(VehicleRow::from));
    table.with(Style::psql());

    format!("{}\n\nShowing {} of {} vehicles", table, view.len(), total)
}

/// Format a single vehicle's details
pub fn format_vehicle_details(vehicle: &VehicleRecord) -> String {
    let mut output = String::new();

    output.push_str(&format!("Vehicle #{}: {} {}\n", vehicle.id, vehicle.make, vehicle.model));
    output.push_str(&format!("  Customer:     {}\n", vehicle.customer_id));
    output.push_str(&format!("  Status:       {}\n", vehicle.status));
    output.push_str(&format!(
        "  Color:        {}\n",
        vehicle.color.as_deref().unwrap_or("-")
    ));
    output.push_str(&format!(
        "  Registered:   {}\n",
        vehicle.initial_registration.as_deref().unwrap_or("-")
    ));

    if vehicle.equipment_features.is_empty() {
        output.push_str("  Equipment:    (none)\n");
    } else {
        output.push_str("  Equipment:\n");
        for feature in &vehicle.equipment_features {
            output.push_str(&format!("    - {}\n", feature));
        }
    }

    output
}
