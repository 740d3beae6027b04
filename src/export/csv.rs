//! CSV export functionality
//!
//! Writes a vehicle view as semicolon-separated text. Text columns are
//! wrapped in double quotes as-is; the equipment list shares one cell.

use ::csv::{QuoteStyle, Terminator, WriterBuilder};

use super::{ExportOptions, FIELD_ORDER};
use crate::error::{FleetError, FleetResult};
use crate::filter::FilteredView;
use crate::models::VehicleRecord;

/// Encode a view as CSV.
///
/// Rows are joined with `\n` and the payload does not end with a newline.
/// An empty view produces only the header row.
pub fn encode_csv(view: &FilteredView, options: &ExportOptions) -> FleetResult<Vec<u8>> {
    // Quoting is done per cell below, so the writer must not add its own.
    let mut writer = WriterBuilder::new()
        .delimiter(b';')
        .quote_style(QuoteStyle::Never)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    writer.write_record(FIELD_ORDER)?;

    for vehicle in view {
        writer.write_record(vehicle_row(vehicle, options))?;
    }

    let mut bytes = writer
        .into_inner()
        .map_err(|e| FleetError::Export(e.to_string()))?;

    if bytes.last() == Some(&b'\n') {
        bytes.pop();
    }

    Ok(bytes)
}

fn vehicle_row(vehicle: &VehicleRecord, options: &ExportOptions) -> [String; 8] {
    [
        vehicle.id.to_string(),
        vehicle.customer_id.to_string(),
        quote(&vehicle.make, options),
        quote(&vehicle.model, options),
        vehicle.initial_registration_or_empty().to_string(),
        quote(vehicle.color_or_empty(), options),
        quote(vehicle.status.label(), options),
        quote(&vehicle.features_joined(), options),
    ]
}

/// Wrap a cell in double quotes; with escaping on, embedded quotes are doubled
fn quote(s: &str, options: &ExportOptions) -> String {
    if options.escape_special_chars {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        format!("\"{}\"", s)
    }
}
