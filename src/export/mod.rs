//! Export module for fleetdesk
//!
//! Encodes a filtered vehicle view in one of three formats and hands the
//! payload to a delivery target:
//! - CSV: semicolon separated, one row per vehicle
//! - JSON: pretty-printed array of full records
//! - XML: `<vehicles>` document with one `<vehicle>` per record
//!
//! All three formats use the column order in [`FIELD_ORDER`].

pub mod csv;
pub mod delivery;
pub mod json;
pub mod xml;

pub use self::csv::encode_csv;
pub use delivery::{Delivery, DirectoryDelivery, StdoutDelivery};
pub use json::{encode_json, import_vehicles_json};
pub use xml::encode_xml;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::info;

use crate::error::FleetResult;
use crate::filter::FilteredView;

/// Field order shared by every export format
pub const FIELD_ORDER: [&str; 8] = [
    "id",
    "customerId",
    "make",
    "model",
    "initialRegistration",
    "color",
    "status",
    "equipmentFeatures",
];

/// Export format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// Semicolon-separated text
    #[default]
    Csv,
    /// Indented JSON
    Json,
    /// XML document
    Xml,
}

impl ExportFormat {
    /// Fixed download filename for this format
    pub fn filename(&self) -> &'static str {
        match self {
            Self::Csv => "vehicles-export.csv",
            Self::Json => "vehicles-export.json",
            Self::Xml => "vehicles-export.xml",
        }
    }

    /// Media type announced with the payload
    pub fn media_type(&self) -> &'static str {
        match self {
            Self::Csv => "text/csv;charset=utf-8",
            Self::Json => "application/json",
            Self::Xml => "application/xml",
        }
    }

    /// Encode a view in this format
    pub fn encode(&self, view: &FilteredView, options: &ExportOptions) -> FleetResult<Vec<u8>> {
        match self {
            Self::Csv => encode_csv(view, options),
            Self::Json => encode_json(view),
            Self::Xml => Ok(encode_xml(view, options)),
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Csv => write!(f, "csv"),
            Self::Json => write!(f, "json"),
            Self::Xml => write!(f, "xml"),
        }
    }
}

/// Knobs shared by the text encoders
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExportOptions {
    /// Escape embedded quotes (CSV) and markup characters (XML).
    /// JSON is always escaped by the serializer.
    pub escape_special_chars: bool,
}

impl ExportOptions {
    pub fn escaped() -> Self {
        Self {
            escape_special_chars: true,
        }
    }
}

/// Encode `view` and hand the payload to `delivery`.
///
/// Returns the payload size in bytes.
pub fn export_view(
    view: &FilteredView,
    format: ExportFormat,
    options: &ExportOptions,
    delivery: &dyn Delivery,
) -> FleetResult<usize> {
    let payload = format.encode(view, options)?;
    delivery.deliver(&payload, format.filename(), format.media_type())?;

    info!(
        format = %format,
        vehicles = view.len(),
        bytes = payload.len(),
        "exported vehicle list"
    );
    Ok(payload.len())
}
