//! CLI commands for vehicle export
//!
//! Filters the stored vehicle list and delivers it in the chosen format.

use clap::Args;
use std::path::PathBuf;

use crate::config::{FleetPaths, Settings};
use crate::error::FleetResult;
use crate::export::{export_view, DirectoryDelivery, ExportFormat, ExportOptions, StdoutDelivery};
use crate::filter::FilterCriteria;
use crate::models::VehicleStatus;
use crate::services::VehicleService;
use crate::storage::Storage;

/// Filter flags shared by `vehicle list` and `vehicle export`
#[derive(Args, Debug, Clone, Default)]
pub struct FilterArgs {
    /// Exact vehicle id
    #[arg(long)]
    pub id: Option<String>,

    /// Make contains (case-insensitive)
    #[arg(long)]
    pub make: Option<String>,

    /// Model contains (case-insensitive)
    #[arg(long)]
    pub model: Option<String>,

    /// Color contains (case-insensitive)
    #[arg(long)]
    pub color: Option<String>,

    /// Exact status (Verfügbar, Reserviert, Verkauft); blank matches all
    #[arg(long, value_parser = parse_status_filter)]
    pub status: Option<StatusFilter>,
}

impl FilterArgs {
    pub fn to_criteria(&self) -> FilterCriteria {
        FilterCriteria {
            id: self.id.clone(),
            make: self.make.clone(),
            model: self.model.clone(),
            color: self.color.clone(),
            status: self.status.and_then(|s| s.0),
        }
    }
}

/// Parsed `--status` value; `None` inside means no status constraint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusFilter(pub Option<VehicleStatus>);

impl From<VehicleStatus> for StatusFilter {
    fn from(status: VehicleStatus) -> Self {
        Self(Some(status))
    }
}

fn parse_status_filter(input: &str) -> Result<StatusFilter, String> {
    if input.trim().is_empty() {
        return Ok(StatusFilter(None));
    }
    input.parse::<VehicleStatus>().map(StatusFilter::from)
}

/// Arguments for `vehicle export`
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Export format (defaults to the configured format)
    #[arg(short, long, value_enum)]
    pub format: Option<ExportFormat>,

    #[command(flatten)]
    pub filter: FilterArgs,

    /// Directory to save the export in (defaults to the configured export directory)
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// Write the payload to stdout instead of a file
    #[arg(long, conflicts_with = "output_dir")]
    pub stdout: bool,

    /// Escape quotes and markup characters in free text
    #[arg(long)]
    pub escape: bool,
}

/// Handle `vehicle export`
pub fn handle_export_command(
    storage: &Storage,
    paths: &FleetPaths,
    settings: &Settings,
    args: ExportArgs,
) -> FleetResult<()> {
    let service = VehicleService::new(storage);
    let mut engine = service.load_engine()?;
    let view = engine.apply(&args.filter.to_criteria());

    let format = args.format.unwrap_or(settings.default_export_format);
    let options = ExportOptions {
        escape_special_chars: args.escape || settings.escape_special_chars,
    };

    if args.stdout {
        export_view(view, format, &options, &StdoutDelivery)?;
        return Ok(());
    }

    let dir = args
        .output_dir
        .unwrap_or_else(|| settings.export_dir(paths));
    let delivery = DirectoryDelivery::new(dir);
    export_view(view, format, &options, &delivery)?;

    println!(
        "Exported {} vehicles to: {}",
        view.len(),
        delivery.path_for(format.filename()).display()
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Customer, VehicleRecord};
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_filter_args_to_criteria() {
        let args = FilterArgs {
            make: Some("vw".into()),
            status: Some(VehicleStatus::Sold.into()),
            ..Default::default()
        };
        let criteria = args.to_criteria();
        assert_eq!(criteria.make.as_deref(), Some("vw"));
        assert_eq!(criteria.status, Some(VehicleStatus::Sold));
        assert!(criteria.id.is_none());
    }

    #[test]
    fn test_parse_status_filter() {
        assert_eq!(parse_status_filter(""), Ok(StatusFilter(None)));
        assert_eq!(parse_status_filter("   "), Ok(StatusFilter(None)));
        assert_eq!(
            parse_status_filter("reserviert"),
            Ok(StatusFilter(Some(VehicleStatus::Reserved)))
        );
        assert!(parse_status_filter("Verschrottet").is_err());
    }

    #[test]
    fn test_blank_status_leaves_criteria_unconstrained() {
        let args = FilterArgs {
            status: Some(StatusFilter(None)),
            ..Default::default()
        };
        assert!(args.to_criteria().is_empty());
    }

    #[test]
    fn test_export_writes_filtered_file() {
        let temp_dir = TempDir::new().unwrap();
        let paths = FleetPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths.clone()).unwrap();
        storage.load_all().unwrap();

        let mut customer = Customer::new("Anna", "Schmidt");
        customer.customer_id = 1;
        storage.customers.upsert(customer).unwrap();
        storage.vehicles.upsert(VehicleRecord::new(1, 1, "VW", "Golf")).unwrap();
        storage.vehicles.upsert(VehicleRecord::new(2, 1, "BMW", "X5")).unwrap();

        let args = ExportArgs {
            format: Some(ExportFormat::Json),
            filter: FilterArgs {
                make: Some("bmw".into()),
                ..Default::default()
            },
            output_dir: None,
            stdout: false,
            escape: false,
        };
        handle_export_command(&storage, &paths, &Settings::default(), args).unwrap();

        let written = fs::read_to_string(paths.exports_dir().join("vehicles-export.json")).unwrap();
        assert!(written.contains("\"X5\""));
        assert!(!written.contains("\"Golf\""));
    }
}
