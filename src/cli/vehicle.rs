//! Vehicle CLI commands
//!
//! Implements CLI commands for the vehicle list.

use clap::Subcommand;
use std::path::PathBuf;

use super::export::{handle_export_command, ExportArgs, FilterArgs};
use crate::config::{FleetPaths, Settings};
use crate::display::{format_vehicle_details, format_vehicle_list};
use crate::error::{FleetError, FleetResult};
use crate::export::import_vehicles_json;
use crate::models::VehicleStatus;
use crate::services::{NewVehicle, VehicleChanges, VehicleService};
use crate::storage::Storage;

/// Vehicle subcommands
#[derive(Subcommand, Debug)]
pub enum VehicleCommands {
    /// List vehicles, optionally filtered
    List {
        #[command(flatten)]
        filter: FilterArgs,
    },
    /// Show vehicle details
    Show {
        /// Vehicle ID
        id: i64,
    },
    /// Add a vehicle
    Add {
        /// Owning customer ID
        #[arg(short, long)]
        customer: i64,
        /// Make (e.g. "VW")
        make: String,
        /// Model (e.g. "Golf")
        model: String,
        /// Color
        #[arg(long)]
        color: Option<String>,
        /// Initial registration (YYYY-MM-DD)
        #[arg(long)]
        registered: Option<String>,
        /// Equipment features, comma separated
        #[arg(long, value_delimiter = ',')]
        features: Vec<String>,
        /// Initial status
        #[arg(long, default_value = "Verfügbar")]
        status: VehicleStatus,
    },
    /// Edit a vehicle
    Update {
        /// Vehicle ID
        id: i64,
        /// New owning customer ID
        #[arg(short, long)]
        customer: Option<i64>,
        #[arg(long)]
        make: Option<String>,
        #[arg(long)]
        model: Option<String>,
        /// New color (empty string clears it)
        #[arg(long)]
        color: Option<String>,
        /// New initial registration (empty string clears it)
        #[arg(long)]
        registered: Option<String>,
        /// Replace the equipment list, comma separated
        #[arg(long, value_delimiter = ',')]
        features: Option<Vec<String>>,
    },
    /// Change a vehicle's status
    Status {
        /// Vehicle ID
        id: i64,
        /// New status (Verfügbar, Reserviert, Verkauft)
        status: VehicleStatus,
    },
    /// Delete a vehicle
    Delete {
        /// Vehicle ID
        id: i64,
        /// Skip confirmation
        #[arg(short, long)]
        force: bool,
    },
    /// Export the (filtered) vehicle list
    Export(ExportArgs),
    /// Import vehicles from a JSON export
    Import {
        /// Path to a vehicles-export.json file
        file: PathBuf,
    },
}

/// Handle a vehicle command
pub fn handle_vehicle_command(
    storage: &Storage,
    paths: &FleetPaths,
    settings: &Settings,
    cmd: VehicleCommands,
) -> FleetResult<()> {
    let service = VehicleService::new(storage);

    match cmd {
        VehicleCommands::List { filter } => {
            let mut engine = service.load_engine()?;
            let total = engine.records().len();
            let view = engine.apply(&filter.to_criteria());
            println!("{}", format_vehicle_list(view, total));
        }

        VehicleCommands::Show { id } => {
            let vehicle = service.require(id)?;
            print!("{}", format_vehicle_details(&vehicle));
        }

        VehicleCommands::Add {
            customer,
            make,
            model,
            color,
            registered,
            features,
            status,
        } => {
            let vehicle = service.create(NewVehicle {
                customer_id: customer,
                make,
                model,
                initial_registration: registered,
                color,
                status,
                equipment_features: clean_features(features),
            })?;
            println!("Created vehicle: {}", vehicle);
        }

        VehicleCommands::Update {
            id,
            customer,
            make,
            model,
            color,
            registered,
            features,
        } => {
            let vehicle = service.update(
                id,
                VehicleChanges {
                    customer_id: customer,
                    make,
                    model,
                    initial_registration: registered,
                    color,
                    equipment_features: features.map(clean_features),
                },
            )?;
            println!("Updated vehicle: {}", vehicle);
        }

        VehicleCommands::Status { id, status } => {
            let vehicle = service.change_status(id, status)?;
            println!("Status changed: {}", vehicle);
        }

        VehicleCommands::Delete { id, force } => {
            let vehicle = service.require(id)?;

            if !force {
                println!("About to delete vehicle: {}", vehicle);
                println!("Use --force to confirm deletion");
                return Ok(());
            }

            let deleted = service.delete(id)?;
            println!("Deleted vehicle: {}", deleted);
        }

        VehicleCommands::Export(args) => {
            handle_export_command(storage, paths, settings, args)?;
        }

        VehicleCommands::Import { file } => {
            let contents = std::fs::read_to_string(&file).map_err(|e| {
                FleetError::Import(format!("Failed to read {}: {}", file.display(), e))
            })?;
            let records = import_vehicles_json(&contents)?;
            let summary = service.import(records)?;
            println!(
                "Imported {} vehicles ({} new, {} updated)",
                summary.created + summary.updated,
                summary.created,
                summary.updated
            );
        }
    }

    Ok(())
}

/// Trim feature names and drop empty entries
fn clean_features(features: Vec<String>) -> Vec<String> {
    features
        .into_iter()
        .map(|f| f.trim().to_string())
        .filter(|f| !f.is_empty())
        .collect()
}
