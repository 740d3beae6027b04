use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use fleetdesk::cli::{handle_customer_command, handle_vehicle_command, CustomerCommands, VehicleCommands};
use fleetdesk::config::{FleetPaths, Settings};
use fleetdesk::storage::Storage;

/// Environment variable holding the tracing filter directive
const LOG_ENV: &str = "FLEETDESK_LOG";

#[derive(Parser)]
#[command(
    name = "fleetdesk",
    version,
    about = "Vehicle and customer records for a car dealership",
    long_about = "FleetDesk keeps a dealership's vehicle and customer records. \
                  The vehicle list can be filtered by id, make, model, color and \
                  status, and the filtered view exported as CSV, JSON or XML."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Vehicle management commands
    #[command(subcommand, alias = "v")]
    Vehicle(VehicleCommands),

    /// Customer management commands
    #[command(subcommand, alias = "c")]
    Customer(CustomerCommands),

    /// Initialize the data directory
    Init,

    /// Show current configuration and paths
    Config,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .init();
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = FleetPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    // Initialize storage
    let mut storage = Storage::new(paths.clone())?;
    storage.load_all()?;

    match cli.command {
        Some(Commands::Vehicle(cmd)) => {
            handle_vehicle_command(&storage, &paths, &settings, cmd)?;
        }
        Some(Commands::Customer(cmd)) => {
            handle_customer_command(&storage, cmd)?;
        }
        Some(Commands::Init) => {
            println!("Initializing FleetDesk at: {}", paths.data_dir().display());
            fleetdesk::storage::initialize_storage(&paths)?;
            settings.save(&paths)?;
            println!("Initialization complete!");
            println!();
            println!("Run 'fleetdesk customer add --help' to register your first customer.");
        }
        Some(Commands::Config) => {
            println!("FleetDesk Configuration");
            println!("=======================");
            println!("Base directory:   {}", paths.base_dir().display());
            println!("Data directory:   {}", paths.data_dir().display());
            println!("Export directory: {}", settings.export_dir(&paths).display());
            println!();
            println!("Settings:");
            println!("  Default export format: {}", settings.default_export_format);
            println!("  Escape special chars:  {}", settings.escape_special_chars);
        }
        None => {
            println!("FleetDesk - vehicle and customer records");
            println!();
            println!("Run 'fleetdesk --help' for usage information.");
        }
    }

    Ok(())
}
