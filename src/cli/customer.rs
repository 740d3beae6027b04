//! Customer CLI commands
//!
//! Implements CLI commands for customer management.

use clap::Subcommand;

use crate::display::{format_customer_details, format_customer_list};
use crate::error::FleetResult;
use crate::models::Customer;
use crate::services::CustomerService;
use crate::storage::Storage;

/// Customer subcommands
#[derive(Subcommand, Debug)]
pub enum CustomerCommands {
    /// List all customers
    List,
    /// Show customer details and owned vehicles
    Show {
        /// Customer ID
        id: i64,
    },
    /// Add a customer
    Add {
        first_name: String,
        last_name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        phone: String,
        #[arg(long)]
        street: String,
        #[arg(long)]
        zip: String,
        #[arg(long)]
        city: String,
        /// Subscribe to the newsletter
        #[arg(long)]
        newsletter: bool,
    },
    /// Edit a customer
    Update {
        /// Customer ID
        id: i64,
        #[arg(long)]
        first_name: Option<String>,
        #[arg(long)]
        last_name: Option<String>,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        phone: Option<String>,
        #[arg(long)]
        street: Option<String>,
        #[arg(long)]
        zip: Option<String>,
        #[arg(long)]
        city: Option<String>,
        /// Newsletter subscription (true/false)
        #[arg(long)]
        newsletter: Option<bool>,
    },
    /// Delete a customer without vehicles
    Delete {
        /// Customer ID
        id: i64,
        /// Skip confirmation
        #[arg(short, long)]
        force: bool,
    },
}

/// Handle a customer command
pub fn handle_customer_command(storage: &Storage, cmd: CustomerCommands) -> FleetResult<()> {
    let service = CustomerService::new(storage);

    match cmd {
        CustomerCommands::List => {
            let customers = service.list()?;
            println!("{}", format_customer_list(&customers));
            if !customers.is_empty() {
                println!("\nTotal: {} customers", customers.len());
            }
        }

        CustomerCommands::Show { id } => {
            let customer = service.require(id)?;
            let vehicles = storage.vehicles.get_by_customer(id)?;
            print!("{}", format_customer_details(&customer, &vehicles));
        }

        CustomerCommands::Add {
            first_name,
            last_name,
            email,
            phone,
            street,
            zip,
            city,
            newsletter,
        } => {
            let mut customer = Customer::new(first_name, last_name);
            customer.email = email;
            customer.phone_number = phone;
            customer.street = street;
            customer.zip_code = zip;
            customer.city = city;
            customer.newsletter = newsletter;

            let saved = service.submit(customer)?;
            println!("Created customer #{}: {}", saved.customer_id, saved.full_name());
        }

        CustomerCommands::Update {
            id,
            first_name,
            last_name,
            email,
            phone,
            street,
            zip,
            city,
            newsletter,
        } => {
            let mut customer = service.require(id)?;
            if let Some(v) = first_name {
                customer.first_name = v;
            }
            if let Some(v) = last_name {
                customer.last_name = v;
            }
            if let Some(v) = email {
                customer.email = v;
            }
            if let Some(v) = phone {
                customer.phone_number = v;
            }
            if let Some(v) = street {
                customer.street = v;
            }
            if let Some(v) = zip {
                customer.zip_code = v;
            }
            if let Some(v) = city {
                customer.city = v;
            }
            if let Some(v) = newsletter {
                customer.newsletter = v;
            }

            let saved = service.submit(customer)?;
            println!("Updated customer #{}: {}", saved.customer_id, saved.full_name());
        }

        CustomerCommands::Delete { id, force } => {
            let customer = service.require(id)?;

            if !force {
                println!(
                    "About to delete customer #{}: {}",
                    customer.customer_id,
                    customer.full_name()
                );
                println!("Use --force to confirm deletion");
                return Ok(());
            }

            let deleted = service.delete(id)?;
            println!("Deleted customer: {}", deleted.full_name());
        }
    }

    Ok(())
}
