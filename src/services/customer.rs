//! Customer service
//!
//! Create-or-update submission of customer records with validation.

use tracing::info;

use crate::error::{FleetError, FleetResult};
use crate::models::Customer;
use crate::storage::Storage;

/// Service for customer management
pub struct CustomerService<'a> {
    storage: &'a Storage,
}

impl<'a> CustomerService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// All customers ordered by id
    pub fn list(&self) -> FleetResult<Vec<Customer>> {
        self.storage.customers.get_all()
    }

    pub fn get(&self, id: i64) -> FleetResult<Option<Customer>> {
        self.storage.customers.get(id)
    }

    pub fn require(&self, id: i64) -> FleetResult<Customer> {
        self.get(id)?
            .ok_or_else(|| FleetError::customer_not_found(id))
    }

    /// Save a customer.
    ///
    /// A customer with id 0 is created under the next free id; any other id
    /// must already exist and is replaced.
    pub fn submit(&self, customer: Customer) -> FleetResult<Customer> {
        customer
            .validate()
            .map_err(|e| FleetError::Validation(e.to_string()))?;

        let exclude = (!customer.is_new()).then_some(customer.customer_id);
        if self.storage.customers.email_exists(&customer.email, exclude)? {
            return Err(FleetError::Duplicate {
                entity_type: "Customer",
                identifier: customer.email.clone(),
            });
        }

        let mut customer = customer;
        let created = customer.is_new();
        if created {
            customer.customer_id = self.storage.customers.next_id()?;
        } else {
            self.require(customer.customer_id)?;
        }

        self.storage.customers.upsert(customer.clone())?;
        self.storage.customers.save()?;

        if created {
            info!(id = customer.customer_id, "customer created");
        } else {
            info!(id = customer.customer_id, "customer updated");
        }
        Ok(customer)
    }

    /// Delete a customer that no longer owns any vehicles
    pub fn delete(&self, id: i64) -> FleetResult<Customer> {
        let customer = self.require(id)?;

        let owned = self.storage.vehicles.get_by_customer(id)?.len();
        if owned > 0 {
            return Err(FleetError::Validation(format!(
                "Customer {} still owns {} vehicle(s)",
                id, owned
            )));
        }

        self.storage.customers.delete(id)?;
        self.storage.customers.save()?;

        info!(id, "customer deleted");
        Ok(customer)
    }
}
