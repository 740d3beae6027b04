//! Customer repository for JSON storage
//!
//! Manages loading and saving customers to customers.json

use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::FleetError;
use crate::models::Customer;

use super::file_io::DataFile;

#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct CustomerData {
    customers: Vec<Customer>,
}

/// Repository for customer persistence
pub struct CustomerRepository {
    file: DataFile,
    data: RwLock<BTreeMap<i64, Customer>>,
}

impl CustomerRepository {
    pub fn new(path: PathBuf) -> Self {
        Self {
            file: DataFile::new(path, "customers"),
            data: RwLock::new(BTreeMap::new()),
        }
    }

    /// Load customers from disk
    pub fn load(&self) -> Result<(), FleetError> {
        let file_data: CustomerData = self.file.load()?;

        let mut data = self
            .data
            .write()
            .map_err(|e| FleetError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        data.clear();
        for customer in file_data.customers {
            data.insert(customer.customer_id, customer);
        }

        Ok(())
    }

    /// Save customers to disk
    pub fn save(&self) -> Result<(), FleetError> {
        let customers = self.get_all()?;
        self.file.store(&CustomerData { customers })
    }

    pub fn get(&self, id: i64) -> Result<Option<Customer>, FleetError> {
        let data = self
            .data
            .read()
            .map_err(|e| FleetError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.get(&id).cloned())
    }

    /// All customers ordered by id
    pub fn get_all(&self) -> Result<Vec<Customer>, FleetError> {
        let data = self
            .data
            .read()
            .map_err(|e| FleetError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.values().cloned().collect())
    }

    /// Whether another customer already uses this email (case-insensitive)
    pub fn email_exists(&self, email: &str, exclude_id: Option<i64>) -> Result<bool, FleetError> {
        let email = email.trim().to_lowercase();
        Ok(self.get_all()?.iter().any(|c| {
            Some(c.customer_id) != exclude_id && c.email.trim().to_lowercase() == email
        }))
    }

    pub fn upsert(&self, customer: Customer) -> Result<(), FleetError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| FleetError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        data.insert(customer.customer_id, customer);
        Ok(())
    }

    pub fn delete(&self, id: i64) -> Result<bool, FleetError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| FleetError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        Ok(data.remove(&id).is_some())
    }

    /// Next free id (one past the highest stored id)
    pub fn next_id(&self) -> Result<i64, FleetError> {
        let data = self
            .data
            .read()
            .map_err(|e| FleetError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.keys().next_back().map_or(1, |max| max + 1))
    }

    pub fn count(&self) -> Result<usize, FleetError> {
        let data = self
            .data
            .read()
            .map_err(|e| FleetError::Storage(format!("Failed to acquire read lock: {}", e)))?;
        Ok(data.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn customer(id: i64, email: &str) -> Customer {
        let mut c = Customer::new("Anna", "Schmidt");
        c.customer_id = id;
        c.email = email.into();
        c
    }

    #[test]
    fn test_save_and_reload() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("customers.json");

        let repo = CustomerRepository::new(path.clone());
        repo.upsert(customer(1, "anna@example.de")).unwrap();
        repo.upsert(customer(2, "ben@example.de")).unwrap();
        repo.save().unwrap();

        let reloaded = CustomerRepository::new(path);
        reloaded.load().unwrap();
        assert_eq!(reloaded.count().unwrap(), 2);
        assert_eq!(reloaded.next_id().unwrap(), 3);
        assert_eq!(reloaded.get(2).unwrap().unwrap().email, "ben@example.de");
    }

    #[test]
    fn test_email_exists() {
        let temp_dir = TempDir::new().unwrap();
        let repo = CustomerRepository::new(temp_dir.path().join("customers.json"));
        repo.upsert(customer(1, "anna@example.de")).unwrap();

        assert!(repo.email_exists("ANNA@example.de", None).unwrap());
        assert!(!repo.email_exists("anna@example.de", Some(1)).unwrap());
        assert!(!repo.email_exists("ben@example.de", None).unwrap());
    }

    #[test]
    fn test_delete() {
        let temp_dir = TempDir::new().unwrap();
        let repo = CustomerRepository::new(temp_dir.path().join("customers.json"));
        repo.upsert(customer(1, "anna@example.de")).unwrap();

        assert!(repo.delete(1).unwrap());
        assert_eq!(repo.count().unwrap(), 0);
    }
}
