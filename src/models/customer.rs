//! Customer model
//!
//! A customer owns zero or more vehicles. An id of 0 marks a customer that
//! has not been stored yet.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Id carried by customers that have not been persisted
pub const UNSAVED_CUSTOMER_ID: i64 = 0;

/// A customer record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    /// Unique identifier (0 until stored)
    #[serde(default)]
    pub customer_id: i64,

    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: String,
    pub street: String,
    pub zip_code: String,
    pub city: String,

    /// Whether the customer receives the newsletter
    #[serde(default)]
    pub newsletter: bool,
}

impl Customer {
    /// Create an unsaved customer with the required name fields
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            customer_id: UNSAVED_CUSTOMER_ID,
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: String::new(),
            phone_number: String::new(),
            street: String::new(),
            zip_code: String::new(),
            city: String::new(),
            newsletter: false,
        }
    }

    /// Whether this customer still needs to be created
    pub fn is_new(&self) -> bool {
        self.customer_id == UNSAVED_CUSTOMER_ID
    }

    /// "First Last"
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Validate all required fields and the email address
    pub fn validate(&self) -> Result<(), CustomerValidationError> {
        let required = [
            ("firstName", &self.first_name),
            ("lastName", &self.last_name),
            ("email", &self.email),
            ("phoneNumber", &self.phone_number),
            ("street", &self.street),
            ("zipCode", &self.zip_code),
            ("city", &self.city),
        ];

        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(CustomerValidationError::MissingField(field));
            }
        }

        if !is_valid_email(self.email.trim()) {
            return Err(CustomerValidationError::InvalidEmail(self.email.clone()));
        }

        Ok(())
    }
}

impl fmt::Display for Customer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} <{}>", self.full_name(), self.email)
    }
}

/// Basic address shape check: `local@domain.tld`, no whitespace.
fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }

    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };

    !local.is_empty()
        && !domain.contains('@')
        && domain.contains('.')
        && domain.split('.').all(|part| !part.is_empty())
}

/// Validation errors for customers
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CustomerValidationError {
    MissingField(&'static str),
    InvalidEmail(String),
}

impl fmt::Display for CustomerValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingField(field) => write!(f, "Customer field '{}' is required", field),
            Self::InvalidEmail(email) => write!(f, "Invalid email address '{}'", email),
        }
    }
}

impl std::error::Error for CustomerValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_customer() -> Customer {
        let mut customer = Customer::new("Anna", "Schmidt");
        customer.email = "anna@example.de".into();
        customer.phone_number = "0301234567".into();
        customer.street = "Hauptstraße 1".into();
        customer.zip_code = "10115".into();
        customer.city = "Berlin".into();
        customer
    }

    #[test]
    fn test_new_customer_is_unsaved() {
        let customer = Customer::new("Anna", "Schmidt");
        assert!(customer.is_new());
        assert!(!customer.newsletter);
        assert_eq!(customer.full_name(), "Anna Schmidt");
    }

    #[test]
    fn test_complete_customer_validates() {
        assert!(complete_customer().validate().is_ok());
    }

    #[test]
    fn test_missing_field() {
        let mut customer = complete_customer();
        customer.city = "   ".into();
        assert_eq!(
            customer.validate(),
            Err(CustomerValidationError::MissingField("city"))
        );
    }

    #[test]
    fn test_invalid_email() {
        for email in ["anna", "anna@", "@example.de", "anna@example", "a b@example.de", "a@b@c.de", "anna@example."] {
            let mut customer = complete_customer();
            customer.email = email.into();
            assert!(
                matches!(customer.validate(), Err(CustomerValidationError::InvalidEmail(_))),
                "{} should be rejected",
                email
            );
        }
    }

    #[test]
    fn test_camel_case_serialization() {
        let value = serde_json::to_value(complete_customer()).unwrap();
        assert_eq!(value["firstName"], "Anna");
        assert_eq!(value["zipCode"], "10115");
        assert_eq!(value["customerId"], 0);
    }
}
