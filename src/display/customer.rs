//! Customer display formatting

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::{Customer, VehicleRecord};

#[derive(Tabled)]
struct CustomerRow {
    #[tabled(rename = "ID")]
    id: i64,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Email")]
    email: String,
    #[tabled(rename = "City")]
    city: String,
    #[tabled(rename = "Newsletter")]
    newsletter: &'static str,
}

/// Format customers as a table
pub fn format_customer_list(customers: &[Customer]) -> String {
    if customers.is_empty() {
        return "No customers found.".to_string();
    }

    let rows = customers.iter().map(|c| CustomerRow {
        id: c.customer_id,
        name: c.full_name(),
        email: c.email.clone(),
        city: c.city.clone(),
        newsletter: if c.newsletter { "yes" } else { "no" },
    });

    let mut table = Table::new(rows);
    table.with(Style::psql());
    table.to_string()
}

/// Format a customer with the vehicles they own
pub fn format_customer_details(customer: &Customer, vehicles: &[VehicleRecord]) -> String {
    let mut output = String::new();

    output.push_str(&format!("Customer #{}: {}\n", customer.customer_id, customer.full_name()));
    output.push_str(&format!("  Email:      {}\n", customer.email));
    output.push_str(&format!("  Phone:      {}\n", customer.phone_number));
    output.push_str(&format!(
        "  Address:    {}, {} {}\n",
        customer.street, customer.zip_code, customer.city
    ));
    output.push_str(&format!(
        "  Newsletter: {}\n",
        if customer.newsletter { "Yes" } else { "No" }
    ));

    output.push('\n');
    if vehicles.is_empty() {
        output.push_str("  No vehicles.\n");
    } else {
        output.push_str("  Vehicles:\n");
        for vehicle in vehicles {
            output.push_str(&format!("    {}\n", vehicle));
        }
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    fn anna() -> Customer {
        let mut customer = Customer::new("Anna", "Schmidt");
        customer.customer_id = 3;
        customer.email = "anna@example.de".into();
        customer.city = "Berlin".into();
        customer
    }

    #[test]
    fn test_format_customer_list() {
        let output = format_customer_list(&[anna()]);
        assert!(output.contains("Anna Schmidt"));
        assert!(output.contains("anna@example.de"));
        assert!(format_customer_list(&[]).contains("No customers found"));
    }

    #[test]
    fn test_format_customer_details() {
        let vehicles = vec![VehicleRecord::new(1, 3, "VW", "Golf")];
        let output = format_customer_details(&anna(), &vehicles);

        assert!(output.contains("Customer #3: Anna Schmidt"));
        assert!(output.contains("#1 VW Golf (Verfügbar)"));
    }
}
