//! Customer record model
//!
//! A customer is the unit of work flowing through the import pipeline:
//! parsed from a source line, normalized by the transformer, and persisted
//! by a sink writer.

use serde::{Deserialize, Serialize};

/// A customer record
///
/// Customers are immutable values: all three fields are known at parse time,
/// so a record is either fully well-formed or never constructed at all.
/// Store-assigned identity (primary keys) is not part of the value and is
/// not meaningful across stores.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    /// First name
    pub first_name: String,

    /// Last name
    pub last_name: String,

    /// Email address
    pub email: String,
}

impl Customer {
    /// Create a new customer record
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_customer_creation() {
        let customer = Customer::new("John", "Doe", "john.doe@example.com");

        assert_eq!(customer.first_name, "John");
        assert_eq!(customer.last_name, "Doe");
        assert_eq!(customer.email, "john.doe@example.com");
    }

    #[test]
    fn test_customer_equality() {
        let a = Customer::new("Jane", "Smith", "jane.smith@example.com");
        let b = Customer::new("Jane", "Smith", "jane.smith@example.com");

        assert_eq!(a, b);
    }

    #[test]
    fn test_customer_serialization_round_trip() {
        let customer = Customer::new("Jane", "Smith", "jane.smith@example.com");
        let json = serde_json::to_string(&customer).unwrap();
        let parsed: Customer = serde_json::from_str(&json).unwrap();

        assert_eq!(customer, parsed);
    }
}
