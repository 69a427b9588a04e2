//! Per-record normalization
//!
//! The transform step capitalizes name fields before records are handed to a
//! sink writer. It is a pure function with no failure modes, and it is
//! idempotent: applying it twice yields the same record as applying it once.

use crate::domain::Customer;

/// Normalize one customer record.
///
/// First and last names are capitalized; the email address passes through
/// untouched.
pub fn transform(customer: Customer) -> Customer {
    Customer {
        first_name: capitalize(&customer.first_name),
        last_name: capitalize(&customer.last_name),
        email: customer.email,
    }
}

/// Capitalize a name: first character upper-cased, remainder lower-cased.
/// Blank input is returned unchanged.
fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => {
            let mut out = String::with_capacity(s.len());
            out.extend(first.to_uppercase());
            out.extend(chars.flat_map(|c| c.to_lowercase()));
            out
        }
    }
}
