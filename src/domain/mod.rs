//! Domain models and types for Caravan.
//!
//! This module contains the core domain models, error types, and the
//! crate-wide [`Result`] alias.
//!
//! # Error Handling
//!
//! All fallible operations return [`Result<T, CaravanError>`]; specific
//! failure families live in [`SourceError`] and [`StoreError`] and are
//! converted with `?` via `#[from]` conversions.

pub mod customer;
pub mod errors;
pub mod result;

// Re-export commonly used types for convenience
pub use customer::Customer;
pub use errors::{CaravanError, SourceError, StoreError};
pub use result::Result;
