//! External integrations for Caravan.
//!
//! - [`source`] - record readers (local CSV file, S3 object)
//! - [`sink`] - batch writers (single-store, dual-store) and the store trait
//! - [`postgres`] - PostgreSQL store implementation
//! - [`factory`] - mode-keyed construction of the active reader/writer pair
//!
//! Adapters isolate external dependencies behind traits so the core engine
//! can be exercised with in-memory fakes.

pub mod factory;
pub mod postgres;
pub mod sink;
pub mod source;

pub use factory::{build_pairing, ResolvedPairing};
