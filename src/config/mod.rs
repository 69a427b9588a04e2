//! Configuration management
//!
//! Caravan is configured through a TOML file (default `caravan.toml`) with
//! `${VAR}` environment substitution and a couple of `CARAVAN_*` overrides.
//! See [`schema::CaravanConfig`] for the full shape.

pub mod loader;
pub mod schema;

pub use loader::load_config;
pub use schema::{
    BatchSettings, CaravanConfig, LoggingConfig, Mode, S3SourceConfig, SourceConfig, StoreConfig,
    StoresConfig,
};
