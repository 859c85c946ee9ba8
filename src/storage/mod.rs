//! Storage module for configuration and seed data.

pub mod config;
pub mod seed;

pub use config::{AppConfig, ConfigError, SeedSettings, Theme, UiSettings};
pub use seed::{load_seed, SeedData, SeedError, SeedResult};
