//! Configuration handling

pub mod config;

pub use config::{ConfigError, ConfigurationManager, EarthModel, NavigatorConfig};
