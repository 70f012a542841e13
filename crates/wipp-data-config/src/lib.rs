// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Configuration for the WIPP data authorization tooling.
//!
//! This crate provides:
//! - Layered configuration from multiple sources (defaults, TOML file, environment)
//! - Consistent environment variable naming (`WIPP_DATA_*`)
//!
//! # Usage
//!
//! ```ignore
//! use wipp_data_config::load_config;
//!
//! let config = load_config()?;
//! println!("log level {}", config.logging.level);
//! ```

pub mod error;
pub mod layer;
pub mod sections;
pub mod sources;

pub use error::ConfigError;
pub use layer::DataConfigLayer;
pub use sections::*;
pub use sources::{
	ConfigSource, DefaultsSource, EnvSource, Precedence, TomlSource, SYSTEM_CONFIG_PATH,
};

use tracing::{debug, info};

/// Fully resolved configuration.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DataConfig {
	pub logging: LoggingConfig,
	pub catalog: CatalogConfig,
}

/// Load configuration from all sources with standard precedence.
///
/// Precedence (highest to lowest):
/// 1. Environment variables (`WIPP_DATA_*`)
/// 2. Config file (`/etc/wipp/data.toml`)
/// 3. Built-in defaults
pub fn load_config() -> Result<DataConfig, ConfigError> {
	let sources: Vec<Box<dyn ConfigSource>> = vec![
		Box::new(DefaultsSource),
		Box::new(TomlSource::system()),
		Box::new(EnvSource),
	];
	load_from_sources(sources)
}

/// Load configuration from environment only.
pub fn load_config_from_env() -> Result<DataConfig, ConfigError> {
	let mut merged = DataConfigLayer::default();
	merged.merge(EnvSource.load()?);
	Ok(finalize(merged))
}

/// Load configuration with a custom config file path.
pub fn load_config_with_file(
	config_path: impl Into<std::path::PathBuf>,
) -> Result<DataConfig, ConfigError> {
	let sources: Vec<Box<dyn ConfigSource>> = vec![
		Box::new(DefaultsSource),
		Box::new(TomlSource::new(config_path)),
		Box::new(EnvSource),
	];
	load_from_sources(sources)
}

/// Merge the given sources in precedence order and finalize the result.
pub fn load_from_sources(mut sources: Vec<Box<dyn ConfigSource>>) -> Result<DataConfig, ConfigError> {
	sources.sort_by_key(|s| s.precedence());

	let mut merged = DataConfigLayer::default();
	for source in sources {
		debug!(source = source.name(), "loading configuration source");
		let layer = source.load()?;
		merged.merge(layer);
	}

	Ok(finalize(merged))
}

fn finalize(layer: DataConfigLayer) -> DataConfig {
	let logging = layer.logging.unwrap_or_default().finalize();
	let catalog = layer.catalog.unwrap_or_default().finalize();

	info!(
		log_level = %logging.level,
		log_format = %logging.format,
		catalog_configured = catalog.path.is_some(),
		"Configuration loaded"
	);

	DataConfig { logging, catalog }
}
