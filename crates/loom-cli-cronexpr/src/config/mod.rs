// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Layered configuration for `loom-cronexpr`.
//!
//! Precedence (highest to lowest):
//! 1. Command-line flags
//! 2. Environment variables (`LOOM_CRONEXPR_*`)
//! 3. Config file (`--config`, else `~/.config/loom/cronexpr.toml`)
//! 4. Built-in defaults

pub mod error;
pub mod sections;
pub mod sources;

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

pub use error::ConfigError;
pub use sections::{
	LoggingConfig, LoggingConfigLayer, OutputConfig, OutputConfigLayer, OutputFormat,
	ScheduleConfig, ScheduleConfigLayer,
};
pub use sources::{
	CliOverrides, CliSource, ConfigSource, DefaultsSource, EnvSource, Precedence, TomlSource,
};

/// Fully resolved configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CronexprConfig {
	pub output: OutputConfig,
	pub schedule: ScheduleConfig,
	pub logging: LoggingConfig,
}

/// One source's contribution; `None` sections leave lower layers untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CronexprConfigLayer {
	pub output: Option<OutputConfigLayer>,
	pub schedule: Option<ScheduleConfigLayer>,
	pub logging: Option<LoggingConfigLayer>,
}

impl CronexprConfigLayer {
	pub fn merge(&mut self, other: Self) {
		if let Some(output) = other.output {
			self.output.get_or_insert_with(Default::default).merge(output);
		}
		if let Some(schedule) = other.schedule {
			self
				.schedule
				.get_or_insert_with(Default::default)
				.merge(schedule);
		}
		if let Some(logging) = other.logging {
			self.logging.get_or_insert_with(Default::default).merge(logging);
		}
	}

	pub fn finalize(self) -> CronexprConfig {
		CronexprConfig {
			output: self.output.unwrap_or_default().finalize(),
			schedule: self.schedule.unwrap_or_default().finalize(),
			logging: self.logging.unwrap_or_default().finalize(),
		}
	}
}

/// Load configuration from all sources.
///
/// `config_path` replaces the user config file and must exist when given.
pub fn load_config(
	config_path: Option<&Path>,
	cli: CliOverrides,
) -> Result<CronexprConfig, ConfigError> {
	let file_source = match config_path {
		Some(path) => Some(TomlSource::required(path)),
		None => match TomlSource::user() {
			Ok(source) => Some(source),
			Err(e) => {
				debug!(error = %e, "no user config location, skipping config file");
				None
			}
		},
	};

	let mut sources: Vec<Box<dyn ConfigSource>> = vec![Box::new(DefaultsSource)];
	if let Some(source) = file_source {
		sources.push(Box::new(source));
	}
	sources.push(Box::new(EnvSource));
	sources.push(Box::new(CliSource::new(cli)));

	load_from_sources(sources)
}

fn load_from_sources(
	mut sources: Vec<Box<dyn ConfigSource>>,
) -> Result<CronexprConfig, ConfigError> {
	sources.sort_by_key(|s| s.precedence());

	let mut merged = CronexprConfigLayer::default();
	for source in sources {
		debug!(source = source.name(), "loading configuration source");
		merged.merge(source.load()?);
	}

	Ok(merged.finalize())
}
