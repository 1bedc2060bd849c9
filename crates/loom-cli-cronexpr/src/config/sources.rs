// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Configuration sources: defaults, TOML file, environment, command line.

use std::path::PathBuf;

use tracing::{debug, trace};

use super::error::ConfigError;
use super::sections::{LoggingConfigLayer, OutputConfigLayer, OutputFormat, ScheduleConfigLayer};
use super::CronexprConfigLayer;

/// Source precedence levels (higher = overrides lower).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Precedence {
	Defaults = 10,
	ConfigFile = 20,
	Environment = 50,
	Cli = 60,
}

/// Trait for configuration sources.
pub trait ConfigSource {
	fn name(&self) -> &'static str;
	fn precedence(&self) -> Precedence;
	fn load(&self) -> Result<CronexprConfigLayer, ConfigError>;
}

/// Built-in defaults source.
pub struct DefaultsSource;

impl ConfigSource for DefaultsSource {
	fn name(&self) -> &'static str {
		"defaults"
	}

	fn precedence(&self) -> Precedence {
		Precedence::Defaults
	}

	fn load(&self) -> Result<CronexprConfigLayer, ConfigError> {
		debug!("loading defaults");
		Ok(CronexprConfigLayer::default())
	}
}

/// TOML file configuration source.
pub struct TomlSource {
	path: PathBuf,
	required: bool,
}

impl TomlSource {
	/// A config file that is skipped when absent.
	pub fn new(path: impl Into<PathBuf>) -> Self {
		Self {
			path: path.into(),
			required: false,
		}
	}

	/// A config file named explicitly by the user; it must exist.
	pub fn required(path: impl Into<PathBuf>) -> Self {
		Self {
			path: path.into(),
			required: true,
		}
	}

	/// `$XDG_CONFIG_HOME/loom/cronexpr.toml`, falling back to `~/.config`.
	pub fn user() -> Result<Self, ConfigError> {
		let config_home = match std::env::var_os("XDG_CONFIG_HOME").filter(|v| !v.is_empty()) {
			Some(dir) => PathBuf::from(dir),
			None => dirs::home_dir()
				.ok_or(ConfigError::HomeDirNotFound)?
				.join(".config"),
		};
		Ok(Self::new(config_home.join("loom/cronexpr.toml")))
	}
}

impl ConfigSource for TomlSource {
	fn name(&self) -> &'static str {
		"toml-config"
	}

	fn precedence(&self) -> Precedence {
		Precedence::ConfigFile
	}

	fn load(&self) -> Result<CronexprConfigLayer, ConfigError> {
		if !self.required && !self.path.exists() {
			debug!(path = %self.path.display(), "config file not found, skipping");
			return Ok(CronexprConfigLayer::default());
		}

		debug!(path = %self.path.display(), "loading config file");
		let content = std::fs::read_to_string(&self.path).map_err(|e| ConfigError::FileRead {
			path: self.path.clone(),
			source: e,
		})?;

		let layer: CronexprConfigLayer =
			toml::from_str(&content).map_err(|e| ConfigError::TomlParse {
				path: self.path.clone(),
				source: e,
			})?;

		trace!("parsed config layer from TOML");
		Ok(layer)
	}
}

/// Environment variable source.
///
/// Convention: LOOM_CRONEXPR_<FIELD>
pub struct EnvSource;

impl ConfigSource for EnvSource {
	fn name(&self) -> &'static str {
		"environment"
	}

	fn precedence(&self) -> Precedence {
		Precedence::Environment
	}

	fn load(&self) -> Result<CronexprConfigLayer, ConfigError> {
		debug!("loading environment variables");
		layer_from_env(|name| std::env::var(name).ok())
	}
}

fn layer_from_env(
	lookup: impl Fn(&str) -> Option<String>,
) -> Result<CronexprConfigLayer, ConfigError> {
	let var = |name: &str| lookup(name).filter(|s| !s.is_empty());

	let format = match var("LOOM_CRONEXPR_FORMAT") {
		Some(v) => Some(
			v.parse::<OutputFormat>()
				.map_err(|message| ConfigError::invalid_value("LOOM_CRONEXPR_FORMAT", message))?,
		),
		None => None,
	};

	Ok(CronexprConfigLayer {
		output: Some(OutputConfigLayer {
			format,
			name_width: parse_var(&var, "LOOM_CRONEXPR_NAME_WIDTH")?,
		}),
		schedule: Some(ScheduleConfigLayer {
			reference_year: parse_var(&var, "LOOM_CRONEXPR_REFERENCE_YEAR")?,
		}),
		logging: Some(LoggingConfigLayer {
			level: var("LOOM_CRONEXPR_LOG_LEVEL"),
		}),
	})
}

fn parse_var<T: std::str::FromStr>(
	var: &impl Fn(&str) -> Option<String>,
	name: &str,
) -> Result<Option<T>, ConfigError> {
	match var(name) {
		Some(v) => v
			.parse()
			.map(Some)
			.map_err(|_| ConfigError::invalid_value(name, format!("invalid number '{v}'"))),
		None => Ok(None),
	}
}

/// Overrides collected from command-line flags.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
	pub format: Option<OutputFormat>,
	pub name_width: Option<usize>,
	pub reference_year: Option<u32>,
	pub log_level: Option<String>,
}

/// Command-line source; always wins.
pub struct CliSource {
	overrides: CliOverrides,
}

impl CliSource {
	pub fn new(overrides: CliOverrides) -> Self {
		Self { overrides }
	}
}

impl ConfigSource for CliSource {
	fn name(&self) -> &'static str {
		"cli"
	}

	fn precedence(&self) -> Precedence {
		Precedence::Cli
	}

	fn load(&self) -> Result<CronexprConfigLayer, ConfigError> {
		let cli = self.overrides.clone();
		Ok(CronexprConfigLayer {
			output: Some(OutputConfigLayer {
				format: cli.format,
				name_width: cli.name_width,
			}),
			schedule: Some(ScheduleConfigLayer {
				reference_year: cli.reference_year,
			}),
			logging: Some(LoggingConfigLayer {
				level: cli.log_level,
			}),
		})
	}
}
