// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Configuration sections: output, schedule, logging.

use std::fmt;
use std::str::FromStr;

use loom_cronexpr_core::{current_year, DEFAULT_NAME_WIDTH};
use serde::{Deserialize, Serialize};

/// How the expanded table is written to stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
	#[default]
	Text,
	Json,
}

impl fmt::Display for OutputFormat {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			OutputFormat::Text => write!(f, "text"),
			OutputFormat::Json => write!(f, "json"),
		}
	}
}

impl FromStr for OutputFormat {
	type Err = String;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.to_lowercase().as_str() {
			"text" => Ok(OutputFormat::Text),
			"json" => Ok(OutputFormat::Json),
			other => Err(format!("unknown output format '{other}', expected 'text' or 'json'")),
		}
	}
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct OutputConfigLayer {
	pub format: Option<OutputFormat>,
	pub name_width: Option<usize>,
}

impl OutputConfigLayer {
	pub fn merge(&mut self, other: Self) {
		if other.format.is_some() {
			self.format = other.format;
		}
		if other.name_width.is_some() {
			self.name_width = other.name_width;
		}
	}

	pub fn finalize(self) -> OutputConfig {
		OutputConfig {
			format: self.format.unwrap_or_default(),
			name_width: self.name_width.unwrap_or(DEFAULT_NAME_WIDTH),
		}
	}
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputConfig {
	pub format: OutputFormat,
	pub name_width: usize,
}

impl Default for OutputConfig {
	fn default() -> Self {
		OutputConfigLayer::default().finalize()
	}
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ScheduleConfigLayer {
	/// First year accepted by the year field. Defaults to the current year.
	pub reference_year: Option<u32>,
}

impl ScheduleConfigLayer {
	pub fn merge(&mut self, other: Self) {
		if other.reference_year.is_some() {
			self.reference_year = other.reference_year;
		}
	}

	pub fn finalize(self) -> ScheduleConfig {
		ScheduleConfig {
			reference_year: self.reference_year.unwrap_or_else(current_year),
		}
	}
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleConfig {
	pub reference_year: u32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct LoggingConfigLayer {
	pub level: Option<String>,
}

impl LoggingConfigLayer {
	pub fn merge(&mut self, other: Self) {
		if other.level.is_some() {
			self.level = other.level;
		}
	}

	pub fn finalize(self) -> LoggingConfig {
		LoggingConfig {
			level: self.level.unwrap_or_else(|| "warn".to_string()),
		}
	}
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
	pub level: String,
}
