// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Rendering an expanded expression for stdout.

use loom_cronexpr_core::CronExpression;

use crate::config::{OutputConfig, OutputFormat};

/// Render the whole expression up front so nothing is printed on failure.
pub fn render(expr: &CronExpression, config: &OutputConfig) -> Result<String, serde_json::Error> {
	match config.format {
		OutputFormat::Text => Ok(expr.to_table(config.name_width)),
		OutputFormat::Json => {
			let mut json = serde_json::to_string_pretty(expr)?;
			json.push('\n');
			Ok(json)
		}
	}
}
