// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! `loom-cronexpr`: print the values each field of a cron expression expands to.

mod config;
mod output;

use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use loom_cronexpr_core::CronExpression;
use tracing_subscriber::EnvFilter;

use config::{CliOverrides, OutputFormat};

const USAGE: &str = "Usage: loom-cronexpr '*/15 0 1,15 * 1-5 /usr/bin/find'";

/// Expand a cron expression into the explicit values of every field.
#[derive(Parser, Debug)]
#[command(
	name = "loom-cronexpr",
	about = "Expand a cron expression into the values each field matches",
	version,
	after_help = USAGE
)]
struct Args {
	/// Cron expression: `minute hour day-of-month month day-of-week [year] command`.
	/// Either one quoted argument or several arguments joined with spaces.
	#[arg(trailing_var_arg = true, allow_hyphen_values = true)]
	expression: Vec<String>,

	/// Output format
	#[arg(long, value_enum)]
	format: Option<OutputFormat>,

	/// Column width the field names are padded to
	#[arg(long)]
	name_width: Option<usize>,

	/// First year accepted by the year field (defaults to the current year)
	#[arg(long)]
	reference_year: Option<u32>,

	/// Log level filter, overridden by RUST_LOG
	#[arg(long)]
	log_level: Option<String>,

	/// Config file to use instead of ~/.config/loom/cronexpr.toml
	#[arg(long, env = "LOOM_CRONEXPR_CONFIG")]
	config: Option<PathBuf>,
}

impl Args {
	fn cli_overrides(&self) -> CliOverrides {
		CliOverrides {
			format: self.format,
			name_width: self.name_width,
			reference_year: self.reference_year,
			log_level: self.log_level.clone(),
		}
	}
}

fn main() -> ExitCode {
	let args = Args::parse();

	match run(&args) {
		Ok(()) => ExitCode::SUCCESS,
		Err(err) => {
			eprintln!("loom-cronexpr: {err:#}");
			eprintln!("{USAGE}");
			ExitCode::FAILURE
		}
	}
}

fn run(args: &Args) -> anyhow::Result<()> {
	let config = config::load_config(args.config.as_deref(), args.cli_overrides())
		.context("failed to load configuration")?;

	tracing_subscriber::fmt()
		.with_env_filter(
			EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level)),
		)
		.with_writer(std::io::stderr)
		.init();

	let input = args.expression.join(" ");
	tracing::debug!(
		input = %input,
		reference_year = config.schedule.reference_year,
		format = %config.output.format,
		"expanding cron expression"
	);

	let expr = CronExpression::parse(&input, config.schedule.reference_year)?;
	let rendered = output::render(&expr, &config.output).context("failed to render output")?;

	let mut stdout = std::io::stdout().lock();
	stdout
		.write_all(rendered.as_bytes())
		.and_then(|()| stdout.flush())
		.context("failed to write output")?;

	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;
	use clap::CommandFactory;

	#[test]
	fn test_args_are_well_formed() {
		Args::command().debug_assert();
	}

	#[test]
	fn test_single_quoted_expression() {
		let args = Args::parse_from(["loom-cronexpr", "*/15 0 1,15 * 1-5 /usr/bin/find"]);
		assert_eq!(args.expression.join(" "), "*/15 0 1,15 * 1-5 /usr/bin/find");
	}

	#[test]
	fn test_flags_before_split_expression() {
		let args = Args::parse_from([
			"loom-cronexpr",
			"--format",
			"json",
			"--reference-year",
			"2030",
			"0",
			"0",
			"*",
			"*",
			"*",
			"/usr/bin/backup",
			"--full",
		]);
		assert_eq!(args.format, Some(OutputFormat::Json));
		assert_eq!(args.cli_overrides().reference_year, Some(2030));
		assert_eq!(args.expression.join(" "), "0 0 * * * /usr/bin/backup --full");
	}
}
