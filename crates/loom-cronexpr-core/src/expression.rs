// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Whole-expression expansion: the five required fields, the optional year,
//! and the trailing command.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::debug;

use crate::error::{CronExprError, Result};
use crate::field::{current_year, FieldKind, FieldSpec, MAX_REFERENCE_YEAR};
use crate::rule::{expand_field, FieldOutcome};

/// Minimum token count: five time fields plus at least one command token.
pub const MIN_TOKENS: usize = 6;

/// One field of an expression and the values it expands to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpandedField {
	#[serde(rename = "field")]
	pub kind: FieldKind,
	pub values: Vec<String>,
}

impl ExpandedField {
	pub fn name(&self) -> &'static str {
		self.kind.name()
	}
}

/// A fully expanded cron expression.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CronExpression {
	/// Expanded fields in expression order. The year is present only when
	/// the expression supplied one.
	pub fields: Vec<ExpandedField>,
	pub command: String,
}

impl CronExpression {
	/// Expand `input` with year bounds anchored at `reference_year`.
	///
	/// Tokens are split on whitespace. The sixth token is read as a year only
	/// if it expands cleanly and at least one token follows it; otherwise it
	/// starts the command.
	pub fn parse(input: &str, reference_year: u32) -> Result<Self> {
		if reference_year > MAX_REFERENCE_YEAR {
			return Err(CronExprError::ReferenceYearTooLarge {
				year: reference_year,
				max: MAX_REFERENCE_YEAR,
			});
		}

		let tokens: Vec<&str> = input.split_whitespace().collect();
		if tokens.is_empty() {
			return Err(CronExprError::MissingArguments);
		}
		if tokens.len() < MIN_TOKENS {
			return Err(CronExprError::InsufficientFields {
				expected: MIN_TOKENS,
				got: tokens.len(),
			});
		}

		let mut fields = Vec::with_capacity(FieldKind::REQUIRED.len() + 1);
		for (kind, raw) in FieldKind::REQUIRED.into_iter().zip(&tokens) {
			let spec = FieldSpec::for_kind(kind, reference_year);
			let values = match expand_field(&spec, raw) {
				FieldOutcome::Expanded(values) => values,
				FieldOutcome::NotOk => {
					return Err(CronExprError::InvalidValue {
						field: spec.name(),
						value: raw.to_string(),
					})
				}
				FieldOutcome::Failed(err) => return Err(err),
			};
			fields.push(ExpandedField { kind, values });
		}

		let mut command_start = FieldKind::REQUIRED.len();
		if let Some(year) = probe_year(&tokens, reference_year) {
			fields.push(year);
			command_start += 1;
		}

		Ok(Self {
			fields,
			command: tokens[command_start..].join(" "),
		})
	}

	pub fn field(&self, kind: FieldKind) -> Option<&ExpandedField> {
		self.fields.iter().find(|field| field.kind == kind)
	}

	pub fn year(&self) -> Option<&ExpandedField> {
		self.field(FieldKind::Year)
	}
}

impl FromStr for CronExpression {
	type Err = CronExprError;

	fn from_str(s: &str) -> Result<Self> {
		Self::parse(s, current_year())
	}
}

fn probe_year(tokens: &[&str], reference_year: u32) -> Option<ExpandedField> {
	let index = FieldKind::REQUIRED.len();
	// A lone sixth token is always the command, even when it reads as a year.
	if tokens.len() <= index + 1 {
		return None;
	}

	let raw = tokens[index];
	let spec = FieldSpec::for_kind(FieldKind::Year, reference_year);
	match expand_field(&spec, raw) {
		FieldOutcome::Expanded(values) => Some(ExpandedField {
			kind: FieldKind::Year,
			values,
		}),
		FieldOutcome::NotOk => {
			debug!(raw, "sixth token is not a year, treating it as the command");
			None
		}
		FieldOutcome::Failed(err) => {
			debug!(
				raw,
				error = %err,
				out_of_bounds = err.is_out_of_bounds(),
				"sixth token failed year validation, treating it as the command"
			);
			None
		}
	}
}
