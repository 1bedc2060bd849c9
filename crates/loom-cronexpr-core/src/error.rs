// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Error types for cron expression expansion.

use std::num::ParseIntError;

use thiserror::Error;

/// Result type for cron expression operations.
pub type Result<T> = std::result::Result<T, CronExprError>;

/// Errors raised by a single syntax rule while expanding one field.
///
/// Every variant carries the raw field so the message can point at the
/// offending token without the caller having to re-attach it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExpandError {
	#[error("incorrect cron time field: '{field}'")]
	MalformedWildcard { field: String },

	#[error("invalid step in cron time field '{field}': {reason}")]
	InvalidStep {
		field: String,
		reason: ParseIntError,
	},

	#[error("incorrect cron time field: '{field}', step {step} must be within [1, {upper}]")]
	StepOutOfRange { field: String, step: u32, upper: u32 },

	#[error("incorrect cron time range field: '{field}'")]
	MalformedRange { field: String },

	#[error("invalid endpoint in cron time range field '{field}': {reason}")]
	InvalidRangeEndpoint {
		field: String,
		reason: ParseIntError,
	},

	#[error(
		"cron time range exceeds limit for this time type, field: '{field}', \
		 minStartRange: {lower}, maxEndRange: {upper}"
	)]
	RangeOutOfBounds {
		field: String,
		lower: u32,
		upper: u32,
	},

	#[error("invalid list value '{value}' in field '{field}': {reason}")]
	InvalidListValue {
		value: String,
		field: String,
		reason: ParseIntError,
	},

	#[error("list value {value} outside expected range [{lower}, {upper}], field: '{field}'")]
	ListValueOutOfBounds {
		value: String,
		lower: u32,
		upper: u32,
		field: String,
	},
}

impl ExpandError {
	/// Whether the failure is a bounds violation rather than malformed syntax.
	pub fn is_out_of_bounds(&self) -> bool {
		matches!(
			self,
			Self::RangeOutOfBounds { .. } | Self::ListValueOutOfBounds { .. }
		)
	}
}

/// Errors that abort expansion of a whole cron expression.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CronExprError {
	#[error("missing arguments")]
	MissingArguments,

	#[error(
		"insufficient args provided for the cron command. Expected at least {expected}, got: {got}"
	)]
	InsufficientFields { expected: usize, got: usize },

	#[error("{field} field parsing failed: {error}")]
	Field {
		field: &'static str,
		error: ExpandError,
	},

	#[error(
		"{field} field parsing failed: value {value} outside expected range [{lower}, {upper}]"
	)]
	OutOfRange {
		field: &'static str,
		value: String,
		lower: u32,
		upper: u32,
	},

	#[error("{field} field parsing validation failed, value: {value}")]
	InvalidValue { field: &'static str, value: String },

	#[error("reference year {year} is too large, expected at most {max}")]
	ReferenceYearTooLarge { year: u32, max: u32 },
}

impl CronExprError {
	/// Whether a field failed on its bounds rather than on its syntax.
	pub fn is_out_of_bounds(&self) -> bool {
		match self {
			Self::Field { error, .. } => error.is_out_of_bounds(),
			Self::OutOfRange { .. } => true,
			_ => false,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn parse_error(s: &str) -> ParseIntError {
		s.parse::<u32>().unwrap_err()
	}

	#[test]
	fn test_out_of_range_message_names_field_value_and_bounds() {
		let err = CronExprError::OutOfRange {
			field: "hour",
			value: "24".to_string(),
			lower: 0,
			upper: 23,
		};
		assert_eq!(
			err.to_string(),
			"hour field parsing failed: value 24 outside expected range [0, 23]"
		);
	}

	#[test]
	fn test_field_error_includes_rule_message() {
		let err = CronExprError::Field {
			field: "minute",
			error: ExpandError::MalformedWildcard {
				field: "*/1/2".to_string(),
			},
		};
		assert_eq!(
			err.to_string(),
			"minute field parsing failed: incorrect cron time field: '*/1/2'"
		);
	}

	#[test]
	fn test_parse_failures_include_reason() {
		let err = ExpandError::InvalidStep {
			field: "*/x".to_string(),
			reason: parse_error("x"),
		};
		assert_eq!(
			err.to_string(),
			"invalid step in cron time field '*/x': invalid digit found in string"
		);
	}

	#[test]
	fn test_is_out_of_bounds() {
		assert!(ExpandError::RangeOutOfBounds {
			field: "30-60".to_string(),
			lower: 0,
			upper: 59,
		}
		.is_out_of_bounds());
		assert!(!ExpandError::MalformedRange {
			field: "1-2-3".to_string(),
		}
		.is_out_of_bounds());
	}

	#[test]
	fn test_expression_error_is_out_of_bounds() {
		assert!(CronExprError::OutOfRange {
			field: "year",
			value: "1999".to_string(),
			lower: 2026,
			upper: 2046,
		}
		.is_out_of_bounds());
		assert!(CronExprError::Field {
			field: "year",
			error: ExpandError::ListValueOutOfBounds {
				value: "1999".to_string(),
				lower: 2026,
				upper: 2046,
				field: "1999,2030".to_string(),
			},
		}
		.is_out_of_bounds());
		assert!(!CronExprError::Field {
			field: "year",
			error: ExpandError::MalformedWildcard {
				field: "*/1/2".to_string(),
			},
		}
		.is_out_of_bounds());
		assert!(!CronExprError::MissingArguments.is_out_of_bounds());
	}

	#[test]
	fn test_reference_year_too_large_message() {
		let err = CronExprError::ReferenceYearTooLarge {
			year: u32::MAX,
			max: u32::MAX - 20,
		};
		assert_eq!(
			err.to_string(),
			"reference year 4294967295 is too large, expected at most 4294967275"
		);
	}
}
