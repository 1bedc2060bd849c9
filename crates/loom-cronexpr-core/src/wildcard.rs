// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Wildcard fields: `*` and `*/step`.

use crate::error::ExpandError;
use crate::field::FieldSpec;

/// Expand `*` or `*/step` over the field bounds.
///
/// Values start at the field's lower bound, so `*/2` over `[1, 31]` yields
/// the odd days.
pub fn expand_wildcard(spec: &FieldSpec, field: &str) -> Result<Vec<String>, ExpandError> {
	let parts: Vec<&str> = field.split('/').collect();
	if parts[0] != "*" || parts.len() > 2 {
		return Err(ExpandError::MalformedWildcard {
			field: field.to_string(),
		});
	}

	let step = match parts.get(1) {
		Some(step) => step.parse::<u32>().map_err(|reason| ExpandError::InvalidStep {
			field: field.to_string(),
			reason,
		})?,
		None => 1,
	};

	if step < 1 || step > spec.upper {
		return Err(ExpandError::StepOutOfRange {
			field: field.to_string(),
			step,
			upper: spec.upper,
		});
	}

	Ok((spec.lower..=spec.upper)
		.step_by(step as usize)
		.map(|value| value.to_string())
		.collect())
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::field::FieldKind;
	use proptest::prelude::*;

	fn spec(lower: u32, upper: u32) -> FieldSpec {
		FieldSpec::new(FieldKind::Minute, lower, upper)
	}

	#[test]
	fn test_every_fifteen_minutes() {
		let values = expand_wildcard(&spec(0, 59), "*/15").unwrap();
		assert_eq!(values, vec!["0", "15", "30", "45"]);
	}

	#[test]
	fn test_bare_star_covers_bounds() {
		let values = expand_wildcard(&spec(0, 59), "*").unwrap();
		assert_eq!(values.len(), 60);
		assert_eq!(values.first().map(String::as_str), Some("0"));
		assert_eq!(values.last().map(String::as_str), Some("59"));
	}

	#[test]
	fn test_step_starts_at_lower_bound() {
		let values = expand_wildcard(&spec(1, 12), "*/5").unwrap();
		assert_eq!(values, vec!["1", "6", "11"]);
	}

	#[test]
	fn test_step_of_two_hours() {
		let values = expand_wildcard(&spec(0, 23), "*/2").unwrap();
		assert_eq!(
			values,
			vec!["0", "2", "4", "6", "8", "10", "12", "14", "16", "18", "20", "22"]
		);
	}

	#[test]
	fn test_step_equal_to_upper_bound() {
		assert_eq!(expand_wildcard(&spec(0, 59), "*/59").unwrap(), vec!["0", "59"]);
		assert_eq!(expand_wildcard(&spec(1, 12), "*/12").unwrap(), vec!["1"]);
	}

	#[test]
	fn test_step_above_upper_bound_is_rejected() {
		let err = expand_wildcard(&spec(0, 59), "*/60").unwrap_err();
		assert!(matches!(err, ExpandError::StepOutOfRange { step: 60, upper: 59, .. }));
	}

	#[test]
	fn test_zero_step_is_rejected() {
		let err = expand_wildcard(&spec(0, 59), "*/0").unwrap_err();
		assert!(matches!(err, ExpandError::StepOutOfRange { step: 0, .. }));
	}

	#[test]
	fn test_non_numeric_step() {
		let err = expand_wildcard(&spec(0, 59), "*/invalid").unwrap_err();
		assert!(matches!(err, ExpandError::InvalidStep { ref field, .. } if field == "*/invalid"));
	}

	#[test]
	fn test_malformed_wildcards() {
		for field in ["**", "*/1/2", "1*", "*5", "1-*"] {
			let err = expand_wildcard(&spec(0, 59), field).unwrap_err();
			assert!(
				matches!(err, ExpandError::MalformedWildcard { .. }),
				"expected malformed wildcard for {field}, got {err:?}"
			);
		}
	}

	proptest! {
		#[test]
		fn wildcard_step_matches_arithmetic_sequence(
			lower in 0u32..40,
			width in 0u32..60,
			step_seed in 1u32..200,
		) {
			let upper = lower + width;
			prop_assume!(upper >= 1);
			let step = 1 + step_seed % upper;
			let values = expand_wildcard(&spec(lower, upper), &format!("*/{step}")).unwrap();

			prop_assert_eq!(values.len() as u32, (upper - lower) / step + 1);
			for (i, value) in values.iter().enumerate() {
				prop_assert_eq!(value.clone(), (lower + i as u32 * step).to_string());
			}
		}

		#[test]
		fn wildcard_expansion_is_idempotent(step in 1u32..=59) {
			let field = format!("*/{step}");
			let first = expand_wildcard(&spec(0, 59), &field).unwrap();
			let second = expand_wildcard(&spec(0, 59), &field).unwrap();
			prop_assert_eq!(first, second);
		}
	}
}
