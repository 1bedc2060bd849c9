// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Range fields: `start-end`, including ranges that wrap past the upper bound.

use crate::error::ExpandError;
use crate::field::FieldSpec;

/// Expand `start-end` into every value between the endpoints, inclusive.
///
/// When `start > end` the range wraps: it runs from `start` up to the field's
/// upper bound and continues from the lower bound to `end`. For day of week,
/// `5-1` expands to `5 6 7 0 1`.
pub fn expand_range(spec: &FieldSpec, field: &str) -> Result<Vec<String>, ExpandError> {
	let parts: Vec<&str> = field.split('-').collect();
	let [start, end] = parts[..] else {
		return Err(ExpandError::MalformedRange {
			field: field.to_string(),
		});
	};

	let start = parse_endpoint(field, start)?;
	let end = parse_endpoint(field, end)?;

	if !spec.contains(start) || !spec.contains(end) {
		return Err(ExpandError::RangeOutOfBounds {
			field: field.to_string(),
			lower: spec.lower,
			upper: spec.upper,
		});
	}

	let values: Vec<u32> = if start <= end {
		(start..=end).collect()
	} else {
		(start..=spec.upper).chain(spec.lower..=end).collect()
	};

	Ok(values.into_iter().map(|value| value.to_string()).collect())
}

fn parse_endpoint(field: &str, endpoint: &str) -> Result<u32, ExpandError> {
	endpoint
		.parse()
		.map_err(|reason| ExpandError::InvalidRangeEndpoint {
			field: field.to_string(),
			reason,
		})
}
