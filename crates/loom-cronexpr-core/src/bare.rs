// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Fallback for fields that carry no rule marker: a single literal integer.

use crate::error::CronExprError;
use crate::field::FieldSpec;
use crate::rule::FieldOutcome;

/// Parse `field` as one integer and check it against the bounds.
///
/// A token that is not a number at all is [`FieldOutcome::NotOk`]; a number
/// outside the bounds is a reported [`CronExprError::OutOfRange`]. The token
/// is kept as written.
pub fn expand_bare_integer(spec: &FieldSpec, field: &str) -> FieldOutcome {
	let Ok(value) = field.parse::<u32>() else {
		return FieldOutcome::NotOk;
	};

	if !spec.contains(value) {
		return FieldOutcome::Failed(CronExprError::OutOfRange {
			field: spec.name(),
			value: field.to_string(),
			lower: spec.lower,
			upper: spec.upper,
		});
	}

	FieldOutcome::Expanded(vec![field.to_string()])
}
