// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! List fields: `v1,v2,...`.

use crate::error::ExpandError;
use crate::field::FieldSpec;

/// Expand a comma-separated list, keeping the tokens exactly as written.
///
/// Order and duplicates are preserved; each token only has to parse and fall
/// inside the field bounds.
pub fn expand_list(spec: &FieldSpec, field: &str) -> Result<Vec<String>, ExpandError> {
	field
		.split(',')
		.map(|token| {
			let value: u32 = token.parse().map_err(|reason| ExpandError::InvalidListValue {
				value: token.to_string(),
				field: field.to_string(),
				reason,
			})?;

			if !spec.contains(value) {
				return Err(ExpandError::ListValueOutOfBounds {
					value: token.to_string(),
					lower: spec.lower,
					upper: spec.upper,
					field: field.to_string(),
				});
			}

			Ok(token.to_string())
		})
		.collect()
}
