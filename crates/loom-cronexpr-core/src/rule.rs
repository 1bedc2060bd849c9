// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Syntax rule selection and dispatch for a single field.
//!
//! A raw field is matched against [`SyntaxRule::PRIORITY`] in order and the
//! first rule whose detector fires expands it. A field that no rule claims is
//! treated as a bare integer.

use tracing::debug;

use crate::bare::expand_bare_integer;
use crate::error::{CronExprError, ExpandError};
use crate::field::FieldSpec;
use crate::list::expand_list;
use crate::range::expand_range;
use crate::wildcard::expand_wildcard;

/// Field syntax recognised by a marker character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SyntaxRule {
	/// `*` or `*/step`
	Wildcard,
	/// `start-end`
	Range,
	/// `v1,v2,...`
	List,
}

impl SyntaxRule {
	/// Detection order. `*-1` is a (malformed) wildcard, never a range.
	pub const PRIORITY: [SyntaxRule; 3] = [SyntaxRule::Wildcard, SyntaxRule::Range, SyntaxRule::List];

	/// Whether this rule claims `field`.
	pub fn detects(self, field: &str) -> bool {
		match self {
			SyntaxRule::Wildcard => field.contains('*'),
			SyntaxRule::Range => field.contains('-'),
			SyntaxRule::List => field.contains(','),
		}
	}

	/// The first rule in priority order that claims `field`, if any.
	pub fn select(field: &str) -> Option<SyntaxRule> {
		Self::PRIORITY.into_iter().find(|rule| rule.detects(field))
	}

	pub fn expand(self, spec: &FieldSpec, field: &str) -> Result<Vec<String>, ExpandError> {
		match self {
			SyntaxRule::Wildcard => expand_wildcard(spec, field),
			SyntaxRule::Range => expand_range(spec, field),
			SyntaxRule::List => expand_list(spec, field),
		}
	}
}

/// Result of expanding one field.
///
/// `NotOk` is the soft failure of the bare-integer path: the field is not a
/// number at all. Required fields escalate it; the optional year field uses it
/// to decide that the token starts the command instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldOutcome {
	Expanded(Vec<String>),
	NotOk,
	Failed(CronExprError),
}

/// Expand a raw field against its bounds.
pub fn expand_field(spec: &FieldSpec, field: &str) -> FieldOutcome {
	let Some(rule) = SyntaxRule::select(field) else {
		debug!(field = spec.name(), raw = field, "no syntax rule matched, parsing bare integer");
		return expand_bare_integer(spec, field);
	};

	debug!(field = spec.name(), raw = field, rule = ?rule, "expanding field");
	match rule.expand(spec, field) {
		Ok(values) => FieldOutcome::Expanded(values),
		Err(error) => FieldOutcome::Failed(CronExprError::Field {
			field: spec.name(),
			error,
		}),
	}
}
