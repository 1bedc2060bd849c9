// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Cron field positions and their legal bounds.

use chrono::{Datelike, Local};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of years after the reference year accepted by the year field.
pub const YEAR_SPAN: u32 = 20;

/// Largest reference year whose year window still fits in a `u32`.
pub const MAX_REFERENCE_YEAR: u32 = u32::MAX - YEAR_SPAN;

/// A position in a cron expression, in expression order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
	Minute,
	Hour,
	DayOfMonth,
	Month,
	DayOfWeek,
	Year,
}

impl FieldKind {
	/// The five positions every expression must supply.
	pub const REQUIRED: [FieldKind; 5] = [
		FieldKind::Minute,
		FieldKind::Hour,
		FieldKind::DayOfMonth,
		FieldKind::Month,
		FieldKind::DayOfWeek,
	];

	/// Display name used in the expanded table.
	pub fn name(self) -> &'static str {
		match self {
			FieldKind::Minute => "minute",
			FieldKind::Hour => "hour",
			FieldKind::DayOfMonth => "day of month",
			FieldKind::Month => "month",
			FieldKind::DayOfWeek => "day of week",
			FieldKind::Year => "year",
		}
	}
}

impl fmt::Display for FieldKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.name())
	}
}

/// Inclusive legal bounds for one field position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
	pub kind: FieldKind,
	pub lower: u32,
	pub upper: u32,
}

impl FieldSpec {
	pub const fn new(kind: FieldKind, lower: u32, upper: u32) -> Self {
		Self { kind, lower, upper }
	}

	/// Bounds for `kind`. Only the year field depends on `reference_year`.
	pub fn for_kind(kind: FieldKind, reference_year: u32) -> Self {
		match kind {
			FieldKind::Minute => Self::new(kind, 0, 59),
			FieldKind::Hour => Self::new(kind, 0, 23),
			FieldKind::DayOfMonth => Self::new(kind, 1, 31),
			FieldKind::Month => Self::new(kind, 1, 12),
			FieldKind::DayOfWeek => Self::new(kind, 0, 7),
			FieldKind::Year => Self::new(
				kind,
				reference_year,
				reference_year.saturating_add(YEAR_SPAN),
			),
		}
	}

	pub fn name(&self) -> &'static str {
		self.kind.name()
	}

	pub fn contains(&self, value: u32) -> bool {
		(self.lower..=self.upper).contains(&value)
	}
}

/// The current year in the local timezone.
pub fn current_year() -> u32 {
	// Years before the common era never reach a cron table.
	u32::try_from(Local::now().year()).unwrap_or_default()
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_fixed_bounds() {
		let bounds: Vec<(u32, u32)> = FieldKind::REQUIRED
			.iter()
			.map(|&kind| {
				let spec = FieldSpec::for_kind(kind, 2026);
				(spec.lower, spec.upper)
			})
			.collect();
		assert_eq!(bounds, vec![(0, 59), (0, 23), (1, 31), (1, 12), (0, 7)]);
	}

	#[test]
	fn test_year_bounds_follow_reference_year() {
		let spec = FieldSpec::for_kind(FieldKind::Year, 2030);
		assert_eq!(spec.lower, 2030);
		assert_eq!(spec.upper, 2050);
	}

	#[test]
	fn test_year_bounds_saturate() {
		let spec = FieldSpec::for_kind(FieldKind::Year, u32::MAX - 5);
		assert_eq!(spec.lower, u32::MAX - 5);
		assert_eq!(spec.upper, u32::MAX);

		let spec = FieldSpec::for_kind(FieldKind::Year, MAX_REFERENCE_YEAR);
		assert_eq!(spec.upper, u32::MAX);
	}

	#[test]
	fn test_contains_is_inclusive() {
		let spec = FieldSpec::for_kind(FieldKind::DayOfMonth, 2026);
		assert!(spec.contains(1));
		assert!(spec.contains(31));
		assert!(!spec.contains(0));
		assert!(!spec.contains(32));
	}

	#[test]
	fn test_names() {
		assert_eq!(FieldKind::DayOfMonth.to_string(), "day of month");
		assert_eq!(FieldKind::DayOfWeek.name(), "day of week");
	}

	#[test]
	fn test_current_year_is_plausible() {
		assert!(current_year() >= 2024);
	}
}
