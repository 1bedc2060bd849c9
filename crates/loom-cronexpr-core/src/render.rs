// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Plain-text table rendering.

use crate::expression::CronExpression;

/// Column width the field names are padded to.
pub const DEFAULT_NAME_WIDTH: usize = 14;

/// Format one table row: `name` left-aligned in `width` columns, a space,
/// then `value`.
pub fn format_row(name: &str, value: &str, width: usize) -> String {
	format!("{name:<width$} {value}")
}

impl CronExpression {
	/// Render the expression as a table, one newline-terminated row per field
	/// followed by the `command` row.
	pub fn to_table(&self, width: usize) -> String {
		let mut out = String::new();
		for field in &self.fields {
			out.push_str(&format_row(field.name(), &field.values.join(" "), width));
			out.push('\n');
		}
		out.push_str(&format_row("command", &self.command, width));
		out.push('\n');
		out
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_format_row_pads_name() {
		assert_eq!(format_row("minute", "0 15", 14), "minute         0 15");
		assert_eq!(format_row("day of month", "1", 14), "day of month   1");
	}

	#[test]
	fn test_long_name_is_not_truncated() {
		assert_eq!(format_row("day of month", "1", 4), "day of month 1");
	}

	#[test]
	fn test_table_layout() {
		let expr = CronExpression::parse("*/15 0 1,15 * 0 /usr/bin/find", 2026).unwrap();
		let expected = "\
minute         0 15 30 45
hour           0
day of month   1 15
month          1 2 3 4 5 6 7 8 9 10 11 12
day of week    0
command        /usr/bin/find
";
		assert_eq!(expr.to_table(DEFAULT_NAME_WIDTH), expected);
	}

	#[test]
	fn test_table_includes_year_row() {
		let expr = CronExpression::parse("0 0 1 1 * 2027-2029 /bin/true", 2026).unwrap();
		let table = expr.to_table(DEFAULT_NAME_WIDTH);
		assert!(table.contains("year           2027 2028 2029\n"));
		assert!(table.ends_with("command        /bin/true\n"));
	}
}
