// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Cron expression expansion for Loom.
//!
//! Expands each field of a cron expression
//! (`minute hour day-of-month month day-of-week [year] command`) into the
//! explicit values it matches. This is not a scheduler: nothing here computes
//! run times or executes the command.
//!
//! # Overview
//!
//! - Field syntax: `*`, `*/step`, `start-end` (wrapping when `start > end`),
//!   `v1,v2,...`, or a bare integer
//! - Every value is checked against the field's legal bounds
//! - The year field is optional and probed from the sixth token
//!
//! ```
//! use loom_cronexpr_core::{CronExpression, FieldKind};
//!
//! let expr = CronExpression::parse("*/15 0 1,15 * 5-1 /usr/bin/find", 2026).unwrap();
//! let dow = expr.field(FieldKind::DayOfWeek).unwrap();
//! assert_eq!(dow.values, ["5", "6", "7", "0", "1"]);
//! assert_eq!(expr.command, "/usr/bin/find");
//! ```

pub mod bare;
pub mod error;
pub mod expression;
pub mod field;
pub mod list;
pub mod range;
pub mod render;
pub mod rule;
pub mod wildcard;

pub use error::{CronExprError, ExpandError, Result};
pub use expression::{CronExpression, ExpandedField, MIN_TOKENS};
pub use field::{current_year, FieldKind, FieldSpec, MAX_REFERENCE_YEAR, YEAR_SPAN};
pub use render::{format_row, DEFAULT_NAME_WIDTH};
pub use rule::{expand_field, FieldOutcome, SyntaxRule};
