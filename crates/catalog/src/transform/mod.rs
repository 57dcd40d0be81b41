// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

mod validate;

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use glacier_type::diagnostic::transform::{
	missing_transform_parameter, reserved_transform, unexpected_transform_parameter, unknown_transform,
};
use glacier_type::return_error;

/// A deterministic function from a column value to a partition value.
///
/// The family is closed: every place that computes a validation rule or a
/// name suffix matches exhaustively, so adding a transform is a compile
/// error until all of them are updated.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Transform {
	Identity,
	Year,
	Month,
	Day,
	Hour,
	Truncate(u32),
	Bucket(u32),
	/// A retired partition field, kept for field-id continuity but no
	/// longer used to compute partition values. Synthesized during spec
	/// evolution, never user input.
	Void,
}

impl Transform {
	/// Parse the inbound DDL tuple `(kind, param)`. Kind names are
	/// case-insensitive, mirroring column resolution.
	pub fn parse(kind: &str, param: Option<u32>) -> crate::Result<Transform> {
		let transform = match kind.to_ascii_lowercase().as_str() {
			"identity" => Transform::Identity,
			"year" => Transform::Year,
			"month" => Transform::Month,
			"day" => Transform::Day,
			"hour" => Transform::Hour,
			"truncate" => {
				let Some(width) = param else {
					return_error!(missing_transform_parameter(kind));
				};
				return Ok(Transform::Truncate(width));
			}
			"bucket" => {
				let Some(count) = param else {
					return_error!(missing_transform_parameter(kind));
				};
				return Ok(Transform::Bucket(count));
			}
			"void" => return_error!(reserved_transform(kind)),
			_ => return_error!(unknown_transform(kind)),
		};

		if let Some(param) = param {
			return_error!(unexpected_transform_parameter(kind, param));
		}
		Ok(transform)
	}

	pub fn is_void(&self) -> bool {
		matches!(self, Transform::Void)
	}

	pub fn parameter(&self) -> Option<u32> {
		match self {
			Transform::Truncate(width) => Some(*width),
			Transform::Bucket(count) => Some(*count),
			_ => None,
		}
	}

	/// The transform-derived partition field name suffix.
	pub fn suffix(&self) -> Option<&'static str> {
		match self {
			Transform::Identity | Transform::Void => None,
			Transform::Year => Some("_year"),
			Transform::Month => Some("_month"),
			Transform::Day => Some("_day"),
			Transform::Hour => Some("_hour"),
			Transform::Truncate(_) => Some("_trunc"),
			Transform::Bucket(_) => Some("_bucket"),
		}
	}

	/// The default partition field name for a source column: the bare
	/// column name for identity, `<column><suffix>` otherwise.
	pub fn default_name(&self, column: &str) -> String {
		match self.suffix() {
			Some(suffix) => format!("{}{}", column, suffix),
			None => column.to_string(),
		}
	}
}

impl Display for Transform {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			Transform::Identity => f.write_str("identity"),
			Transform::Year => f.write_str("year"),
			Transform::Month => f.write_str("month"),
			Transform::Day => f.write_str("day"),
			Transform::Hour => f.write_str("hour"),
			Transform::Truncate(width) => write!(f, "truncate({})", width),
			Transform::Bucket(count) => write!(f, "bucket({})", count),
			Transform::Void => f.write_str("void"),
		}
	}
}
