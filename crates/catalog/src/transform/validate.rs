// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use glacier_type::diagnostic::transform::{incompatible_transform, invalid_transform_parameter};
use glacier_type::{Type, return_error};

use crate::transform::Transform;

impl Transform {
	/// Check that this transform can be applied to a column of the given
	/// type.
	///
	/// - year/month/day require a date or datetime source, hour a
	///   datetime source
	/// - truncate requires an orderable prefix source, bucket a hashable
	///   source; both require their parameter to be at least 1
	/// - identity and void accept any type
	pub fn validate(&self, column: &str, source: Type) -> crate::Result<()> {
		if let Some(0) = self.parameter() {
			return_error!(invalid_transform_parameter(&self.to_string(), 0));
		}

		let compatible = match self {
			Transform::Identity | Transform::Void => true,
			Transform::Year | Transform::Month | Transform::Day => {
				matches!(source, Type::Date | Type::DateTime)
			}
			Transform::Hour => matches!(source, Type::DateTime),
			Transform::Truncate(_) => {
				source.is_integer() || matches!(source, Type::Utf8 | Type::Blob)
			}
			Transform::Bucket(_) => {
				source.is_integer()
					|| source.is_temporal() || matches!(source, Type::Utf8 | Type::Uuid | Type::Blob)
			}
		};

		if !compatible {
			return_error!(incompatible_transform(&self.to_string(), column, source));
		}
		Ok(())
	}
}
