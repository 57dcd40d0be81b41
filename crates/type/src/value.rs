// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// All column types the metadata layer knows about.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Type {
	/// A boolean: true or false.
	Bool,
	/// A 4-byte floating point
	Float4,
	/// An 8-byte floating point
	Float8,
	/// A 1-byte signed integer
	Int1,
	/// A 2-byte signed integer
	Int2,
	/// A 4-byte signed integer
	Int4,
	/// An 8-byte signed integer
	Int8,
	/// A 4-byte unsigned integer
	Uint4,
	/// An 8-byte unsigned integer
	Uint8,
	/// A UTF-8 encoded text.
	Utf8,
	/// A date value (year, month, day)
	Date,
	/// A date and time value with nanosecond precision in UTC
	DateTime,
	/// A time value (hour, minute, second, nanosecond)
	Time,
	/// A universally unique identifier
	Uuid,
	/// A binary large object (BLOB)
	Blob,
}

impl Type {
	pub fn is_integer(&self) -> bool {
		matches!(self, Type::Int1 | Type::Int2 | Type::Int4 | Type::Int8 | Type::Uint4 | Type::Uint8)
	}

	pub fn is_number(&self) -> bool {
		self.is_integer() || matches!(self, Type::Float4 | Type::Float8)
	}

	pub fn is_temporal(&self) -> bool {
		matches!(self, Type::Date | Type::DateTime | Type::Time)
	}
}

impl Display for Type {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		let name = match self {
			Type::Bool => "bool",
			Type::Float4 => "float4",
			Type::Float8 => "float8",
			Type::Int1 => "int1",
			Type::Int2 => "int2",
			Type::Int4 => "int4",
			Type::Int8 => "int8",
			Type::Uint4 => "uint4",
			Type::Uint8 => "uint8",
			Type::Utf8 => "utf8",
			Type::Date => "date",
			Type::DateTime => "datetime",
			Type::Time => "time",
			Type::Uuid => "uuid",
			Type::Blob => "blob",
		};
		f.write_str(name)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_integer_classification() {
		assert!(Type::Int8.is_integer());
		assert!(Type::Uint4.is_integer());
		assert!(!Type::Float8.is_integer());
		assert!(!Type::Utf8.is_integer());
	}

	#[test]
	fn test_temporal_classification() {
		assert!(Type::Date.is_temporal());
		assert!(Type::DateTime.is_temporal());
		assert!(Type::Time.is_temporal());
		assert!(!Type::Int8.is_temporal());
	}

	#[test]
	fn test_display() {
		assert_eq!(Type::DateTime.to_string(), "datetime");
		assert_eq!(Type::Utf8.to_string(), "utf8");
	}
}
