// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

mod evolve;

pub use evolve::evolve_spec;

use serde::{Deserialize, Serialize};

use crate::id::{FieldId, PartitionFieldId, SpecId};
use crate::transform::Transform;

/// Partition field ids live in their own reserved range so they never
/// collide with schema field ids in partition value tuples.
pub const INITIAL_PARTITION_FIELD_ID: u32 = 1000;

/// One column-transform pair of a partition spec.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PartitionField {
	pub source_id: FieldId,
	pub field_id: PartitionFieldId,
	pub name: String,
	pub transform: Transform,
}

/// An immutable, versioned list of partition fields.
///
/// Published specs are never mutated; evolution always produces a new spec
/// under a fresh id while the table keeps every historical spec, because
/// data files on disk record which spec id partitioned them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PartitionSpec {
	spec_id: SpecId,
	fields: Vec<PartitionField>,
}

impl PartitionSpec {
	pub fn new(spec_id: SpecId, fields: Vec<PartitionField>) -> Self {
		Self {
			spec_id,
			fields,
		}
	}

	pub fn unpartitioned(spec_id: SpecId) -> Self {
		Self::new(spec_id, Vec::new())
	}

	pub fn spec_id(&self) -> SpecId {
		self.spec_id
	}

	pub fn fields(&self) -> &[PartitionField] {
		&self.fields
	}

	/// Fields that still produce partition values, i.e. everything that
	/// is not a void placeholder.
	pub fn active_fields(&self) -> impl Iterator<Item = &PartitionField> {
		self.fields.iter().filter(|field| !field.transform.is_void())
	}

	pub fn is_unpartitioned(&self) -> bool {
		self.active_fields().next().is_none()
	}
}

/// The inbound DDL tuple: one entry of an ordered `SET PARTITION SPEC`
/// transform list, before resolution against the schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransformRequest {
	pub column: String,
	pub kind: String,
	pub param: Option<u32>,
}

impl TransformRequest {
	pub fn new(column: impl Into<String>, kind: impl Into<String>, param: Option<u32>) -> Self {
		Self {
			column: column.into(),
			kind: kind.into(),
			param,
		}
	}

	pub fn identity(column: impl Into<String>) -> Self {
		Self::new(column, "identity", None)
	}

	pub fn year(column: impl Into<String>) -> Self {
		Self::new(column, "year", None)
	}

	pub fn month(column: impl Into<String>) -> Self {
		Self::new(column, "month", None)
	}

	pub fn day(column: impl Into<String>) -> Self {
		Self::new(column, "day", None)
	}

	pub fn hour(column: impl Into<String>) -> Self {
		Self::new(column, "hour", None)
	}

	pub fn truncate(column: impl Into<String>, width: u32) -> Self {
		Self::new(column, "truncate", Some(width))
	}

	pub fn bucket(column: impl Into<String>, count: u32) -> Self {
		Self::new(column, "bucket", Some(count))
	}
}
