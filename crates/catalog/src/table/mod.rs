// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

mod commit;

pub use commit::{MAX_COMMIT_RETRIES, Table, TableMutation};

use std::collections::BTreeMap;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use glacier_type::diagnostic::internal::internal;
use glacier_type::{Type, return_error};

use crate::id::{PartitionFieldId, SchemaId, SpecId};
use crate::schema::{Field, Schema};
use crate::spec::{INITIAL_PARTITION_FIELD_ID, PartitionSpec};
use crate::transform::Transform;

pub const FORMAT_VERSION: u8 = 2;

/// One immutable snapshot of a table's metadata.
///
/// Schema and spec histories are append-only arenas keyed by id; the
/// `current_*` ids are the only active pointers. Mutation never edits a
/// snapshot, it derives the successor snapshot, which the metadata
/// controller then publishes atomically.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableMetadata {
	format_version: u8,
	location: String,
	schemas: BTreeMap<SchemaId, Schema>,
	current_schema_id: SchemaId,
	specs: BTreeMap<SpecId, PartitionSpec>,
	current_spec_id: SpecId,
	last_assigned_field_id: u32,
	last_assigned_partition_field_id: u32,
	properties: IndexMap<String, String>,
}

impl TableMetadata {
	/// Initial metadata for a fresh table: schema version 0 and an
	/// unpartitioned spec 0.
	pub fn create(
		location: impl Into<String>,
		schema: Schema,
		properties: IndexMap<String, String>,
	) -> Self {
		let last_assigned_field_id = schema.highest_field_id();
		let current_schema_id = schema.schema_id();
		let current_spec_id = SpecId(0);

		let mut schemas = BTreeMap::new();
		schemas.insert(current_schema_id, schema);
		let mut specs = BTreeMap::new();
		specs.insert(current_spec_id, PartitionSpec::unpartitioned(current_spec_id));

		Self {
			format_version: FORMAT_VERSION,
			location: location.into(),
			schemas,
			current_schema_id,
			specs,
			current_spec_id,
			last_assigned_field_id,
			last_assigned_partition_field_id: INITIAL_PARTITION_FIELD_ID - 1,
			properties,
		}
	}

	pub fn format_version(&self) -> u8 {
		self.format_version
	}

	pub fn location(&self) -> &str {
		&self.location
	}

	pub fn properties(&self) -> &IndexMap<String, String> {
		&self.properties
	}

	/// The currently committed schema.
	pub fn schema(&self) -> &Schema {
		// current_schema_id always refers to an entry in schemas
		&self.schemas[&self.current_schema_id]
	}

	pub fn schema_by_id(&self, id: SchemaId) -> Option<&Schema> {
		self.schemas.get(&id)
	}

	pub fn current_schema_id(&self) -> SchemaId {
		self.current_schema_id
	}

	/// The currently active partition spec.
	pub fn spec(&self) -> &PartitionSpec {
		// current_spec_id always refers to an entry in specs
		&self.specs[&self.current_spec_id]
	}

	pub fn spec_by_id(&self, id: SpecId) -> Option<&PartitionSpec> {
		self.specs.get(&id)
	}

	/// All historical specs, oldest first. Never shrinks: data files on
	/// disk reference their spec by id indefinitely.
	pub fn specs(&self) -> impl Iterator<Item = &PartitionSpec> {
		self.specs.values()
	}

	pub fn current_spec_id(&self) -> SpecId {
		self.current_spec_id
	}

	pub fn last_assigned_partition_field_id(&self) -> u32 {
		self.last_assigned_partition_field_id
	}

	pub fn next_spec_id(&self) -> SpecId {
		// specs is never empty, spec 0 exists from creation
		let highest = self.specs.keys().next_back().map(|id| id.0).unwrap_or(0);
		SpecId(highest + 1)
	}

	/// The most recent non-void transform a partition field id carried,
	/// searching the spec history newest first.
	pub(crate) fn last_active_transform(&self, field_id: PartitionFieldId) -> Option<Transform> {
		for spec in self.specs.values().rev() {
			if let Some(field) = spec.fields().iter().find(|field| field.field_id == field_id) {
				if !field.transform.is_void() {
					return Some(field.transform);
				}
			}
		}
		None
	}

	/// Append a spec to the history and make it current.
	pub fn with_spec(&self, spec: PartitionSpec) -> crate::Result<TableMetadata> {
		if self.specs.contains_key(&spec.spec_id()) {
			return_error!(internal(format!(
				"partition spec {} already exists and must not be overwritten",
				spec.spec_id()
			)));
		}
		validate_spec_invariants(&spec)?;

		let mut next = self.clone();
		next.current_spec_id = spec.spec_id();
		next.last_assigned_partition_field_id = spec
			.fields()
			.iter()
			.map(|field| field.field_id.0)
			.max()
			.unwrap_or(0)
			.max(self.last_assigned_partition_field_id);
		next.specs.insert(spec.spec_id(), spec);
		Ok(next)
	}

	/// Append a schema version with one new column and make it current.
	pub fn with_column(&self, name: &str, ty: Type, optional: bool) -> crate::Result<TableMetadata> {
		let field_id = self.last_assigned_field_id + 1;
		let field = if optional {
			Field::optional(field_id, name, ty)
		} else {
			Field::required(field_id, name, ty)
		};

		// schemas is never empty, schema 0 exists from creation
		let highest = self.schemas.keys().next_back().map(|id| id.0).unwrap_or(0);
		let schema = self.schema().with_column(SchemaId(highest + 1), field)?;

		let mut next = self.clone();
		next.current_schema_id = schema.schema_id();
		next.last_assigned_field_id = field_id;
		next.schemas.insert(schema.schema_id(), schema);
		Ok(next)
	}
}

/// Duplicate field ids or names within one spec cannot be produced by the
/// evolution engine from valid input; hitting this is a bug, not a user
/// error.
fn validate_spec_invariants(spec: &PartitionSpec) -> crate::Result<()> {
	for (idx, field) in spec.fields().iter().enumerate() {
		for other in &spec.fields()[..idx] {
			if other.field_id == field.field_id {
				return_error!(internal(format!(
					"partition field id {} appears twice in spec {}",
					field.field_id,
					spec.spec_id()
				)));
			}
			if other.name == field.name {
				return_error!(internal(format!(
					"partition field name `{}` appears twice in spec {}",
					field.name,
					spec.spec_id()
				)));
			}
		}
	}
	Ok(())
}

#[cfg(test)]
mod tests {
	use glacier_type::Type;

	use crate::id::{FieldId, PartitionFieldId, SchemaId, SpecId};
	use crate::schema::{Field, Schema};
	use crate::spec::{PartitionField, PartitionSpec};
	use crate::table::TableMetadata;
	use crate::transform::Transform;

	fn test_metadata() -> TableMetadata {
		let schema = Schema::new(SchemaId(0), vec![
			Field::optional(1, "id", Type::Int8),
			Field::optional(2, "ts", Type::DateTime),
		]);
		TableMetadata::create("mem://part_test", schema, Default::default())
	}

	#[test]
	fn test_create_starts_unpartitioned() {
		let metadata = test_metadata();

		assert_eq!(metadata.current_spec_id(), 0);
		assert!(metadata.spec().is_unpartitioned());
		assert_eq!(metadata.current_schema_id(), 0);
		assert_eq!(metadata.last_assigned_partition_field_id(), 999);
		assert_eq!(metadata.next_spec_id(), 1);
	}

	#[test]
	fn test_with_spec_appends_and_repoints() {
		let metadata = test_metadata();
		let spec = PartitionSpec::new(SpecId(1), vec![PartitionField {
			source_id: FieldId(2),
			field_id: PartitionFieldId(1000),
			name: "ts_month".to_string(),
			transform: Transform::Month,
		}]);

		let next = metadata.with_spec(spec).unwrap();

		assert_eq!(next.current_spec_id(), 1);
		assert_eq!(next.last_assigned_partition_field_id(), 1000);
		// The previous spec stays in the history untouched.
		assert!(next.spec_by_id(SpecId(0)).unwrap().is_unpartitioned());
		// The source snapshot is unchanged.
		assert_eq!(metadata.current_spec_id(), 0);
	}

	#[test]
	fn test_with_spec_rejects_existing_id() {
		let metadata = test_metadata();
		let err = metadata.with_spec(PartitionSpec::unpartitioned(SpecId(0))).unwrap_err();
		assert_eq!(err.code(), "INTERNAL_001");
	}

	#[test]
	fn test_with_spec_rejects_duplicate_names() {
		let metadata = test_metadata();
		let field = |field_id: u32, transform| PartitionField {
			source_id: FieldId(2),
			field_id: PartitionFieldId(field_id),
			name: "ts_month".to_string(),
			transform,
		};
		let spec = PartitionSpec::new(SpecId(1), vec![
			field(1000, Transform::Void),
			field(1001, Transform::Month),
		]);

		let err = metadata.with_spec(spec).unwrap_err();
		assert_eq!(err.code(), "INTERNAL_001");
	}

	#[test]
	fn test_with_column_versions_the_schema() {
		let metadata = test_metadata();

		let next = metadata.with_column("note", Type::Utf8, true).unwrap();

		assert_eq!(next.current_schema_id(), 1);
		assert_eq!(next.schema().resolve("note").unwrap().id, 3);
		// Old schema version remains addressable.
		assert_eq!(next.schema_by_id(SchemaId(0)).unwrap().fields().len(), 2);
		assert!(metadata.schema().resolve("note").is_err());
	}

	#[test]
	fn test_with_column_never_reuses_field_ids() {
		let metadata = test_metadata();
		let metadata = metadata.with_column("a", Type::Int4, true).unwrap();
		let metadata = metadata.with_column("b", Type::Int4, true).unwrap();

		assert_eq!(metadata.schema().resolve("a").unwrap().id, 3);
		assert_eq!(metadata.schema().resolve("b").unwrap().id, 4);
	}
}
