// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use glacier_type::diagnostic::catalog::column_already_exists;
use glacier_type::return_error;

use crate::id::SchemaId;
use crate::schema::{Field, Schema};

impl Schema {
	/// Produce the next schema version with one column appended.
	///
	/// The caller allocates the field id (ids come from the table-wide
	/// counter, not from this schema, so ids of dropped columns are never
	/// reused). Duplicate names are rejected case-insensitively.
	pub(crate) fn with_column(&self, schema_id: SchemaId, field: Field) -> crate::Result<Schema> {
		if self.fields().iter().any(|existing| existing.name.eq_ignore_ascii_case(&field.name)) {
			return_error!(column_already_exists(&field.name));
		}

		let mut fields = self.fields().to_vec();
		fields.push(field);
		Ok(Schema::new(schema_id, fields))
	}
}
