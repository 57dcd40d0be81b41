// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

mod create;
mod resolve;

use serde::{Deserialize, Serialize};

use glacier_type::Type;

use crate::id::{FieldId, SchemaId};

/// A schema column. Field ids are assigned once and never reused across the
/// table's lifetime, even after the column is dropped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Field {
	pub id: FieldId,
	pub name: String,
	pub ty: Type,
	pub optional: bool,
	pub doc: Option<String>,
}

impl Field {
	pub fn optional(id: u32, name: impl Into<String>, ty: Type) -> Self {
		Self {
			id: FieldId(id),
			name: name.into(),
			ty,
			optional: true,
			doc: None,
		}
	}

	pub fn required(id: u32, name: impl Into<String>, ty: Type) -> Self {
		Self {
			id: FieldId(id),
			name: name.into(),
			ty,
			optional: false,
			doc: None,
		}
	}
}

/// One immutable version of the table's column schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Schema {
	schema_id: SchemaId,
	fields: Vec<Field>,
}

impl Schema {
	pub fn new(schema_id: SchemaId, fields: Vec<Field>) -> Self {
		// Names are only unique case-sensitively: resolution is
		// case-insensitive and reports the ambiguity instead.
		debug_assert!(
			fields.iter().enumerate().all(|(idx, field)| {
				fields[..idx].iter().all(|other| other.id != field.id && other.name != field.name)
			}),
			"schema fields must have unique ids and names"
		);
		Self {
			schema_id,
			fields,
		}
	}

	pub fn schema_id(&self) -> SchemaId {
		self.schema_id
	}

	pub fn fields(&self) -> &[Field] {
		&self.fields
	}

	pub fn field(&self, id: FieldId) -> Option<&Field> {
		self.fields.iter().find(|field| field.id == id)
	}

	pub fn highest_field_id(&self) -> u32 {
		self.fields.iter().map(|field| field.id.0).max().unwrap_or(0)
	}
}
