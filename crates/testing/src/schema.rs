// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use glacier_catalog::id::SchemaId;
use glacier_catalog::{Field, Schema, Table, TableMutation, TransformRequest};
use glacier_type::Type;

/// `id` plus a single datetime column, the smallest schema that exercises
/// calendar transforms.
pub fn timestamp_schema() -> Schema {
	Schema::new(SchemaId(0), vec![
		Field::optional(1, "id", Type::Int8),
		Field::optional(2, "ts", Type::DateTime),
	])
}

/// Two string columns for truncate/bucket re-parameterization scenarios.
pub fn truncate_bucket_schema() -> Schema {
	Schema::new(SchemaId(0), vec![
		Field::optional(1, "id", Type::Int8),
		Field::optional(2, "truncate_field", Type::Utf8),
		Field::optional(3, "bucket_field", Type::Utf8),
	])
}

/// One column per transform kind.
pub fn transform_schema() -> Schema {
	Schema::new(SchemaId(0), vec![
		Field::optional(1, "id", Type::Int8),
		Field::optional(2, "year_field", Type::Date),
		Field::optional(3, "month_field", Type::DateTime),
		Field::optional(4, "day_field", Type::DateTime),
		Field::optional(5, "hour_field", Type::DateTime),
		Field::optional(6, "truncate_field", Type::Utf8),
		Field::optional(7, "bucket_field", Type::Utf8),
		Field::optional(8, "identity_field", Type::Utf8),
	])
}

/// A fresh table with the given schema whose first committed spec is built
/// from `requests`, mirroring a `PARTITIONED BY SPEC (...)` creation.
pub fn table_with_spec(schema: Schema, requests: Vec<TransformRequest>) -> Table {
	let table = Table::create("mem://part_test", schema, Default::default());
	if !requests.is_empty() {
		table.commit(&TableMutation::SetPartitionSpec {
			fields: requests,
		})
		.expect("initial partition spec must commit");
	}
	table
}
