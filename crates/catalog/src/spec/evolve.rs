// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Partition spec evolution.
//!
//! Computes the successor of a table's active partition spec from an ordered
//! transform request list. Pure over the metadata snapshot: nothing is
//! committed here, the candidate only becomes visible once the metadata
//! controller publishes it.

use tracing::{debug, instrument};

use glacier_type::diagnostic::internal::internal;
use glacier_type::diagnostic::spec::{duplicate_transform, no_spec_change};
use glacier_type::return_error;

use crate::id::{FieldId, PartitionFieldId};
use crate::schema::Schema;
use crate::spec::{PartitionField, PartitionSpec, TransformRequest};
use crate::table::TableMetadata;
use crate::transform::Transform;

/// A request entry after column resolution and transform validation.
/// `column` carries the schema's canonical spelling, not the request's.
struct Resolved {
	source_id: FieldId,
	column: String,
	transform: Transform,
}

/// Compute the next partition spec for `metadata` from the requested
/// transform list.
///
/// Field ids once assigned to a (source column, transform) pair are never
/// reassigned: fields still requested keep their id and name, fields no
/// longer requested are retired in place as void placeholders, and a request
/// matching a transform a voided field previously carried revives that field
/// under its original id. New fields are appended in request order with
/// freshly allocated ids.
#[instrument(name = "spec::evolve", level = "debug", skip_all)]
pub fn evolve_spec(metadata: &TableMetadata, requested: &[TransformRequest]) -> crate::Result<PartitionSpec> {
	let current = metadata.spec();
	let resolved = resolve(metadata.schema(), requested)?;

	let mut consumed = vec![false; resolved.len()];
	let mut fields: Vec<PartitionField> = Vec::with_capacity(current.fields().len() + resolved.len());

	// Every field of the current spec survives in place: retained when the
	// request still names its (source, transform) pair, revived when a void
	// placeholder's historical transform is requested again, retired to a
	// void placeholder otherwise.
	for field in current.fields() {
		if let Some(idx) = find_match(&resolved, &consumed, field.source_id, field.transform) {
			consumed[idx] = true;
			fields.push(field.clone());
			continue;
		}

		if field.transform.is_void() {
			if let Some(previous) = metadata.last_active_transform(field.field_id) {
				if let Some(idx) = find_match(&resolved, &consumed, field.source_id, previous) {
					consumed[idx] = true;
					fields.push(PartitionField {
						source_id: field.source_id,
						field_id: field.field_id,
						name: field.name.clone(),
						transform: previous,
					});
					continue;
				}
			}
		}

		fields.push(PartitionField {
			source_id: field.source_id,
			field_id: field.field_id,
			name: field.name.clone(),
			transform: Transform::Void,
		});
	}

	// Unsatisfied requests become new fields, appended in request order.
	let mut last_assigned = metadata.last_assigned_partition_field_id();
	for (idx, request) in resolved.iter().enumerate() {
		if consumed[idx] {
			continue;
		}
		last_assigned += 1;
		let name = derive_name(&fields, request)?;
		fields.push(PartitionField {
			source_id: request.source_id,
			field_id: PartitionFieldId(last_assigned),
			name,
			transform: request.transform,
		});
	}

	if fields == current.fields() {
		return_error!(no_spec_change());
	}

	let spec_id = metadata.next_spec_id();
	debug!(spec_id = %spec_id, fields = fields.len(), "computed candidate partition spec");
	Ok(PartitionSpec::new(spec_id, fields))
}

fn resolve(schema: &Schema, requested: &[TransformRequest]) -> crate::Result<Vec<Resolved>> {
	let mut resolved = Vec::with_capacity(requested.len());
	for request in requested {
		let transform = Transform::parse(&request.kind, request.param)?;
		let field = schema.resolve(&request.column)?;
		transform.validate(&field.name, field.ty)?;

		let entry = Resolved {
			source_id: field.id,
			column: field.name.clone(),
			transform,
		};
		if resolved.iter().any(|other: &Resolved| {
			other.source_id == entry.source_id && other.transform == entry.transform
		}) {
			return_error!(duplicate_transform(&transform.to_string(), &entry.column));
		}
		resolved.push(entry);
	}
	Ok(resolved)
}

/// One-to-one matching: each request entry satisfies at most one existing
/// field and vice versa. Requests never carry void, so a void field can
/// only be matched through its historical transform.
fn find_match(
	resolved: &[Resolved],
	consumed: &[bool],
	source_id: FieldId,
	transform: Transform,
) -> Option<usize> {
	resolved.iter().enumerate().position(|(idx, entry)| {
		!consumed[idx] && entry.source_id == source_id && entry.transform == transform
	})
}

/// Derive the name of a freshly added partition field.
///
/// The default is the bare column name for identity and `<column><suffix>`
/// otherwise. When a historical field (now a void placeholder) already owns
/// that name, the literal parameter value is appended, which is how
/// `truncate_field_trunc` and `truncate_field_trunc_3` coexist.
fn derive_name(fields: &[PartitionField], request: &Resolved) -> crate::Result<String> {
	let base = request.transform.default_name(&request.column);
	if fields.iter().all(|field| field.name != base) {
		return Ok(base);
	}

	if let Some(param) = request.transform.parameter() {
		let candidate = format!("{}_{}", base, param);
		if fields.iter().all(|field| field.name != candidate) {
			return Ok(candidate);
		}
	}

	// Unreachable from valid input: a colliding parameterized name means
	// the identical (source, transform) pair existed and would have been
	// retained or revived instead.
	return_error!(internal(format!("partition field name `{}` collides within one spec", base)))
}

#[cfg(test)]
mod tests {
	use glacier_type::Type;

	use crate::id::SchemaId;
	use crate::schema::{Field, Schema};
	use crate::spec::{PartitionField, TransformRequest, evolve_spec};
	use crate::table::TableMetadata;
	use crate::transform::Transform;

	fn timestamp_schema() -> Schema {
		Schema::new(SchemaId(0), vec![
			Field::optional(1, "id", Type::Int8),
			Field::optional(2, "ts", Type::DateTime),
		])
	}

	fn truncate_bucket_schema() -> Schema {
		Schema::new(SchemaId(0), vec![
			Field::optional(1, "id", Type::Int8),
			Field::optional(2, "truncate_field", Type::Utf8),
			Field::optional(3, "bucket_field", Type::Utf8),
		])
	}

	fn metadata(schema: Schema) -> TableMetadata {
		TableMetadata::create("mem://part_test", schema, Default::default())
	}

	fn evolved(metadata: &TableMetadata, requests: &[TransformRequest]) -> TableMetadata {
		let spec = evolve_spec(metadata, requests).unwrap();
		metadata.with_spec(spec).unwrap()
	}

	fn assert_field(
		field: &PartitionField,
		source_id: u32,
		field_id: u32,
		name: &str,
		transform: Transform,
	) {
		assert_eq!(field.source_id, source_id, "source id of `{}`", field.name);
		assert_eq!(field.field_id, field_id, "field id of `{}`", field.name);
		assert_eq!(field.name, name);
		assert_eq!(field.transform, transform, "transform of `{}`", field.name);
	}

	#[test]
	fn test_first_evolution_from_unpartitioned() {
		let metadata = metadata(timestamp_schema());

		let spec = evolve_spec(&metadata, &[TransformRequest::month("ts")]).unwrap();

		assert_eq!(spec.spec_id(), 1);
		assert_eq!(spec.fields().len(), 1);
		assert_field(&spec.fields()[0], 2, 1000, "ts_month", Transform::Month);
	}

	#[test]
	fn test_retired_field_becomes_void_placeholder() {
		let metadata = metadata(timestamp_schema());
		let metadata = evolved(&metadata, &[TransformRequest::month("ts")]);

		let spec = evolve_spec(&metadata, &[TransformRequest::day("ts")]).unwrap();

		assert_eq!(spec.spec_id(), 2);
		assert_eq!(spec.fields().len(), 2);
		assert_field(&spec.fields()[0], 2, 1000, "ts_month", Transform::Void);
		assert_field(&spec.fields()[1], 2, 1001, "ts_day", Transform::Day);
	}

	#[test]
	fn test_retained_fields_keep_position_ids_and_names() {
		let schema = Schema::new(SchemaId(0), vec![
			Field::optional(1, "id", Type::Int8),
			Field::optional(2, "year_field", Type::Date),
			Field::optional(3, "month_field", Type::DateTime),
			Field::optional(4, "day_field", Type::DateTime),
			Field::optional(5, "hour_field", Type::DateTime),
			Field::optional(6, "truncate_field", Type::Utf8),
			Field::optional(7, "bucket_field", Type::Utf8),
			Field::optional(8, "identity_field", Type::Utf8),
		]);
		let metadata = metadata(schema);
		let metadata = evolved(&metadata, &[
			TransformRequest::year("year_field"),
			TransformRequest::hour("hour_field"),
			TransformRequest::truncate("truncate_field", 2),
			TransformRequest::bucket("bucket_field", 2),
			TransformRequest::identity("identity_field"),
		]);

		let spec = evolve_spec(&metadata, &[
			TransformRequest::year("year_field"),
			TransformRequest::month("month_field"),
			TransformRequest::day("day_field"),
		])
		.unwrap();

		assert_eq!(spec.spec_id(), 2);
		assert_eq!(spec.fields().len(), 7);
		// Surviving fields in current-spec order, the retained one in place.
		assert_field(&spec.fields()[0], 2, 1000, "year_field_year", Transform::Year);
		assert_field(&spec.fields()[1], 5, 1001, "hour_field_hour", Transform::Void);
		assert_field(&spec.fields()[2], 6, 1002, "truncate_field_trunc", Transform::Void);
		assert_field(&spec.fields()[3], 7, 1003, "bucket_field_bucket", Transform::Void);
		assert_field(&spec.fields()[4], 8, 1004, "identity_field", Transform::Void);
		// Additions trail in request order.
		assert_field(&spec.fields()[5], 3, 1005, "month_field_month", Transform::Month);
		assert_field(&spec.fields()[6], 4, 1006, "day_field_day", Transform::Day);
	}

	#[test]
	fn test_same_field_reparameterization() {
		let metadata = metadata(truncate_bucket_schema());
		let metadata = evolved(&metadata, &[
			TransformRequest::truncate("truncate_field", 2),
			TransformRequest::bucket("bucket_field", 2),
		]);

		// Change one, keep one.
		let metadata = evolved(&metadata, &[
			TransformRequest::truncate("truncate_field", 3),
			TransformRequest::bucket("bucket_field", 2),
		]);
		{
			let spec = metadata.spec();
			assert_eq!(spec.spec_id(), 2);
			assert_eq!(spec.fields().len(), 3);
			assert_field(&spec.fields()[0], 2, 1000, "truncate_field_trunc", Transform::Void);
			assert_field(&spec.fields()[1], 3, 1001, "bucket_field_bucket", Transform::Bucket(2));
			assert_field(&spec.fields()[2], 2, 1002, "truncate_field_trunc_3", Transform::Truncate(3));
		}

		// Change the same field again, keep the other one.
		let metadata = evolved(&metadata, &[
			TransformRequest::truncate("truncate_field", 4),
			TransformRequest::bucket("bucket_field", 2),
		]);
		{
			let spec = metadata.spec();
			assert_eq!(spec.spec_id(), 3);
			assert_eq!(spec.fields().len(), 4);
			assert_field(&spec.fields()[0], 2, 1000, "truncate_field_trunc", Transform::Void);
			assert_field(&spec.fields()[1], 3, 1001, "bucket_field_bucket", Transform::Bucket(2));
			assert_field(&spec.fields()[2], 2, 1002, "truncate_field_trunc_3", Transform::Void);
			assert_field(&spec.fields()[3], 2, 1003, "truncate_field_trunc_4", Transform::Truncate(4));
		}

		// Keep the changed one, change the other, swapped clause order.
		let metadata = evolved(&metadata, &[
			TransformRequest::bucket("bucket_field", 3),
			TransformRequest::truncate("truncate_field", 4),
		]);
		let spec = metadata.spec();
		assert_eq!(spec.spec_id(), 4);
		assert_eq!(spec.fields().len(), 5);
		assert_field(&spec.fields()[0], 2, 1000, "truncate_field_trunc", Transform::Void);
		assert_field(&spec.fields()[1], 3, 1001, "bucket_field_bucket", Transform::Void);
		assert_field(&spec.fields()[2], 2, 1002, "truncate_field_trunc_3", Transform::Void);
		assert_field(&spec.fields()[3], 2, 1003, "truncate_field_trunc_4", Transform::Truncate(4));
		assert_field(&spec.fields()[4], 3, 1004, "bucket_field_bucket_3", Transform::Bucket(3));
	}

	#[test]
	fn test_case_insensitive_resolution_matches_lower_case_form() {
		let build = |requests: &[TransformRequest]| {
			let metadata = metadata(truncate_bucket_schema());
			let metadata = evolved(&metadata, &[
				TransformRequest::truncate("truncate_field", 2),
				TransformRequest::bucket("bucket_field", 2),
			]);
			evolve_spec(&metadata, requests).unwrap()
		};

		let spelled = build(&[
			TransformRequest::new("truncate_Field", "truncaTe", Some(3)),
			TransformRequest::new("bUckeT_field", "buCket", Some(3)),
		]);
		let lowered = build(&[
			TransformRequest::truncate("truncate_field", 3),
			TransformRequest::bucket("bucket_field", 3),
		]);

		assert_eq!(spelled, lowered);
		assert_eq!(spelled.fields()[2].name, "truncate_field_trunc_3");
		assert_eq!(spelled.fields()[3].name, "bucket_field_bucket_3");
	}

	#[test]
	fn test_identical_request_is_rejected_as_no_change() {
		let metadata = metadata(truncate_bucket_schema());
		let requests = [
			TransformRequest::truncate("truncate_field", 2),
			TransformRequest::bucket("bucket_field", 2),
		];
		let metadata = evolved(&metadata, &requests);

		let err = evolve_spec(&metadata, &requests).unwrap_err();
		assert_eq!(err.code(), "SPEC_002");
	}

	#[test]
	fn test_empty_request_on_unpartitioned_table_is_no_change() {
		let metadata = metadata(timestamp_schema());
		let err = evolve_spec(&metadata, &[]).unwrap_err();
		assert_eq!(err.code(), "SPEC_002");
	}

	#[test]
	fn test_unpartitioning_voids_every_field_once() {
		let metadata = metadata(timestamp_schema());
		let metadata = evolved(&metadata, &[TransformRequest::month("ts")]);

		let metadata = evolved(&metadata, &[]);
		let spec = metadata.spec();
		assert!(spec.is_unpartitioned());
		assert_field(&spec.fields()[0], 2, 1000, "ts_month", Transform::Void);

		// Unpartitioning an already voided spec changes nothing.
		let err = evolve_spec(&metadata, &[]).unwrap_err();
		assert_eq!(err.code(), "SPEC_002");
	}

	#[test]
	fn test_voided_identity_field_keeps_bare_column_name() {
		let schema = Schema::new(SchemaId(0), vec![Field::optional(1, "region", Type::Utf8)]);
		let metadata = metadata(schema);
		let metadata = evolved(&metadata, &[TransformRequest::identity("region")]);

		let metadata = evolved(&metadata, &[TransformRequest::bucket("region", 8)]);
		let spec = metadata.spec();
		assert_field(&spec.fields()[0], 1, 1000, "region", Transform::Void);
		assert_field(&spec.fields()[1], 1, 1001, "region_bucket", Transform::Bucket(8));
	}

	#[test]
	fn test_void_placeholder_revives_under_original_id() {
		let metadata = metadata(timestamp_schema());
		let metadata = evolved(&metadata, &[TransformRequest::month("ts")]);
		let metadata = evolved(&metadata, &[TransformRequest::day("ts")]);

		// month(ts) was retired in the previous evolution; requesting it
		// again resumes field 1000 in place instead of minting a new id.
		let spec = evolve_spec(&metadata, &[TransformRequest::month("ts")]).unwrap();

		assert_eq!(spec.spec_id(), 3);
		assert_eq!(spec.fields().len(), 2);
		assert_field(&spec.fields()[0], 2, 1000, "ts_month", Transform::Month);
		assert_field(&spec.fields()[1], 2, 1001, "ts_day", Transform::Void);
	}

	#[test]
	fn test_revival_distinguishes_parameterizations() {
		let metadata = metadata(truncate_bucket_schema());
		let metadata = evolved(&metadata, &[TransformRequest::truncate("truncate_field", 2)]);
		let metadata = evolved(&metadata, &[TransformRequest::truncate("truncate_field", 3)]);
		let metadata = evolved(&metadata, &[TransformRequest::bucket("bucket_field", 2)]);

		// Both truncate fields are void; only the width-3 one revives.
		let spec = evolve_spec(&metadata, &[TransformRequest::truncate("truncate_field", 3)]).unwrap();

		assert_field(&spec.fields()[0], 2, 1000, "truncate_field_trunc", Transform::Void);
		assert_field(&spec.fields()[1], 2, 1001, "truncate_field_trunc_3", Transform::Truncate(3));
		assert_field(&spec.fields()[2], 3, 1002, "bucket_field_bucket", Transform::Void);
	}

	#[test]
	fn test_duplicate_request_rejected() {
		let metadata = metadata(truncate_bucket_schema());
		let err = evolve_spec(&metadata, &[
			TransformRequest::bucket("bucket_field", 4),
			TransformRequest::bucket("Bucket_Field", 4),
		])
		.unwrap_err();
		assert_eq!(err.code(), "SPEC_001");
	}

	#[test]
	fn test_same_column_different_parameters_in_one_request() {
		let metadata = metadata(truncate_bucket_schema());
		let spec = evolve_spec(&metadata, &[
			TransformRequest::bucket("bucket_field", 4),
			TransformRequest::bucket("bucket_field", 8),
		])
		.unwrap();

		assert_field(&spec.fields()[0], 3, 1000, "bucket_field_bucket", Transform::Bucket(4));
		assert_field(&spec.fields()[1], 3, 1001, "bucket_field_bucket_8", Transform::Bucket(8));
	}

	#[test]
	fn test_unknown_column_fails_fast() {
		let metadata = metadata(timestamp_schema());
		let err = evolve_spec(&metadata, &[TransformRequest::month("tz")]).unwrap_err();
		assert_eq!(err.code(), "CATALOG_001");
	}

	#[test]
	fn test_incompatible_transform_fails_fast() {
		let metadata = metadata(timestamp_schema());
		let err = evolve_spec(&metadata, &[TransformRequest::hour("id")]).unwrap_err();
		assert_eq!(err.code(), "TRANSFORM_002");
	}

	#[test]
	fn test_spec_ids_strictly_increase() {
		let mut metadata = metadata(truncate_bucket_schema());
		let steps: Vec<Vec<TransformRequest>> = vec![
			vec![TransformRequest::truncate("truncate_field", 2)],
			vec![TransformRequest::truncate("truncate_field", 3)],
			vec![TransformRequest::bucket("bucket_field", 2)],
			vec![],
		];

		let mut previous = metadata.current_spec_id();
		for requests in steps {
			metadata = evolved(&metadata, &requests);
			assert!(metadata.current_spec_id() > previous);
			previous = metadata.current_spec_id();
		}
	}

	#[test]
	fn test_field_id_stays_bound_to_its_triple() {
		let mut metadata = metadata(truncate_bucket_schema());
		let steps: Vec<Vec<TransformRequest>> = vec![
			vec![TransformRequest::truncate("truncate_field", 2)],
			vec![
				TransformRequest::truncate("truncate_field", 3),
				TransformRequest::bucket("bucket_field", 2),
			],
			vec![TransformRequest::bucket("bucket_field", 2)],
			vec![TransformRequest::truncate("truncate_field", 2)],
		];
		for requests in steps {
			metadata = evolved(&metadata, &requests);
		}

		// Collect every (field id -> source, transform) binding over the
		// whole history; void entries inherit their original binding and
		// are skipped.
		let mut bindings: std::collections::HashMap<u32, (u32, Transform)> = Default::default();
		for spec in metadata.specs() {
			for field in spec.active_fields() {
				let bound = bindings
					.entry(field.field_id.0)
					.or_insert((field.source_id.0, field.transform));
				assert_eq!(*bound, (field.source_id.0, field.transform));
			}
		}
	}
}
