// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! The table metadata controller.
//!
//! Commits are optimistic: the mutation is re-resolved against the latest
//! committed snapshot on every attempt, so no lock spans the gap between
//! resolution and publication. Exactly one writer wins each round; losers
//! reload and recompute until the retry budget runs out.

use std::sync::Arc;

use tracing::{debug, instrument, warn};

use glacier_transaction::MetadataCell;
use glacier_type::diagnostic::transaction::commit_conflict;
use glacier_type::{Type, return_error};

use crate::spec::{TransformRequest, evolve_spec};
use crate::table::TableMetadata;

pub const MAX_COMMIT_RETRIES: usize = 4;

/// An atomic metadata update. Each variant is resolved against the freshest
/// committed state at commit time, never against the snapshot the caller
/// happened to hold.
#[derive(Debug, Clone, PartialEq)]
pub enum TableMutation {
	AddColumn {
		name: String,
		ty: Type,
		optional: bool,
	},
	SetPartitionSpec {
		fields: Vec<TransformRequest>,
	},
}

/// A cheaply clonable handle on one table's current-metadata pointer.
#[derive(Debug, Clone)]
pub struct Table {
	metadata: Arc<MetadataCell<TableMetadata>>,
}

impl Table {
	pub fn new(metadata: TableMetadata) -> Self {
		Self {
			metadata: Arc::new(MetadataCell::new(metadata)),
		}
	}

	pub fn create(
		location: impl Into<String>,
		schema: crate::schema::Schema,
		properties: indexmap::IndexMap<String, String>,
	) -> Self {
		Self::new(TableMetadata::create(location, schema, properties))
	}

	/// Refresh: load the latest committed metadata snapshot.
	pub fn metadata(&self) -> Arc<TableMetadata> {
		self.metadata.load()
	}

	/// Resolve, propose and publish a mutation.
	///
	/// Input errors (unknown column, incompatible transform, no change)
	/// surface immediately; only a lost compare-and-swap race is retried,
	/// and each retry recomputes from the metadata that beat us.
	#[instrument(name = "table::commit", level = "debug", skip_all)]
	pub fn commit(&self, mutation: &TableMutation) -> crate::Result<Arc<TableMetadata>> {
		for attempt in 0..MAX_COMMIT_RETRIES {
			let base = self.metadata.load();
			let candidate = apply(&base, mutation)?;

			match self.metadata.compare_and_swap(&base, candidate) {
				Ok(published) => {
					debug!(
						spec_id = %published.current_spec_id(),
						schema_id = %published.current_schema_id(),
						"published table metadata"
					);
					return Ok(published);
				}
				Err(_) => {
					warn!(attempt, "metadata pointer moved during commit, recomputing");
				}
			}
		}
		return_error!(commit_conflict(MAX_COMMIT_RETRIES))
	}
}

fn apply(base: &TableMetadata, mutation: &TableMutation) -> crate::Result<TableMetadata> {
	match mutation {
		TableMutation::AddColumn {
			name,
			ty,
			optional,
		} => base.with_column(name, *ty, *optional),
		TableMutation::SetPartitionSpec {
			fields,
		} => {
			let spec = evolve_spec(base, fields)?;
			base.with_spec(spec)
		}
	}
}
