// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

#![cfg_attr(not(debug_assertions), deny(warnings))]

mod schema;

pub use schema::{table_with_spec, timestamp_schema, transform_schema, truncate_bucket_schema};

use once_cell::sync::Lazy;
use tracing_subscriber::EnvFilter;

static TRACING: Lazy<()> = Lazy::new(|| {
	let _ = tracing_subscriber::fmt()
		.with_env_filter(EnvFilter::from_default_env())
		.with_test_writer()
		.try_init();
});

/// Install the test tracing subscriber once per process. Controlled through
/// `RUST_LOG`, silent by default.
pub fn init_tracing() {
	Lazy::force(&TRACING);
}
