// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

#![cfg_attr(not(debug_assertions), deny(warnings))]

pub mod id;
pub mod schema;
pub mod spec;
pub mod table;
pub mod transform;

pub use glacier_type::Error;
pub use schema::{Field, Schema};
pub use spec::{PartitionField, PartitionSpec, TransformRequest};
pub use table::{Table, TableMetadata, TableMutation};
pub use transform::Transform;

pub type Result<T> = std::result::Result<T, Error>;
