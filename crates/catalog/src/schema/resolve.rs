// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use glacier_type::diagnostic::catalog::{ambiguous_column, unknown_column};
use glacier_type::return_error;

use crate::schema::{Field, Schema};

impl Schema {
	/// Resolve a column name against the current schema.
	///
	/// Matching is case-insensitive and exact. No match is an unknown
	/// column; more than one match is ambiguous, regardless of whether
	/// one of the candidates matches case-exactly.
	pub fn resolve(&self, name: &str) -> crate::Result<&Field> {
		let mut matches = self.fields().iter().filter(|field| field.name.eq_ignore_ascii_case(name));

		let Some(field) = matches.next() else {
			return_error!(unknown_column(name));
		};

		if matches.next().is_some() {
			let candidates: Vec<String> = self
				.fields()
				.iter()
				.filter(|field| field.name.eq_ignore_ascii_case(name))
				.map(|field| field.name.clone())
				.collect();
			return_error!(ambiguous_column(name, &candidates));
		}

		Ok(field)
	}
}
