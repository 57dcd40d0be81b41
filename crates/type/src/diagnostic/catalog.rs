// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use crate::diagnostic::Diagnostic;
use crate::fragment::Fragment;

/// No schema column matches the requested name
pub fn unknown_column(name: &str) -> Diagnostic {
	Diagnostic {
		code: "CATALOG_001".to_string(),
		message: format!("column `{}` does not exist in the current schema", name),
		fragment: Fragment::owned(name),
		label: Some("unknown column".to_string()),
		help: Some("column names resolve case-insensitively against the current schema".to_string()),
		notes: vec![],
		cause: None,
	}
}

/// More than one schema column matches the requested name case-insensitively
pub fn ambiguous_column(name: &str, candidates: &[String]) -> Diagnostic {
	Diagnostic {
		code: "CATALOG_002".to_string(),
		message: format!("column `{}` matches more than one schema column", name),
		fragment: Fragment::owned(name),
		label: Some("ambiguous column".to_string()),
		help: Some("use the exact spelling of one of the matching columns".to_string()),
		notes: candidates.iter().map(|candidate| format!("candidate: `{}`", candidate)).collect(),
		cause: None,
	}
}

/// A column with this name already exists in the schema
pub fn column_already_exists(name: &str) -> Diagnostic {
	Diagnostic {
		code: "CATALOG_003".to_string(),
		message: format!("column `{}` already exists in the current schema", name),
		fragment: Fragment::owned(name),
		label: Some("duplicate column".to_string()),
		help: Some("column names are unique per schema, compared case-insensitively".to_string()),
		notes: vec![],
		cause: None,
	}
}
