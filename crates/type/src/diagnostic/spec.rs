// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use crate::diagnostic::Diagnostic;
use crate::fragment::Fragment;

/// The same (column, transform) pair appears more than once in one request
pub fn duplicate_transform(transform: &str, column: &str) -> Diagnostic {
	Diagnostic {
		code: "SPEC_001".to_string(),
		message: format!("transform `{}` on column `{}` is requested more than once", transform, column),
		fragment: Fragment::owned(column),
		label: Some("duplicate partition transform".to_string()),
		help: Some("each (column, transform) pair may appear at most once per partition spec".to_string()),
		notes: vec![],
		cause: None,
	}
}

/// The requested transforms already describe the current partition spec
pub fn no_spec_change() -> Diagnostic {
	Diagnostic {
		code: "SPEC_002".to_string(),
		message: "the requested transforms match the current partition spec exactly".to_string(),
		fragment: Fragment::None,
		label: Some("nothing to change".to_string()),
		help: Some("a redundant spec is never published; drop the statement or change the transforms"
			.to_string()),
		notes: vec![],
		cause: None,
	}
}
