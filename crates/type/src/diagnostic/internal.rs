// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use crate::diagnostic::Diagnostic;
use crate::fragment::Fragment;

/// An invariant that valid input can never violate was violated anyway
pub fn internal(message: impl Into<String>) -> Diagnostic {
	Diagnostic {
		code: "INTERNAL_001".to_string(),
		message: message.into(),
		fragment: Fragment::None,
		label: Some("internal error".to_string()),
		help: Some("this is a bug; please report it with the statement that triggered it".to_string()),
		notes: vec![],
		cause: None,
	}
}
