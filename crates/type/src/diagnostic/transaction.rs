// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use crate::diagnostic::Diagnostic;
use crate::fragment::Fragment;

/// Metadata commit lost every compare-and-swap round to concurrent writers
pub fn commit_conflict(attempts: usize) -> Diagnostic {
	Diagnostic {
		code: "TXN_001".to_string(),
		message: "metadata commit failed - another writer kept publishing newer table metadata".to_string(),
		fragment: Fragment::None,
		label: Some("commit conflict".to_string()),
		help: Some("retry the operation".to_string()),
		notes: vec![format!("gave up after {} attempts", attempts)],
		cause: None,
	}
}
