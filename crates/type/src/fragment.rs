// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use serde::{Deserialize, Serialize};

/// The piece of user input a diagnostic points at.
///
/// The DDL surface lives outside this crate, so there is no statement text to
/// index into; a fragment is either absent or the offending token itself.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Fragment {
	#[default]
	None,
	Owned {
		text: String,
	},
}

impl Fragment {
	pub fn owned(text: impl Into<String>) -> Self {
		Fragment::Owned {
			text: text.into(),
		}
	}

	pub fn text(&self) -> &str {
		match self {
			Fragment::None => "",
			Fragment::Owned {
				text,
			} => text,
		}
	}
}
