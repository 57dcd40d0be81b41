// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Diagnostic error modules.
//!
//! One constructor function per error condition, grouped by the component
//! that raises it. Codes are stable and part of the public contract.

pub mod catalog;
pub mod internal;
pub mod spec;
pub mod transaction;
pub mod transform;

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::fragment::Fragment;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Diagnostic {
	pub code: String,
	pub message: String,
	pub fragment: Fragment,
	pub label: Option<String>,
	pub help: Option<String>,
	pub notes: Vec<String>,
	pub cause: Option<Box<Diagnostic>>,
}

impl Display for Diagnostic {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		f.write_str(&self.code)
	}
}
