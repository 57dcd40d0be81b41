// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::fmt::{Display, Formatter};

use crate::diagnostic::Diagnostic;

/// The unified error type: every failure carries a [`Diagnostic`] with a
/// stable code and the offending input named.
#[derive(Debug, Clone, PartialEq)]
pub struct Error(pub Diagnostic);

impl Error {
	pub fn diagnostic(self) -> Diagnostic {
		self.0
	}

	pub fn code(&self) -> &str {
		&self.0.code
	}
}

impl Display for Error {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "[{}] {}", self.0.code, self.0.message)?;
		if !self.0.fragment.text().is_empty() {
			write!(f, ": `{}`", self.0.fragment.text())?;
		}
		if let Some(help) = &self.0.help {
			write!(f, " (help: {})", help)?;
		}
		Ok(())
	}
}

impl std::error::Error for Error {}

impl From<Diagnostic> for Error {
	fn from(diagnostic: Diagnostic) -> Self {
		Self(diagnostic)
	}
}
