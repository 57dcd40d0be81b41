// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Identifier newtypes.
//!
//! Every id is assigned once and never reassigned to a different semantic
//! meaning within one table's lifetime.

use std::fmt;
use std::fmt::{Display, Formatter};
use std::ops::Deref;

use serde::{Deserialize, Serialize};

macro_rules! id {
	($(#[doc = $doc:expr])* $name:ident) => {
		$(#[doc = $doc])*
		#[repr(transparent)]
		#[derive(
			Debug, Copy, Clone, PartialOrd, PartialEq, Ord, Eq, Hash, Serialize, Deserialize,
		)]
		pub struct $name(pub u32);

		impl Display for $name {
			fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
				Display::fmt(&self.0, f)
			}
		}

		impl Deref for $name {
			type Target = u32;

			fn deref(&self) -> &Self::Target {
				&self.0
			}
		}

		impl PartialEq<u32> for $name {
			fn eq(&self, other: &u32) -> bool {
				self.0.eq(other)
			}
		}

		impl From<$name> for u32 {
			fn from(value: $name) -> Self {
				value.0
			}
		}
	};
}

id! {
	/// A schema column id, stable across all schema versions.
	FieldId
}

id! {
	/// A schema version number, monotonically assigned starting at 0.
	SchemaId
}

id! {
	/// A partition spec version number, monotonically assigned starting at 0.
	SpecId
}

id! {
	/// A partition field id, unique within the table and never reused.
	PartitionFieldId
}
