// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! The single atomically-swappable "current metadata" pointer.
//!
//! Optimistic concurrency without locks held across resolve and commit:
//! writers load an immutable snapshot, propose a successor computed from it,
//! and publish only if the pointer still is that snapshot. Pointer identity
//! is the compare-and-swap token.

use std::sync::Arc;

use parking_lot::RwLock;

pub struct MetadataCell<T> {
	current: RwLock<Arc<T>>,
}

impl<T> MetadataCell<T> {
	pub fn new(initial: T) -> Self {
		Self {
			current: RwLock::new(Arc::new(initial)),
		}
	}

	/// Load the latest published snapshot.
	pub fn load(&self) -> Arc<T> {
		self.current.read().clone()
	}

	/// Publish `next` if and only if `expected` is still the published
	/// snapshot. On failure the now-current snapshot is returned so the
	/// caller can recompute against it.
	pub fn compare_and_swap(&self, expected: &Arc<T>, next: T) -> std::result::Result<Arc<T>, Arc<T>> {
		let mut guard = self.current.write();
		if Arc::ptr_eq(&*guard, expected) {
			let published = Arc::new(next);
			*guard = published.clone();
			Ok(published)
		} else {
			Err(guard.clone())
		}
	}
}

impl<T: std::fmt::Debug> std::fmt::Debug for MetadataCell<T> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("MetadataCell").field("current", &*self.current.read()).finish()
	}
}
