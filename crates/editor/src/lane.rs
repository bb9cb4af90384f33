//! Per-document sequencing of top-level dispatches.
//!
//! Handlers may complete asynchronously, so two commands started back to
//! back on the same document could otherwise finish (and append to history)
//! out of order. Every top-level dispatch holds its document's lane until the
//! command, its history append and any batch it scheduled have completed.
//! The lane is a FIFO-fair async mutex, so waiting dispatches run in the
//! order they were initiated.
//!
//! Nested dispatches (repeat, macro playback) run inside the lane their
//! top-level dispatch already holds and never acquire it again.

use std::sync::Arc;

use parking_lot::Mutex;
use reprise_primitives::DocumentId;
use rustc_hash::FxHashMap;
use tokio::sync::OwnedMutexGuard;

type Lane = Arc<tokio::sync::Mutex<()>>;

/// Lanes keyed by document, created on first use.
#[derive(Debug, Default)]
pub struct DocumentLanes {
	lanes: Mutex<FxHashMap<DocumentId, Lane>>,
}

/// Exclusive hold on a document's lane, released on drop.
#[derive(Debug)]
pub struct LaneGuard {
	document: DocumentId,
	_guard: OwnedMutexGuard<()>,
}

impl LaneGuard {
	pub fn document(&self) -> DocumentId {
		self.document
	}
}

impl DocumentLanes {
	pub fn new() -> Self {
		Self::default()
	}

	/// Waits for the lane of `document`.
	pub async fn acquire(&self, document: DocumentId) -> LaneGuard {
		let lane = self.lane(document);
		LaneGuard {
			document,
			_guard: lane.lock_owned().await,
		}
	}

	/// Returns true if a dispatch currently holds the lane of `document`.
	pub fn is_busy(&self, document: DocumentId) -> bool {
		self.lanes.lock().get(&document).is_some_and(|lane| lane.try_lock().is_err())
	}

	/// Drops the lane of a closed document. Holders keep their guard.
	pub fn forget(&self, document: DocumentId) {
		self.lanes.lock().remove(&document);
	}

	fn lane(&self, document: DocumentId) -> Lane {
		self.lanes.lock().entry(document).or_default().clone()
	}
}
