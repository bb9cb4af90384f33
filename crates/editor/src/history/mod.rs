//! Per-document command history.
//!
//! # Layers
//!
//! * [`DocumentHistory`]: append-only log of recorded executions for one document.
//! * [`HistoryDirectory`]: table from document to its log, filled lazily on
//!   the first command executed against a document.
//!
//! Entries are only ever appended by the dispatcher. Readers (the repeat
//! family, the macro recorder) copy out what they need and never mutate the
//! log. Taking a macro slice does not truncate it.

use std::sync::Arc;

use parking_lot::Mutex;
use reprise_primitives::{DocumentId, HistoryFilter};
use reprise_registry::HistoryEntry;
use rustc_hash::FxHashMap;
use tracing::debug;

/// Shared handle to a document's history.
pub type SharedHistory = Arc<Mutex<DocumentHistory>>;

/// Ordered log of the historically significant commands run on a document.
#[derive(Debug, Default)]
pub struct DocumentHistory {
	/// Entries in execution order, oldest first.
	entries: Vec<HistoryEntry>,
}

impl DocumentHistory {
	pub fn new() -> Self {
		Self::default()
	}

	/// Appends an entry at the end.
	///
	/// Filtering on [`CommandFlags::IGNORE_IN_HISTORY`] is the caller's job.
	///
	/// [`CommandFlags::IGNORE_IN_HISTORY`]: reprise_primitives::CommandFlags::IGNORE_IN_HISTORY
	pub fn append(&mut self, entry: HistoryEntry) {
		self.entries.push(entry);
	}

	/// All entries, oldest first.
	pub fn entries(&self) -> &[HistoryEntry] {
		&self.entries
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// The most recent entry.
	pub fn last(&self) -> Option<&HistoryEntry> {
		self.entries.last()
	}

	/// Returns the most recent entry whose flags satisfy `filter`.
	///
	/// Linear backward scan; the first hit wins.
	pub fn find_last(&self, filter: HistoryFilter) -> Option<&HistoryEntry> {
		self.entries.iter().rev().find(|entry| filter.matches(entry.descriptor.flags))
	}

	/// Entries recorded at or after `start`. Empty if `start` is past the end.
	pub fn slice_from(&self, start: usize) -> &[HistoryEntry] {
		self.entries.get(start..).unwrap_or_default()
	}
}

/// Table from document to its history.
///
/// Constructed once per [`Core`] and shared by every dispatch. A document's
/// history is created on first access and lives until [`forget`] is called
/// for it (typically when the document closes).
///
/// [`Core`]: crate::Core
/// [`forget`]: HistoryDirectory::forget
#[derive(Debug, Default)]
pub struct HistoryDirectory {
	docs: Mutex<FxHashMap<DocumentId, SharedHistory>>,
}

impl HistoryDirectory {
	pub fn new() -> Self {
		Self::default()
	}

	/// Returns the history of `document`, creating an empty one on first access.
	///
	/// Repeated calls return the same instance until the document is forgotten.
	pub fn for_document(&self, document: DocumentId) -> SharedHistory {
		self.docs
			.lock()
			.entry(document)
			.or_insert_with(|| {
				debug!(document = document.0, "created document history");
				SharedHistory::default()
			})
			.clone()
	}

	/// Returns the history of `document` without creating it.
	pub fn get(&self, document: DocumentId) -> Option<SharedHistory> {
		self.docs.lock().get(&document).cloned()
	}

	/// Drops the history of `document`. Returns true if one existed.
	pub fn forget(&self, document: DocumentId) -> bool {
		let removed = self.docs.lock().remove(&document).is_some();
		if removed {
			debug!(document = document.0, "dropped document history");
		}
		removed
	}

	/// Number of documents with a history.
	pub fn len(&self) -> usize {
		self.docs.lock().len()
	}

	pub fn is_empty(&self) -> bool {
		self.docs.lock().is_empty()
	}
}
