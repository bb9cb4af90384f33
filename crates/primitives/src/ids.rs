use std::sync::atomic::{AtomicU64, Ordering};

/// Counter for generating unique document IDs.
static NEXT_DOCUMENT_ID: AtomicU64 = AtomicU64::new(1);

/// Counter for generating unique editor IDs.
static NEXT_EDITOR_ID: AtomicU64 = AtomicU64::new(1);

/// Unique identifier for a document.
///
/// Histories are keyed by document, so every editor showing the same
/// document appends to and reads from the same log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DocumentId(pub u64);

impl DocumentId {
	/// Generates a new unique document ID.
	pub fn next() -> Self {
		Self(NEXT_DOCUMENT_ID.fetch_add(1, Ordering::Relaxed))
	}
}

/// Unique identifier for an editor (a view onto a document).
///
/// Recording sessions are keyed by editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EditorId(pub u64);

impl EditorId {
	/// Generates a new unique editor ID.
	pub fn next() -> Self {
		Self(NEXT_EDITOR_ID.fetch_add(1, Ordering::Relaxed))
	}
}
