//! Context provided to command handlers during execution.
//!
//! # Design
//!
//! [`CommandContext`] is a thin wrapper around a [`EditorCapabilities`] trait
//! object. Handlers are written against the fine-grained capability traits
//! ([`HistoryAccess`], [`MacroAccess`], [`UndoAccess`], [`DispatchAccess`]);
//! the history engine implements them. This keeps the builtins testable with
//! a mock provider.
//!
//! All capability methods take `&self`. Dispatch is re-entrant (a repeat runs
//! another command while it is itself running), so implementors use interior
//! mutability and never hold a lock across an await point.

mod capabilities;

pub use capabilities::{DispatchAccess, HistoryAccess, MacroAccess, RecordStart, RecordedMacro, StoredMacro, UndoAccess};
use reprise_primitives::{DocumentId, EditorId};

/// Aggregates every capability a handler can reach.
pub trait EditorCapabilities {
	/// Editor the command runs in.
	fn editor(&self) -> EditorId;

	/// Document shown by that editor.
	fn document(&self) -> DocumentId;

	/// Read access to the document's history.
	fn history(&self) -> &dyn HistoryAccess;

	/// Macro recording and storage.
	fn macro_ops(&self) -> &dyn MacroAccess;

	/// Native undo/redo of the host editor.
	fn undo_ops(&self) -> &dyn UndoAccess;

	/// Re-entrant command execution.
	fn dispatch(&self) -> &dyn DispatchAccess;
}

/// Handle passed to command handlers.
pub struct CommandContext<'a> {
	/// The capability provider (typically `EditorCaps` from reprise-editor).
	inner: &'a dyn EditorCapabilities,
}

impl<'a> CommandContext<'a> {
	/// Creates a new context wrapping the given capabilities.
	pub fn new(inner: &'a dyn EditorCapabilities) -> Self {
		Self { inner }
	}

	pub fn editor(&self) -> EditorId {
		self.inner.editor()
	}

	pub fn document(&self) -> DocumentId {
		self.inner.document()
	}

	pub fn history(&self) -> &dyn HistoryAccess {
		self.inner.history()
	}

	pub fn macro_ops(&self) -> &dyn MacroAccess {
		self.inner.macro_ops()
	}

	pub fn undo_ops(&self) -> &dyn UndoAccess {
		self.inner.undo_ops()
	}

	pub fn dispatch(&self) -> &dyn DispatchAccess {
		self.inner.dispatch()
	}
}
