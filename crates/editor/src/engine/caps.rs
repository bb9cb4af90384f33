use reprise_primitives::{BoxFutureLocal, DocumentId, EditorId, HistoryFilter};
use reprise_registry::{
	CommandError, CommandState, DispatchAccess, EditorCapabilities, HistoryAccess, HistoryEntry, MacroAccess, RecordStart,
	RecordedMacro, StoredMacro, UndoAccess,
};

use super::Core;

/// Capability provider handed to handlers for one execution.
pub(crate) struct EditorCaps<'a> {
	core: &'a Core,
	editor: EditorId,
	document: DocumentId,
}

impl<'a> EditorCaps<'a> {
	pub(crate) fn new(core: &'a Core, editor: EditorId, document: DocumentId) -> Self {
		Self { core, editor, document }
	}
}

impl HistoryAccess for EditorCaps<'_> {
	fn find_last(&self, filter: HistoryFilter) -> Option<HistoryEntry> {
		let history = self.core.history.get(self.document)?;
		let entry = history.lock().find_last(filter).cloned();
		entry
	}
}

impl MacroAccess for EditorCaps<'_> {
	fn start_recording(&self, register: Option<char>) -> RecordStart {
		self.core.start_recording(self.editor, self.document, register)
	}

	fn stop_recording(&self) -> Option<RecordedMacro> {
		self.core.stop_recording(self.editor)
	}

	fn is_recording(&self) -> bool {
		self.core.is_recording(self.editor)
	}

	fn stored_macro(&self, register: Option<char>) -> Option<StoredMacro> {
		self.core.stored_macro(self.editor, register)
	}
}

impl UndoAccess for EditorCaps<'_> {
	fn undo(&self) -> BoxFutureLocal<'_, Result<(), CommandError>> {
		self.core.host.undo(self.editor)
	}

	fn redo(&self) -> BoxFutureLocal<'_, Result<(), CommandError>> {
		self.core.host.redo(self.editor)
	}
}

impl DispatchAccess for EditorCaps<'_> {
	fn execute(&self, entry: HistoryEntry) -> BoxFutureLocal<'_, Result<CommandState, CommandError>> {
		self.core.run(self.editor, self.document, entry)
	}
}

impl EditorCapabilities for EditorCaps<'_> {
	fn editor(&self) -> EditorId {
		self.editor
	}

	fn document(&self) -> DocumentId {
		self.document
	}

	fn history(&self) -> &dyn HistoryAccess {
		self
	}

	fn macro_ops(&self) -> &dyn MacroAccess {
		self
	}

	fn undo_ops(&self) -> &dyn UndoAccess {
		self
	}

	fn dispatch(&self) -> &dyn DispatchAccess {
		self
	}
}
