use reprise_primitives::{BoxFutureLocal, HistoryFilter};

use crate::{CommandError, CommandState, HistoryEntry};

/// Read access to the active document's history.
pub trait HistoryAccess {
	/// Returns the most recent entry matching `filter`.
	///
	/// Scans backward from the newest entry and stops at the first match.
	fn find_last(&self, filter: HistoryFilter) -> Option<HistoryEntry>;
}

/// Result of a start-recording request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordStart {
	/// A new session started at history index `start`.
	Started { register: char, start: usize },
	/// The editor is already recording; the existing session is untouched.
	AlreadyRecording,
	/// The resolved register cannot hold macros.
	Unsupported { register: char },
}

/// A macro stored by a stop-recording request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordedMacro {
	/// Register the macro was written to.
	pub register: char,
	/// Number of commands captured.
	pub len: usize,
}

/// A macro ready to be played.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredMacro {
	/// Register the macro was read from.
	pub register: char,
	/// Commands to execute, in recorded order.
	pub commands: Vec<HistoryEntry>,
}

/// Macro recording and macro register access.
///
/// Register arguments follow the shared resolution rule: an explicit register
/// if one is selected, otherwise the default register.
pub trait MacroAccess {
	/// Starts recording into the resolved register.
	fn start_recording(&self, register: Option<char>) -> RecordStart;

	/// Stops recording and stores the captured slice. `None` if not recording.
	fn stop_recording(&self) -> Option<RecordedMacro>;

	/// Returns true if the editor has an active recording session.
	fn is_recording(&self) -> bool;

	/// Returns the non-empty macro stored in the resolved register.
	///
	/// `None` while that register is already being played in this editor,
	/// so a macro can never replay itself.
	fn stored_macro(&self, register: Option<char>) -> Option<StoredMacro>;
}

/// Native undo/redo delegated to the host editor.
pub trait UndoAccess {
	fn undo(&self) -> BoxFutureLocal<'_, Result<(), CommandError>>;

	fn redo(&self) -> BoxFutureLocal<'_, Result<(), CommandError>>;
}

/// Re-entrant command execution.
pub trait DispatchAccess {
	/// Executes `entry` through the normal dispatch path of the active
	/// document, appending it to history unless its flags say otherwise.
	fn execute(&self, entry: HistoryEntry) -> BoxFutureLocal<'_, Result<CommandState, CommandError>>;
}
