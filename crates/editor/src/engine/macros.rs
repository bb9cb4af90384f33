//! Macro recording and lookup.

use reprise_primitives::{DocumentId, EditorId};
use reprise_registry::{RecordStart, RecordedMacro, StoredMacro};
use tracing::{debug, warn};

use super::Core;
use crate::RecordingSession;

impl Core {
	/// Starts recording `editor` into the resolved register.
	///
	/// Does nothing if the register cannot hold macros or the editor is
	/// already recording.
	pub fn start_recording(&self, editor: EditorId, document: DocumentId, register: Option<char>) -> RecordStart {
		let register = {
			let registers = self.registers.lock();
			let resolved = registers.resolve(register);
			if !resolved.supports_macros() {
				debug!(register = %resolved.name(), "register cannot hold macros");
				return RecordStart::Unsupported { register: resolved.name() };
			}
			resolved.name()
		};

		let start = self.history.for_document(document).lock().len();
		let result = self.recorder.start(editor, RecordingSession { register, document, start });
		match result {
			RecordStart::Started { register, start } => {
				debug!(editor = editor.0, %register, start, "macro recording started");
			}
			_ => debug!(editor = editor.0, "macro recording already active"),
		}
		result
	}

	/// Stops recording `editor` and stores everything recorded since the
	/// session started in its register.
	pub fn stop_recording(&self, editor: EditorId) -> Option<RecordedMacro> {
		let Some(session) = self.recorder.stop(editor) else {
			debug!(editor = editor.0, "not recording");
			return None;
		};

		// A document closed mid-recording has no history left to slice.
		let commands = self
			.history
			.get(session.document)
			.map(|history| history.lock().slice_from(session.start).to_vec())
			.unwrap_or_default();
		let len = commands.len();
		if !self.registers.lock().set_macro(session.register, commands) {
			warn!(register = %session.register, "register can no longer hold macros; recording dropped");
			return None;
		}

		debug!(editor = editor.0, register = %session.register, len, "macro recorded");
		Some(RecordedMacro {
			register: session.register,
			len,
		})
	}

	/// Returns the non-empty macro stored in the resolved register.
	///
	/// Refuses a register that `editor` is already playing, so a macro that
	/// recorded its own playback cannot recurse.
	pub fn stored_macro(&self, editor: EditorId, register: Option<char>) -> Option<StoredMacro> {
		let registers = self.registers.lock();
		let resolved = registers.resolve(register);
		if self.playback.is_playing(editor, resolved.name()) {
			debug!(editor = editor.0, register = %resolved.name(), "macro is already playing");
			return None;
		}
		match resolved.macro_commands() {
			Some(commands) if !commands.is_empty() => Some(StoredMacro {
				register: resolved.name(),
				commands: commands.to_vec(),
			}),
			_ => {
				debug!(register = %resolved.name(), "no macro to play");
				None
			}
		}
	}

	/// Returns true if `editor` is recording.
	pub fn is_recording(&self, editor: EditorId) -> bool {
		self.recorder.is_recording(editor)
	}
}
