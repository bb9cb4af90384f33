//! Per-editor macro recording sessions.
//!
//! A session remembers which register to fill and the history index at
//! which recording started. The engine owns the transitions:
//!
//! ```text
//!          start (macro-capable register)
//!   Idle ──────────────────────────────────► Recording(register, start)
//!    ▲                                           │  start: ignored
//!    └───────────────────────────────────────────┘
//!          stop: history[start..] → register
//! ```
//!
//! Sessions are dropped on stop and when their editor closes.

use parking_lot::Mutex;
use reprise_primitives::{DocumentId, EditorId};
use reprise_registry::RecordStart;
use rustc_hash::FxHashMap;
use tracing::debug;

/// An active recording.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordingSession {
	/// Register the macro is written to on stop.
	pub register: char,
	/// Document whose history is being sliced.
	pub document: DocumentId,
	/// History length when recording started.
	pub start: usize,
}

/// Recording sessions keyed by editor. At most one per editor.
#[derive(Debug, Default)]
pub struct RecordingSessions {
	sessions: Mutex<FxHashMap<EditorId, RecordingSession>>,
}

impl RecordingSessions {
	pub fn new() -> Self {
		Self::default()
	}

	/// Begins `session` for `editor` unless one is already active.
	///
	/// An active session is left untouched, including its start index.
	pub fn start(&self, editor: EditorId, session: RecordingSession) -> RecordStart {
		let mut sessions = self.sessions.lock();
		if sessions.contains_key(&editor) {
			return RecordStart::AlreadyRecording;
		}
		sessions.insert(editor, session);
		RecordStart::Started {
			register: session.register,
			start: session.start,
		}
	}

	/// Ends and returns the session of `editor`, if any.
	pub fn stop(&self, editor: EditorId) -> Option<RecordingSession> {
		self.sessions.lock().remove(&editor)
	}

	/// Discards the session of a closed editor without storing anything.
	pub fn editor_closed(&self, editor: EditorId) -> bool {
		let dropped = self.stop(editor);
		if let Some(session) = dropped {
			debug!(editor = editor.0, register = %session.register, "discarded recording of closed editor");
		}
		dropped.is_some()
	}

	pub fn is_recording(&self, editor: EditorId) -> bool {
		self.sessions.lock().contains_key(&editor)
	}

	/// The active session of `editor`.
	pub fn session(&self, editor: EditorId) -> Option<RecordingSession> {
		self.sessions.lock().get(&editor).copied()
	}

	/// Register `editor` is recording into.
	pub fn register_of(&self, editor: EditorId) -> Option<char> {
		self.session(editor).map(|session| session.register)
	}

	/// Number of active sessions.
	pub fn len(&self) -> usize {
		self.sessions.lock().len()
	}

	pub fn is_empty(&self) -> bool {
		self.sessions.lock().is_empty()
	}
}
