//! Registers currently being played, per editor.
//!
//! Playback nests: a macro may contain `macros.play` for another register.
//! Each editor keeps a stack of the registers whose batches are running, and
//! a register already on the stack is never entered again. This bounds
//! playback depth by the number of macro registers, including for macros
//! that recorded their own playback.

use parking_lot::Mutex;
use reprise_primitives::EditorId;
use rustc_hash::FxHashMap;

/// Playback stacks keyed by editor.
#[derive(Debug, Default)]
pub struct ActivePlayback {
	stacks: Mutex<FxHashMap<EditorId, Vec<char>>>,
}

/// Marks a register as playing until dropped.
#[derive(Debug)]
pub struct PlaybackGuard<'a> {
	owner: &'a ActivePlayback,
	editor: EditorId,
}

impl ActivePlayback {
	pub fn new() -> Self {
		Self::default()
	}

	/// Pushes `register` onto the playback stack of `editor`.
	pub fn enter(&self, editor: EditorId, register: char) -> PlaybackGuard<'_> {
		self.stacks.lock().entry(editor).or_default().push(register);
		PlaybackGuard { owner: self, editor }
	}

	/// Returns true if `register` is being played in `editor`.
	pub fn is_playing(&self, editor: EditorId, register: char) -> bool {
		self.stacks.lock().get(&editor).is_some_and(|stack| stack.contains(&register))
	}

	/// Number of nested playbacks running in `editor`.
	pub fn depth(&self, editor: EditorId) -> usize {
		self.stacks.lock().get(&editor).map_or(0, Vec::len)
	}
}

impl Drop for PlaybackGuard<'_> {
	fn drop(&mut self) {
		let mut stacks = self.owner.stacks.lock();
		if let Some(stack) = stacks.get_mut(&self.editor) {
			stack.pop();
			if stack.is_empty() {
				stacks.remove(&self.editor);
			}
		}
	}
}
