//! Command descriptor and handler types.

use std::fmt;
use std::sync::Arc;

use reprise_primitives::{BoxFutureLocal, CommandFlags};

use crate::{CommandContext, CommandError, CommandState, HistoryEntry};

/// Result type returned by command handlers.
pub type CommandResult = Result<CommandOutcome, CommandError>;

/// Function signature for plain command handlers.
pub type HandlerFn = for<'a> fn(&'a CommandContext<'a>, CommandState) -> BoxFutureLocal<'a, CommandResult>;

/// Executes a command against an editor.
///
/// Handlers may complete asynchronously. The dispatcher observes completion
/// before it appends anything to history.
pub trait CommandHandler: Send + Sync {
	/// Runs the command with the given state.
	fn run<'a>(&'a self, cx: &'a CommandContext<'a>, state: CommandState) -> BoxFutureLocal<'a, CommandResult>;
}

impl CommandHandler for HandlerFn {
	fn run<'a>(&'a self, cx: &'a CommandContext<'a>, state: CommandState) -> BoxFutureLocal<'a, CommandResult> {
		(*self)(cx, state)
	}
}

/// What a handler produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutcome {
	/// The command finished; `state` is what history records.
	Done(CommandState),
	/// The command finished and plays the macro in `register` right after it.
	///
	/// The dispatcher records the command itself first, then executes the
	/// batch in order on the same document before releasing it. `register`
	/// counts as playing until the batch ends.
	Play {
		/// State recorded for the command itself.
		state: CommandState,
		/// Register the batch was read from.
		register: char,
		/// Entries to execute afterwards.
		batch: Vec<HistoryEntry>,
	},
}

/// A key chord bound to a command, with the context it applies in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyBinding {
	/// Key chord, e.g. `Shift+q`.
	pub key: &'static str,
	/// Context expression the binding is active in.
	pub when: &'static str,
}

impl KeyBinding {
	/// Context expression for normal mode.
	pub const NORMAL: &'static str = "editorTextFocus && reprise.mode == 'normal'";

	/// Context expression for normal mode while a macro is being recorded.
	pub const RECORDING: &'static str = "editorTextFocus && reprise.mode == 'normal' && reprise.recording";

	/// Creates a normal-mode binding.
	pub const fn normal(key: &'static str) -> Self {
		Self { key, when: Self::NORMAL }
	}
}

/// Immutable metadata and handler of a registered command.
///
/// Owned by the [`CommandRegistry`] behind an `Arc`; history entries and
/// macros hold clones of that `Arc`.
///
/// [`CommandRegistry`]: crate::CommandRegistry
pub struct CommandDescriptor {
	/// Unique identifier, e.g. `history.repeat`.
	pub id: &'static str,
	/// Human-readable title.
	pub title: &'static str,
	/// Longer description for palettes and docs.
	pub description: &'static str,
	/// Side-effect flags.
	pub flags: CommandFlags,
	/// Keybindings associated with the command.
	pub bindings: &'static [KeyBinding],
	/// The function that executes this command.
	pub handler: Arc<dyn CommandHandler>,
}

impl CommandDescriptor {
	/// Creates a descriptor with an empty title, description and no bindings.
	pub fn new(id: &'static str, flags: CommandFlags, handler: impl CommandHandler + 'static) -> Self {
		Self {
			id,
			title: "",
			description: "",
			flags,
			bindings: &[],
			handler: Arc::new(handler),
		}
	}

	pub fn with_title(mut self, title: &'static str) -> Self {
		self.title = title;
		self
	}

	pub fn with_description(mut self, description: &'static str) -> Self {
		self.description = description;
		self
	}

	pub fn with_bindings(mut self, bindings: &'static [KeyBinding]) -> Self {
		self.bindings = bindings;
		self
	}
}

impl fmt::Debug for CommandDescriptor {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("CommandDescriptor")
			.field("id", &self.id)
			.field("flags", &self.flags)
			.field("bindings", &self.bindings)
			.finish_non_exhaustive()
	}
}
