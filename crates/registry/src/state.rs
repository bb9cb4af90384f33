/// Value produced by a command execution and handed back verbatim on replay.
///
/// Repeat and macro playback re-run a command with the exact state it was
/// recorded with, so everything that shaped the original execution lives here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandState {
	/// Repeat count (e.g., `3j` has count=3).
	pub count: usize,
	/// Register selected when the command ran, if any.
	pub register: Option<char>,
	/// Typed input consumed by the command (a character, a search string).
	pub input: Option<String>,
}

impl Default for CommandState {
	fn default() -> Self {
		Self {
			count: 1,
			register: None,
			input: None,
		}
	}
}

impl CommandState {
	/// Creates a state with count 1, no register and no input.
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets the repeat count.
	pub fn with_count(mut self, count: usize) -> Self {
		self.count = count;
		self
	}

	/// Selects a register.
	pub fn with_register(mut self, register: char) -> Self {
		self.register = Some(register);
		self
	}

	/// Attaches typed input.
	pub fn with_input(mut self, input: impl Into<String>) -> Self {
		self.input = Some(input.into());
		self
	}
}
