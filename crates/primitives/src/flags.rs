/// A side-effect category a command declares at registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandFlag {
	/// The command moves or replaces selections.
	ChangeSelections,
	/// The command modifies document text.
	Edit,
	/// The command is never appended to a document's history.
	IgnoreInHistory,
}

bitflags::bitflags! {
	/// A set of command side-effect flags.
	#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
	pub struct CommandFlags: u32 {
		/// The command moves or replaces selections.
		const CHANGE_SELECTIONS = 1 << 0;
		/// The command modifies document text.
		const EDIT = 1 << 1;
		/// The command is never appended to a document's history.
		const IGNORE_IN_HISTORY = 1 << 2;
	}
}

impl CommandFlag {
	/// Returns the bitflag for this flag.
	pub const fn as_set(self) -> CommandFlags {
		match self {
			Self::ChangeSelections => CommandFlags::CHANGE_SELECTIONS,
			Self::Edit => CommandFlags::EDIT,
			Self::IgnoreInHistory => CommandFlags::IGNORE_IN_HISTORY,
		}
	}
}

impl From<CommandFlag> for CommandFlags {
	fn from(flag: CommandFlag) -> Self {
		flag.as_set()
	}
}

impl FromIterator<CommandFlag> for CommandFlags {
	fn from_iter<I: IntoIterator<Item = CommandFlag>>(iter: I) -> Self {
		let mut set = CommandFlags::empty();
		for flag in iter {
			set |= flag.as_set();
		}
		set
	}
}

impl CommandFlags {
	/// Returns true if an execution carrying these flags belongs in history.
	pub fn is_recorded(self) -> bool {
		!self.contains(Self::IGNORE_IN_HISTORY)
	}

	/// Returns true for pure selection changes (selections move, text does not).
	pub fn is_selection_change(self) -> bool {
		self.contains(Self::CHANGE_SELECTIONS) && !self.contains(Self::EDIT)
	}

	/// Returns true if the command modifies text.
	pub fn is_edit(self) -> bool {
		self.contains(Self::EDIT)
	}
}

/// Predicate used by the repeat family to pick an entry out of history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HistoryFilter {
	/// Any recorded entry.
	Any,
	/// Entries that change selections without editing.
	SelectionChange,
	/// Entries that edit text.
	Edit,
}

impl HistoryFilter {
	/// Returns true if a command with `flags` satisfies this filter.
	pub fn matches(self, flags: CommandFlags) -> bool {
		match self {
			Self::Any => true,
			Self::SelectionChange => flags.is_selection_change(),
			Self::Edit => flags.is_edit(),
		}
	}
}
