use std::sync::Arc;

use crate::{CommandDescriptor, CommandState};

/// A recorded `(descriptor, state)` pair.
///
/// Entries exist in a document history only for executions whose descriptor
/// does not carry [`CommandFlags::IGNORE_IN_HISTORY`]. Macros are stored as
/// plain sequences of entries.
///
/// [`CommandFlags::IGNORE_IN_HISTORY`]: crate::CommandFlags::IGNORE_IN_HISTORY
#[derive(Debug, Clone)]
pub struct HistoryEntry {
	/// The executed command, shared with the registry.
	pub descriptor: Arc<CommandDescriptor>,
	/// State the command produced.
	pub state: CommandState,
}

impl HistoryEntry {
	pub fn new(descriptor: Arc<CommandDescriptor>, state: CommandState) -> Self {
		Self { descriptor, state }
	}

	/// Id of the recorded command.
	pub fn id(&self) -> &'static str {
		self.descriptor.id
	}
}

/// Entries are equal when they reference the same registered descriptor with
/// equal state.
impl PartialEq for HistoryEntry {
	fn eq(&self, other: &Self) -> bool {
		Arc::ptr_eq(&self.descriptor, &other.descriptor) && self.state == other.state
	}
}

impl Eq for HistoryEntry {}
