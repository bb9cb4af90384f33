//! Builtin history and macro commands.
//!
//! Each builtin is a const [`CommandDef`] declared with the [`command!`] macro
//! and turned into a registered [`CommandDescriptor`] by [`register_builtins`].

use reprise_primitives::CommandFlags;

use crate::{CommandDescriptor, CommandRegistry, HandlerFn, KeyBinding, RegistryError};

macro_rules! command {
	($name:ident, $id:expr, $title:expr, $desc:expr, flags: $flags:expr, bindings: $bindings:expr, $handler:expr) => {
		pub(crate) const $name: $crate::builtins::CommandDef = $crate::builtins::CommandDef {
			id: $id,
			title: $title,
			description: $desc,
			flags: $flags,
			bindings: $bindings,
			handler: $handler as $crate::HandlerFn,
		};
	};
}
pub(crate) use command;

mod history;
mod macros;


/// Ids of the builtin commands.
pub mod keys {
	pub const HISTORY_UNDO: &str = "history.undo";
	pub const HISTORY_REDO: &str = "history.redo";
	pub const HISTORY_REPEAT: &str = "history.repeat";
	pub const HISTORY_REPEAT_SELECTION: &str = "history.repeat.selection";
	pub const HISTORY_REPEAT_EDIT: &str = "history.repeat.edit";
	pub const MACROS_RECORD_START: &str = "macros.record.start";
	pub const MACROS_RECORD_STOP: &str = "macros.record.stop";
	pub const MACROS_PLAY: &str = "macros.play";
}

/// Static definition of a builtin command.
#[derive(Clone, Copy)]
pub struct CommandDef {
	pub id: &'static str,
	pub title: &'static str,
	pub description: &'static str,
	pub flags: CommandFlags,
	pub bindings: &'static [KeyBinding],
	pub handler: HandlerFn,
}

impl CommandDef {
	/// Builds the runtime descriptor for this definition.
	pub fn build(&self) -> CommandDescriptor {
		CommandDescriptor::new(self.id, self.flags, self.handler)
			.with_title(self.title)
			.with_description(self.description)
			.with_bindings(self.bindings)
	}
}

/// Every builtin, in registration order.
pub const BUILTINS: &[CommandDef] = &[
	history::UNDO,
	history::REDO,
	history::REPEAT,
	history::REPEAT_SELECTION,
	history::REPEAT_EDIT,
	macros::RECORD_START,
	macros::RECORD_STOP,
	macros::PLAY,
];

/// Registers all builtin commands.
pub fn register_builtins(registry: &mut CommandRegistry) -> Result<(), RegistryError> {
	for def in BUILTINS {
		registry.register(def.build())?;
	}
	Ok(())
}
