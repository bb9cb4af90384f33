//! Command descriptor registry for the history and macro layer.
//!
//! Commands are registered once as immutable [`CommandDescriptor`]s and shared
//! by `Arc`. History entries reference descriptors; they never copy them.
//! Handlers run against a [`CommandContext`], which exposes the editor-side
//! capabilities ([`HistoryAccess`], [`MacroAccess`], [`UndoAccess`],
//! [`DispatchAccess`]) without depending on the engine that implements them.

pub mod builtins;
mod descriptor;
pub mod editor_ctx;
mod entry;
mod error;
mod index;
mod state;

pub use builtins::register_builtins;
pub use descriptor::{CommandDescriptor, CommandHandler, CommandOutcome, CommandResult, HandlerFn, KeyBinding};
pub use editor_ctx::{
	CommandContext, DispatchAccess, EditorCapabilities, HistoryAccess, MacroAccess, RecordStart, RecordedMacro, StoredMacro,
	UndoAccess,
};
pub use entry::HistoryEntry;
pub use error::{CommandError, RegistryError};
pub use index::CommandRegistry;
pub use reprise_primitives::{CommandFlag, CommandFlags, DocumentId, EditorId, HistoryFilter};
pub use state::CommandState;
