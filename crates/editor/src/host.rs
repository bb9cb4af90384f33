//! Host editor operations the engine delegates to.

use reprise_primitives::{BoxFutureLocal, EditorId};
use reprise_registry::CommandError;

/// Native operations of the editor hosting the keybinding layer.
pub trait Host {
	/// Runs the host's undo in `editor`.
	fn undo(&self, editor: EditorId) -> BoxFutureLocal<'_, Result<(), CommandError>>;

	/// Runs the host's redo in `editor`.
	fn redo(&self, editor: EditorId) -> BoxFutureLocal<'_, Result<(), CommandError>>;
}

/// Host without undo support. Undo and redo succeed and do nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopHost;

impl Host for NoopHost {
	fn undo(&self, _editor: EditorId) -> BoxFutureLocal<'_, Result<(), CommandError>> {
		Box::pin(async { Ok::<_, CommandError>(()) })
	}

	fn redo(&self, _editor: EditorId) -> BoxFutureLocal<'_, Result<(), CommandError>> {
		Box::pin(async { Ok::<_, CommandError>(()) })
	}
}
