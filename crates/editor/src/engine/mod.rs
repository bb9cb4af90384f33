//! The engine context object.
//!
//! [`Core`] bundles every piece of process-wide state the history layer
//! needs. It is constructed once at startup and passed by reference to every
//! dispatch; there is no ambient global state.

use std::sync::Arc;

use parking_lot::{Mutex, MutexGuard};
use reprise_primitives::{DocumentId, EditorId};
use reprise_registry::CommandRegistry;
use tracing::debug;

use crate::{
	ActivePlayback, Config, ConfigError, DocumentLanes, HistoryDirectory, Host, NoopHost, RecordingSessions, RegisterStore,
};

mod caps;
mod dispatch;
mod macros;


/// Command history, register and recording state shared by all dispatches.
pub struct Core {
	registry: Arc<CommandRegistry>,
	history: HistoryDirectory,
	registers: Mutex<RegisterStore>,
	recorder: RecordingSessions,
	playback: ActivePlayback,
	lanes: DocumentLanes,
	host: Box<dyn Host>,
	config: Config,
}

impl Core {
	/// Creates an engine with the default configuration.
	pub fn new(registry: Arc<CommandRegistry>, host: impl Host + 'static) -> Self {
		Self {
			registry,
			history: HistoryDirectory::new(),
			registers: Mutex::new(RegisterStore::with_defaults()),
			recorder: RecordingSessions::new(),
			playback: ActivePlayback::new(),
			lanes: DocumentLanes::new(),
			host: Box::new(host),
			config: Config::default(),
		}
	}

	/// Creates an engine and applies `config`.
	pub fn with_config(registry: Arc<CommandRegistry>, host: impl Host + 'static, config: Config) -> Result<Self, ConfigError> {
		let mut core = Self::new(registry, host);
		core.registers.get_mut().set_default(config.registers.default)?;
		core.config = config;
		Ok(core)
	}

	/// Creates an engine whose host has no undo support.
	pub fn without_host(registry: Arc<CommandRegistry>) -> Self {
		Self::new(registry, NoopHost)
	}

	pub fn registry(&self) -> &CommandRegistry {
		&self.registry
	}

	pub fn history(&self) -> &HistoryDirectory {
		&self.history
	}

	/// Locks the register store. Do not hold the guard across an await.
	pub fn registers(&self) -> MutexGuard<'_, RegisterStore> {
		self.registers.lock()
	}

	pub fn recorder(&self) -> &RecordingSessions {
		&self.recorder
	}

	pub fn playback(&self) -> &ActivePlayback {
		&self.playback
	}

	pub fn lanes(&self) -> &DocumentLanes {
		&self.lanes
	}

	pub fn config(&self) -> &Config {
		&self.config
	}

	/// Handles the host's editor-closed notification.
	///
	/// Any recording in progress for `editor` is discarded.
	pub fn editor_closed(&self, editor: EditorId) {
		self.recorder.editor_closed(editor);
	}

	/// Handles the host's document-closed notification.
	pub fn document_closed(&self, document: DocumentId) {
		if !self.config.history.forget_closed_documents {
			debug!(document = document.0, "keeping history of closed document");
			return;
		}
		self.history.forget(document);
		self.lanes.forget(document);
	}
}
