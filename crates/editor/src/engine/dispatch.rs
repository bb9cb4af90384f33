//! The dispatch choke point.

use std::sync::Arc;

use reprise_primitives::{BoxFutureLocal, DocumentId, EditorId};
use reprise_registry::{CommandContext, CommandDescriptor, CommandError, CommandOutcome, CommandState, HistoryEntry};
use tracing::{debug, trace, warn};

use super::Core;
use super::caps::EditorCaps;

impl Core {
	/// Looks up `id` and executes it against `document` in `editor`.
	///
	/// Waits for the document's lane, so dispatches on one document complete
	/// in the order they were started.
	pub async fn dispatch(&self, editor: EditorId, document: DocumentId, id: &str, state: CommandState) -> Result<CommandState, CommandError> {
		let descriptor = self
			.registry
			.lookup(id)
			.ok_or_else(|| CommandError::UnknownCommand(id.to_string()))?;
		self.execute(editor, document, descriptor, state).await
	}

	/// Executes a resolved descriptor with `state`.
	pub async fn execute(
		&self,
		editor: EditorId,
		document: DocumentId,
		descriptor: Arc<CommandDescriptor>,
		state: CommandState,
	) -> Result<CommandState, CommandError> {
		let _lane = self.lanes.acquire(document).await;
		self.run(editor, document, HistoryEntry::new(descriptor, state)).await
	}

	/// Executes `entries` in order as one batch.
	///
	/// Stops at the first failure and returns it. Entries already executed
	/// stay in history.
	pub async fn execute_many(
		&self,
		editor: EditorId,
		document: DocumentId,
		entries: impl IntoIterator<Item = HistoryEntry>,
	) -> Result<(), CommandError> {
		let _lane = self.lanes.acquire(document).await;
		for entry in entries {
			self.run(editor, document, entry).await?;
		}
		Ok(())
	}

	/// Runs one entry inside a lane that is already held.
	///
	/// This is the only place history is written: after the handler
	/// completes, and only for descriptors without `IGNORE_IN_HISTORY`.
	pub(crate) fn run(&self, editor: EditorId, document: DocumentId, entry: HistoryEntry) -> BoxFutureLocal<'_, Result<CommandState, CommandError>> {
		Box::pin(self.run_entry(editor, document, entry))
	}

	async fn run_entry(&self, editor: EditorId, document: DocumentId, entry: HistoryEntry) -> Result<CommandState, CommandError> {
		let HistoryEntry { descriptor, state } = entry;
		trace!(command = descriptor.id, editor = editor.0, document = document.0, "dispatch");

		let caps = EditorCaps::new(self, editor, document);
		let cx = CommandContext::new(&caps);
		let outcome = descriptor
			.handler
			.run(&cx, state)
			.await
			.inspect_err(|err| warn!(command = descriptor.id, %err, "command failed"))?;
		let (state, playback) = match outcome {
			CommandOutcome::Done(state) => (state, None),
			CommandOutcome::Play { state, register, batch } => (state, Some((register, batch))),
		};

		if descriptor.flags.is_recorded() {
			let history = self.history.for_document(document);
			let len = {
				let mut history = history.lock();
				history.append(HistoryEntry::new(descriptor.clone(), state.clone()));
				history.len()
			};
			debug!(command = descriptor.id, document = document.0, len, "recorded command");
		}

		if let Some((register, batch)) = playback {
			let _playing = self.playback.enter(editor, register);
			debug!(command = descriptor.id, %register, len = batch.len(), "playing macro");
			for entry in batch {
				self.run(editor, document, entry).await?;
			}
		}

		Ok(state)
	}
}
