/// Errors raised while building the command registry.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
	/// Two descriptors have the same id.
	#[error("duplicate command id: {id}")]
	DuplicateId { id: &'static str },
}

/// Errors returned by command handlers and the dispatch path.
///
/// A failure inside a repeat or macro batch stops the batch and propagates
/// to whoever started it. Entries appended before the failure stay in history.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CommandError {
	/// No descriptor is registered under the given id.
	#[error("unknown command: {0}")]
	UnknownCommand(String),

	/// The host editor rejected a delegated operation (undo, redo).
	#[error("host editor error: {0}")]
	Host(String),

	/// The handler itself reported a failure.
	#[error("command failed: {0}")]
	Failed(String),
}
