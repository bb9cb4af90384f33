use std::sync::Arc;

use rustc_hash::FxHashMap;
use tracing::trace;

use crate::{CommandDescriptor, RegistryError};

/// Lookup table from command id to descriptor.
///
/// Descriptors are immutable once registered. Iteration follows registration
/// order.
#[derive(Debug, Default)]
pub struct CommandRegistry {
	by_id: FxHashMap<&'static str, Arc<CommandDescriptor>>,
	order: Vec<Arc<CommandDescriptor>>,
}

impl CommandRegistry {
	pub fn new() -> Self {
		Self::default()
	}

	/// Registers a descriptor, returning the shared handle history entries use.
	pub fn register(&mut self, descriptor: CommandDescriptor) -> Result<Arc<CommandDescriptor>, RegistryError> {
		if self.by_id.contains_key(descriptor.id) {
			return Err(RegistryError::DuplicateId { id: descriptor.id });
		}
		trace!(command = descriptor.id, flags = ?descriptor.flags, "registered command");
		let descriptor = Arc::new(descriptor);
		self.by_id.insert(descriptor.id, descriptor.clone());
		self.order.push(descriptor.clone());
		Ok(descriptor)
	}

	/// Looks up a descriptor by id.
	pub fn lookup(&self, id: &str) -> Option<Arc<CommandDescriptor>> {
		self.by_id.get(id).cloned()
	}

	/// Iterates over descriptors in registration order.
	pub fn iter(&self) -> impl Iterator<Item = &Arc<CommandDescriptor>> {
		self.order.iter()
	}

	pub fn len(&self) -> usize {
		self.order.len()
	}

	pub fn is_empty(&self) -> bool {
		self.order.is_empty()
	}
}
