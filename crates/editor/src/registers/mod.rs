//! Named registers, some of which can hold macros.
//!
//! Whether a register can store a macro is part of its type
//! ([`RegisterKind`]), checked explicitly through
//! [`Register::supports_macros`].

use reprise_registry::HistoryEntry;
use rustc_hash::FxHashMap;

use crate::ConfigError;

/// Name of the register used when none is selected.
pub const DEFAULT_REGISTER: char = '@';

/// Storage capability of a register.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum RegisterKind {
	/// Holds text values only.
	#[default]
	Plain,
	/// Can additionally hold a recorded macro (`None` until one is stored).
	Macro(Option<Vec<HistoryEntry>>),
}

/// A named storage slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Register {
	name: char,
	/// Text values, one per selection.
	values: Vec<String>,
	kind: RegisterKind,
}

impl Register {
	/// Creates a register that only stores text.
	pub fn plain(name: char) -> Self {
		Self {
			name,
			values: Vec::new(),
			kind: RegisterKind::Plain,
		}
	}

	/// Creates a register that can also store a macro.
	pub fn with_macro(name: char) -> Self {
		Self {
			name,
			values: Vec::new(),
			kind: RegisterKind::Macro(None),
		}
	}

	pub fn name(&self) -> char {
		self.name
	}

	pub fn kind(&self) -> &RegisterKind {
		&self.kind
	}

	/// Returns true if this register can store a macro.
	pub fn supports_macros(&self) -> bool {
		matches!(self.kind, RegisterKind::Macro(_))
	}

	/// Stores `commands` as this register's macro.
	///
	/// Returns false, storing nothing, if the register is plain.
	pub fn set_macro(&mut self, commands: Vec<HistoryEntry>) -> bool {
		match &mut self.kind {
			RegisterKind::Macro(slot) => {
				*slot = Some(commands);
				true
			}
			RegisterKind::Plain => false,
		}
	}

	/// The stored macro, if this register holds one.
	pub fn macro_commands(&self) -> Option<&[HistoryEntry]> {
		match &self.kind {
			RegisterKind::Macro(Some(commands)) => Some(commands),
			_ => None,
		}
	}

	pub fn values(&self) -> &[String] {
		&self.values
	}

	pub fn set_values(&mut self, values: Vec<String>) {
		self.values = values;
	}
}

/// Register table with a well-known default register.
///
/// The default register always exists; [`RegisterStore::set_default`]
/// refuses names that are not in the table.
#[derive(Debug, Clone)]
pub struct RegisterStore {
	registers: FxHashMap<char, Register>,
	default: char,
}

impl Default for RegisterStore {
	fn default() -> Self {
		Self::with_defaults()
	}
}

impl RegisterStore {
	/// Creates the standard register set.
	///
	/// * `"` yank, `/` search, `_` null, `^` and `|`: plain.
	/// * `@` (the default) and `a` to `z`: macro-capable.
	pub fn with_defaults() -> Self {
		let mut registers = FxHashMap::default();
		for name in ['"', '/', '_', '^', '|'] {
			registers.insert(name, Register::plain(name));
		}
		for name in std::iter::once(DEFAULT_REGISTER).chain('a'..='z') {
			registers.insert(name, Register::with_macro(name));
		}
		Self {
			registers,
			default: DEFAULT_REGISTER,
		}
	}

	/// Adds or replaces a register.
	pub fn insert(&mut self, register: Register) -> Option<Register> {
		self.registers.insert(register.name, register)
	}

	pub fn get(&self, name: char) -> Option<&Register> {
		self.registers.get(&name)
	}

	pub fn get_mut(&mut self, name: char) -> Option<&mut Register> {
		self.registers.get_mut(&name)
	}

	/// Name of the default register.
	pub fn default_register(&self) -> char {
		self.default
	}

	/// Changes the default register.
	pub fn set_default(&mut self, name: char) -> Result<(), ConfigError> {
		if !self.registers.contains_key(&name) {
			return Err(ConfigError::InvalidRegister(name));
		}
		self.default = name;
		Ok(())
	}

	/// Resolves the register a macro command should use.
	///
	/// Prefers `selected` when it names an existing register and falls back
	/// to the default register otherwise. Never fails; callers check
	/// [`Register::supports_macros`] themselves.
	pub fn resolve(&self, selected: Option<char>) -> &Register {
		selected
			.and_then(|name| self.registers.get(&name))
			.unwrap_or_else(|| &self.registers[&self.default])
	}

	/// Stores a macro in the register named `name`.
	///
	/// Returns false if no such register exists or it is plain.
	pub fn set_macro(&mut self, name: char, commands: Vec<HistoryEntry>) -> bool {
		self.registers
			.get_mut(&name)
			.is_some_and(|register| register.set_macro(commands))
	}
}
