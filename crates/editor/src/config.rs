//! Engine configuration.
//!
//! Parsed from TOML. Every section and key is optional:
//!
//! ```toml
//! [registers]
//! default = "@"
//!
//! [history]
//! forget_closed_documents = true
//! ```

use serde::Deserialize;

use crate::registers::DEFAULT_REGISTER;

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
	/// The TOML source could not be parsed.
	#[error("config parse error: {0}")]
	Parse(#[from] toml::de::Error),

	/// The configured default register does not exist.
	#[error("unknown register: '{0}'")]
	InvalidRegister(char),
}

/// Top-level engine configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
	pub registers: RegisterConfig,
	pub history: HistoryConfig,
}

/// `[registers]` section.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RegisterConfig {
	/// Register used by macro commands when none is selected.
	pub default: char,
}

impl Default for RegisterConfig {
	fn default() -> Self {
		Self {
			default: DEFAULT_REGISTER,
		}
	}
}

/// `[history]` section.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HistoryConfig {
	/// Drop a document's history when the document closes.
	pub forget_closed_documents: bool,
}

impl Default for HistoryConfig {
	fn default() -> Self {
		Self {
			forget_closed_documents: true,
		}
	}
}

impl Config {
	/// Parses a configuration from TOML source.
	pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
		Ok(toml::from_str(source)?)
	}
}
