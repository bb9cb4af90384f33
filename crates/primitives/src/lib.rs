//! Core types shared by the command registry and the history engine.

/// Command side-effect flags and history filters.
pub mod flags;
/// Async future aliases.
pub mod future;
/// Identifier types for documents and editors.
pub mod ids;

pub use flags::{CommandFlag, CommandFlags, HistoryFilter};
pub use future::BoxFutureLocal;
pub use ids::{DocumentId, EditorId};
