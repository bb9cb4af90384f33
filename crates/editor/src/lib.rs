//! Command history, repeat and macro engine.
//!
//! Every command runs through [`Core::dispatch`], the single write path into
//! the per-document [`DocumentHistory`]. The repeat commands and the macro
//! recorder only read that history; macro playback produces new dispatches
//! that re-enter the same path.
//!
//! # Architecture
//!
//! ```text
//! Core
//! ┌──────────────────────┐   run(entry)    ┌────────────────────────┐
//! │ CommandRegistry      │────────────────►│ CommandHandler         │
//! │ HistoryDirectory     │                 │  (CommandContext over  │
//! │ RegisterStore        │◄────────────────│   EditorCaps)          │
//! │ RecordingSessions    │  append/query   └────────────────────────┘
//! │ DocumentLanes        │
//! │ ActivePlayback       │
//! │ Host (undo/redo)     │
//! └──────────────────────┘
//! ```

pub mod config;
mod engine;
pub mod history;
pub mod host;
pub mod lane;
pub mod playback;
pub mod recorder;
pub mod registers;

pub use config::{Config, ConfigError, HistoryConfig, RegisterConfig};
pub use engine::Core;
pub use history::{DocumentHistory, HistoryDirectory, SharedHistory};
pub use host::{Host, NoopHost};
pub use lane::{DocumentLanes, LaneGuard};
pub use playback::{ActivePlayback, PlaybackGuard};
pub use recorder::{RecordingSession, RecordingSessions};
pub use registers::{DEFAULT_REGISTER, Register, RegisterKind, RegisterStore};
pub use reprise_primitives::{CommandFlags, DocumentId, EditorId, HistoryFilter};
pub use reprise_registry::{
	CommandDescriptor, CommandError, CommandOutcome, CommandRegistry, CommandState, HistoryEntry, RecordStart, RecordedMacro,
	StoredMacro,
};
