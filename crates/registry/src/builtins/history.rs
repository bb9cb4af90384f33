//! Undo/redo delegation and the repeat family.

use reprise_primitives::{BoxFutureLocal, CommandFlags, HistoryFilter};
use tracing::debug;

use super::keys::*;
use crate::{CommandContext, CommandError, CommandOutcome, CommandResult, CommandState, KeyBinding};

const EDIT_AND_SELECT_UNRECORDED: CommandFlags = CommandFlags::EDIT
	.union(CommandFlags::CHANGE_SELECTIONS)
	.union(CommandFlags::IGNORE_IN_HISTORY);

command!(
	UNDO,
	HISTORY_UNDO,
	"Undo",
	"Undo the last change using the host editor's undo stack.",
	flags: EDIT_AND_SELECT_UNRECORDED,
	bindings: &[KeyBinding::normal("u")],
	undo
);

command!(
	REDO,
	HISTORY_REDO,
	"Redo",
	"Redo the last undone change using the host editor's undo stack.",
	flags: EDIT_AND_SELECT_UNRECORDED,
	bindings: &[KeyBinding::normal("Shift+u")],
	redo
);

command!(
	REPEAT,
	HISTORY_REPEAT,
	"Repeat last change",
	"Re-execute the most recent command recorded for this document.",
	flags: EDIT_AND_SELECT_UNRECORDED,
	bindings: &[KeyBinding::normal(".")],
	repeat
);

command!(
	REPEAT_SELECTION,
	HISTORY_REPEAT_SELECTION,
	"Repeat last selection change",
	"Re-execute the most recent command that changed selections without editing.",
	flags: CommandFlags::CHANGE_SELECTIONS.union(CommandFlags::IGNORE_IN_HISTORY),
	bindings: &[KeyBinding::normal("Alt+.")],
	repeat_selection
);

command!(
	REPEAT_EDIT,
	HISTORY_REPEAT_EDIT,
	"Repeat last edit",
	"Re-execute the most recent command that edited text.",
	flags: CommandFlags::EDIT.union(CommandFlags::IGNORE_IN_HISTORY),
	bindings: &[],
	repeat_edit
);

fn undo<'a>(cx: &'a CommandContext<'a>, state: CommandState) -> BoxFutureLocal<'a, CommandResult> {
	Box::pin(async move {
		cx.undo_ops().undo().await?;
		Ok::<_, CommandError>(CommandOutcome::Done(state))
	})
}

fn redo<'a>(cx: &'a CommandContext<'a>, state: CommandState) -> BoxFutureLocal<'a, CommandResult> {
	Box::pin(async move {
		cx.undo_ops().redo().await?;
		Ok::<_, CommandError>(CommandOutcome::Done(state))
	})
}

fn repeat<'a>(cx: &'a CommandContext<'a>, state: CommandState) -> BoxFutureLocal<'a, CommandResult> {
	Box::pin(repeat_matching(cx, state, HistoryFilter::Any))
}

fn repeat_selection<'a>(cx: &'a CommandContext<'a>, state: CommandState) -> BoxFutureLocal<'a, CommandResult> {
	Box::pin(repeat_matching(cx, state, HistoryFilter::SelectionChange))
}

fn repeat_edit<'a>(cx: &'a CommandContext<'a>, state: CommandState) -> BoxFutureLocal<'a, CommandResult> {
	Box::pin(repeat_matching(cx, state, HistoryFilter::Edit))
}

/// Re-executes the newest history entry accepted by `filter`, if any.
async fn repeat_matching(cx: &CommandContext<'_>, state: CommandState, filter: HistoryFilter) -> CommandResult {
	match cx.history().find_last(filter) {
		Some(entry) => {
			debug!(command = entry.id(), ?filter, "repeating command");
			cx.dispatch().execute(entry).await?;
		}
		None => debug!(?filter, "nothing to repeat"),
	}
	Ok(CommandOutcome::Done(state))
}
