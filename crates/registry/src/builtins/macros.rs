//! Macro recording and playback commands.

use reprise_primitives::{BoxFutureLocal, CommandFlags};
use tracing::debug;

use super::keys::*;
use crate::{CommandContext, CommandError, CommandOutcome, CommandResult, CommandState, KeyBinding};

command!(
	RECORD_START,
	MACROS_RECORD_START,
	"Start recording macro",
	"Start recording commands into the selected register (default `@`).",
	flags: CommandFlags::IGNORE_IN_HISTORY,
	bindings: &[KeyBinding::normal("Shift+q")],
	record_start
);

command!(
	RECORD_STOP,
	MACROS_RECORD_STOP,
	"Stop recording macro",
	"Stop recording and store the recorded commands in the register.",
	flags: CommandFlags::IGNORE_IN_HISTORY,
	bindings: &[KeyBinding {
		key: "Escape",
		when: KeyBinding::RECORDING,
	}],
	record_stop
);

command!(
	PLAY,
	MACROS_PLAY,
	"Play macro",
	"Execute the commands stored in the selected register (default `@`).",
	flags: CommandFlags::EDIT.union(CommandFlags::CHANGE_SELECTIONS),
	bindings: &[KeyBinding::normal("q")],
	play
);

fn record_start<'a>(cx: &'a CommandContext<'a>, state: CommandState) -> BoxFutureLocal<'a, CommandResult> {
	Box::pin(async move {
		cx.macro_ops().start_recording(state.register);
		Ok::<_, CommandError>(CommandOutcome::Done(state))
	})
}

fn record_stop<'a>(cx: &'a CommandContext<'a>, state: CommandState) -> BoxFutureLocal<'a, CommandResult> {
	Box::pin(async move {
		if !cx.macro_ops().is_recording() {
			debug!(editor = cx.editor().0, "no macro recording to stop");
			return Ok::<_, CommandError>(CommandOutcome::Done(state));
		}
		cx.macro_ops().stop_recording();
		Ok::<_, CommandError>(CommandOutcome::Done(state))
	})
}

/// Schedules the stored macro as a batch that runs after this command is
/// recorded, so the macro's own commands follow it in history.
fn play<'a>(cx: &'a CommandContext<'a>, state: CommandState) -> BoxFutureLocal<'a, CommandResult> {
	Box::pin(async move {
		let outcome = match cx.macro_ops().stored_macro(state.register) {
			Some(stored) => CommandOutcome::Play {
				state,
				register: stored.register,
				batch: stored.commands,
			},
			None => CommandOutcome::Done(state),
		};
		Ok::<_, CommandError>(outcome)
	})
}
