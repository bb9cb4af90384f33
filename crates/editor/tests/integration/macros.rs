use reprise_editor::{CommandState, RecordStart};

use crate::common::{DOC, EDITOR, Harness};

#[tokio::test]
async fn records_commands_between_start_and_stop() {
	let h = Harness::new();
	h.run("test.plain").await.unwrap();
	h.run("macros.record.start").await.unwrap();
	assert!(h.core.is_recording(EDITOR));
	h.run("test.edit").await.unwrap();
	h.run("test.ignored").await.unwrap();
	h.run("test.select").await.unwrap();
	h.run("macros.record.stop").await.unwrap();

	assert!(!h.core.is_recording(EDITOR));
	assert_eq!(h.macro_ids('@'), Some(vec!["test.edit", "test.select"]));
	// Taking the macro does not truncate history.
	assert_eq!(h.history_ids(DOC), ["test.plain", "test.edit", "test.select"]);
}

#[tokio::test]
async fn second_start_keeps_the_original_session() {
	let h = Harness::new();
	h.run("macros.record.start").await.unwrap();
	h.run("test.edit").await.unwrap();
	h.run_with("macros.record.start", CommandState::new().with_register('b')).await.unwrap();
	h.run("test.select").await.unwrap();
	h.run("macros.record.stop").await.unwrap();

	assert_eq!(h.macro_ids('@'), Some(vec!["test.edit", "test.select"]));
	assert_eq!(h.macro_ids('b'), None);
	assert_eq!(h.core.start_recording(EDITOR, DOC, None), RecordStart::Started { register: '@', start: 2 });
}

#[tokio::test]
async fn stop_without_start_does_nothing() {
	let h = Harness::new();
	h.run("test.edit").await.unwrap();
	h.run("macros.record.stop").await.unwrap();

	assert_eq!(h.macro_ids('@'), None);
	assert_eq!(h.history_ids(DOC), ["test.edit"]);
}

#[tokio::test]
async fn plain_register_does_not_record() {
	let h = Harness::new();
	h.run_with("macros.record.start", CommandState::new().with_register('"')).await.unwrap();
	assert!(!h.core.is_recording(EDITOR));
	h.run("test.edit").await.unwrap();
	h.run("macros.record.stop").await.unwrap();

	assert_eq!(h.macro_ids('@'), None);
}

#[tokio::test]
async fn explicit_register_is_used_for_record_and_play() {
	let h = Harness::new();
	h.run_with("macros.record.start", CommandState::new().with_register('q')).await.unwrap();
	h.run("test.edit").await.unwrap();
	h.run("macros.record.stop").await.unwrap();
	assert_eq!(h.macro_ids('q'), Some(vec!["test.edit"]));
	assert_eq!(h.macro_ids('@'), None);

	h.clear_calls();
	h.run("macros.play").await.unwrap();
	assert!(h.calls().is_empty());
	h.run_with("macros.play", CommandState::new().with_register('q')).await.unwrap();
	assert_eq!(h.calls(), ["edit:1"]);
}

#[tokio::test]
async fn play_runs_macro_after_recording_itself() {
	let h = Harness::new();
	h.run("macros.record.start").await.unwrap();
	h.run_with("test.edit", CommandState::new().with_count(2)).await.unwrap();
	h.run("test.select").await.unwrap();
	h.run("macros.record.stop").await.unwrap();
	h.clear_calls();

	h.run("macros.play").await.unwrap();
	assert_eq!(h.calls(), ["edit:2", "select:1"]);
	assert_eq!(
		h.history_ids(DOC),
		["test.edit", "test.select", "macros.play", "test.edit", "test.select"]
	);

	h.clear_calls();
	h.run("history.repeat.edit").await.unwrap();
	assert_eq!(h.calls(), ["edit:2"]);
}

#[tokio::test]
async fn repeat_after_play_replays_last_macro_command() {
	let h = Harness::new();
	h.run("macros.record.start").await.unwrap();
	h.run("test.select").await.unwrap();
	h.run("test.both").await.unwrap();
	h.run("macros.record.stop").await.unwrap();
	h.run("macros.play").await.unwrap();
	h.clear_calls();

	h.run("history.repeat").await.unwrap();
	assert_eq!(h.calls(), ["both:1"]);
}

#[tokio::test]
async fn play_without_macro_is_recorded_but_runs_nothing() {
	let h = Harness::new();
	h.run("macros.play").await.unwrap();

	assert!(h.calls().is_empty());
	assert_eq!(h.history_ids(DOC), ["macros.play"]);
}

#[tokio::test]
async fn recording_during_playback_captures_play_and_its_commands() {
	let h = Harness::new();
	h.run_with("macros.record.start", CommandState::new().with_register('a')).await.unwrap();
	h.run("test.edit").await.unwrap();
	h.run("test.select").await.unwrap();
	h.run("macros.record.stop").await.unwrap();

	h.run_with("macros.record.start", CommandState::new().with_register('b')).await.unwrap();
	h.run_with("macros.play", CommandState::new().with_register('a')).await.unwrap();
	h.run("macros.record.stop").await.unwrap();

	assert_eq!(h.macro_ids('b'), Some(vec!["macros.play", "test.edit", "test.select"]));
}

#[tokio::test]
async fn playback_stops_at_first_failure() {
	let h = Harness::new();
	h.run("macros.record.start").await.unwrap();
	h.run("test.edit").await.unwrap();
	h.run("test.select").await.unwrap();
	h.run("macros.record.stop").await.unwrap();

	// Replace the recorded select with a failing command.
	let fail = h.core.registry().lookup("test.fail").unwrap();
	let edit = h.core.registry().lookup("test.edit").unwrap();
	let commands = vec![
		reprise_editor::HistoryEntry::new(edit.clone(), CommandState::new()),
		reprise_editor::HistoryEntry::new(fail, CommandState::new()),
		reprise_editor::HistoryEntry::new(edit, CommandState::new()),
	];
	assert!(h.core.registers().set_macro('@', commands));
	h.clear_calls();

	assert!(h.run("macros.play").await.is_err());
	assert_eq!(h.calls(), ["edit:1", "fail:1"]);
	assert_eq!(
		h.history_ids(DOC),
		["test.edit", "test.select", "macros.play", "test.edit"]
	);
}

#[tokio::test]
async fn empty_recording_stores_empty_macro() {
	let h = Harness::new();
	h.run("macros.record.start").await.unwrap();
	h.run("macros.record.stop").await.unwrap();

	assert_eq!(h.macro_ids('@'), Some(vec![]));
	h.run("macros.play").await.unwrap();
	assert!(h.calls().is_empty());
}

#[tokio::test]
async fn closing_editor_discards_recording() {
	let h = Harness::new();
	h.run("macros.record.start").await.unwrap();
	h.run("test.edit").await.unwrap();
	h.core.editor_closed(EDITOR);
	h.run("macros.record.stop").await.unwrap();

	assert_eq!(h.macro_ids('@'), None);
}

#[tokio::test]
async fn recordings_are_per_editor() {
	let h = Harness::new();
	let other = reprise_editor::EditorId(2);
	h.run("macros.record.start").await.unwrap();

	assert!(h.core.is_recording(EDITOR));
	assert!(!h.core.is_recording(other));
	h.core.editor_closed(other);
	assert!(h.core.is_recording(EDITOR));
}

#[tokio::test]
async fn macro_that_recorded_its_own_playback_does_not_recurse() {
	let h = Harness::new();
	h.run("macros.record.start").await.unwrap();
	h.run("test.edit").await.unwrap();
	h.run("macros.record.stop").await.unwrap();

	h.run("macros.record.start").await.unwrap();
	h.run("macros.play").await.unwrap();
	h.run("macros.record.stop").await.unwrap();
	assert_eq!(h.macro_ids('@'), Some(vec!["macros.play", "test.edit"]));
	h.clear_calls();

	let played = tokio::time::timeout(std::time::Duration::from_secs(3), h.run("macros.play")).await;
	played.expect("playback terminates").unwrap();

	assert_eq!(h.calls(), ["edit:1"]);
	assert_eq!(h.history_ids(DOC)[3..], ["macros.play", "macros.play", "test.edit"]);
	assert_eq!(h.core.playback().depth(EDITOR), 0);
}

#[tokio::test]
async fn macros_playing_each_other_stop_at_the_first_repeat() {
	let h = Harness::new();
	let play = h.core.registry().lookup("macros.play").unwrap();
	let edit = h.core.registry().lookup("test.edit").unwrap();
	let select = h.core.registry().lookup("test.select").unwrap();
	let entry = reprise_editor::HistoryEntry::new;
	{
		let mut registers = h.core.registers();
		assert!(registers.set_macro('a', vec![
			entry(play.clone(), CommandState::new().with_register('b')),
			entry(edit, CommandState::new()),
		]));
		assert!(registers.set_macro('b', vec![
			entry(play, CommandState::new().with_register('a')),
			entry(select, CommandState::new()),
		]));
	}

	h.run_with("macros.play", CommandState::new().with_register('a')).await.unwrap();

	assert_eq!(h.calls(), ["select:1", "edit:1"]);
	assert_eq!(
		h.history_ids(DOC),
		["macros.play", "macros.play", "macros.play", "test.select", "test.edit"]
	);
}
