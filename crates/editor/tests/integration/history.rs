use std::sync::Arc;

use proptest::prelude::*;
use reprise_editor::{CommandError, CommandState, DocumentId, EditorId};

use crate::common::{DOC, EDITOR, Harness};

#[tokio::test]
async fn records_descriptor_and_state() {
	let h = Harness::new();
	let state = CommandState::new().with_count(3).with_register('a').with_input("x");
	h.run_with("test.edit", state.clone()).await.unwrap();

	let history = h.core.history().get(DOC).unwrap();
	let history = history.lock();
	let entry = history.last().unwrap();
	assert!(Arc::ptr_eq(&entry.descriptor, &h.core.registry().lookup("test.edit").unwrap()));
	assert_eq!(entry.state, state);
}

#[tokio::test]
async fn ignored_commands_run_but_are_not_recorded() {
	let h = Harness::new();
	h.run("test.edit").await.unwrap();
	h.run("test.ignored").await.unwrap();
	h.run("macros.record.start").await.unwrap();
	h.run("macros.record.stop").await.unwrap();

	assert_eq!(h.calls(), ["edit:1", "ignored:1"]);
	assert_eq!(h.history_ids(DOC), ["test.edit"]);
}

#[tokio::test]
async fn unknown_command_leaves_history_untouched() {
	let h = Harness::new();
	h.run("test.edit").await.unwrap();

	let err = h.run("does.not.exist").await.unwrap_err();
	assert_eq!(err, CommandError::UnknownCommand("does.not.exist".into()));
	assert_eq!(h.history_ids(DOC), ["test.edit"]);
}

#[tokio::test]
async fn failed_command_is_not_recorded_and_nothing_is_rolled_back() {
	let h = Harness::new();
	h.run("test.edit").await.unwrap();

	let err = h.run("test.fail").await.unwrap_err();
	assert!(matches!(err, CommandError::Failed(_)));
	assert_eq!(h.calls(), ["edit:1", "fail:1"]);
	assert_eq!(h.history_ids(DOC), ["test.edit"]);
}

#[tokio::test]
async fn documents_have_separate_histories() {
	let h = Harness::new();
	let other = DocumentId(2);

	h.run("test.edit").await.unwrap();
	h.run_on(EditorId(2), other, "test.select").await.unwrap();
	h.run_on(EDITOR, other, "test.both").await.unwrap();

	assert_eq!(h.history_ids(DOC), ["test.edit"]);
	assert_eq!(h.history_ids(other), ["test.select", "test.both"]);
}

#[tokio::test]
async fn history_is_created_lazily() {
	let h = Harness::new();
	assert!(h.core.history().is_empty());

	h.run("test.ignored").await.unwrap();
	h.run("test.edit").await.unwrap();
	assert_eq!(h.core.history().len(), 1);
}

#[tokio::test]
async fn undo_and_redo_delegate_to_host_and_are_not_recorded() {
	let h = Harness::new();
	h.run("test.edit").await.unwrap();
	h.run("history.undo").await.unwrap();
	h.run("history.redo").await.unwrap();

	assert_eq!(h.calls(), ["edit:1", "undo@1", "redo@1"]);
	assert_eq!(h.history_ids(DOC), ["test.edit"]);
}

proptest! {
	#[test]
	fn history_grows_by_recorded_commands(ops in prop::collection::vec(prop::sample::select(vec!["test.edit", "test.select", "test.plain", "test.ignored"]), 0..24)) {
		let runtime = tokio::runtime::Builder::new_current_thread().build().unwrap();
		let h = Harness::new();
		runtime.block_on(async {
			for id in &ops {
				h.run(id).await.unwrap();
			}
		});

		let expected: Vec<&str> = ops.iter().copied().filter(|id| *id != "test.ignored").collect();
		prop_assert_eq!(h.history_ids(DOC), expected);
	}
}
