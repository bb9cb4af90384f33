use reprise_editor::{DocumentId, EditorId};

use crate::common::{DOC, Harness};

#[tokio::test]
async fn same_document_dispatches_complete_in_order() {
	let h = Harness::new();
	let (slow, fast) = tokio::join!(h.run("test.slow"), h.run("test.edit"));
	slow.unwrap();
	fast.unwrap();

	assert_eq!(h.calls(), ["slow:1", "edit:1"]);
	assert_eq!(h.history_ids(DOC), ["test.slow", "test.edit"]);
}

#[tokio::test]
async fn different_documents_do_not_wait_for_each_other() {
	let h = Harness::new();
	let other = DocumentId(2);
	let (slow, fast) = tokio::join!(h.run("test.slow"), h.run_on(EditorId(2), other, "test.edit"));
	slow.unwrap();
	fast.unwrap();

	assert_eq!(h.calls(), ["edit:1", "slow:1"]);
	assert_eq!(h.history_ids(DOC), ["test.slow"]);
	assert_eq!(h.history_ids(other), ["test.edit"]);
}

#[tokio::test]
async fn repeat_waits_for_pending_command() {
	let h = Harness::new();
	let (slow, repeat) = tokio::join!(h.run("test.slow"), h.run("history.repeat"));
	slow.unwrap();
	repeat.unwrap();

	assert_eq!(h.calls(), ["slow:1", "slow:1"]);
	assert_eq!(h.history_ids(DOC), ["test.slow", "test.slow"]);
}

#[tokio::test]
async fn lane_is_released_after_dispatch() {
	let h = Harness::new();
	h.run("test.edit").await.unwrap();
	assert!(!h.core.lanes().is_busy(DOC));

	assert!(h.run("test.fail").await.is_err());
	assert!(!h.core.lanes().is_busy(DOC));
}
