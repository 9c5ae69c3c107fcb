use std::sync::Once;

use common::model::document::{DocumentId, DocumentRecord, DocumentStatus};
use controller::{
    update, Action, Effect, GenerateReply, Language, ListView, OperationKind, UiConfig,
    WorkspaceState,
};
use pretty_assertions::assert_eq;

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let _ = env_logger::builder().is_test(true).try_init();
    });
}

fn loaded(ids: &[&str]) -> WorkspaceState {
    let mut state = WorkspaceState::new(UiConfig::default(), Language::En);
    update(
        &mut state,
        Action::DocumentsLoaded(
            ids.iter()
                .map(|id| DocumentRecord {
                    id: DocumentId::new(*id),
                    original_filename: format!("{id}.pdf"),
                    status: DocumentStatus::Success,
                    page_count: 1,
                })
                .collect(),
        ),
    );
    state
}

fn rendered_order(state: &WorkspaceState) -> Vec<DocumentId> {
    match state.view().list {
        ListView::Items(rows) => rows.into_iter().map(|row| row.id).collect(),
        ListView::Placeholder(_) => Vec::new(),
    }
}

fn tick(state: &mut WorkspaceState) {
    update(state, Action::ProgressTicked(OperationKind::Generation));
}

#[test]
fn every_drop_keeps_model_and_rendered_order_equal() {
    init_logging();
    let ids = ["a", "b", "c", "d", "e"];
    for from in ids {
        for to in ids {
            let mut state = loaded(&ids);
            update(&mut state, Action::DragStarted(DocumentId::new(from)));
            let effects = update(&mut state, Action::Dropped(DocumentId::new(to)));
            update(&mut state, Action::DragEnded);

            let order = state.list.current_order();
            assert_eq!(order, rendered_order(&state));
            if from == to {
                assert!(effects.is_empty(), "self-drop of {from} must not commit");
            } else {
                assert_eq!(
                    effects,
                    vec![Effect::CommitOrder {
                        url: "/documents/reorder".into(),
                        body: common::requests::ReorderRequest { order },
                    }]
                );
            }
        }
    }
}

#[test]
fn drag_end_clears_all_markers() {
    init_logging();
    let mut state = loaded(&["a", "b", "c"]);
    update(&mut state, Action::DragStarted(DocumentId::new("a")));
    update(&mut state, Action::DragEntered(DocumentId::new("b")));
    update(&mut state, Action::DragOver(DocumentId::new("c")));
    update(&mut state, Action::DragEnded);

    let ListView::Items(rows) = state.view().list else {
        panic!("list should not be empty");
    };
    assert!(rows
        .iter()
        .all(|row| !row.markers.being_moved && !row.markers.drop_eligible));
}

#[test]
fn dragging_the_only_item_changes_nothing() {
    init_logging();
    let mut state = loaded(&["solo"]);
    update(&mut state, Action::DragStarted(DocumentId::new("solo")));
    assert!(update(&mut state, Action::Dropped(DocumentId::new("solo"))).is_empty());
    update(&mut state, Action::DragEnded);
    assert_eq!(rendered_order(&state), vec![DocumentId::new("solo")]);
}

#[test]
fn failed_reorder_commit_keeps_optimistic_order() {
    init_logging();
    let mut state = loaded(&["a", "b"]);
    update(&mut state, Action::DragStarted(DocumentId::new("b")));
    update(&mut state, Action::Dropped(DocumentId::new("a")));
    update(&mut state, Action::DragEnded);

    let effects = update(&mut state, Action::OrderCommitted(Err("timeout".into())));
    assert!(effects.is_empty());
    assert_eq!(
        rendered_order(&state),
        vec![DocumentId::new("b"), DocumentId::new("a")]
    );
}

#[test]
fn simulated_progress_stays_below_completion_until_resolved() {
    init_logging();
    let mut state = loaded(&[]);
    update(&mut state, Action::GenerateRequested);

    let mut previous = 0.0;
    for _ in 0..1_000 {
        tick(&mut state);
        let percent = state.view().generation.percent;
        assert!(percent < 100.0);
        assert!(percent >= previous);
        previous = percent;
    }
    assert_eq!(previous, 95.0);

    update(
        &mut state,
        Action::GenerationResponded(GenerateReply::Success {
            content_disposition: None,
        }),
    );
    update(&mut state, Action::GenerationBodyReceived(vec![1]));
    assert_eq!(state.view().generation.percent, 100.0);

    // Ticks queued before cancellation change nothing.
    tick(&mut state);
    assert_eq!(state.view().generation.percent, 100.0);
}

#[test]
fn one_dismiss_control_across_repeated_cycles() {
    init_logging();
    let mut state = loaded(&[]);
    for cycle in 0..4 {
        update(&mut state, Action::GenerateRequested);
        assert_eq!(state.view().generation.dismiss_label, None);
        tick(&mut state);

        if cycle % 2 == 0 {
            update(
                &mut state,
                Action::GenerationResponded(GenerateReply::Failed {
                    status: 500,
                    status_text: String::new(),
                    body: "{}".into(),
                }),
            );
        } else {
            update(
                &mut state,
                Action::GenerationResponded(GenerateReply::Success {
                    content_disposition: None,
                }),
            );
            update(&mut state, Action::GenerationBodyReceived(Vec::new()));
        }
        assert_eq!(state.view().generation.dismiss_label, Some("Close"));
    }
}

#[test]
fn cancelling_the_ticker_is_reported_once() {
    init_logging();
    let mut state = loaded(&[]);
    update(&mut state, Action::GenerateRequested);
    let mut stops = 0;
    for action in [
        Action::GenerationResponded(GenerateReply::Success {
            content_disposition: None,
        }),
        Action::GenerationBodyReceived(Vec::new()),
        Action::GenerationTransportFailed("late".into()),
    ] {
        stops += update(&mut state, action)
            .iter()
            .filter(|effect| matches!(effect, Effect::StopTicker { .. }))
            .count();
    }
    assert_eq!(stops, 1);
}

#[test]
fn success_auto_dismisses_only_its_own_run() {
    init_logging();
    let mut state = loaded(&[]);
    update(&mut state, Action::GenerateRequested);
    update(
        &mut state,
        Action::GenerationResponded(GenerateReply::Success {
            content_disposition: None,
        }),
    );
    let effects = update(&mut state, Action::GenerationBodyReceived(Vec::new()));
    let Some(Effect::ScheduleAutoDismiss { run, delay_ms, .. }) = effects.last().cloned() else {
        panic!("auto-dismiss should be scheduled");
    };
    assert_eq!(delay_ms, 5000);

    update(
        &mut state,
        Action::AutoDismissElapsed {
            operation: OperationKind::Generation,
            run,
        },
    );
    assert!(!state.view().generation.visible);
}
