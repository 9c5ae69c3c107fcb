//! Drag-and-drop reordering of the document list.
//!
//! One gesture is active at a time (the platform ties gestures to pointer
//! capture). The gesture runs `idle -> dragging -> (over target)* -> dropped |
//! cancelled -> idle`; `drag_end` always returns to idle and clears every
//! visual marker, whether or not a drop happened.

use std::collections::BTreeSet;

use common::model::document::DocumentId;
use log::{debug, warn};

use crate::list_model::ListModel;

/// Transient record of the gesture in progress. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragSession {
    pub dragged_id: DocumentId,
    pub original_index: usize,
}

/// Result of a drop on a list item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropOutcome {
    /// No gesture was active, or an id was unknown to the list.
    Ignored,
    /// Dropped onto the dragged item itself.
    Unchanged,
    /// The list was reordered; the payload is the new id order to commit.
    Reordered(Vec<DocumentId>),
}

/// Visual state of one list item while a gesture is active.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ItemMarkers {
    pub being_moved: bool,
    pub drop_eligible: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DragReorderController {
    session: Option<DragSession>,
    drop_eligible: BTreeSet<DocumentId>,
}

impl DragReorderController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn session(&self) -> Option<&DragSession> {
        self.session.as_ref()
    }

    pub fn is_dragging(&self) -> bool {
        self.session.is_some()
    }

    /// Starts a gesture on `id`. Returns `false` when the id is not listed.
    pub fn drag_start(&mut self, list: &ListModel, id: &DocumentId) -> bool {
        let Some(original_index) = list.position(id) else {
            warn!("drag started on unknown document {id}");
            return false;
        };
        if let Some(stale) = self.session.take() {
            warn!("replacing stale drag session for {}", stale.dragged_id);
        }
        self.drop_eligible.clear();
        debug!("drag start {id} at {original_index}");
        self.session = Some(DragSession {
            dragged_id: id.clone(),
            original_index,
        });
        true
    }

    /// Pointer entered or moved over `target`; marks it as a drop target.
    pub fn drag_over(&mut self, target: &DocumentId) -> bool {
        if self.session.is_none() {
            return false;
        }
        self.drop_eligible.insert(target.clone())
    }

    pub fn drag_leave(&mut self, target: &DocumentId) -> bool {
        self.drop_eligible.remove(target)
    }

    /// Drops the dragged item onto `target`, applying the move to `list`.
    ///
    /// When the dragged item started before the target it lands right after
    /// it, otherwise right before it, so the item always ends up where it was
    /// released regardless of drag direction.
    pub fn drop(&mut self, list: &mut ListModel, target: &DocumentId) -> DropOutcome {
        self.drop_eligible.remove(target);
        let Some(session) = self.session.take() else {
            return DropOutcome::Ignored;
        };
        if &session.dragged_id == target {
            return DropOutcome::Unchanged;
        }
        let (Some(from), Some(to)) = (list.position(&session.dragged_id), list.position(target))
        else {
            warn!(
                "drop of {} onto {target} references a document no longer listed",
                session.dragged_id
            );
            return DropOutcome::Ignored;
        };
        // Removing `from` shifts a later target down by one, so inserting at
        // the target's old index lands after it; for an earlier target the
        // same index lands before it.
        if !list.move_item(from, to) {
            return DropOutcome::Unchanged;
        }
        debug!("moved {} from {from} to {to}", session.dragged_id);
        DropOutcome::Reordered(list.current_order())
    }

    /// Ends the gesture. Safe to call with no gesture active.
    pub fn drag_end(&mut self) {
        self.session = None;
        self.drop_eligible.clear();
    }

    /// Forgets any gesture, used when the list is replaced underneath it.
    pub fn reset(&mut self) {
        self.drag_end();
    }

    pub fn markers(&self, id: &DocumentId) -> ItemMarkers {
        ItemMarkers {
            being_moved: self
                .session
                .as_ref()
                .is_some_and(|session| &session.dragged_id == id),
            drop_eligible: self.drop_eligible.contains(id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::model::document::{DocumentRecord, DocumentStatus};

    fn list_of(ids: &[&str]) -> ListModel {
        let mut list = ListModel::new();
        list.replace_all(
            ids.iter()
                .map(|id| DocumentRecord {
                    id: DocumentId::new(*id),
                    original_filename: format!("{id}.pdf"),
                    status: DocumentStatus::Success,
                    page_count: 1,
                })
                .collect(),
        );
        list
    }

    fn id(raw: &str) -> DocumentId {
        DocumentId::new(raw)
    }

    #[test]
    fn dragging_down_inserts_after_target() {
        let mut list = list_of(&["a", "b", "c", "d"]);
        let mut drag = DragReorderController::new();
        assert!(drag.drag_start(&list, &id("a")));
        let outcome = drag.drop(&mut list, &id("c"));
        assert_eq!(
            outcome,
            DropOutcome::Reordered(vec![id("b"), id("c"), id("a"), id("d")])
        );
    }

    #[test]
    fn dragging_up_inserts_before_target() {
        let mut list = list_of(&["a", "b", "c", "d"]);
        let mut drag = DragReorderController::new();
        drag.drag_start(&list, &id("d"));
        let outcome = drag.drop(&mut list, &id("b"));
        assert_eq!(
            outcome,
            DropOutcome::Reordered(vec![id("a"), id("d"), id("b"), id("c")])
        );
    }

    #[test]
    fn markers_follow_the_gesture_and_clear_on_end() {
        let list = list_of(&["a", "b"]);
        let mut drag = DragReorderController::new();

        assert!(!drag.drag_over(&id("b")), "no marking without a gesture");
        drag.drag_start(&list, &id("a"));
        drag.drag_over(&id("b"));
        assert_eq!(
            drag.markers(&id("a")),
            ItemMarkers { being_moved: true, drop_eligible: false }
        );
        assert!(drag.markers(&id("b")).drop_eligible);

        drag.drag_leave(&id("b"));
        assert!(!drag.markers(&id("b")).drop_eligible);

        drag.drag_over(&id("b"));
        drag.drag_end();
        assert_eq!(drag.markers(&id("a")), ItemMarkers::default());
        assert_eq!(drag.markers(&id("b")), ItemMarkers::default());
        assert!(!drag.is_dragging());
    }

    #[test]
    fn drop_without_gesture_is_ignored() {
        let mut list = list_of(&["a", "b"]);
        let mut drag = DragReorderController::new();
        assert_eq!(drag.drop(&mut list, &id("a")), DropOutcome::Ignored);
    }

    #[test]
    fn drag_start_on_unknown_id_is_refused() {
        let list = list_of(&["a"]);
        let mut drag = DragReorderController::new();
        assert!(!drag.drag_start(&list, &id("zz")));
        assert!(drag.session().is_none());
    }
}
