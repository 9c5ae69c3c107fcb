//! In-memory mirror of the store's ordered document list.

use std::collections::HashSet;

use common::model::document::{DocumentId, DocumentRecord};
use log::{debug, warn};

/// Ordered sequence of documents, the page's single source of truth for order.
///
/// Ids are unique. Every mutation that changes the sequence raises a render
/// request which the shell consumes through [`ListModel::take_render_request`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListModel {
    records: Vec<DocumentRecord>,
    render_requested: bool,
}

impl ListModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the whole sequence with a freshly fetched one.
    ///
    /// A repeated id keeps its first occurrence only.
    pub fn replace_all(&mut self, records: Vec<DocumentRecord>) {
        let mut seen = HashSet::with_capacity(records.len());
        let mut unique = Vec::with_capacity(records.len());
        for record in records {
            if seen.insert(record.id.clone()) {
                unique.push(record);
            } else {
                warn!("dropping duplicate document id {} from list refresh", record.id);
            }
        }
        debug!("list replaced with {} documents", unique.len());
        self.records = unique;
        self.render_requested = true;
    }

    /// Removes one record. Absent ids are ignored so late or duplicate delete
    /// confirmations are harmless.
    pub fn remove_by_id(&mut self, id: &DocumentId) -> bool {
        match self.position(id) {
            Some(index) => {
                self.records.remove(index);
                self.render_requested = true;
                true
            }
            None => false,
        }
    }

    pub fn clear(&mut self) {
        self.records.clear();
        self.render_requested = true;
    }

    /// Snapshot of the ids in display order.
    pub fn current_order(&self) -> Vec<DocumentId> {
        self.records.iter().map(|record| record.id.clone()).collect()
    }

    /// Moves the record at `from` so that it ends up at index `to`.
    pub(crate) fn move_item(&mut self, from: usize, to: usize) -> bool {
        if from == to || from >= self.records.len() || to >= self.records.len() {
            return false;
        }
        let record = self.records.remove(from);
        self.records.insert(to, record);
        self.render_requested = true;
        true
    }

    pub fn records(&self) -> &[DocumentRecord] {
        &self.records
    }

    pub fn get(&self, id: &DocumentId) -> Option<&DocumentRecord> {
        self.records.iter().find(|record| &record.id == id)
    }

    pub fn position(&self, id: &DocumentId) -> Option<usize> {
        self.records.iter().position(|record| &record.id == id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns whether the list container needs re-rendering and resets the flag.
    pub fn take_render_request(&mut self) -> bool {
        std::mem::take(&mut self.render_requested)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::model::document::DocumentStatus;

    fn record(id: &str) -> DocumentRecord {
        DocumentRecord {
            id: DocumentId::new(id),
            original_filename: format!("{id}.pdf"),
            status: DocumentStatus::Success,
            page_count: 1,
        }
    }

    fn ids(list: &ListModel) -> Vec<&str> {
        list.records().iter().map(|r| r.id.as_str()).collect()
    }

    #[test]
    fn replace_all_drops_duplicate_ids() {
        let mut list = ListModel::new();
        list.replace_all(vec![record("a"), record("b"), record("a")]);
        assert_eq!(ids(&list), vec!["a", "b"]);
        assert!(list.take_render_request());
        assert!(!list.take_render_request());
    }

    #[test]
    fn remove_is_idempotent() {
        let mut list = ListModel::new();
        list.replace_all(vec![record("a"), record("b")]);
        list.take_render_request();

        assert!(list.remove_by_id(&DocumentId::new("a")));
        assert!(list.take_render_request());
        assert!(!list.remove_by_id(&DocumentId::new("a")));
        assert!(!list.take_render_request());
        assert_eq!(ids(&list), vec!["b"]);
    }

    #[test]
    fn move_item_forward_and_backward() {
        let mut list = ListModel::new();
        list.replace_all(vec![record("a"), record("b"), record("c"), record("d")]);

        assert!(list.move_item(0, 2));
        assert_eq!(ids(&list), vec!["b", "c", "a", "d"]);

        assert!(list.move_item(3, 0));
        assert_eq!(ids(&list), vec!["d", "b", "c", "a"]);

        assert!(!list.move_item(1, 1));
        assert!(!list.move_item(0, 9));
    }
}
