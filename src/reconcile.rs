//! List Reconciliation
//!
//! Transient in-flight state for the todo list view. Each row carries three
//! independent flags (deleting, delete finished and fading out, updating)
//! that exist only on the client; a successful mutation always ends in a
//! wholesale replacement of the row vector with freshly fetched data, which
//! clears every flag at once.
//!
//! Transitions are keyed by item id, not by array index: the list can be
//! replaced while a remote call is in flight, and an index captured before
//! the await would then point at the wrong row.

use crate::models::Todo;

/// A todo plus its transient UI flags. The wrapper keeps the flags out of
/// the wire model so they can never be serialized to the backend.
#[derive(Debug, Clone, PartialEq)]
pub struct TodoRow {
    pub todo: Todo,
    /// Delete request in flight
    pub is_deleting: bool,
    /// Delete succeeded, row is fading out until the list refresh lands
    pub is_delete_done: bool,
    /// Toggle-done request in flight
    pub is_updating: bool,
}

impl TodoRow {
    fn new(todo: Todo) -> Self {
        Self {
            todo,
            is_deleting: false,
            is_delete_done: false,
            is_updating: false,
        }
    }
}

/// Replace the working list. Used for the initial page load and for every
/// post-mutation refresh; no merging with prior state.
pub fn rows_from(todos: Vec<Todo>) -> Vec<TodoRow> {
    todos.into_iter().map(TodoRow::new).collect()
}

/// Whether any action is outstanding on the given item
pub fn pending_on(rows: &[TodoRow], id: &str) -> bool {
    rows.iter()
        .find(|r| r.todo.id == id)
        .is_some_and(|r| r.is_deleting || r.is_updating)
}

/// Mark a toggle-done as in flight. Returns false without touching state
/// when the item is unknown or already has an action pending.
pub fn begin_update(rows: &mut [TodoRow], id: &str) -> bool {
    match rows.iter_mut().find(|r| r.todo.id == id) {
        Some(row) if !row.is_deleting && !row.is_updating => {
            row.is_updating = true;
            true
        }
        _ => false,
    }
}

/// Revert a failed toggle-done; `done` itself is left untouched
pub fn fail_update(rows: &mut [TodoRow], id: &str) {
    if let Some(row) = rows.iter_mut().find(|r| r.todo.id == id) {
        row.is_updating = false;
    }
}

/// Mark a delete as in flight, with the same single-action guard
pub fn begin_delete(rows: &mut [TodoRow], id: &str) -> bool {
    match rows.iter_mut().find(|r| r.todo.id == id) {
        Some(row) if !row.is_deleting && !row.is_updating => {
            row.is_deleting = true;
            true
        }
        _ => false,
    }
}

/// Revert a failed delete; the row stays in the list unchanged
pub fn fail_delete(rows: &mut [TodoRow], id: &str) {
    if let Some(row) = rows.iter_mut().find(|r| r.todo.id == id) {
        row.is_deleting = false;
        row.is_delete_done = false;
    }
}

/// Delete succeeded: hold the row in its fade-out state until the caller
/// has waited out the transition and refreshed the list
pub fn finish_delete(rows: &mut [TodoRow], id: &str) {
    if let Some(row) = rows.iter_mut().find(|r| r.todo.id == id) {
        row.is_deleting = true;
        row.is_delete_done = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Todo;

    fn make_todo(id: &str, done: bool) -> Todo {
        Todo {
            id: id.to_string(),
            description: format!("Todo {}", id),
            deadline: "2022-12-21T19:56:00Z".to_string(),
            done,
            snapshoot_image: None,
        }
    }

    fn two_rows() -> Vec<TodoRow> {
        rows_from(vec![make_todo("a", false), make_todo("b", true)])
    }

    #[test]
    fn rows_from_resets_all_flags() {
        let rows = two_rows();
        assert_eq!(rows.len(), 2);
        assert!(rows.iter().all(|r| !r.is_deleting && !r.is_delete_done && !r.is_updating));
    }

    #[test]
    fn rows_from_empty_list_is_empty() {
        assert!(rows_from(vec![]).is_empty());
    }

    #[test]
    fn failed_toggle_clears_updating_and_leaves_done_and_order() {
        let mut rows = two_rows();
        assert!(begin_update(&mut rows, "a"));
        assert!(rows[0].is_updating);

        fail_update(&mut rows, "a");
        assert!(!rows[0].is_updating);
        assert!(!rows[0].todo.done);
        assert_eq!(rows[0].todo.id, "a");
        assert_eq!(rows[1].todo.id, "b");
        assert_eq!(rows[1], two_rows()[1]);
    }

    #[test]
    fn failed_delete_leaves_list_unchanged_except_flag() {
        let mut rows = two_rows();
        assert!(begin_delete(&mut rows, "a"));
        fail_delete(&mut rows, "a");
        assert_eq!(rows, two_rows());
    }

    #[test]
    fn successful_delete_fades_then_replacement_drops_row() {
        let mut rows = two_rows();
        assert!(begin_delete(&mut rows, "a"));
        finish_delete(&mut rows, "a");
        assert!(rows[0].is_delete_done);
        // the refreshed list no longer contains "a"
        rows = rows_from(vec![make_todo("b", true)]);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].todo.id, "b");
        assert!(!rows[0].is_deleting);
    }

    #[test]
    fn delete_done_implies_deleting() {
        let mut rows = two_rows();
        begin_delete(&mut rows, "b");
        finish_delete(&mut rows, "b");
        let row = &rows[1];
        assert!(row.is_delete_done);
        assert!(row.is_deleting);
    }

    #[test]
    fn second_action_on_same_item_is_rejected() {
        let mut rows = two_rows();
        assert!(begin_update(&mut rows, "a"));
        assert!(!begin_delete(&mut rows, "a"));
        assert!(!begin_update(&mut rows, "a"));
        assert!(rows[0].is_updating);
        assert!(!rows[0].is_deleting);

        // the other row is unaffected and still accepts actions
        assert!(begin_delete(&mut rows, "b"));
    }

    #[test]
    fn actions_on_unknown_id_are_rejected_and_harmless() {
        let mut rows = two_rows();
        assert!(!begin_update(&mut rows, "missing"));
        fail_delete(&mut rows, "missing");
        assert_eq!(rows, two_rows());
    }

    #[test]
    fn pending_on_tracks_either_flag() {
        let mut rows = two_rows();
        assert!(!pending_on(&rows, "a"));
        begin_update(&mut rows, "a");
        assert!(pending_on(&rows, "a"));
        fail_update(&mut rows, "a");
        assert!(!pending_on(&rows, "a"));
        begin_delete(&mut rows, "a");
        assert!(pending_on(&rows, "a"));
    }

    #[test]
    fn concurrent_deletes_on_different_rows_are_independent() {
        let mut rows = two_rows();
        assert!(begin_delete(&mut rows, "a"));
        assert!(begin_delete(&mut rows, "b"));
        fail_delete(&mut rows, "a");
        assert!(!rows[0].is_deleting);
        assert!(rows[1].is_deleting);
    }
}
