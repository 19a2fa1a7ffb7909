//! To-do list for the study screen.
//!
//! Insertion-ordered, append-only except for deletion. The full list is
//! mirrored into the store under `studyTodos` after every mutation.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::sticky::StickyCell;
use crate::storage::Store;

/// Store key for the persisted to-do list.
pub const TODOS_KEY: &str = "studyTodos";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoItem {
    pub id: u64,
    pub text: String,
    pub done: bool,
}

/// Ordered to-do collection with write-through persistence.
///
/// Ids come from a strictly increasing counter, never from wall-clock
/// time, so two items added within the same instant cannot collide.
pub struct TaskList<'a> {
    cell: StickyCell<'a, Vec<TodoItem>>,
    next_id: u64,
}

impl<'a> TaskList<'a> {
    /// Load the list from the store, or start empty.
    pub fn load(store: &'a Store) -> Result<Self> {
        let cell = StickyCell::bind(store, TODOS_KEY, Vec::<TodoItem>::new())?;
        let next_id = cell.get().iter().map(|t| t.id).max().map_or(1, |m| m + 1);
        Ok(Self { cell, next_id })
    }

    pub fn items(&self) -> &[TodoItem] {
        self.cell.get()
    }

    /// Append a new item with `done = false`.
    ///
    /// Whitespace-only text is silently rejected and `None` is
    /// returned; otherwise the fresh item's id.
    pub fn add(&mut self, text: &str) -> Result<Option<u64>> {
        let text = text.trim();
        if text.is_empty() {
            return Ok(None);
        }
        let id = self.next_id;
        self.next_id += 1;
        let item = TodoItem {
            id,
            text: text.to_string(),
            done: false,
        };
        self.cell.update(|items| items.push(item))?;
        Ok(Some(id))
    }

    /// Flip `done` on the matching item. Returns false when the id is
    /// absent (no-op).
    pub fn toggle(&mut self, id: u64) -> Result<bool> {
        let mut found = false;
        self.cell.update(|items| {
            if let Some(item) = items.iter_mut().find(|t| t.id == id) {
                item.done = !item.done;
                found = true;
            }
        })?;
        Ok(found)
    }

    /// Remove the matching item. Returns false when the id is absent
    /// (no-op).
    pub fn delete(&mut self, id: u64) -> Result<bool> {
        let mut found = false;
        self.cell.update(|items| {
            let before = items.len();
            items.retain(|t| t.id != id);
            found = items.len() != before;
        })?;
        Ok(found)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn add_appends_in_insertion_order() {
        let store = Store::open_memory().unwrap();
        let mut list = TaskList::load(&store).unwrap();
        list.add("math 3-1 drills").unwrap();
        list.add("english vocab").unwrap();
        let texts: Vec<_> = list.items().iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, ["math 3-1 drills", "english vocab"]);
        assert!(list.items().iter().all(|t| !t.done));
    }

    #[test]
    fn add_rejects_whitespace_only_text() {
        let store = Store::open_memory().unwrap();
        let mut list = TaskList::load(&store).unwrap();
        assert_eq!(list.add("   ").unwrap(), None);
        assert!(list.items().is_empty());
        // Nothing persisted either.
        assert!(store.kv_get(TODOS_KEY).unwrap().is_none());
    }

    #[test]
    fn ids_are_unique_within_one_instant() {
        let store = Store::open_memory().unwrap();
        let mut list = TaskList::load(&store).unwrap();
        let a = list.add("a").unwrap().unwrap();
        let b = list.add("b").unwrap().unwrap();
        assert_ne!(a, b);
        assert!(b > a);
    }

    #[test]
    fn toggle_flips_and_is_noop_for_unknown_id() {
        let store = Store::open_memory().unwrap();
        let mut list = TaskList::load(&store).unwrap();
        let id = list.add("physics review").unwrap().unwrap();
        assert!(list.toggle(id).unwrap());
        assert!(list.items()[0].done);
        assert!(list.toggle(id).unwrap());
        assert!(!list.items()[0].done);
        assert!(!list.toggle(9999).unwrap());
    }

    #[test]
    fn delete_removes_and_is_noop_for_unknown_id() {
        let store = Store::open_memory().unwrap();
        let mut list = TaskList::load(&store).unwrap();
        let id = list.add("chemistry notes").unwrap().unwrap();
        assert!(list.delete(id).unwrap());
        assert!(list.items().is_empty());
        assert!(!list.delete(id).unwrap());
    }

    #[test]
    fn mutations_survive_a_reload() {
        let store = Store::open_memory().unwrap();
        let kept;
        {
            let mut list = TaskList::load(&store).unwrap();
            kept = list.add("keep me").unwrap().unwrap();
            let drop_id = list.add("drop me").unwrap().unwrap();
            list.toggle(kept).unwrap();
            list.delete(drop_id).unwrap();
        }
        let list = TaskList::load(&store).unwrap();
        assert_eq!(list.items().len(), 1);
        assert_eq!(list.items()[0].id, kept);
        assert!(list.items()[0].done);
    }

    #[derive(Debug, Clone)]
    enum Op {
        Add(String),
        Toggle(usize),
        Delete(usize),
    }

    fn op_strategy() -> impl Strategy<Value = Op> {
        prop_oneof![
            "[a-z ]{0,12}".prop_map(Op::Add),
            (0usize..16).prop_map(Op::Toggle),
            (0usize..16).prop_map(Op::Delete),
        ]
    }

    proptest! {
        // The list always equals the net effect of the applied call
        // sequence: non-deleted items in insertion order, done flags
        // matching the toggles.
        #[test]
        fn matches_reference_model(ops in proptest::collection::vec(op_strategy(), 0..40)) {
            let store = Store::open_memory().unwrap();
            let mut list = TaskList::load(&store).unwrap();
            let mut model: Vec<TodoItem> = Vec::new();
            let mut known_ids: Vec<u64> = Vec::new();

            for op in ops {
                match op {
                    Op::Add(text) => {
                        if let Some(id) = list.add(&text).unwrap() {
                            model.push(TodoItem { id, text: text.trim().to_string(), done: false });
                            known_ids.push(id);
                        } else {
                            prop_assert!(text.trim().is_empty());
                        }
                    }
                    Op::Toggle(slot) => {
                        if let Some(&id) = known_ids.get(slot) {
                            list.toggle(id).unwrap();
                            if let Some(item) = model.iter_mut().find(|t| t.id == id) {
                                item.done = !item.done;
                            }
                        }
                    }
                    Op::Delete(slot) => {
                        if let Some(&id) = known_ids.get(slot) {
                            list.delete(id).unwrap();
                            model.retain(|t| t.id != id);
                        }
                    }
                }
            }

            prop_assert_eq!(list.items(), model.as_slice());

            // And the persisted mirror agrees with memory.
            let reloaded = TaskList::load(&store).unwrap();
            prop_assert_eq!(reloaded.items(), model.as_slice());
        }
    }
}
