//! Sticky state cells.
//!
//! A `StickyCell` binds one in-memory value to one store key. The cell
//! initializes from the stored JSON when present, and every mutation is
//! written straight back, so the store is never stale relative to the
//! in-memory value. Last writer wins; there is no merge or versioning.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{CoreError, Result};
use crate::storage::Store;

/// In-memory value mirrored into the key-value store on every change.
pub struct StickyCell<'a, T> {
    store: &'a Store,
    key: &'a str,
    value: T,
}

impl<'a, T> StickyCell<'a, T>
where
    T: Serialize + DeserializeOwned,
{
    /// Bind a cell to `key`, reading the initial value from the store.
    ///
    /// An absent key yields `default` without writing it back; nothing
    /// is persisted until the first `set`. A present but undecodable
    /// value (corrupted or foreign JSON) also yields `default`, and the
    /// corruption is logged instead of crashing the application.
    ///
    /// # Errors
    /// Returns an error only when the store read itself fails.
    pub fn bind(store: &'a Store, key: &'a str, default: T) -> Result<Self> {
        let value = match store.kv_get(key)? {
            Some(raw) => match serde_json::from_str(&raw) {
                Ok(v) => v,
                Err(err) => {
                    tracing::warn!(key, %err, "corrupted stored value, falling back to default");
                    default
                }
            },
            None => default,
        };
        Ok(Self { store, key, value })
    }

    pub fn get(&self) -> &T {
        &self.value
    }

    pub fn key(&self) -> &str {
        self.key
    }

    /// Replace the value and write it through to the store.
    pub fn set(&mut self, value: T) -> Result<()> {
        self.value = value;
        self.write_back()
    }

    /// Mutate the value in place, then write it through to the store.
    pub fn update(&mut self, f: impl FnOnce(&mut T)) -> Result<()> {
        f(&mut self.value);
        self.write_back()
    }

    fn write_back(&self) -> Result<()> {
        let raw = serde_json::to_string(&self.value).map_err(CoreError::Json)?;
        self.store.kv_set(self.key, &raw)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_key_uses_default_without_writing() {
        let store = Store::open_memory().unwrap();
        let cell = StickyCell::bind(&store, "examName", "Finals".to_string()).unwrap();
        assert_eq!(cell.get(), "Finals");
        // The default must not be persisted before the first set.
        assert!(store.kv_get("examName").unwrap().is_none());
    }

    #[test]
    fn set_writes_through_and_rebinding_restores() {
        let store = Store::open_memory().unwrap();
        let mut cell = StickyCell::bind(&store, "examName", String::new()).unwrap();
        cell.set("Entrance Exam".to_string()).unwrap();

        let reloaded = StickyCell::bind(&store, "examName", String::new()).unwrap();
        assert_eq!(reloaded.get(), "Entrance Exam");
    }

    #[test]
    fn roundtrip_preserves_structured_values() {
        let store = Store::open_memory().unwrap();
        let mut cell: StickyCell<Vec<(u64, String)>> =
            StickyCell::bind(&store, "pairs", Vec::new()).unwrap();
        let v = vec![(1, "alpha".to_string()), (2, "beta".to_string())];
        cell.set(v.clone()).unwrap();

        let reloaded: StickyCell<Vec<(u64, String)>> =
            StickyCell::bind(&store, "pairs", Vec::new()).unwrap();
        assert_eq!(reloaded.get(), &v);
    }

    #[test]
    fn corrupted_value_falls_back_to_default() {
        let store = Store::open_memory().unwrap();
        store.kv_set("studyTodos", "{not json").unwrap();
        let cell: StickyCell<Vec<u64>> = StickyCell::bind(&store, "studyTodos", vec![7]).unwrap();
        assert_eq!(cell.get(), &vec![7]);
        // The corrupted entry stays untouched until the next set.
        assert_eq!(store.kv_get("studyTodos").unwrap().unwrap(), "{not json");
    }

    #[test]
    fn update_mutates_in_place_and_persists() {
        let store = Store::open_memory().unwrap();
        let mut cell: StickyCell<Vec<u64>> = StickyCell::bind(&store, "nums", Vec::new()).unwrap();
        cell.update(|v| v.push(42)).unwrap();
        assert_eq!(store.kv_get("nums").unwrap().unwrap(), "[42]");
    }
}
