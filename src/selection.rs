use std::collections::HashMap;

use crate::client::Artwork;

/// The authoritative set of selected artworks, keyed by artwork id and
/// independent of which page is currently loaded. Pure data structure,
/// no I/O; only the UI control task mutates it.
///
/// Enumeration follows insertion order so snapshot reads are
/// deterministic. Re-adding an already-selected artwork refreshes its
/// snapshot without moving its slot.
#[derive(Debug, Default)]
pub struct SelectionStore {
    by_id: HashMap<i64, Artwork>,
    order: Vec<i64>,
}

impl SelectionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or refresh each artwork. Idempotent per id.
    pub fn add(&mut self, artworks: &[Artwork]) {
        for artwork in artworks {
            if self.by_id.insert(artwork.id, artwork.clone()).is_none() {
                self.order.push(artwork.id);
            }
        }
    }

    /// Delete each id if present; absent ids are a no-op.
    pub fn remove(&mut self, ids: &[i64]) {
        let mut removed_any = false;
        for id in ids {
            removed_any |= self.by_id.remove(id).is_some();
        }
        if removed_any {
            self.order.retain(|id| self.by_id.contains_key(id));
        }
    }

    pub fn clear(&mut self) {
        self.by_id.clear();
        self.order.clear();
    }

    pub fn is_selected(&self, id: i64) -> bool {
        self.by_id.contains_key(&id)
    }

    /// Snapshot of all selected artworks in insertion order.
    pub fn selected(&self) -> Vec<Artwork> {
        self.order
            .iter()
            .filter_map(|id| self.by_id.get(id).cloned())
            .collect()
    }

    pub fn count(&self) -> usize {
        self.by_id.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn artwork(id: i64, title: &str) -> Artwork {
        Artwork {
            id,
            title: Some(title.to_string()),
            artist_display: None,
            place_of_origin: None,
            inscriptions: None,
            date_start: None,
            date_end: None,
        }
    }

    #[test]
    fn add_is_idempotent_and_refreshes_snapshot() {
        let mut store = SelectionStore::new();
        store.add(&[artwork(7, "first snapshot")]);
        store.add(&[artwork(7, "second snapshot")]);

        assert_eq!(store.count(), 1);
        assert_eq!(
            store.selected()[0].title.as_deref(),
            Some("second snapshot")
        );
    }

    #[test]
    fn remove_absent_id_is_a_noop() {
        let mut store = SelectionStore::new();
        store.add(&[artwork(1, "a"), artwork(2, "b")]);
        store.remove(&[99, 2]);

        assert_eq!(store.count(), 1);
        assert!(store.is_selected(1));
        assert!(!store.is_selected(2));
    }

    #[test]
    fn count_matches_enumeration_and_ids_are_unique() {
        let mut store = SelectionStore::new();
        store.add(&[artwork(1, "a"), artwork(2, "b"), artwork(3, "c")]);
        store.remove(&[2]);
        store.add(&[artwork(3, "c2"), artwork(4, "d")]);

        let selected = store.selected();
        assert_eq!(store.count(), selected.len());

        let mut ids: Vec<i64> = selected.iter().map(|a| a.id).collect();
        ids.dedup();
        assert_eq!(ids, vec![1, 3, 4]);
    }

    #[test]
    fn clear_empties_unconditionally() {
        let mut store = SelectionStore::new();
        store.add(&[artwork(1, "a"), artwork(2, "b")]);
        store.clear();

        assert_eq!(store.count(), 0);
        assert!(store.selected().is_empty());
        assert!(!store.is_selected(1));
    }

    #[test]
    fn enumeration_is_insertion_ordered() {
        let mut store = SelectionStore::new();
        store.add(&[artwork(5, "e"), artwork(3, "c"), artwork(9, "i")]);

        let ids: Vec<i64> = store.selected().iter().map(|a| a.id).collect();
        assert_eq!(ids, vec![5, 3, 9]);
    }
}
