//! Flat list projection over the event store.

use crate::core::store::EventStore;
use crate::errors::AppResult;
use crate::models::event::EventRecord;
use crate::models::index_path::IndexPath;

/// Hierarchical list contract consumed by list views.
///
/// Items are addressed by [`IndexPath`]; the root path asks about top-level
/// items.
pub trait DataModel {
    fn child_count(&self, path: &IndexPath) -> usize;

    fn has_children(&self, path: &IndexPath) -> bool {
        self.child_count(path) > 0
    }

    fn data(&self, path: &IndexPath) -> String;

    fn item_type(&self, path: &IndexPath) -> String;
}

/// Exposes store rows as a one-level list. Holds no state of its own:
/// each query is answered from the store as it is at call time.
pub struct EventListProjection<'a> {
    store: &'a EventStore,
}

impl<'a> EventListProjection<'a> {
    pub fn new(store: &'a EventStore) -> Self {
        Self { store }
    }

    /// Structured lookup: `Ok(None)` for paths that do not address a record.
    pub fn try_value_at(&self, path: &IndexPath) -> AppResult<Option<EventRecord>> {
        let Some(pos) = path.as_row() else {
            return Ok(None);
        };
        match self.store.fetch_by_position(pos) {
            Ok(ev) => Ok(Some(ev)),
            Err(e) if e.is_not_found() => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Rendered rows, fetched one at a time as the iterator advances.
    pub fn rows(&self) -> impl Iterator<Item = String> + '_ {
        let total = self.child_count(&IndexPath::root());
        (0..total).map(move |i| self.data(&IndexPath::row(i)))
    }
}

impl DataModel for EventListProjection<'_> {
    fn child_count(&self, path: &IndexPath) -> usize {
        if path.is_root() {
            usize::try_from(self.store.count_or_zero()).unwrap_or(0)
        } else {
            0
        }
    }

    fn data(&self, path: &IndexPath) -> String {
        match path.as_row() {
            Some(pos) => self.store.summary_at(pos),
            None => String::new(),
        }
    }

    fn item_type(&self, _path: &IndexPath) -> String {
        String::new()
    }
}
