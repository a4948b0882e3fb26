use super::ListingId;
use indexmap::IndexSet;

/// Listings the user accepted, in the order they were saved.
///
/// Survives filter changes; entries leave only through `remove`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SavedSet {
    ids: IndexSet<ListingId>,
}

impl SavedSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns false when the id was already saved
    pub fn add(&mut self, id: ListingId) -> bool {
        self.ids.insert(id)
    }

    /// Returns false when the id was not saved
    pub fn remove(&mut self, id: ListingId) -> bool {
        self.ids.shift_remove(&id)
    }

    pub fn contains(&self, id: ListingId) -> bool {
        self.ids.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = ListingId> + '_ {
        self.ids.iter().copied()
    }
}
