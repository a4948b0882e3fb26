use super::EmploymentKind;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// One togglable filter facet, matched against listing kinds by label
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Criterion {
    pub id: String,
    pub label: String,
    pub active: bool,
}

impl Criterion {
    pub fn new(id: &str, label: &str, active: bool) -> Self {
        Self {
            id: id.to_string(),
            label: label.to_string(),
            active,
        }
    }

    fn for_kind(kind: EmploymentKind, active: bool) -> Self {
        let label = kind.label();
        Self::new(&label.to_lowercase(), label, active)
    }
}

/// One criterion per employment kind, all active
pub fn default_criteria() -> Vec<Criterion> {
    EmploymentKind::ALL
        .iter()
        .map(|&kind| Criterion::for_kind(kind, true))
        .collect()
}

/// Ordered list of criteria.
///
/// Length and the identifier set never change after construction; only
/// the order and the active flags do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CriteriaList {
    items: Vec<Criterion>,
}

impl CriteriaList {
    pub fn new(items: Vec<Criterion>) -> Self {
        Self { items }
    }

    /// Default criteria with only the given kinds active.
    ///
    /// An empty slice means every kind is active.
    pub fn with_active_kinds(kinds: &[EmploymentKind]) -> Self {
        let items = EmploymentKind::ALL
            .iter()
            .map(|&kind| Criterion::for_kind(kind, kinds.is_empty() || kinds.contains(&kind)))
            .collect();
        Self { items }
    }

    pub fn items(&self) -> &[Criterion] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Criterion> {
        self.items.iter().find(|c| c.id == id)
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.items.iter().position(|c| c.id == id)
    }

    /// Flips the active flag. Returns false (and does nothing) for unknown ids.
    pub fn toggle(&mut self, id: &str) -> bool {
        match self.items.iter_mut().find(|c| c.id == id) {
            Some(criterion) => {
                criterion.active = !criterion.active;
                true
            }
            None => false,
        }
    }

    /// Moves `id` into the slot currently held by `reference_id`.
    ///
    /// The criterion is removed and reinserted at the reference's index, so
    /// it lands right after the reference when moving down the list and
    /// right before it when moving up. Everything else keeps its relative
    /// order. Returns false when nothing moved.
    pub fn move_to(&mut self, id: &str, reference_id: &str) -> bool {
        if id == reference_id {
            return false;
        }
        let (Some(from), Some(to)) = (self.position(id), self.position(reference_id)) else {
            return false;
        };

        let criterion = self.items.remove(from);
        self.items.insert(to, criterion);
        true
    }

    /// Swaps `id` with its predecessor
    pub fn move_up(&mut self, id: &str) -> bool {
        match self.position(id) {
            Some(index) if index > 0 => {
                let reference = self.items[index - 1].id.clone();
                self.move_to(id, &reference)
            }
            _ => false,
        }
    }

    /// Swaps `id` with its successor
    pub fn move_down(&mut self, id: &str) -> bool {
        match self.position(id) {
            Some(index) if index + 1 < self.items.len() => {
                let reference = self.items[index + 1].id.clone();
                self.move_to(id, &reference)
            }
            _ => false,
        }
    }

    /// Lowercased labels of the active criteria
    pub fn active_labels(&self) -> HashSet<String> {
        self.items
            .iter()
            .filter(|c| c.active)
            .map(|c| c.label.to_lowercase())
            .collect()
    }
}

impl Default for CriteriaList {
    fn default() -> Self {
        Self::new(default_criteria())
    }
}
