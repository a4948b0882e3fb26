use super::criteria::CriteriaList;
use super::deck::{Deck, Transition};
use super::filter::{filter_listings, FilterOptions, KeywordMatcher, RemoteMatcher};
use super::saved::SavedSet;
use super::{Listing, ListingId, SwipeDirection};
use crate::settle::{SettleScheduler, SettleTicket, DEFAULT_SETTLE_DELAY};
use std::time::Duration;

/// Counters about the gestures made during the session
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionStats {
    pub accepted: usize,
    pub rejected: usize,
    pub saved: usize,
}

/// Owns every piece of deck state and applies user gestures to it.
///
/// All filter inputs (catalog, criteria, search, remote preference) are
/// mutated through the session, which recomputes the deck and rewinds the
/// cursor whenever one of them actually changes.
///
/// A swipe runs in two phases. The first happens before `swipe` returns:
/// the transition marker is set and, for a right swipe, the current
/// listing is saved. The second (cursor advance, marker cleared) is
/// deferred by the settle delay and applied from `tick`. A second swipe
/// arriving while the first is still settling completes the first
/// immediately, so each gesture acts on its own card.
pub struct SwipeSession {
    catalog: Vec<Listing>,
    criteria: CriteriaList,
    options: FilterOptions,
    remote: Box<dyn RemoteMatcher>,
    deck: Deck,
    saved: SavedSet,
    scheduler: Box<dyn SettleScheduler>,
    settle_delay: Duration,
    pending: Option<SettleTicket>,
    next_ticket: u64,
    accepted: usize,
    rejected: usize,
}

impl SwipeSession {
    /// Session over `catalog` with every criterion active, no search and
    /// the default remote matcher.
    pub fn new(catalog: Vec<Listing>, scheduler: Box<dyn SettleScheduler>) -> Self {
        let mut session = Self {
            catalog,
            criteria: CriteriaList::default(),
            options: FilterOptions::default(),
            remote: Box::new(KeywordMatcher::default()),
            deck: Deck::default(),
            saved: SavedSet::new(),
            scheduler,
            settle_delay: DEFAULT_SETTLE_DELAY,
            pending: None,
            next_ticket: 0,
            accepted: 0,
            rejected: 0,
        };
        session.recompute();
        session
    }

    pub fn with_criteria(mut self, criteria: CriteriaList) -> Self {
        self.criteria = criteria;
        self.recompute();
        self
    }

    pub fn with_remote_matcher(mut self, remote: impl RemoteMatcher + 'static) -> Self {
        self.remote = Box::new(remote);
        self.recompute();
        self
    }

    pub fn with_search_term(mut self, term: impl Into<String>) -> Self {
        self.options.search = term.into();
        self.recompute();
        self
    }

    pub fn with_remote_only(mut self, remote_only: bool) -> Self {
        self.options.remote_only = remote_only;
        self.recompute();
        self
    }

    pub fn with_settle_delay(mut self, delay: Duration) -> Self {
        self.settle_delay = delay;
        self
    }

    pub fn catalog(&self) -> &[Listing] {
        &self.catalog
    }

    pub fn criteria(&self) -> &CriteriaList {
        &self.criteria
    }

    pub fn search_term(&self) -> &str {
        &self.options.search
    }

    pub fn remote_only(&self) -> bool {
        self.options.remote_only
    }

    pub fn remote_matcher(&self) -> &dyn RemoteMatcher {
        self.remote.as_ref()
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn current(&self) -> Option<&Listing> {
        self.deck.current()
    }

    pub fn transition(&self) -> Transition {
        self.deck.transition()
    }

    /// True while a gesture is waiting for its settle delay
    pub fn is_settling(&self) -> bool {
        self.pending.is_some()
    }

    pub fn settle_delay(&self) -> Duration {
        self.settle_delay
    }

    pub fn saved(&self) -> &SavedSet {
        &self.saved
    }

    /// Saved listings in the order they were saved.
    ///
    /// Ids no longer present in the catalog are skipped.
    pub fn saved_listings(&self) -> Vec<&Listing> {
        self.saved
            .iter()
            .filter_map(|id| self.catalog.iter().find(|l| l.id == id))
            .collect()
    }

    pub fn stats(&self) -> SessionStats {
        SessionStats {
            accepted: self.accepted,
            rejected: self.rejected,
            saved: self.saved.len(),
        }
    }

    pub fn toggle_criterion(&mut self, id: &str) -> bool {
        if !self.criteria.toggle(id) {
            return false;
        }
        tracing::debug!(criterion = id, "criterion toggled");
        self.recompute();
        true
    }

    /// Reorders criteria. Order does not feed the filter, so the deck is
    /// left untouched.
    pub fn move_criterion(&mut self, id: &str, reference_id: &str) -> bool {
        let moved = self.criteria.move_to(id, reference_id);
        if moved {
            tracing::debug!(criterion = id, reference = reference_id, "criterion moved");
        }
        moved
    }

    pub fn move_criterion_up(&mut self, id: &str) -> bool {
        self.criteria.move_up(id)
    }

    pub fn move_criterion_down(&mut self, id: &str) -> bool {
        self.criteria.move_down(id)
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) -> bool {
        let term = term.into();
        if term == self.options.search {
            return false;
        }
        self.options.search = term;
        self.recompute();
        true
    }

    pub fn set_remote_only(&mut self, remote_only: bool) -> bool {
        if remote_only == self.options.remote_only {
            return false;
        }
        self.options.remote_only = remote_only;
        self.recompute();
        true
    }

    /// Replaces the catalog. Saved ids are kept even if their listing is gone.
    pub fn set_listings(&mut self, catalog: Vec<Listing>) {
        self.catalog = catalog;
        self.recompute();
    }

    pub fn remove_saved(&mut self, id: ListingId) -> bool {
        let removed = self.saved.remove(id);
        if removed {
            tracing::debug!(listing = id, "listing removed from saved set");
        }
        removed
    }

    /// Starts a gesture on the current card.
    ///
    /// Returns false, with no state change and nothing scheduled, when the
    /// deck is empty.
    pub fn swipe(&mut self, direction: SwipeDirection) -> bool {
        if self.deck.is_empty() {
            tracing::debug!(?direction, "swipe ignored on empty deck");
            return false;
        }

        if let Some(previous) = self.pending {
            self.scheduler.cancel(previous);
            self.complete(previous);
        }

        let Some(listing_id) = self.deck.current().map(|l| l.id) else {
            return false;
        };

        match direction {
            SwipeDirection::Right => {
                self.deck.set_transition(Transition::Right);
                self.saved.add(listing_id);
                self.accepted += 1;
            }
            SwipeDirection::Left => {
                self.deck.set_transition(Transition::Left);
                self.rejected += 1;
            }
        }

        let ticket = SettleTicket {
            id: self.next_ticket,
            version: self.deck.version(),
        };
        self.next_ticket += 1;
        self.pending = Some(ticket);
        self.scheduler.schedule(ticket, self.settle_delay);

        tracing::debug!(
            listing = listing_id,
            ?direction,
            ticket = ticket.id,
            "swipe started"
        );
        true
    }

    /// Applies every settle completion that has come due.
    ///
    /// Returns how many gestures were completed.
    pub fn tick(&mut self) -> usize {
        self.scheduler
            .drain_due()
            .into_iter()
            .filter(|&ticket| self.complete(ticket))
            .count()
    }

    fn complete(&mut self, ticket: SettleTicket) -> bool {
        if self.pending != Some(ticket) {
            tracing::trace!(ticket = ticket.id, "ignoring superseded settle ticket");
            return false;
        }
        self.pending = None;

        if ticket.version == self.deck.version() {
            self.deck.advance();
        } else {
            tracing::debug!(
                ticket = ticket.id,
                "deck changed while settling, advance dropped"
            );
        }
        self.deck.set_transition(Transition::None);
        true
    }

    fn recompute(&mut self) {
        self.options.active_labels = self.criteria.active_labels();
        let filtered = filter_listings(&self.catalog, &self.options, self.remote.as_ref());
        tracing::debug!(
            matcher = self.remote.name(),
            input = self.catalog.len(),
            output = filtered.len(),
            "deck recomputed"
        );
        self.deck.replace(filtered);
    }
}
