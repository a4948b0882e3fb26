use super::Listing;

/// Visual state of the card while a gesture settles
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Transition {
    #[default]
    None,
    Left,
    Right,
}

/// Circular cursor over the filtered sequence.
///
/// `version` changes every time the sequence is replaced, so deferred work
/// captured against an older sequence can tell it is stale.
#[derive(Debug, Clone, Default)]
pub struct Deck {
    sequence: Vec<Listing>,
    index: Option<usize>,
    version: u64,
    transition: Transition,
}

impl Deck {
    pub fn new(sequence: Vec<Listing>) -> Self {
        let mut deck = Self::default();
        deck.replace(sequence);
        deck
    }

    /// Installs a freshly filtered sequence and rewinds to its first card
    pub fn replace(&mut self, sequence: Vec<Listing>) {
        self.sequence = sequence;
        self.version = self.version.wrapping_add(1);
        self.reset();
    }

    pub fn reset(&mut self) {
        self.index = if self.sequence.is_empty() { None } else { Some(0) };
    }

    pub fn current(&self) -> Option<&Listing> {
        self.index.and_then(|i| self.sequence.get(i))
    }

    /// Steps forward, wrapping to the first card after the last
    pub fn advance(&mut self) {
        let len = self.sequence.len();
        self.index = match self.index {
            Some(i) if len > 0 => Some((i + 1) % len),
            _ => None,
        };
    }

    pub fn position(&self) -> Option<usize> {
        self.index
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn sequence(&self) -> &[Listing] {
        &self.sequence
    }

    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }

    pub fn transition(&self) -> Transition {
        self.transition
    }

    pub(crate) fn set_transition(&mut self, transition: Transition) {
        self.transition = transition;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{test_listing, EmploymentKind};

    fn deck_of(n: u32) -> Deck {
        Deck::new(
            (1..=n)
                .map(|id| test_listing(id, EmploymentKind::Permanent))
                .collect(),
        )
    }

    #[test]
    fn test_new_deck_starts_at_first_card() {
        let deck = deck_of(3);
        assert_eq!(deck.position(), Some(0));
        assert_eq!(deck.current().unwrap().id, 1);
        assert_eq!(deck.transition(), Transition::None);
    }

    #[test]
    fn test_empty_deck_has_no_card() {
        let mut deck = Deck::new(vec![]);
        assert!(deck.current().is_none());
        assert_eq!(deck.position(), None);

        deck.advance();
        assert_eq!(deck.position(), None);
    }

    #[test]
    fn test_advance_wraps_around() {
        let mut deck = deck_of(3);
        deck.advance();
        deck.advance();
        assert_eq!(deck.current().unwrap().id, 3);

        deck.advance();
        assert_eq!(deck.position(), Some(0));
    }

    #[test]
    fn test_single_card_deck_stays_put() {
        let mut deck = deck_of(1);
        deck.advance();
        assert_eq!(deck.position(), Some(0));
    }

    #[test]
    fn test_replace_resets_and_bumps_version() {
        let mut deck = deck_of(4);
        deck.advance();
        deck.advance();
        let version = deck.version();

        deck.replace(vec![test_listing(9, EmploymentKind::Temporary)]);

        assert_eq!(deck.position(), Some(0));
        assert_eq!(deck.current().unwrap().id, 9);
        assert_ne!(deck.version(), version);
    }

    #[test]
    fn test_replace_with_empty_clears_index() {
        let mut deck = deck_of(2);
        deck.advance();
        deck.replace(vec![]);
        assert!(deck.current().is_none());
        assert!(deck.is_empty());
    }
}
