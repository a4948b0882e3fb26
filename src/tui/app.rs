//! Translates key actions into session operations.

use super::input::{handle_key_event, handle_panel_input, handle_search_input, KeyAction};
use crate::domain::{SwipeDirection, SwipeSession};
use crossterm::event::KeyEvent;

/// UI view state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewState {
    /// Swiping through the deck
    Browsing,
    /// Typing into the search box
    Search,
    /// Criteria panel focused
    Criteria,
    /// Saved listings panel focused
    Saved,
    /// Help overlay visible
    Help,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    Quit,
}

/// Presentation-only state: focus, selections, and the search term as it
/// was when editing began
#[derive(Debug, Clone)]
pub struct UiState {
    pub view: ViewState,
    pub criteria_cursor: usize,
    pub saved_cursor: usize,
    search_before_edit: String,
}

impl UiState {
    pub fn new() -> Self {
        Self {
            view: ViewState::Browsing,
            criteria_cursor: 0,
            saved_cursor: 0,
            search_before_edit: String::new(),
        }
    }

    /// Routes a key to the mapper for the current view
    pub fn map_key(&self, key: KeyEvent) -> KeyAction {
        match self.view {
            ViewState::Browsing => handle_key_event(key),
            ViewState::Search => handle_search_input(key),
            ViewState::Criteria | ViewState::Saved => handle_panel_input(key),
            // Any key closes help
            ViewState::Help => KeyAction::Back,
        }
    }

    /// Applies one action to the session.
    pub fn apply(&mut self, session: &mut SwipeSession, action: KeyAction) -> LoopControl {
        match action {
            KeyAction::Quit => return LoopControl::Quit,
            KeyAction::SwipeLeft => {
                session.swipe(SwipeDirection::Left);
            }
            KeyAction::SwipeRight => {
                session.swipe(SwipeDirection::Right);
            }
            KeyAction::StartSearch => {
                self.search_before_edit = session.search_term().to_string();
                self.view = ViewState::Search;
            }
            KeyAction::ToggleRemote => {
                let remote_only = !session.remote_only();
                session.set_remote_only(remote_only);
            }
            KeyAction::FocusCriteria => self.view = ViewState::Criteria,
            KeyAction::FocusSaved => {
                self.clamp_saved_cursor(session);
                self.view = ViewState::Saved;
            }
            KeyAction::Help => self.view = ViewState::Help,
            KeyAction::SearchInput(c) => {
                let mut term = session.search_term().to_string();
                term.push(c);
                session.set_search_term(term);
            }
            KeyAction::SearchBackspace => {
                let mut term = session.search_term().to_string();
                term.pop();
                session.set_search_term(term);
            }
            KeyAction::Confirm => self.view = ViewState::Browsing,
            KeyAction::Back => {
                if self.view == ViewState::Search {
                    session.set_search_term(self.search_before_edit.clone());
                }
                self.view = ViewState::Browsing;
            }
            KeyAction::SelectNext => self.select(session, 1),
            KeyAction::SelectPrevious => self.select(session, -1),
            KeyAction::ToggleSelected => {
                if self.view == ViewState::Criteria {
                    if let Some(id) = self.selected_criterion(session) {
                        session.toggle_criterion(&id);
                    }
                }
            }
            KeyAction::MoveSelectedUp => {
                if let Some(id) = self.selected_criterion(session) {
                    if session.move_criterion_up(&id) {
                        self.criteria_cursor -= 1;
                    }
                }
            }
            KeyAction::MoveSelectedDown => {
                if let Some(id) = self.selected_criterion(session) {
                    if session.move_criterion_down(&id) {
                        self.criteria_cursor += 1;
                    }
                }
            }
            KeyAction::RemoveSelected => {
                if self.view == ViewState::Saved {
                    let selected = session
                        .saved_listings()
                        .get(self.saved_cursor)
                        .map(|listing| listing.id);
                    if let Some(id) = selected {
                        session.remove_saved(id);
                        self.clamp_saved_cursor(session);
                    }
                }
            }
            KeyAction::None => {}
        }
        LoopControl::Continue
    }

    fn selected_criterion(&self, session: &SwipeSession) -> Option<String> {
        if self.view != ViewState::Criteria {
            return None;
        }
        session
            .criteria()
            .items()
            .get(self.criteria_cursor)
            .map(|c| c.id.clone())
    }

    fn select(&mut self, session: &SwipeSession, step: isize) {
        let (cursor, len) = match self.view {
            ViewState::Criteria => (&mut self.criteria_cursor, session.criteria().len()),
            ViewState::Saved => (&mut self.saved_cursor, session.saved_listings().len()),
            _ => return,
        };
        if len == 0 {
            *cursor = 0;
            return;
        }
        *cursor = (*cursor as isize + step).clamp(0, len as isize - 1) as usize;
    }

    /// Keeps the cursor on a row of the saved panel, which lists only ids
    /// still present in the catalog
    fn clamp_saved_cursor(&mut self, session: &SwipeSession) {
        let rows = session.saved_listings().len();
        self.saved_cursor = self.saved_cursor.min(rows.saturating_sub(1));
    }
}

impl Default for UiState {
    fn default() -> Self {
        Self::new()
    }
}
