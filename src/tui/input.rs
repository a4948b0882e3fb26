use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Represents the result of handling a key event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyAction {
    /// Quit the application
    Quit,
    /// Pass on the current listing
    SwipeLeft,
    /// Save the current listing
    SwipeRight,
    /// Start editing the search term
    StartSearch,
    /// Flip the remote-only preference
    ToggleRemote,
    /// Focus the criteria panel
    FocusCriteria,
    /// Focus the saved listings panel
    FocusSaved,
    /// Toggle help overlay
    Help,
    /// Character typed into the search box
    SearchInput(char),
    /// Delete the last search character
    SearchBackspace,
    /// Accept the current mode and return to browsing
    Confirm,
    /// Leave the current mode, discarding search edits
    Back,
    SelectNext,
    SelectPrevious,
    /// Toggle the selected criterion
    ToggleSelected,
    /// Move the selected criterion one slot up
    MoveSelectedUp,
    /// Move the selected criterion one slot down
    MoveSelectedDown,
    /// Remove the selected saved listing
    RemoveSelected,
    /// No action
    None,
}

/// Maps keyboard events to actions while browsing the deck
pub fn handle_key_event(key: KeyEvent) -> KeyAction {
    match (key.code, key.modifiers) {
        // Quit: q or Ctrl+C
        (KeyCode::Char('q'), KeyModifiers::NONE) => KeyAction::Quit,
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => KeyAction::Quit,
        (KeyCode::Esc, KeyModifiers::NONE) => KeyAction::Quit,

        // Save: Right arrow or l
        (KeyCode::Right, KeyModifiers::NONE) => KeyAction::SwipeRight,
        (KeyCode::Char('l'), KeyModifiers::NONE) => KeyAction::SwipeRight,

        // Pass: Left arrow or h
        (KeyCode::Left, KeyModifiers::NONE) => KeyAction::SwipeLeft,
        (KeyCode::Char('h'), KeyModifiers::NONE) => KeyAction::SwipeLeft,

        (KeyCode::Char('/'), KeyModifiers::NONE) => KeyAction::StartSearch,
        (KeyCode::Char('r'), KeyModifiers::NONE) => KeyAction::ToggleRemote,
        (KeyCode::Char('c'), KeyModifiers::NONE) => KeyAction::FocusCriteria,
        (KeyCode::Char('s'), KeyModifiers::NONE) => KeyAction::FocusSaved,
        (KeyCode::Char('?'), KeyModifiers::NONE) => KeyAction::Help,

        _ => KeyAction::None,
    }
}

/// Maps keyboard events while the search box has focus
pub fn handle_search_input(key: KeyEvent) -> KeyAction {
    match (key.code, key.modifiers) {
        (KeyCode::Enter, _) => KeyAction::Confirm,
        (KeyCode::Esc, _) => KeyAction::Back,
        (KeyCode::Backspace, _) => KeyAction::SearchBackspace,
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => KeyAction::Quit,
        (KeyCode::Char(c), KeyModifiers::NONE | KeyModifiers::SHIFT) => KeyAction::SearchInput(c),
        _ => KeyAction::None,
    }
}

/// Maps keyboard events while a side panel (criteria or saved) has focus
pub fn handle_panel_input(key: KeyEvent) -> KeyAction {
    match (key.code, key.modifiers) {
        (KeyCode::Esc, _) | (KeyCode::Enter, _) => KeyAction::Confirm,
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => KeyAction::Quit,

        // Reorder: Shift+arrows or K/J
        (KeyCode::Up, KeyModifiers::SHIFT) => KeyAction::MoveSelectedUp,
        (KeyCode::Down, KeyModifiers::SHIFT) => KeyAction::MoveSelectedDown,
        (KeyCode::Char('K'), _) => KeyAction::MoveSelectedUp,
        (KeyCode::Char('J'), _) => KeyAction::MoveSelectedDown,

        (KeyCode::Up, KeyModifiers::NONE) => KeyAction::SelectPrevious,
        (KeyCode::Down, KeyModifiers::NONE) => KeyAction::SelectNext,
        (KeyCode::Char('k'), KeyModifiers::NONE) => KeyAction::SelectPrevious,
        (KeyCode::Char('j'), KeyModifiers::NONE) => KeyAction::SelectNext,

        (KeyCode::Char(' '), KeyModifiers::NONE) => KeyAction::ToggleSelected,
        (KeyCode::Char('d'), KeyModifiers::NONE) => KeyAction::RemoveSelected,
        (KeyCode::Delete, _) => KeyAction::RemoveSelected,

        _ => KeyAction::None,
    }
}
