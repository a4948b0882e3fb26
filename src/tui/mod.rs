// TUI module for rendering the terminal interface
pub mod app;
pub mod colors;
pub mod input;

// Re-exports
pub use app::{LoopControl, UiState, ViewState};
pub use colors::*;
pub use input::{handle_key_event, handle_panel_input, handle_search_input, KeyAction};

use crate::domain::{Listing, SwipeSession, Transition};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Renders the whole screen, including the help overlay when open
pub fn render(frame: &mut Frame, session: &SwipeSession, ui: &UiState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Card and side panels
            Constraint::Length(3), // Footer
        ])
        .split(frame.area());

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(62), Constraint::Percentage(38)])
        .split(chunks[1]);

    let side = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(6), Constraint::Min(0)])
        .split(body[1]);

    render_header(frame, chunks[0], session, ui);
    render_card(frame, body[0], session);
    render_criteria(frame, side[0], session, ui);
    render_saved(frame, side[1], session, ui);
    render_footer(frame, chunks[2], ui);

    if ui.view == ViewState::Help {
        render_help_overlay(frame);
    }
}

fn panel_block(title: String, focused: bool) -> Block<'static> {
    let border = if focused { ACCENT_HIGHLIGHT } else { BORDER_COLOR };
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border))
        .title(title)
}

fn render_header(frame: &mut Frame, area: Rect, session: &SwipeSession, ui: &UiState) {
    let deck = session.deck();
    let position = match deck.position() {
        Some(index) => format!(" Card {}/{} ", index + 1, deck.len()),
        None => " No cards ".to_string(),
    };

    let search_style = if ui.view == ViewState::Search {
        Style::default()
            .fg(ACCENT_HIGHLIGHT)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(TEXT_PRIMARY)
    };
    let search = if ui.view == ViewState::Search {
        format!("{}_", session.search_term())
    } else {
        session.search_term().to_string()
    };

    let remote = if session.remote_only() { "on" } else { "off" };

    let line = Line::from(vec![
        Span::styled(
            position,
            Style::default()
                .fg(ACCENT_HIGHLIGHT)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled("  search: ", Style::default().fg(TEXT_SECONDARY)),
        Span::styled(search, search_style),
        Span::styled("  remote only: ", Style::default().fg(TEXT_SECONDARY)),
        Span::styled(remote, Style::default().fg(TEXT_PRIMARY)),
        Span::styled("  saved: ", Style::default().fg(TEXT_SECONDARY)),
        Span::styled(
            session.saved().len().to_string(),
            Style::default().fg(ACCENT_SECONDARY),
        ),
    ]);

    let header = Paragraph::new(line).block(panel_block(" jobswipe ".to_string(), false));
    frame.render_widget(header, area);
}

fn card_lines(listing: &Listing, saved: bool) -> Vec<Line<'static>> {
    let label = |text: &str| Span::styled(text.to_string(), Style::default().fg(TEXT_SECONDARY));

    let mut lines = vec![
        Line::from(Span::styled(
            listing.title.clone(),
            Style::default()
                .fg(TEXT_PRIMARY)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            listing.company.clone(),
            Style::default().fg(ACCENT_HIGHLIGHT),
        )),
        Line::from(""),
        Line::from(vec![label("Location:  "), Span::raw(listing.location.clone())]),
        Line::from(vec![label("Contract:  "), Span::raw(listing.kind.label())]),
        Line::from(vec![label("Salary:    "), Span::raw(listing.salary.clone())]),
        Line::from(vec![
            label("Posted:    "),
            Span::raw(listing.posted.format("%Y-%m-%d").to_string()),
        ]),
        Line::from(""),
        Line::from(listing.description.clone()),
    ];

    if !listing.requirements.is_empty() {
        lines.push(Line::from(""));
        lines.push(Line::from(label("Requirements")));
        for requirement in &listing.requirements {
            lines.push(Line::from(format!("  • {}", requirement)));
        }
    }

    if saved {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "✓ Saved",
            Style::default().fg(ACCENT_SECONDARY),
        )));
    }

    lines
}

fn render_card(frame: &mut Frame, area: Rect, session: &SwipeSession) {
    let Some(listing) = session.current() else {
        frame.render_widget(render_empty_state_widget(), area);
        return;
    };

    let (border, marker) = match session.transition() {
        Transition::Right => (ACCENT_SECONDARY, " → saved "),
        Transition::Left => (ACCENT_PRIMARY, " ← passed "),
        Transition::None => (BORDER_COLOR, ""),
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border))
        .title(format!(" #{} ", listing.id))
        .title_bottom(Line::from(marker).alignment(Alignment::Right));

    let card = Paragraph::new(card_lines(listing, session.saved().contains(listing.id)))
        .block(block)
        .style(Style::default().fg(TEXT_PRIMARY))
        .wrap(Wrap { trim: false });

    frame.render_widget(card, area);
}

/// Creates an empty state widget for when no listing passes the filters
fn render_empty_state_widget() -> Paragraph<'static> {
    let lines = vec![
        Line::from(""),
        Line::from(""),
        Line::from(Span::styled(
            "No Listings Match",
            Style::default()
                .fg(ACCENT_HIGHLIGHT)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Enable more contract types, clear the search or turn off remote only.",
            Style::default().fg(TEXT_SECONDARY),
        )),
    ];

    Paragraph::new(lines)
        .block(panel_block(" Deck ".to_string(), false))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: false })
}

fn render_criteria(frame: &mut Frame, area: Rect, session: &SwipeSession, ui: &UiState) {
    let focused = ui.view == ViewState::Criteria;
    let lines: Vec<Line> = session
        .criteria()
        .items()
        .iter()
        .enumerate()
        .map(|(i, criterion)| {
            let mark = if criterion.active { "[x]" } else { "[ ]" };
            let style = if focused && i == ui.criteria_cursor {
                Style::default()
                    .fg(ACCENT_HIGHLIGHT)
                    .add_modifier(Modifier::REVERSED)
            } else if criterion.active {
                Style::default().fg(TEXT_PRIMARY)
            } else {
                Style::default().fg(TEXT_SECONDARY)
            };
            Line::from(Span::styled(format!(" {} {}", mark, criterion.label), style))
        })
        .collect();

    let panel = Paragraph::new(lines).block(panel_block(" Contract types ".to_string(), focused));
    frame.render_widget(panel, area);
}

fn render_saved(frame: &mut Frame, area: Rect, session: &SwipeSession, ui: &UiState) {
    let focused = ui.view == ViewState::Saved;
    let saved = session.saved_listings();

    let lines: Vec<Line> = if saved.is_empty() {
        vec![Line::from(Span::styled(
            " Nothing saved yet",
            Style::default().fg(TEXT_SECONDARY),
        ))]
    } else {
        saved
            .iter()
            .enumerate()
            .map(|(i, listing)| {
                let style = if focused && i == ui.saved_cursor {
                    Style::default()
                        .fg(ACCENT_HIGHLIGHT)
                        .add_modifier(Modifier::REVERSED)
                } else {
                    Style::default().fg(TEXT_PRIMARY)
                };
                Line::from(Span::styled(
                    format!(" {} · {}", listing.title, listing.company),
                    style,
                ))
            })
            .collect()
    };

    let title = format!(" Saved ({}) ", session.saved().len());
    let panel = Paragraph::new(lines).block(panel_block(title, focused));
    frame.render_widget(panel, area);
}

fn render_footer(frame: &mut Frame, area: Rect, ui: &UiState) {
    let hints = match ui.view {
        ViewState::Browsing | ViewState::Help => {
            "←/h pass   →/l save   / search   r remote   c contract types   s saved   ? help   q quit"
        }
        ViewState::Search => "type to filter   Enter keep   Esc discard",
        ViewState::Criteria => "↑↓ select   Space toggle   Shift+↑↓ or K/J move   Esc back",
        ViewState::Saved => "↑↓ select   d remove   Esc back",
    };

    let footer = Paragraph::new(Line::from(Span::styled(
        hints,
        Style::default().fg(TEXT_SECONDARY),
    )))
    .block(panel_block(String::new(), false))
    .alignment(Alignment::Center);

    frame.render_widget(footer, area);
}

/// Renders the help overlay
pub fn render_help_overlay(frame: &mut Frame) {
    let help_area = centered_rect(50, 60, frame.area());

    // Clear background
    frame.render_widget(Clear, help_area);

    let block = Block::default()
        .title(" Help ")
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(ACCENT_HIGHLIGHT))
        .style(Style::default().bg(BG_DARK));

    let inner = block.inner(help_area);
    frame.render_widget(block, help_area);

    let key = |k: &'static str, color| Span::styled(k, Style::default().fg(color));
    let help_lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Keyboard Shortcuts",
            Style::default()
                .fg(ACCENT_HIGHLIGHT)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(vec![key("  → / l   ", ACCENT_SECONDARY), Span::raw("Save listing")]),
        Line::from(vec![key("  ← / h   ", ACCENT_PRIMARY), Span::raw("Pass on listing")]),
        Line::from(vec![key("  /       ", TEXT_SECONDARY), Span::raw("Search")]),
        Line::from(vec![key("  r       ", TEXT_SECONDARY), Span::raw("Toggle remote only")]),
        Line::from(vec![key("  c       ", TEXT_SECONDARY), Span::raw("Contract types")]),
        Line::from(vec![key("  s       ", TEXT_SECONDARY), Span::raw("Saved listings")]),
        Line::from(vec![key("  q / Esc ", TEXT_SECONDARY), Span::raw("Quit")]),
        Line::from(""),
        Line::from(Span::styled(
            "Press any key to close",
            Style::default().fg(TEXT_SECONDARY),
        )),
    ];

    let paragraph = Paragraph::new(help_lines)
        .alignment(Alignment::Left)
        .style(Style::default().fg(TEXT_PRIMARY));

    frame.render_widget(paragraph, inner);
}

/// Helper to create a centered rect
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
