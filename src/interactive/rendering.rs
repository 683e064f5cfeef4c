//! TUI rendering with ratatui
//!
//! Grid, clue lists and score panels for the play mode.

use super::app::{App, InputMode, MessageStyle};
use crate::core::{Cell, Direction as Axis};
use crate::output::formatters::{clue_label, clues_for, direction_heading, star_string};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // Header
            Constraint::Min(17),    // Grid + clues
            Constraint::Length(7),  // Score + messages
            Constraint::Length(1),  // Status bar
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(64), // Grid
            Constraint::Min(30),    // Clues
        ])
        .split(chunks[1]);

    render_grid(f, app, main_chunks[0]);
    render_clues(f, app, main_chunks[1]);

    let bottom_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(chunks[2]);

    render_score(f, app, bottom_chunks[0]);
    render_messages(f, app, bottom_chunks[1]);

    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let stats = app.session.stats();
    let title = format!(
        "✏️  CROSSWORD  |  Score: {}  {}",
        stats.score,
        star_string(stats.stars)
    );
    let header = Paragraph::new(title)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_grid(f: &mut Frame, app: &App, area: Rect) {
    let current = app.current_word();

    let lines: Vec<Line> = app
        .session
        .layout()
        .grid
        .rows()
        .map(|row| {
            let spans: Vec<Span> = row
                .iter()
                .map(|cell| {
                    let in_current = current.is_some_and(|w| w.covers(cell.row, cell.col));
                    cell_span(app, cell, in_current)
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    let grid = Paragraph::new(lines).block(
        Block::default()
            .title(" Grid ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(grid, area);
}

/// Four columns per cell: clue number (2), letter, spacer
fn cell_span(app: &App, cell: &Cell, in_current: bool) -> Span<'static> {
    if !cell.is_used() {
        return Span::styled("    ", Style::default().bg(Color::Black));
    }

    let number = cell
        .number
        .map_or_else(|| "  ".to_string(), |n| format!("{n:>2}"));
    let letter = app.session.answer(cell.row, cell.col).unwrap_or('_');
    let text = format!("{number}{letter} ");

    let completed = cell
        .owner_word_ids
        .iter()
        .any(|id| app.session.is_completed(id));

    let mut style = Style::default().fg(Color::White);
    if completed {
        style = style.fg(Color::Green).add_modifier(Modifier::BOLD);
    }
    if in_current {
        style = style.bg(Color::DarkGray);
    }
    if (cell.row, cell.col) == app.cursor {
        style = style.add_modifier(Modifier::REVERSED);
    }
    Span::styled(text, style)
}

fn render_clues(f: &mut Frame, app: &App, area: Rect) {
    let layout = app.session.layout();
    let placed = &layout.placed_words;
    let current_id = app.current_word().map(|w| w.id.as_str());

    let mut lines = Vec::new();
    for axis in [Axis::Horizontal, Axis::Vertical] {
        lines.push(Line::from(Span::styled(
            direction_heading(axis),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )));

        let clues = clues_for(placed, axis);
        if clues.is_empty() {
            lines.push(Line::from(Span::styled(
                "  (none)",
                Style::default().fg(Color::DarkGray),
            )));
        }

        for word in clues {
            let done = app.session.is_completed(&word.id);
            let mut style = if done {
                Style::default().fg(Color::Green)
            } else {
                Style::default().fg(Color::White)
            };
            if current_id == Some(word.id.as_str()) {
                style = style.add_modifier(Modifier::BOLD | Modifier::UNDERLINED);
            }

            lines.push(Line::from(vec![
                Span::styled(
                    format!("{:>2}. ", clue_label(word, &layout.grid)),
                    Style::default().fg(Color::Yellow),
                ),
                Span::styled(format!("{} ({})", word.clue, word.len()), style),
                Span::raw(if done { " ✓" } else { "" }),
            ]));
        }
        lines.push(Line::from(""));
    }

    let clues = Paragraph::new(lines)
        .block(
            Block::default()
                .title(" Clues ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .wrap(Wrap { trim: false });
    f.render_widget(clues, area);
}

fn render_score(f: &mut Frame, app: &App, area: Rect) {
    let stats = app.session.stats();
    let percent = if stats.total_words == 0 {
        0
    } else {
        (stats.words_completed * 100 / stats.total_words) as u16
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Progress ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(Color::Green))
        .percent(percent.min(100))
        .label(format!(
            "{}/{} words | streak {}",
            stats.words_completed, stats.total_words, stats.streak
        ));

    f.render_widget(gauge, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .take(5)
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let help_text = match app.input_mode {
        InputMode::Finished => "n: New puzzle | r: Replay | q: Quit".to_string(),
        InputMode::Playing => {
            let axis = match app.direction {
                Axis::Horizontal => "→",
                Axis::Vertical => "↓",
            };
            format!(
                "{axis} | Arrows: Move | Tab: Direction | Ctrl-T: Hint | Ctrl-R: Clear | Ctrl-N: New | Esc: Quit | Solved: {}",
                app.puzzles_solved
            )
        }
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, area);
}
