//! TUI application state and logic

use crate::core::{Direction, PlacedWord, WordEntry};
use crate::game::Session;
use crate::layout::{GRID_SIZE, LayoutConfig, LayoutEngine};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use tracing::info;

/// Application state
pub struct App {
    pub words: Vec<WordEntry>,
    pub engine: LayoutEngine,
    pub rng: StdRng,
    pub session: Session,
    pub cursor: (usize, usize),
    pub direction: Direction,
    pub messages: Vec<Message>,
    pub input_mode: InputMode,
    pub puzzles_solved: usize,
    pub should_quit: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMode {
    Playing,
    Finished,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl App {
    /// Create the app and generate the first puzzle
    ///
    /// `seed` pins the layouts and hints; `None` seeds from system entropy.
    #[must_use]
    pub fn new(words: Vec<WordEntry>, config: LayoutConfig, seed: Option<u64>) -> Self {
        let mut rng = seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);
        let engine = LayoutEngine::new(config);
        let session = Session::new(engine.generate(&words, &mut rng));

        let mut app = Self {
            words,
            engine,
            rng,
            session,
            cursor: (GRID_SIZE / 2, GRID_SIZE / 2),
            direction: Direction::Horizontal,
            messages: Vec::new(),
            input_mode: InputMode::Playing,
            puzzles_solved: 0,
            should_quit: false,
        };
        app.focus_first_word();
        app.add_message(
            "Welcome! Type letters to fill the grid.",
            MessageStyle::Info,
        );
        app.report_dropped_words();
        app
    }

    /// Throw away the current grid and lay out the words again
    pub fn new_puzzle(&mut self) {
        let layout = self.engine.generate(&self.words, &mut self.rng);
        info!(placed = layout.placed_words.len(), "new puzzle");
        self.session = Session::new(layout);
        self.input_mode = InputMode::Playing;
        self.messages.clear();
        self.focus_first_word();
        self.add_message("New puzzle generated!", MessageStyle::Info);
        self.report_dropped_words();
    }

    /// Clear every answer on the current grid
    pub fn reset(&mut self) {
        self.session.reset();
        self.input_mode = InputMode::Playing;
        self.add_message("Grid cleared.", MessageStyle::Info);
    }

    pub fn toggle_direction(&mut self) {
        self.direction = self.direction.crossing();
    }

    /// Move to the nearest letter cell in the given direction, if any
    pub fn move_cursor(&mut self, d_row: isize, d_col: isize) {
        let (mut row, mut col) = self.cursor;
        loop {
            let (Some(next_row), Some(next_col)) =
                (row.checked_add_signed(d_row), col.checked_add_signed(d_col))
            else {
                return;
            };
            if next_row >= GRID_SIZE || next_col >= GRID_SIZE {
                return;
            }
            (row, col) = (next_row, next_col);
            if self.is_letter_cell(row, col) {
                self.cursor = (row, col);
                return;
            }
        }
    }

    /// Type a letter under the cursor and advance along the current direction
    pub fn type_letter(&mut self, letter: char) {
        if self.input_mode != InputMode::Playing {
            return;
        }

        let (row, col) = self.cursor;
        match self.session.enter(row, col, letter) {
            Ok(completed) => {
                for id in completed {
                    if let Some(word) = self.session.layout().placed(&id) {
                        let text = format!("✅ {} found! +100", word.text);
                        self.add_message(&text, MessageStyle::Success);
                    }
                }
                self.check_finished();
                self.advance();
            }
            Err(err) => self.add_message(&err.to_string(), MessageStyle::Error),
        }
    }

    /// Erase under the cursor, or step back and erase when already empty
    pub fn backspace(&mut self) {
        let (row, col) = self.cursor;
        if !self.session.clear(row, col) {
            self.retreat();
            let (row, col) = self.cursor;
            self.session.clear(row, col);
        }
    }

    pub fn hint(&mut self) {
        if self.input_mode != InputMode::Playing {
            return;
        }
        match self.session.reveal_hint(&mut self.rng) {
            Some((row, col, letter)) => {
                self.cursor = (row, col);
                self.add_message(&format!("💡 Hint: {letter}"), MessageStyle::Info);
                self.check_finished();
            }
            None => self.add_message("No empty cell left to reveal.", MessageStyle::Error),
        }
    }

    /// The word the cursor is editing, preferring the current direction
    #[must_use]
    pub fn current_word(&self) -> Option<&PlacedWord> {
        let (row, col) = self.cursor;
        let words = &self.session.layout().placed_words;
        words
            .iter()
            .find(|w| w.direction == self.direction && w.covers(row, col))
            .or_else(|| words.iter().find(|w| w.covers(row, col)))
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }

    fn is_letter_cell(&self, row: usize, col: usize) -> bool {
        self.session
            .layout()
            .grid
            .get(row, col)
            .is_some_and(crate::core::Cell::is_used)
    }

    fn focus_first_word(&mut self) {
        if let Some(first) = self.session.layout().placed_words.first() {
            self.cursor = (first.start_row, first.start_col);
            self.direction = first.direction;
        }
    }

    fn advance(&mut self) {
        let (row, col) = self.direction.advance(self.cursor.0, self.cursor.1, 1);
        if self.is_letter_cell(row, col) {
            self.cursor = (row, col);
        }
    }

    fn retreat(&mut self) {
        let (row, col) = self.cursor;
        let previous = match self.direction {
            Direction::Horizontal => col.checked_sub(1).map(|c| (row, c)),
            Direction::Vertical => row.checked_sub(1).map(|r| (r, col)),
        };
        if let Some((row, col)) = previous
            && self.is_letter_cell(row, col)
        {
            self.cursor = (row, col);
        }
    }

    fn check_finished(&mut self) {
        if self.session.is_finished() && self.input_mode == InputMode::Playing {
            self.input_mode = InputMode::Finished;
            self.puzzles_solved += 1;
            let score = self.session.stats().score;
            self.add_message(
                &format!("🎉 Well done! Puzzle complete - {score} points!"),
                MessageStyle::Success,
            );
            self.add_message("Press 'n' for a new puzzle or 'q' to quit.", MessageStyle::Info);
        }
    }

    fn report_dropped_words(&mut self) {
        let dropped: Vec<String> = self
            .session
            .layout()
            .unplaced
            .iter()
            .map(|w| w.text.clone())
            .collect();
        if !dropped.is_empty() {
            self.add_message(
                &format!("Left out: {}", dropped.join(", ")),
                MessageStyle::Error,
            );
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
            match app.input_mode {
                InputMode::Finished => match key.code {
                    KeyCode::Char('c') if ctrl => app.should_quit = true,
                    KeyCode::Char('q') | KeyCode::Esc => app.should_quit = true,
                    KeyCode::Char('n') => app.new_puzzle(),
                    KeyCode::Char('r') => app.reset(),
                    _ => {}
                },
                InputMode::Playing => match key.code {
                    KeyCode::Char('c') if ctrl => app.should_quit = true,
                    KeyCode::Char('n') if ctrl => app.new_puzzle(),
                    KeyCode::Char('r') if ctrl => app.reset(),
                    KeyCode::Char('t') if ctrl => app.hint(),
                    KeyCode::Esc => app.should_quit = true,
                    KeyCode::Tab | KeyCode::Char(' ') => app.toggle_direction(),
                    KeyCode::Up => app.move_cursor(-1, 0),
                    KeyCode::Down => app.move_cursor(1, 0),
                    KeyCode::Left => app.move_cursor(0, -1),
                    KeyCode::Right => app.move_cursor(0, 1),
                    KeyCode::Backspace | KeyCode::Delete => app.backspace(),
                    KeyCode::Char(c) if c.is_alphabetic() => app.type_letter(c),
                    _ => {}
                },
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Difficulty;

    fn app() -> App {
        let words = vec![
            WordEntry::new("chat", "CHAT", "Il miaule", Difficulty::Easy).unwrap(),
            WordEntry::new("achats", "ACHATS", "Emplettes", Difficulty::Medium).unwrap(),
        ];
        App::new(words, LayoutConfig::deterministic(), Some(1))
    }

    #[test]
    fn starts_on_first_word() {
        let app = app();
        // ACHATS anchors the grid at (7, 4)
        assert_eq!(app.cursor, (7, 4));
        assert_eq!(app.direction, Direction::Horizontal);
        assert_eq!(app.current_word().unwrap().id, "achats");
    }

    #[test]
    fn typing_advances_along_word() {
        let mut app = app();
        app.type_letter('a');
        assert_eq!(app.session.answer(7, 4), Some('A'));
        assert_eq!(app.cursor, (7, 5));
    }

    #[test]
    fn typing_whole_puzzle_finishes() {
        let mut app = app();
        for c in "ACHATS".chars() {
            app.type_letter(c);
        }
        app.cursor = (5, 4);
        app.direction = Direction::Vertical;
        for c in "CHAT".chars() {
            app.type_letter(c);
        }

        assert_eq!(app.input_mode, InputMode::Finished);
        assert_eq!(app.puzzles_solved, 1);
        assert_eq!(app.session.stats().score, 200);
    }

    #[test]
    fn cursor_skips_empty_cells_and_stops_at_edge() {
        let mut app = app();
        app.move_cursor(-1, 0);
        // Up from (7, 4) along column 4 reaches the H of CHAT
        assert_eq!(app.cursor, (6, 4));
        app.move_cursor(0, 1);
        // Nothing else on row 6
        assert_eq!(app.cursor, (6, 4));
    }

    #[test]
    fn backspace_steps_back() {
        let mut app = app();
        app.type_letter('A');
        app.type_letter('C');
        assert_eq!(app.cursor, (7, 6));

        app.backspace();
        assert_eq!(app.cursor, (7, 5));
        assert_eq!(app.session.answer(7, 5), None);
        assert_eq!(app.session.answer(7, 4), Some('A'));
    }

    #[test]
    fn toggle_switches_current_word_at_crossing() {
        let mut app = app();
        app.toggle_direction();
        assert_eq!(app.current_word().unwrap().id, "chat");
    }

    #[test]
    fn hint_moves_cursor_to_revealed_cell() {
        let mut app = app();
        app.hint();
        let (row, col) = app.cursor;
        assert!(app.session.answer(row, col).is_some());
    }

    #[test]
    fn opening_messages_are_in_english() {
        let app = app();
        assert_eq!(app.messages[0].text, "Welcome! Type letters to fill the grid.");
    }

    #[test]
    fn messages_are_capped() {
        let mut app = app();
        for i in 0..10 {
            app.add_message(&format!("msg {i}"), MessageStyle::Info);
        }
        assert_eq!(app.messages.len(), 5);
        assert_eq!(app.messages[4].text, "msg 9");
    }
}
