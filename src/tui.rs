//! TUI (Terminal User Interface) module for Hangman
//!
//! This module provides an interactive terminal interface using Ratatui.
//!
//! # Architecture
//! - `TuiInterface`: terminal setup, rendering, and the [`GameInterface`] implementation
//! - `handle_key`: terminal-free key handling for the prompt line
//!
//! # State Machine
//! The UI follows these state transitions:
//! - `EnteringSource` → `EnteringIndex` → `EnteringGuess` (repeats each turn)
//! - `EnteringGuess` → `Confirming` once the round is won or lost
//! - `Confirming` → `EnteringIndex` or back to `EnteringSource` when switching lists

use crate::art;
use crate::cli::parse_index;
use crate::error::WordListError;
use crate::guess::GUESSED_SEPARATOR;
use crate::session::{GameInterface, Question, SessionStatus, Snapshot, UserAction};
use crate::wordbank::WordSource;
use crate::{debug_log, info_log};
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};
use std::io;
use std::path::PathBuf;

const EVENT_POLL_TIMEOUT_MS: u64 = 100;
const ASCII_CONTROL_CHAR_THRESHOLD: u32 = 32;
const GALLOWS_WIDTH: u16 = 15;
const SOURCE_INPUT_LIMIT: usize = 512;
const INDEX_INPUT_LIMIT: usize = 24;
const GUESS_INPUT_LIMIT: usize = 4;

// Style constants for consistent UI
const HEADER_STYLE: Style = Style::new().fg(Color::Cyan).add_modifier(Modifier::BOLD);
const ERROR_STYLE: Style = Style::new().fg(Color::Red);
const SUCCESS_STYLE: Style = Style::new().fg(Color::Green).add_modifier(Modifier::BOLD);
const FAILURE_STYLE: Style = Style::new().fg(Color::Red).add_modifier(Modifier::BOLD);
const WORD_STYLE: Style = Style::new().fg(Color::Yellow).add_modifier(Modifier::BOLD);
const MESSAGE_STYLE: Style = Style::new().fg(Color::Cyan);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum TuiState {
    EnteringSource,
    EnteringIndex,
    EnteringGuess,
    Confirming(Question),
}

impl TuiState {
    fn input_limit(self) -> usize {
        match self {
            Self::EnteringSource => SOURCE_INPUT_LIMIT,
            Self::EnteringIndex => INDEX_INPUT_LIMIT,
            Self::EnteringGuess => GUESS_INPUT_LIMIT,
            Self::Confirming(_) => 0,
        }
    }
}

/// What a key press did to the prompt.
#[derive(Clone, Debug, PartialEq, Eq)]
enum KeyOutcome {
    Pending,
    Submit(String),
    Answer(bool),
    Quit,
}

fn has_modifier_keys(key: &KeyEvent) -> bool {
    key.modifiers.contains(KeyModifiers::ALT) || key.modifiers.contains(KeyModifiers::CONTROL)
}

/// Applies one key press to the prompt line for `state`.
fn handle_key(state: TuiState, input: &mut String, key: KeyEvent) -> KeyOutcome {
    let ctrl_c =
        key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL);
    if key.code == KeyCode::Esc || ctrl_c {
        return KeyOutcome::Quit;
    }
    if has_modifier_keys(&key) {
        debug_log!("handle_key() - Ignoring key with modifier: {:?}", key.modifiers);
        return KeyOutcome::Pending;
    }

    if let TuiState::Confirming(_) = state {
        return match key.code {
            KeyCode::Char('y' | 'Y') => KeyOutcome::Answer(true),
            KeyCode::Char('n' | 'N') => KeyOutcome::Answer(false),
            _ => KeyOutcome::Pending,
        };
    }

    match key.code {
        KeyCode::Char(c) if input.chars().count() < state.input_limit() => {
            input.push(c);
            KeyOutcome::Pending
        }
        KeyCode::Backspace => {
            input.pop();
            KeyOutcome::Pending
        }
        KeyCode::Enter => KeyOutcome::Submit(std::mem::take(input)),
        _ => KeyOutcome::Pending,
    }
}

/// Context for rendering the UI - groups related parameters to avoid too many function arguments.
struct RenderContext<'a> {
    state: TuiState,
    input: &'a str,
    snapshot: Option<&'a Snapshot>,
    word_list: &'a str,
    message: &'a str,
    error_message: &'a str,
    status: &'a str,
}

/// Full-screen terminal interface.
pub struct TuiInterface {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
    state: TuiState,
    input: String,
    snapshot: Option<Snapshot>,
    word_list: String,
    message: String,
    error_message: String,
    status: String,
}

impl TuiInterface {
    pub fn new() -> Result<Self, io::Error> {
        info_log!("TuiInterface::new() - Initializing TUI");
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, cursor::Hide)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        info_log!("Terminal backend created");

        Ok(Self {
            terminal,
            state: TuiState::EnteringSource,
            input: String::new(),
            snapshot: None,
            word_list: String::new(),
            message: String::new(),
            error_message: String::new(),
            status: "Ready to start".to_string(),
        })
    }

    pub fn cleanup(&mut self) -> Result<(), io::Error> {
        disable_raw_mode()?;
        execute!(
            self.terminal.backend_mut(),
            LeaveAlternateScreen,
            cursor::Show
        )?;
        Ok(())
    }

    fn draw(&mut self) -> Result<(), io::Error> {
        let ctx = RenderContext {
            state: self.state,
            input: &self.input,
            snapshot: self.snapshot.as_ref(),
            word_list: &self.word_list,
            message: &self.message,
            error_message: &self.error_message,
            status: &self.status,
        };

        self.terminal.draw(|f| {
            Self::render_static(f, &ctx);
        })?;
        Ok(())
    }

    fn draw_or_log(&mut self) {
        if let Err(e) = self.draw() {
            debug_log!("Draw error: {}", e);
        }
    }

    fn render_static(f: &mut Frame, ctx: &RenderContext) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Title
                Constraint::Min(10),   // Gallows and word
                Constraint::Length(3), // Prompt
                Constraint::Length(3), // Status line
                Constraint::Length(3), // Instructions
            ])
            .split(f.area());

        let body = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(GALLOWS_WIDTH), Constraint::Min(20)])
            .split(chunks[1]);

        Self::render_title(f, chunks[0]);
        Self::render_gallows(f, body[0], ctx.snapshot);
        Self::render_info(f, body[1], ctx);
        Self::render_prompt(f, chunks[2], ctx.state, ctx.input);
        Self::render_status(f, chunks[3], ctx.status);
        Self::render_instructions(f, chunks[4], ctx.state);
    }

    fn render_title(f: &mut Frame, area: Rect) {
        let title = Paragraph::new("HANGMAN")
            .style(HEADER_STYLE)
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(title, area);
    }

    fn render_gallows(f: &mut Frame, area: Rect, snapshot: Option<&Snapshot>) {
        let wrong_guesses = snapshot.map_or(0, |s| s.wrong_guesses);
        let gallows = Paragraph::new(art::gallows(wrong_guesses))
            .block(Block::default().title("Gallows").borders(Borders::ALL));
        f.render_widget(gallows, area);
    }

    fn render_info(f: &mut Frame, area: Rect, ctx: &RenderContext) {
        let mut lines = Vec::new();

        if !ctx.word_list.is_empty() {
            lines.push(Line::from(format!("Word list: {}", ctx.word_list)));
            lines.push(Line::from(""));
        }

        if let Some(snapshot) = ctx.snapshot {
            lines.push(Line::from(vec![
                Span::styled("Word: ", HEADER_STYLE),
                Span::styled(snapshot.revealed.as_str(), WORD_STYLE),
            ]));
            lines.push(Line::from(format!(
                "Wrong guesses: {}",
                snapshot.wrong_guesses
            )));
            let guessed: Vec<String> = snapshot.guessed.iter().map(char::to_string).collect();
            lines.push(Line::from(format!(
                "Guessed: {}",
                guessed.join(GUESSED_SEPARATOR)
            )));
            match snapshot.status {
                SessionStatus::Won => lines.push(Line::from(Span::styled("WIN", SUCCESS_STYLE))),
                SessionStatus::Lost => {
                    lines.push(Line::from(Span::styled("LOSE", FAILURE_STYLE)));
                }
                SessionStatus::AwaitingGuess => {}
            }
            lines.push(Line::from(""));
        }

        if !ctx.message.is_empty() {
            lines.push(Line::from(Span::styled(ctx.message, MESSAGE_STYLE)));
        }
        if !ctx.error_message.is_empty() {
            lines.push(Line::from(Span::styled(ctx.error_message, ERROR_STYLE)));
        }

        let paragraph = Paragraph::new(lines)
            .block(Block::default().title("Information").borders(Borders::ALL))
            .wrap(Wrap { trim: true });
        f.render_widget(paragraph, area);
    }

    fn render_prompt(f: &mut Frame, area: Rect, state: TuiState, input: &str) {
        let label = match state {
            TuiState::EnteringSource => "Word-list path",
            TuiState::EnteringIndex => "Secret word index",
            TuiState::EnteringGuess => "Guess a letter",
            TuiState::Confirming(question) => question.prompt(),
        };
        let paragraph = Paragraph::new(format!("{input}_"))
            .block(Block::default().title(label).borders(Borders::ALL));
        f.render_widget(paragraph, area);
    }

    fn render_status(f: &mut Frame, area: Rect, status: &str) {
        let status_text = if status.is_empty() { "Ready" } else { status };
        let paragraph = Paragraph::new(status_text)
            .style(HEADER_STYLE)
            .block(Block::default().borders(Borders::ALL).title("Status"));
        f.render_widget(paragraph, area);
    }

    fn render_instructions(f: &mut Frame, area: Rect, state: TuiState) {
        let text = match state {
            TuiState::EnteringSource => {
                "Type a path, or leave empty for the built-in list | ENTER: Load | ESC: Quit"
            }
            TuiState::EnteringIndex => "Type any whole number | ENTER: Pick word | ESC: Quit",
            TuiState::EnteringGuess => "Type a letter | ENTER: Guess | ESC: Quit",
            TuiState::Confirming(_) => "Y: Yes | N: No | ESC: Quit",
        };

        let paragraph = Paragraph::new(text)
            .style(Style::default().fg(Color::Gray))
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(paragraph, area);
    }

    /// Waits up to one poll interval for a key press.
    fn next_key(&mut self) -> Result<Option<KeyEvent>, io::Error> {
        if !event::poll(std::time::Duration::from_millis(EVENT_POLL_TIMEOUT_MS))? {
            return Ok(None);
        }

        match event::read()? {
            Event::Key(key) => {
                // Only process Press events, ignore Release and Repeat to avoid double input
                if key.kind != event::KeyEventKind::Press {
                    return Ok(None);
                }
                // Garbage from escape sequences when alt-tabbing
                if let KeyCode::Char(c) = key.code
                    && (c == '\u{FFFD}' || (c as u32) < ASCII_CONTROL_CHAR_THRESHOLD)
                {
                    debug_log!("next_key() - Ignoring invalid character: {:?}", c);
                    return Ok(None);
                }
                Ok(Some(key))
            }
            other => {
                debug_log!("next_key() - Ignoring event: {:?}", other);
                Ok(None)
            }
        }
    }

    /// Runs the prompt for `state` until it is submitted or the player quits.
    fn prompt(&mut self, state: TuiState) -> Option<KeyOutcome> {
        self.state = state;
        self.input.clear();

        loop {
            if self.draw().is_err() {
                info_log!("prompt() - Draw failed, quitting");
                return None;
            }
            match self.next_key() {
                Ok(Some(key)) => match handle_key(self.state, &mut self.input, key) {
                    KeyOutcome::Pending => {}
                    KeyOutcome::Quit => return None,
                    outcome => return Some(outcome),
                },
                Ok(None) => {}
                Err(e) => {
                    debug_log!("prompt() - Input error: {}", e);
                    return None;
                }
            }
        }
    }
}

impl GameInterface for TuiInterface {
    fn read_word_source(&mut self) -> Option<WordSource> {
        self.status = "Choose a word list".to_string();
        match self.prompt(TuiState::EnteringSource)? {
            KeyOutcome::Submit(path) if path.trim().is_empty() => Some(WordSource::Builtin),
            KeyOutcome::Submit(path) => Some(WordSource::File(PathBuf::from(path.trim()))),
            _ => None,
        }
    }

    fn read_word_index(&mut self) -> Option<i64> {
        self.status = "Pick the secret word".to_string();
        loop {
            let KeyOutcome::Submit(text) = self.prompt(TuiState::EnteringIndex)? else {
                return None;
            };
            match parse_index(text.trim()) {
                Some(index) => {
                    self.error_message.clear();
                    self.message = format!("Using secret word index: {index}");
                    return Some(index);
                }
                None => self.error_message = format!("'{text}' is not a whole number"),
            }
        }
    }

    fn read_guess(&mut self) -> UserAction {
        match self.prompt(TuiState::EnteringGuess) {
            Some(KeyOutcome::Submit(guess)) => UserAction::Guess(guess),
            _ => UserAction::Exit,
        }
    }

    fn confirm(&mut self, question: Question) -> Option<bool> {
        match self.prompt(TuiState::Confirming(question))? {
            KeyOutcome::Answer(answer) => Some(answer),
            _ => None,
        }
    }

    fn display_word_list_loaded(&mut self, source: &WordSource, word_count: usize) {
        self.word_list = format!("{source} ({word_count} words)");
        self.error_message.clear();
        self.draw_or_log();
    }

    fn display_load_error(&mut self, _source: &WordSource, error: &WordListError) {
        self.error_message = error.to_string();
        self.draw_or_log();
    }

    fn display_new_round(&mut self, snapshot: &Snapshot) {
        self.snapshot = Some(snapshot.clone());
        self.error_message.clear();
        self.status = "New round - guess a letter".to_string();
        self.draw_or_log();
    }

    fn display_guess_result(&mut self, correct: bool, snapshot: &Snapshot) {
        self.snapshot = Some(snapshot.clone());
        self.error_message.clear();
        self.message = if correct {
            "Correct!".to_string()
        } else {
            ":(".to_string()
        };
        self.draw_or_log();
    }

    fn display_rejected(&mut self, snapshot: &Snapshot) {
        self.snapshot = Some(snapshot.clone());
        self.error_message = "Enter a single new letter a-z".to_string();
        self.draw_or_log();
    }

    fn display_outcome(&mut self, snapshot: &Snapshot, word: &str) {
        self.snapshot = Some(snapshot.clone());
        self.message = match snapshot.status {
            SessionStatus::Won => format!("You found it: {word}"),
            _ => format!("The word was: {word}"),
        };
        self.status = "Round over".to_string();
        self.draw_or_log();
    }

    fn display_exit_message(&mut self) {
        self.message = "Exiting...".to_string();
        self.status = "Exiting application...".to_string();
        self.draw_or_log();
    }
}

impl Drop for TuiInterface {
    fn drop(&mut self) {
        let _ = self.cleanup();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_typing_and_submit() {
        let mut input = String::new();
        for c in "words.txt".chars() {
            assert_eq!(
                handle_key(TuiState::EnteringSource, &mut input, key(KeyCode::Char(c))),
                KeyOutcome::Pending
            );
        }
        assert_eq!(
            handle_key(TuiState::EnteringSource, &mut input, key(KeyCode::Enter)),
            KeyOutcome::Submit("words.txt".to_string())
        );
        assert!(input.is_empty());
    }

    #[test]
    fn test_backspace_removes_last_char() {
        let mut input = "ab".to_string();
        handle_key(TuiState::EnteringGuess, &mut input, key(KeyCode::Backspace));
        assert_eq!(input, "a");
    }

    #[test]
    fn test_guess_input_is_capped() {
        let mut input = String::new();
        for _ in 0..10 {
            handle_key(TuiState::EnteringGuess, &mut input, key(KeyCode::Char('a')));
        }
        assert_eq!(input.chars().count(), GUESS_INPUT_LIMIT);
    }

    #[test]
    fn test_escape_quits_everywhere() {
        for state in [
            TuiState::EnteringSource,
            TuiState::EnteringIndex,
            TuiState::EnteringGuess,
            TuiState::Confirming(Question::PlayAgain),
        ] {
            let mut input = String::new();
            assert_eq!(handle_key(state, &mut input, key(KeyCode::Esc)), KeyOutcome::Quit);
        }
    }

    #[test]
    fn test_confirming_answers() {
        let state = TuiState::Confirming(Question::SwitchWordList);
        let mut input = String::new();
        assert_eq!(
            handle_key(state, &mut input, key(KeyCode::Char('Y'))),
            KeyOutcome::Answer(true)
        );
        assert_eq!(
            handle_key(state, &mut input, key(KeyCode::Char('n'))),
            KeyOutcome::Answer(false)
        );
        assert_eq!(
            handle_key(state, &mut input, key(KeyCode::Char('q'))),
            KeyOutcome::Pending
        );
        assert!(input.is_empty());
    }

    #[test]
    fn test_modified_keys_ignored() {
        let mut input = String::new();
        let alt_x = KeyEvent::new(KeyCode::Char('x'), KeyModifiers::ALT);
        assert_eq!(
            handle_key(TuiState::EnteringGuess, &mut input, alt_x),
            KeyOutcome::Pending
        );
        assert!(input.is_empty());
    }

    #[test]
    fn test_ctrl_c_quits() {
        let mut input = String::new();
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(
            handle_key(TuiState::EnteringIndex, &mut input, ctrl_c),
            KeyOutcome::Quit
        );
    }
}
