//! Playthrough driver.
//!
//! A [`Session`] owns the [`GameState`] of one round and turns raw player
//! input into state transitions. [`play_round`] and [`run_games`] wire a
//! session to a [`GameInterface`], which collects input and renders the
//! [`Snapshot`] emitted after every transition.
//!
//! # State Machine
//! - `AwaitingGuess` → `AwaitingGuess` on a rejected guess, or an accepted
//!   guess that neither completes the word nor uses the last life
//! - `AwaitingGuess` → `Won` when the last hidden letter is found
//! - `AwaitingGuess` → `Lost` on the sixth wrong guess
//! - `Won` and `Lost` are terminal

use crate::config::GameConfig;
use crate::error::WordListError;
use crate::game_state::{GameState, SecretWord};
use crate::guess::{is_admissible, normalize_guess};
use crate::wordbank::{WordList, WordSource};
use crate::{debug_log, info_log};
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionStatus {
    AwaitingGuess,
    Won,
    Lost,
}

impl SessionStatus {
    pub fn is_terminal(self) -> bool {
        !matches!(self, Self::AwaitingGuess)
    }
}

/// Result of submitting one raw guess.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Turn {
    /// Not a single new letter `a`..=`z`; nothing changed.
    Rejected,
    Correct,
    Incorrect,
    /// The round is already won or lost; nothing changed.
    Finished,
}

/// What a renderer needs to draw the round.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Snapshot {
    /// Revealed word, spaced out (`c a _`).
    pub revealed: String,
    pub wrong_guesses: usize,
    /// Guessed letters in alphabetical order.
    pub guessed: Vec<char>,
    pub status: SessionStatus,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RoundOutcome {
    Won,
    Lost,
    Abandoned,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum UserAction {
    Guess(String),
    Exit,
}

/// Yes/no questions asked between rounds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Question {
    PlayAgain,
    SwitchWordList,
}

impl Question {
    pub fn prompt(self) -> &'static str {
        match self {
            Self::PlayAgain => "Would you like to play another game?",
            Self::SwitchWordList => "Would you like to switch to a different word-list?",
        }
    }
}

/// Input and output side of the game.
///
/// `read_*` methods and `confirm` return `None` when the player quits or
/// input runs out.
pub trait GameInterface {
    fn read_word_source(&mut self) -> Option<WordSource>;
    fn read_word_index(&mut self) -> Option<i64>;
    fn read_guess(&mut self) -> UserAction;
    fn confirm(&mut self, question: Question) -> Option<bool>;
    fn display_word_list_loaded(&mut self, source: &WordSource, word_count: usize);
    fn display_load_error(&mut self, source: &WordSource, error: &WordListError);
    fn display_new_round(&mut self, snapshot: &Snapshot);
    fn display_guess_result(&mut self, correct: bool, snapshot: &Snapshot);
    fn display_rejected(&mut self, snapshot: &Snapshot);
    fn display_outcome(&mut self, snapshot: &Snapshot, word: &str);
    fn display_exit_message(&mut self);
}

/// One playthrough for one secret word.
#[derive(Clone, Debug)]
pub struct Session {
    state: GameState,
}

impl Session {
    pub fn new(word: SecretWord) -> Self {
        Self {
            state: GameState::new(word),
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn status(&self) -> SessionStatus {
        if self.state.is_won() {
            SessionStatus::Won
        } else if self.state.is_lost() {
            SessionStatus::Lost
        } else {
            SessionStatus::AwaitingGuess
        }
    }

    /// Lowercases `raw`, validates it, and applies it if admissible.
    pub fn submit(&mut self, raw: &str) -> Turn {
        if self.status().is_terminal() {
            return Turn::Finished;
        }

        let letter = normalize_guess(raw);
        if !is_admissible(&letter, self.state.guessed()) {
            debug_log!("submit() - Rejected guess {:?}", raw);
            return Turn::Rejected;
        }
        let Some(letter) = letter.chars().next() else {
            return Turn::Rejected;
        };

        if self.state.apply_guess(letter) {
            debug_log!("submit() - '{}' is in the word", letter);
            Turn::Correct
        } else {
            debug_log!(
                "submit() - '{}' is not in the word ({} wrong)",
                letter,
                self.state.wrong_guesses()
            );
            Turn::Incorrect
        }
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            revealed: self.state.reveal(),
            wrong_guesses: self.state.wrong_guesses(),
            guessed: self.state.guessed().sorted(),
            status: self.status(),
        }
    }
}

/// Plays one round to a win, a loss, or until the player quits.
pub fn play_round<I: GameInterface>(word: SecretWord, interface: &mut I) -> RoundOutcome {
    let mut session = Session::new(word);
    interface.display_new_round(&session.snapshot());

    // a word with nothing guessable is won before the first guess
    loop {
        let outcome = match session.status() {
            SessionStatus::AwaitingGuess => None,
            SessionStatus::Won => Some(RoundOutcome::Won),
            SessionStatus::Lost => Some(RoundOutcome::Lost),
        };
        if let Some(outcome) = outcome {
            interface.display_outcome(&session.snapshot(), session.state().word().as_str());
            return outcome;
        }

        let raw = match interface.read_guess() {
            UserAction::Guess(raw) => raw,
            UserAction::Exit => {
                info_log!("play_round() - Round abandoned");
                return RoundOutcome::Abandoned;
            }
        };

        match session.submit(&raw) {
            Turn::Rejected => interface.display_rejected(&session.snapshot()),
            Turn::Correct => interface.display_guess_result(true, &session.snapshot()),
            Turn::Incorrect => interface.display_guess_result(false, &session.snapshot()),
            Turn::Finished => {}
        }
    }
}

/// Tally of rounds played by [`run_games`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Summary {
    pub won: usize,
    pub lost: usize,
    pub abandoned: usize,
}

impl Summary {
    fn record(&mut self, outcome: RoundOutcome) {
        match outcome {
            RoundOutcome::Won => self.won += 1,
            RoundOutcome::Lost => self.lost += 1,
            RoundOutcome::Abandoned => self.abandoned += 1,
        }
    }

    pub fn rounds(&self) -> usize {
        self.won + self.lost + self.abandoned
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Won {}, lost {}.", self.won, self.lost)
    }
}

/// Runs rounds until the player declines another game or quits.
///
/// The configured word source is tried first; if it is missing or fails to
/// load, the player is asked for one.
pub fn run_games<I: GameInterface>(config: &GameConfig, interface: &mut I) -> Summary {
    let mut summary = Summary::default();

    let configured = config
        .word_source
        .as_ref()
        .and_then(|source| try_load(source, interface));
    let Some(mut words) = configured.or_else(|| prompt_word_list(interface)) else {
        interface.display_exit_message();
        return summary;
    };

    loop {
        let Some(index) = interface.read_word_index() else {
            break;
        };
        let word = SecretWord::new(words.resolve(index));
        info_log!("run_games() - Starting round with word #{}", index);

        let outcome = play_round(word, interface);
        summary.record(outcome);
        if outcome == RoundOutcome::Abandoned {
            break;
        }

        if interface.confirm(Question::PlayAgain) != Some(true) {
            break;
        }
        match interface.confirm(Question::SwitchWordList) {
            Some(true) => match prompt_word_list(interface) {
                Some(list) => words = list,
                None => break,
            },
            Some(false) => {}
            None => break,
        }
    }

    log::info!(
        "Played {} rounds: {} won, {} lost, {} abandoned",
        summary.rounds(),
        summary.won,
        summary.lost,
        summary.abandoned
    );
    interface.display_exit_message();
    summary
}

fn try_load<I: GameInterface>(source: &WordSource, interface: &mut I) -> Option<WordList> {
    match source.load() {
        Ok(list) => {
            interface.display_word_list_loaded(source, list.len());
            Some(list)
        }
        Err(e) => {
            log::warn!("Failed to load {source}: {e}");
            interface.display_load_error(source, &e);
            None
        }
    }
}

fn prompt_word_list<I: GameInterface>(interface: &mut I) -> Option<WordList> {
    loop {
        let source = interface.read_word_source()?;
        if let Some(list) = try_load(&source, interface) {
            return Some(list);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(word: &str) -> Session {
        Session::new(SecretWord::new(word))
    }

    #[test]
    fn test_starts_awaiting_guess() {
        let session = session("cat");
        assert_eq!(session.status(), SessionStatus::AwaitingGuess);
        let snapshot = session.snapshot();
        assert_eq!(snapshot.revealed, "_ _ _");
        assert_eq!(snapshot.wrong_guesses, 0);
        assert!(snapshot.guessed.is_empty());
    }

    #[test]
    fn test_uppercase_guess_lowercased_at_intake() {
        let mut session = session("cat");
        assert_eq!(session.submit("C"), Turn::Correct);
        assert_eq!(session.snapshot().revealed, "c _ _");
    }

    #[test]
    fn test_rejections_do_not_mutate() {
        let mut session = session("cat");
        session.submit("x");
        let before = session.snapshot();
        for raw in ["5", "ab", "", "x", "X", "é"] {
            assert_eq!(session.submit(raw), Turn::Rejected, "{raw:?}");
            assert_eq!(session.snapshot(), before);
        }
    }

    #[test]
    fn test_correct_guesses_win() {
        let mut session = session("cat");
        assert_eq!(session.submit("c"), Turn::Correct);
        assert_eq!(session.status(), SessionStatus::AwaitingGuess);
        assert_eq!(session.submit("a"), Turn::Correct);
        assert_eq!(session.submit("t"), Turn::Correct);
        assert_eq!(session.status(), SessionStatus::Won);
    }

    #[test]
    fn test_sixth_miss_loses() {
        let mut session = session("dog");
        for raw in ["x", "y", "z", "q", "w"] {
            assert_eq!(session.submit(raw), Turn::Incorrect);
            assert_eq!(session.status(), SessionStatus::AwaitingGuess);
        }
        assert_eq!(session.submit("v"), Turn::Incorrect);
        assert_eq!(session.status(), SessionStatus::Lost);
    }

    #[test]
    fn test_terminal_state_accepts_nothing() {
        let mut session = session("a");
        assert_eq!(session.submit("a"), Turn::Correct);
        assert_eq!(session.submit("b"), Turn::Finished);
        assert_eq!(session.snapshot().wrong_guesses, 0);
        assert_eq!(session.status(), SessionStatus::Won);
    }

    #[test]
    fn test_wrong_count_monotonic() {
        let mut session = session("rust");
        let mut last = 0;
        for raw in ["e", "r", "e", "a", "U", "9", "s", "i", "t"] {
            session.submit(raw);
            let now = session.snapshot().wrong_guesses;
            assert!(now >= last);
            last = now;
        }
        assert_eq!(last, 3);
        assert_eq!(session.status(), SessionStatus::Won);
    }

    #[test]
    fn test_summary_display() {
        let mut summary = Summary::default();
        summary.record(RoundOutcome::Won);
        summary.record(RoundOutcome::Won);
        summary.record(RoundOutcome::Lost);
        summary.record(RoundOutcome::Abandoned);
        assert_eq!(summary.to_string(), "Won 2, lost 1.");
        assert_eq!(summary.rounds(), 4);
    }

    #[test]
    fn test_snapshot_guessed_sorted() {
        let mut session = session("zebra");
        for raw in ["z", "b", "m", "a"] {
            session.submit(raw);
        }
        assert_eq!(session.snapshot().guessed, vec!['a', 'b', 'm', 'z']);
    }
}
