// Library interface for hangman
// This allows integration tests to access internal modules

pub mod art;
pub mod cli;
pub mod config;
pub mod error;
pub mod game_state;
pub mod guess;
pub mod logging;
pub mod session;
pub mod tui;
pub mod wordbank;

// Re-export commonly used items for easier testing
pub use error::WordListError;
pub use game_state::{GameState, MAX_WRONG_GUESSES, SecretWord};
pub use guess::{GuessedLetters, is_admissible};
pub use session::{
    GameInterface, Question, RoundOutcome, Session, SessionStatus, Snapshot, Summary, Turn,
    UserAction, play_round, run_games,
};
pub use wordbank::{WordList, WordSource, load_word_list_from_file, load_word_list_from_str};
