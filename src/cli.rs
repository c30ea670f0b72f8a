use crate::art;
use crate::error::WordListError;
use crate::guess::GUESSED_SEPARATOR;
use crate::session::{GameInterface, Question, SessionStatus, Snapshot, UserAction};
use crate::wordbank::WordSource;
use clap::Parser;
use std::io::BufRead;
use std::path::PathBuf;

/// Hangman: guess the word one letter at a time
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to a whitespace-separated word-list file
    #[arg(short = 'i', long = "input", env = "HANGMAN_WORD_LIST")]
    pub word_list_path: Option<PathBuf>,

    /// Play with the built-in word list instead of asking for one (overrides --input)
    #[arg(long)]
    pub builtin: bool,

    /// Use the full-screen terminal interface
    #[arg(long)]
    pub tui: bool,

    /// Where to write the log (defaults to the user's local data directory)
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

#[must_use]
pub fn parse_cli() -> Cli {
    Cli::parse()
}

// UI Input/Output functions

/// Reads one line without its terminator; `None` at end of input or on a read error.
fn read_raw_line<R: BufRead>(reader: &mut R) -> Option<String> {
    let mut input = String::new();
    match reader.read_line(&mut input) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(input.trim_end_matches(['\r', '\n']).to_string()),
    }
}

/// Reads one line with surrounding whitespace trimmed.
fn read_line<R: BufRead>(reader: &mut R) -> Option<String> {
    read_raw_line(reader).map(|line| line.trim().to_string())
}

/// Accepts `[number]`, `+[number]` and `-[number]`.
pub(crate) fn parse_index(input: &str) -> Option<i64> {
    input.parse().ok()
}

/// `Some(true)` for yes/y, `Some(false)` for no/n, case-insensitive.
fn parse_yes_no(input: &str) -> Option<bool> {
    match input.to_lowercase().as_str() {
        "yes" | "y" => Some(true),
        "no" | "n" => Some(false),
        _ => None,
    }
}

fn sys_comment(comment: &str) {
    println!("[*] {comment} [*]");
}

fn sys_error(comment: &str) {
    println!("[X] {comment} [X]");
}

pub fn display_game_state(snapshot: &Snapshot) {
    println!("{}", art::gallows(snapshot.wrong_guesses));
    println!("{}", art::word_box(&snapshot.revealed));
}

pub fn display_guessed(guessed: &[char]) {
    let letters: Vec<String> = guessed.iter().map(char::to_string).collect();
    println!("{}", letters.join(GUESSED_SEPARATOR));
}

pub fn read_word_source<R: BufRead>(reader: &mut R) -> Option<WordSource> {
    println!("\nEnter the word-list path (leave empty for the built-in list):");
    let input = read_line(reader)?;
    if input.is_empty() {
        Some(WordSource::Builtin)
    } else {
        Some(WordSource::File(PathBuf::from(input)))
    }
}

pub fn read_word_index<R: BufRead>(reader: &mut R) -> Option<i64> {
    loop {
        println!("\nEnter the secret word index:");
        let input = read_line(reader)?;
        match parse_index(&input) {
            Some(index) => {
                sys_comment(&format!("Using secret word index: {index}"));
                return Some(index);
            }
            None => sys_error("Invalid input."),
        }
    }
}

pub fn read_guess<R: BufRead>(reader: &mut R) -> UserAction {
    println!("\nGuess a letter:");
    // padded input such as " c" must reach the session as typed
    match read_raw_line(reader) {
        Some(input) => UserAction::Guess(input),
        None => UserAction::Exit,
    }
}

pub fn confirm<R: BufRead>(reader: &mut R, question: Question) -> Option<bool> {
    loop {
        println!("\n{} ([Y]es/[N]o):", question.prompt());
        let input = read_line(reader)?;
        match parse_yes_no(&input) {
            Some(answer) => return Some(answer),
            None => sys_error("Invalid input."),
        }
    }
}

/// Line-based implementation of [`GameInterface`] over any `BufRead`.
pub struct CliInterface<R: BufRead> {
    reader: R,
}

impl<R: BufRead> CliInterface<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> GameInterface for CliInterface<R> {
    fn read_word_source(&mut self) -> Option<WordSource> {
        read_word_source(&mut self.reader)
    }

    fn read_word_index(&mut self) -> Option<i64> {
        read_word_index(&mut self.reader)
    }

    fn read_guess(&mut self) -> UserAction {
        read_guess(&mut self.reader)
    }

    fn confirm(&mut self, question: Question) -> Option<bool> {
        let answer = confirm(&mut self.reader, question);
        match (question, answer) {
            (Question::PlayAgain, Some(true)) => sys_comment("Starting another game"),
            (Question::SwitchWordList, Some(false)) => {
                sys_comment("Playing with the same word-list")
            }
            _ => {}
        }
        answer
    }

    fn display_word_list_loaded(&mut self, source: &WordSource, word_count: usize) {
        sys_comment(&format!("Using word-list: {source} ({word_count} words)"));
    }

    fn display_load_error(&mut self, _source: &WordSource, error: &WordListError) {
        sys_error(&error.to_string());
    }

    fn display_new_round(&mut self, snapshot: &Snapshot) {
        println!("{}", art::LOGO);
        display_game_state(snapshot);
    }

    fn display_guess_result(&mut self, correct: bool, snapshot: &Snapshot) {
        if correct {
            println!("{}", art::word_box(&snapshot.revealed));
        } else {
            println!(":(");
            display_game_state(snapshot);
        }
    }

    fn display_rejected(&mut self, snapshot: &Snapshot) {
        println!("X");
        display_guessed(&snapshot.guessed);
    }

    fn display_outcome(&mut self, snapshot: &Snapshot, word: &str) {
        match snapshot.status {
            SessionStatus::Won => println!("WIN"),
            SessionStatus::Lost => println!("LOSE\nThe word was: {word}"),
            SessionStatus::AwaitingGuess => {}
        }
    }

    fn display_exit_message(&mut self) {
        sys_comment("Quitting");
    }
}
