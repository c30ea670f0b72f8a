use crate::guess::GuessedLetters;

/// Wrong guesses allowed before the game is lost.
pub const MAX_WRONG_GUESSES: usize = 6;

/// Shown in place of letters that have not been guessed.
pub const PLACEHOLDER: char = '_';

/// The word a game is played for. Stored lowercased; fixed for the game.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SecretWord(String);

impl SecretWord {
    pub fn new(word: &str) -> Self {
        Self(word.to_lowercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn contains(&self, letter: char) -> bool {
        self.0.contains(letter)
    }

    /// Letters the player has to find. Anything outside `a`..=`z` is shown for free.
    fn guessable(&self) -> impl Iterator<Item = char> + '_ {
        self.0.chars().filter(char::is_ascii_lowercase)
    }
}

#[derive(Clone, Debug)]
pub struct GameState {
    word: SecretWord,
    guessed: GuessedLetters,
    wrong_guesses: usize,
}

impl GameState {
    pub fn new(word: SecretWord) -> Self {
        Self {
            word,
            guessed: GuessedLetters::new(),
            wrong_guesses: 0,
        }
    }

    pub fn word(&self) -> &SecretWord {
        &self.word
    }

    pub fn guessed(&self) -> &GuessedLetters {
        &self.guessed
    }

    pub fn wrong_guesses(&self) -> usize {
        self.wrong_guesses
    }

    pub fn guesses_remaining(&self) -> usize {
        MAX_WRONG_GUESSES.saturating_sub(self.wrong_guesses)
    }

    /// Records an admissible guess and returns whether it occurs in the word.
    ///
    /// The caller validates first; a repeated or non-letter guess, or a guess
    /// after the game has ended, leaves the state untouched.
    pub fn apply_guess(&mut self, letter: char) -> bool {
        if self.is_over() || !self.guessed.insert(letter) {
            log::warn!("Ignoring inadmissible guess '{letter}'");
            return self.word.contains(letter);
        }
        let correct = self.word.contains(letter);
        if !correct {
            self.wrong_guesses += 1;
        }
        correct
    }

    /// One entry per character of the word: the letter once guessed, otherwise `_`.
    pub fn reveal_letters(&self) -> Vec<char> {
        self.word
            .as_str()
            .chars()
            .map(|c| {
                if !c.is_ascii_lowercase() || self.guessed.contains(c) {
                    c
                } else {
                    PLACEHOLDER
                }
            })
            .collect()
    }

    /// Revealed word spaced out for display, e.g. `c a _`.
    pub fn reveal(&self) -> String {
        let letters: Vec<String> = self.reveal_letters().iter().map(char::to_string).collect();
        letters.join(" ")
    }

    pub fn is_won(&self) -> bool {
        self.word.guessable().all(|c| self.guessed.contains(c))
    }

    pub fn is_lost(&self) -> bool {
        self.wrong_guesses >= MAX_WRONG_GUESSES && !self.is_won()
    }

    pub fn is_over(&self) -> bool {
        self.is_won() || self.is_lost()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game(word: &str) -> GameState {
        GameState::new(SecretWord::new(word))
    }

    #[test]
    fn test_new_game_is_fully_hidden() {
        let state = game("cat");
        assert_eq!(state.reveal(), "_ _ _");
        assert_eq!(state.wrong_guesses(), 0);
        assert!(state.guessed().is_empty());
        assert!(!state.is_won());
        assert!(!state.is_lost());
    }

    #[test]
    fn test_cat_revealed_letter_by_letter() {
        let mut state = game("cat");

        assert!(state.apply_guess('c'));
        assert_eq!(state.reveal(), "c _ _");
        assert_eq!(state.wrong_guesses(), 0);
        assert!(!state.is_won());

        assert!(state.apply_guess('a'));
        assert_eq!(state.reveal(), "c a _");

        assert!(state.apply_guess('t'));
        assert_eq!(state.reveal(), "c a t");
        assert!(state.is_won());
        assert!(!state.is_lost());
    }

    #[test]
    fn test_repeated_letter_revealed_everywhere() {
        let mut state = game("banana");
        assert!(state.apply_guess('a'));
        assert_eq!(state.reveal_letters(), vec!['_', 'a', '_', 'a', '_', 'a']);
    }

    #[test]
    fn test_six_wrong_guesses_lose() {
        let mut state = game("dog");
        for (i, c) in ['x', 'y', 'z', 'q', 'w', 'v'].into_iter().enumerate() {
            assert!(!state.is_lost());
            assert!(!state.apply_guess(c));
            assert_eq!(state.wrong_guesses(), i + 1);
        }
        assert!(state.is_lost());
        assert!(!state.is_won());
        assert_eq!(state.guesses_remaining(), 0);
    }

    #[test]
    fn test_wrong_count_matches_misses() {
        let mut state = game("hangman");
        for c in ['h', 'e', 'a', 'i', 'n'] {
            state.apply_guess(c);
        }
        let misses = state
            .guessed()
            .iter()
            .filter(|&c| !state.word().contains(c))
            .count();
        assert_eq!(state.wrong_guesses(), misses);
        assert_eq!(misses, 2);
    }

    #[test]
    fn test_reveal_matches_guessed_set() {
        let mut state = game("mississippi");
        state.apply_guess('s');
        state.apply_guess('z');
        let revealed = state.reveal_letters();
        assert_eq!(revealed.len(), "mississippi".len());
        for (shown, actual) in revealed.iter().zip("mississippi".chars()) {
            if state.guessed().contains(actual) {
                assert_eq!(*shown, actual);
            } else {
                assert_eq!(*shown, PLACEHOLDER);
            }
        }
    }

    #[test]
    fn test_word_is_lowercased() {
        let mut state = game("Rust");
        assert_eq!(state.word().as_str(), "rust");
        assert!(state.apply_guess('r'));
        assert_eq!(state.reveal(), "r _ _ _");
    }

    #[test]
    fn test_non_letters_shown_and_not_required() {
        let mut state = game("don't");
        assert_eq!(state.reveal(), "_ _ _ ' _");
        for c in ['d', 'o', 'n', 't'] {
            state.apply_guess(c);
        }
        assert!(state.is_won());
    }

    #[test]
    fn test_win_on_last_life_is_not_a_loss() {
        let mut state = game("ox");
        for c in ['a', 'b', 'c', 'd', 'e'] {
            state.apply_guess(c);
        }
        state.apply_guess('o');
        state.apply_guess('x');
        assert_eq!(state.wrong_guesses(), 5);
        assert!(state.is_won());
        assert!(!state.is_lost());
    }
}
