use std::fmt;

/// Separator used when listing guessed letters for the player.
pub const GUESSED_SEPARATOR: &str = " -> ";

/// Set of guessed letters `a`..=`z`, one bit per letter.
///
/// Iteration is always alphabetical, whatever the insertion order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GuessedLetters {
    bits: u32,
}

impl GuessedLetters {
    pub fn new() -> Self {
        Self::default()
    }

    fn bit(letter: char) -> Option<u32> {
        letter
            .is_ascii_lowercase()
            .then(|| 1 << (letter as u32 - 'a' as u32))
    }

    pub fn contains(&self, letter: char) -> bool {
        Self::bit(letter).is_some_and(|bit| self.bits & bit != 0)
    }

    /// Adds `letter`; returns false if it was already present or is not `a`..=`z`.
    pub fn insert(&mut self, letter: char) -> bool {
        match Self::bit(letter) {
            Some(bit) if self.bits & bit == 0 => {
                self.bits |= bit;
                true
            }
            _ => false,
        }
    }

    pub fn len(&self) -> usize {
        self.bits.count_ones() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = char> + '_ {
        ('a'..='z').filter(|&c| self.contains(c))
    }

    pub fn sorted(&self) -> Vec<char> {
        self.iter().collect()
    }
}

impl fmt::Display for GuessedLetters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, letter) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(GUESSED_SEPARATOR)?;
            }
            write!(f, "{letter}")?;
        }
        Ok(())
    }
}

/// True iff `letter` is a single character in `a`..=`z` that has not been guessed yet.
///
/// Case-sensitive: callers lowercase first. Only the 26-letter English
/// alphabet counts, regardless of locale.
pub fn is_admissible(letter: &str, guessed: &GuessedLetters) -> bool {
    let mut chars = letter.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => c.is_ascii_lowercase() && !guessed.contains(c),
        _ => false,
    }
}

/// Lowercases a raw guess the way the intake boundary does before validation.
pub fn normalize_guess(raw: &str) -> String {
    raw.to_lowercase()
}
