use crate::error::WordListError;
use std::fmt;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

pub const EMBEDDED_WORDLIST: &str = include_str!("resources/words.txt");

/// Where a word list comes from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum WordSource {
    /// The list compiled into the binary.
    Builtin,
    File(PathBuf),
}

impl WordSource {
    pub fn load(&self) -> Result<WordList, WordListError> {
        match self {
            Self::Builtin => load_word_list_from_str(EMBEDDED_WORDLIST),
            Self::File(path) => load_word_list_from_file(path),
        }
    }
}

impl fmt::Display for WordSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Builtin => f.write_str("built-in word list"),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// An ordered, non-empty list of words. Order matters: words are picked by index.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WordList {
    words: Vec<String>,
}

impl WordList {
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns `false` for every loaded list.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Picks a word by 1-based index, wrapping around in both directions.
    ///
    /// Index `1` is the first word, `0` the last, `N + 1` the first again.
    /// Every `i64` maps to exactly one word.
    pub fn resolve(&self, index: i64) -> &str {
        // widened so that `i64::MIN - 1` cannot overflow
        let len = self.words.len() as i128;
        let position = (i128::from(index) - 1).rem_euclid(len) as usize;
        &self.words[position]
    }
}

pub fn load_word_list_from_str(data: &str) -> Result<WordList, WordListError> {
    let words: Vec<String> = data.split_whitespace().map(str::to_string).collect();
    if words.is_empty() {
        return Err(WordListError::Empty);
    }
    Ok(WordList { words })
}

fn read_source<R: Read>(mut reader: R) -> std::io::Result<String> {
    let mut data = String::new();
    reader.read_to_string(&mut data)?;
    Ok(data)
}

pub fn load_word_list_from_file<P: AsRef<Path>>(path: P) -> Result<WordList, WordListError> {
    let path = path.as_ref();
    let unavailable = |source| WordListError::Unavailable {
        path: path.to_path_buf(),
        source,
    };
    let file = File::open(path).map_err(unavailable)?;
    let data = read_source(BufReader::new(file)).map_err(unavailable)?;
    let list = load_word_list_from_str(&data)?;
    log::info!("Loaded {} words from {}", list.len(), path.display());
    Ok(list)
}
