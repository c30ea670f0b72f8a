//! Runtime configuration, built once from the command line and passed down
//! to whatever needs it.

use crate::cli::Cli;
use crate::wordbank::WordSource;
use std::path::PathBuf;

const APP_DIR: &str = "hangman";
const LOG_FILE_NAME: &str = "hangman.log";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InterfaceKind {
    Cli,
    Tui,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameConfig {
    /// Word list to start with; `None` means ask the player.
    pub word_source: Option<WordSource>,
    pub interface: InterfaceKind,
    pub log_path: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            word_source: None,
            interface: InterfaceKind::Cli,
            log_path: default_log_path(),
        }
    }
}

impl GameConfig {
    pub fn from_cli(cli: &Cli) -> Self {
        // `--builtin` beats a path, which may come from the environment
        let word_source = match (cli.builtin, &cli.word_list_path) {
            (true, _) => Some(WordSource::Builtin),
            (false, Some(path)) => Some(WordSource::File(path.clone())),
            (false, None) => None,
        };
        let interface = if cli.tui {
            InterfaceKind::Tui
        } else {
            InterfaceKind::Cli
        };

        Self {
            word_source,
            interface,
            log_path: cli.log_file.clone().unwrap_or_else(default_log_path),
        }
    }

    pub fn with_word_source(mut self, source: WordSource) -> Self {
        self.word_source = Some(source);
        self
    }
}

/// `<local data dir>/hangman/hangman.log`, e.g. `~/.local/share/hangman/hangman.log`,
/// or the same under the temp directory when there is no local data directory.
pub fn default_log_path() -> PathBuf {
    log_path_in(dirs::data_local_dir())
}

/// `hangman.log` directly under the temp directory.
pub fn fallback_log_path() -> PathBuf {
    std::env::temp_dir().join(LOG_FILE_NAME)
}

fn log_path_in(data_dir: Option<PathBuf>) -> PathBuf {
    data_dir
        .unwrap_or_else(std::env::temp_dir)
        .join(APP_DIR)
        .join(LOG_FILE_NAME)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cli(word_list_path: Option<&str>, builtin: bool, tui: bool) -> Cli {
        Cli {
            word_list_path: word_list_path.map(PathBuf::from),
            builtin,
            tui,
            log_file: None,
        }
    }

    #[test]
    fn test_no_source_means_prompt() {
        let config = GameConfig::from_cli(&cli(None, false, false));
        assert_eq!(config.word_source, None);
        assert_eq!(config.interface, InterfaceKind::Cli);
    }

    #[test]
    fn test_path_source() {
        let config = GameConfig::from_cli(&cli(Some("words.txt"), false, true));
        assert_eq!(
            config.word_source,
            Some(WordSource::File(PathBuf::from("words.txt")))
        );
        assert_eq!(config.interface, InterfaceKind::Tui);
    }

    #[test]
    fn test_builtin_source() {
        let config = GameConfig::from_cli(&cli(None, true, false));
        assert_eq!(config.word_source, Some(WordSource::Builtin));
    }

    #[test]
    fn test_builtin_overrides_path() {
        let config = GameConfig::from_cli(&cli(Some("words.txt"), true, false));
        assert_eq!(config.word_source, Some(WordSource::Builtin));
    }

    #[test]
    fn test_explicit_log_file_wins() {
        let mut args = cli(None, false, false);
        args.log_file = Some(PathBuf::from("/tmp/custom.log"));
        let config = GameConfig::from_cli(&args);
        assert_eq!(config.log_path, PathBuf::from("/tmp/custom.log"));
    }

    #[test]
    fn test_default_log_path_file_name() {
        assert!(default_log_path().ends_with("hangman/hangman.log"));
    }

    #[test]
    fn test_log_path_without_data_dir_uses_temp_dir() {
        let path = log_path_in(None);
        assert!(path.starts_with(std::env::temp_dir()));
        assert!(path.ends_with("hangman/hangman.log"));
    }

    #[test]
    fn test_log_path_in_data_dir() {
        let path = log_path_in(Some(PathBuf::from("/data")));
        assert_eq!(path, PathBuf::from("/data/hangman/hangman.log"));
    }
}
