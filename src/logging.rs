// Conditional logging macros - only active in debug builds

#[cfg(debug_assertions)]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        log::debug!($($arg)*);
    };
}

#[cfg(not(debug_assertions))]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {{}};
}

#[cfg(debug_assertions)]
#[macro_export]
macro_rules! info_log {
    ($($arg:tt)*) => {
        log::info!($($arg)*);
    };
}

#[cfg(not(debug_assertions))]
#[macro_export]
macro_rules! info_log {
    ($($arg:tt)*) => {{}};
}

use crate::config::fallback_log_path;
use env_logger::{Builder, Env, Target};
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;

/// Sets up `env_logger`, honoring `RUST_LOG` (default `info`).
///
/// Records go to `path` when given so they never land on the game screen.
/// If that file cannot be opened, `hangman.log` in the temp directory is
/// tried next, and stderr is used only when both fail.
pub fn init(path: Option<&Path>) {
    let mut builder = Builder::from_env(Env::default().default_filter_or("info"));
    builder.format(|buf, record| {
        writeln!(
            buf,
            "{} {:<5} [{}] {}",
            chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
            record.level(),
            record.target(),
            record.args()
        )
    });

    let file_error = match path.map(open_log_file) {
        Some(Ok(file)) => {
            builder.target(Target::Pipe(Box::new(file)));
            None
        }
        Some(Err(e)) => {
            if let Ok(file) = open_log_file(&fallback_log_path()) {
                builder.target(Target::Pipe(Box::new(file)));
            }
            Some(e)
        }
        None => None,
    };

    if builder.try_init().is_err() {
        return;
    }
    if let (Some(path), Some(e)) = (path, file_error) {
        log::warn!("Could not open log file {}: {e}", path.display());
    }
}

fn open_log_file(path: &Path) -> io::Result<File> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }
    OpenOptions::new().create(true).append(true).open(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_log_file_creates_parent() {
        let dir = std::env::temp_dir().join("hangman_log_test_dir");
        let _ = fs::remove_dir_all(&dir);
        let path = dir.join("nested").join("hangman.log");

        let mut file = open_log_file(&path).unwrap();
        writeln!(file, "hello").unwrap();
        assert!(path.exists());

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_fallback_log_file_opens() {
        let path = fallback_log_path();
        assert!(path.starts_with(std::env::temp_dir()));
        assert!(open_log_file(&path).is_ok());
    }

    #[test]
    fn test_init_twice_is_harmless() {
        init(None);
        init(None);
    }
}
