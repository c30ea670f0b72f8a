use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failures while loading a word list.
///
/// Both are recoverable: the driver reports them and asks for another source.
#[derive(Debug, Error)]
pub enum WordListError {
    #[error("the word list contains no words")]
    Empty,
    #[error("could not read word list '{}': {source}", .path.display())]
    Unavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
