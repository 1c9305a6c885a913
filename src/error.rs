use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ShowError {
    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),

    /// Ctrl+C was pressed; the session unwinds to cleanup.
    #[error("interrupted")]
    Interrupted,
}

pub type Result<T> = std::result::Result<T, ShowError>;
