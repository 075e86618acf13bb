use thiserror::Error;

/// Failures talking to the terminal.
#[derive(Debug, Error)]
pub enum Error {
    #[error("terminal error: {0}")]
    Terminal(#[from] crossterm::ErrorKind),
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}
