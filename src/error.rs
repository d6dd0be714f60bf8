//! Error types for game operations.

use alloc::string::String;

use thiserror::Error;

/// Errors that can occur when creating a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CardError {
    /// Rank number outside 1..=13.
    #[error("invalid rank {0}, expected 1 through 13")]
    InvalidRank(u8),
}

/// Errors that can occur when dealing from the deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DeckError {
    /// No cards left in the draw pile.
    #[error("no cards left in the draw pile")]
    Empty,
}

/// Errors that can occur while playing a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GameError {
    /// The deck could not supply a card.
    #[error(transparent)]
    Deck(#[from] DeckError),
    /// The session has already ended.
    #[error("the session has ended")]
    Terminated,
}

/// Errors that can occur when parsing a command token.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseCommandError {
    /// The input was blank.
    #[error("empty command")]
    Empty,
    /// The input is not a known command.
    #[error("unknown command `{0}`")]
    Unknown(String),
}

/// Errors that end the interactive shell.
#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
#[derive(Debug, Error)]
pub enum ShellError {
    /// Reading input or writing output failed.
    #[error("console i/o failed: {0}")]
    Io(#[from] std::io::Error),
    /// A command failed in a way the session cannot recover from.
    #[error("game aborted: {0}")]
    Game(#[from] GameError),
}
