//! Commands accepted by the game.

use core::fmt;
use core::str::FromStr;

use alloc::borrow::ToOwned;

use crate::error::ParseCommandError;

/// A player command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    /// Draw one card.
    Hit,
    /// Stop drawing and let the dealer play out the round.
    Stand,
    /// Start a new round once the current one is over.
    NewHand,
    /// End the session, or ask to when a round is still going.
    Quit,
}

impl Command {
    /// Every accepted token with the command it maps to, sorted by token.
    pub const TOKENS: [(&'static str, Self); 10] = [
        ("EOF", Self::Quit),
        ("another", Self::NewHand),
        ("exit", Self::Quit),
        ("hit", Self::Hit),
        ("newHand", Self::NewHand),
        ("no", Self::Quit),
        ("pass", Self::Stand),
        ("quit", Self::Quit),
        ("stand", Self::Stand),
        ("yes", Self::NewHand),
    ];

    /// One-line description shown by the shell's help.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Hit => "Deal one more card to the player and show the new total",
            Self::Stand => "Hand over to the dealer, who draws until standing, then settle the round",
            Self::NewHand => "Deal a fresh round, unless one is already in progress",
            Self::Quit => "Show both scores and leave; mid-round this must be confirmed",
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Hit => "hit",
            Self::Stand => "pass",
            Self::NewHand => "yes",
            Self::Quit => "no",
        };
        f.write_str(name)
    }
}

impl FromStr for Command {
    type Err = ParseCommandError;

    /// Parses the first word of a line. Tokens are case-sensitive and any
    /// words after the first are ignored.
    ///
    /// ```
    /// use bjduel::Command;
    ///
    /// assert_eq!("stand".parse(), Ok(Command::Stand));
    /// assert_eq!("newHand now".parse(), Ok(Command::NewHand));
    /// assert!("Hit".parse::<Command>().is_err());
    /// ```
    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let word = line
            .split_whitespace()
            .next()
            .ok_or(ParseCommandError::Empty)?;
        Self::TOKENS
            .iter()
            .find(|(token, _)| *token == word)
            .map(|&(_, command)| command)
            .ok_or_else(|| ParseCommandError::Unknown(word.to_owned()))
    }
}
