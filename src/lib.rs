//! A heads-up blackjack game with optional `no_std` support.
//!
//! One player faces a computer-controlled dealer. Both draw from, and
//! discard to, a single 52-card [`Deck`] owned by the [`Game`]. The game is
//! driven one [`Command`] at a time and answers each with a [`Reply`] whose
//! `Display` output is the console transcript for that command. With the
//! `std` feature, [`Shell`] wraps a game in a line-oriented command loop.
//!
//! # Example
//!
//! ```
//! use bjduel::{Command, Game, GameOptions, Reply};
//!
//! let mut game = Game::new(GameOptions::default(), 42).unwrap();
//! let reply = game.apply(Command::Stand).unwrap();
//! assert!(matches!(reply, Reply::Showdown { .. }));
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod command;
pub mod deck;
pub mod error;
pub mod game;
pub mod hand;
pub mod options;
pub mod player;
pub mod result;
#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
pub mod shell;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use command::Command;
pub use deck::Deck;
#[cfg(feature = "std")]
pub use error::ShellError;
pub use error::{CardError, DeckError, GameError, ParseCommandError};
pub use game::{Game, GameState};
pub use hand::{BUST_LIMIT, Hand};
pub use options::{AceCorrection, GameOptions};
pub use player::Player;
pub use result::{Reply, RoundOutcome, Seat};
#[cfg(feature = "std")]
pub use shell::Shell;
