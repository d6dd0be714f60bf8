//! Game engine and state management.

use crate::command::Command;
use crate::deck::Deck;
use crate::error::{DeckError, GameError};
use crate::options::GameOptions;
use crate::player::Player;
use crate::result::Reply;

mod actions;
mod dealer;
pub mod state;

pub use state::GameState;

/// A heads-up blackjack session: one dealer, one player, one shared deck.
///
/// The game owns the deck and both participants and lends the deck to
/// whichever of them is drawing or discarding.
///
/// # Example
///
/// ```
/// use bjduel::{Command, Game, GameOptions, GameState};
///
/// let mut game = Game::new(GameOptions::default(), 42).unwrap();
/// assert_eq!(game.state(), GameState::AwaitingPlayerAction);
///
/// game.apply(Command::Stand).unwrap();
/// assert_eq!(game.state(), GameState::RoundOver);
/// ```
#[derive(Debug, Clone)]
pub struct Game {
    /// Game options.
    pub options: GameOptions,
    /// The deck both participants draw from and discard to.
    deck: Deck,
    /// The computer-controlled dealer.
    dealer: Player,
    /// The human player.
    player: Player,
    /// Current session state.
    state: GameState,
}

impl Game {
    /// Starts a session with a freshly shuffled standard deck and deals the
    /// first round.
    ///
    /// # Errors
    ///
    /// Returns an error if the opening deal runs out of cards.
    pub fn new(options: GameOptions, seed: u64) -> Result<Self, DeckError> {
        Self::with_deck(options, Deck::shuffled(seed))
    }

    /// Starts a session with a prepared deck and deals the first round.
    ///
    /// # Errors
    ///
    /// Returns an error if the deck cannot supply the four opening cards.
    pub fn with_deck(options: GameOptions, deck: Deck) -> Result<Self, DeckError> {
        let mut game = Self {
            options,
            deck,
            dealer: Player::new(options.ace_correction),
            player: Player::new(options.ace_correction),
            state: GameState::AwaitingPlayerAction,
        };
        game.deal_round()?;
        Ok(game)
    }

    /// Deals two cards each, alternating dealer and player.
    fn deal_round(&mut self) -> Result<(), DeckError> {
        for _ in 0..2 {
            self.dealer.hit(&mut self.deck)?;
            self.player.hit(&mut self.deck)?;
        }
        self.state = GameState::AwaitingPlayerAction;
        Ok(())
    }

    /// Runs a single command.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::Terminated`] once the session has ended, or
    /// [`GameError::Deck`] if the deck runs dry mid-command.
    pub fn apply(&mut self, command: Command) -> Result<Reply, GameError> {
        match command {
            Command::Hit => self.hit(),
            Command::Stand => self.stand(),
            Command::NewHand => self.new_hand(),
            Command::Quit => self.quit(),
        }
    }

    fn ensure_running(&self) -> Result<(), GameError> {
        if self.state == GameState::Terminated {
            return Err(GameError::Terminated);
        }
        Ok(())
    }

    /// Withdraws a pending quit request.
    ///
    /// Every command other than quitting does this; the shell also calls it
    /// for input it does not recognize.
    pub fn cancel_quit(&mut self) {
        if self.state == GameState::ConfirmingQuit {
            self.state = GameState::AwaitingPlayerAction;
        }
    }

    /// Returns both current hands as they are shown after a deal.
    #[must_use]
    pub fn table(&self) -> Reply {
        Reply::Dealt {
            dealer: self.dealer.hand().clone(),
            player: self.player.hand().clone(),
        }
    }

    /// Returns the current session state.
    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Returns the dealer.
    #[must_use]
    pub const fn dealer(&self) -> &Player {
        &self.dealer
    }

    /// Returns the player.
    #[must_use]
    pub const fn player(&self) -> &Player {
        &self.player
    }

    /// Returns the shared deck.
    #[must_use]
    pub const fn deck(&self) -> &Deck {
        &self.deck
    }
}
