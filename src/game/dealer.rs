use crate::error::GameError;
use crate::result::{Reply, RoundOutcome};

use super::{Game, GameState};

impl Game {
    /// Player action: Stand (also `pass`).
    ///
    /// The dealer draws until reaching [`dealer_stands_at`], then the round
    /// is settled and scored. Standing is accepted at any point, including
    /// after the round is already over, in which case the dealer plays on
    /// from their current hand and the round is settled again.
    ///
    /// The dealer draws straight from the draw pile and never recycles the
    /// discards.
    ///
    /// [`dealer_stands_at`]: crate::GameOptions::dealer_stands_at
    ///
    /// # Errors
    ///
    /// Returns an error if the session has ended or the draw pile empties
    /// while the dealer must still draw.
    pub fn stand(&mut self) -> Result<Reply, GameError> {
        self.ensure_running()?;
        self.cancel_quit();

        while self.dealer.total_hand_value() < self.options.dealer_stands_at {
            let card = self.deck.deal()?;
            self.dealer.take(card);
        }

        let outcome = RoundOutcome::resolve(
            self.dealer.total_hand_value(),
            self.player.total_hand_value(),
        );
        if let Some(seat) = outcome.winner() {
            self.award(seat);
        }
        self.state = GameState::RoundOver;

        Ok(Reply::Showdown {
            dealer: self.dealer.hand().clone(),
            outcome,
        })
    }
}
