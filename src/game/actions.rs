use crate::error::GameError;
use crate::result::{Reply, Seat};

use super::{Game, GameState};

impl Game {
    /// Player action: Hit (draw a card).
    ///
    /// Going over 21 ends the round and scores it for the dealer. With no
    /// round in progress the hand is left alone and the player is prompted
    /// to start another.
    ///
    /// # Errors
    ///
    /// Returns an error if the session has ended or there is no card to draw
    /// even after recycling the discards.
    pub fn hit(&mut self) -> Result<Reply, GameError> {
        self.ensure_running()?;
        self.cancel_quit();

        if !self.state.is_round_in_progress() {
            return Ok(Reply::HitRejected);
        }

        self.player.hit(&mut self.deck)?;

        let busted = self.player.hand().is_bust();
        if busted {
            self.award(Seat::Dealer);
            self.state = GameState::RoundOver;
        }

        Ok(Reply::Hit {
            player: self.player.hand().clone(),
            busted,
        })
    }

    /// Starts a new round after the previous one ended.
    ///
    /// Both hands go to the discard pile and four fresh cards are dealt.
    /// Asking mid-round is rejected without touching the table.
    ///
    /// # Errors
    ///
    /// Returns an error if the session has ended or the deal runs out of
    /// cards.
    pub fn new_hand(&mut self) -> Result<Reply, GameError> {
        self.ensure_running()?;
        self.cancel_quit();

        if self.state.is_round_in_progress() {
            return Ok(Reply::NewHandRejected);
        }

        self.dealer.discard_hand(&mut self.deck);
        self.player.discard_hand(&mut self.deck);
        self.deal_round()?;

        Ok(self.table())
    }

    /// Quits the session.
    ///
    /// Between rounds this ends the session at once. Mid-round the first
    /// request only asks for confirmation; a second one in a row ends it.
    ///
    /// # Errors
    ///
    /// Returns an error if the session has already ended.
    pub fn quit(&mut self) -> Result<Reply, GameError> {
        self.ensure_running()?;

        if self.state == GameState::AwaitingPlayerAction {
            self.state = GameState::ConfirmingQuit;
            return Ok(Reply::QuitPending);
        }

        self.state = GameState::Terminated;
        Ok(Reply::Scores {
            dealer: self.dealer.score,
            player: self.player.score,
        })
    }

    pub(super) const fn award(&mut self, seat: Seat) {
        match seat {
            Seat::Dealer => self.dealer.score += 1,
            Seat::Player => self.player.score += 1,
        }
    }
}
