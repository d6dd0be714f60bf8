//! Participants: the dealer and the player share this type.

use crate::card::Card;
use crate::deck::Deck;
use crate::error::DeckError;
use crate::hand::Hand;
use crate::options::AceCorrection;

/// A participant with a hand and a running count of rounds won.
///
/// Players never own the deck. Every operation that moves cards takes the
/// game's single [`Deck`] by reference.
#[derive(Debug, Clone, Default)]
pub struct Player {
    hand: Hand,
    /// Rounds won this session.
    pub score: u32,
}

impl Player {
    /// Creates a player with an empty hand and a score of zero.
    #[must_use]
    pub const fn new(correction: AceCorrection) -> Self {
        Self {
            hand: Hand::new(correction),
            score: 0,
        }
    }

    /// Deals the top card of `deck` into this player's hand.
    ///
    /// If the draw pile is empty, the discard pile (filled by either
    /// participant) is shuffled back in first.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::Empty`] if there is nothing to draw even after
    /// recycling the discards.
    ///
    /// # Example
    ///
    /// ```
    /// use bjduel::{Deck, Player};
    ///
    /// let mut deck = Deck::new(0);
    /// deck.build_standard_deck();
    /// let mut player = Player::default();
    /// player.hit(&mut deck).unwrap();
    /// player.hit(&mut deck).unwrap();
    /// assert_eq!(player.render_hand(), "King of Clubs, Queen of Clubs");
    /// assert_eq!(player.total_hand_value(), 20);
    /// assert_eq!(deck.len(), 50);
    /// ```
    pub fn hit(&mut self, deck: &mut Deck) -> Result<Card, DeckError> {
        if deck.is_empty() {
            deck.recycle_discards();
        }
        let card = deck.deal()?;
        self.hand.add_card(card);
        Ok(card)
    }

    /// Adds an already dealt card to the hand.
    pub fn take(&mut self, card: Card) {
        self.hand.add_card(card);
    }

    /// Moves the whole hand onto the deck's discard pile.
    pub fn discard_hand(&mut self, deck: &mut Deck) {
        deck.discard(self.hand.take_cards());
    }

    /// Returns the value of the hand.
    #[must_use]
    pub fn total_hand_value(&self) -> u16 {
        self.hand.value()
    }

    /// Renders the hand for display.
    #[must_use]
    pub fn render_hand(&self) -> alloc::string::String {
        self.hand.render()
    }

    /// Returns the player's hand.
    #[must_use]
    pub const fn hand(&self) -> &Hand {
        &self.hand
    }
}
