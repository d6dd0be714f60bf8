//! The shared deck: a draw pile plus a discard pile.

use alloc::vec::Vec;

use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::error::DeckError;

/// A deck of cards with a discard pile.
///
/// Cards are dealt from the end of [`Deck::cards`]. Every card belongs to
/// exactly one of the draw pile, the discard pile, or a player's hand.
#[derive(Debug, Clone)]
pub struct Deck {
    /// Draw pile; the last element is the top card.
    pub cards: Vec<Card>,
    /// Cards removed from play, waiting to be shuffled back in.
    pub discard: Vec<Card>,
    /// Random source used for every shuffle.
    rng: ChaCha8Rng,
}

impl Deck {
    /// Creates an empty deck whose shuffles are driven by `seed`.
    ///
    /// # Example
    ///
    /// ```
    /// use bjduel::Deck;
    ///
    /// let deck = Deck::new(7);
    /// assert!(deck.is_empty());
    /// assert_eq!(deck.discard_len(), 0);
    /// ```
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            cards: Vec::with_capacity(DECK_SIZE),
            discard: Vec::new(),
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Creates a standard 52-card deck and shuffles it.
    #[must_use]
    pub fn shuffled(seed: u64) -> Self {
        let mut deck = Self::new(seed);
        deck.build_standard_deck();
        deck.shuffle();
        deck
    }

    /// Appends an unshuffled standard deck to the draw pile.
    ///
    /// Suits go Diamonds, Spades, Hearts, Clubs, each Ace through King, so
    /// the King of Clubs ends up on top.
    ///
    /// # Example
    ///
    /// ```
    /// use bjduel::Deck;
    ///
    /// let mut deck = Deck::new(0);
    /// deck.build_standard_deck();
    /// assert_eq!(deck.len(), 52);
    /// assert_eq!(deck.deal().unwrap().to_string(), "King of Clubs");
    /// ```
    pub fn build_standard_deck(&mut self) {
        for suit in Suit::ALL {
            for rank in Rank::ALL {
                self.cards.push(Card::new(suit, rank));
            }
        }
    }

    /// Shuffles the draw pile in place.
    pub fn shuffle(&mut self) {
        self.cards.shuffle(&mut self.rng);
    }

    /// Removes and returns the top card of the draw pile.
    ///
    /// Callers that must not fail check [`Deck::is_empty`] or call
    /// [`Deck::recycle_discards`] first.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::Empty`] if the draw pile is empty.
    pub fn deal(&mut self) -> Result<Card, DeckError> {
        self.cards.pop().ok_or(DeckError::Empty)
    }

    /// Adds cards to the discard pile.
    pub fn discard<I>(&mut self, cards: I)
    where
        I: IntoIterator<Item = Card>,
    {
        self.discard.extend(cards);
    }

    /// Moves the discard pile into the draw pile and shuffles.
    pub fn recycle_discards(&mut self) {
        self.cards.append(&mut self.discard);
        self.shuffle();
    }

    /// Returns the number of cards in the draw pile.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the draw pile is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns the number of cards in the discard pile.
    #[must_use]
    pub fn discard_len(&self) -> usize {
        self.discard.len()
    }
}
