//! Hand representation and scoring.

use alloc::string::{String, ToString};
use alloc::vec::Vec;

use crate::card::Card;
use crate::options::AceCorrection;

/// Highest total that is not a bust.
pub const BUST_LIMIT: u16 = 21;

/// Amount an Ace drops by when it counts as 1 instead of 10.
const ACE_REDUCTION: u16 = 9;

fn evaluate_cards(cards: &[Card], correction: AceCorrection) -> u16 {
    let raw: u16 = cards.iter().map(|card| u16::from(card.value())).sum();
    if raw <= BUST_LIMIT {
        return raw;
    }

    let aces = cards.iter().filter(|card| card.is_ace()).count() as u16;
    match correction {
        AceCorrection::Legacy => raw - aces * ACE_REDUCTION,
        AceCorrection::OneAtATime => {
            let mut value = raw;
            let mut remaining = aces;
            while value > BUST_LIMIT && remaining > 0 {
                value -= ACE_REDUCTION;
                remaining -= 1;
            }
            value
        }
    }
}

/// The cards a player currently holds.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Hand {
    /// Cards in the order they were received.
    cards: Vec<Card>,
    /// Ace reduction rule used by [`Hand::value`].
    correction: AceCorrection,
}

impl Hand {
    /// Creates an empty hand scored with the given Ace rule.
    #[must_use]
    pub const fn new(correction: AceCorrection) -> Self {
        Self {
            cards: Vec::new(),
            correction,
        }
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Calculates the value of the hand.
    ///
    /// Aces count 10. When the sum exceeds 21, Aces are reduced to 1
    /// according to the hand's [`AceCorrection`].
    ///
    /// # Example
    ///
    /// ```
    /// use bjduel::{AceCorrection, Card, Hand, Rank, Suit};
    ///
    /// let mut hand = Hand::new(AceCorrection::Legacy);
    /// hand.add_card(Card::new(Suit::Hearts, Rank::Ace));
    /// hand.add_card(Card::new(Suit::Spades, Rank::King));
    /// assert_eq!(hand.value(), 20);
    ///
    /// hand.add_card(Card::new(Suit::Clubs, Rank::Nine));
    /// assert_eq!(hand.value(), 20);
    /// ```
    #[must_use]
    pub fn value(&self) -> u16 {
        evaluate_cards(&self.cards, self.correction)
    }

    /// Returns whether the hand is over 21.
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.value() > BUST_LIMIT
    }

    /// Renders the hand as a comma-separated list, e.g.
    /// `"King of Clubs, Queen of Clubs"`.
    #[must_use]
    pub fn render(&self) -> String {
        self.cards
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Empties the hand, returning the cards it held.
    pub fn take_cards(&mut self) -> Vec<Card> {
        core::mem::take(&mut self.cards)
    }
}
