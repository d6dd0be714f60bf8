//! Card types.

use core::fmt;

use crate::error::CardError;

/// Card suit.
///
/// Variants are declared in the order a standard deck is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    /// Diamonds.
    Diamonds,
    /// Spades.
    Spades,
    /// Hearts.
    Hearts,
    /// Clubs.
    Clubs,
}

impl Suit {
    /// All suits, in deck-building order.
    pub const ALL: [Self; 4] = [Self::Diamonds, Self::Spades, Self::Hearts, Self::Clubs];

    /// Returns the suit's name as printed on the table.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Diamonds => "Diamonds",
            Self::Spades => "Spades",
            Self::Hearts => "Hearts",
            Self::Clubs => "Clubs",
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Card rank, 1 (Ace) through 13 (King).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Rank {
    /// Ace (1).
    Ace = 1,
    /// Two.
    Two,
    /// Three.
    Three,
    /// Four.
    Four,
    /// Five.
    Five,
    /// Six.
    Six,
    /// Seven.
    Seven,
    /// Eight.
    Eight,
    /// Nine.
    Nine,
    /// Ten.
    Ten,
    /// Jack (11).
    Jack,
    /// Queen (12).
    Queen,
    /// King (13).
    King,
}

impl Rank {
    /// All ranks in ascending order.
    pub const ALL: [Self; 13] = [
        Self::Ace,
        Self::Two,
        Self::Three,
        Self::Four,
        Self::Five,
        Self::Six,
        Self::Seven,
        Self::Eight,
        Self::Nine,
        Self::Ten,
        Self::Jack,
        Self::Queen,
        Self::King,
    ];

    /// Converts a rank number (1 = Ace, 11 = Jack, 12 = Queen, 13 = King).
    ///
    /// # Errors
    ///
    /// Returns [`CardError::InvalidRank`] if `number` is outside `1..=13`.
    ///
    /// # Example
    ///
    /// ```
    /// use bjduel::{CardError, Rank};
    ///
    /// assert_eq!(Rank::from_number(12), Ok(Rank::Queen));
    /// assert_eq!(Rank::from_number(14), Err(CardError::InvalidRank(14)));
    /// ```
    pub const fn from_number(number: u8) -> Result<Self, CardError> {
        if number >= 1 && number <= 13 {
            Ok(Self::ALL[(number - 1) as usize])
        } else {
            Err(CardError::InvalidRank(number))
        }
    }

    /// Returns the rank number.
    #[must_use]
    pub const fn number(self) -> u8 {
        self as u8
    }

    /// Blackjack value of the rank: numerals count their number, Ace and
    /// face cards count 10.
    #[must_use]
    pub const fn value(self) -> u8 {
        match self {
            Self::Ace | Self::Jack | Self::Queen | Self::King => 10,
            _ => self as u8,
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ace => f.write_str("Ace"),
            Self::Jack => f.write_str("Jack"),
            Self::Queen => f.write_str("Queen"),
            Self::King => f.write_str("King"),
            _ => write!(f, "{}", self.number()),
        }
    }
}

/// A playing card.
///
/// The blackjack value is fixed when the card is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    suit: Suit,
    rank: Rank,
    value: u8,
}

impl Card {
    /// Creates a new card.
    #[must_use]
    pub const fn new(suit: Suit, rank: Rank) -> Self {
        Self {
            suit,
            rank,
            value: rank.value(),
        }
    }

    /// Creates a card from a rank number.
    ///
    /// # Errors
    ///
    /// Returns [`CardError::InvalidRank`] if `rank` is outside `1..=13`.
    ///
    /// # Example
    ///
    /// ```
    /// use bjduel::{Card, Suit};
    ///
    /// let card = Card::from_number(Suit::Spades, 1).unwrap();
    /// assert_eq!(card.value(), 10);
    /// assert_eq!(card.to_string(), "Ace of Spades");
    /// ```
    pub const fn from_number(suit: Suit, rank: u8) -> Result<Self, CardError> {
        match Rank::from_number(rank) {
            Ok(rank) => Ok(Self::new(suit, rank)),
            Err(err) => Err(err),
        }
    }

    /// Returns the suit.
    #[must_use]
    pub const fn suit(&self) -> Suit {
        self.suit
    }

    /// Returns the rank.
    #[must_use]
    pub const fn rank(&self) -> Rank {
        self.rank
    }

    /// Returns the blackjack value.
    #[must_use]
    pub const fn value(&self) -> u8 {
        self.value
    }

    /// Returns whether this card is an Ace.
    #[must_use]
    pub const fn is_ace(&self) -> bool {
        matches!(self.rank, Rank::Ace)
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} of {}", self.rank, self.suit)
    }
}

/// Number of cards per deck.
pub const DECK_SIZE: usize = 52;
