//! Game configuration options.

/// How Aces are reduced from 10 to 1 once a hand goes over 21.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[non_exhaustive]
pub enum AceCorrection {
    /// Every Ace in the hand drops by 9 as soon as the raw total exceeds 21,
    /// even if fewer reductions would have been enough.
    #[default]
    Legacy,
    /// Aces drop by 9 one at a time, stopping once the total is 21 or less.
    OneAtATime,
}

/// Configuration options for a game.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use bjduel::{AceCorrection, GameOptions};
///
/// let options = GameOptions::default()
///     .with_dealer_stands_at(17)
///     .with_ace_correction(AceCorrection::OneAtATime);
/// assert_eq!(options.dealer_stands_at, 17);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameOptions {
    /// The dealer keeps drawing while their total is below this.
    pub dealer_stands_at: u16,
    /// Ace reduction rule applied to every hand.
    pub ace_correction: AceCorrection,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            dealer_stands_at: 18,
            ace_correction: AceCorrection::Legacy,
        }
    }
}

impl GameOptions {
    /// Sets the total at which the dealer stops drawing.
    ///
    /// # Example
    ///
    /// ```
    /// use bjduel::GameOptions;
    ///
    /// let options = GameOptions::default().with_dealer_stands_at(17);
    /// assert_eq!(options.dealer_stands_at, 17);
    /// ```
    #[must_use]
    pub const fn with_dealer_stands_at(mut self, total: u16) -> Self {
        self.dealer_stands_at = total;
        self
    }

    /// Sets the Ace reduction rule.
    #[must_use]
    pub const fn with_ace_correction(mut self, correction: AceCorrection) -> Self {
        self.ace_correction = correction;
        self
    }
}
