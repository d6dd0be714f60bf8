//! Round outcomes and command replies.

use core::fmt;

use crate::hand::{BUST_LIMIT, Hand};

/// One side of the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Seat {
    /// The computer-controlled dealer.
    Dealer,
    /// The human player.
    Player,
}

/// How a round that went to the dealer was settled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoundOutcome {
    /// Both hands are over 21. Nobody scores.
    Tie,
    /// The dealer went over 21 and the player did not.
    DealerBust,
    /// The dealer is at 21 or under and at least matches the player.
    DealerWins,
    /// The player beats a dealer who stayed at 21 or under.
    PlayerWins,
    /// The dealer stayed at 21 or under below a player who had already
    /// gone over.
    PlayerBust,
}

impl RoundOutcome {
    /// Settles a round from the final totals.
    ///
    /// # Example
    ///
    /// ```
    /// use bjduel::{RoundOutcome, Seat};
    ///
    /// let outcome = RoundOutcome::resolve(18, 20);
    /// assert_eq!(outcome, RoundOutcome::PlayerWins);
    /// assert_eq!(outcome.winner(), Some(Seat::Player));
    /// assert_eq!(RoundOutcome::resolve(19, 19), RoundOutcome::DealerWins);
    /// ```
    #[must_use]
    pub const fn resolve(dealer_total: u16, player_total: u16) -> Self {
        if dealer_total > BUST_LIMIT {
            if player_total > BUST_LIMIT {
                Self::Tie
            } else {
                Self::DealerBust
            }
        } else if dealer_total >= player_total {
            Self::DealerWins
        } else if player_total <= BUST_LIMIT {
            Self::PlayerWins
        } else {
            Self::PlayerBust
        }
    }

    /// Returns who scores the round, if anyone.
    #[must_use]
    pub const fn winner(self) -> Option<Seat> {
        match self {
            Self::Tie => None,
            Self::DealerBust | Self::PlayerWins => Some(Seat::Player),
            Self::DealerWins | Self::PlayerBust => Some(Seat::Dealer),
        }
    }
}

impl fmt::Display for RoundOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::Tie => "Tie, both busted",
            Self::DealerBust => "Player wins, dealer busted",
            Self::DealerWins => "Dealer wins",
            Self::PlayerWins => "Player wins",
            Self::PlayerBust => "Dealer Wins",
        };
        f.write_str(text)
    }
}

/// What a command did, for display to the player.
///
/// The `Display` output is the console transcript for the command, one
/// line per printed line, without a trailing newline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// A round was dealt.
    Dealt {
        /// The dealer's opening hand.
        dealer: Hand,
        /// The player's opening hand.
        player: Hand,
    },
    /// The player drew a card.
    Hit {
        /// The player's hand after the draw.
        player: Hand,
        /// Whether the draw took the player over 21, ending the round.
        busted: bool,
    },
    /// A hit was asked for with no round in progress.
    HitRejected,
    /// The dealer played out their hand and the round was settled.
    Showdown {
        /// The dealer's final hand.
        dealer: Hand,
        /// How the round was settled.
        outcome: RoundOutcome,
    },
    /// A new round was asked for while one is still in progress.
    NewHandRejected,
    /// A quit was asked for mid-round; asking again confirms it.
    QuitPending,
    /// The session ended.
    Scores {
        /// Rounds the dealer won.
        dealer: u32,
        /// Rounds the player won.
        player: u32,
    },
}

impl Reply {
    /// Returns whether this reply ends the session.
    #[must_use]
    pub const fn is_final(&self) -> bool {
        matches!(self, Self::Scores { .. })
    }
}

impl fmt::Display for Reply {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Dealt { dealer, player } => {
                writeln!(f, "Dealer's hand")?;
                writeln!(f, "{}", dealer.render())?;
                writeln!(f, "Total Val: {}", dealer.value())?;
                writeln!(f, "Player's hand")?;
                writeln!(f, "{}", player.render())?;
                write!(f, "Total Val: {}", player.value())
            }
            Self::Hit { player, busted } => {
                writeln!(f, "Player Hand: ")?;
                writeln!(f, "{}", player.render())?;
                write!(f, "Total val: {}", player.value())?;
                if *busted {
                    write!(f, "\nPlayer busted, another round?")?;
                }
                Ok(())
            }
            Self::HitRejected => f.write_str("Start another game, yes/no?"),
            Self::Showdown { dealer, outcome } => {
                writeln!(f, "Dealer's hand")?;
                writeln!(f, "{}", dealer.render())?;
                writeln!(f, "{}", dealer.value())?;
                writeln!(f)?;
                write!(f, "{outcome}")
            }
            Self::NewHandRejected => f.write_str("\u{bf}Que?"),
            Self::QuitPending => f.write_str("\u{bf}Que? Just one hand"),
            Self::Scores { dealer, player } => {
                writeln!(f, "Dealer score: ")?;
                writeln!(f, "{dealer}")?;
                writeln!(f, "Player score: ")?;
                write!(f, "{player}")
            }
        }
    }
}
