//! Game state types.

/// Session state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameState {
    /// A round is in progress and the player may hit or stand.
    AwaitingPlayerAction,
    /// A round is in progress and the player has asked to quit once.
    /// Quitting again ends the session; any other command cancels.
    ConfirmingQuit,
    /// The round has been settled. The player may start another or quit.
    RoundOver,
    /// The session has ended.
    Terminated,
}

impl GameState {
    /// Returns whether a round is still being played.
    #[must_use]
    pub const fn is_round_in_progress(self) -> bool {
        matches!(self, Self::AwaitingPlayerAction | Self::ConfirmingQuit)
    }
}
