//! Round state and player intent types.

/// State of the current round.
///
/// `Dealing` and `DealerTurn` are passed through synchronously inside a
/// single transition; a snapshot taken between transitions only ever shows
/// `Betting`, `PlayerTurn`, or `Resolved`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundState {
    /// Accepting a bet for the next round.
    Betting,
    /// Dealing initial cards.
    Dealing,
    /// Waiting for a player action.
    PlayerTurn,
    /// Dealer reveals the hole card and plays out their hand.
    DealerTurn,
    /// Round has settled; the next bet starts a fresh round.
    Resolved,
}

/// A player intent during their turn.
///
/// The set is closed: every transition matches it exhaustively, so there is
/// no such thing as an unknown action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Draw one card.
    Hit,
    /// Keep the current hand and end the turn for it.
    Stand,
    /// Double the bet, draw exactly one card, then stand.
    Double,
}
