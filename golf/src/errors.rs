use crate::{CARDS_PER_DECK, DECKS, HAND_SIZE};

/// The error type for creating a [`GolfGame`](crate::GolfGame).
#[derive(Debug, PartialEq, Eq)]
pub enum SetupError {
    InvalidPlayerCount { num_players: usize },
    WrongDeckSize { num_cards: usize },
}

impl SetupError {
    /// The largest number of players the deck can deal a hand to.
    pub const MAX_PLAYERS: usize = CARDS_PER_DECK * DECKS / HAND_SIZE;
}

impl std::error::Error for SetupError {}

impl std::fmt::Display for SetupError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SetupError::InvalidPlayerCount { num_players } => write!(
                f,
                "Invalid number of players: {}, a game needs between 2 and {}",
                num_players,
                SetupError::MAX_PLAYERS
            ),
            SetupError::WrongDeckSize { num_cards } => write!(
                f,
                "A deck must hold exactly {} cards, but {} were given",
                CARDS_PER_DECK * DECKS,
                num_cards
            ),
        }
    }
}
