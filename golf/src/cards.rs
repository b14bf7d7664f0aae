use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Number of cards in one standard deck.
pub const CARDS_PER_DECK: usize = 52;

/// How many standard decks are shuffled together for one game.
pub const DECKS: usize = 1;

/// A playing card from a standard 52-card deck, together with whether it is
/// currently lying face-up.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub rank: Rank,
    pub suit: Suit,
    pub face_up: bool,
}

/// The suit of a [card](Card).
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Suit {
    #[serde(rename = "♣")]
    Club,
    #[serde(rename = "♦")]
    Diamond,
    #[serde(rename = "♥")]
    Heart,
    #[serde(rename = "♠")]
    Spade,
}

/// The rank of a [card](Card).
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Rank {
    #[serde(rename = "A")]
    Ace = 1,
    #[serde(rename = "2")]
    Two,
    #[serde(rename = "3")]
    Three,
    #[serde(rename = "4")]
    Four,
    #[serde(rename = "5")]
    Five,
    #[serde(rename = "6")]
    Six,
    #[serde(rename = "7")]
    Seven,
    #[serde(rename = "8")]
    Eight,
    #[serde(rename = "9")]
    Nine,
    #[serde(rename = "10")]
    Ten,
    #[serde(rename = "J")]
    Jack,
    #[serde(rename = "Q")]
    Queen,
    #[serde(rename = "K")]
    King,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Club, Suit::Diamond, Suit::Heart, Suit::Spade];

    pub fn symbol(self) -> char {
        match self {
            Suit::Club => '♣',
            Suit::Diamond => '♦',
            Suit::Heart => '♥',
            Suit::Spade => '♠',
        }
    }
}

impl Rank {
    pub const ALL: [Rank; 13] = [
        Rank::Ace,
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
    ];

    /// Points this rank is worth in a hand.
    ///
    /// Number cards count their face value and the ace counts one. Jacks are
    /// worth -2, queens 10 and kings nothing.
    pub fn score(self) -> i32 {
        match self {
            Rank::Jack => -2,
            Rank::Queen => 10,
            Rank::King => 0,
            number => number as i32,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Rank::Ace => 'A',
            Rank::Two => '2',
            Rank::Three => '3',
            Rank::Four => '4',
            Rank::Five => '5',
            Rank::Six => '6',
            Rank::Seven => '7',
            Rank::Eight => '8',
            Rank::Nine => '9',
            Rank::Ten => 'T',
            Rank::Jack => 'J',
            Rank::Queen => 'Q',
            Rank::King => 'K',
        }
    }
}

impl Card {
    /// A face-up card.
    pub fn new(rank: Rank, suit: Suit) -> Self {
        Self {
            rank,
            suit,
            face_up: true,
        }
    }

    /// The card's point value. Does not depend on whether it is face-up.
    pub fn score(&self) -> i32 {
        self.rank.score()
    }

    #[must_use]
    pub fn turned_up(self) -> Self {
        Self {
            face_up: true,
            ..self
        }
    }

    #[must_use]
    pub fn turned_down(self) -> Self {
        Self {
            face_up: false,
            ..self
        }
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.face_up {
            write!(f, "{}{}", self.rank.symbol(), self.suit.symbol())
        } else {
            write!(f, "🂠 ")
        }
    }
}

/// All cards used in one game, ordered by rank and then suit, all face-up.
pub fn full_deck() -> Vec<Card> {
    let mut deck = Vec::with_capacity(CARDS_PER_DECK * DECKS);
    for _ in 0..DECKS {
        for rank in Rank::ALL {
            for suit in Suit::ALL {
                deck.push(Card::new(rank, suit));
            }
        }
    }
    deck
}

/// The error type for the [`FromStr`] instance of [`Card`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CardFromStrErr {
    LessThanTwoChars,
    MoreThanTwoChars,
    InvalidRank,
    InvalidSuit,
}

impl std::error::Error for CardFromStrErr {}

impl std::fmt::Display for CardFromStrErr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CardFromStrErr::LessThanTwoChars => write!(f, "Card code has fewer than two characters"),
            CardFromStrErr::MoreThanTwoChars => write!(f, "Card code has more than two characters"),
            CardFromStrErr::InvalidRank => write!(f, "Unknown rank character"),
            CardFromStrErr::InvalidSuit => write!(f, "Unknown suit character"),
        }
    }
}

impl FromStr for Card {
    type Err = CardFromStrErr;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let rank_char = chars.next().ok_or(CardFromStrErr::LessThanTwoChars)?;
        let suit_char = chars.next().ok_or(CardFromStrErr::LessThanTwoChars)?;
        if chars.next().is_some() {
            return Err(CardFromStrErr::MoreThanTwoChars);
        }
        let rank = Rank::ALL
            .into_iter()
            .find(|rank| rank.symbol() == rank_char)
            .ok_or(CardFromStrErr::InvalidRank)?;
        let suit = Suit::ALL
            .into_iter()
            .find(|suit| suit.symbol() == suit_char)
            .ok_or(CardFromStrErr::InvalidSuit)?;
        Ok(Card::new(rank, suit))
    }
}

/// Shorthand for creating face-up cards from a two-character string.
///
/// The first character is the [rank](Rank) (note: 10 is `T`), the second is
/// the [suit](Suit) as a unicode character (♣, ♦, ♥, or ♠).
///
/// This macro is just calling the [`FromStr`] instance of [`Card`].
/// ```
/// # use golf::{card, Card, Rank, Suit};
/// assert_eq!(
///     card!("T♥"),
///     Card { rank: Rank::Ten, suit: Suit::Heart, face_up: true }
/// );
/// ```
#[macro_export]
macro_rules! card {
    ($rs:literal) => {
        <$crate::Card as std::str::FromStr>::from_str($rs)
            .expect("Invalid card code given to card! macro")
    };
}
// The import is for using the macro in other modules, see https://stackoverflow.com/a/31749071/1726797
#[allow(unused_imports)]
pub(crate) use card;
