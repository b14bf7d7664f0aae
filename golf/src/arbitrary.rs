use crate::{Card, Hand, Rank, Suit};

impl quickcheck::Arbitrary for Suit {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        *g.choose(&Suit::ALL).unwrap()
    }
}

impl quickcheck::Arbitrary for Rank {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        *g.choose(&Rank::ALL).unwrap()
    }
}

impl quickcheck::Arbitrary for Card {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        Self {
            rank: Rank::arbitrary(g),
            suit: Suit::arbitrary(g),
            face_up: bool::arbitrary(g),
        }
    }
}

// Cards may repeat, as they would with several decks.
impl quickcheck::Arbitrary for Hand {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        Hand::new(std::array::from_fn(|_| Card::arbitrary(g)))
    }
}
