use std::rc::Rc;

use rand::rngs::StdRng;
use tracing::{debug, info, trace};

use crate::{
    full_deck, settle, visualize_game, Card, GameResult, Hand, Piles, PlayerHandle, SetupError,
    CARDS_PER_DECK, DECKS, HAND_SIZE,
};

/// Which part of the game is being played.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Nobody has turned up their whole hand yet.
    Normal,
    /// Somebody went out. `turns_till_done` more turns continue the game.
    FinalCountdown {
        turns_till_done: usize,
        go_out_score: i32,
    },
    Over,
}

/// Summarizes the outcome of playing a turn.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TurnOutcome {
    Continue,
    GameOver(GameResult),
}

/// A single game of golf.
///
/// Owns the piles and the hands; the players are shared handles. Player
/// callbacks act on the hand of the [current player](GolfGame::current_player).
pub struct GolfGame {
    piles: Piles,
    hands: Vec<Hand>,
    players: Vec<PlayerHandle>,
    current_player: usize,
    phase: Phase,
    rng: StdRng,
}

impl GolfGame {
    /// Sets up a game with a shuffled deck and deals the initial hands.
    pub fn new(players: Vec<PlayerHandle>, mut rng: StdRng) -> Result<Self, SetupError> {
        check_player_count(players.len())?;
        let piles = Piles::shuffled(full_deck(), &mut rng);
        Ok(Self::deal(players, piles, rng))
    }

    /// Like [`GolfGame::new`], but uses `deck` as the draw pile without
    /// shuffling it. The last card of `deck` is drawn first. The RNG is only
    /// used when the discard pile is recycled.
    pub fn with_deck(
        players: Vec<PlayerHandle>,
        deck: Vec<Card>,
        rng: StdRng,
    ) -> Result<Self, SetupError> {
        check_player_count(players.len())?;
        if deck.len() != CARDS_PER_DECK * DECKS {
            return Err(SetupError::WrongDeckSize {
                num_cards: deck.len(),
            });
        }
        Ok(Self::deal(players, Piles::stacked(deck), rng))
    }

    fn deal(players: Vec<PlayerHandle>, piles: Piles, rng: StdRng) -> Self {
        let hands = Vec::with_capacity(players.len());
        let mut game = Self {
            piles,
            hands,
            players,
            current_player: 0,
            phase: Phase::Normal,
            rng,
        };
        for p in 0..game.players.len() {
            let cards = std::array::from_fn(|_| game.piles.draw().turned_down());
            game.hands.push(Hand::new(cards));
            game.current_player = p;
            let player = Rc::clone(&game.players[p]);
            player.borrow_mut().setup(&mut game);
        }
        game.current_player = 0;
        trace!("Initial state:\n{}", visualize_game(&game));
        game
    }

    /// Takes the top card of the deck. Panics if the deck is empty.
    pub fn draw_card(&mut self) -> Card {
        self.piles.draw()
    }

    pub fn can_draw_from_discard(&self) -> bool {
        self.piles.can_draw_from_discard()
    }

    /// Takes the top card of the discard pile. Panics if it is empty.
    pub fn draw_from_discard(&mut self) -> Card {
        self.piles.draw_from_discard()
    }

    /// Puts a card face-up on the discard pile.
    pub fn discard_card(&mut self, card: Card) {
        self.piles.discard(card);
    }

    /// Discards the current player's card at `index` and puts `card` in its
    /// place, keeping `card`'s face state.
    pub fn place_card(&mut self, card: Card, index: usize) {
        let old = self.hands[self.current_player].replace(index, card);
        self.piles.discard(old);
    }

    /// Turns up the current player's card at `index`.
    pub fn flip_card(&mut self, index: usize) {
        self.hands[self.current_player].flip(index);
    }

    /// Plays one turn of the current player.
    ///
    /// Panics if the game is already over.
    pub fn turn(&mut self) -> TurnOutcome {
        assert!(
            self.phase != Phase::Over,
            "Tried to play a turn after the game ended"
        );
        let player = Rc::clone(&self.players[self.current_player]);
        player.borrow_mut().play(self);

        self.piles.recycle_if_exhausted(&mut self.rng);

        if let Some(result) = self.check_done() {
            return TurnOutcome::GameOver(result);
        }
        self.current_player = (self.current_player + 1) % self.players.len();
        trace!("\n{}", visualize_game(self));
        TurnOutcome::Continue
    }

    /// Plays turns until the game ends.
    pub fn play_to_end(&mut self) -> GameResult {
        loop {
            if let TurnOutcome::GameOver(result) = self.turn() {
                break result;
            }
        }
    }

    /// Advances the phase after a turn. Returns the result once the game ends.
    fn check_done(&mut self) -> Option<GameResult> {
        match self.phase {
            Phase::Normal => {
                // When several hands are complete at once, the last one posts the score
                let go_out_score = self
                    .hands
                    .iter()
                    .filter(|hand| hand.all_face_up())
                    .last()
                    .map(Hand::score);
                if let Some(go_out_score) = go_out_score {
                    debug!(
                        player = self.current_player,
                        go_out_score, "Player went out, starting the last round"
                    );
                    self.phase = Phase::FinalCountdown {
                        turns_till_done: self.players.len() - 1,
                        go_out_score,
                    };
                }
                None
            }
            Phase::FinalCountdown {
                turns_till_done: 0,
                go_out_score,
            } => {
                self.phase = Phase::Over;
                Some(self.end_game(go_out_score))
            }
            Phase::FinalCountdown {
                turns_till_done,
                go_out_score,
            } => {
                trace!(turns_till_done, "Last round");
                self.phase = Phase::FinalCountdown {
                    turns_till_done: turns_till_done - 1,
                    go_out_score,
                };
                None
            }
            Phase::Over => unreachable!("The game already ended"),
        }
    }

    /// Reveals the opponents of the going-out player, settles the scores and
    /// reports them to the players.
    fn end_game(&mut self, go_out_score: i32) -> GameResult {
        let go_out_player = self.current_player;
        for (p, hand) in self.hands.iter_mut().enumerate() {
            if p != go_out_player {
                hand.reveal();
            }
        }

        let result = settle(&self.hands, go_out_player, go_out_score);

        for (p, player) in self.players.iter().enumerate() {
            if p != go_out_player {
                player.borrow_mut().add_score(result.scores[p]);
            }
        }
        self.players[go_out_player]
            .borrow_mut()
            .add_score(result.scores[go_out_player]);

        info!("Game over!\n{}\n{}", visualize_game(self), result);
        result
    }

    pub fn deck(&self) -> &[Card] {
        &self.piles.deck
    }

    pub fn discard(&self) -> &[Card] {
        &self.piles.discard
    }

    pub fn hands(&self) -> &[Hand] {
        &self.hands
    }

    /// The hand of the player whose turn it is.
    pub fn hand(&self) -> &Hand {
        &self.hands[self.current_player]
    }

    pub fn current_player(&self) -> usize {
        self.current_player
    }

    pub fn num_players(&self) -> usize {
        self.players.len()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The score posted by the player who went out, if anyone did yet.
    pub fn go_out_score(&self) -> Option<i32> {
        match self.phase {
            Phase::FinalCountdown { go_out_score, .. } => Some(go_out_score),
            _ => None,
        }
    }

    /// Number of cards in the deck, the discard pile and all hands.
    pub fn num_cards(&self) -> usize {
        self.piles.len() + self.hands.len() * HAND_SIZE
    }
}

fn check_player_count(num_players: usize) -> Result<(), SetupError> {
    if num_players < 2 || num_players * HAND_SIZE > CARDS_PER_DECK * DECKS {
        Err(SetupError::InvalidPlayerCount { num_players })
    } else {
        Ok(())
    }
}
