pub use cards::*;
pub use errors::*;
pub use game::*;
pub use hand::*;
pub use piles::*;
pub use player::*;
pub use settlement::*;
pub use visualization::*;

#[cfg(test)]
mod arbitrary;
mod cards;
mod errors;
mod game;
mod hand;
mod piles;
mod player;
mod settlement;
mod visualization;
