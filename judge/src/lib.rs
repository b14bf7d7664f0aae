mod contestant;
mod recording;
mod tournament;
pub use contestant::*;
pub use recording::*;
pub use tournament::*;
