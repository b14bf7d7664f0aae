mod greedy;
mod random;
pub use greedy::*;
pub use random::*;
