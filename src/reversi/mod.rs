//! The Reversi (Othello) game on an 8x8 board.
//!
//! A legal move places a chip on an empty tile such that, in at least one of the 8 compass directions,
//! a contiguous line of opponent chips is closed off by a chip of the mover. All of those lines are flipped.
pub use board::*;
pub use io::*;
pub use rules::*;

mod board;
mod io;
mod rules;
