use std::fmt::Debug;

use crate::board::{NoLegalMoves, Player};
use crate::reversi::ReversiBoard;
use crate::util::coord::Coord8;

pub mod greedy;
pub mod simple;

pub trait Bot: Debug {
    /// Pick a move for `player` to play on `board`.
    /// Returns [NoLegalMoves] if `player` has to pass, callers are expected to check this first.
    ///
    /// `self` is mutable to allow for random state, this method is not supposed to
    /// modify `self` in any other significant way.
    fn select_move(&mut self, board: &ReversiBoard, player: Player) -> Result<Coord8, NoLegalMoves>;
}

impl<F: FnMut(&ReversiBoard, Player) -> Result<Coord8, NoLegalMoves> + Debug> Bot for F {
    fn select_move(&mut self, board: &ReversiBoard, player: Player) -> Result<Coord8, NoLegalMoves> {
        self(board, player)
    }
}
