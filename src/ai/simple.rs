//! Bots that don't look at the position beyond the list of legal moves.
use std::fmt::{Debug, Formatter};

use rand::seq::SliceRandom;
use rand::Rng;

use crate::ai::Bot;
use crate::board::{NoLegalMoves, Player};
use crate::reversi::ReversiBoard;
use crate::util::coord::Coord8;

/// Bot that chooses moves randomly uniformly among possible moves.
pub struct RandomBot<R: Rng> {
    rng: R,
}

impl<R: Rng> Debug for RandomBot<R> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "RandomBot")
    }
}

impl<R: Rng> RandomBot<R> {
    pub fn new(rng: R) -> Self {
        RandomBot { rng }
    }
}

impl<R: Rng> Bot for RandomBot<R> {
    fn select_move(&mut self, board: &ReversiBoard, player: Player) -> Result<Coord8, NoLegalMoves> {
        board
            .legal_moves(player)
            .choose(&mut self.rng)
            .copied()
            .ok_or(NoLegalMoves(player))
    }
}

/// Bot that always plays the first legal move in row-major order.
#[derive(Debug, Default, Copy, Clone)]
pub struct FirstMoveBot;

impl Bot for FirstMoveBot {
    fn select_move(&mut self, board: &ReversiBoard, player: Player) -> Result<Coord8, NoLegalMoves> {
        board.legal_moves(player).first().copied().ok_or(NoLegalMoves(player))
    }
}
