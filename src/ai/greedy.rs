//! The classic computer opponent: take a corner whenever possible, otherwise maximize the chip count after the move.
use std::fmt::{Debug, Formatter};

use rand::seq::SliceRandom;
use rand::Rng;

use crate::ai::Bot;
use crate::board::{NoLegalMoves, Player};
use crate::reversi::ReversiBoard;
use crate::util::coord::Coord8;

/// One-ply greedy bot.
///
/// The legal moves are shuffled first, so `rng` decides between moves that are equally good.
/// Then the first corner move is picked if there is one, since corners can never be flipped back.
/// Otherwise each move is played on a copy of the board and the move that leaves the most chips
/// of our color on the board wins, keeping the earliest one on ties.
///
/// This does not look at the opponent's replies at all.
pub struct GreedyBot<R: Rng> {
    rng: R,
}

impl<R: Rng> Debug for GreedyBot<R> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "GreedyBot")
    }
}

impl<R: Rng> GreedyBot<R> {
    pub fn new(rng: R) -> Self {
        GreedyBot { rng }
    }
}

impl<R: Rng> Bot for GreedyBot<R> {
    fn select_move(&mut self, board: &ReversiBoard, player: Player) -> Result<Coord8, NoLegalMoves> {
        let mut moves = board.legal_moves(player);
        moves.shuffle(&mut self.rng);

        if let Some(&corner) = moves.iter().find(|mv| mv.is_corner()) {
            return Ok(corner);
        }

        let mut best: Option<(Coord8, u8)> = None;
        for mv in moves {
            let mut copy = board.clone();
            let applied = copy.apply_move(player, mv);
            debug_assert!(applied, "generated move {} must be legal", mv);

            let count = copy.score()[player];
            if best.map_or(true, |(_, best_count)| count > best_count) {
                best = Some((mv, count));
            }
        }

        best.map(|(mv, _)| mv).ok_or(NoLegalMoves(player))
    }
}
