use std::ops::ControlFlow;

use internal_iterator::InternalIterator;

use crate::board::Player;
use crate::reversi::ReversiBoard;
use crate::util::coord::{Coord8, DIRECTIONS};

/// The opponent chips that would flip if a move was played, grouped per direction
/// and ordered from the placed chip outwards. Never empty for a legal move.
pub type Captures = Vec<Coord8>;

/// Iterator over the legal moves of a player, in row-major order.
#[derive(Debug)]
pub struct AvailableMovesIterator<'a> {
    board: &'a ReversiBoard,
    player: Player,
}

impl ReversiBoard {
    /// Check whether `player` can place a chip on `coord`.
    /// Returns the chips that would be captured, or `None` if the move is illegal.
    pub fn check_move(&self, player: Player, coord: Coord8) -> Option<Captures> {
        if self.tile(coord).is_some() {
            return None;
        }

        let mut captures = Captures::new();

        for dir in DIRECTIONS {
            let line_start = captures.len();
            let mut curr = coord.step(dir);

            loop {
                match curr.map(|c| (c, self.tile(c))) {
                    Some((c, Some(owner))) if owner != player => {
                        captures.push(c);
                        curr = c.step(dir);
                    }
                    // closed off by our own chip, keep the line
                    Some((_, Some(_))) => break,
                    // ran into an empty tile or off the board
                    _ => {
                        captures.truncate(line_start);
                        break;
                    }
                }
            }
        }

        if captures.is_empty() {
            None
        } else {
            Some(captures)
        }
    }

    /// Same as [ReversiBoard::check_move] for raw coordinates, anything outside the board is illegal.
    pub fn check_move_xy(&self, player: Player, x: i16, y: i16) -> Option<Captures> {
        Coord8::try_from_xy(x, y).and_then(|coord| self.check_move(player, coord))
    }

    pub fn is_legal_move(&self, player: Player, coord: Coord8) -> bool {
        self.check_move(player, coord).is_some()
    }

    pub fn available_moves(&self, player: Player) -> AvailableMovesIterator {
        AvailableMovesIterator { board: self, player }
    }

    /// All legal moves for `player` in row-major order, empty if `player` has to pass.
    pub fn legal_moves(&self, player: Player) -> Vec<Coord8> {
        self.available_moves(player).collect()
    }

    pub fn has_legal_move(&self, player: Player) -> bool {
        self.available_moves(player).any(|_| true)
    }

    /// Play `coord` for `player`: place the chip and flip every captured chip.
    /// Returns `false` and leaves the board untouched if the move is illegal.
    #[must_use]
    pub fn apply_move(&mut self, player: Player, coord: Coord8) -> bool {
        match self.check_move(player, coord) {
            None => false,
            Some(captures) => {
                self.set_tile(coord, Some(player));
                for c in captures {
                    self.set_tile(c, Some(player));
                }
                true
            }
        }
    }

    /// Clone this board and apply the move on the copy, `None` if the move is illegal.
    pub fn clone_and_apply(&self, player: Player, coord: Coord8) -> Option<ReversiBoard> {
        let mut next = self.clone();
        if next.apply_move(player, coord) {
            Some(next)
        } else {
            None
        }
    }
}

impl InternalIterator for AvailableMovesIterator<'_> {
    type Item = Coord8;

    fn try_for_each<R, F>(self, mut f: F) -> ControlFlow<R>
    where
        F: FnMut(Self::Item) -> ControlFlow<R>,
    {
        for coord in Coord8::all() {
            if self.board.is_legal_move(self.player, coord) {
                f(coord)?;
            }
        }
        ControlFlow::Continue(())
    }
}
