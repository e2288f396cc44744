use crate::board::{Outcome, Player, Score};
use crate::util::coord::Coord8;

const AREA: usize = 8 * 8;

/// The full Reversi board state: which player, if any, occupies each tile.
///
/// The side to move is not part of the board, callers pass the player explicitly to every operation.
#[derive(Clone, Eq, PartialEq, Hash)]
pub struct ReversiBoard {
    pub(super) tiles: [Option<Player>; AREA],
}

/// A copy of a board with the legal moves for some player marked, only used for display.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct HintBoard {
    pub(super) tiles: [HintTile; AREA],
    pub(super) player: Player,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum HintTile {
    Empty,
    Chip(Player),
    Hint,
}

impl Default for ReversiBoard {
    fn default() -> Self {
        ReversiBoard::new()
    }
}

impl ReversiBoard {
    pub const SIZE: u8 = 8;
    pub const AREA: u8 = Self::SIZE * Self::SIZE;

    /// The standard start position, with the center 2x2 block seeded diagonally.
    pub fn new() -> Self {
        let mut board = Self::empty();
        board.set_tile(Coord8::from_xy(3, 3), Some(Player::White));
        board.set_tile(Coord8::from_xy(4, 4), Some(Player::White));
        board.set_tile(Coord8::from_xy(3, 4), Some(Player::Black));
        board.set_tile(Coord8::from_xy(4, 3), Some(Player::Black));
        board
    }

    pub fn empty() -> Self {
        ReversiBoard {
            tiles: [None; AREA],
        }
    }

    pub fn tile(&self, coord: Coord8) -> Option<Player> {
        self.tiles[coord.index() as usize]
    }

    /// Overwrite a single tile without checking any rules. Only meant to set up positions,
    /// during play use [ReversiBoard::apply_move].
    pub fn set_tile(&mut self, coord: Coord8, tile: Option<Player>) {
        self.tiles[coord.index() as usize] = tile;
    }

    pub fn empty_count(&self) -> u8 {
        self.tiles.iter().filter(|t| t.is_none()).count() as u8
    }

    pub fn is_full(&self) -> bool {
        self.tiles.iter().all(|t| t.is_some())
    }

    /// Count the chips of each player.
    pub fn score(&self) -> Score {
        let mut score = Score::default();
        for &player in self.tiles.iter().flatten() {
            score[player] += 1;
        }
        score
    }

    /// The outcome of the game, `None` as long as either player still has a legal move.
    pub fn outcome(&self) -> Option<Outcome> {
        if Player::BOTH.iter().any(|&p| self.has_legal_move(p)) {
            None
        } else {
            Some(self.score().winner())
        }
    }

    pub fn is_done(&self) -> bool {
        self.outcome().is_some()
    }

    /// Build the display-only view with the legal moves of `player` marked.
    pub fn hint_view(&self, player: Player) -> HintBoard {
        let mut tiles = [HintTile::Empty; AREA];
        for (tile, &curr) in tiles.iter_mut().zip(self.tiles.iter()) {
            if let Some(owner) = curr {
                *tile = HintTile::Chip(owner);
            }
        }
        for mv in self.legal_moves(player) {
            tiles[mv.index() as usize] = HintTile::Hint;
        }
        HintBoard { tiles, player }
    }
}

impl HintBoard {
    pub fn tile(&self, coord: Coord8) -> HintTile {
        self.tiles[coord.index() as usize]
    }

    pub fn player(&self) -> Player {
        self.player
    }

    pub fn hint_count(&self) -> usize {
        self.tiles.iter().filter(|&&t| t == HintTile::Hint).count()
    }
}
