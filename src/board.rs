use std::fmt::{Display, Formatter};
use std::ops::{Index, IndexMut};

/// One of the two players, identified by the color of their chips.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Player {
    Black,
    White,
}

/// The absolute outcome for a game.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Outcome {
    WonBy(Player),
    Draw,
}

/// Error returned when a move is requested for a player that has no legal move.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct NoLegalMoves(pub Player);

/// The number of chips each player has on the board.
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Score([u8; 2]);

impl Player {
    pub const BOTH: [Player; 2] = [Player::Black, Player::White];

    pub fn other(self) -> Player {
        match self {
            Player::Black => Player::White,
            Player::White => Player::Black,
        }
    }

    pub fn index(self) -> u8 {
        match self {
            Player::Black => 0,
            Player::White => 1,
        }
    }

    pub fn to_char(self) -> char {
        match self {
            Player::Black => 'x',
            Player::White => 'o',
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Player::Black => "black",
            Player::White => "white",
        }
    }
}

impl Score {
    pub fn new(black: u8, white: u8) -> Self {
        Score([black, white])
    }

    /// The total number of chips on the board.
    pub fn total(self) -> u8 {
        self.0[0] + self.0[1]
    }

    /// The outcome if the game ended with these counts.
    pub fn winner(self) -> Outcome {
        let black = self[Player::Black];
        let white = self[Player::White];

        if black > white {
            Outcome::WonBy(Player::Black)
        } else if white > black {
            Outcome::WonBy(Player::White)
        } else {
            Outcome::Draw
        }
    }

    /// The absolute difference between both counts.
    pub fn margin(self) -> u8 {
        self.0[0].abs_diff(self.0[1])
    }
}

impl Index<Player> for Score {
    type Output = u8;

    fn index(&self, player: Player) -> &u8 {
        &self.0[player.index() as usize]
    }
}

impl IndexMut<Player> for Score {
    fn index_mut(&mut self, player: Player) -> &mut u8 {
        &mut self.0[player.index() as usize]
    }
}

impl Display for Player {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl Display for Score {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "black {} - white {}", self[Player::Black], self[Player::White])
    }
}

impl Display for NoLegalMoves {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} has no legal moves", self.0)
    }
}

impl std::error::Error for NoLegalMoves {}
