use std::fmt::{Debug, Display, Formatter};

use itertools::Itertools;

use crate::board::Player;
use crate::reversi::{HintBoard, HintTile, ReversiBoard};
use crate::util::coord::Coord8;

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct InvalidCoord(pub String);

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct InvalidBoardString {
    pub rows: String,
    pub reason: &'static str,
}

/// Format a coordinate as a column letter followed by a one-based row number, eg. `c4` for `(2, 3)`.
pub fn coord_to_str(coord: Coord8) -> String {
    format!("{}{}", (b'a' + coord.x()) as char, coord.y() + 1)
}

pub fn coord_from_str(s: &str) -> Result<Coord8, InvalidCoord> {
    let err = || InvalidCoord(s.to_owned());

    let (col, row) = match s.as_bytes() {
        &[col, row] => (col.to_ascii_lowercase(), row),
        _ => return Err(err()),
    };

    let x = col.checked_sub(b'a').ok_or_else(err)?;
    let y = row.checked_sub(b'1').ok_or_else(err)?;
    Coord8::try_from_xy(x as i16, y as i16).ok_or_else(err)
}

fn tile_to_char(tile: Option<Player>) -> char {
    match tile {
        Some(player) => player.to_char(),
        None => '.',
    }
}

fn hint_to_char(tile: HintTile) -> char {
    match tile {
        HintTile::Empty => '.',
        HintTile::Chip(player) => player.to_char(),
        HintTile::Hint => '*',
    }
}

impl ReversiBoard {
    /// Parse a board from 8 lines of 8 characters each, top row first.
    /// `x` is black, `o` is white and `.` is empty. Whitespace around lines is ignored.
    pub fn from_rows(rows: &str) -> Result<ReversiBoard, InvalidBoardString> {
        let err = |reason| InvalidBoardString {
            rows: rows.to_owned(),
            reason,
        };

        let lines = rows.trim().lines().map(str::trim).collect_vec();
        if lines.len() != ReversiBoard::SIZE as usize {
            return Err(err("Expected 8 rows"));
        }

        let mut board = ReversiBoard::empty();
        for (y, line) in lines.iter().enumerate() {
            if line.chars().count() != ReversiBoard::SIZE as usize {
                return Err(err("Expected 8 tiles per row"));
            }

            for (x, c) in line.chars().enumerate() {
                let tile = match c {
                    'x' => Some(Player::Black),
                    'o' => Some(Player::White),
                    '.' => None,
                    _ => return Err(err("Invalid character in board")),
                };
                board.set_tile(Coord8::from_xy(x as u8, y as u8), tile);
            }
        }

        Ok(board)
    }

    /// The inverse of [ReversiBoard::from_rows].
    pub fn to_rows(&self) -> String {
        (0..ReversiBoard::SIZE)
            .map(|y| {
                (0..ReversiBoard::SIZE)
                    .map(|x| tile_to_char(self.tile(Coord8::from_xy(x, y))))
                    .collect::<String>()
            })
            .join("\n")
    }
}

fn write_grid(f: &mut Formatter<'_>, tile: impl Fn(Coord8) -> char, side: &str) -> std::fmt::Result {
    write!(f, "  ")?;
    for x in 0..ReversiBoard::SIZE {
        write!(f, "{}", (b'a' + x) as char)?;
    }
    writeln!(f)?;

    for y in 0..ReversiBoard::SIZE {
        write!(f, "{} ", y + 1)?;
        for x in 0..ReversiBoard::SIZE {
            write!(f, "{}", tile(Coord8::from_xy(x, y)))?;
        }
        if y == 3 {
            write!(f, "    {}", side)?;
        }
        writeln!(f)?;
    }

    Ok(())
}

impl Debug for ReversiBoard {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "ReversiBoard(\"{}\")", self.to_rows().replace('\n', "/"))
    }
}

impl Display for ReversiBoard {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write_grid(f, |coord| tile_to_char(self.tile(coord)), &self.score().to_string())
    }
}

impl Display for HintBoard {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let side = format!("{} moves: {}", self.player, self.hint_count());
        write_grid(f, |coord| hint_to_char(self.tile(coord)), &side)
    }
}

impl Display for InvalidCoord {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid coordinate {:?}, expected a column a-h followed by a row 1-8", self.0)
    }
}
