use std::fmt::{Display, Formatter};

use nom::Finish;

use crate::board::Player;
use crate::util::coord::Coord8;

/// What the human wants to do on their turn.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum PlayerCommand {
    PlayMove(Coord8),
    RequestExit,
    ToggleHints,
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct InvalidInput(pub String);

impl PlayerCommand {
    /// Parse a line of input: a coordinate like `c4`, `quit` to stop or `hints` to toggle move hints.
    /// Matching is case-insensitive and ignores surrounding whitespace.
    pub fn parse(input: &str) -> Result<PlayerCommand, InvalidInput> {
        parse_full(input, parse::command)
    }
}

/// Parse a color choice, `black` or `white`.
pub fn parse_color(input: &str) -> Result<Player, InvalidInput> {
    parse_full(input, parse::color)
}

/// Parse an answer to a yes/no question.
pub fn parse_yes_no(input: &str) -> Result<bool, InvalidInput> {
    parse_full(input, parse::yes_no)
}

fn parse_full<T>(input: &str, parser: fn(&str) -> nom::IResult<&str, T>) -> Result<T, InvalidInput> {
    let cleaned = input.trim().to_lowercase();
    let result = parse::complete(parser)(cleaned.as_str()).finish();
    result.map(|(_, value)| value).map_err(|_| InvalidInput(input.to_owned()))
}

mod parse {
    use nom::branch::alt;
    use nom::bytes::complete::tag;
    use nom::character::complete::one_of;
    use nom::combinator::{eof, map, value};
    use nom::sequence::{terminated, tuple};
    use nom::IResult;

    use super::*;

    pub fn complete<'a, T>(
        parser: fn(&'a str) -> IResult<&'a str, T>,
    ) -> impl FnMut(&'a str) -> IResult<&'a str, T> {
        terminated(parser, eof)
    }

    pub fn coord(input: &str) -> IResult<&str, Coord8> {
        map(tuple((one_of("abcdefgh"), one_of("12345678"))), |(col, row)| {
            Coord8::from_xy(col as u8 - b'a', row as u8 - b'1')
        })(input)
    }

    pub fn command(input: &str) -> IResult<&str, PlayerCommand> {
        // longer keywords first, `alt` commits to the first match
        alt((
            map(coord, PlayerCommand::PlayMove),
            value(PlayerCommand::RequestExit, alt((tag("quit"), tag("exit"), tag("q")))),
            value(PlayerCommand::ToggleHints, alt((tag("hints"), tag("hint"), tag("h")))),
        ))(input)
    }

    pub fn color(input: &str) -> IResult<&str, Player> {
        alt((
            value(Player::Black, alt((tag("black"), tag("b"), tag("x")))),
            value(Player::White, alt((tag("white"), tag("w"), tag("o")))),
        ))(input)
    }

    pub fn yes_no(input: &str) -> IResult<&str, bool> {
        alt((
            value(true, alt((tag("yes"), tag("y")))),
            value(false, alt((tag("no"), tag("n")))),
        ))(input)
    }
}

impl Display for InvalidInput {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "could not understand {:?}", self.0.trim())
    }
}
