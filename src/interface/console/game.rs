use std::io::{BufRead, Write};

use rand::Rng;

use crate::ai::Bot;
use crate::board::{Outcome, Player};
use crate::interface::console::{parse_color, parse_yes_no, PlayerCommand};
use crate::reversi::{coord_to_str, ReversiBoard};

/// One of the two participants in a console game.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Side {
    Human,
    Computer,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct ConsoleSettings {
    /// Whether to mark the legal moves on the board shown to the human, can be toggled during the game.
    pub show_hints: bool,
    /// Who moves first in every game, `None` to pick randomly each game.
    pub first: Option<Side>,
}

impl Default for ConsoleSettings {
    fn default() -> Self {
        ConsoleSettings {
            show_hints: false,
            first: None,
        }
    }
}

/// A session of one or more games between a human on the console and `bot`.
#[derive(Debug)]
pub struct ConsoleGame<B: Bot, R: Rng> {
    settings: ConsoleSettings,
    bot: B,
    rng: R,
}

/// How a single game ended.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
enum GameEnd {
    Finished,
    Exit,
}

/// Reads lines from `input` and echoes each of them to `log`, `None` once the input is exhausted.
struct Lines<I: BufRead, L: Write> {
    input: I,
    log: L,
}

impl<I: BufRead, L: Write> Lines<I, L> {
    fn next_line(&mut self) -> std::io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.log, "# end of input")?;
            return Ok(None);
        }

        let line = line.trim_end().to_owned();
        writeln!(self.log, "> {}", line)?;
        self.log.flush()?;
        Ok(Some(line))
    }
}

impl<B: Bot, R: Rng> ConsoleGame<B, R> {
    /// `rng` is only used to decide who moves first, any randomness in `bot` is its own.
    pub fn new(settings: ConsoleSettings, bot: B, rng: R) -> Self {
        ConsoleGame { settings, bot, rng }
    }

    pub fn settings(&self) -> &ConsoleSettings {
        &self.settings
    }

    /// Run games until the human quits or `input` runs out.
    pub fn run(&mut self, input: impl BufRead, mut output: impl Write, log: impl Write) -> std::io::Result<()> {
        let mut lines = Lines { input, log };

        writeln!(output, "Welcome to Reversi!")?;

        loop {
            let human = loop {
                write!(output, "Do you want to play black (x) or white (o)? ")?;
                output.flush()?;

                match lines.next_line()? {
                    None => return Ok(()),
                    Some(line) => {
                        if let Ok(player) = parse_color(&line) {
                            break player;
                        }
                    }
                }
            };

            if self.play_game(human, &mut lines, &mut output)? == GameEnd::Exit {
                writeln!(output, "Thanks for playing!")?;
                return Ok(());
            }

            let again = loop {
                write!(output, "Do you want to play again? (yes or no) ")?;
                output.flush()?;

                match lines.next_line()? {
                    None => return Ok(()),
                    Some(line) => {
                        if let Ok(again) = parse_yes_no(&line) {
                            break again;
                        }
                    }
                }
            };

            if !again {
                writeln!(output, "Thanks for playing!")?;
                return Ok(());
            }
        }
    }

    fn play_game<I: BufRead, L: Write>(
        &mut self,
        human: Player,
        lines: &mut Lines<I, L>,
        output: &mut impl Write,
    ) -> std::io::Result<GameEnd> {
        let computer = human.other();
        let first = match self.settings.first {
            Some(side) => side,
            None if self.rng.gen() => Side::Human,
            None => Side::Computer,
        };

        let mut board = ReversiBoard::new();
        let mut next = match first {
            Side::Human => human,
            Side::Computer => computer,
        };

        match first {
            Side::Human => writeln!(output, "You play {} and go first.", human)?,
            Side::Computer => writeln!(output, "You play {}, the computer goes first.", human)?,
        }
        writeln!(lines.log, "# new game, human {}, first {:?}", human, first)?;

        while board.outcome().is_none() {
            if !board.has_legal_move(next) {
                let who = if next == human { "You have" } else { "The computer has" };
                writeln!(output, "{} no legal moves and must pass.", who)?;
                next = next.other();
                continue;
            }

            if next == human {
                if self.settings.show_hints {
                    write!(output, "\n{}", board.hint_view(human))?;
                } else {
                    write!(output, "\n{}", board)?;
                }
                write_score(output, &board, human)?;

                write!(output, "Your move (a1-h8, hints to toggle hints, quit to exit): ")?;
                output.flush()?;

                let line = match lines.next_line()? {
                    None => return Ok(GameEnd::Exit),
                    Some(line) => line,
                };

                match PlayerCommand::parse(&line) {
                    Err(e) => {
                        writeln!(output, "Invalid input, {}.", e)?;
                        continue;
                    }
                    Ok(PlayerCommand::RequestExit) => return Ok(GameEnd::Exit),
                    Ok(PlayerCommand::ToggleHints) => {
                        self.settings.show_hints = !self.settings.show_hints;
                        continue;
                    }
                    Ok(PlayerCommand::PlayMove(mv)) => {
                        if !board.apply_move(human, mv) {
                            writeln!(output, "You cannot play {}.", coord_to_str(mv))?;
                            continue;
                        }
                    }
                }
            } else {
                let mv = self
                    .bot
                    .select_move(&board, computer)
                    .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?;

                if !board.apply_move(computer, mv) {
                    let msg = format!("bot selected illegal move {}", coord_to_str(mv));
                    return Err(std::io::Error::new(std::io::ErrorKind::Other, msg));
                }

                writeln!(output, "The computer plays {}.", coord_to_str(mv))?;
                writeln!(lines.log, "< {}", coord_to_str(mv))?;
            }

            next = next.other();
        }

        write!(output, "\n{}", board)?;
        write_result(output, &board, human)?;
        writeln!(lines.log, "# game over, {}", board.score())?;

        Ok(GameEnd::Finished)
    }
}

fn write_score(output: &mut impl Write, board: &ReversiBoard, human: Player) -> std::io::Result<()> {
    let score = board.score();
    writeln!(
        output,
        "You ({}) have {} chips, the computer ({}) has {}.",
        human,
        score[human],
        human.other(),
        score[human.other()]
    )
}

fn write_result(output: &mut impl Write, board: &ReversiBoard, human: Player) -> std::io::Result<()> {
    let score = board.score();
    writeln!(
        output,
        "Black scored {} points, white scored {} points.",
        score[Player::Black],
        score[Player::White]
    )?;

    match score.winner() {
        Outcome::WonBy(winner) if winner == human => writeln!(
            output,
            "You beat the computer by {} points! Congratulations!",
            score.margin()
        ),
        Outcome::WonBy(_) => writeln!(
            output,
            "You lost. The computer beat you by {} points.",
            score.margin()
        ),
        Outcome::Draw => writeln!(output, "The game was a tie!"),
    }
}
