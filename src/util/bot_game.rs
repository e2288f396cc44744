//! Utilities to run bots against each other and report the results.
use std::fmt::Write;
use std::fmt::{Debug, Formatter};
use std::time::Instant;

use crate::ai::Bot;
use crate::board::{Outcome, Player, Score};
use crate::reversi::ReversiBoard;
use crate::util::coord::Coord8;
use crate::wdl::{Flip, POV, WDL};

/// A single move in a replay, `None` when the player had to pass.
pub type ReplayMove = (Player, Option<Coord8>);

/// Run `bot_l` against `bot_r` on the standard start position.
///
/// `games_per_side` games are run, except if `both_sides` is true, in
/// which case a match consists of two games where players switch sides.
/// Black always moves first.
///
/// `callback` is called after each game with the running tally from the POV of `bot_l`.
///
/// Panics if `games_per_side` is zero, the averages in the result would be meaningless.
#[must_use]
pub fn run<L: Bot, R: Bot>(
    mut bot_l: L,
    mut bot_r: R,
    games_per_side: u32,
    both_sides: bool,
    callback: impl Fn(WDL<u32>, &Replay),
) -> BotGameResult {
    assert!(games_per_side > 0, "Need to play at least one game per side");

    let debug_l = debug_to_string(&bot_l);
    let debug_r = debug_to_string(&bot_r);

    let game_count = if both_sides { 2 * games_per_side } else { games_per_side };

    let mut partial_wdl = WDL::<u32>::default();
    let mut replays = vec![];

    for game_i in 0..game_count {
        let flip = both_sides && game_i % 2 == 1;
        let player_l = if flip { Player::White } else { Player::Black };

        let replay = play_single_game(player_l, &mut bot_l, &mut bot_r);

        partial_wdl += replay.outcome.pov(player_l).to_wdl();
        callback(partial_wdl, &replay);

        replays.push(replay);
    }

    let total_time_l = replays.iter().map(|r| r.total_time_l).sum::<f32>();
    let total_time_r = replays.iter().map(|r| r.total_time_r).sum::<f32>();
    let move_count_l = replays.iter().map(|r| r.move_count_l).sum::<u32>();
    let move_count_r = replays.iter().map(|r| r.move_count_r).sum::<u32>();

    BotGameResult {
        game_count,
        average_game_length: replays.iter().map(|r| r.moves.len() as f32).sum::<f32>() / game_count as f32,
        wdl_l: partial_wdl,
        time_l: total_time_l / move_count_l as f32,
        time_r: total_time_r / move_count_r as f32,
        debug_l,
        debug_r,
        replays,
    }
}

/// Play a single game from the start position, with `bot_l` playing `player_l`.
pub fn play_single_game(player_l: Player, bot_l: &mut impl Bot, bot_r: &mut impl Bot) -> Replay {
    let mut board = ReversiBoard::default();
    let mut next = Player::Black;

    let mut total_time_l = 0.0;
    let mut total_time_r = 0.0;
    let mut move_count_l: u32 = 0;
    let mut move_count_r: u32 = 0;
    let mut moves = vec![];

    loop {
        if let Some(outcome) = board.outcome() {
            return Replay {
                player_l,
                moves,
                outcome,
                score: board.score(),
                total_time_l,
                total_time_r,
                move_count_l,
                move_count_r,
            };
        }

        if !board.has_legal_move(next) {
            moves.push((next, None));
            next = next.other();
            continue;
        }

        let start_time = Instant::now();
        let result = if next == player_l {
            let result = bot_l.select_move(&board, next);
            total_time_l += start_time.elapsed().as_secs_f32();
            move_count_l += 1;
            result
        } else {
            let result = bot_r.select_move(&board, next);
            total_time_r += start_time.elapsed().as_secs_f32();
            move_count_r += 1;
            result
        };

        // the bots only fail when there are no moves, and we just checked that there are
        let mv = match result {
            Ok(mv) => mv,
            Err(e) => unreachable!("{} on {}", e, board),
        };
        assert!(board.apply_move(next, mv), "bot played illegal move {} on {}", mv, board);

        moves.push((next, Some(mv)));
        next = next.other();
    }
}

#[derive(Debug, Clone)]
pub struct Replay {
    pub player_l: Player,

    pub moves: Vec<ReplayMove>,
    pub outcome: Outcome,
    pub score: Score,

    pub total_time_l: f32,
    pub total_time_r: f32,
    pub move_count_l: u32,
    pub move_count_r: u32,
}

/// Structure returned by the function [`run`].
pub struct BotGameResult {
    pub game_count: u32,
    pub replays: Vec<Replay>,

    pub average_game_length: f32,
    pub wdl_l: WDL<u32>,

    //time per move in seconds
    pub time_l: f32,
    pub time_r: f32,

    pub debug_l: String,
    pub debug_r: String,
}

impl BotGameResult {
    pub fn wdl_r(&self) -> WDL<u32> {
        self.wdl_l.flip()
    }
}

impl Debug for BotGameResult {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "BotGameResult {{")?;
        writeln!(
            f,
            "  {} games, average length {}",
            self.game_count, self.average_game_length
        )?;
        writeln!(f, "  left      {:?}", self.wdl_l)?;
        writeln!(f, "  right     {:?}", self.wdl_r())?;
        writeln!(f, "  time_l:   {:.4}, time_r: {:.4}", self.time_l, self.time_r)?;
        writeln!(f, "  left:     {}", self.debug_l)?;
        writeln!(f, "  right:    {}", self.debug_r)?;
        writeln!(f, "}}")?;

        Ok(())
    }
}

fn debug_to_string(d: &impl Debug) -> String {
    let mut s = String::new();
    write!(&mut s, "{:?}", d).unwrap();
    s
}
