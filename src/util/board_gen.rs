//! Utilities to generate a `ReversiBoard` in a random or scripted state.
use rand::seq::SliceRandom;
use rand::Rng;

use crate::board::Player;
use crate::reversi::ReversiBoard;
use crate::util::coord::Coord8;

/// Play the given moves in order, starting from `start`.
pub fn board_with_moves(start: ReversiBoard, moves: &[(Player, Coord8)]) -> ReversiBoard {
    let mut curr = start;
    for &(player, mv) in moves {
        assert!(
            curr.apply_move(player, mv),
            "Move not available, playing {} for {} on {}",
            mv,
            player,
            curr
        );
    }
    curr
}

/// Play a random legal move for `player`, returns `false` if `player` has to pass.
pub fn play_random_available_move(board: &mut ReversiBoard, player: Player, rng: &mut impl Rng) -> bool {
    match board.legal_moves(player).choose(rng) {
        Some(&mv) => board.apply_move(player, mv),
        None => false,
    }
}

/// Generate a board by alternately playing random moves starting with black, skipping players that have to pass.
/// Stops early when the game is over, so the result may have fewer than `n` chips added.
/// Returns the board and the player that would move next.
pub fn random_board_with_moves(start: &ReversiBoard, n: u32, rng: &mut impl Rng) -> (ReversiBoard, Player) {
    let mut board = start.clone();
    let mut next = Player::Black;

    for _ in 0..n {
        if !play_random_available_move(&mut board, next, rng) {
            next = next.other();
            if !play_random_available_move(&mut board, next, rng) {
                break;
            }
        }
        next = next.other();
    }

    (board, next)
}

/// Generate a board by playing random moves until `cond(&board)` returns true.
/// Restarts from `start` every time a game ends without matching.
pub fn random_board_with_condition(
    start: &ReversiBoard,
    rng: &mut impl Rng,
    mut cond: impl FnMut(&ReversiBoard) -> bool,
) -> ReversiBoard {
    if cond(start) {
        return start.clone();
    }
    assert!(
        !start.is_done(),
        "Start board is done and does not match condition, so we won't find anything that does"
    );

    loop {
        let mut board = start.clone();
        let mut next = Player::Black;

        while !board.is_done() {
            if !play_random_available_move(&mut board, next, rng) {
                next = next.other();
                continue;
            }
            if cond(&board) {
                return board;
            }
            next = next.other();
        }
    }
}
